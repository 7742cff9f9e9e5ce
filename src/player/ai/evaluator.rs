//! Heuristic evaluation at the depth ceiling
//!
//! Every heuristic scores a non-terminal board from one fixed perspective
//! (`symbol`): positive is good for `symbol`, negative is good for its
//! opponent. None of them mutate the board.

use crate::core::{GameBoard, Symbol};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight of the mobility term in `Heuristic::Custom`.
const CUSTOM_MOBILITY_WEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Own stones minus opponent stones
    #[default]
    PieceDifference,
    /// Own legal moves minus opponent legal moves
    Mobility,
    /// Piece difference plus weighted mobility difference
    Custom,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::PieceDifference,
        Heuristic::Mobility,
        Heuristic::Custom,
    ];

    /// Legacy numeric selector: 0, 1 or 2.
    pub fn from_code(code: i64) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(Heuristic::PieceDifference),
            1 => Ok(Heuristic::Mobility),
            2 => Ok(Heuristic::Custom),
            other => Err(ConfigError::UnknownHeuristicCode(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::PieceDifference => "piece-difference",
            Heuristic::Mobility => "mobility",
            Heuristic::Custom => "custom",
        }
    }

    pub fn evaluate<B: GameBoard>(self, board: &B, symbol: Symbol) -> f64 {
        match self {
            Heuristic::PieceDifference => piece_difference(board, symbol),
            Heuristic::Mobility => mobility(board, symbol),
            Heuristic::Custom => {
                piece_difference(board, symbol) + CUSTOM_MOBILITY_WEIGHT * mobility(board, symbol)
            }
        }
    }
}

fn piece_difference<B: GameBoard>(board: &B, symbol: Symbol) -> f64 {
    board.count_score(symbol) as f64 - board.count_score(symbol.opponent()) as f64
}

fn mobility<B: GameBoard>(board: &B, symbol: Symbol) -> f64 {
    board.legal_move_count(symbol) as f64 - board.legal_move_count(symbol.opponent()) as f64
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "piece-difference" | "piece_difference" | "pieces" | "h0" | "0" => {
                Ok(Heuristic::PieceDifference)
            }
            "mobility" | "h1" | "1" => Ok(Heuristic::Mobility),
            "custom" | "h2" | "2" => Ok(Heuristic::Custom),
            _ => Err(ConfigError::UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn board() -> Board {
        // X: 3 stones, O: 2 stones
        Board::from_strings(&["....", ".OX.", ".XO.", "..X."]).unwrap()
    }

    #[test]
    fn test_piece_difference_is_perspective_relative() {
        let b = board();
        assert_eq!(Heuristic::PieceDifference.evaluate(&b, Symbol::X), 1.0);
        assert_eq!(Heuristic::PieceDifference.evaluate(&b, Symbol::O), -1.0);
    }

    #[test]
    fn test_mobility_counts_moves() {
        let b = board();
        let expected = b.legal_move_count(Symbol::X) as f64 - b.legal_move_count(Symbol::O) as f64;
        assert_eq!(Heuristic::Mobility.evaluate(&b, Symbol::X), expected);
        assert_eq!(Heuristic::Mobility.evaluate(&b, Symbol::O), -expected);
    }

    #[test]
    fn test_custom_combines_terms() {
        let b = board();
        let pd = Heuristic::PieceDifference.evaluate(&b, Symbol::X);
        let mob = Heuristic::Mobility.evaluate(&b, Symbol::X);
        assert_eq!(Heuristic::Custom.evaluate(&b, Symbol::X), pd + 2.0 * mob);
    }

    #[test]
    fn test_evaluation_does_not_mutate() {
        let b = board();
        let before = b.clone();
        for h in Heuristic::ALL {
            h.evaluate(&b, Symbol::O);
        }
        assert_eq!(b, before);
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("mobility".parse::<Heuristic>().unwrap(), Heuristic::Mobility);
        assert_eq!("H2".parse::<Heuristic>().unwrap(), Heuristic::Custom);
        assert!(matches!(
            "corners".parse::<Heuristic>(),
            Err(ConfigError::UnknownHeuristic(_))
        ));
        assert_eq!(Heuristic::from_code(0).unwrap(), Heuristic::PieceDifference);
        assert!(matches!(
            Heuristic::from_code(3),
            Err(ConfigError::UnknownHeuristicCode(3))
        ));
    }
}
