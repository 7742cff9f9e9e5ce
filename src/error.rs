use crate::core::{Move, Symbol};
use std::path::PathBuf;

/// Errors raised while building or loading search configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON config: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("unknown heuristic '{0}' (expected 'piece-difference', 'mobility' or 'custom')")]
    UnknownHeuristic(String),

    #[error("unknown heuristic code {0} (expected 0, 1 or 2)")]
    UnknownHeuristicCode(i64),

    #[error("search depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from the line-oriented human input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input ended before a {0} was entered")]
    UnexpectedEof(&'static str),

    #[error("malformed {field} '{line}': {source}")]
    Malformed {
        field: &'static str,
        line: String,
        source: std::num::ParseIntError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell '{ch}' at ({col}, {row})")]
    UnknownCell { ch: char, col: usize, row: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{symbol} kept choosing illegal moves (last: {mv})")]
    IllegalMove { symbol: Symbol, mv: Move },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NegativeDepth(-3);
        assert_eq!(err.to_string(), "search depth must be non-negative, got -3");
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::IllegalMove {
            symbol: Symbol::O,
            mv: Move::new(2, 5),
        };
        assert_eq!(err.to_string(), "O kept choosing illegal moves (last: (2, 5))");
    }
}
