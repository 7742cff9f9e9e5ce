use crate::core::{Board, GameBoard, Move, Symbol};
use crate::error::GameError;
use crate::logic::{count_score, is_game_over, play_move, winner};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Attempts a player gets to produce a legal move before the game aborts.
const MAX_ILLEGAL_ATTEMPTS: usize = 3;

/// 1手分の記録。`mv == None` はパス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub symbol: Symbol,
    pub mv: Option<Move>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Option<Symbol>,
    pub x_score: usize,
    pub o_score: usize,
    /// Stones placed, passes excluded.
    pub moves: usize,
    /// Set when a side declined to move while it had legal moves.
    pub forfeited_by: Option<Symbol>,
}

/// 棋譜 (JSON保存用)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub cols: usize,
    pub rows: usize,
    pub initial: Vec<String>,
    pub turns: Vec<TurnRecord>,
    pub outcome: GameOutcome,
}

pub struct Game {
    pub board: Board,
    pub current_player: Symbol,
    pub history: Vec<TurnRecord>,
    initial: Vec<String>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            initial: board.to_strings(),
            board,
            current_player: Symbol::X,
            history: Vec::new(),
        }
    }

    /// Plays until neither side can move. A side with no legal move passes.
    pub fn play<F>(
        &mut self,
        x: &dyn PlayerController,
        o: &dyn PlayerController,
        mut on_turn: F,
    ) -> anyhow::Result<GameOutcome>
    where
        F: FnMut(&Board, &TurnRecord),
    {
        loop {
            if is_game_over(&self.board) {
                let outcome = self.outcome(None);
                log::info!(
                    "game over: X {} - O {} ({:?})",
                    outcome.x_score,
                    outcome.o_score,
                    outcome.winner
                );
                return Ok(outcome);
            }

            let symbol = self.current_player;
            if !self.board.has_legal_moves_remaining(symbol) {
                log::info!("{} has no legal move and passes", symbol);
                self.push_turn(TurnRecord { symbol, mv: None }, &mut on_turn);
                continue;
            }

            let controller = match symbol {
                Symbol::X => x,
                Symbol::O => o,
            };

            let mut attempts = 0;
            let mv = loop {
                match controller.get_move(&self.board)? {
                    None => {
                        log::info!(
                            "{} ({}) gave up with moves available",
                            controller.name(),
                            symbol
                        );
                        return Ok(self.outcome(Some(symbol)));
                    }
                    Some(mv) if self.board.is_legal_move(mv.col, mv.row, symbol) => break mv,
                    Some(mv) => {
                        attempts += 1;
                        log::warn!(
                            "{} ({}) chose illegal move {} (attempt {}/{})",
                            controller.name(),
                            symbol,
                            mv,
                            attempts,
                            MAX_ILLEGAL_ATTEMPTS
                        );
                        if attempts >= MAX_ILLEGAL_ATTEMPTS {
                            return Err(GameError::IllegalMove { symbol, mv }.into());
                        }
                    }
                }
            };

            play_move(&mut self.board, mv.col, mv.row, symbol);
            self.push_turn(TurnRecord { symbol, mv: Some(mv) }, &mut on_turn);
        }
    }

    fn push_turn<F>(&mut self, turn: TurnRecord, on_turn: &mut F)
    where
        F: FnMut(&Board, &TurnRecord),
    {
        self.history.push(turn);
        self.current_player = self.current_player.opponent();
        on_turn(&self.board, &turn);
    }

    fn outcome(&self, forfeited_by: Option<Symbol>) -> GameOutcome {
        GameOutcome {
            winner: match forfeited_by {
                Some(s) => Some(s.opponent()),
                None => winner(&self.board),
            },
            x_score: count_score(&self.board, Symbol::X),
            o_score: count_score(&self.board, Symbol::O),
            moves: self.history.iter().filter(|t| t.mv.is_some()).count(),
            forfeited_by,
        }
    }

    pub fn record(&self, outcome: GameOutcome) -> GameRecord {
        GameRecord {
            cols: self.board.cols,
            rows: self.board.rows,
            initial: self.initial.clone(),
            turns: self.history.clone(),
            outcome,
        }
    }
}

/// `dir/{prefix}_{timestamp}.json` に棋譜を保存
pub fn save_record(record: &GameRecord, dir: &Path, prefix: &str) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let filename = dir.join(format!(
        "{}_{}.json",
        prefix,
        chrono::Local::now().format("%Y%m%d_%H%M%S_%3f")
    ));

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, record)?;
    Ok(filename)
}
