pub mod board;
pub mod r#move;
pub mod types;

pub use board::{Board, GameBoard};
pub use r#move::Move;
pub use types::Symbol;
