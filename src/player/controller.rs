use crate::core::{Board, GameBoard, Move, Symbol};

/// プレイヤー操作のtrait
///
/// `Ok(None)` means the player passes.
pub trait PlayerController<B: GameBoard = Board> {
    fn get_move(&self, board: &B) -> anyhow::Result<Option<Move>>;
    fn symbol(&self) -> Symbol;
    fn name(&self) -> &str;
}
