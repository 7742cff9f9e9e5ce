use crate::core::{GameBoard, Move, Symbol};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

pub struct RandomAI {
    symbol: Symbol,
    name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(symbol: Symbol, name: &str) -> Self {
        Self::from_rng(symbol, name, StdRng::from_entropy())
    }

    pub fn with_seed(symbol: Symbol, name: &str, seed: u64) -> Self {
        Self::from_rng(symbol, name, StdRng::seed_from_u64(seed))
    }

    fn from_rng(symbol: Symbol, name: &str, rng: StdRng) -> Self {
        RandomAI {
            symbol,
            name: name.to_string(),
            rng: RefCell::new(rng),
        }
    }
}

impl<B: GameBoard> PlayerController<B> for RandomAI {
    fn get_move(&self, board: &B) -> anyhow::Result<Option<Move>> {
        let mut moves = Vec::new();
        for col in 0..board.cols() {
            for row in 0..board.rows() {
                if board.is_legal_move(col, row, self.symbol) {
                    moves.push(Move::new(col, row));
                }
            }
        }
        Ok(moves.choose(&mut *self.rng.borrow_mut()).copied())
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }
}
