pub mod alpha_beta;
pub mod config;
pub mod evaluator;
pub mod random;

pub use alpha_beta::{AlphaBetaAI, SearchResult, SearchStats};
pub use config::{NoMovePolicy, SearchConfig, SearchSettings};
pub use evaluator::Heuristic;
pub use random::RandomAI;
