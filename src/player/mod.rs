pub mod ai;
pub mod controller;
pub mod human;

pub use ai::{AlphaBetaAI, RandomAI};
pub use controller::PlayerController;
pub use human::HumanPlayer;
