//! The rules engine: board representation, move legality, and terminal
//! detection for generalized m×m, k-in-a-row tic-tac-toe.

pub mod board;
pub mod coord;
pub mod error;
pub mod lines;
pub mod player;

mod display;

#[cfg(test)]
mod tests;

pub use board::{Board, Cell, MoveList};
pub use coord::Coord;
pub use error::BoardError;
pub use player::Player;
