//! Tic-tac-toe implementation of the generic search core's trait seams.

pub mod implementation;
mod move_orderer;


pub use implementation::{depth_limited_search, minimax, minimax_with_pruning, LineEvaluator};
pub use move_orderer::GridMoveOrderer;
