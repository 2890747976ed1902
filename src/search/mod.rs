//! Generic game-tree search core.
//!
//! The engine only sees the game through the trait seams in [`traits`]: a
//! rules oracle ([`GameState`]), a heuristic ([`Evaluator`]), and a move
//! orderer ([`MoveOrderer`]). Game-specific wiring lives in
//! [`crate::grid_search`].

pub mod engine;
pub mod instrumentation;
pub mod traits;


pub use engine::{depth_limited_search, minimax, minimax_with_pruning, SearchError, SearchOutcome};
pub use instrumentation::NodeCounter;
pub use traits::{ActionCollection, Evaluator, GameState, MoveOrderer, NoOpMoveOrderer};
