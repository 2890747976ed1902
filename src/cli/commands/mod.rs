//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod benchmark;
pub mod best_move;
pub mod play;
