pub mod board;
pub mod cli;
pub mod evaluate;
pub mod game;
pub mod grid_search;
pub mod input_handler;
pub mod search;
