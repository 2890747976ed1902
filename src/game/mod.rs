pub mod benchmark;
pub mod engine;
pub mod game_loop;
