//! Play command - play a game against the computer.

use structopt::StructOpt;

use crate::board::{Board, Player};
use crate::game::engine::EngineConfig;
use crate::game::game_loop::play_computer;

use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    /// Board side length.
    #[structopt(short, long, default_value = "3")]
    pub size: usize,
    /// Marks in a row needed to win.
    #[structopt(short = "k", long = "win-length", default_value = "3")]
    pub win_length: usize,
    /// Search depth limit; omit to search the full game tree.
    #[structopt(short, long)]
    pub depth: Option<u32>,
    #[structopt(short = "m", long = "mark", default_value = "random")]
    pub mark: Player,
}

impl Command for PlayArgs {
    fn execute(self) {
        let starting_position = match Board::new(self.size, self.win_length) {
            Ok(board) => board,
            Err(error) => {
                eprintln!("invalid board: {}", error);
                return;
            }
        };

        println!("You are playing as {}.", self.mark);
        play_computer(
            EngineConfig {
                search_depth: self.depth,
                starting_position,
            },
            self.mark,
        );
    }
}
