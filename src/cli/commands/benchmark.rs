//! Benchmark command - measure node counts and time for each search variant.

use structopt::StructOpt;

use crate::board::Board;
use crate::game::benchmark::run_search_benchmark;

use super::Command;

#[derive(StructOpt)]
pub struct BenchmarkArgs {
    /// Board side length.
    #[structopt(short, long, default_value = "3")]
    pub size: usize,
    /// Marks in a row needed to win.
    #[structopt(short = "k", long = "win-length", default_value = "3")]
    pub win_length: usize,
    /// Also time a depth-limited search at this depth.
    #[structopt(short, long)]
    pub depth: Option<u32>,
}

impl Command for BenchmarkArgs {
    fn execute(self) {
        let board = match Board::new(self.size, self.win_length) {
            Ok(board) => board,
            Err(error) => {
                eprintln!("invalid board: {}", error);
                return;
            }
        };

        if let Err(error) = run_search_benchmark(&board, self.depth) {
            eprintln!("benchmark failed: {}", error);
        }
    }
}
