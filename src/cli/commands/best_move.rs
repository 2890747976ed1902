//! Best move command - determine the best move from a position.

use structopt::StructOpt;

use crate::board::Board;
use crate::grid_search::{depth_limited_search, minimax_with_pruning, LineEvaluator};
use crate::search::NodeCounter;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    /// Position written row by row, e.g. `XO./.X./...`.
    #[structopt(short, long)]
    pub position: String,
    /// Marks in a row needed to win.
    #[structopt(short = "k", long = "win-length", default_value = "3")]
    pub win_length: usize,
    /// Search depth limit; omit to search the full game tree.
    #[structopt(short, long)]
    pub depth: Option<u32>,
    /// Explore moves in natural row-major order instead of ordering them.
    #[structopt(long = "no-ordering")]
    pub no_ordering: bool,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let board = match Board::parse(&self.position, self.win_length) {
            Ok(board) => board,
            Err(error) => {
                eprintln!("invalid position: {}", error);
                return;
            }
        };

        let use_ordering = !self.no_ordering;
        let mut counter = NodeCounter::new();
        let result = match self.depth {
            None => minimax_with_pruning(&board, &mut counter, use_ordering),
            Some(depth) => {
                depth_limited_search(&board, depth, &LineEvaluator, &mut counter, use_ordering)
            }
        };

        match result {
            Ok(outcome) => match outcome.action {
                Some(action) => println!(
                    "best move: {} (value {}, nodes visited {})",
                    action,
                    outcome.value,
                    counter.count()
                ),
                None => println!("the game is already over (value {})", outcome.value),
            },
            Err(error) => eprintln!("search failed: {}", error),
        }
    }
}
