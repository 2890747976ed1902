//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    benchmark::BenchmarkArgs, best_move::BestMoveArgs, play::PlayArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "A generalized m,n,k tic-tac-toe engine built on minimax search"
)]
pub enum TicTacToe {
    #[structopt(
        name = "play",
        about = "Play a game against the computer on an `--size` x `--size` board where `--win-length` marks in a row win. The computer searches the game tree exhaustively unless a `--depth` limit is given. Your mark is chosen at random unless you specify `--mark`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "best-move",
        about = "Determine the best move from a given position. The position is written row by row with `X`, `O` and `.` cells, rows separated by `/`, for example `XO./.X./...`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "benchmark",
        about = "Measure node counts and search time for exhaustive minimax, alpha-beta pruning without move ordering, and alpha-beta pruning with move ordering, on the empty board. Exhaustive minimax is skipped on boards larger than 3x3."
    )]
    Benchmark(BenchmarkArgs),
}

impl crate::cli::commands::Command for TicTacToe {
    fn execute(self) {
        match self {
            Self::Play(cmd) => cmd.execute(),
            Self::BestMove(cmd) => cmd.execute(),
            Self::Benchmark(cmd) => cmd.execute(),
        }
    }
}
