use structopt::StructOpt;
use tictactoe::cli::commands::Command;
use tictactoe::cli::TicTacToe;

fn main() {
    env_logger::init();
    TicTacToe::from_args().execute();
}
