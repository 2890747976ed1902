//! Positional evaluation for depth-limited search.
//!
//! Scores a position by scanning every potential win window (each k-length
//! segment of a row, column, or diagonal). Windows contested by both players
//! are worth nothing; an uncontested window scores exponentially in the
//! number of marks it holds, so near-complete threats dominate. The sign
//! convention matches the search engine: positive favors X, the maximizer.

use crate::board::{Board, Player};

/// Returns the positional score of a non-terminal position. Normalized by
/// the window count so boards of different sizes score on a comparable scale.
pub fn score(board: &Board) -> f64 {
    let win_length = board.win_length();
    let mut total = 0.0;
    let mut windows = 0u32;

    for line in board.lines() {
        for window in line.windows(win_length) {
            let x_count = window
                .iter()
                .filter(|&&coord| board.get(coord) == Some(Player::X))
                .count();
            let o_count = window
                .iter()
                .filter(|&&coord| board.get(coord) == Some(Player::O))
                .count();
            total += window_value(x_count, o_count);
            windows += 1;
        }
    }

    if windows == 0 {
        0.0
    } else {
        total / f64::from(windows)
    }
}

/// An uncontested window with n marks is worth 10^n, negated for O.
fn window_value(x_count: usize, o_count: usize) -> f64 {
    match (x_count, o_count) {
        (0, 0) => 0.0,
        (x, 0) => 10f64.powi(x as i32),
        (0, o) => -(10f64.powi(o as i32)),
        _ => 0.0,
    }
}
