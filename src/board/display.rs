use std::fmt;

use super::board::Board;
use super::coord::Coord;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            let cells: Vec<String> = (0..self.size())
                .map(|col| match self.get(Coord::new(row, col)) {
                    Some(player) => player.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Builds a [`Board`] from a literal cell layout, for tests and examples.
/// The first argument is the win length; the remaining tokens are `X`, `O`,
/// or `.` cells of a square grid, row by row.
///
/// ```
/// use tictactoe::grid_position;
///
/// let board = grid_position! { 3,
///     X X .
///     . O .
///     . . O
/// };
/// assert_eq!(board.size(), 3);
/// ```
#[macro_export]
macro_rules! grid_position {
    ($win_length:expr, $($cell:tt)+) => {{
        let cells: Vec<char> = stringify!($($cell)+)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let size = (cells.len() as f64).sqrt() as usize;
        assert_eq!(
            size * size,
            cells.len(),
            "grid must be square, got {} cells",
            cells.len()
        );
        let mut board = $crate::board::Board::new(size, $win_length).unwrap();
        for (i, &c) in cells.iter().enumerate() {
            let coord = $crate::board::Coord::new(i / size, i % size);
            match c {
                'X' => board.put(coord, $crate::board::Player::X).unwrap(),
                'O' => board.put(coord, $crate::board::Player::O).unwrap(),
                '.' => (),
                _ => panic!("invalid character `{}` in grid position", c),
            }
        }
        board
    }};
}
