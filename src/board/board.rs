use std::sync::Arc;

use smallvec::SmallVec;

use super::coord::Coord;
use super::error::BoardError;
use super::lines;
use super::player::Player;

/// A single cell: occupied by a mark or empty.
pub type Cell = Option<Player>;

/// Legal-move list. Boards up to 5×5 stay on the stack.
pub type MoveList = SmallVec<[Coord; 25]>;

/// An immutable generalized tic-tac-toe position: a `size`×`size` grid won by
/// `win_length` consecutive marks along any row, column, or diagonal.
///
/// [`Board::apply`] returns a new board rather than mutating in place, so a
/// search can explore sibling subtrees without undo bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Cell>,
    // Win lines depend only on the dimensions; shared across all boards
    // derived from the same root so `apply` stays cheap.
    lines: Arc<Vec<Vec<Coord>>>,
}

impl Board {
    /// Creates an empty board. `win_length` must be between 1 and `size`.
    pub fn new(size: usize, win_length: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        if win_length == 0 || win_length > size {
            return Err(BoardError::InvalidWinLength { win_length, size });
        }
        Ok(Self::empty(size, win_length))
    }

    fn empty(size: usize, win_length: usize) -> Self {
        Self {
            size,
            win_length,
            cells: vec![None; size * size],
            lines: Arc::new(lines::all_lines(size)),
        }
    }

    /// Parses a position from rows separated by `/` or whitespace, with cells
    /// written as `X`, `O`, or `.` (lowercase accepted), e.g. `XO./.X./..O`.
    pub fn parse(text: &str, win_length: usize) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(BoardError::EmptyPosition);
        }

        let size = rows.len();
        let mut board = Board::new(size, win_length)?;
        for (row, row_text) in rows.iter().enumerate() {
            let got = row_text.chars().count();
            if got != size {
                return Err(BoardError::RaggedRow {
                    row,
                    got,
                    expected: size,
                });
            }
            for (col, character) in row_text.chars().enumerate() {
                let mark = match character {
                    'X' | 'x' => Some(Player::X),
                    'O' | 'o' => Some(Player::O),
                    '.' => None,
                    _ => {
                        return Err(BoardError::InvalidCellCharacter {
                            character,
                            row,
                            col,
                        })
                    }
                };
                if let Some(player) = mark {
                    board.put(Coord::new(row, col), player)?;
                }
            }
        }

        let x_count = board.count_marks(Player::X);
        let o_count = board.count_marks(Player::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(BoardError::InvalidMarkCounts { x_count, o_count });
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// The mark occupying `coord`, or `None` for an empty cell.
    ///
    /// Panics if `coord` is out of bounds.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Places `player`'s mark without consulting whose turn it is. Position
    /// setup only; game play goes through [`Board::apply`].
    pub fn put(&mut self, coord: Coord, player: Player) -> Result<(), BoardError> {
        self.check_vacant(coord)?;
        let index = self.index(coord);
        self.cells[index] = Some(player);
        Ok(())
    }

    /// The side to move. X moves first, so X is on turn whenever the mark
    /// counts are equal.
    pub fn to_move(&self) -> Player {
        if self.count_marks(Player::X) == self.count_marks(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Empty cells in row-major (natural ascending) order.
    pub fn legal_moves(&self) -> MoveList {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Coord::new(row, col)))
            .filter(|&coord| self.get(coord).is_none())
            .collect()
    }

    /// Returns a new board with the side to move's mark placed at `coord`.
    pub fn apply(&self, coord: Coord) -> Result<Self, BoardError> {
        self.check_vacant(coord)?;
        let mut next = self.clone();
        let index = next.index(coord);
        next.cells[index] = Some(self.to_move());
        Ok(next)
    }

    /// The first player holding `win_length` consecutive marks on any line.
    pub fn winner(&self) -> Option<Player> {
        for line in self.lines.iter() {
            for window in line.windows(self.win_length) {
                if let Some(player) = self.window_winner(window) {
                    return Some(player);
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// `Some(1)` if X has won, `Some(-1)` if O has won, `Some(0)` for a full
    /// board draw, `None` while the game is still in progress.
    pub fn terminal_utility(&self) -> Option<i8> {
        match self.winner() {
            Some(Player::X) => Some(1),
            Some(Player::O) => Some(-1),
            None if self.is_full() => Some(0),
            None => None,
        }
    }

    /// The compact form accepted by [`Board::parse`]: rows separated by `/`,
    /// cells `X`, `O`, or `.`.
    pub fn position_string(&self) -> String {
        let rows: Vec<String> = (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| match self.get(Coord::new(row, col)) {
                        Some(Player::X) => 'X',
                        Some(Player::O) => 'O',
                        None => '.',
                    })
                    .collect()
            })
            .collect();
        rows.join("/")
    }

    /// Maximal win lines of this board's geometry.
    pub fn lines(&self) -> &[Vec<Coord>] {
        &self.lines
    }

    pub fn count_marks(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    fn window_winner(&self, window: &[Coord]) -> Option<Player> {
        let first = self.get(window[0])?;
        if window.iter().all(|&coord| self.get(coord) == Some(first)) {
            Some(first)
        } else {
            None
        }
    }

    fn check_vacant(&self, coord: Coord) -> Result<(), BoardError> {
        if coord.row >= self.size || coord.col >= self.size {
            return Err(BoardError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            });
        }
        if self.get(coord).is_some() {
            return Err(BoardError::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(())
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}

impl Default for Board {
    /// The standard 3×3, 3-in-a-row board.
    fn default() -> Self {
        Self::empty(3, 3)
    }
}
