use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("move ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("board size must be at least 1")]
    InvalidSize,
    #[error("win length {win_length} must be between 1 and the board size {size}")]
    InvalidWinLength { win_length: usize, size: usize },
    #[error("position has no rows")]
    EmptyPosition,
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },
    #[error("invalid mark counts: X={x_count}, O={o_count} (X moves first, so X must equal O or lead by one)")]
    InvalidMarkCounts { x_count: usize, o_count: usize },
}
