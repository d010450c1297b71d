use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardShapeError {
    #[error("board must have 8 rows, got {found}")]
    RowCount { found: usize },
    #[error("board row {row} must have 8 cells, got {found}")]
    RowLength { row: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("expected a square as \"x,y\", got {0:?}")]
    Malformed(String),
    #[error("square ({x},{y}) is off the board")]
    OffBoard { x: i32, y: i32 },
}
