use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    coords::{self, ScreenPos},
    error::{BoardShapeError, SquareParseError},
};

pub const BOARD_SIZE: usize = 8;

/// A square in authority space: 1-based, rank 1 at `y = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(self) -> bool {
        (1..=coords::BOARD_EDGE).contains(&self.x) && (1..=coords::BOARD_EDGE).contains(&self.y)
    }

    pub fn to_screen(self) -> ScreenPos {
        let (col, row) = coords::to_screen(self.x, self.y);
        ScreenPos::new(col, row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SquareParseError::Malformed(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(malformed)?;
        let x = x.trim().parse::<i32>().map_err(|_| malformed())?;
        let y = y.trim().parse::<i32>().map_err(|_| malformed())?;
        let square = Square::new(x, y);
        if !square.is_on_board() {
            return Err(SquareParseError::OffBoard { x, y });
        }
        Ok(square)
    }
}

/// Piece code as sent by the authority. Case picks the side, the letter picks
/// the kind; anything else is kept verbatim so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceCode(String);

impl PieceCode {
    /// Returns `None` for the empty marker.
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        if code.is_empty() {
            None
        } else {
            Some(Self(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Board matrix in wire form: row 0 is rank 8, `""` or `null` is empty.
pub type RawBoard = Vec<Vec<Option<String>>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct BoardMatrix {
    cells: [[Option<PieceCode>; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardMatrix {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Places `code` at matrix `(row, col)`; an empty code clears the cell.
    pub fn with_piece(mut self, row: usize, col: usize, code: &str) -> Self {
        self.cells[row][col] = PieceCode::new(code);
        self
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&PieceCode> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    pub fn piece_at(&self, pos: ScreenPos) -> Option<&PieceCode> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.cell(row, col)
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl TryFrom<RawBoard> for BoardMatrix {
    type Error = BoardShapeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.len() != BOARD_SIZE {
            return Err(BoardShapeError::RowCount { found: raw.len() });
        }
        let mut board = BoardMatrix::empty();
        for (row, cells) in raw.into_iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(BoardShapeError::RowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                board.cells[row][col] = cell.and_then(PieceCode::new);
            }
        }
        Ok(board)
    }
}

impl From<BoardMatrix> for RawBoard {
    fn from(board: BoardMatrix) -> Self {
        board
            .cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| Some(cell.map(|code| code.0).unwrap_or_default()))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
