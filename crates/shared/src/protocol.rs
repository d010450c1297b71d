//! HTTP surface of the move authority.

use serde::{Deserialize, Serialize};

use crate::domain::Square;

pub const BOARD_STATE_PATH: &str = "/board_state";
pub const VALID_MOVES_PATH: &str = "/valid_moves";
pub const MOVE_PIECE_PATH: &str = "/move_piece";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidMovesQuery {
    pub x: i32,
    pub y: i32,
}

impl From<Square> for ValidMovesQuery {
    fn from(square: Square) -> Self {
        Self {
            x: square.x,
            y: square.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePieceQuery {
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
}

impl MovePieceQuery {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from_x: from.x,
            from_y: from.y,
            to_x: to.x,
            to_y: to.y,
        }
    }

    pub fn from_square(&self) -> Square {
        Square::new(self.from_x, self.from_y)
    }

    pub fn to_square(&self) -> Square {
        Square::new(self.to_x, self.to_y)
    }
}

/// Body of `GET /valid_moves`.
pub type ValidMovesResponse = Vec<Square>;
