//! Conversions between authority space and screen space.
//!
//! Authority space is what the move authority speaks: 1-based `(x, y)` with
//! rank 1 at the bottom. Screen space is the drawing grid: 0-based
//! `(col, row)` with row 0 at the top.

use crate::domain::Square;

pub const BOARD_EDGE: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPos {
    pub col: i32,
    pub row: i32,
}

impl ScreenPos {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn to_authority(self) -> Square {
        let (x, y) = to_authority(self.col, self.row);
        Square::new(x, y)
    }
}

/// Inputs outside `[1, 8]` are not checked.
pub fn to_screen(x: i32, y: i32) -> (i32, i32) {
    (x - 1, BOARD_EDGE - y)
}

pub fn to_authority(col: i32, row: i32) -> (i32, i32) {
    (col + 1, BOARD_EDGE - row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_square() {
        for x in 1..=8 {
            for y in 1..=8 {
                let (col, row) = to_screen(x, y);
                assert_eq!(to_authority(col, row), (x, y));
            }
        }
    }

    #[test]
    fn rank_eight_is_the_top_screen_row() {
        assert_eq!(to_screen(1, 8), (0, 0));
        assert_eq!(to_screen(8, 1), (7, 7));
        assert_eq!(to_screen(5, 8), (4, 0));
    }

    #[test]
    fn square_and_screen_pos_wrap_the_same_mapping() {
        let square = Square::new(3, 4);
        let pos = square.to_screen();
        assert_eq!(pos, ScreenPos::new(2, 4));
        assert_eq!(pos.to_authority(), square);
    }
}
