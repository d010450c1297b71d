//! Board renderer: turns a board matrix and a selection into 64 square views.

use shared::{
    coords::ScreenPos,
    domain::{BoardMatrix, PieceCode, Square, BOARD_SIZE},
};

use crate::session::Selection;

pub const PIECE_GLYPHS: [(&str, &str); 12] = [
    ("P", "♙"),
    ("N", "♘"),
    ("B", "♗"),
    ("R", "♖"),
    ("Q", "♕"),
    ("K", "♔"),
    ("p", "♟"),
    ("n", "♞"),
    ("b", "♝"),
    ("r", "♜"),
    ("q", "♛"),
    ("k", "♚"),
];

const EMPTY_TEXT_CELL: &str = "·";

/// Unknown codes are shown as-is.
pub fn glyph_for(code: &PieceCode) -> &str {
    PIECE_GLYPHS
        .iter()
        .find(|(known, _)| *known == code.as_str())
        .map(|(_, glyph)| *glyph)
        .unwrap_or_else(|| code.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub fn at(pos: ScreenPos) -> Self {
        if (pos.col + pos.row) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::Dark => "dark",
        }
    }
}

/// One drawn square. `square` is fixed when the view is built and is the
/// coordinate a click on this view reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub pos: ScreenPos,
    pub shade: Shade,
    pub label: Option<String>,
    pub selected: bool,
    pub valid: bool,
}

impl SquareView {
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["square", self.shade.class()];
        if self.selected {
            classes.push("selected");
        }
        if self.valid {
            classes.push("valid");
        }
        classes
    }
}

/// Squares in screen order: row 0 (rank 8) first, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBoard {
    squares: Vec<SquareView>,
}

impl RenderedBoard {
    pub fn squares(&self) -> &[SquareView] {
        &self.squares
    }

    pub fn rows(&self) -> impl Iterator<Item = &[SquareView]> {
        self.squares.chunks(BOARD_SIZE)
    }

    pub fn square_at(&self, col: i32, row: i32) -> Option<&SquareView> {
        let col = usize::try_from(col).ok().filter(|col| *col < BOARD_SIZE)?;
        let row = usize::try_from(row).ok().filter(|row| *row < BOARD_SIZE)?;
        self.squares.get(row * BOARD_SIZE + col)
    }

    pub fn square(&self, square: Square) -> Option<&SquareView> {
        let pos = square.to_screen();
        self.square_at(pos.col, pos.row)
    }

    /// Plain-text grid with rank and file labels. Selected squares are
    /// bracketed, candidate destinations parenthesised.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(BOARD_SIZE + 1);
        for row in self.rows() {
            let rank = row.first().map(|view| view.square.y).unwrap_or_default();
            let mut line = format!("{rank} ");
            for view in row {
                let (open, close) = if view.selected {
                    ('[', ']')
                } else if view.valid {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                let label = view.label.as_deref().unwrap_or(EMPTY_TEXT_CELL);
                line.push(open);
                line.push_str(label);
                line.push(close);
            }
            lines.push(line);
        }
        let files: String = ('a'..='h').map(|file| format!(" {file} ")).collect();
        lines.push(format!("  {files}"));
        lines.join("\n")
    }
}

pub fn render(board: &BoardMatrix, selection: &Selection) -> RenderedBoard {
    let mut squares = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    for row in 0..BOARD_SIZE as i32 {
        for col in 0..BOARD_SIZE as i32 {
            let pos = ScreenPos::new(col, row);
            let square = pos.to_authority();
            squares.push(SquareView {
                square,
                pos,
                shade: Shade::at(pos),
                label: board.piece_at(pos).map(|code| glyph_for(code).to_string()),
                selected: selection.origin() == Some(square),
                valid: selection.is_candidate(square),
            });
        }
    }
    RenderedBoard { squares }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
