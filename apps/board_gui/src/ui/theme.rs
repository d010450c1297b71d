//! Board colors and sizing.

use client_core::{Shade, SquareView};
use eframe::egui::{Color32, Vec2};

pub const BOARD_PADDING: f32 = 20.0;
pub const MIN_SQUARE_SIZE: f32 = 30.0;
pub const PIECE_SCALE: f32 = 0.7;

pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(0xEF, 0xD9, 0xB5);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(0xB4, 0x87, 0x64);
pub const SELECTED_SQUARE: Color32 = Color32::from_rgb(0xF6, 0xE0, 0x5E);
pub const VALID_SQUARE: Color32 = Color32::from_rgb(0x8F, 0xC0, 0x6A);
pub const SELECTED_STROKE: Color32 = Color32::from_rgb(0xC8, 0x8A, 0x10);
pub const PIECE_TEXT: Color32 = Color32::from_rgb(0x1E, 0x1E, 0x1E);

pub fn square_fill(view: &SquareView) -> Color32 {
    if view.selected {
        SELECTED_SQUARE
    } else if view.valid {
        VALID_SQUARE
    } else {
        match view.shade {
            Shade::Light => LIGHT_SQUARE,
            Shade::Dark => DARK_SQUARE,
        }
    }
}

/// Largest square that fits eight across in `available`.
pub fn square_size(available: Vec2) -> f32 {
    let side = available.x.min(available.y) - BOARD_PADDING * 2.0;
    (side / 8.0).max(MIN_SQUARE_SIZE)
}
