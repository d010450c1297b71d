//! Board grid widget.

use client_core::RenderedBoard;
use eframe::egui;
use shared::domain::Square;

use crate::ui::theme;

/// Draws one button per square view and returns the coordinate bound to the
/// clicked view, if any.
pub fn show_board(ui: &mut egui::Ui, view: &RenderedBoard) -> Option<Square> {
    let size = theme::square_size(ui.available_size());
    let mut clicked = None;

    egui::Grid::new("board_grid")
        .spacing(egui::vec2(0.0, 0.0))
        .show(ui, |ui| {
            for row in view.rows() {
                for square in row {
                    let label = square.label.as_deref().unwrap_or_default();
                    let mut button = egui::Button::new(
                        egui::RichText::new(label)
                            .size(size * theme::PIECE_SCALE)
                            .color(theme::PIECE_TEXT),
                    )
                    .fill(theme::square_fill(square))
                    .min_size(egui::vec2(size, size));
                    if square.selected {
                        button = button.stroke(egui::Stroke::new(2.0, theme::SELECTED_STROKE));
                    }

                    let response = ui.add(button).on_hover_text(square.square.to_string());
                    if response.clicked() {
                        clicked = Some(square.square);
                    }
                }
                ui.end_row();
            }
        });

    clicked
}
