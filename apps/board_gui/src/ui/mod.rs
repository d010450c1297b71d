//! UI layer: app shell, board grid, and colors.

pub mod app;
pub mod board;
pub mod theme;

pub use app::BoardApp;
