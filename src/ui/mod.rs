//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It holds no game
//! rules of its own: every frame is drawn from [`GameState`](crate::GameState)
//! and clicks are forwarded to it.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
pub use theme::{Palette, ThemeState};
