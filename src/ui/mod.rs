//! GUI module for the Queen's Game
//!
//! This module provides a native Rust GUI using egui/eframe. All game logic
//! goes through [`crate::Session::handle_event`]; this layer only turns
//! clicks into events and draws the result.

mod app;
mod board_view;
mod theme;

pub use app::QueensApp;
