//! Shared egui UI modules.

pub mod state;
pub mod ui;
