//! Overlays drawn on top of the active screen.

pub mod detail;
pub mod form;
