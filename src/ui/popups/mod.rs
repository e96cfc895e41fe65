//! Popup overlays.

pub mod prompt;
