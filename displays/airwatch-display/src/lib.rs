//! Text screen buffers and measurement formatting for Airwatch
//!
//! This crate provides:
//! - `Screen`, four fixed-width line buffers matching a 20x4 character LCD
//! - `format_measurement` / `format_error` to lay readings out on a screen
//!
//! The display driver streams lines back to back without cursor moves, so
//! every line handed to it must be exactly one row wide. `Screen` takes care
//! of that: lines are truncated on entry and padded on output.

#![cfg_attr(not(test), no_std)]

pub mod format;
pub mod screen;

// Re-export key types
pub use format::{format_error, format_measurement, format_waiting};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
