//! Character display drivers

pub mod serlcd;

pub use serlcd::{SerLcd, CLEAR_AND_HOME};
