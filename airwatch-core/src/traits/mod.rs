//! Driver traits
//!
//! These traits define the interface between the orchestration layer and
//! the device drivers.

pub mod display;
pub mod sensor;

pub use display::{CharacterDisplay, DisplayError};
pub use sensor::{Co2Sensor, SensorError};
