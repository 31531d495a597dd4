//! Board-agnostic core logic for the CO2 monitor firmware
//!
//! This crate contains everything about the sensor and display protocols
//! that does not touch a bus:
//!
//! - Command opcodes and device addresses
//! - Raw frame layout, Sensirion CRC-8 and ready-status decoding
//! - Conversion of raw words into physical units
//! - Sensor measurement state machine
//! - Driver configuration types
//! - Driver traits used by the orchestration layer

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod frame;
pub mod measurement;
pub mod state;
pub mod traits;

pub use command::{Command, DISPLAY_ADDRESS, SENSOR_ADDRESS};
pub use config::{ChecksumPolicy, DisplayConfig, ReadMode, SensorConfig};
pub use frame::{crc8, ChecksumMismatch, RawFrame, ReadyStatus, Word};
pub use measurement::Measurement;
pub use state::{SensorEvent, SensorState};
pub use traits::display::DISPLAY_LINES;
pub use traits::{CharacterDisplay, Co2Sensor, DisplayError, SensorError};
