//! CO2 sensor trait

use core::fmt;

use crate::frame::ChecksumMismatch;
use crate::measurement::Measurement;
use crate::state::SensorState;

/// Errors that can occur talking to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError<E> {
    /// Bus transaction failed (no acknowledge, timeout, ...)
    Bus(E),
    /// A received word failed its CRC check
    Checksum {
        /// CRC computed over the data bytes
        expected: u8,
        /// CRC byte the sensor sent
        actual: u8,
    },
    /// Read attempted without a preceding positive ready check
    NotReady,
}

impl<E> From<E> for SensorError<E> {
    fn from(e: E) -> Self {
        SensorError::Bus(e)
    }
}

impl<E> SensorError<E> {
    /// Build from a CRC mismatch
    pub fn checksum(mismatch: ChecksumMismatch) -> Self {
        SensorError::Checksum {
            expected: mismatch.expected,
            actual: mismatch.actual,
        }
    }

    /// Short label for a status line
    pub fn label(&self) -> &'static str {
        match self {
            SensorError::Bus(_) => "SENSOR BUS",
            SensorError::Checksum { .. } => "SENSOR CRC",
            SensorError::NotReady => "NOT READY",
        }
    }
}

impl<E: fmt::Display> fmt::Display for SensorError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Bus(e) => write!(f, "sensor bus error: {}", e),
            SensorError::Checksum { expected, actual } => write!(
                f,
                "sensor checksum mismatch (expected {:#04x}, got {:#04x})",
                expected, actual
            ),
            SensorError::NotReady => write!(f, "no measurement ready"),
        }
    }
}

/// Trait for periodic CO2/temperature/humidity sensors
///
/// Usage: `start_periodic_measurement` once, then poll `is_data_ready`
/// until it returns true before each `read_measurement`.
pub trait Co2Sensor {
    /// Bus error type
    type Error;

    /// Start periodic measurement mode
    fn start_periodic_measurement(&mut self) -> Result<(), SensorError<Self::Error>>;

    /// Check whether a new measurement is available
    fn is_data_ready(&mut self) -> Result<bool, SensorError<Self::Error>>;

    /// Read and decode the pending measurement
    fn read_measurement(&mut self) -> Result<Measurement, SensorError<Self::Error>>;

    /// Last successfully decoded measurement, if any
    fn latest(&self) -> Option<Measurement>;

    /// Driver-side measurement state
    fn state(&self) -> SensorState;
}
