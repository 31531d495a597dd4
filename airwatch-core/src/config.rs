//! Driver configuration types
//!
//! Defaults carry the documented wire behaviour and timing of the SCD41
//! and SerLCD. Board code overrides individual fields as needed.

use crate::command::{Command, DISPLAY_ADDRESS, SENSOR_ADDRESS};

/// What to do with the CRC byte that follows every sensor word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChecksumPolicy {
    /// Consume the byte, never check it
    #[default]
    Ignore,
    /// Reject the response on mismatch
    Verify,
}

/// How a measurement frame is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadMode {
    /// Read the frame directly; the sensor streams its last prepared data
    #[default]
    Implicit,
    /// Send READ_MEASUREMENT (0xEC05), wait, then read the frame
    Explicit,
}

/// SCD41 driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// 7-bit bus address
    pub address: u8,
    /// CRC handling for status and measurement words
    pub checksum: ChecksumPolicy,
    /// Measurement request style
    pub read_mode: ReadMode,
    /// Delay between a command write and reading its response (ms)
    pub command_settle_ms: u32,
    /// Delay after the stop command before the sensor accepts commands (ms)
    pub stop_settle_ms: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            address: SENSOR_ADDRESS,
            checksum: ChecksumPolicy::Ignore,
            read_mode: ReadMode::Implicit,
            command_settle_ms: Command::GetDataReadyStatus.execution_time_ms(),
            stop_settle_ms: Command::StopPeriodicMeasurement.execution_time_ms(),
        }
    }
}

impl SensorConfig {
    /// Full datasheet sequence: explicit read command and CRC checks
    pub const DATASHEET: Self = Self {
        address: SENSOR_ADDRESS,
        checksum: ChecksumPolicy::Verify,
        read_mode: ReadMode::Explicit,
        command_settle_ms: Command::ReadMeasurement.execution_time_ms(),
        stop_settle_ms: Command::StopPeriodicMeasurement.execution_time_ms(),
    };
}

/// SerLCD driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Wait before the first command after power-up (ms)
    pub power_up_ms: u32,
    /// Wait after the initial clear (ms)
    pub clear_settle_ms: u32,
    /// Wait after every byte for the display's internal processing (ms)
    pub byte_pacing_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DISPLAY_ADDRESS,
            power_up_ms: 500,
            clear_settle_ms: 10,
            byte_pacing_ms: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_defaults() {
        let config = SensorConfig::default();
        assert_eq!(config.address, 0x62);
        assert_eq!(config.checksum, ChecksumPolicy::Ignore);
        assert_eq!(config.read_mode, ReadMode::Implicit);
        assert_eq!(config.command_settle_ms, 1);
    }

    #[test]
    fn test_datasheet_preset() {
        let config = SensorConfig::DATASHEET;
        assert_eq!(config.checksum, ChecksumPolicy::Verify);
        assert_eq!(config.read_mode, ReadMode::Explicit);
        assert_eq!(config.address, SensorConfig::default().address);
    }

    #[test]
    fn test_display_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.address, 0x72);
        assert_eq!(
            (config.power_up_ms, config.clear_settle_ms, config.byte_pacing_ms),
            (500, 10, 2)
        );
    }
}
