//! Sensor commands and device addresses

/// 7-bit bus address of the SCD41 sensor
pub const SENSOR_ADDRESS: u8 = 0x62;

/// 7-bit bus address of the SerLCD display
pub const DISPLAY_ADDRESS: u8 = 0x72;

/// SCD41 command opcodes
///
/// Commands go on the wire as two big-endian bytes after the address+write
/// phase. Responses are read in a separate address+read transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Command {
    /// Start periodic measurement (new data every 5 s)
    StartPeriodicMeasurement = 0x21B1,
    /// Read the data-ready status word
    GetDataReadyStatus = 0xE4B8,
    /// Read the latest measurement frame
    ReadMeasurement = 0xEC05,
    /// Stop periodic measurement
    StopPeriodicMeasurement = 0x3F86,
}

impl Command {
    /// 16-bit opcode
    pub const fn opcode(self) -> u16 {
        self as u16
    }

    /// Opcode as transmitted (big-endian)
    pub const fn to_bytes(self) -> [u8; 2] {
        self.opcode().to_be_bytes()
    }

    /// Minimum time the sensor needs after this command before it can be
    /// read or addressed again, in milliseconds
    pub const fn execution_time_ms(self) -> u32 {
        match self {
            Command::StartPeriodicMeasurement => 0,
            Command::GetDataReadyStatus | Command::ReadMeasurement => 1,
            Command::StopPeriodicMeasurement => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_encoding() {
        assert_eq!(Command::StartPeriodicMeasurement.to_bytes(), [0x21, 0xB1]);
        assert_eq!(Command::GetDataReadyStatus.to_bytes(), [0xE4, 0xB8]);
        assert_eq!(Command::ReadMeasurement.to_bytes(), [0xEC, 0x05]);
    }

    #[test]
    fn test_execution_times() {
        assert_eq!(Command::GetDataReadyStatus.execution_time_ms(), 1);
        assert_eq!(Command::StopPeriodicMeasurement.execution_time_ms(), 500);
    }
}
