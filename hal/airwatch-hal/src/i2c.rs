//! I2C bus abstractions
//!
//! Provides the transaction-level trait the device drivers use.

use crate::BusError;

/// I2C bus master
///
/// Each call is one complete bus transaction, from start condition to
/// stop condition. Implementations must release the bus before returning
/// an error.
pub trait I2cBus {
    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into; the last byte is answered with NACK
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), BusError>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), BusError> {
        T::write_read(self, address, write_data, read_buf)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz), the SCD41's documented clock
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Baud register value for a master controller running from `cpu_hz`
    ///
    /// Uses the common two-wire master formula
    /// `f_scl = f_cpu / (10 + 2 * baud)`, saturating at zero.
    pub const fn baud_divisor(&self, cpu_hz: u32) -> u8 {
        let ratio = cpu_hz / self.frequency;
        if ratio <= 10 {
            return 0;
        }
        let baud = (ratio - 10) / 2;
        if baud > u8::MAX as u32 {
            u8::MAX
        } else {
            baud as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(I2cConfig::default().frequency, 100_000);
    }

    #[test]
    fn test_baud_divisor() {
        // 4 MHz core clock at 100 kHz: (40 - 10) / 2
        assert_eq!(I2cConfig::STANDARD.baud_divisor(4_000_000), 15);
        // Clock too slow for the requested rate
        assert_eq!(I2cConfig::FAST.baud_divisor(1_000_000), 0);
        // Saturates instead of wrapping
        assert_eq!(I2cConfig::STANDARD.baud_divisor(200_000_000), u8::MAX);
    }
}
