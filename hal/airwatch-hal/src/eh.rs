//! `embedded-hal` adapter
//!
//! Lets any blocking `embedded_hal::i2c::I2c` implementation (embassy-rp,
//! a shared-bus device, ...) stand in as an [`I2cBus`].

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use crate::{BusError, I2cBus};

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(_) => BusError::Nack,
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLost,
            _ => BusError::Other,
        }
    }
}

/// [`I2cBus`] over an `embedded-hal` 1.0 blocking I2C
pub struct EhBus<I> {
    i2c: I,
}

impl<I: I2c> EhBus<I> {
    /// Wrap an `embedded-hal` I2C
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the wrapped I2C
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cBus for EhBus<I> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        self.i2c.write(address, data).map_err(|e| e.kind().into())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        if buf.is_empty() {
            return Err(BusError::InvalidLength);
        }
        self.i2c.read(address, buf).map_err(|e| e.kind().into())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), BusError> {
        if read_buf.is_empty() {
            return Err(BusError::InvalidLength);
        }
        self.i2c
            .write_read(address, write_data, read_buf)
            .map_err(|e| e.kind().into())
    }
}
