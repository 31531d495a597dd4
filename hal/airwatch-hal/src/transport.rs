//! Byte-level bus primitives
//!
//! [`BusTransport`] is the thinnest layer over a two-wire master: one call
//! per bus condition or byte. [`PrimitiveBus`] sequences those primitives
//! into the complete transactions of [`I2cBus`].

use crate::{BusError, I2cBus};

/// Primitive two-wire master operations
///
/// Each method blocks until the controller reports completion, bounded by
/// the implementation's wait budget.
pub trait BusTransport {
    /// Issue a start condition addressed for writing
    ///
    /// Returns [`BusError::Nack`] if the device does not acknowledge its
    /// address. The bus is still held; the caller must `stop()`.
    fn start_write(&mut self, address: u8) -> Result<(), BusError>;

    /// Issue a start condition addressed for reading
    fn start_read(&mut self, address: u8) -> Result<(), BusError>;

    /// Wait for the previous byte to complete, then stage `value`
    fn write_byte(&mut self, value: u8) -> Result<(), BusError>;

    /// Wait for a received byte and return it
    ///
    /// With `is_last` the controller answers NACK and issues a stop
    /// condition; otherwise it acknowledges and receives the next byte.
    fn read_byte(&mut self, is_last: bool) -> Result<u8, BusError>;

    /// Issue a stop condition, releasing the bus
    fn stop(&mut self) -> Result<(), BusError>;
}

/// Transaction sequencing on top of [`BusTransport`]
///
/// - write: START, ADDR(W), DATA..., STOP
/// - read: START, ADDR(R), DATA..., NACK+STOP on the last byte
/// - write_read: START, ADDR(W), DATA..., START, ADDR(R), DATA..., NACK+STOP
///
/// Any failure in a write phase releases the bus before the error is
/// returned, so a missing device never leaves the bus held.
pub struct PrimitiveBus<T> {
    transport: T,
}

impl<T: BusTransport> PrimitiveBus<T> {
    /// Wrap a primitive transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.transport
    }

    fn write_phase(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        self.transport.start_write(address)?;
        for &byte in data {
            self.transport.write_byte(byte)?;
        }
        Ok(())
    }

    fn read_phase(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        if buf.is_empty() {
            return Err(BusError::InvalidLength);
        }

        self.transport.start_read(address)?;
        let last = buf.len() - 1;
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = self.transport.read_byte(i == last)?;
        }
        Ok(())
    }

    /// Release the bus after a failed phase and hand back the first error
    fn abort(&mut self, err: BusError) -> BusError {
        // Report the failure that aborted the transaction
        let _ = self.transport.stop();
        err
    }
}

impl<T: BusTransport> I2cBus for PrimitiveBus<T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        if let Err(e) = self.write_phase(address, data) {
            return Err(self.abort(e));
        }
        self.transport.stop()
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        match self.read_phase(address, buf) {
            Ok(()) => Ok(()),
            // Nothing was started, nothing to release
            Err(BusError::InvalidLength) => Err(BusError::InvalidLength),
            Err(e) => Err(self.abort(e)),
        }
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
        if let Err(e) = self.write_phase(address, write_data) {
            return Err(self.abort(e));
        }
        self.read_phase(address, read_buf)
            .map_err(|e| self.abort(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        StartWrite(u8),
        StartRead(u8),
        Write(u8),
        Read { last: bool },
        Stop,
    }

    /// Scripted transport that records every primitive
    #[derive(Default)]
    struct ScriptedTransport {
        ops: Vec<Op>,
        rx: VecDeque<u8>,
        nack_address: Option<u8>,
        nack_after_bytes: Option<usize>,
        written: usize,
    }

    impl BusTransport for ScriptedTransport {
        fn start_write(&mut self, address: u8) -> Result<(), BusError> {
            self.ops.push(Op::StartWrite(address));
            if self.nack_address == Some(address) {
                return Err(BusError::Nack);
            }
            Ok(())
        }

        fn start_read(&mut self, address: u8) -> Result<(), BusError> {
            self.ops.push(Op::StartRead(address));
            if self.nack_address == Some(address) {
                return Err(BusError::Nack);
            }
            Ok(())
        }

        fn write_byte(&mut self, value: u8) -> Result<(), BusError> {
            self.ops.push(Op::Write(value));
            self.written += 1;
            if self.nack_after_bytes == Some(self.written) {
                return Err(BusError::Nack);
            }
            Ok(())
        }

        fn read_byte(&mut self, is_last: bool) -> Result<u8, BusError> {
            self.ops.push(Op::Read { last: is_last });
            self.rx.pop_front().ok_or(BusError::Timeout)
        }

        fn stop(&mut self) -> Result<(), BusError> {
            self.ops.push(Op::Stop);
            Ok(())
        }
    }

    #[test]
    fn test_write_sequence() {
        let mut bus = PrimitiveBus::new(ScriptedTransport::default());
        bus.write(0x62, &[0x21, 0xB1]).unwrap();

        assert_eq!(
            bus.transport().ops,
            vec![Op::StartWrite(0x62), Op::Write(0x21), Op::Write(0xB1), Op::Stop]
        );
    }

    #[test]
    fn test_address_nack_releases_bus() {
        let mut bus = PrimitiveBus::new(ScriptedTransport {
            nack_address: Some(0x72),
            ..Default::default()
        });

        assert_eq!(bus.write(0x72, b"x"), Err(BusError::Nack));
        // No data staged after the NACK, but the bus is released
        assert_eq!(bus.transport().ops, vec![Op::StartWrite(0x72), Op::Stop]);
    }

    #[test]
    fn test_data_nack_stops_early() {
        let mut bus = PrimitiveBus::new(ScriptedTransport {
            nack_after_bytes: Some(1),
            ..Default::default()
        });

        assert_eq!(bus.write(0x62, &[0xE4, 0xB8]), Err(BusError::Nack));
        assert_eq!(
            bus.transport().ops,
            vec![Op::StartWrite(0x62), Op::Write(0xE4), Op::Stop]
        );
    }

    #[test]
    fn test_read_nacks_only_last_byte() {
        let mut bus = PrimitiveBus::new(ScriptedTransport {
            rx: VecDeque::from(vec![0x00, 0x06, 0x4C]),
            ..Default::default()
        });

        let mut buf = [0u8; 3];
        bus.read(0x62, &mut buf).unwrap();

        assert_eq!(buf, [0x00, 0x06, 0x4C]);
        assert_eq!(
            bus.transport().ops,
            vec![
                Op::StartRead(0x62),
                Op::Read { last: false },
                Op::Read { last: false },
                Op::Read { last: true },
            ]
        );
    }

    #[test]
    fn test_read_timeout_releases_bus() {
        let mut bus = PrimitiveBus::new(ScriptedTransport {
            rx: VecDeque::from(vec![0x01]),
            ..Default::default()
        });

        let mut buf = [0u8; 2];
        assert_eq!(bus.read(0x62, &mut buf), Err(BusError::Timeout));
        assert_eq!(bus.transport().ops.last(), Some(&Op::Stop));
    }

    #[test]
    fn test_empty_read_rejected() {
        let mut bus = PrimitiveBus::new(ScriptedTransport::default());
        let mut buf: [u8; 0] = [];

        assert_eq!(bus.read(0x62, &mut buf), Err(BusError::InvalidLength));
        assert!(bus.transport().ops.is_empty());
    }

    #[test]
    fn test_write_read_uses_repeated_start() {
        let mut bus = PrimitiveBus::new(ScriptedTransport {
            rx: VecDeque::from(vec![0xAB]),
            ..Default::default()
        });

        let mut buf = [0u8; 1];
        bus.write_read(0x62, &[0x36], &mut buf).unwrap();

        assert_eq!(buf, [0xAB]);
        assert_eq!(
            bus.transport().ops,
            vec![
                Op::StartWrite(0x62),
                Op::Write(0x36),
                Op::StartRead(0x62),
                Op::Read { last: true },
            ]
        );
    }
}
