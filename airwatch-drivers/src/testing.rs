//! Recording test doubles for the drivers
//!
//! The bus and the delay share one event log, so tests can assert the
//! exact interleaving of transactions and waits without real timing.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use airwatch_hal::{BusError, I2cBus};
use embedded_hal::delay::DelayNs;

/// One observed bus transaction or wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write { addr: u8, data: Vec<u8> },
    Read { addr: u8, len: usize },
    DelayMs(u32),
    DelayUs(u32),
    DelayNs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Bus that records transactions and plays back scripted read responses
pub struct RecordingBus {
    log: Log,
    responses: VecDeque<Vec<u8>>,
    /// Fail every transaction to this address with NACK
    pub nack_address: Option<u8>,
    /// Fail the n-th write (1-based) with NACK
    pub nack_write: Option<usize>,
    /// Error returned when reads run out of scripted responses
    pub exhausted: BusError,
    writes: usize,
}

impl RecordingBus {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            responses: VecDeque::new(),
            nack_address: None,
            nack_write: None,
            exhausted: BusError::Timeout,
            writes: 0,
        }
    }

    /// Queue the bytes returned by the next read
    pub fn respond(&mut self, bytes: &[u8]) {
        self.responses.push_back(bytes.to_vec());
    }
}

impl I2cBus for RecordingBus {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        self.writes += 1;
        if self.nack_address == Some(address) || self.nack_write == Some(self.writes) {
            return Err(BusError::Nack);
        }
        self.log.borrow_mut().push(Event::Write {
            addr: address,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), BusError> {
        if self.nack_address == Some(address) {
            return Err(BusError::Nack);
        }
        self.log.borrow_mut().push(Event::Read {
            addr: address,
            len: buf.len(),
        });
        let response = self.responses.pop_front().ok_or(self.exhausted)?;
        let n = buf.len().min(response.len());
        buf[..n].copy_from_slice(&response[..n]);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), BusError> {
        self.write(address, write_data)?;
        self.read(address, read_buf)
    }
}

/// Delay that records the requested duration instead of sleeping
pub struct RecordingDelay {
    log: Log,
}

impl RecordingDelay {
    pub fn new(log: Log) -> Self {
        Self { log }
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

/// Snapshot of the log
pub fn events(log: &Log) -> Vec<Event> {
    log.borrow().clone()
}
