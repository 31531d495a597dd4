//! Register-level two-wire master
//!
//! [`TwiMaster`] drives a master controller with the common
//! address / data / status / command register set (as found on AVR TWI and
//! similar peripherals) and implements [`BusTransport`] on top of it.
//!
//! The controller has no completion interrupt in this design, so every
//! primitive polls a status flag. Each poll loop is bounded by
//! `wait_budget` status reads and fails with [`BusError::Timeout`] once the
//! budget is spent.

use crate::{BusError, BusTransport, I2cConfig};

/// Status register flags
pub mod status {
    /// Read interrupt flag: a byte was received
    pub const RIF: u8 = 1 << 7;
    /// Write interrupt flag: address or data byte transmission finished
    pub const WIF: u8 = 1 << 6;
    /// Received NACK from the addressed device
    pub const RXACK: u8 = 1 << 4;
    /// Arbitration lost
    pub const ARBLOST: u8 = 1 << 3;
    /// Bus error
    pub const BUSERR: u8 = 1 << 2;
}

/// Default number of status polls before a wait gives up
///
/// At 100 kHz a byte takes ~90 µs on the wire; this leaves ample margin for
/// clock stretching without tying up the caller for long.
pub const DEFAULT_WAIT_BUDGET: u32 = 10_000;

/// Master command written to the control register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TwiCommand {
    /// Acknowledge and receive the next byte
    RecvTrans,
    /// Issue a stop condition
    Stop,
    /// Answer NACK, then issue a stop condition
    NackStop,
}

/// Register access for a two-wire master controller
pub trait TwiRegisters {
    /// Read the status register
    fn status(&mut self) -> u8;

    /// Write the address register (7-bit address << 1 | R/W), starting a transaction
    fn write_address(&mut self, value: u8);

    /// Write the data register, transmitting a byte
    fn write_data(&mut self, value: u8);

    /// Read the data register
    fn read_data(&mut self) -> u8;

    /// Issue a master command
    fn command(&mut self, cmd: TwiCommand);

    /// Set the baud divisor
    fn set_baud(&mut self, baud: u8);

    /// Enable the controller and force the bus state to idle
    fn enable(&mut self);
}

/// Two-wire master with bounded status polling
pub struct TwiMaster<R> {
    regs: R,
    wait_budget: u32,
}

impl<R: TwiRegisters> TwiMaster<R> {
    /// Create a master over already-configured registers
    pub fn new(regs: R) -> Self {
        Self {
            regs,
            wait_budget: DEFAULT_WAIT_BUDGET,
        }
    }

    /// Configure the baud divisor for `config` at `cpu_hz` and enable the controller
    pub fn init(mut regs: R, config: I2cConfig, cpu_hz: u32) -> Self {
        regs.set_baud(config.baud_divisor(cpu_hz));
        regs.enable();
        Self::new(regs)
    }

    /// Set the maximum number of status polls per wait (minimum 1)
    pub fn with_wait_budget(mut self, budget: u32) -> Self {
        self.wait_budget = budget.max(1);
        self
    }

    /// Current wait budget
    pub fn wait_budget(&self) -> u32 {
        self.wait_budget
    }

    /// Access the registers
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Release the registers
    pub fn release(self) -> R {
        self.regs
    }

    /// Poll until any flag in `mask` is set
    ///
    /// Bus error and arbitration loss end the wait immediately.
    fn wait_for(&mut self, mask: u8) -> Result<u8, BusError> {
        for _ in 0..self.wait_budget {
            let s = self.regs.status();
            if s & status::BUSERR != 0 {
                return Err(BusError::Bus);
            }
            if s & status::ARBLOST != 0 {
                return Err(BusError::ArbitrationLost);
            }
            if s & mask != 0 {
                return Ok(s);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("twi: status wait timed out (mask {=u8:#x})", mask);

        Err(BusError::Timeout)
    }

    fn check_ack(s: u8) -> Result<(), BusError> {
        if s & status::RXACK != 0 {
            Err(BusError::Nack)
        } else {
            Ok(())
        }
    }
}

impl<R: TwiRegisters> BusTransport for TwiMaster<R> {
    fn start_write(&mut self, address: u8) -> Result<(), BusError> {
        self.regs.write_address(address << 1);
        let s = self.wait_for(status::WIF)?;
        Self::check_ack(s)
    }

    fn start_read(&mut self, address: u8) -> Result<(), BusError> {
        // Completion shows up on the first read_byte: RIF on ACK, WIF on NACK
        self.regs.write_address((address << 1) | 0x01);
        Ok(())
    }

    fn write_byte(&mut self, value: u8) -> Result<(), BusError> {
        self.regs.write_data(value);
        let s = self.wait_for(status::WIF)?;
        Self::check_ack(s)
    }

    fn read_byte(&mut self, is_last: bool) -> Result<u8, BusError> {
        let s = self.wait_for(status::RIF | status::WIF)?;
        if s & status::RIF == 0 {
            // Address phase of the read was not acknowledged
            return Err(BusError::Nack);
        }

        let value = self.regs.read_data();
        self.regs.command(if is_last {
            TwiCommand::NackStop
        } else {
            TwiCommand::RecvTrans
        });
        Ok(value)
    }

    fn stop(&mut self) -> Result<(), BusError> {
        self.regs.command(TwiCommand::Stop);
        Ok(())
    }
}
