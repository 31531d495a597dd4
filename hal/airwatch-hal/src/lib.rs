//! Airwatch Hardware Abstraction Layer
//!
//! This crate defines the two-wire (I2C) bus abstractions the sensor and
//! display drivers are written against. A driver only ever sees the
//! transaction-level [`I2cBus`] trait; where that comes from depends on
//! the board:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  airwatch-drivers (Scd41, SerLcd)       │
//! └─────────────────────────────────────────┘
//!                     │ I2cBus
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ PrimitiveBus  │       │     EhBus     │
//! │ (BusTransport)│       │ (embedded-hal)│
//! └───────────────┘       └───────────────┘
//!         │
//!         ▼
//! ┌───────────────┐
//! │   TwiMaster   │
//! │  (registers)  │
//! └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`transport::BusTransport`] - byte-level start / write / read / stop
//! - [`i2c::I2cBus`] - complete write and read transactions
//! - [`twi::TwiRegisters`] - register file of a two-wire master controller
//!
//! Every blocking wait in this crate is bounded; a device that never
//! responds surfaces as [`BusError::Timeout`] instead of hanging the caller.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod eh;
pub mod error;
pub mod i2c;
pub mod transport;
pub mod twi;

// Re-export key traits at crate root for convenience
pub use eh::EhBus;
pub use error::BusError;
pub use i2c::{I2cBus, I2cConfig};
pub use transport::{BusTransport, PrimitiveBus};
pub use twi::{TwiCommand, TwiMaster, TwiRegisters, DEFAULT_WAIT_BUDGET};
