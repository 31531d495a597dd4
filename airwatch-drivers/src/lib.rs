//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in airwatch-core, written against the airwatch-hal bus traits and the
//! `embedded-hal` delay abstraction:
//!
//! - CO2 / temperature / humidity sensor (Sensirion SCD41)
//! - Serial character display (SparkFun SerLCD)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;

#[cfg(test)]
mod testing;

pub use display::SerLcd;
pub use sensor::Scd41;
