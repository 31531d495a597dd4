//! Firmware tasks

pub mod monitor;

pub use monitor::{monitor, MonitorConfig};
