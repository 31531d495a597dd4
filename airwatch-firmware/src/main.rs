//! Airwatch - CO2 Monitor Firmware
//!
//! Main firmware binary for RP2040-based boards with an SCD41 CO2 sensor
//! and a SparkFun SerLCD sharing one I2C bus.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_time::Delay;
use embedded_hal_bus::i2c::RefCellDevice;
use {defmt_rtt as _, panic_probe as _};

use airwatch_core::config::SensorConfig;
use airwatch_drivers::{Scd41, SerLcd};
use airwatch_hal::{EhBus, I2cConfig};

mod tasks;

use tasks::{monitor, MonitorConfig};

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Airwatch firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // I2C0 on GPIO5 (SCL) / GPIO4 (SDA), standard mode
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2cConfig::STANDARD.frequency;
    let bus = RefCell::new(I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config));
    info!("I2C initialized at {} Hz", I2cConfig::STANDARD.frequency);

    // Both devices share the bus; only one transaction runs at a time
    let display = SerLcd::new(EhBus::new(RefCellDevice::new(&bus)), Delay);
    let sensor = Scd41::with_config(
        EhBus::new(RefCellDevice::new(&bus)),
        Delay,
        SensorConfig::DATASHEET,
    );

    monitor(sensor, display, MonitorConfig::default()).await
}
