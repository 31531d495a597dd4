//! Sensirion SCD41 CO2 sensor
//!
//! Photoacoustic CO2 sensor with on-board temperature and humidity
//! compensation.
//!
//! # I2C Protocol
//!
//! Address 0x62, standard mode (100 kHz):
//! - Command: START, ADDR(W), opcode MSB, opcode LSB, STOP
//! - Response: START, ADDR(R), n x (data MSB, data LSB, CRC-8), STOP
//!
//! Responses are never read in the same transaction as their command; the
//! sensor needs its execution time (1 ms for status and read commands)
//! between the two.
//!
//! # Measurement Cycle
//!
//! 1. `start_periodic_measurement` once (new data every 5 s)
//! 2. `is_data_ready` until it returns true
//! 3. `read_measurement`
//! 4. back to 2

use airwatch_core::config::{ChecksumPolicy, ReadMode, SensorConfig};
use airwatch_core::frame::{RawFrame, ReadyStatus, FRAME_LEN, STATUS_LEN};
use airwatch_core::state::{SensorEvent, SensorState};
use airwatch_core::traits::{Co2Sensor, SensorError};
use airwatch_core::{Command, Measurement};
use airwatch_hal::{BusError, I2cBus};
use embedded_hal::delay::DelayNs;

/// Result type for SCD41 operations
pub type Result<T> = core::result::Result<T, SensorError<BusError>>;

/// SCD41 driver
///
/// Owns the bus handle, a delay provider and the most recent measurement.
/// Every operation that fails leaves the driver state and the stored
/// measurement exactly as they were.
pub struct Scd41<B, D> {
    bus: B,
    delay: D,
    config: SensorConfig,
    state: SensorState,
    latest: Option<Measurement>,
}

impl<B: I2cBus, D: DelayNs> Scd41<B, D> {
    /// Create a driver with the default configuration
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_config(bus, delay, SensorConfig::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(bus: B, delay: D, config: SensorConfig) -> Self {
        Self {
            bus,
            delay,
            config,
            state: SensorState::Idle,
            latest: None,
        }
    }

    /// Bus address in use
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Active configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Current measurement state
    pub fn state(&self) -> SensorState {
        self.state
    }

    /// Release the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Send a 16-bit command opcode
    fn send_command(&mut self, cmd: Command) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::trace!("scd41: command {=u16:#06x}", cmd.opcode());

        self.bus
            .write(self.config.address, &cmd.to_bytes())
            .inspect_err(|_e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("scd41: command {=u16:#06x} failed: {}", cmd.opcode(), _e);
            })?;
        Ok(())
    }

    fn read_response(&mut self, buf: &mut [u8]) -> Result<()> {
        self.bus.read(self.config.address, buf)?;
        Ok(())
    }

    /// Start periodic measurement
    ///
    /// Only the command is sent; the sensor produces its first
    /// measurement about 5 s later.
    pub fn start_periodic_measurement(&mut self) -> Result<()> {
        self.send_command(Command::StartPeriodicMeasurement)?;
        self.state = self.state.transition(SensorEvent::Started);
        Ok(())
    }

    /// Stop periodic measurement
    ///
    /// Waits out the sensor's stop time before returning, so the next
    /// command is accepted.
    pub fn stop_periodic_measurement(&mut self) -> Result<()> {
        self.send_command(Command::StopPeriodicMeasurement)?;
        self.delay.delay_ms(self.config.stop_settle_ms);
        self.state = self.state.transition(SensorEvent::Stopped);
        Ok(())
    }

    /// Check whether a measurement is waiting
    ///
    /// Issues GET_DATA_READY_STATUS, waits the command settle time and reads
    /// the 3-byte status frame.
    pub fn is_data_ready(&mut self) -> Result<bool> {
        self.send_command(Command::GetDataReadyStatus)?;
        self.delay.delay_ms(self.config.command_settle_ms);

        let mut buf = [0u8; STATUS_LEN];
        self.read_response(&mut buf)?;
        let status = ReadyStatus::new(buf);

        if self.config.checksum == ChecksumPolicy::Verify {
            status.verify().map_err(SensorError::checksum)?;
        }

        let ready = status.is_ready();
        self.state = self.state.transition(SensorEvent::ReadyChecked(ready));
        Ok(ready)
    }

    /// Read and decode the pending measurement
    ///
    /// Requires a positive `is_data_ready` since the last read.
    pub fn read_measurement(&mut self) -> Result<Measurement> {
        if !self.state.can_read() {
            return Err(SensorError::NotReady);
        }

        if self.config.read_mode == ReadMode::Explicit {
            self.send_command(Command::ReadMeasurement)?;
            self.delay.delay_ms(self.config.command_settle_ms);
        }

        let mut buf = [0u8; FRAME_LEN];
        self.read_response(&mut buf)?;
        let frame = RawFrame::new(buf);

        if self.config.checksum == ChecksumPolicy::Verify {
            frame.verify().map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "scd41: frame CRC mismatch (expected {=u8:#x}, got {=u8:#x})",
                    e.expected,
                    e.actual
                );
                SensorError::checksum(e)
            })?;
        }

        let measurement = frame.decode();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "scd41: co2={}ppm t={}C rh={}%",
            measurement.co2_ppm,
            measurement.temperature_c,
            measurement.humidity_percent
        );

        self.latest = Some(measurement);
        self.state = self.state.transition(SensorEvent::MeasurementRead);
        Ok(measurement)
    }

    /// Last successfully decoded measurement
    pub fn latest(&self) -> Option<Measurement> {
        self.latest
    }
}

impl<B: I2cBus, D: DelayNs> Co2Sensor for Scd41<B, D> {
    type Error = BusError;

    fn start_periodic_measurement(&mut self) -> Result<()> {
        Scd41::start_periodic_measurement(self)
    }

    fn is_data_ready(&mut self) -> Result<bool> {
        Scd41::is_data_ready(self)
    }

    fn read_measurement(&mut self) -> Result<Measurement> {
        Scd41::read_measurement(self)
    }

    fn latest(&self) -> Option<Measurement> {
        Scd41::latest(self)
    }

    fn state(&self) -> SensorState {
        Scd41::state(self)
    }
}
