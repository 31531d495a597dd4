//! SparkFun SerLCD character display (I2C mode)
//!
//! The SerLCD is a character LCD with its own controller that accepts a
//! plain ASCII stream. Text goes to the cursor position; `|` introduces a
//! settings command.
//!
//! Each byte is sent as its own bus transaction and followed by a pause:
//! the display's controller cannot keep up with back-to-back bytes.

use airwatch_core::config::DisplayConfig;
use airwatch_core::traits::{CharacterDisplay, DisplayError};
use airwatch_hal::{BusError, I2cBus};
use embedded_hal::delay::DelayNs;

/// Settings command: clear the screen and move the cursor home
pub const CLEAR_AND_HOME: &[u8; 2] = b"|-";

/// Result type for SerLCD operations
pub type Result<T> = core::result::Result<T, DisplayError<BusError>>;

/// SerLCD driver
pub struct SerLcd<B, D> {
    bus: B,
    delay: D,
    config: DisplayConfig,
}

impl<B: I2cBus, D: DelayNs> SerLcd<B, D> {
    /// Create a driver with the default configuration
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_config(bus, delay, DisplayConfig::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(bus: B, delay: D, config: DisplayConfig) -> Self {
        Self { bus, delay, config }
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Release the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Send one byte and wait out the display's processing time
    fn send_byte(&mut self, byte: u8) -> Result<()> {
        self.bus
            .write(self.config.address, &[byte])
            .inspect_err(|_e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("serlcd: byte {=u8:#x} dropped: {}", byte, _e);
            })?;
        self.delay.delay_ms(self.config.byte_pacing_ms);
        Ok(())
    }

    /// Stream raw bytes, stopping at the first failure
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            self.send_byte(byte)?;
        }
        Ok(())
    }

    /// Wait for power-up, then clear the screen
    pub fn init(&mut self) -> Result<()> {
        self.delay.delay_ms(self.config.power_up_ms);
        self.write_bytes(CLEAR_AND_HOME)?;
        self.delay.delay_ms(self.config.clear_settle_ms);

        #[cfg(feature = "defmt")]
        defmt::debug!("serlcd: initialized at {=u8:#x}", self.config.address);

        Ok(())
    }

    /// Clear the screen and home the cursor
    pub fn clear(&mut self) -> Result<()> {
        self.write_bytes(CLEAR_AND_HOME)
    }

    /// Stream text at the cursor
    ///
    /// Bytes go out unchanged; non-ASCII text shows as whatever the
    /// display's character ROM has at those codes.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Clear, then stream four pre-formatted lines in order
    pub fn render(&mut self, lines: &[&str; 4]) -> Result<()> {
        CharacterDisplay::render(self, lines)
    }
}

impl<B: I2cBus, D: DelayNs> CharacterDisplay for SerLcd<B, D> {
    type Error = BusError;

    fn init(&mut self) -> Result<()> {
        SerLcd::init(self)
    }

    fn clear(&mut self) -> Result<()> {
        SerLcd::clear(self)
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        SerLcd::write_str(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{events, new_log, Event, Log, RecordingBus, RecordingDelay};
    use std::vec::Vec;

    const ADDR: u8 = 0x72;

    fn display() -> (SerLcd<RecordingBus, RecordingDelay>, Log) {
        let log = new_log();
        let lcd = SerLcd::new(RecordingBus::new(log.clone()), RecordingDelay::new(log.clone()));
        (lcd, log)
    }

    /// Expected events for a paced byte stream
    fn paced(bytes: &[u8]) -> Vec<Event> {
        bytes
            .iter()
            .flat_map(|&b| {
                [
                    Event::Write {
                        addr: ADDR,
                        data: vec![b],
                    },
                    Event::DelayMs(2),
                ]
            })
            .collect()
    }

    #[test]
    fn test_init_sequence() {
        let (mut lcd, log) = display();
        lcd.init().unwrap();

        let mut expected = vec![Event::DelayMs(500)];
        expected.extend(paced(b"|-"));
        expected.push(Event::DelayMs(10));
        assert_eq!(events(&log), expected);
    }

    #[test]
    fn test_render_streams_lines_in_order() {
        let (mut lcd, log) = display();
        let lines = ["AAAA", "BBBB", "CCCC", "DDDD"];
        lcd.render(&lines).unwrap();

        let mut expected = paced(b"|-");
        expected.extend(paced(b"AAAABBBBCCCCDDDD"));
        assert_eq!(events(&log), expected);
    }

    #[test]
    fn test_render_transaction_count() {
        let (mut lcd, log) = display();
        let lines = [
            "CO2:        400 ppm ",
            "Temp:        25.0 C ",
            "",
            "x",
        ];
        lcd.render(&lines).unwrap();

        let log = events(&log);
        let writes = log.iter().filter(|e| matches!(e, Event::Write { .. })).count();
        let pauses = log.iter().filter(|e| **e == Event::DelayMs(2)).count();
        let total: usize = lines.iter().map(|l| l.len()).sum();
        assert_eq!(writes, 2 + total);
        assert_eq!(pauses, writes);
    }

    #[test]
    fn test_no_truncation_in_driver() {
        let (mut lcd, log) = display();
        let long = "0123456789012345678901234";
        lcd.write_str(long).unwrap();

        let writes = events(&log)
            .iter()
            .filter(|e| matches!(e, Event::Write { .. }))
            .count();
        assert_eq!(writes, long.len());
    }

    #[test]
    fn test_nack_stops_stream() {
        let (mut lcd, log) = display();
        // Clear/home succeeds, first text byte is rejected
        lcd.bus.nack_write = Some(3);

        let result = lcd.render(&["ab", "cd", "ef", "gh"]);
        assert_eq!(result, Err(DisplayError::Bus(BusError::Nack)));
        assert_eq!(events(&log), paced(b"|-"));
    }

    #[test]
    fn test_absent_display() {
        let (mut lcd, log) = display();
        lcd.bus.nack_address = Some(ADDR);

        assert_eq!(lcd.init(), Err(DisplayError::Bus(BusError::Nack)));
        // Only the power-up wait happened
        assert_eq!(events(&log), vec![Event::DelayMs(500)]);
    }

    #[test]
    fn test_custom_pacing() {
        let log = new_log();
        let config = DisplayConfig {
            byte_pacing_ms: 5,
            ..DisplayConfig::default()
        };
        let mut lcd = SerLcd::with_config(
            RecordingBus::new(log.clone()),
            RecordingDelay::new(log.clone()),
            config,
        );
        lcd.clear().unwrap();

        let log = events(&log);
        assert_eq!(log[1], Event::DelayMs(5));
        assert_eq!(log[3], Event::DelayMs(5));
    }
}
