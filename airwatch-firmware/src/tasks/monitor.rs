//! Measurement loop
//!
//! Starts the sensor, then forever: waits for data, reads it and puts it
//! on the display. Errors are shown on the status line together with the
//! last good values; none of them stops the loop.

use defmt::*;
use embassy_time::Timer;

use airwatch_core::traits::{CharacterDisplay, Co2Sensor, SensorError};
use airwatch_core::Measurement;
use airwatch_display::{format_error, format_measurement, format_waiting, Screen};
use airwatch_hal::BusError;

/// Measurement loop configuration
#[derive(Clone, Copy)]
pub struct MonitorConfig {
    /// Pause between data-ready checks
    pub poll_interval_ms: u64,
    /// Data-ready checks per measurement before reporting NOT READY
    pub max_ready_polls: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            // 10 s, twice the sensor's 5 s measurement interval
            max_ready_polls: 100,
        }
    }
}

/// Run the measurement loop
pub async fn monitor<S, L>(mut sensor: S, mut display: L, config: MonitorConfig) -> !
where
    S: Co2Sensor<Error = BusError>,
    L: CharacterDisplay<Error = BusError>,
{
    if let Err(e) = display.init() {
        warn!("Display init failed: {}", e);
    }
    let mut screen = format_waiting();
    show(&mut display, &mut screen);

    loop {
        // A lost start is re-sent each cycle until the sensor reports data
        if !sensor.state().is_measuring() {
            match sensor.start_periodic_measurement() {
                Ok(()) => info!("Periodic measurement started"),
                Err(e) => warn!("Sensor start failed: {}", e),
            }
        }

        let next = match next_measurement(&mut sensor, &config).await {
            Ok(m) => {
                debug!(
                    "CO2 {} ppm, {} C x10, {} %RH x10",
                    m.co2_ppm,
                    m.temperature_x10(),
                    m.humidity_x10()
                );
                format_measurement(&m)
            }
            Err(e) => {
                warn!("Measurement failed: {}", e);
                format_error(sensor.latest().as_ref(), e.label())
            }
        };
        screen.update(next);
        show(&mut display, &mut screen);
    }
}

/// Poll until data is ready, then read it
async fn next_measurement<S>(
    sensor: &mut S,
    config: &MonitorConfig,
) -> Result<Measurement, SensorError<BusError>>
where
    S: Co2Sensor<Error = BusError>,
{
    for _ in 0..config.max_ready_polls {
        Timer::after_millis(config.poll_interval_ms).await;
        if sensor.is_data_ready()? {
            return sensor.read_measurement();
        }
    }
    Err(SensorError::NotReady)
}

/// Redraw the screen if it changed; a failed redraw is retried next cycle
fn show<L: CharacterDisplay<Error = BusError>>(display: &mut L, screen: &mut Screen) {
    if !screen.is_dirty() {
        return;
    }
    let lines = screen.padded_lines();
    let rows: [&str; 4] = core::array::from_fn(|row| lines[row].as_str());
    match display.render(&rows) {
        Ok(()) => screen.mark_clean(),
        Err(e) => warn!("Display update failed: {}", e),
    }
}
