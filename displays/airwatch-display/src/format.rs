//! Measurement screen layout
//!
//! ```text
//! ┌────────────────────┐
//! │CO2:         400 ppm│
//! │Temp:         25.0 C│
//! │Humidity:     50.0 %│
//! │Status: OK          │
//! └────────────────────┘
//! ```
//!
//! Values are right-aligned against their unit so digits stay in place
//! between updates.

use core::fmt::Write;

use airwatch_core::Measurement;
use heapless::String;

use crate::screen::Screen;

/// Scratch buffer, wider than a row so overlong values truncate instead of vanishing
type Scratch = String<32>;

fn line(args: core::fmt::Arguments<'_>) -> Scratch {
    let mut s = Scratch::new();
    // Overflow only drops the tail; Screen truncates to the row width anyway
    let _ = s.write_fmt(args);
    s
}

fn value_lines(screen: &mut Screen, measurement: &Measurement) {
    screen.set_line(0, &line(format_args!("CO2:{:>12} ppm", measurement.co2_ppm)));
    screen.set_line(
        1,
        &line(format_args!("Temp:{:>13.1} C", measurement.temperature_c)),
    );
    screen.set_line(
        2,
        &line(format_args!("Humidity:{:>9.1} %", measurement.humidity_percent)),
    );
}

/// Lay out a fresh measurement
pub fn format_measurement(measurement: &Measurement) -> Screen {
    let mut screen = Screen::new();
    value_lines(&mut screen, measurement);
    screen.set_line(3, "Status: OK");
    screen
}

/// Lay out the screen shown while waiting for the first measurement
pub fn format_waiting() -> Screen {
    let mut screen = Screen::new();
    screen.set_line(0, &line(format_args!("CO2:{:>12} ppm", "--")));
    screen.set_line(1, &line(format_args!("Temp:{:>13} C", "--")));
    screen.set_line(2, &line(format_args!("Humidity:{:>9} %", "--")));
    screen.set_line(3, "Status: WARMING UP");
    screen
}

/// Lay out an error, keeping the last good values if there are any
pub fn format_error(last: Option<&Measurement>, label: &str) -> Screen {
    let mut screen = match last {
        Some(m) => {
            let mut screen = Screen::new();
            value_lines(&mut screen, m);
            screen
        }
        None => format_waiting(),
    };
    screen.set_line(3, &line(format_args!("ERR: {}", label)));
    screen
}
