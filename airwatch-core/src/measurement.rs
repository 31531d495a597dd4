//! Physical measurement values
//!
//! The SCD41 maps the full 16-bit raw range linearly onto its physical
//! ranges:
//!
//! - CO2: raw count is ppm
//! - temperature: `-45 + 175 * raw / 65535` °C  (−45.0 ..= 130.0)
//! - humidity: `100 * raw / 65535` %RH  (0.0 ..= 100.0)

/// Full-scale raw value
const RAW_FULL_SCALE: f64 = 65535.0;

/// Lowest reportable temperature (°C)
pub const TEMPERATURE_MIN_C: f32 = -45.0;

/// Highest reportable temperature (°C)
pub const TEMPERATURE_MAX_C: f32 = 130.0;

/// Temperature span (°C)
const TEMPERATURE_SPAN_C: f64 = 175.0;

/// One decoded sensor reading
///
/// Produced whole by a single successful read and replaced whole by the
/// next one. Handed out by copy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// CO2 concentration (ppm)
    pub co2_ppm: u16,
    /// Temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_percent: f32,
}

impl Measurement {
    /// Decode raw sensor words
    pub fn from_raw(raw_co2: u16, raw_temperature: u16, raw_humidity: u16) -> Self {
        Self {
            co2_ppm: raw_co2,
            temperature_c: temperature_from_raw(raw_temperature),
            humidity_percent: humidity_from_raw(raw_humidity),
        }
    }

    /// Temperature in 0.1 °C units, rounded to nearest
    pub fn temperature_x10(&self) -> i16 {
        round_x10(self.temperature_c)
    }

    /// Humidity in 0.1 %RH units, rounded to nearest
    pub fn humidity_x10(&self) -> i16 {
        round_x10(self.humidity_percent)
    }
}

/// Convert a raw temperature word to °C
pub fn temperature_from_raw(raw: u16) -> f32 {
    (-45.0 + TEMPERATURE_SPAN_C * (f64::from(raw) / RAW_FULL_SCALE)) as f32
}

/// Convert a raw humidity word to %RH
pub fn humidity_from_raw(raw: u16) -> f32 {
    (100.0 * (f64::from(raw) / RAW_FULL_SCALE)) as f32
}

fn round_x10(value: f32) -> i16 {
    // core has no f32::round; round half away from zero by hand
    let scaled = value * 10.0;
    let biased = if scaled >= 0.0 {
        scaled + 0.5
    } else {
        scaled - 0.5
    };
    biased as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_temperature_endpoints() {
        assert_eq!(temperature_from_raw(0), TEMPERATURE_MIN_C);
        assert!((temperature_from_raw(u16::MAX) - TEMPERATURE_MAX_C).abs() < EPSILON);
    }

    #[test]
    fn test_humidity_endpoints() {
        assert_eq!(humidity_from_raw(0), 0.0);
        assert!((humidity_from_raw(u16::MAX) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_reference_frame_values() {
        let m = Measurement::from_raw(400, 0x6666, 0x8000);
        assert_eq!(m.co2_ppm, 400);
        assert!((m.temperature_c - 25.0).abs() < 0.01);
        assert!((m.humidity_percent - 50.0).abs() < 0.01);
        assert_eq!(m.temperature_x10(), 250);
        assert_eq!(m.humidity_x10(), 500);
    }

    #[test]
    fn test_negative_rounding() {
        let m = Measurement {
            co2_ppm: 0,
            temperature_c: -12.36,
            humidity_percent: 0.0,
        };
        assert_eq!(m.temperature_x10(), -124);
    }

    proptest! {
        #[test]
        fn temperature_in_range(raw in any::<u16>()) {
            let t = temperature_from_raw(raw);
            prop_assert!(t >= TEMPERATURE_MIN_C && t <= TEMPERATURE_MAX_C + EPSILON);
        }

        #[test]
        fn temperature_strictly_increasing(raw in 0u16..u16::MAX) {
            prop_assert!(temperature_from_raw(raw + 1) > temperature_from_raw(raw));
        }

        #[test]
        fn humidity_in_range(raw in any::<u16>()) {
            let h = humidity_from_raw(raw);
            prop_assert!(h >= 0.0 && h <= 100.0 + EPSILON);
        }

        #[test]
        fn humidity_strictly_increasing(raw in 0u16..u16::MAX) {
            prop_assert!(humidity_from_raw(raw + 1) > humidity_from_raw(raw));
        }

        #[test]
        fn co2_is_identity(raw in any::<u16>()) {
            prop_assert_eq!(Measurement::from_raw(raw, 0, 0).co2_ppm, raw);
        }
    }
}
