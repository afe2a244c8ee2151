//! Heat index value object
//!
//! A simplified heat-stress indicator derived from air temperature and
//! relative humidity:
//!
//! ```text
//! heat_index = round_1(temperature_c + 0.33 * humidity_pct - 0.7)
//! ```
//!
//! Rounding is `(x * 10).round() / 10`, i.e. half away from zero at the
//! first decimal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Humidity;

const HUMIDITY_WEIGHT: f64 = 0.33;
const OFFSET_C: f64 = 0.7;

/// Derived "feels like" temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeatIndex(f64);

impl HeatIndex {
    /// Compute the heat index for a temperature and humidity
    #[must_use]
    pub fn compute(temperature_c: f64, humidity: Humidity) -> Self {
        let raw = HUMIDITY_WEIGHT.mul_add(f64::from(humidity), temperature_c) - OFFSET_C;
        Self(round_to_tenth(raw))
    }

    /// Get the value in degrees Celsius, rounded to one decimal
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for HeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Round half away from zero to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn chennai_example() {
        let hi = HeatIndex::compute(34.0, Humidity::clamped(70));
        assert!(approx(hi.value(), 56.4), "got {}", hi.value());
    }

    #[test]
    fn dry_cool_day() {
        let hi = HeatIndex::compute(20.0, Humidity::clamped(0));
        assert!(approx(hi.value(), 19.3));
    }

    #[test]
    fn sample_payload_values() {
        let hi = HeatIndex::compute(35.2, Humidity::clamped(68));
        assert!(approx(hi.value(), 56.9), "got {}", hi.value());
    }

    #[test]
    fn negative_temperatures_round_away_from_zero() {
        assert!(approx(round_to_tenth(-1.25), -1.3));
        assert!(approx(round_to_tenth(1.25), 1.3));
    }

    #[test]
    fn deterministic() {
        let a = HeatIndex::compute(31.7, Humidity::clamped(55));
        let b = HeatIndex::compute(31.7, Humidity::clamped(55));
        assert_eq!(a, b);
    }

    #[test]
    fn display_has_one_decimal() {
        let hi = HeatIndex::compute(34.0, Humidity::clamped(70));
        assert_eq!(hi.to_string(), "56.4°C");
    }

    #[test]
    fn serializes_as_number() {
        let hi = HeatIndex::compute(34.0, Humidity::clamped(70));
        assert_eq!(serde_json::to_string(&hi).unwrap(), "56.4");
    }
}
