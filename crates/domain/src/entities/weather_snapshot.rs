//! Current weather for one searched city

use serde::Serialize;

use crate::errors::DomainError;
use crate::value_objects::{GeoLocation, HeatIndex, HospitalAdvisory, Humidity};

/// Normalized current conditions, produced once per search
///
/// Immutable after construction; every downstream computation reads
/// from it but never modifies it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    city: String,
    country: String,
    temperature_c: f64,
    humidity: Humidity,
    description: String,
    location: GeoLocation,
}

impl WeatherSnapshot {
    /// Create a snapshot
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the temperature is not a
    /// finite number.
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        temperature_c: f64,
        humidity: Humidity,
        description: impl Into<String>,
        location: GeoLocation,
    ) -> Result<Self, DomainError> {
        if !temperature_c.is_finite() {
            return Err(DomainError::validation("temperature must be a finite number"));
        }
        Ok(Self {
            city: city.into(),
            country: country.into(),
            temperature_c,
            humidity,
            description: description.into(),
            location,
        })
    }

    /// City name as reported by the provider
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// ISO country code
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Air temperature in °C
    #[must_use]
    pub const fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Relative humidity
    #[must_use]
    pub const fn humidity(&self) -> Humidity {
        self.humidity
    }

    /// Short condition description, e.g. "scattered clouds"
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Coordinates of the city
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Heat index derived from temperature and humidity
    #[must_use]
    pub fn heat_index(&self) -> HeatIndex {
        HeatIndex::compute(self.temperature_c, self.humidity)
    }

    /// Advisory for visiting a hospital under the current conditions
    #[must_use]
    pub fn hospital_advisory(&self) -> HospitalAdvisory {
        HospitalAdvisory::for_temperature(Some(self.temperature_c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::AdvisoryTier;

    fn chennai() -> WeatherSnapshot {
        WeatherSnapshot::new(
            "Chennai",
            "IN",
            34.0,
            Humidity::clamped(70),
            "haze",
            GeoLocation::new(13.0827, 80.2707).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn accessors_return_constructed_values() {
        let s = chennai();
        assert_eq!(s.city(), "Chennai");
        assert_eq!(s.country(), "IN");
        assert!((s.temperature_c() - 34.0).abs() < f64::EPSILON);
        assert_eq!(s.humidity().value(), 70);
        assert_eq!(s.description(), "haze");
        assert!((s.location().latitude() - 13.0827).abs() < f64::EPSILON);
    }

    #[test]
    fn heat_index_is_derived() {
        assert!((chennai().heat_index().value() - 56.4).abs() < 1e-9);
    }

    #[test]
    fn hospital_advisory_uses_temperature() {
        assert_eq!(chennai().hospital_advisory().tier(), AdvisoryTier::Caution);
    }

    #[test]
    fn rejects_non_finite_temperature() {
        let result = WeatherSnapshot::new(
            "X",
            "Y",
            f64::INFINITY,
            Humidity::clamped(10),
            "",
            GeoLocation::new(0.0, 0.0).unwrap(),
        );
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }
}
