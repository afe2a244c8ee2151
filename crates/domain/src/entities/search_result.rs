//! Outcome of one successful city search

use super::{HealthTips, PlacesByCategory, WeatherSnapshot};
use crate::value_objects::{HeatIndex, HospitalAdvisory};

/// Everything produced by one search, immutable once assembled
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    weather: WeatherSnapshot,
    heat_index: HeatIndex,
    tips: HealthTips,
    places: PlacesByCategory,
}

impl SearchResult {
    /// Assemble a result; the heat index is derived from `weather`
    #[must_use]
    pub fn assemble(weather: WeatherSnapshot, tips: HealthTips, places: PlacesByCategory) -> Self {
        let heat_index = weather.heat_index();
        Self {
            weather,
            heat_index,
            tips,
            places,
        }
    }

    /// Current conditions
    #[must_use]
    pub const fn weather(&self) -> &WeatherSnapshot {
        &self.weather
    }

    /// Derived heat index
    #[must_use]
    pub const fn heat_index(&self) -> HeatIndex {
        self.heat_index
    }

    /// Health tips, possibly the fallback list
    #[must_use]
    pub const fn tips(&self) -> &HealthTips {
        &self.tips
    }

    /// Nearby places for every category
    #[must_use]
    pub const fn places(&self) -> &PlacesByCategory {
        &self.places
    }

    /// Advisory annotating hospital entries
    #[must_use]
    pub fn hospital_advisory(&self) -> HospitalAdvisory {
        self.weather.hospital_advisory()
    }
}
