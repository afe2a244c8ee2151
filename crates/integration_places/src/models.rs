//! Places data models

use serde::{Deserialize, Serialize};

/// Parameters of a single category lookup
#[derive(Debug, Clone, PartialEq)]
pub struct PlacesQuery {
    /// Provider category code, e.g. "catering.cafe"
    pub category: String,
    /// Latitude of the circle centre
    pub latitude: f64,
    /// Longitude of the circle centre
    pub longitude: f64,
    /// Circle radius in metres
    pub radius_m: u32,
    /// Maximum number of places to return
    pub limit: usize,
}

impl PlacesQuery {
    /// Geoapify circle filter; longitude comes first
    #[must_use]
    pub fn circle_filter(&self) -> String {
        format!(
            "circle:{},{},{}",
            self.longitude, self.latitude, self.radius_m
        )
    }
}

/// A place as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Place name, when the provider knows one
    pub name: Option<String>,
    /// Full formatted address
    pub formatted: Option<String>,
    /// Secondary address line
    pub address_line2: Option<String>,
}

/// Geoapify GeoJSON feature collection
#[derive(Debug, Deserialize)]
pub(crate) struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    #[serde(default)]
    pub properties: Place,
}

impl FeatureCollection {
    pub fn into_places(self, limit: usize) -> Vec<Place> {
        self.features
            .into_iter()
            .map(|f| f.properties)
            .take(limit)
            .collect()
    }
}
