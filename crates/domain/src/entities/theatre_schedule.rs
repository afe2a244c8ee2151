//! Cinema show times supplied from configuration
//!
//! The schedule is an opaque payload: the search pipeline passes it through
//! unchanged and only presentation code reads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One screening, in whole local hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showing {
    /// Movie title
    pub movie: String,
    /// First hour of the screening (0-23)
    pub start: u8,
    /// Hour the screening ends (exclusive)
    pub end: u8,
}

impl Showing {
    /// Whether the screening is running during `hour`
    #[must_use]
    pub const fn is_running_at(&self, hour: u8) -> bool {
        self.start <= hour && hour < self.end
    }
}

/// Screenings keyed by theatre name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TheatreSchedule(BTreeMap<String, Vec<Showing>>);

impl TheatreSchedule {
    /// Create a schedule from a map of theatre name to screenings
    #[must_use]
    pub const fn new(theatres: BTreeMap<String, Vec<Showing>>) -> Self {
        Self(theatres)
    }

    /// Screenings for a theatre, if listed
    #[must_use]
    pub fn showings(&self, theatre: &str) -> Option<&[Showing]> {
        self.0.get(theatre).map(Vec::as_slice)
    }

    /// Titles running at `hour` in the given theatre
    #[must_use]
    pub fn now_showing(&self, theatre: &str, hour: u8) -> Vec<&str> {
        self.showings(theatre)
            .unwrap_or_default()
            .iter()
            .filter(|s| s.is_running_at(hour))
            .map(|s| s.movie.as_str())
            .collect()
    }

    /// Number of theatres listed
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no theatre is listed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> TheatreSchedule {
        serde_json::from_value(serde_json::json!({
            "SPI Cinemas - Ampa Skywalk": [
                {"movie": "Spider-Man", "start": 10, "end": 13},
                {"movie": "Dune", "start": 14, "end": 17},
                {"movie": "Barbie", "start": 18, "end": 21}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn start_hour_is_inclusive() {
        assert_eq!(
            schedule().now_showing("SPI Cinemas - Ampa Skywalk", 10),
            ["Spider-Man"]
        );
    }

    #[test]
    fn end_hour_is_exclusive() {
        assert!(
            schedule()
                .now_showing("SPI Cinemas - Ampa Skywalk", 13)
                .is_empty()
        );
    }

    #[test]
    fn unknown_theatre_shows_nothing() {
        assert!(schedule().now_showing("Nowhere", 15).is_empty());
        assert!(schedule().showings("Nowhere").is_none());
    }

    #[test]
    fn serializes_as_plain_map() {
        let json = serde_json::to_value(schedule()).unwrap();
        assert_eq!(json["SPI Cinemas - Ampa Skywalk"][1]["movie"], "Dune");
        assert_eq!(schedule().len(), 1);
        assert!(TheatreSchedule::default().is_empty());
    }
}
