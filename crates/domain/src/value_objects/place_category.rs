//! Closed set of amenity categories searched around a city

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Amenity category shown next to the weather
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Hotel,
    Hospital,
    MovieTheater,
    ShoppingMall,
    Cafe,
}

impl PlaceCategory {
    /// Number of categories
    pub const COUNT: usize = 5;

    /// Every category, in display order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hotel,
        Self::Hospital,
        Self::MovieTheater,
        Self::ShoppingMall,
        Self::Cafe,
    ];

    /// Stable key used in JSON payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Hospital => "hospital",
            Self::MovieTheater => "movie_theater",
            Self::ShoppingMall => "shopping_mall",
            Self::Cafe => "cafe",
        }
    }

    /// Category code understood by the places provider
    #[must_use]
    pub const fn provider_code(self) -> &'static str {
        match self {
            Self::Hotel => "accommodation.hotel",
            Self::Hospital => "healthcare.hospital",
            Self::MovieTheater => "entertainment.cinema",
            Self::ShoppingMall => "commercial.shopping_mall",
            Self::Cafe => "catering.cafe",
        }
    }

    /// Human-readable plural heading
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hotel => "Hotels",
            Self::Hospital => "Hospitals",
            Self::MovieTheater => "Movie Theaters",
            Self::ShoppingMall => "Shopping Malls",
            Self::Cafe => "Cafes",
        }
    }

    /// Position of this category in [`Self::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_codes() {
        assert_eq!(PlaceCategory::Hotel.provider_code(), "accommodation.hotel");
        assert_eq!(PlaceCategory::Hospital.provider_code(), "healthcare.hospital");
        assert_eq!(
            PlaceCategory::MovieTheater.provider_code(),
            "entertainment.cinema"
        );
        assert_eq!(
            PlaceCategory::ShoppingMall.provider_code(),
            "commercial.shopping_mall"
        );
        assert_eq!(PlaceCategory::Cafe.provider_code(), "catering.cafe");
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, category) in PlaceCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn parse_roundtrips_through_as_str() {
        for category in PlaceCategory::ALL {
            assert_eq!(category.as_str().parse::<PlaceCategory>().unwrap(), category);
        }
        assert!("museum".parse::<PlaceCategory>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        assert_eq!(
            serde_json::to_string(&PlaceCategory::MovieTheater).unwrap(),
            "\"movie_theater\""
        );
    }
}
