//! Nearby amenities grouped by category

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::value_objects::PlaceCategory;

/// Name used when the provider omits one
pub const UNKNOWN_PLACE_NAME: &str = "Unknown";

/// Maximum number of places kept per category
pub const MAX_PLACES_PER_CATEGORY: usize = 5;

/// A single amenity returned by the places provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceRecord {
    #[serde(skip)]
    category: PlaceCategory,
    name: String,
    formatted: String,
    address: String,
}

impl PlaceRecord {
    /// Create a record, applying defaults for missing fields
    ///
    /// A missing or blank name becomes "Unknown"; missing address lines
    /// become empty strings.
    #[must_use]
    pub fn new(
        category: PlaceCategory,
        name: Option<String>,
        formatted: Option<String>,
        address: Option<String>,
    ) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_PLACE_NAME.to_string());
        Self {
            category,
            name,
            formatted: formatted.unwrap_or_default(),
            address: address.unwrap_or_default(),
        }
    }

    /// Category this record belongs to
    #[must_use]
    pub const fn category(&self) -> PlaceCategory {
        self.category
    }

    /// Place name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full formatted address, possibly empty
    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Secondary address line, possibly empty
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Places for every category, always holding all five keys
///
/// Each category owns one slot; a failed lookup leaves its slot empty
/// without touching the others.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlacesByCategory {
    slots: [Vec<PlaceRecord>; PlaceCategory::COUNT],
}

impl PlacesByCategory {
    /// All categories present, all empty
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from per-category results
    ///
    /// Categories missing from `entries` stay empty. Records whose tag
    /// does not match the slot are dropped, and each slot is capped at
    /// [`MAX_PLACES_PER_CATEGORY`] keeping provider order.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PlaceCategory, Vec<PlaceRecord>)>,
    {
        let mut places = Self::empty();
        for (category, records) in entries {
            places.slots[category.index()] = records
                .into_iter()
                .filter(|r| r.category == category)
                .take(MAX_PLACES_PER_CATEGORY)
                .collect();
        }
        places
    }

    /// Places for one category
    #[must_use]
    pub fn get(&self, category: PlaceCategory) -> &[PlaceRecord] {
        &self.slots[category.index()]
    }

    /// Iterate categories in display order with their places
    pub fn iter(&self) -> impl Iterator<Item = (PlaceCategory, &[PlaceRecord])> {
        PlaceCategory::ALL
            .into_iter()
            .map(move |c| (c, self.slots[c.index()].as_slice()))
    }

    /// Total number of places across categories
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// True when no category has any place
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Serialize for PlacesByCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PlaceCategory::COUNT))?;
        for (category, records) in self.iter() {
            map.serialize_entry(category.as_str(), records)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: PlaceCategory, name: &str) -> PlaceRecord {
        PlaceRecord::new(category, Some(name.to_string()), None, None)
    }

    #[test]
    fn missing_fields_get_defaults() {
        let r = PlaceRecord::new(PlaceCategory::Cafe, None, None, None);
        assert_eq!(r.name(), "Unknown");
        assert_eq!(r.formatted(), "");
        assert_eq!(r.address(), "");
        assert_eq!(r.category(), PlaceCategory::Cafe);
    }

    #[test]
    fn blank_name_becomes_unknown() {
        let r = PlaceRecord::new(PlaceCategory::Hotel, Some("  ".to_string()), None, None);
        assert_eq!(r.name(), UNKNOWN_PLACE_NAME);
    }

    #[test]
    fn empty_has_all_keys() {
        let places = PlacesByCategory::empty();
        assert_eq!(places.iter().count(), PlaceCategory::COUNT);
        assert!(places.is_empty());
    }

    #[test]
    fn from_entries_caps_each_category() {
        let hotels: Vec<_> = (0..8)
            .map(|i| record(PlaceCategory::Hotel, &format!("Hotel {i}")))
            .collect();
        let places = PlacesByCategory::from_entries([(PlaceCategory::Hotel, hotels)]);

        let kept = places.get(PlaceCategory::Hotel);
        assert_eq!(kept.len(), MAX_PLACES_PER_CATEGORY);
        assert_eq!(kept[0].name(), "Hotel 0");
        assert_eq!(kept[4].name(), "Hotel 4");
        assert!(places.get(PlaceCategory::Cafe).is_empty());
    }

    #[test]
    fn from_entries_drops_mismatched_tags() {
        let places = PlacesByCategory::from_entries([(
            PlaceCategory::Hospital,
            vec![
                record(PlaceCategory::Hospital, "Apollo"),
                record(PlaceCategory::Cafe, "Brew & Co"),
            ],
        )]);
        assert_eq!(places.get(PlaceCategory::Hospital).len(), 1);
        assert_eq!(places.total(), 1);
    }

    #[test]
    fn serializes_every_key_in_order() {
        let places = PlacesByCategory::from_entries([(
            PlaceCategory::Cafe,
            vec![PlaceRecord::new(
                PlaceCategory::Cafe,
                Some("Brew & Co".to_string()),
                Some("Mount Road, Chennai".to_string()),
                Some("Mount Road".to_string()),
            )],
        )]);

        let json = serde_json::to_string(&places).unwrap();
        assert_eq!(
            json,
            r#"{"hotel":[],"hospital":[],"movie_theater":[],"shopping_mall":[],"cafe":[{"name":"Brew & Co","formatted":"Mount Road, Chennai","address":"Mount Road"}]}"#
        );
    }
}
