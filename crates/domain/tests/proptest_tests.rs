//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    AdvisoryTier, CityQuery, GeoLocation, HealthTips, HeatIndex, HospitalAdvisory, Humidity,
    MAX_PLACES_PER_CATEGORY, MAX_TIPS, PlaceCategory, PlaceRecord, PlacesByCategory,
};
use proptest::prelude::*;

// ============================================================================
// HeatIndex Property Tests
// ============================================================================

mod heat_index_tests {
    use super::*;

    proptest! {
        #[test]
        fn same_inputs_same_output(
            temp in -50.0f64..60.0f64,
            humidity in 0u8..=100u8
        ) {
            let h = Humidity::clamped(humidity);
            prop_assert_eq!(HeatIndex::compute(temp, h), HeatIndex::compute(temp, h));
        }

        #[test]
        fn result_has_at_most_one_decimal(
            temp in -50.0f64..60.0f64,
            humidity in 0u8..=100u8
        ) {
            let value = HeatIndex::compute(temp, Humidity::clamped(humidity)).value();
            let scaled = value * 10.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }

        #[test]
        fn stays_within_half_tenth_of_formula(
            temp in -50.0f64..60.0f64,
            humidity in 0u8..=100u8
        ) {
            let raw = temp + 0.33 * f64::from(humidity) - 0.7;
            let value = HeatIndex::compute(temp, Humidity::clamped(humidity)).value();
            prop_assert!((value - raw).abs() <= 0.05 + 1e-9);
        }

        #[test]
        fn monotonic_in_humidity(
            temp in -50.0f64..60.0f64,
            low in 0u8..=100u8,
            high in 0u8..=100u8
        ) {
            let (low, high) = if low <= high { (low, high) } else { (high, low) };
            let a = HeatIndex::compute(temp, Humidity::clamped(low));
            let b = HeatIndex::compute(temp, Humidity::clamped(high));
            prop_assert!(a.value() <= b.value());
        }
    }
}

// ============================================================================
// Advisory Property Tests
// ============================================================================

mod advisory_tests {
    use super::*;

    proptest! {
        #[test]
        fn tiers_follow_half_open_intervals(temp in -60.0f64..80.0f64) {
            let tier = AdvisoryTier::for_temperature(temp);
            let expected = if temp < 30.0 {
                AdvisoryTier::Safe
            } else if temp < 40.0 {
                AdvisoryTier::Caution
            } else {
                AdvisoryTier::Urgent
            };
            prop_assert_eq!(tier, expected);
        }

        #[test]
        fn known_temperature_label_matches_tier(temp in -60.0f64..80.0f64) {
            let advisory = HospitalAdvisory::for_temperature(Some(temp));
            prop_assert_eq!(advisory.label(), advisory.tier().label());
        }
    }
}

// ============================================================================
// Humidity and GeoLocation Property Tests
// ============================================================================

mod humidity_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_range_accepted(value in 0u16..=100u16) {
            let h = Humidity::new(value).unwrap();
            prop_assert_eq!(u16::from(h.value()), value);
        }

        #[test]
        fn above_range_rejected(value in 101u16..=u16::MAX) {
            prop_assert!(Humidity::new(value).is_err());
        }

        #[test]
        fn clamped_never_exceeds_max(value in any::<u8>()) {
            prop_assert!(Humidity::clamped(value).value() <= Humidity::MAX);
        }
    }
}

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![(-1000.0f64..-90.1f64), (90.1f64..1000.0f64)],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// CityQuery Property Tests
// ============================================================================

mod city_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn whitespace_only_is_rejected(ws in "[ \t\n\r]{0,20}") {
            prop_assert!(CityQuery::parse(&ws).is_err());
        }

        #[test]
        fn parsed_value_is_trimmed(
            pad_left in "[ \t]{0,5}",
            name in "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]",
            pad_right in "[ \t]{0,5}"
        ) {
            let query = CityQuery::parse(&format!("{pad_left}{name}{pad_right}")).unwrap();
            prop_assert_eq!(query.as_str(), name.as_str());
        }
    }
}

// ============================================================================
// Aggregate Property Tests
// ============================================================================

mod aggregate_tests {
    use super::*;

    fn category_strategy() -> impl Strategy<Value = PlaceCategory> {
        prop::sample::select(PlaceCategory::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn places_always_hold_every_key_with_capped_lists(
            entries in prop::collection::vec((category_strategy(), 0usize..12), 0..8)
        ) {
            let places = PlacesByCategory::from_entries(entries.into_iter().map(|(c, n)| {
                let records = (0..n)
                    .map(|i| PlaceRecord::new(c, Some(format!("{c} {i}")), None, None))
                    .collect();
                (c, records)
            }));

            prop_assert_eq!(places.iter().count(), PlaceCategory::COUNT);
            for (_, records) in places.iter() {
                prop_assert!(records.len() <= MAX_PLACES_PER_CATEGORY);
            }
        }

        #[test]
        fn generated_tips_never_exceed_cap(
            tips in prop::collection::vec("[a-z ]{0,12}", 0..12)
        ) {
            match HealthTips::from_generated(tips.clone()) {
                Some(parsed) => {
                    prop_assert!(!parsed.is_empty());
                    prop_assert!(parsed.len() <= MAX_TIPS);
                },
                None => prop_assert!(tips.iter().all(|t| t.trim().is_empty())),
            }
        }
    }
}
