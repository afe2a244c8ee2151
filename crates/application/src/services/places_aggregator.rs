//! Nearby amenity aggregation
//!
//! Queries the places port once per category, concurrently. A failed or
//! slow category ends up empty without touching the others.

use std::sync::Arc;
use std::time::Duration;

use domain::{GeoLocation, PlaceCategory, PlaceRecord, PlacesByCategory};
use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::PlacesPort;

/// Geofence and budget for place lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacesQueryConfig {
    /// Search radius around the city centre in metres
    pub radius_m: u32,
    /// Maximum places per category
    pub limit: usize,
    /// Timeout for each category lookup
    pub timeout: Duration,
}

impl Default for PlacesQueryConfig {
    fn default() -> Self {
        Self {
            radius_m: 5000,
            limit: 5,
            timeout: Duration::from_secs(8),
        }
    }
}

/// Collects places for every category around a location
pub struct PlacesAggregator {
    places: Arc<dyn PlacesPort>,
    config: PlacesQueryConfig,
}

impl std::fmt::Debug for PlacesAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAggregator")
            .field("places", &"<PlacesPort>")
            .field("config", &self.config)
            .finish()
    }
}

impl PlacesAggregator {
    #[must_use]
    pub fn new(places: Arc<dyn PlacesPort>, config: PlacesQueryConfig) -> Self {
        Self { places, config }
    }

    /// Look up all categories concurrently
    ///
    /// Always returns every category; failed ones are empty.
    #[instrument(skip(self), fields(radius_m = self.config.radius_m))]
    pub async fn aggregate(&self, center: GeoLocation) -> PlacesByCategory {
        let lookups = PlaceCategory::ALL
            .iter()
            .map(|&category| self.lookup(category, center));

        let places = PlacesByCategory::from_entries(join_all(lookups).await);

        debug!(total = places.total(), "Places aggregated");
        places
    }

    async fn lookup(
        &self,
        category: PlaceCategory,
        center: GeoLocation,
    ) -> (PlaceCategory, Vec<PlaceRecord>) {
        let request =
            self.places
                .find_places(category, &center, self.config.radius_m, self.config.limit);

        match timeout(self.config.timeout, request).await {
            Ok(Ok(records)) => (category, records),
            Ok(Err(e)) => {
                warn!(
                    category = category.as_str(),
                    error = %e,
                    "Place lookup failed, leaving category empty"
                );
                (category, Vec::new())
            },
            Err(_) => {
                warn!(
                    category = category.as_str(),
                    timeout_ms = self.config.timeout.as_millis(),
                    "Place lookup timed out, leaving category empty"
                );
                (category, Vec::new())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockPlacesPort;

    fn center() -> GeoLocation {
        GeoLocation::new(13.0878, 80.2785).unwrap()
    }

    fn records(category: PlaceCategory, n: usize) -> Vec<PlaceRecord> {
        (0..n)
            .map(|i| PlaceRecord::new(category, Some(format!("{} {i}", category.as_str())), None, None))
            .collect()
    }

    fn aggregator(mock: MockPlacesPort) -> PlacesAggregator {
        PlacesAggregator::new(Arc::new(mock), PlacesQueryConfig::default())
    }

    #[test]
    fn default_config() {
        let config = PlacesQueryConfig::default();
        assert_eq!(config.radius_m, 5000);
        assert_eq!(config.limit, 5);
    }

    #[tokio::test]
    async fn all_categories_succeed() {
        let mut mock = MockPlacesPort::new();
        mock.expect_find_places()
            .times(PlaceCategory::COUNT)
            .returning(|category, _, _, _| Ok(records(category, 2)));

        let places = aggregator(mock).aggregate(center()).await;

        assert_eq!(places.total(), 10);
        for (category, list) in places.iter() {
            assert_eq!(list.len(), 2);
            assert!(list.iter().all(|r| r.category() == category));
        }
    }

    #[tokio::test]
    async fn passes_geofence_and_limit() {
        let mut mock = MockPlacesPort::new();
        mock.expect_find_places()
            .withf(|_, center, radius, limit| {
                (center.latitude() - 13.0878).abs() < 1e-9 && *radius == 5000 && *limit == 5
            })
            .times(PlaceCategory::COUNT)
            .returning(|_, _, _, _| Ok(Vec::new()));

        let places = aggregator(mock).aggregate(center()).await;
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn one_failing_category_leaves_others_intact() {
        let mut mock = MockPlacesPort::new();
        mock.expect_find_places()
            .times(PlaceCategory::COUNT)
            .returning(|category, _, _, _| {
                if category == PlaceCategory::Hospital {
                    Err(ApplicationError::ExternalService("HTTP 500".to_string()))
                } else {
                    Ok(records(category, 3))
                }
            });

        let places = aggregator(mock).aggregate(center()).await;

        assert!(places.get(PlaceCategory::Hospital).is_empty());
        for category in PlaceCategory::ALL {
            if category != PlaceCategory::Hospital {
                assert_eq!(places.get(category).len(), 3);
            }
        }
    }

    #[tokio::test]
    async fn all_failing_still_returns_every_key() {
        let mut mock = MockPlacesPort::new();
        mock.expect_find_places()
            .times(PlaceCategory::COUNT)
            .returning(|_, _, _, _| Err(ApplicationError::Network("refused".to_string())));

        let places = aggregator(mock).aggregate(center()).await;

        assert_eq!(places.iter().count(), PlaceCategory::COUNT);
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn oversized_provider_lists_are_capped() {
        let mut mock = MockPlacesPort::new();
        mock.expect_find_places()
            .times(PlaceCategory::COUNT)
            .returning(|category, _, _, _| Ok(records(category, 9)));

        let places = aggregator(mock).aggregate(center()).await;

        for (_, list) in places.iter() {
            assert_eq!(list.len(), 5);
        }
    }

    struct SlowCafes;

    #[async_trait::async_trait]
    impl PlacesPort for SlowCafes {
        async fn find_places(
            &self,
            category: PlaceCategory,
            _center: &GeoLocation,
            _radius_m: u32,
            _limit: usize,
        ) -> Result<Vec<PlaceRecord>, ApplicationError> {
            if category == PlaceCategory::Cafe {
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
            Ok(records(category, 1))
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn slow_category_times_out_alone() {
        let config = PlacesQueryConfig {
            timeout: Duration::from_millis(50),
            ..PlacesQueryConfig::default()
        };
        let places = PlacesAggregator::new(Arc::new(SlowCafes), config)
            .aggregate(center())
            .await;

        assert!(places.get(PlaceCategory::Cafe).is_empty());
        assert_eq!(places.total(), 4);
    }
}
