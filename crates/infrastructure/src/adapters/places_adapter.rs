//! Places adapter - Implements PlacesPort using integration_places

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::PlacesPort;
use async_trait::async_trait;
use domain::{GeoLocation, PlaceCategory, PlaceRecord};
use integration_places::{GeoapifyClient, Place, PlacesConfig, PlacesError, PlacesProvider, PlacesQuery};
use tracing::{debug, instrument};

/// Adapter for nearby amenities using the Geoapify Places API
pub struct PlacesAdapter {
    provider: Arc<dyn PlacesProvider>,
}

impl std::fmt::Debug for PlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAdapter")
            .field("provider", &self.provider.provider_name())
            .finish()
    }
}

impl PlacesAdapter {
    /// Create an adapter backed by Geoapify
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &PlacesConfig) -> Result<Self, ApplicationError> {
        let client = GeoapifyClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_provider(Arc::new(client)))
    }

    /// Create an adapter over any places provider
    #[must_use]
    pub fn with_provider(provider: Arc<dyn PlacesProvider>) -> Self {
        Self { provider }
    }

    fn map_error(err: PlacesError) -> ApplicationError {
        match err {
            e @ (PlacesError::ConnectionFailed(_) | PlacesError::Timeout { .. }) => {
                ApplicationError::Network(e.to_string())
            },
            PlacesError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
            PlacesError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            e => ApplicationError::ExternalService(e.to_string()),
        }
    }

    fn to_record(category: PlaceCategory, place: Place) -> PlaceRecord {
        PlaceRecord::new(category, place.name, place.formatted, place.address_line2)
    }
}

#[async_trait]
impl PlacesPort for PlacesAdapter {
    #[instrument(skip(self, center), fields(category = category.as_str(), radius_m, limit))]
    async fn find_places(
        &self,
        category: PlaceCategory,
        center: &GeoLocation,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<PlaceRecord>, ApplicationError> {
        let query = PlacesQuery {
            category: category.provider_code().to_string(),
            latitude: center.latitude(),
            longitude: center.longitude(),
            radius_m,
            limit,
        };

        let places = self.provider.search(&query).await.map_err(Self::map_error)?;
        debug!(count = places.len(), "Retrieved places");

        Ok(places
            .into_iter()
            .map(|place| Self::to_record(category, place))
            .collect())
    }

    async fn is_available(&self) -> bool {
        self.provider.is_healthy().await
    }
}
