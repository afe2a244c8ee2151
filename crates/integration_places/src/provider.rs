//! Places provider trait

use async_trait::async_trait;

use crate::{Place, PlacesError, PlacesQuery};

/// Trait for places providers
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Look up places of one category around a point
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    /// An empty area is not an error.
    async fn search(&self, query: &PlacesQuery) -> Result<Vec<Place>, PlacesError>;

    /// Check if the provider is reachable
    async fn is_healthy(&self) -> bool;

    /// Get the provider name (e.g., "geoapify")
    fn provider_name(&self) -> &'static str;
}
