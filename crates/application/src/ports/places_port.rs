//! Places service port

use async_trait::async_trait;
use domain::{GeoLocation, PlaceCategory, PlaceRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for nearby-amenity lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlacesPort: Send + Sync {
    /// Find places of one category within `radius_m` metres of `center`
    ///
    /// Records come back in provider order, at most `limit` of them.
    async fn find_places(
        &self,
        category: PlaceCategory,
        center: &GeoLocation,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<PlaceRecord>, ApplicationError>;

    /// Check if the places service is available
    async fn is_available(&self) -> bool;
}
