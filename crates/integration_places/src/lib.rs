#![forbid(unsafe_code)]
//! Places integration for HeatGuard
//!
//! Looks up amenities around a coordinate with the Geoapify Places API
//! (<https://apidocs.geoapify.com/docs/places/>). Each call covers one
//! category inside a circular geofence.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{GeoapifyClient, PlacesConfig, PlacesProvider, PlacesQuery};
//!
//! let client = GeoapifyClient::new(&PlacesConfig::default())?;
//! let cafes = client
//!     .search(&PlacesQuery {
//!         category: "catering.cafe".to_string(),
//!         latitude: 13.08,
//!         longitude: 80.27,
//!         radius_m: 5000,
//!         limit: 5,
//!     })
//!     .await?;
//! ```

mod config;
mod error;
mod geoapify;
mod models;
mod provider;

pub use config::PlacesConfig;
pub use error::PlacesError;
pub use geoapify::GeoapifyClient;
pub use models::{Place, PlacesQuery};
pub use provider::PlacesProvider;
