//! Geoapify Places API client

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};

use crate::{
    config::PlacesConfig,
    error::PlacesError,
    models::{FeatureCollection, Place, PlacesQuery},
    provider::PlacesProvider,
};

/// Upper bound Geoapify accepts for `limit`
const MAX_LIMIT: usize = 500;

/// Geoapify Places API client
#[derive(Debug)]
pub struct GeoapifyClient {
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
    timeout_secs: u64,
}

impl GeoapifyClient {
    /// Create a new Geoapify client
    ///
    /// A missing API key is accepted here; lookups then fail with
    /// [`PlacesError::AuthenticationFailed`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        info!(base_url = %config.base_url, "Geoapify client initialized");

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/places", self.base_url)
    }

    fn validate_query(query: &PlacesQuery) -> Result<(), PlacesError> {
        if query.category.trim().is_empty() {
            return Err(PlacesError::InvalidQuery(
                "Category cannot be empty".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&query.latitude) || !(-180.0..=180.0).contains(&query.longitude)
        {
            return Err(PlacesError::InvalidQuery(format!(
                "Coordinates out of range: {}, {}",
                query.latitude, query.longitude
            )));
        }
        if query.radius_m == 0 || query.limit == 0 {
            return Err(PlacesError::InvalidQuery(
                "radius and limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The request URL carries the API key, so it is stripped from the text
    fn map_send_error(&self, err: reqwest::Error) -> PlacesError {
        let err = err.without_url();
        if err.is_timeout() {
            PlacesError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else if err.is_connect() {
            PlacesError::ConnectionFailed(err.to_string())
        } else {
            PlacesError::RequestFailed(err.to_string())
        }
    }
}

#[async_trait]
impl PlacesProvider for GeoapifyClient {
    #[instrument(skip(self, query), fields(provider = "geoapify", category = %query.category))]
    async fn search(&self, query: &PlacesQuery) -> Result<Vec<Place>, PlacesError> {
        Self::validate_query(query)?;

        let api_key = self.api_key.as_ref().ok_or_else(|| {
            PlacesError::AuthenticationFailed("Geoapify API key not configured".to_string())
        })?;

        let url = self.endpoint();
        let filter = query.circle_filter();
        let limit = query.limit.min(MAX_LIMIT).to_string();
        let start = Instant::now();

        debug!(url = %url, filter = %filter, "Sending Geoapify request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("categories", query.category.as_str()),
                ("filter", filter.as_str()),
                ("limit", limit.as_str()),
                ("apiKey", api_key.expose_secret()),
            ])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        debug!(status = %status, "Received Geoapify response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            return Err(PlacesError::RateLimitExceeded {
                retry_after_secs: retry_after,
            });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PlacesError::AuthenticationFailed(
                "Invalid Geoapify API key".to_string(),
            ));
        }

        if status.is_server_error() {
            return Err(PlacesError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlacesError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let collection: FeatureCollection = response
            .json()
            .await
            .map_err(|e| PlacesError::ParseError(e.without_url().to_string()))?;

        let places = collection.into_places(query.limit);

        debug!(
            results = places.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Geoapify lookup completed"
        );

        Ok(places)
    }

    async fn is_healthy(&self) -> bool {
        let probe = PlacesQuery {
            category: "catering.cafe".to_string(),
            latitude: 51.5074,
            longitude: -0.1278,
            radius_m: 1000,
            limit: 1,
        };
        self.search(&probe).await.is_ok()
    }

    fn provider_name(&self) -> &'static str {
        "geoapify"
    }
}
