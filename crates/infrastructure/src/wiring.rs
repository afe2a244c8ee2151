//! Service wiring
//!
//! Builds the adapters from [`AppConfig`] and assembles the application
//! services shared by the HTTP server and the CLI.

use std::sync::Arc;

use application::{
    ApplicationError, HealthService, InferencePort, PlacesPort, SearchOrchestrator, SearchSession,
    WeatherPort,
};
use tracing::{info, warn};

use crate::adapters::{GeminiInferenceAdapter, PlacesAdapter, WeatherAdapter};
use crate::config::AppConfig;

/// Ports backing a search
#[derive(Clone)]
pub struct Providers {
    pub weather: Arc<dyn WeatherPort>,
    pub places: Arc<dyn PlacesPort>,
    pub inference: Arc<dyn InferencePort>,
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers")
            .field("weather", &"<WeatherPort>")
            .field("places", &"<PlacesPort>")
            .field("inference", &self.inference.current_model())
            .finish()
    }
}

impl Providers {
    /// Build the real provider adapters
    ///
    /// # Errors
    ///
    /// Returns an error if any HTTP client cannot be built or the places
    /// configuration is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        Ok(Self {
            weather: Arc::new(WeatherAdapter::new(config.weather.clone())?),
            places: Arc::new(PlacesAdapter::new(&config.places)?),
            inference: Arc::new(GeminiInferenceAdapter::new(config.inference.clone())?),
        })
    }
}

/// Application services built from configuration
#[derive(Debug, Clone)]
pub struct Services {
    pub orchestrator: Arc<SearchOrchestrator>,
    pub health: Arc<HealthService>,
}

impl Services {
    /// Wire services over the given providers
    #[must_use]
    pub fn new(config: &AppConfig, providers: Providers) -> Self {
        let orchestrator = SearchOrchestrator::new(
            Arc::clone(&providers.weather),
            Arc::clone(&providers.inference),
            Arc::clone(&providers.places),
            &config.search,
        );

        let health = HealthService::new(providers.weather)
            .with_places(providers.places)
            .with_inference(providers.inference)
            .with_config(config.health.clone());

        Self {
            orchestrator: Arc::new(orchestrator),
            health: Arc::new(health),
        }
    }

    /// Validate configuration, log warnings and wire the real providers
    ///
    /// # Errors
    ///
    /// Returns an error if the provider adapters cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        for warning in config.validate() {
            warn!(code = warning.code, severity = %warning.severity, "{}", warning.message);
        }

        let services = Self::new(config, Providers::from_config(config)?);
        info!(
            model = %config.inference.model,
            radius_m = config.search.places_radius_m,
            "Search services ready"
        );
        Ok(services)
    }

    /// A last-search-wins session over the shared orchestrator
    #[must_use]
    pub fn session(&self) -> SearchSession {
        SearchSession::new(Arc::clone(&self.orchestrator))
    }
}
