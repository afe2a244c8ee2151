//! Application services - Search use cases and provider readiness

mod health_service;
mod places_aggregator;
mod search_orchestrator;
mod search_session;
mod tip_generator;

pub use health_service::{
    HealthConfig, HealthReport, HealthService, INFERENCE_SERVICE, PLACES_SERVICE, ServiceHealth,
    WEATHER_SERVICE,
};
pub use places_aggregator::{PlacesAggregator, PlacesQueryConfig};
pub use search_orchestrator::{SearchConfig, SearchOrchestrator};
pub use search_session::{SearchSession, SearchTicket};
pub use tip_generator::HealthTipGenerator;
