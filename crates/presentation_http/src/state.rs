//! Application state shared across handlers

use std::sync::Arc;

use application::{HealthService, SearchOrchestrator};
use domain::TheatreSchedule;
use infrastructure::Services;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Runs one stateless search per request
    pub orchestrator: Arc<SearchOrchestrator>,
    /// Provider readiness probes
    pub health: Arc<HealthService>,
    /// Configured theatre schedule, echoed in weather responses
    pub theatre_schedule: Option<Arc<TheatreSchedule>>,
}

impl AppState {
    #[must_use]
    pub fn new(services: &Services, theatre_schedule: Option<TheatreSchedule>) -> Self {
        Self {
            orchestrator: Arc::clone(&services.orchestrator),
            health: Arc::clone(&services.health),
            theatre_schedule: theatre_schedule.map(Arc::new),
        }
    }
}
