//! City search handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::{HospitalAdvisory, PlacesByCategory, SearchResult, TheatreSchedule};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query string of `GET /api/weather`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

/// Body of a successful search
///
/// `places` always holds every category key, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub humidity: u8,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    pub heat_index: f64,
    pub tips: Vec<String>,
    pub places: PlacesByCategory,
    pub hospital_advisory: HospitalAdvisory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theatre_schedule: Option<TheatreSchedule>,
}

impl WeatherResponse {
    /// Render a search result, attaching the configured theatre schedule
    #[must_use]
    pub fn from_result(
        result: &SearchResult,
        theatre_schedule: Option<&TheatreSchedule>,
    ) -> Self {
        let weather = result.weather();
        let location = weather.location();

        Self {
            city: weather.city().to_string(),
            country: weather.country().to_string(),
            temperature: weather.temperature_c(),
            humidity: weather.humidity().value(),
            description: weather.description().to_string(),
            lat: location.latitude(),
            lon: location.longitude(),
            heat_index: result.heat_index().value(),
            tips: result.tips().as_slice().to_vec(),
            places: result.places().clone(),
            hospital_advisory: result.hospital_advisory(),
            theatre_schedule: theatre_schedule.cloned(),
        }
    }
}

/// `GET /api/weather?city=<name>`
///
/// A missing `city` parameter is treated like a blank one.
#[instrument(skip(state))]
pub async fn search_city(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let city = query.city.unwrap_or_default();
    let result = state.orchestrator.execute(&city).await?;

    Ok(Json(WeatherResponse::from_result(
        &result,
        state.theatre_schedule.as_deref(),
    )))
}
