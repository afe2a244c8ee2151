//! Fixed sample payload for front-end development

use axum::{Json, extract::State};
use domain::{
    DomainError, GeoLocation, HealthTips, Humidity, PlaceCategory, PlaceRecord, PlacesByCategory,
    SearchResult, WeatherSnapshot,
};

use crate::{error::ApiError, handlers::weather::WeatherResponse, state::AppState};

const SAMPLE_TIPS: [&str; 3] = [
    "Drink at least three litres of water through the day.",
    "Stay indoors between noon and 4 PM when the sun is strongest.",
    "Wear loose, light-coloured cotton clothing.",
];

fn sample_place(category: PlaceCategory) -> PlaceRecord {
    let (name, formatted, address) = match category {
        PlaceCategory::Hotel => (
            "The Marina Residency",
            "The Marina Residency, Kamarajar Salai, Chennai",
            "Kamarajar Salai, Chennai",
        ),
        PlaceCategory::Hospital => (
            "Government General Hospital",
            "Government General Hospital, Park Town, Chennai",
            "Park Town, Chennai",
        ),
        PlaceCategory::MovieTheater => (
            "Sathyam Cinemas",
            "Sathyam Cinemas, Royapettah, Chennai",
            "Royapettah, Chennai",
        ),
        PlaceCategory::ShoppingMall => (
            "Express Avenue",
            "Express Avenue, Whites Road, Chennai",
            "Whites Road, Chennai",
        ),
        PlaceCategory::Cafe => (
            "Madras Coffee House",
            "Madras Coffee House, Mylapore, Chennai",
            "Mylapore, Chennai",
        ),
    };

    PlaceRecord::new(
        category,
        Some(name.to_string()),
        Some(formatted.to_string()),
        Some(address.to_string()),
    )
}

/// The Chennai sample search result
///
/// # Errors
///
/// Never fails for the built-in values; the constructors are fallible.
pub fn sample_result() -> Result<SearchResult, DomainError> {
    let weather = WeatherSnapshot::new(
        "Chennai",
        "IN",
        35.2,
        Humidity::new(68)?,
        "hot and humid",
        GeoLocation::new(13.0827, 80.2707)?,
    )?;

    let tips = HealthTips::from_generated(SAMPLE_TIPS).unwrap_or_else(HealthTips::fallback);
    let places = PlacesByCategory::from_entries(
        PlaceCategory::ALL.map(|category| (category, vec![sample_place(category)])),
    );

    Ok(SearchResult::assemble(weather, tips, places))
}

/// `GET /api/sample`
pub async fn sample(State(state): State<AppState>) -> Result<Json<WeatherResponse>, ApiError> {
    let result = sample_result().map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(WeatherResponse::from_result(
        &result,
        state.theatre_schedule.as_deref(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_one_place_per_category() {
        let result = sample_result().unwrap();
        for category in PlaceCategory::ALL {
            assert_eq!(result.places().get(category).len(), 1, "{category}");
        }
        assert_eq!(result.tips().len(), 3);
        assert!(!result.tips().is_fallback());
    }

    #[test]
    fn sample_weather_values() {
        let result = sample_result().unwrap();
        let weather = result.weather();
        assert_eq!(weather.city(), "Chennai");
        assert_eq!(weather.country(), "IN");
        assert!((weather.temperature_c() - 35.2).abs() < f64::EPSILON);
        assert_eq!(weather.humidity().value(), 68);
        assert_eq!(weather.description(), "hot and humid");
    }
}
