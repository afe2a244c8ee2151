//! Domain entities - Aggregates produced by a city search

mod health_tips;
mod place;
mod search_result;
mod theatre_schedule;
mod weather_snapshot;

pub use health_tips::{FALLBACK_TIP, HealthTips, MAX_TIPS};
pub use place::{MAX_PLACES_PER_CATEGORY, PlaceRecord, PlacesByCategory, UNKNOWN_PLACE_NAME};
pub use search_result::SearchResult;
pub use theatre_schedule::{Showing, TheatreSchedule};
pub use weather_snapshot::WeatherSnapshot;
