//! Plain-text rendering of search results
//!
//! Output is built into a `String` so it can be asserted on in tests.

use std::fmt::Write;

use application::SearchError;
use domain::{PlaceCategory, PlaceRecord, SearchResult, TheatreSchedule};

/// Shown next to hotels until a deals source exists
pub const HOTEL_SPECIAL_PLACEHOLDER: &str = "No specific special item today";

/// Shown next to a cinema with nothing running in the current hour
pub const NO_MOVIES_NOW: &str = "No movies showing now";

/// Inputs for the per-category annotations
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    pub theatre_schedule: Option<&'a TheatreSchedule>,
    /// Local hour of day (0-23) used for "Movies Now"
    pub hour: u8,
}

/// Render a full search result
#[must_use]
pub fn render_result(result: &SearchResult, ctx: RenderContext<'_>) -> String {
    let mut out = String::new();
    let weather = result.weather();

    let _ = writeln!(out, "🌡️  Weather in {}, {}", weather.city(), weather.country());
    let _ = writeln!(out, "   Temperature: {:.1} °C", weather.temperature_c());
    let _ = writeln!(out, "   Humidity: {}%", weather.humidity().value());
    let _ = writeln!(out, "   Conditions: {}", weather.description());
    let _ = writeln!(out, "   Heat index: {:.1} °C", result.heat_index().value());

    out.push_str("\n💧 Health tips:\n");
    for (i, tip) in result.tips().as_slice().iter().enumerate() {
        let _ = writeln!(out, "   {}. {tip}", i + 1);
    }

    let advisory = result.hospital_advisory();
    for (category, places) in result.places().iter() {
        out.push('\n');
        if places.is_empty() {
            let _ = writeln!(
                out,
                "No {} found nearby.",
                category.display_name().to_lowercase()
            );
            continue;
        }

        let _ = writeln!(out, "📍 {}:", category.display_name());
        for place in places {
            let line = place_line(place);
            match annotation(category, place, advisory.label(), ctx) {
                Some(note) => {
                    let _ = writeln!(out, "   {line} → {note}");
                },
                None => {
                    let _ = writeln!(out, "   {line}");
                },
            }
        }
    }

    out
}

/// One-line message for a failed search
#[must_use]
pub fn render_error(error: &SearchError) -> String {
    match error {
        SearchError::NotFound(city) => format!("❌ City not found: {city}"),
        SearchError::Validation(_) => "❌ Please enter a city name".to_string(),
        other => format!("❌ {other}"),
    }
}

fn place_line(place: &PlaceRecord) -> String {
    if place.formatted().is_empty() {
        place.name().to_string()
    } else {
        format!("{} - {}", place.name(), place.formatted())
    }
}

fn annotation(
    category: PlaceCategory,
    place: &PlaceRecord,
    advisory_label: &str,
    ctx: RenderContext<'_>,
) -> Option<String> {
    match category {
        PlaceCategory::Hotel => Some(format!("Special Today: {HOTEL_SPECIAL_PLACEHOLDER}")),
        PlaceCategory::Hospital => Some(advisory_label.to_string()),
        PlaceCategory::MovieTheater => Some(format!("Movies Now: {}", movies_now(place, ctx))),
        PlaceCategory::ShoppingMall | PlaceCategory::Cafe => None,
    }
}

fn movies_now(place: &PlaceRecord, ctx: RenderContext<'_>) -> String {
    let movies = ctx
        .theatre_schedule
        .map(|schedule| schedule.now_showing(place.name(), ctx.hour))
        .unwrap_or_default();

    if movies.is_empty() {
        NO_MOVIES_NOW.to_string()
    } else {
        movies.join(", ")
    }
}
