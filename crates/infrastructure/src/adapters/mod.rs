//! Infrastructure adapters
//!
//! Adapters connect application ports to the provider integrations.

mod gemini_inference_adapter;
mod places_adapter;
mod weather_adapter;

pub use gemini_inference_adapter::GeminiInferenceAdapter;
pub use places_adapter::PlacesAdapter;
pub use weather_adapter::WeatherAdapter;
