//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current-weather API
//! (<https://openweathermap.org/current>). Resolves a city name to current
//! conditions and coordinates. Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::CurrentWeather;
