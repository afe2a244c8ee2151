//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `HEATGUARD_*` environment variables using `__` between
//! nested keys (e.g. `HEATGUARD_SERVER__PORT`, `HEATGUARD_WEATHER__API_KEY`).

mod server;
mod validation;

use std::path::Path;

use ai_core::InferenceConfig;
use application::{HealthConfig, SearchConfig};
use domain::TheatreSchedule;
use integration_places::PlacesConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use server::{LogFormat, ServerConfig};
pub use validation::{ConfigWarning, WarningSeverity};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "HEATGUARD";

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config";

pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenWeatherMap settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Geoapify settings
    #[serde(default)]
    pub places: PlacesConfig,

    /// Gemini settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Search timeouts and geofence
    #[serde(default)]
    pub search: SearchConfig,

    /// Readiness probe timeouts
    #[serde(default)]
    pub health: HealthConfig,

    /// Movies per theatre, passed through to clients unchanged
    #[serde(default)]
    pub theatre_schedule: Option<TheatreSchedule>,
}

impl AppConfig {
    /// Load from `config.toml` in the working directory (if present) and
    /// the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(None, Self::environment())
    }

    /// Load from an explicit file, which must exist, and the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(Some(path.as_ref()), Self::environment())
    }

    /// Load with an explicit environment source
    ///
    /// `path` of `None` falls back to an optional `config.toml`.
    pub fn load_with(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                config::File::from(path).required(true)
            },
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("search.places_radius_m", 5000)?
            .set_default("search.places_limit", 5)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        info!(
            port = config.server.port,
            model = %config.inference.model,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Environment source for `HEATGUARD_*` overrides
    #[must_use]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
    }

    /// Check the configuration for problems that do not prevent startup
    ///
    /// Missing API keys are reported here; the affected provider calls fail
    /// at runtime and degrade like any other provider failure.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validation::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::environment().source(Some(source))
    }

    #[test]
    fn defaults_without_file_or_env() {
        let config = AppConfig::load_with(None, env(&[])).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.search.places_radius_m, 5000);
        assert_eq!(config.search.places_limit, 5);
        assert_eq!(config.inference.model, "gemini-2.5-flash");
        assert!(config.weather.api_key.is_none());
        assert!(config.theatre_schedule.is_none());
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let config = AppConfig::load_with(
            None,
            env(&[
                ("HEATGUARD_SERVER__PORT", "8080"),
                ("HEATGUARD_WEATHER__API_KEY", "owm-secret"),
                ("HEATGUARD_SEARCH__PLACES_LIMIT", "3"),
                ("HEATGUARD_SERVER__LOG_FORMAT", "json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.places_limit, 3);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(
            config.weather.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("owm-secret".to_string())
        );
    }

    #[test]
    fn api_keys_are_never_serialized() {
        let config = AppConfig::load_with(
            None,
            env(&[
                ("HEATGUARD_WEATHER__API_KEY", "a"),
                ("HEATGUARD_PLACES__API_KEY", "b"),
                ("HEATGUARD_INFERENCE__API_KEY", "c"),
            ]),
        )
        .unwrap();

        let json = serde_json::to_value(&config).unwrap();
        assert!(json["weather"].get("api_key").is_none());
        assert!(json["places"].get("api_key").is_none());
        assert!(json["inference"].get("api_key").is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load_with(Some(Path::new("/nonexistent/heatguard.toml")), env(&[]));
        assert!(result.is_err());
    }
}
