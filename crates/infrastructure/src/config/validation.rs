//! Startup checks for configuration that loads but will not work well

use std::fmt;

use super::AppConfig;

/// How serious a configuration warning is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WarningSeverity {
    Info,
    Warning,
    /// Searches will fail until fixed
    Critical,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A configuration problem found at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub severity: WarningSeverity,
    /// Short stable code, e.g. `WEATHER_API_KEY_MISSING`
    pub code: &'static str,
    pub message: String,
}

impl ConfigWarning {
    fn new(severity: WarningSeverity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self.severity, WarningSeverity::Critical)
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

/// Collect warnings, most severe first
pub(super) fn validate(config: &AppConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.weather.api_key.is_none() {
        warnings.push(ConfigWarning::new(
            WarningSeverity::Critical,
            "WEATHER_API_KEY_MISSING",
            "weather.api_key is not set; every search will fail",
        ));
    }

    if !config.places.has_api_key() {
        warnings.push(ConfigWarning::new(
            WarningSeverity::Warning,
            "PLACES_API_KEY_MISSING",
            "places.api_key is not set; nearby places will be empty",
        ));
    }

    if config.inference.api_key.is_none() {
        warnings.push(ConfigWarning::new(
            WarningSeverity::Warning,
            "INFERENCE_API_KEY_MISSING",
            "inference.api_key is not set; only the fallback tip will be shown",
        ));
    }

    if let Err(e) = config.places.validate() {
        warnings.push(ConfigWarning::new(
            WarningSeverity::Critical,
            "PLACES_CONFIG_INVALID",
            e,
        ));
    }

    let search = &config.search;
    if search.weather_timeout_ms == 0 || search.tips_timeout_ms == 0 || search.places_timeout_ms == 0
    {
        warnings.push(ConfigWarning::new(
            WarningSeverity::Warning,
            "SEARCH_TIMEOUT_ZERO",
            "a search timeout is 0 ms; that step will always time out",
        ));
    }

    if search.places_limit == 0 {
        warnings.push(ConfigWarning::new(
            WarningSeverity::Info,
            "PLACES_LIMIT_ZERO",
            "search.places_limit is 0; no places will be returned",
        ));
    }

    warnings.sort_by(|a, b| b.severity.cmp(&a.severity));
    warnings
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn configured() -> AppConfig {
        let mut config = AppConfig::default();
        config.weather.api_key = Some(SecretString::from("w"));
        config.places.api_key = Some(SecretString::from("p"));
        config.inference.api_key = Some(SecretString::from("i"));
        config
    }

    #[test]
    fn fully_configured_has_no_warnings() {
        assert!(configured().validate().is_empty());
    }

    #[test]
    fn missing_keys_are_reported_critical_first() {
        let warnings = AppConfig::default().validate();

        let codes: Vec<_> = warnings.iter().map(|w| w.code).collect();
        assert_eq!(
            codes,
            [
                "WEATHER_API_KEY_MISSING",
                "PLACES_API_KEY_MISSING",
                "INFERENCE_API_KEY_MISSING"
            ]
        );
        assert!(warnings[0].is_critical());
        assert!(!warnings[1].is_critical());
    }

    #[test]
    fn zero_timeouts_and_limit_warn() {
        let mut config = configured();
        config.search.tips_timeout_ms = 0;
        config.search.places_limit = 0;

        let warnings = config.validate();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].code, "SEARCH_TIMEOUT_ZERO");
        assert_eq!(warnings[1].severity, WarningSeverity::Info);
    }

    #[test]
    fn display_includes_severity_and_code() {
        let warning = ConfigWarning::new(WarningSeverity::Warning, "X", "something");
        assert_eq!(warning.to_string(), "[WARNING] X: something");
    }
}
