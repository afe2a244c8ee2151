//! Configuration for inference engine

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the Gemini inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Gemini API key, sent as the `key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum output tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

const fn default_timeout_ms() -> u64 {
    15000
}

const fn default_max_output_tokens() -> u32 {
    512
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(
            config.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_ms, 15000);
        assert_eq!(config.max_output_tokens, 512);
        assert!((config.temperature - 0.7).abs() < 0.01);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn config_serialization_omits_key() {
        let config = InferenceConfig {
            api_key: Some(SecretString::from("AIza-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("base_url"));
        assert!(json.contains("model"));
        assert!(!json.contains("AIza-secret"));
    }

    #[test]
    fn config_deserialization() {
        let json = r#"{"model":"gemini-2.0-flash","api_key":"k","timeout_ms":2000}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.api_key.unwrap().expose_secret(), "k");
        assert_eq!(config.timeout_ms, 2000);
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.max_output_tokens, 512);
    }

    #[test]
    fn config_debug_redacts_key() {
        let config = InferenceConfig {
            api_key: Some(SecretString::from("AIza-secret")),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("InferenceConfig"));
        assert!(!debug.contains("AIza-secret"));
    }
}
