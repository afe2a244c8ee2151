//! Health tip generation
//!
//! Turns a weather snapshot into a short list of hydration and heat-safety
//! tips using the inference port. Any failure degrades to a single fallback
//! tip; this service never returns an error.

use std::sync::Arc;
use std::time::Duration;

use domain::{HealthTips, WeatherSnapshot};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::InferencePort;

/// Generates health tips for current conditions
pub struct HealthTipGenerator {
    inference: Arc<dyn InferencePort>,
    timeout: Duration,
}

impl std::fmt::Debug for HealthTipGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthTipGenerator")
            .field("inference", &"<InferencePort>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HealthTipGenerator {
    /// Create a generator with a per-call timeout
    #[must_use]
    pub fn new(inference: Arc<dyn InferencePort>, timeout: Duration) -> Self {
        Self { inference, timeout }
    }

    /// Prompt sent to the model for the given conditions
    #[must_use]
    pub fn build_prompt(weather: &WeatherSnapshot) -> String {
        format!(
            "The current weather in {} is {}°C with {}% humidity. \
             Give 3 short practical health and hydration tips suitable for this condition. \
             Respond in numbered points.",
            weather.city(),
            weather.temperature_c(),
            weather.humidity().value()
        )
    }

    /// Extract tips from a model reply
    ///
    /// Keeps lines that start with a numbered marker (`1.`, `2)`) or a bullet
    /// (`•`, `-`, `*`), strips the marker and `**` emphasis, and caps the list.
    /// Returns `None` if no line qualifies.
    #[must_use]
    pub fn parse_tips(reply: &str) -> Option<HealthTips> {
        HealthTips::from_generated(reply.lines().filter_map(strip_list_marker).map(|item| {
            item.replace("**", "").trim().to_string()
        }))
    }

    /// Generate tips, falling back on any failure
    #[instrument(skip(self, weather), fields(city = %weather.city()))]
    pub async fn generate(&self, weather: &WeatherSnapshot) -> HealthTips {
        let prompt = Self::build_prompt(weather);

        let reply = match timeout(self.timeout, self.inference.generate(&prompt)).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!(error = %e, "Tip generation failed, using fallback tip");
                return HealthTips::fallback();
            },
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis(),
                    "Tip generation timed out, using fallback tip"
                );
                return HealthTips::fallback();
            },
        };

        if let Some(tips) = Self::parse_tips(&reply.content) {
            debug!(
                count = tips.len(),
                model = %reply.model,
                latency_ms = reply.latency_ms,
                "Generated health tips"
            );
            tips
        } else {
            warn!(model = %reply.model, "Reply contained no list items, using fallback tip");
            HealthTips::fallback()
        }
    }
}

/// Return the text after a list marker, or `None` for non-list lines
fn strip_list_marker(line: &str) -> Option<&str> {
    let line = line.trim();

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        return rest
            .strip_prefix('.')
            .or_else(|| rest.strip_prefix(')'));
    }

    if line.starts_with("**") {
        return None;
    }

    line.strip_prefix('•')
        .or_else(|| line.strip_prefix('-'))
        .or_else(|| line.strip_prefix('*'))
}
