//! Gemini inference adapter - Implements InferencePort using ai_core

use std::sync::Arc;
use std::time::Instant;

use ai_core::{
    GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest,
};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Adapter for Google Gemini text generation
pub struct GeminiInferenceAdapter {
    engine: Arc<dyn InferenceEngine>,
}

impl std::fmt::Debug for GeminiInferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiInferenceAdapter")
            .field("model", &self.engine.default_model())
            .finish()
    }
}

impl GeminiInferenceAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine =
            GeminiInferenceEngine::new(config).map_err(|e| ApplicationError::Inference(e.to_string()))?;
        Ok(Self::with_engine(Arc::new(engine)))
    }

    /// Wrap an existing engine
    #[must_use]
    pub fn with_engine(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::RateLimited => ApplicationError::RateLimited,
            InferenceError::ConnectionFailed(msg) => {
                ApplicationError::Network(format!("Gemini connection failed: {msg}"))
            },
            InferenceError::Timeout(ms) => {
                ApplicationError::Network(format!("Inference timeout after {ms}ms"))
            },
            InferenceError::AuthenticationFailed(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let response = self
            .engine
            .generate(InferenceRequest::simple(prompt))
            .await
            .map_err(Self::map_error)?;

        // Bounded by the engine timeout, far below u64::MAX ms.
        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        match self.engine.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!(error = %e, "Gemini health check failed");
                false
            },
        }
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}

#[cfg(test)]
mod tests {
    use ai_core::{InferenceResponse, TokenUsage};

    use super::*;

    struct FixedEngine {
        reply: Result<&'static str, fn() -> InferenceError>,
    }

    #[async_trait]
    impl InferenceEngine for FixedEngine {
        async fn generate(
            &self,
            request: InferenceRequest,
        ) -> Result<InferenceResponse, InferenceError> {
            assert!(!request.prompt.is_empty());
            match self.reply {
                Ok(text) => Ok(InferenceResponse {
                    content: text.to_string(),
                    model: "fixed-model".to_string(),
                    usage: Some(TokenUsage {
                        prompt_tokens: 10,
                        completion_tokens: 5,
                        total_tokens: 15,
                    }),
                    finish_reason: Some("STOP".to_string()),
                }),
                Err(make) => Err(make()),
            }
        }

        async fn health_check(&self) -> Result<bool, InferenceError> {
            match self.reply {
                Ok(_) => Ok(true),
                Err(make) => Err(make()),
            }
        }

        fn default_model(&self) -> &str {
            "fixed-model"
        }
    }

    fn adapter(reply: Result<&'static str, fn() -> InferenceError>) -> GeminiInferenceAdapter {
        GeminiInferenceAdapter::with_engine(Arc::new(FixedEngine { reply }))
    }

    #[test]
    fn new_creates_adapter() {
        assert!(GeminiInferenceAdapter::new(InferenceConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn generate_maps_response() {
        let result = adapter(Ok("1. Drink water")).generate("tips").await.unwrap();

        assert_eq!(result.content, "1. Drink water");
        assert_eq!(result.model, "fixed-model");
        assert_eq!(result.tokens_used, Some(15));
    }

    #[tokio::test]
    async fn generate_maps_errors() {
        let err = adapter(Err(|| InferenceError::RateLimited))
            .generate("tips")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::RateLimited));

        let err = adapter(Err(|| InferenceError::Timeout(15000)))
            .generate("tips")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Network(m) if m.contains("15000")));
    }

    #[tokio::test]
    async fn health_check_error_is_unhealthy() {
        assert!(adapter(Ok("x")).is_healthy().await);
        assert!(
            !adapter(Err(|| InferenceError::ServerError("HTTP 500".into())))
                .is_healthy()
                .await
        );
    }

    #[test]
    fn current_model_comes_from_engine() {
        assert_eq!(adapter(Ok("x")).current_model(), "fixed-model");
        assert!(format!("{:?}", adapter(Ok("x"))).contains("fixed-model"));
    }
}
