//! Gemini client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};

/// Inference engine backed by the Gemini `generateContent` endpoint
#[derive(Debug)]
pub struct GeminiInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl GeminiInferenceEngine {
    /// Create a new Gemini inference engine
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        if config.api_key.is_none() {
            warn!("No Gemini API key configured; generation requests will fail");
        }

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Gemini inference engine"
        );

        Ok(Self { client, config })
    }

    /// Build the URL of a model resource, optionally with a method suffix
    fn model_url(&self, model: &str, method: Option<&str>) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match method {
            Some(m) => format!("{base}/models/{model}:{m}"),
            None => format!("{base}/models/{model}"),
        }
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a InferenceRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.config.model)
    }

    fn api_key(&self) -> Result<&str, InferenceError> {
        self.config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret())
            .ok_or_else(|| InferenceError::AuthenticationFailed("API key not configured".into()))
    }

    /// The request URL carries the API key, so it is stripped from the text
    fn map_send_error(&self, err: reqwest::Error) -> InferenceError {
        let err = err.without_url();
        if err.is_timeout() {
            InferenceError::Timeout(self.config.timeout_ms)
        } else if err.is_connect() {
            InferenceError::ConnectionFailed(err.to_string())
        } else {
            InferenceError::RequestFailed(err.to_string())
        }
    }

    fn status_error(status: StatusCode, body: &str, model: &str) -> InferenceError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                InferenceError::AuthenticationFailed(message)
            },
            StatusCode::NOT_FOUND => InferenceError::ModelNotAvailable(model.to_string()),
            s if s.is_server_error() => InferenceError::ServerError(format!("Status {s}: {message}")),
            s => InferenceError::RequestFailed(format!("Status {s}: {message}")),
        }
    }

    /// Pull the first candidate's first text part out of a reply
    fn extract_response(
        reply: GenerateContentResponse,
        model: &str,
    ) -> Result<InferenceResponse, InferenceError> {
        let candidate = reply.candidates.into_iter().next().ok_or_else(|| {
            let reason = reply
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            InferenceError::EmptyResponse(reason)
        })?;

        let text = candidate
            .content
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| InferenceError::EmptyResponse("candidate has no text".to_string()))?;

        let usage = reply.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(InferenceResponse {
            content: text,
            model: reply.model_version.unwrap_or_else(|| model.to_string()),
            usage,
            finish_reason: candidate.finish_reason,
        })
    }
}

/// `generateContent` request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// `generateContent` response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

#[async_trait]
impl InferenceEngine for GeminiInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn generate(&self, request: InferenceRequest) -> Result<InferenceResponse, InferenceError> {
        let model = self.resolve_model(&request).to_string();
        let key = self.api_key()?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature.unwrap_or(self.config.temperature),
                max_output_tokens: request.max_tokens.unwrap_or(self.config.max_output_tokens),
            },
        };

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.model_url(&model, Some("generateContent")))
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Inference request failed");
            return Err(Self::status_error(status, &body, &model));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.without_url().to_string()))?;

        let result = Self::extract_response(reply, &model)?;

        debug!(
            tokens = ?result.usage,
            finish_reason = ?result.finish_reason,
            "Inference completed"
        );

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, InferenceError> {
        let key = self.api_key()?;

        let response = self
            .client
            .get(self.model_url(&self.config.model, None))
            .query(&[("key", key)])
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() => Ok(false),
            Err(e) if e.is_connect() => Ok(false),
            Err(e) => Err(InferenceError::RequestFailed(e.without_url().to_string())),
        }
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }
}
