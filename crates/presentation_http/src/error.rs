//! API error handling
//!
//! Every failure renders as `{error, code}` with a non-success status.

use application::SearchError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The search itself failed
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Search(SearchError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Search(SearchError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Search(SearchError::Network(_) | SearchError::Provider(_)) => {
                StatusCode::BAD_GATEWAY
            },
            Self::Search(SearchError::Superseded) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable code rendered in the body
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Search(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(status = status.as_u16(), code = self.code(), error = %self, "Request failed");
        }

        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
