//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider does not know the requested resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure or timeout talking to a provider
    #[error("Network error: {0}")]
    Network(String),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure of a whole search
///
/// Only input validation and the weather lookup can fail a search; tips
/// and places degrade instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Blank or malformed city input
    #[error("Invalid search: {0}")]
    Validation(String),

    /// The weather provider does not know the city
    #[error("City not found: {0}")]
    NotFound(String),

    /// Transport failure or timeout fetching weather
    #[error("Network error: {0}")]
    Network(String),

    /// Any other weather provider failure
    #[error("Weather provider error: {0}")]
    Provider(String),

    /// A newer search replaced this one
    #[error("Search superseded by a newer search")]
    Superseded,
}

impl SearchError {
    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "CITY_NOT_FOUND",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Provider(_) => "PROVIDER_ERROR",
            Self::Superseded => "SUPERSEDED",
        }
    }
}

impl From<DomainError> for SearchError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ApplicationError> for SearchError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::Provider(format!("Invalid provider data: {e}")),
            ApplicationError::NotFound(city) => Self::NotFound(city),
            ApplicationError::Network(msg) => Self::Network(msg),
            other => Self::Provider(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_validation() {
        let err: SearchError = DomainError::EmptyCity.into();
        assert!(matches!(err, SearchError::Validation(_)));
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn application_errors_map_to_search_errors() {
        assert_eq!(
            SearchError::from(ApplicationError::NotFound("Atlantis".to_string())),
            SearchError::NotFound("Atlantis".to_string())
        );
        assert_eq!(
            SearchError::from(ApplicationError::Network("timed out".to_string())),
            SearchError::Network("timed out".to_string())
        );
        assert!(matches!(
            SearchError::from(ApplicationError::RateLimited),
            SearchError::Provider(_)
        ));
        assert!(matches!(
            SearchError::from(ApplicationError::ExternalService("HTTP 500".to_string())),
            SearchError::Provider(_)
        ));
    }

    #[test]
    fn invalid_provider_data_is_provider_error() {
        let err = SearchError::from(ApplicationError::Domain(DomainError::InvalidCoordinates));
        assert!(matches!(err, SearchError::Provider(m) if m.contains("Invalid provider data")));
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            SearchError::Validation(String::new()).code(),
            SearchError::NotFound(String::new()).code(),
            SearchError::Network(String::new()).code(),
            SearchError::Provider(String::new()).code(),
            SearchError::Superseded.code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}
