//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A city search text was empty after trimming
    #[error("City name must not be empty")]
    EmptyCity,

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Humidity outside 0-100 %
    #[error("Invalid humidity: {0}% is out of range (must be 0-100)")]
    InvalidHumidity(u16),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Unknown place category name
    #[error("Unknown place category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_city_message() {
        assert_eq!(
            DomainError::EmptyCity.to_string(),
            "City name must not be empty"
        );
    }

    #[test]
    fn invalid_humidity_message() {
        let err = DomainError::InvalidHumidity(140);
        assert_eq!(
            err.to_string(),
            "Invalid humidity: 140% is out of range (must be 0-100)"
        );
    }

    #[test]
    fn validation_helper_wraps_message() {
        let err = DomainError::validation("city too long");
        assert_eq!(err, DomainError::ValidationError("city too long".to_string()));
        assert_eq!(err.to_string(), "Validation failed: city too long");
    }

    #[test]
    fn unknown_category_message() {
        let err = DomainError::UnknownCategory("museum".to_string());
        assert!(err.to_string().contains("museum"));
    }
}
