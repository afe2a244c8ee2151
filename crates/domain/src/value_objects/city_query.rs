//! City search text value object

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// A validated, trimmed city name ready to send to the weather provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CityQuery(String);

impl CityQuery {
    /// Longest city name accepted, in characters
    pub const MAX_LEN: usize = 100;

    /// Parse raw user input into a city query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCity` for blank input and
    /// `DomainError::ValidationError` for names longer than [`Self::MAX_LEN`].
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCity);
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DomainError::validation(format!(
                "City name must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the city name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CityQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let q = CityQuery::parse("  Chennai \n").unwrap();
        assert_eq!(q.as_str(), "Chennai");
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(CityQuery::parse(""), Err(DomainError::EmptyCity));
        assert_eq!(CityQuery::parse("   "), Err(DomainError::EmptyCity));
        assert_eq!(CityQuery::parse("\t\n"), Err(DomainError::EmptyCity));
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let q = CityQuery::parse("New York").unwrap();
        assert_eq!(q.to_string(), "New York");
    }

    #[test]
    fn overly_long_name_is_rejected() {
        let long = "a".repeat(CityQuery::MAX_LEN + 1);
        assert!(matches!(
            CityQuery::parse(&long),
            Err(DomainError::ValidationError(_))
        ));
        assert!(CityQuery::parse(&"a".repeat(CityQuery::MAX_LEN)).is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let name = "ü".repeat(CityQuery::MAX_LEN);
        assert!(CityQuery::parse(&name).is_ok());
    }
}
