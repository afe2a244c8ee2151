//! Health and hydration tips shown with a search result

use serde::Serialize;

/// Maximum number of tips kept from a generated reply
pub const MAX_TIPS: usize = 5;

/// Tip returned when generation fails or yields nothing usable
pub const FALLBACK_TIP: &str =
    "Stay hydrated by drinking water regularly and avoid prolonged sun exposure.";

/// Ordered, non-empty list of tips
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthTips {
    tips: Vec<String>,
    #[serde(skip)]
    fallback: bool,
}

impl HealthTips {
    /// Build from generated tips
    ///
    /// Blank entries are dropped and the list is capped at [`MAX_TIPS`].
    /// Returns `None` when nothing usable remains.
    #[must_use]
    pub fn from_generated<I, S>(tips: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tips: Vec<String> = tips
            .into_iter()
            .map(Into::into)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .take(MAX_TIPS)
            .collect();
        (!tips.is_empty()).then_some(Self {
            tips,
            fallback: false,
        })
    }

    /// The single-entry fallback list
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            tips: vec![FALLBACK_TIP.to_string()],
            fallback: true,
        }
    }

    /// Tips in display order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tips
    }

    /// Number of tips (1 to [`MAX_TIPS`])
    #[must_use]
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    /// Never true for a constructed list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Whether this is the fallback list
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }
}
