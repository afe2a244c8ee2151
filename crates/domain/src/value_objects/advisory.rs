//! Hospital visit advisory derived from the current temperature

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature below which a visit is considered safe (°C)
pub const CAUTION_THRESHOLD_C: f64 = 30.0;
/// Temperature from which only urgent visits are advised (°C)
pub const URGENT_THRESHOLD_C: f64 = 40.0;

/// Severity tier of the advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTier {
    /// Below 30 °C
    Safe,
    /// 30 °C up to (not including) 40 °C, or temperature unknown
    Caution,
    /// 40 °C and above
    Urgent,
}

impl AdvisoryTier {
    /// Tier for a known temperature, using half-open intervals
    #[must_use]
    pub fn for_temperature(temperature_c: f64) -> Self {
        if temperature_c < CAUTION_THRESHOLD_C {
            Self::Safe
        } else if temperature_c < URGENT_THRESHOLD_C {
            Self::Caution
        } else {
            Self::Urgent
        }
    }

    /// Default display label for this tier
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe to visit",
            Self::Caution => "Caution: stay hydrated while going",
            Self::Urgent => "Only go if urgent; stay indoors otherwise",
        }
    }
}

impl fmt::Display for AdvisoryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory attached to hospital entries at presentation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HospitalAdvisory {
    tier: AdvisoryTier,
    label: &'static str,
}

impl HospitalAdvisory {
    /// Label used when no temperature is available
    pub const UNKNOWN_LABEL: &'static str = "Status unknown";

    /// Build the advisory for an optional temperature
    ///
    /// A missing or non-finite temperature yields a conservative
    /// `Caution` advisory labelled "Status unknown".
    #[must_use]
    pub fn for_temperature(temperature_c: Option<f64>) -> Self {
        match temperature_c.filter(|t| t.is_finite()) {
            Some(t) => {
                let tier = AdvisoryTier::for_temperature(t);
                Self {
                    tier,
                    label: tier.label(),
                }
            },
            None => Self {
                tier: AdvisoryTier::Caution,
                label: Self::UNKNOWN_LABEL,
            },
        }
    }

    /// Get the tier
    #[must_use]
    pub const fn tier(&self) -> AdvisoryTier {
        self.tier
    }

    /// Get the display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Display for HospitalAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_table() {
        let cases = [
            (25.0, AdvisoryTier::Safe),
            (29.9, AdvisoryTier::Safe),
            (30.0, AdvisoryTier::Caution),
            (39.9, AdvisoryTier::Caution),
            (40.0, AdvisoryTier::Urgent),
            (55.0, AdvisoryTier::Urgent),
        ];
        for (temp, expected) in cases {
            assert_eq!(AdvisoryTier::for_temperature(temp), expected, "at {temp}");
        }
    }

    #[test]
    fn labels_match_tiers() {
        assert_eq!(
            HospitalAdvisory::for_temperature(Some(22.0)).label(),
            "Safe to visit"
        );
        assert_eq!(
            HospitalAdvisory::for_temperature(Some(35.0)).label(),
            "Caution: stay hydrated while going"
        );
        assert_eq!(
            HospitalAdvisory::for_temperature(Some(44.0)).label(),
            "Only go if urgent; stay indoors otherwise"
        );
    }

    #[test]
    fn unknown_temperature_is_cautious() {
        let advisory = HospitalAdvisory::for_temperature(None);
        assert_eq!(advisory.tier(), AdvisoryTier::Caution);
        assert_eq!(advisory.label(), "Status unknown");

        let advisory = HospitalAdvisory::for_temperature(Some(f64::NAN));
        assert_eq!(advisory.label(), HospitalAdvisory::UNKNOWN_LABEL);
    }

    #[test]
    fn serializes_tier_and_label() {
        let json = serde_json::to_value(HospitalAdvisory::for_temperature(Some(41.0))).unwrap();
        assert_eq!(json["tier"], "urgent");
        assert_eq!(json["label"], "Only go if urgent; stay indoors otherwise");
    }
}
