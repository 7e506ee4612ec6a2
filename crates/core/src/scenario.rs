//! Clinical context a set of findings is evaluated against.

use crate::CriteriaError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which rule branch of the classifier applies.
///
/// Deserialization ignores case, and unrecognised values become [`ClinicalScenario::Unknown`]
/// so that they reach the classifier's fallback instead of failing the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ClinicalScenario {
    /// Typical attack or relapsing onset (clinically isolated syndrome).
    Cis,
    /// Progressive course from onset.
    Progressive,
    /// Radiologically isolated syndrome, asymptomatic.
    Ris,
    /// Context not yet chosen.
    Unknown,
}

impl ClinicalScenario {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Cis => "cis",
            Self::Progressive => "progressive",
            Self::Ris => "ris",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cis => "Typical attack / CIS",
            Self::Progressive => "Progressive course",
            Self::Ris => "Radiologically isolated (RIS)",
            Self::Unknown => "Not selected",
        }
    }

    /// Lenient lookup used at API boundaries.
    ///
    /// Empty input means "not selected" and yields `None`; anything unrecognised yields
    /// `Some(Unknown)`.
    pub fn from_wire(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(value.parse().unwrap_or(Self::Unknown))
    }
}

impl std::fmt::Display for ClinicalScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl From<String> for ClinicalScenario {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }
}

impl FromStr for ClinicalScenario {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cis" => Ok(Self::Cis),
            "progressive" => Ok(Self::Progressive),
            "ris" => Ok(Self::Ris),
            "unknown" => Ok(Self::Unknown),
            other => Err(CriteriaError::InvalidInput(format!(
                "unknown scenario: {other} (expected cis, progressive, ris or unknown)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parse_rejects_unrecognised_value() {
        assert_eq!("RIS".parse::<ClinicalScenario>().unwrap(), ClinicalScenario::Ris);
        assert!("relapsing".parse::<ClinicalScenario>().is_err());
    }

    #[test]
    fn wire_lookup_is_lenient() {
        assert_eq!(ClinicalScenario::from_wire(""), None);
        assert_eq!(ClinicalScenario::from_wire("  "), None);
        assert_eq!(
            ClinicalScenario::from_wire("progressive"),
            Some(ClinicalScenario::Progressive)
        );
        assert_eq!(
            ClinicalScenario::from_wire("relapsing"),
            Some(ClinicalScenario::Unknown)
        );
    }

    #[test]
    fn unrecognised_json_value_deserializes_to_unknown() {
        let scenario: ClinicalScenario = serde_json::from_str("\"secondary\"").unwrap();
        assert_eq!(scenario, ClinicalScenario::Unknown);
    }

    #[test]
    fn deserialization_ignores_case() {
        let scenario: ClinicalScenario = serde_json::from_str("\"RIS\"").unwrap();
        assert_eq!(scenario, ClinicalScenario::Ris);
        let scenario: ClinicalScenario = serde_json::from_str("\" Progressive \"").unwrap();
        assert_eq!(scenario, ClinicalScenario::Progressive);
        assert_eq!(serde_json::to_string(&ClinicalScenario::Cis).unwrap(), "\"cis\"");
    }
}
