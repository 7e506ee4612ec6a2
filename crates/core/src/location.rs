//! Anatomical sites that count towards dissemination in space.

use crate::CriteriaError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the five CNS regions recognised by the 2024 criteria.
///
/// Variant order is the canonical display order; evidence summaries list
/// selected regions in this order regardless of how they were entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum AnatomicalLocation {
    Periventricular,
    CorticalJuxtacortical,
    Infratentorial,
    SpinalCord,
    OpticNerve,
}

impl AnatomicalLocation {
    /// Every location, in canonical order.
    pub const ALL: [AnatomicalLocation; 5] = [
        AnatomicalLocation::Periventricular,
        AnatomicalLocation::CorticalJuxtacortical,
        AnatomicalLocation::Infratentorial,
        AnatomicalLocation::SpinalCord,
        AnatomicalLocation::OpticNerve,
    ];

    /// Stable machine key, as used in findings documents and API payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Periventricular => "periventricular",
            Self::CorticalJuxtacortical => "cortical_juxtacortical",
            Self::Infratentorial => "infratentorial",
            Self::SpinalCord => "spinal_cord",
            Self::OpticNerve => "optic_nerve",
        }
    }

    /// Human-readable label used in evidence summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Periventricular => "Periventricular",
            Self::CorticalJuxtacortical => "Cortical/Juxtacortical",
            Self::Infratentorial => "Infratentorial",
            Self::SpinalCord => "Spinal cord",
            Self::OpticNerve => "Optic nerve",
        }
    }
}

impl std::fmt::Display for AnatomicalLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AnatomicalLocation {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|loc| loc.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CriteriaError::InvalidInput(format!("unknown location: {wanted}")))
    }
}

impl TryFrom<String> for AnatomicalLocation {
    type Error = CriteriaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!(
            "Spinal_Cord".parse::<AnatomicalLocation>().unwrap(),
            AnatomicalLocation::SpinalCord
        );
        assert_eq!(
            " optic_nerve ".parse::<AnatomicalLocation>().unwrap(),
            AnatomicalLocation::OpticNerve
        );
    }

    #[test]
    fn rejects_unknown_key() {
        let err = "cerebellum"
            .parse::<AnatomicalLocation>()
            .expect_err("should reject unknown location");
        assert!(matches!(err, CriteriaError::InvalidInput(msg) if msg.contains("cerebellum")));
    }

    #[test]
    fn serde_key_matches_key() {
        for loc in AnatomicalLocation::ALL {
            let json = serde_json::to_string(&loc).unwrap();
            assert_eq!(json, format!("\"{}\"", loc.key()));
        }
    }

    #[test]
    fn deserialization_goes_through_the_key_parser() {
        let loc: AnatomicalLocation = serde_json::from_str("\"Spinal_Cord\"").unwrap();
        assert_eq!(loc, AnatomicalLocation::SpinalCord);

        let err = serde_json::from_str::<AnatomicalLocation>("\"cerebellum\"")
            .expect_err("should reject unknown location");
        assert!(err.to_string().contains("unknown location: cerebellum"));
    }
}
