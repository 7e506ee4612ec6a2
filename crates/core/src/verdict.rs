//! Classifier output types.

use serde::{Deserialize, Serialize};

/// Diagnostic outcome category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosisStatus {
    /// Criteria for multiple sclerosis are met.
    Ms,
    /// Criteria are not met.
    NoMs,
    /// Criteria may be met once more information is available.
    Possible,
    /// Radiologically isolated syndrome with high risk of conversion.
    RisHighRisk,
    /// Reserved for a future rule branch. No current rule produces it.
    RadiologicallySuggestive,
}

impl DiagnosisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ms => "MS",
            Self::NoMs => "NO_MS",
            Self::Possible => "POSSIBLE",
            Self::RisHighRisk => "RIS_HIGH_RISK",
            Self::RadiologicallySuggestive => "RADIOLOGICALLY_SUGGESTIVE",
        }
    }
}

impl std::fmt::Display for DiagnosisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which evidence was present, rendered for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    /// Selected regions, comma-joined, or a "none selected" sentinel.
    pub dis: String,
    /// Supportive evidence that fired, in the order DIT, CSF, CVS, PRL, or a "none" sentinel.
    pub dit: String,
}

/// Result of classifying one set of findings under one scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: DiagnosisStatus,
    pub title: String,
    pub description: String,
    /// Advisory notes. Order is significant: presenters surface the first entries first.
    pub recommendations: Vec<String>,
    pub evidence_summary: EvidenceSummary,
}

impl Verdict {
    /// True when the criteria for MS are fulfilled.
    pub fn is_diagnostic(&self) -> bool {
        self.status == DiagnosisStatus::Ms
    }
}
