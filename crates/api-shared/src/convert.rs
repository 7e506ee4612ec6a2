//! Translation between protobuf messages and `mcdonald-core` domain types.
//!
//! Protobuf carries scenarios, locations and statuses as strings. Scenarios are parsed
//! leniently (empty means "not selected", anything unrecognised means unknown) so that
//! every request reaches the classifier. Locations are parsed strictly: an unknown region
//! is rejected rather than dropped.

use crate::pb;
use mcdonald_core::{
    AnatomicalLocation, ClinicalScenario, CriteriaResult, EvidenceSummary, Findings,
    ScenarioComparison, Verdict,
};

/// Converts a protobuf findings message into domain findings.
///
/// # Errors
///
/// Returns `CriteriaError::InvalidInput` if any location key is not recognised.
pub fn findings_from_pb(findings: pb::Findings) -> CriteriaResult<Findings> {
    let locations = findings
        .locations
        .iter()
        .map(|key| key.parse::<AnatomicalLocation>())
        .collect::<CriteriaResult<_>>()?;

    Ok(Findings {
        scenario: ClinicalScenario::from_wire(&findings.scenario),
        age_over_50: findings.age_over_50,
        vascular_risk: findings.vascular_risk,
        locations,
        has_dit: findings.has_dit,
        has_csf: findings.has_csf,
        has_cvs: findings.has_cvs,
        has_prl: findings.has_prl,
        progression_duration: findings.progression_duration,
    })
}

/// Interprets the optional scenario override of a classify request.
pub fn scenario_override_from_pb(value: &str) -> Option<ClinicalScenario> {
    ClinicalScenario::from_wire(value)
}

impl From<&Findings> for pb::Findings {
    fn from(findings: &Findings) -> Self {
        pb::Findings {
            scenario: findings
                .scenario
                .map(|s| s.key().to_string())
                .unwrap_or_default(),
            age_over_50: findings.age_over_50,
            vascular_risk: findings.vascular_risk,
            locations: findings
                .locations
                .iter()
                .map(|loc| loc.key().to_string())
                .collect(),
            has_dit: findings.has_dit,
            has_csf: findings.has_csf,
            has_cvs: findings.has_cvs,
            has_prl: findings.has_prl,
            progression_duration: findings.progression_duration,
        }
    }
}

impl From<EvidenceSummary> for pb::EvidenceSummary {
    fn from(summary: EvidenceSummary) -> Self {
        pb::EvidenceSummary {
            dis: summary.dis,
            dit: summary.dit,
        }
    }
}

impl From<Verdict> for pb::Verdict {
    fn from(verdict: Verdict) -> Self {
        pb::Verdict {
            status: verdict.status.as_str().to_string(),
            title: verdict.title,
            description: verdict.description,
            recommendations: verdict.recommendations,
            evidence_summary: Some(verdict.evidence_summary.into()),
        }
    }
}

impl From<ScenarioComparison> for pb::ScenarioComparison {
    fn from(comparison: ScenarioComparison) -> Self {
        pb::ScenarioComparison {
            cis: Some(comparison.cis.into()),
            ris: Some(comparison.ris.into()),
            progressive: Some(comparison.progressive.into()),
        }
    }
}
