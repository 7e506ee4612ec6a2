//! McDonald 2024 rule evaluation.
//!
//! Classification is a pure function of a [`Findings`] value and a scenario. It never fails:
//! every input, including one with no scenario selected, resolves to exactly one [`Verdict`].
//! The input is only borrowed, so the same findings can be evaluated repeatedly and under
//! hypothetical scenarios without being altered.

use crate::evidence::summarise;
use crate::{ClinicalScenario, DiagnosisStatus, EvidenceSummary, Findings, Verdict};
use serde::{Deserialize, Serialize};

/// Classifies findings under their own scenario.
pub fn classify(findings: &Findings) -> Verdict {
    evaluate(findings, findings.scenario, findings.progression_duration)
}

/// Classifies findings as though `scenario` had been selected.
///
/// The stored scenario is ignored; every other field is used as-is.
pub fn classify_as(findings: &Findings, scenario: ClinicalScenario) -> Verdict {
    evaluate(findings, Some(scenario), findings.progression_duration)
}

/// The same findings evaluated under each clinical scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub cis: Verdict,
    pub ris: Verdict,
    /// Evaluated with one year of progression assumed, whatever the findings record.
    pub progressive: Verdict,
}

/// Evaluates the findings under CIS, RIS and progressive-course hypotheses.
///
/// Used when the clinical context is not known, for example when imaging is reviewed
/// without a history. The progressive evaluation assumes the duration requirement is met.
pub fn compare_scenarios(findings: &Findings) -> ScenarioComparison {
    ScenarioComparison {
        cis: classify_as(findings, ClinicalScenario::Cis),
        ris: classify_as(findings, ClinicalScenario::Ris),
        progressive: evaluate(findings, Some(ClinicalScenario::Progressive), true),
    }
}

fn evaluate(
    findings: &Findings,
    scenario: Option<ClinicalScenario>,
    progression_duration: bool,
) -> Verdict {
    let evidence = summarise(findings);

    let verdict = match scenario {
        Some(ClinicalScenario::Ris) => evaluate_ris(findings, evidence),
        Some(ClinicalScenario::Progressive) => {
            evaluate_progressive(findings, progression_duration, evidence)
        }
        Some(ClinicalScenario::Cis) => evaluate_cis(findings, evidence),
        Some(ClinicalScenario::Unknown) => {
            tracing::warn!("unrecognised scenario; falling back to no diagnosis");
            no_diagnosis(evidence)
        }
        None => {
            tracing::debug!("no scenario selected; falling back to no diagnosis");
            no_diagnosis(evidence)
        }
    };

    tracing::debug!(
        scenario = scenario.map(|s| s.key()).unwrap_or("none"),
        locations = findings.location_count(),
        status = %verdict.status,
        "classified findings"
    );

    verdict
}

fn evaluate_ris(findings: &Findings, evidence: EvidenceSummary) -> Verdict {
    let has_dis = findings.has_dis();

    if has_dis && findings.has_ris_evidence() {
        return verdict(
            DiagnosisStatus::Ms,
            "MS (via RIS)",
            "Radiologically isolated syndrome meets the 2024 criteria for MS.",
            &["DIS + (DIT/CSF/CVS) present.", "Symptoms not required."],
            evidence,
        );
    }

    let dis_note = if has_dis { "DIS present." } else { "No DIS." };
    verdict(
        DiagnosisStatus::RisHighRisk,
        "RIS",
        "Radiologically isolated syndrome at high risk of conversion.",
        &[dis_note, "Monitor clinical/MRI."],
        evidence,
    )
}

fn evaluate_progressive(
    findings: &Findings,
    progression_duration: bool,
    evidence: EvidenceSummary,
) -> Verdict {
    // Duration gate comes first; DIS and evidence are not considered without it.
    if !progression_duration {
        return verdict(
            DiagnosisStatus::Possible,
            "Possibly progressive",
            "Progressive course not yet established.",
            &["Requires 1 year of progression."],
            evidence,
        );
    }

    if findings.has_dis() && findings.has_supportive_evidence() {
        return verdict(
            DiagnosisStatus::Ms,
            "Progressive MS",
            "Primary progressive MS criteria met.",
            &["1yr progression + DIS + supportive evidence."],
            evidence,
        );
    }

    no_diagnosis(evidence)
}

fn evaluate_cis(findings: &Findings, evidence: EvidenceSummary) -> Verdict {
    if findings.has_dis() && findings.has_supportive_evidence() {
        return verdict(
            DiagnosisStatus::Ms,
            "Relapsing MS",
            "Relapsing MS criteria met.",
            &["DIS + (DIT/CSF/CVS/PRL)."],
            evidence,
        );
    }

    // A single region suffices when a specific biomarker (CVS or PRL) is backed by DIT or CSF.
    let specific_biomarker = findings.has_cvs || findings.has_prl;
    let supporting_marker = findings.has_dit || findings.has_csf;
    if findings.location_count() == 1 && specific_biomarker && supporting_marker {
        return verdict(
            DiagnosisStatus::Ms,
            "MS (biomarker)",
            "Single-region MS confirmed by paraclinical biomarkers.",
            &["New 2024 rule."],
            evidence,
        );
    }

    verdict(
        DiagnosisStatus::Possible,
        "Possibly MS / CIS",
        "Clinically isolated syndrome; criteria not yet met.",
        &["DIS or DIT missing."],
        evidence,
    )
}

fn no_diagnosis(evidence: EvidenceSummary) -> Verdict {
    verdict(
        DiagnosisStatus::NoMs,
        "No diagnosis",
        "Criteria for MS are not met.",
        &[],
        evidence,
    )
}

fn verdict(
    status: DiagnosisStatus,
    title: &str,
    description: &str,
    recommendations: &[&str],
    evidence_summary: EvidenceSummary,
) -> Verdict {
    Verdict {
        status,
        title: title.to_string(),
        description: description.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        evidence_summary,
    }
}
