//! Evidence summary derivation.

use crate::constants::{
    CSF_LABEL, CVS_LABEL, DIT_LABEL, NO_REGIONS_SELECTED, NO_SUPPORTIVE_EVIDENCE, PRL_LABEL,
    SUMMARY_SEPARATOR,
};
use crate::{EvidenceSummary, Findings};

/// Builds the evidence summary attached to every verdict.
///
/// The result depends only on locations and biomarker flags, never on the scenario.
pub fn summarise(findings: &Findings) -> EvidenceSummary {
    EvidenceSummary {
        dis: dis_summary(findings),
        dit: dit_summary(findings),
    }
}

fn dis_summary(findings: &Findings) -> String {
    if findings.locations.is_empty() {
        return NO_REGIONS_SELECTED.to_string();
    }
    findings
        .locations
        .iter()
        .map(|loc| loc.label())
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}

fn dit_summary(findings: &Findings) -> String {
    let fired: Vec<&str> = [
        (findings.has_dit, DIT_LABEL),
        (findings.has_csf, CSF_LABEL),
        (findings.has_cvs, CVS_LABEL),
        (findings.has_prl, PRL_LABEL),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect();

    if fired.is_empty() {
        NO_SUPPORTIVE_EVIDENCE.to_string()
    } else {
        fired.join(SUMMARY_SEPARATOR)
    }
}
