//! YAML findings documents.
//!
//! Findings are exchanged with the command line as small YAML documents:
//!
//! ```yaml
//! scenario: cis
//! locations: [periventricular, spinal_cord]
//! has_dit: true
//! has_csf: false
//! ```
//!
//! Responsibilities:
//! - Define a strict wire model (unknown keys are rejected)
//! - Translate between the wire model and [`Findings`]
//! - Load documents from disk
//!
//! Notes:
//! - Every field is optional and defaults to "absent" / `false`
//! - Unrecognised scenario values become [`ClinicalScenario::Unknown`]; unrecognised
//!   locations are an error, since silently dropping a region would change the verdict

use crate::{AnatomicalLocation, ClinicalScenario, CriteriaError, CriteriaResult, Findings};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Findings document operations.
///
/// Zero-sized type used for namespacing; all methods are associated functions.
pub struct FindingsDocument;

impl FindingsDocument {
    /// Parse findings from YAML text.
    ///
    /// Uses `serde_path_to_error` so that a schema mismatch names the failing field
    /// (for example `locations[1]`).
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Translation`] if the YAML does not match the wire schema,
    /// including unknown keys and unknown location keys.
    pub fn parse(yaml_text: &str) -> CriteriaResult<Findings> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, FindingsWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(CriteriaError::Translation(format!(
                    "Findings schema mismatch at {path}: {source}"
                )));
            }
        };

        Ok(wire_to_domain(wire))
    }

    /// Render findings as YAML text.
    pub fn render(findings: &Findings) -> CriteriaResult<String> {
        serde_yaml::to_string(&domain_to_wire(findings)).map_err(|e| {
            CriteriaError::Translation(format!("Failed to serialize findings: {e}"))
        })
    }

    /// Read and parse a findings document from `path`.
    pub fn load(path: &Path) -> CriteriaResult<Findings> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!("loaded findings document: {}", path.display());
        Self::parse(&text)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
struct FindingsWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<ClinicalScenario>,
    age_over_50: bool,
    vascular_risk: bool,
    locations: Vec<AnatomicalLocation>,
    has_dit: bool,
    has_csf: bool,
    has_cvs: bool,
    has_prl: bool,
    progression_duration: bool,
}

fn wire_to_domain(wire: FindingsWire) -> Findings {
    Findings {
        scenario: wire.scenario,
        age_over_50: wire.age_over_50,
        vascular_risk: wire.vascular_risk,
        locations: wire.locations.into_iter().collect(),
        has_dit: wire.has_dit,
        has_csf: wire.has_csf,
        has_cvs: wire.has_cvs,
        has_prl: wire.has_prl,
        progression_duration: wire.progression_duration,
    }
}

fn domain_to_wire(findings: &Findings) -> FindingsWire {
    FindingsWire {
        scenario: findings.scenario,
        age_over_50: findings.age_over_50,
        vascular_risk: findings.vascular_risk,
        locations: findings.locations.iter().copied().collect(),
        has_dit: findings.has_dit,
        has_csf: findings.has_csf,
        has_cvs: findings.has_cvs,
        has_prl: findings.has_prl,
        progression_duration: findings.progression_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_sample_document() {
        let input = r#"scenario: cis
locations: [periventricular, spinal_cord, periventricular]
has_dit: true
"#;
        let findings = FindingsDocument::parse(input).expect("parse yaml");
        assert_eq!(findings.scenario, Some(ClinicalScenario::Cis));
        assert_eq!(findings.location_count(), 2);
        assert!(findings.has_dit);
        assert!(!findings.has_prl);
    }

    #[test]
    fn empty_document_is_empty_findings() {
        let findings = FindingsDocument::parse("{}").expect("parse yaml");
        assert_eq!(findings, Findings::default());
    }

    #[test]
    fn render_output_parses_back() {
        let findings = Findings {
            has_cvs: true,
            progression_duration: true,
            ..Findings::new()
                .with_scenario(ClinicalScenario::Progressive)
                .with_locations([AnatomicalLocation::OpticNerve])
        };
        let output = FindingsDocument::render(&findings).expect("render findings");
        assert!(output.contains("optic_nerve"));
        assert_eq!(FindingsDocument::parse(&output).expect("reparse"), findings);
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = "scenario: ris\nhas_oligoclonal_bands: true\n";
        let err = FindingsDocument::parse(input).expect_err("should reject unknown key");
        match err {
            CriteriaError::Translation(msg) => assert!(msg.contains("has_oligoclonal_bands")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_location_reports_its_path() {
        let input = "locations: [spinal_cord, cerebellum]\n";
        let err = FindingsDocument::parse(input).expect_err("should reject unknown location");
        match err {
            CriteriaError::Translation(msg) => assert!(msg.contains("locations[1]")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn unrecognised_scenario_becomes_unknown() {
        let findings = FindingsDocument::parse("scenario: secondary_progressive\n").unwrap();
        assert_eq!(findings.scenario, Some(ClinicalScenario::Unknown));
    }

    #[test]
    fn keys_are_matched_case_insensitively() {
        let input = "scenario: RIS\nlocations: [periventricular, spinal_cord]\nhas_cvs: true\n";
        let findings = FindingsDocument::parse(input).unwrap();
        assert_eq!(findings.scenario, Some(ClinicalScenario::Ris));
        assert_eq!(crate::classify(&findings).status, crate::DiagnosisStatus::Ms);

        let findings = FindingsDocument::parse("locations: [Spinal_Cord, OPTIC_NERVE]\n").unwrap();
        assert_eq!(
            findings.locations,
            [AnatomicalLocation::SpinalCord, AnatomicalLocation::OpticNerve].into()
        );
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "scenario: ris\nlocations: [infratentorial]").unwrap();

        let findings = FindingsDocument::load(file.path()).expect("load findings");
        assert_eq!(findings.scenario, Some(ClinicalScenario::Ris));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            FindingsDocument::load(&missing),
            Err(CriteriaError::Io(_))
        ));
    }
}
