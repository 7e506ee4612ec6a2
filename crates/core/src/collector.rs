//! Step-by-step findings collection.
//!
//! The collector holds the navigation state of a guided assessment: who is using it, which
//! step is showing, and the findings gathered so far. It is owned by the caller (a CLI
//! session, a UI) and is never consulted by the classifier, which only sees the finished
//! [`Findings`].

use crate::classifier::{classify, compare_scenarios, ScenarioComparison};
use crate::{AnatomicalLocation, ClinicalScenario, CriteriaError, CriteriaResult, Findings, Verdict};
use serde::{Deserialize, Serialize};

/// Who is filling in the assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Knows the clinical picture and selects a scenario.
    Clinician,
    /// Reviews imaging without a clinical context; sees all scenarios side by side.
    Radiologist,
}

/// Screens of the guided assessment, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Role,
    Scenario,
    RiskFactors,
    Locations,
    Biomarkers,
    Progression,
    Result,
}

/// What the result step shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Single(Verdict),
    Comparison(ScenarioComparison),
}

/// Caller-owned assessment state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collector {
    role: Option<Role>,
    step: Step,
    findings: Findings,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Self {
            role: None,
            step: Step::Role,
            findings: Findings::new(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    /// Selects the role. Radiologists never pick a scenario, so any previous choice is cleared.
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
        if role == Role::Radiologist {
            self.findings.scenario = None;
        }
    }

    pub fn select_scenario(&mut self, scenario: ClinicalScenario) {
        self.findings.scenario = Some(scenario);
    }

    pub fn set_age_over_50(&mut self, value: bool) {
        self.findings.age_over_50 = value;
    }

    pub fn set_vascular_risk(&mut self, value: bool) {
        self.findings.vascular_risk = value;
    }

    pub fn toggle_location(&mut self, location: AnatomicalLocation) -> bool {
        self.findings.toggle_location(location)
    }

    pub fn set_dit(&mut self, value: bool) {
        self.findings.has_dit = value;
    }

    pub fn set_csf(&mut self, value: bool) {
        self.findings.has_csf = value;
    }

    pub fn set_cvs(&mut self, value: bool) {
        self.findings.has_cvs = value;
    }

    pub fn set_prl(&mut self, value: bool) {
        self.findings.has_prl = value;
    }

    pub fn set_progression_duration(&mut self, value: bool) {
        self.findings.progression_duration = value;
    }

    /// Moves to the next applicable step.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidInput`] when leaving the role step without a role,
    /// leaving the scenario step without a scenario, or advancing past the result.
    pub fn next(&mut self) -> CriteriaResult<Step> {
        let next = match self.step {
            Step::Role => match self.role {
                Some(Role::Clinician) => Step::Scenario,
                Some(Role::Radiologist) => Step::RiskFactors,
                None => return Err(CriteriaError::InvalidInput("select a role first".into())),
            },
            Step::Scenario => {
                if self.findings.scenario.is_none() {
                    return Err(CriteriaError::InvalidInput(
                        "select a clinical scenario first".into(),
                    ));
                }
                Step::RiskFactors
            }
            Step::RiskFactors => Step::Locations,
            Step::Locations => Step::Biomarkers,
            Step::Biomarkers => {
                if self.findings.scenario == Some(ClinicalScenario::Progressive) {
                    Step::Progression
                } else {
                    Step::Result
                }
            }
            Step::Progression => Step::Result,
            Step::Result => {
                return Err(CriteriaError::InvalidInput(
                    "assessment is already complete".into(),
                ))
            }
        };
        tracing::debug!(from = ?self.step, to = ?next, "collector advanced");
        self.step = next;
        Ok(next)
    }

    /// Moves to the previous applicable step. Going back from the first step stays put.
    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::Role | Step::Scenario => Step::Role,
            Step::RiskFactors => match self.role {
                Some(Role::Radiologist) => Step::Role,
                _ => Step::Scenario,
            },
            Step::Locations => Step::RiskFactors,
            Step::Biomarkers => Step::Locations,
            Step::Progression => Step::Biomarkers,
            Step::Result => {
                if self.findings.scenario == Some(ClinicalScenario::Progressive) {
                    Step::Progression
                } else {
                    Step::Biomarkers
                }
            }
        };
        self.step
    }

    /// Classifies the collected findings.
    ///
    /// Radiologists get the three-scenario comparison; everyone else a single verdict under
    /// the selected scenario. Available at any step, since classification is total.
    pub fn outcome(&self) -> Outcome {
        match self.role {
            Some(Role::Radiologist) => Outcome::Comparison(compare_scenarios(&self.findings)),
            _ => Outcome::Single(classify(&self.findings)),
        }
    }

    /// Discards everything and returns to the role step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
