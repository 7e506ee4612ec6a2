//! The structured findings record the classifier operates on.

use crate::constants::DIS_MIN_LOCATIONS;
use crate::{AnatomicalLocation, ClinicalScenario};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Clinical and imaging findings for a single patient.
///
/// Built field by field by a collector, then handed to the classifier by reference.
/// Field order of mutation does not matter; only the final value is classified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Findings {
    /// Evaluation context. `None` means not yet selected.
    pub scenario: Option<ClinicalScenario>,

    /// Collected but not consulted by the current rule set.
    pub age_over_50: bool,

    /// Collected but not consulted by the current rule set.
    pub vascular_risk: bool,

    /// Regions with a typical lesion. A set, so re-adding a region is a no-op.
    pub locations: BTreeSet<AnatomicalLocation>,

    /// Dissemination in time.
    pub has_dit: bool,

    /// CSF-specific oligoclonal bands.
    pub has_csf: bool,

    /// Central vein sign.
    pub has_cvs: bool,

    /// Paramagnetic rim lesions.
    pub has_prl: bool,

    /// More than one year of progression. Only meaningful for a progressive course.
    pub progression_duration: bool,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scenario(mut self, scenario: ClinicalScenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn with_locations(mut self, locations: impl IntoIterator<Item = AnatomicalLocation>) -> Self {
        self.locations.extend(locations);
        self
    }

    /// Flips membership of `location`. Toggling twice restores the original set.
    ///
    /// Returns `true` if the location is selected after the call.
    pub fn toggle_location(&mut self, location: AnatomicalLocation) -> bool {
        if self.locations.remove(&location) {
            false
        } else {
            self.locations.insert(location);
            true
        }
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Dissemination in space: lesions in at least two regions.
    pub fn has_dis(&self) -> bool {
        self.location_count() >= DIS_MIN_LOCATIONS
    }

    /// Any of DIT, CSF, CVS or PRL.
    pub fn has_supportive_evidence(&self) -> bool {
        self.has_dit || self.has_csf || self.has_cvs || self.has_prl
    }

    /// Evidence accepted alongside DIS for a radiologically isolated syndrome.
    ///
    /// PRL does not count here, unlike [`Findings::has_supportive_evidence`].
    pub fn has_ris_evidence(&self) -> bool {
        self.has_dit || self.has_csf || self.has_cvs
    }
}
