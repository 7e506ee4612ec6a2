//! Constants used throughout the criteria crate.
//!
//! Display strings that form part of the observable verdict contract live here so that
//! presenters and tests refer to a single definition.

/// Evidence summary text when no region is selected.
pub const NO_REGIONS_SELECTED: &str = "no regions selected";

/// Evidence summary text when no supportive evidence is present.
pub const NO_SUPPORTIVE_EVIDENCE: &str = "none";

/// Separator between items in an evidence summary.
pub const SUMMARY_SEPARATOR: &str = ", ";

/// Minimum number of regions for dissemination in space.
pub const DIS_MIN_LOCATIONS: usize = 2;

pub const DIT_LABEL: &str = "DIT";
pub const CSF_LABEL: &str = "CSF";
pub const CVS_LABEL: &str = "CVS";
pub const PRL_LABEL: &str = "PRL";

/// Number of recommendations a compact presentation surfaces per verdict.
pub const HEADLINE_RECOMMENDATIONS: usize = 2;
