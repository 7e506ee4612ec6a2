//! Plain-text rendering of verdicts.
//!
//! Produces markdown suitable for a terminal or a report. The full view lists every
//! recommendation; the comparison view is compact and only surfaces the leading
//! recommendations of each scenario.

use crate::classifier::ScenarioComparison;
use crate::constants::HEADLINE_RECOMMENDATIONS;
use crate::Verdict;

/// Verdict rendering operations.
#[derive(Debug, Clone, Default)]
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Renders a single verdict in full.
    ///
    /// Format produced:
    /// ```markdown
    /// ## <title> (<STATUS>)
    ///
    /// <description>
    ///
    /// **Dissemination in space:** <dis summary>
    /// **Supportive evidence:** <dit summary>
    ///
    /// - <recommendation>
    /// ```
    pub fn verdict(&self, verdict: &Verdict) -> String {
        let mut output = String::new();
        output.push_str(&format!("## {} ({})\n\n", verdict.title, verdict.status));
        output.push_str(&format!("{}\n\n", verdict.description));
        output.push_str(&self.evidence(verdict));

        if !verdict.recommendations.is_empty() {
            output.push('\n');
            for recommendation in &verdict.recommendations {
                output.push_str(&format!("- {recommendation}\n"));
            }
        }

        output
    }

    /// Renders the three-scenario comparison.
    ///
    /// Evidence is shared by all scenarios, so it is printed once at the end.
    pub fn comparison(&self, comparison: &ScenarioComparison) -> String {
        let mut output = String::new();
        for (heading, verdict) in [
            ("Typical attack / CIS", &comparison.cis),
            ("Radiologically isolated (RIS)", &comparison.ris),
            ("Progressive (1 year assumed)", &comparison.progressive),
        ] {
            output.push_str(&format!("### {heading}\n"));
            output.push_str(&format!("{} ({})\n", verdict.title, verdict.status));
            for recommendation in self.headline(verdict) {
                output.push_str(&format!("- {recommendation}\n"));
            }
            output.push('\n');
        }
        output.push_str(&self.evidence(&comparison.cis));
        output
    }

    /// The leading recommendations a compact view shows.
    pub fn headline<'a>(&self, verdict: &'a Verdict) -> &'a [String] {
        let end = verdict.recommendations.len().min(HEADLINE_RECOMMENDATIONS);
        &verdict.recommendations[..end]
    }

    fn evidence(&self, verdict: &Verdict) -> String {
        format!(
            "**Dissemination in space:** {}\n**Supportive evidence:** {}\n",
            verdict.evidence_summary.dis, verdict.evidence_summary.dit
        )
    }
}
