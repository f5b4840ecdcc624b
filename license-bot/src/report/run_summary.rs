//! Run summary types.

use crate::remediation::RemediationStatus;

/// Literal reported for candidates with no recognised license.
pub const NO_LICENSE: &str = "No License";

/// One line of the final report: repository name and its license
/// identifier, or "No License".
#[derive(Debug, Clone)]
pub struct ReportRow {
    /// Repository name.
    pub name: String,

    /// License identifier or the "No License" literal.
    pub license_label: String,
}

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// One row per candidate repository, in scan order.
    pub rows: Vec<ReportRow>,

    /// Candidates that already carried a license (reported only).
    pub already_licensed: usize,

    /// Candidates for which a pull request was opened.
    pub remediated: usize,

    /// Candidates skipped (template unavailable, nothing to commit, ...).
    pub skipped: usize,

    /// Candidates whose remediation failed part-way.
    pub failed: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a candidate that already has a license.
    pub fn record_licensed(&mut self, name: String, license_id: String) {
        self.rows.push(ReportRow {
            name,
            license_label: license_id,
        });
        self.already_licensed += 1;
    }

    /// Records a license-less candidate's remediation outcome.
    ///
    /// The report line always reads "No License" regardless of whether
    /// remediation succeeded; the counts carry the outcome.
    pub fn record_remediation(&mut self, name: String, status: &RemediationStatus) {
        self.rows.push(ReportRow {
            name,
            license_label: NO_LICENSE.to_string(),
        });

        match status {
            RemediationStatus::Completed { .. } => self.remediated += 1,
            RemediationStatus::Skipped { .. } => self.skipped += 1,
            RemediationStatus::Failed { .. } => self.failed += 1,
        }
    }

    /// Number of candidate repositories reported.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if any remediation failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remediation::Step;

    #[test]
    fn records_licensed_candidate() {
        let mut summary = RunSummary::new();

        summary.record_licensed("repo-a".to_string(), "MPL-2.0".to_string());

        assert_eq!(summary.candidate_count(), 1);
        assert_eq!(summary.already_licensed, 1);
        assert_eq!(summary.rows[0].license_label, "MPL-2.0");
        assert!(!summary.has_failures());
    }

    #[test]
    fn records_remediation_outcomes() {
        let mut summary = RunSummary::new();

        summary.record_remediation(
            "repo-c".to_string(),
            &RemediationStatus::Completed {
                number: 1,
                url: "https://example.com".to_string(),
            },
        );
        summary.record_remediation(
            "repo-d".to_string(),
            &RemediationStatus::Skipped {
                reason: "no changes to commit".to_string(),
            },
        );
        summary.record_remediation(
            "repo-e".to_string(),
            &RemediationStatus::Failed {
                step: Step::Push,
                error: "denied".to_string(),
            },
        );

        assert_eq!(summary.candidate_count(), 3);
        assert_eq!(summary.remediated, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.has_failures());
        assert!(summary
            .rows
            .iter()
            .all(|row| row.license_label == NO_LICENSE));
    }
}
