//! Remediation outcome record.

use crate::scanner::ScannedRepository;

/// Record of one repository's remediation attempt.
#[derive(Debug, Clone)]
pub struct RemediationOutcome {
    /// The repository that was remediated.
    pub repository: ScannedRepository,

    /// Name of the branch pushed to the bot's fork.
    pub branch: String,

    /// Final status of the attempt.
    pub status: super::RemediationStatus,
}
