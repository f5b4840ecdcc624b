//! Remediation status types.

use serde::Serialize;
use std::fmt;

/// Pipeline stage at which a remediation attempt can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Forking the repository under the bot's account.
    Fork,
    /// Cloning the source repository into a working tree.
    Clone,
    /// Registering and fetching the upstream remote.
    Upstream,
    /// Creating the remediation branch.
    Branch,
    /// Writing the LICENSE file.
    License,
    /// Prepending license headers to source files.
    Headers,
    /// Staging and committing the changes.
    Commit,
    /// Pushing the branch to the bot's fork.
    Push,
    /// Opening the pull request against upstream.
    PullRequest,
}

impl Step {
    /// Returns the step name as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fork => "fork",
            Self::Clone => "clone",
            Self::Upstream => "upstream",
            Self::Branch => "branch",
            Self::License => "license",
            Self::Headers => "headers",
            Self::Commit => "commit",
            Self::Push => "push",
            Self::PullRequest => "pull_request",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one repository's remediation attempt.
///
/// Every attempt ends in exactly one of these states; a failure records
/// the step it happened at, so partial failures are distinguishable from
/// successes in the final summary.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemediationStatus {
    /// A pull request was opened.
    Completed {
        /// GitHub PR number.
        number: u64,
        /// GitHub PR URL.
        url: String,
    },

    /// Remediation was not attempted or produced nothing to commit.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },

    /// Remediation failed part-way.
    Failed {
        /// Pipeline stage that failed.
        step: Step,
        /// Error message.
        error: String,
    },
}

impl RemediationStatus {
    /// Returns the status as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed { .. } => "completed",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }

    /// Returns the PR URL if one was opened.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Completed { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_status_to_string() {
        assert_eq!(
            RemediationStatus::Completed {
                number: 1,
                url: "https://example.com".to_string()
            }
            .as_str(),
            "completed"
        );
        assert_eq!(
            RemediationStatus::Skipped {
                reason: "test".to_string()
            }
            .as_str(),
            "skipped"
        );
        assert_eq!(
            RemediationStatus::Failed {
                step: Step::Push,
                error: "test".to_string()
            }
            .as_str(),
            "failed"
        );
    }

    #[test]
    fn url_is_only_present_when_completed() {
        let completed = RemediationStatus::Completed {
            number: 7,
            url: "https://github.com/acme/repo-c/pull/7".to_string(),
        };
        assert_eq!(
            completed.url(),
            Some("https://github.com/acme/repo-c/pull/7")
        );

        let skipped = RemediationStatus::Skipped {
            reason: "test".to_string(),
        };
        assert_eq!(skipped.url(), None);
    }

    #[test]
    fn step_names_follow_pipeline_order() {
        assert_eq!(Step::Fork.as_str(), "fork");
        assert_eq!(Step::PullRequest.as_str(), "pull_request");
        assert_eq!(Step::Push.to_string(), "push");
    }
}
