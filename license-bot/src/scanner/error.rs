//! Scanner error types.

use thiserror::Error;

/// Errors that can occur while listing repositories.
///
/// A listing failure aborts the whole run; the CLI maps it to exit code 2.
#[derive(Debug, Error)]
pub enum ScanError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
