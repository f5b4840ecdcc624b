//! License fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching a license template.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
