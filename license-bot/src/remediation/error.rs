//! Remediation error types.

use crate::headers::HeaderError;
use thiserror::Error;

/// Errors that can occur during a remediation attempt.
#[derive(Debug, Error)]
pub enum RemediationError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// A git subprocess failed.
    #[error("git {command} failed: {message}")]
    Git { command: String, message: String },

    /// Working-tree I/O failure.
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The hosting API reported no clone URL for the repository.
    #[error("Repository '{repo}' has no clone URL")]
    MissingCloneUrl { repo: String },

    /// Credentials could not be embedded in the push URL.
    #[error("Could not build authenticated push URL from '{url}'")]
    PushUrl { url: String },

    /// Header insertion failure.
    #[error(transparent)]
    Headers(#[from] HeaderError),
}
