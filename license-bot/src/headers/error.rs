//! Header insertion error types.

use thiserror::Error;

/// Errors that can occur while prepending license headers.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Failed to read or write a file in the working tree.
    #[error("Failed to process file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
