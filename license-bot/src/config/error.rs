//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("Failed to parse config file '{path}': {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required setting is missing from flags, config file and defaults.
    #[error("Missing required setting: {field}")]
    MissingValue { field: &'static str },

    /// A branch name that git would reject.
    #[error("Invalid branch name '{name}': {message}")]
    InvalidBranch { name: String, message: String },

    /// The home directory could not be resolved for config lookup.
    #[error("Could not determine home directory for config lookup")]
    HomeDirUnavailable,
}
