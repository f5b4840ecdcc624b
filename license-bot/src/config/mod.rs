//! Bot configuration.
//!
//! This module resolves settings from command-line overrides, an optional
//! YAML config file and built-in defaults (in that order of precedence),
//! and validates them at construction time. The resulting [`BotConfig`]
//! is passed explicitly into the scanner and the remediation pipeline.

mod error;
mod file;

pub use error::ConfigError;
pub use file::{ConfigFile, CONFIG_FILE_NAME};

use bstr::BStr;
use std::collections::BTreeMap;

/// Default license identifier to conform to.
pub const DEFAULT_LICENSE: &str = "MPL-2.0";

/// Default account name of the bot user.
pub const DEFAULT_USER: &str = "license-bot";

/// Default topic label marking repositories as candidates.
pub const DEFAULT_TOPIC: &str = "open-source-candidate";

/// Default name of the remediation branch.
pub const DEFAULT_BRANCH: &str = "branch";

/// Default base branch pull requests are opened against.
pub const DEFAULT_BASE: &str = "master";

/// Settings supplied explicitly on the command line.
///
/// `None` means "not given"; the value then falls through to the config
/// file and finally to the built-in default.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// GitHub OAuth 2.0 access token.
    pub access_token: Option<String>,

    /// Organisation to scan for repositories.
    pub organisation: Option<String>,

    /// License identifier to conform to.
    pub license: Option<String>,

    /// Account name of the bot user.
    pub user: Option<String>,

    /// Topic label marking repositories as candidates.
    pub topic: Option<String>,
}

/// Validated configuration for a full bot run.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// GitHub OAuth 2.0 access token.
    pub access_token: String,

    /// Organisation to scan for repositories.
    pub organisation: String,

    /// License identifier to conform to (e.g., "MPL-2.0").
    pub license: String,

    /// Account name of the bot user. Forks are created under this account
    /// and commits are authored by it.
    pub user: String,

    /// Topic label marking repositories as candidates.
    pub topic: String,

    /// Name of the remediation branch created in each working tree.
    pub branch: String,

    /// Base branch pull requests are opened against.
    pub base: String,

    /// Custom extension-to-header table from the config file, if any.
    pub headers: Option<BTreeMap<String, String>>,
}

impl BotConfig {
    /// Resolves a validated configuration from command-line overrides and
    /// an optional config file.
    ///
    /// Precedence per setting: explicit flag > config file > default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required setting is missing after
    /// resolution, or if the branch name is not a valid git ref.
    pub fn resolve(overrides: Overrides, file: Option<ConfigFile>) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();

        let config = Self {
            access_token: overrides
                .access_token
                .or(file.access_token)
                .ok_or(ConfigError::MissingValue {
                    field: "accessToken",
                })?,
            organisation: overrides
                .organisation
                .or(file.organisation)
                .ok_or(ConfigError::MissingValue {
                    field: "organisation",
                })?,
            license: overrides
                .license
                .or(file.license)
                .unwrap_or_else(|| DEFAULT_LICENSE.to_string()),
            user: overrides
                .user
                .or(file.user)
                .unwrap_or_else(|| DEFAULT_USER.to_string()),
            topic: overrides
                .topic
                .or(file.topic)
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            branch: DEFAULT_BRANCH.to_string(),
            base: DEFAULT_BASE.to_string(),
            headers: file.headers,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates resolved settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::MissingValue {
                field: "accessToken",
            });
        }
        if self.organisation.trim().is_empty() {
            return Err(ConfigError::MissingValue {
                field: "organisation",
            });
        }
        if self.user.trim().is_empty() {
            return Err(ConfigError::MissingValue { field: "user" });
        }
        if self.license.trim().is_empty() {
            return Err(ConfigError::MissingValue { field: "license" });
        }
        if self.topic.trim().is_empty() {
            return Err(ConfigError::MissingValue { field: "topic" });
        }

        validate_ref_name(&self.branch)?;
        validate_ref_name(&self.base)?;

        Ok(())
    }
}

/// Checks that a branch name is a valid partial git ref.
fn validate_ref_name(name: &str) -> Result<(), ConfigError> {
    gix_validate::reference::name_partial(BStr::new(name.as_bytes()))
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidBranch {
            name: name.to_string(),
            message: e.to_string(),
        })
}
