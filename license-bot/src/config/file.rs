//! Optional YAML config file support.
//!
//! Settings may be persisted in a `.license-bot.yaml` file. The default
//! location is the user's home directory; an explicit `--config` path
//! takes priority. Keys mirror the CLI flags (`accessToken`,
//! `organisation`, `license`, `user`, `topic`) plus an optional `headers`
//! map from file extension to literal header text.

use crate::config::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the config file searched for in the home directory.
pub const CONFIG_FILE_NAME: &str = ".license-bot.yaml";

/// Parsed contents of a config file. All settings are optional; missing
/// keys fall through to built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    /// GitHub OAuth 2.0 access token.
    pub access_token: Option<String>,

    /// Organisation to scan for repositories.
    pub organisation: Option<String>,

    /// License identifier to conform to (e.g., "MPL-2.0").
    pub license: Option<String>,

    /// Account name of the bot user.
    pub user: Option<String>,

    /// Topic label marking repositories as scan candidates.
    pub topic: Option<String>,

    /// Custom extension-to-header table, overriding the built-in one.
    pub headers: Option<BTreeMap<String, String>>,
}

impl ConfigFile {
    /// Loads and parses a config file from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: ConfigFile =
            serde_yaml::from_str(&contents).map_err(|e| ConfigError::YamlError {
                path: path.display().to_string(),
                source: e,
            })?;

        info!(path = %path.display(), "Using config file");
        Ok(file)
    }

    /// Returns the default config file path (`$HOME/.license-bot.yaml`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeDirUnavailable`] if the home directory
    /// cannot be determined. This is a fatal error for the process.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::HomeDirUnavailable)
    }

    /// Resolves the config file to use.
    ///
    /// An explicit path must exist and parse; the default home-directory
    /// location is allowed to be absent, in which case no file is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicit file fails to load, or if
    /// the home directory cannot be resolved.
    pub fn resolve(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        match explicit {
            Some(path) => Self::load(path).map(Some),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load(&path).map(Some)
                } else {
                    debug!(path = %path.display(), "No config file found");
                    Ok(None)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_yaml_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
accessToken: "token123"
organisation: "acme"
license: "Apache-2.0"
headers:
  rs: "// Licensed.\n"
"#,
        )
        .unwrap();

        let file = ConfigFile::load(&path).unwrap();

        assert_eq!(file.access_token.as_deref(), Some("token123"));
        assert_eq!(file.organisation.as_deref(), Some("acme"));
        assert_eq!(file.license.as_deref(), Some("Apache-2.0"));
        assert_eq!(file.user, None);
        let headers = file.headers.unwrap();
        assert_eq!(headers.get("rs").map(String::as_str), Some("// Licensed.\n"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "acessToken: oops\n").unwrap();

        let result = ConfigFile::load(&path);
        assert!(matches!(result, Err(ConfigError::YamlError { .. })));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.yaml");

        let result = ConfigFile::load(&path);
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn resolve_without_file_in_home_returns_none() {
        let temp = TempDir::new().unwrap();
        temp_env::with_var("HOME", Some(temp.path()), || {
            let resolved = ConfigFile::resolve(None).unwrap();
            assert!(resolved.is_none());
        });
    }

    #[test]
    fn resolve_picks_up_home_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "organisation: \"acme\"\n",
        )
        .unwrap();

        temp_env::with_var("HOME", Some(temp.path()), || {
            let resolved = ConfigFile::resolve(None).unwrap().unwrap();
            assert_eq!(resolved.organisation.as_deref(), Some("acme"));
        });
    }
}
