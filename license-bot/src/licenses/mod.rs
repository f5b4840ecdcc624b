//! License template retrieval.
//!
//! Fetches the full text of a license from the hosting API's license
//! endpoint, once per run. The body is what gets written into a LICENSE
//! file during remediation.

mod error;

pub use error::LicenseError;

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A license template fetched from the hosting API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseTemplate {
    /// Lowercase license key (e.g., "mpl-2.0").
    pub key: String,

    /// Human-readable license name.
    pub name: String,

    /// SPDX identifier (e.g., "MPL-2.0").
    #[serde(default)]
    pub spdx_id: Option<String>,

    /// Full license body text.
    #[serde(default)]
    pub body: String,
}

/// Fetches a license template by identifier (`GET /licenses/{id}`).
///
/// # Errors
///
/// Returns [`LicenseError`] if the API call fails, including when the
/// identifier names no known license.
pub async fn fetch_license(
    octocrab: &Octocrab,
    license_id: &str,
) -> Result<LicenseTemplate, LicenseError> {
    debug!(license = %license_id, "Fetching license template");

    let template: LicenseTemplate = octocrab
        .get(format!("/licenses/{license_id}"), None::<&()>)
        .await?;

    info!(
        license = %template.name,
        bytes = template.body.len(),
        "Fetched license template"
    );
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_license_payload() {
        let json = serde_json::json!({
            "key": "mpl-2.0",
            "name": "Mozilla Public License 2.0",
            "spdx_id": "MPL-2.0",
            "url": "https://api.github.com/licenses/mpl-2.0",
            "body": "Mozilla Public License Version 2.0\n...",
            "permissions": ["commercial-use"],
            "featured": true
        });

        let template: LicenseTemplate = serde_json::from_value(json).unwrap();

        assert_eq!(template.key, "mpl-2.0");
        assert_eq!(template.spdx_id.as_deref(), Some("MPL-2.0"));
        assert!(template.body.starts_with("Mozilla Public License"));
    }
}
