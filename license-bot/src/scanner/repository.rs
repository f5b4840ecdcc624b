//! Scanned repository record.

use serde::{Deserialize, Serialize};
use url::Url;

/// The subset of the hosting API's repository payload this system reads.
///
/// Sourced from and owned by the hosting API; read-only here. Built once
/// per run from the paginated listing and carried through filtering,
/// reporting and remediation. The same shape is returned by the
/// get-repository endpoint, so fork metadata re-fetches reuse it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedRepository {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    #[serde(default)]
    pub full_name: String,

    /// HTTPS clone URL, when the API reports one.
    #[serde(default)]
    pub clone_url: Option<Url>,

    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,

    /// Whether the repository is itself a fork.
    #[serde(default)]
    pub fork: bool,

    /// Topic labels attached to the repository.
    #[serde(default)]
    pub topics: Vec<String>,

    /// License detected by the hosting API, if any.
    #[serde(default)]
    pub license: Option<LicenseInfo>,
}

/// License information attached to a repository listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseInfo {
    /// Lowercase license key (e.g., "mpl-2.0").
    pub key: String,

    /// SPDX identifier (e.g., "MPL-2.0"). May be absent or "NOASSERTION"
    /// for licenses the API could not classify.
    #[serde(default)]
    pub spdx_id: Option<String>,
}

impl ScannedRepository {
    /// Whether the repository carries the given topic label (exact match).
    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// The license identifier to report: the SPDX id, falling back to the
    /// license key when the API gives no SPDX classification.
    #[must_use]
    pub fn license_id(&self) -> Option<&str> {
        self.license
            .as_ref()
            .map(|l| l.spdx_id.as_deref().unwrap_or(l.key.as_str()))
    }
}
