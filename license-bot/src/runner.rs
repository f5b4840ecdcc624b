//! Orchestrates a full scan and remediation run.

use crate::config::{BotConfig, ConfigError};
use crate::headers::HeaderSet;
use crate::licenses::{fetch_license, LicenseTemplate};
use crate::remediation::{remediate, RemediationStatus};
use crate::report::RunSummary;
use crate::scanner::{filter_candidates, list_org_repositories, ScanError};
use octocrab::Octocrab;
use tracing::{info, warn};

/// Errors that can abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration resolution errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Repository listing failed. The CLI maps this to exit code 2.
    #[error("Failed to list repositories: {0}")]
    Scan(#[from] ScanError),

    /// GitHub API client initialization errors.
    #[error("GitHub API error: {0}")]
    GitHub(octocrab::Error),
}

/// Orchestrates one scan-and-remediate run over an organisation.
pub struct Runner {
    config: BotConfig,
    octocrab: Octocrab,
    headers: HeaderSet,
}

impl Runner {
    /// Builds a runner from a validated configuration.
    ///
    /// The header table comes from the config file when one was given,
    /// otherwise the built-in per-license default is used.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the GitHub client cannot be built.
    pub fn new(config: BotConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.access_token.clone())
            .build()
            .map_err(RunnerError::GitHub)?;

        let headers = match &config.headers {
            Some(table) => HeaderSet::new(table.clone()),
            None => HeaderSet::for_license(&config.license),
        };

        Ok(Self {
            config,
            octocrab,
            headers,
        })
    }

    /// Executes the full run: fetch the license template, list and filter
    /// repositories, then remediate license-less candidates one at a
    /// time, in list order.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Scan`] if the repository listing fails;
    /// everything downstream of the listing is soft and recorded in the
    /// summary instead.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();

        // Fetched once per run. Failure is soft: candidates needing
        // remediation are skipped but still reported.
        let license: Option<LicenseTemplate> =
            match fetch_license(&self.octocrab, &self.config.license).await {
                Ok(template) => Some(template),
                Err(e) => {
                    warn!(
                        license = %self.config.license,
                        error = %e,
                        "Failed to fetch license template, remediation disabled for this run"
                    );
                    None
                }
            };

        let repositories =
            list_org_repositories(&self.octocrab, &self.config.organisation).await?;
        let candidates = filter_candidates(repositories, &self.config.topic);
        info!(count = candidates.len(), "Found candidate repositories");

        for candidate in &candidates {
            if let Some(license_id) = candidate.license_id() {
                info!(repo = %candidate.full_name, license = license_id, "Already licensed");
                summary.record_licensed(candidate.name.clone(), license_id.to_string());
                continue;
            }

            let status = match &license {
                Some(template) => {
                    let outcome = remediate(
                        &self.octocrab,
                        candidate,
                        template,
                        &self.headers,
                        &self.config,
                    )
                    .await;
                    if let Some(url) = outcome.status.url() {
                        info!(
                            repo = %outcome.repository.full_name,
                            branch = %outcome.branch,
                            url,
                            "Opened pull request"
                        );
                    }
                    outcome.status
                }
                None => RemediationStatus::Skipped {
                    reason: "license template unavailable".to_string(),
                },
            };

            summary.record_remediation(candidate.name.clone(), &status);
        }

        Ok(summary)
    }
}
