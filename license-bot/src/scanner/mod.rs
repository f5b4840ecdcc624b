//! Repository scanning and candidate filtering.
//!
//! Lists every repository belonging to an organisation through the
//! paginated listing endpoint, then filters down to remediation
//! candidates: public, non-fork repositories carrying the designated
//! topic label.

mod error;
mod repository;

pub use error::ScanError;
pub use repository::{LicenseInfo, ScannedRepository};

use octocrab::{Octocrab, Page};
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};

/// Fixed page size for the repository listing.
const PAGE_SIZE: u8 = 10;

#[derive(Serialize)]
struct ListParams {
    per_page: u8,
}

/// Lists all repositories belonging to an organisation.
///
/// Pages through the listing endpoint transparently, following the
/// response's next-page link until the API reports no further pages.
/// A short page with no next link terminates the loop.
///
/// # Errors
///
/// Returns [`ScanError`] on any API failure. There is no partial-result
/// fallback; the caller aborts the run.
pub async fn list_org_repositories(
    octocrab: &Octocrab,
    organisation: &str,
) -> Result<Vec<ScannedRepository>, ScanError> {
    let span = info_span!("scan", org = %organisation);

    async {
        info!("Listing repositories");

        let mut all_repos = Vec::new();

        let mut page: Page<ScannedRepository> = octocrab
            .get(
                format!("/orgs/{organisation}/repos"),
                Some(&ListParams {
                    per_page: PAGE_SIZE,
                }),
            )
            .await?;
        all_repos.extend(page.items.drain(..));

        while let Some(mut next_page) = octocrab
            .get_page::<ScannedRepository>(&page.next)
            .await?
        {
            debug!(fetched = all_repos.len(), "Fetching next page");
            all_repos.extend(next_page.items.drain(..));
            page.next = next_page.next;

            if page.next.is_none() {
                break;
            }
        }

        info!(count = all_repos.len(), "Listing complete");
        Ok(all_repos)
    }
    .instrument(span)
    .await
}

/// Filters repositories down to remediation candidates.
///
/// A repository is a candidate iff it is public, not a fork, and carries
/// the designated topic label (exact string match).
#[must_use]
pub fn filter_candidates(
    repositories: Vec<ScannedRepository>,
    topic: &str,
) -> Vec<ScannedRepository> {
    repositories
        .into_iter()
        .filter(|repo| !repo.private && !repo.fork && repo.has_topic(topic))
        .collect()
}
