#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod headers;
pub mod licenses;
pub mod remediation;
pub mod report;
pub mod runner;
pub mod scanner;

pub use config::{BotConfig, ConfigError, ConfigFile, Overrides};
pub use headers::{apply_headers, prepend_header, HeaderError, HeaderSet};
pub use licenses::{fetch_license, LicenseError, LicenseTemplate};
pub use remediation::{remediate, RemediationError, RemediationOutcome, RemediationStatus, Step};
pub use report::{render_report, ReportRow, RunSummary, NO_LICENSE};
pub use runner::{Runner, RunnerError};
pub use scanner::{filter_candidates, list_org_repositories, ScanError, ScannedRepository};
