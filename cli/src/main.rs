//! CLI for the License Bot.
//!
//! Trawls a GitHub organisation for license conformance issues: every
//! public, non-fork repository tagged with the candidate topic is checked
//! for a license, and license-less repositories get a remediation pull
//! request adding a LICENSE file and per-extension license headers.

use clap::Parser;
use license_bot::{render_report, BotConfig, ConfigFile, Overrides, Runner, RunnerError, RunSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// License Bot - Trawl a GitHub organisation for license conformance issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path (default is $HOME/.license-bot.yaml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub OAuth 2.0 access token.
    #[arg(long, env = "GITHUB_TOKEN")]
    access_token: Option<String>,

    /// Name of the GitHub organisation to search for repos.
    #[arg(long)]
    organisation: Option<String>,

    /// Name of the license to conform to (default: MPL-2.0).
    #[arg(long)]
    license: Option<String>,

    /// Account name of the bot user (default: license-bot).
    #[arg(long)]
    user: Option<String>,

    /// Topic label marking candidate repositories
    /// (default: open-source-candidate).
    #[arg(long)]
    topic: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_report(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run aborted");
            exit_code_for(&e)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic: resolve configuration with explicit precedence
/// (flag > config file > default), then run the bot.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let file = ConfigFile::resolve(args.config.as_deref())?;

    let overrides = Overrides {
        access_token: args.access_token,
        organisation: args.organisation,
        license: args.license,
        user: args.user,
        topic: args.topic,
    };

    let config = BotConfig::resolve(overrides, file)?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Maps a run-aborting error to the process exit code: 2 when the
/// repository listing failed, 1 for any other fatal error.
fn exit_code_for(error: &RunnerError) -> ExitCode {
    match error {
        RunnerError::Scan(_) => ExitCode::from(2),
        _ => ExitCode::from(1),
    }
}

/// Prints the per-repository report followed by the aggregate summary.
fn print_report(summary: &RunSummary) {
    let table = render_report(&summary.rows);
    if !table.is_empty() {
        println!("{table}");
    }

    println!("\nSummary:");
    println!("  Candidates: {}", summary.candidate_count());
    println!("  Already licensed: {}", summary.already_licensed);
    println!("  Pull requests opened: {}", summary.remediated);
    println!("  Skipped: {}", summary.skipped);
    println!("  Failed: {}", summary.failed);
}
