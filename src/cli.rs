//! CLI argument parsing. Every input can also come from the environment so the
//! tool drops straight into a CI job.
use clap::Parser;

/// Record a nearcore bump in the changelog and cut a release section from
/// the Unreleased changes.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "NEW_VERSION")]
    /// Release version to cut, e.g. 1.2.3-4.5.6 or 1.2.3-4.5.6-rc.1.
    pub new_version: Option<String>,

    #[arg(long, env = "PR_NUMBER")]
    /// Pull request that bumped nearcore.
    pub pr_number: Option<String>,

    #[arg(long, env = "CHANGELOG_PATH")]
    /// Changelog to update. Defaults to CHANGES.md.
    pub changelog_path: Option<String>,

    #[arg(long, env = "CHANGELOG_REPO_URL")]
    /// Repository url used in pull request and compare links.
    pub repo_url: Option<String>,

    #[arg(long)]
    /// Release date (YYYY-MM-DD). Defaults to today in UTC.
    pub date: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Print the updated changelog instead of writing it.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
