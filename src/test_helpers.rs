//! Common test helper functions shared across test modules.
use chrono::NaiveDate;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::config::{Config, ConfigBuilder, DEFAULT_REPO_URL};

pub const REPO_URL: &str = DEFAULT_REPO_URL;
pub const PREVIOUS_VERSION: &str = "3.6.4-2.5.1";
pub const OLDEST_VERSION: &str = "3.6.3-2.5.0";
pub const NEW_VERSION: &str = "3.7.0-2.6.0";
pub const RELEASE_DATE: &str = "2024-06-01";

/// Creates a changelog with two prior releases and the given Unreleased
/// body. An empty body leaves the Unreleased section empty.
///
/// # Example
/// ```ignore
/// let content = changelog("### Changes\n\n* foo");
/// ```
pub fn changelog(unreleased_body: &str) -> String {
    let body = if unreleased_body.is_empty() {
        String::new()
    } else {
        format!("{unreleased_body}\n\n")
    };

    format!(
        "## [Unreleased]\n\n{body}## [{PREVIOUS_VERSION}] 2024-05-01\n\n### Changes\n\n* previous change\n\n## [{OLDEST_VERSION}] 2024-04-01\n\n* oldest change\n\n{}",
        links()
    )
}

/// The link table matching [`changelog`].
pub fn links() -> String {
    format!(
        "[Unreleased]: {REPO_URL}/{PREVIOUS_VERSION}...main\n[{PREVIOUS_VERSION}]: {REPO_URL}/compare/{OLDEST_VERSION}...{PREVIOUS_VERSION}\n[{OLDEST_VERSION}]: {REPO_URL}/compare/3.6.2-2.4.0...{OLDEST_VERSION}\n"
    )
}

/// Creates a Config releasing [`NEW_VERSION`] from PR 42 on [`RELEASE_DATE`].
pub fn create_test_config(changelog_path: Option<PathBuf>) -> Config {
    let mut builder = ConfigBuilder::default();

    builder
        .new_version(NEW_VERSION)
        .pr_number(42u64)
        .release_date(release_date());

    if let Some(path) = changelog_path {
        builder.changelog_path(path);
    }

    builder.build().unwrap()
}

pub fn release_date() -> NaiveDate {
    NaiveDate::parse_from_str(RELEASE_DATE, "%Y-%m-%d").unwrap()
}

/// Writes `content` to CHANGES.md inside a fresh temp dir.
pub fn write_changelog(content: &str) -> (TempDir, PathBuf) {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("CHANGES.md");
    fs::write(&path, content).unwrap();
    (tmp_dir, path)
}
