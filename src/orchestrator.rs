//! Runs one changelog update from start to finish.
//!
//! The stages run strictly in order and any failure ends the run:
//!
//! 1. check the version shape
//! 2. locate and load the changelog
//! 3. stop early if the version already has a section
//! 4. parse the document (link table, Unreleased heading, previous release)
//!    after converting CRLF line endings to LF
//! 5. compose the bump entry and merge it into the Unreleased body
//! 6. rewrite the link table
//! 7. reassemble the document and write it back in one piece
//!
//! Nothing is written until the full new text exists in memory.
use log::*;
use std::path::PathBuf;

use crate::{
    changelog::{self, Changelog, entry::Entry, links, merge},
    config::Config,
    error::{ChangelogError, Result},
    source, version,
};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The changelog was rewritten with the new release
    Updated { path: PathBuf, version: String },
    /// Dry run: the changelog that would have been written
    Previewed {
        path: PathBuf,
        version: String,
        content: String,
    },
    /// The version already has a release section; nothing was touched
    Skipped { path: PathBuf, version: String },
}

/// Update the changelog described by `config`.
pub fn run(config: &Config) -> Result<Outcome> {
    if !version::validate(Some(&config.new_version)) {
        return Err(ChangelogError::InvalidVersion(config.new_version.clone()));
    }

    let source = source::locate(
        config.changelog_path.as_deref(),
        config.release_date,
    )?;

    let content = source.load()?;

    debug!("loaded {} bytes from {}", content.len(), source.path.display());

    if changelog::contains_release(&content, &config.new_version) {
        info!(
            "Version {} already exists in {}, skipping update",
            config.new_version,
            source.path.display()
        );
        return Ok(Outcome::Skipped {
            path: source.path,
            version: config.new_version.clone(),
        });
    }

    let updated = render(&content, config, &source.date_string())?;

    if config.dry_run {
        info!(
            "dry run: {} left unchanged for version {}",
            source.path.display(),
            config.new_version
        );
        return Ok(Outcome::Previewed {
            path: source.path,
            version: config.new_version.clone(),
            content: updated,
        });
    }

    debug!("persisting {} bytes", updated.len());

    source.persist(&updated)?;

    info!(
        "Successfully updated {} with new version {}",
        source.path.display(),
        config.new_version
    );

    Ok(Outcome::Updated {
        path: source.path,
        version: config.new_version.clone(),
    })
}

/// Compute the changelog that results from releasing `config.new_version`
/// on `date`.
///
/// The Unreleased body becomes the body of a new `## [<version>] <date>`
/// section placed under a fresh, empty `## [Unreleased]` heading. Text above
/// the Unreleased heading and every older section are kept as they are,
/// except that the whole result uses `\n` line endings.
pub fn render(content: &str, config: &Config, date: &str) -> Result<String> {
    let content = changelog::normalize_line_endings(content);
    let changelog = Changelog::parse(&content)?;
    let previous = changelog.previous_release();

    debug!(
        "previous release {}, unreleased body is {} bytes",
        previous.version,
        changelog.unreleased_body().len()
    );

    let entry =
        Entry::compose(&config.new_version, config.pr_number, &config.repo_url);

    debug!("composed entry: {}", entry.bullet);

    let body = merge::merge_entry(changelog.unreleased_body(), &entry.bullet);
    let body = merge::append_pr_link(&body, &entry.link, &config.repo_url);

    let links = links::update_links(
        changelog.links(),
        &config.new_version,
        previous.version,
        &config.repo_url,
    );

    debug!("link table now points Unreleased at {}", config.new_version);

    Ok(format!(
        "{}## [Unreleased]\n\n## [{}] {date}\n\n{body}\n\n{}{links}",
        changelog.preamble(),
        config.new_version,
        changelog.releases(),
    ))
}
