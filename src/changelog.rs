//! The changelog as a document: a block of release sections followed by a
//! table of reference-style links.
//!
//! ```text
//! ## [Unreleased]
//!
//! ### Changes
//!
//! * <entries>
//!
//! ## [<version>] <YYYY-MM-DD>
//!
//! ...
//!
//! [Unreleased]: <repo-url>/<version>...main
//! [<version>]: <repo-url>/compare/<prev-version>...<version>
//! ```
//!
//! [`Changelog::parse`] locates the pieces once: the split between the
//! sections and the link table, the `## [Unreleased]` heading and the release
//! heading right below it. The entry, merge and links submodules only ever
//! see strings cut out of a parsed document.
use regex::Regex;
use std::{borrow::Cow, collections::HashSet, ops::Range, sync::LazyLock};

use crate::error::{ChangelogError, Result};

pub mod entry;
pub mod links;
pub mod merge;

/// Start of the link table: the first line defining the Unreleased link
static LINK_SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[Unreleased\]:").unwrap());

static UNRELEASED_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \[Unreleased\]").unwrap());

/// Level-2 release heading, capturing the version label
static RELEASE_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \[([0-9.\-a-z]+)\]").unwrap());

static LINK_DEFINITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\[(?<label>[^\]]+)\]:[ \t]*(?<url>\S*)").unwrap()
});

/// One `[label]: url` line of the link table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition<'a> {
    pub label: &'a str,
    pub url: &'a str,
}

/// The release heading directly below `## [Unreleased]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousRelease<'a> {
    /// Version label of the heading
    pub version: &'a str,
    /// Offset of the heading in the upper region; the Unreleased section
    /// ends here
    pub start: usize,
    /// Trimmed text between the Unreleased heading and this heading
    pub unreleased_body: &'a str,
}

/// Split `content` at the first `[Unreleased]:` line into the sections and
/// the link table.
pub fn split(content: &str) -> Result<(&str, &str)> {
    let found = LINK_SECTION_REGEX
        .find(content)
        .ok_or(ChangelogError::MissingLinkSection)?;

    Ok(content.split_at(found.start()))
}

/// Span of the `## [Unreleased]` heading within the upper region.
pub fn find_unreleased(upper: &str) -> Result<Range<usize>> {
    UNRELEASED_HEADING_REGEX
        .find(upper)
        .map(|m| m.range())
        .ok_or(ChangelogError::MissingUnreleasedSection)
}

/// First release heading after `unreleased_end`, along with the Unreleased
/// body that sits between the two headings.
pub fn find_previous_release(
    upper: &str,
    unreleased_end: usize,
) -> Result<PreviousRelease<'_>> {
    let caps = RELEASE_HEADING_REGEX
        .captures_at(upper, unreleased_end)
        .ok_or(ChangelogError::MissingPreviousRelease)?;

    let heading = caps.get(0).ok_or(ChangelogError::MissingPreviousRelease)?;
    let version = caps.get(1).ok_or(ChangelogError::MissingPreviousRelease)?;

    Ok(PreviousRelease {
        version: version.as_str(),
        start: heading.start(),
        unreleased_body: upper[unreleased_end..heading.start()].trim(),
    })
}

/// Convert `\r\n` and lone `\r` line endings to `\n`. Borrows when the text
/// already uses `\n` only.
pub fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// True if a `## [<version>]` heading already exists anywhere in `content`.
pub fn contains_release(content: &str, version: &str) -> bool {
    content.contains(&format!("## [{version}]"))
}

/// A changelog whose structure has been checked.
#[derive(Debug, Clone)]
pub struct Changelog<'a> {
    upper: &'a str,
    links: &'a str,
    unreleased: Range<usize>,
    previous: PreviousRelease<'a>,
}

impl<'a> Changelog<'a> {
    /// Parse `content`, failing if any of the link table, the Unreleased
    /// heading or a prior release heading is missing, or if the Unreleased
    /// heading, the Unreleased link or a release heading appears twice.
    ///
    /// `content` must use `\n` line endings; see [`normalize_line_endings`].
    pub fn parse(content: &'a str) -> Result<Self> {
        let (upper, links) = split(content)?;
        let unreleased = find_unreleased(upper)?;

        if UNRELEASED_HEADING_REGEX
            .find_at(upper, unreleased.end)
            .is_some()
        {
            return Err(ChangelogError::DuplicateUnreleasedSection);
        }

        let previous = find_previous_release(upper, unreleased.end)?;

        let changelog = Self {
            upper,
            links,
            unreleased,
            previous,
        };

        let mut seen = HashSet::new();
        for label in changelog.release_labels() {
            if !seen.insert(label) {
                return Err(ChangelogError::DuplicateRelease(label.to_string()));
            }
        }

        let unreleased_links = changelog
            .link_definitions()
            .iter()
            .filter(|d| d.label == "Unreleased")
            .count();
        if unreleased_links > 1 {
            return Err(ChangelogError::DuplicateUnreleasedLink);
        }

        Ok(changelog)
    }

    /// Everything above the link table.
    pub fn upper(&self) -> &'a str {
        self.upper
    }

    /// The link table, starting at the `[Unreleased]:` line.
    pub fn links(&self) -> &'a str {
        self.links
    }

    /// Text before the `## [Unreleased]` heading (title, preamble).
    pub fn preamble(&self) -> &'a str {
        &self.upper[..self.unreleased.start]
    }

    /// Entries recorded under `## [Unreleased]`, trimmed.
    pub fn unreleased_body(&self) -> &'a str {
        self.previous.unreleased_body
    }

    pub fn previous_release(&self) -> &PreviousRelease<'a> {
        &self.previous
    }

    /// All release sections from the previous release down.
    pub fn releases(&self) -> &'a str {
        &self.upper[self.previous.start..]
    }

    /// Version labels of every release heading, newest first.
    pub fn release_labels(&self) -> Vec<&'a str> {
        RELEASE_HEADING_REGEX
            .captures_iter(self.releases())
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Parsed link table, in file order.
    pub fn link_definitions(&self) -> Vec<LinkDefinition<'a>> {
        LINK_DEFINITION_REGEX
            .captures_iter(self.links)
            .filter_map(|caps| {
                Some(LinkDefinition {
                    label: caps.name("label")?.as_str(),
                    url: caps.name("url")?.as_str(),
                })
            })
            .collect()
    }
}
