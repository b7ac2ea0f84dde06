//! Error types for changelog-bump.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure the changelog update can hit.
///
/// Configuration errors are raised before the changelog is touched.
/// Document-shape errors mean the changelog does not follow the expected
/// `## [Unreleased]` / release heading / link table layout. Neither class is
/// retried; the caller reports the message and exits.
#[derive(Error, Debug)]
pub enum ChangelogError {
    // Configuration errors
    #[error("{0} must be set")]
    MissingInput(String),

    #[error(
        "Invalid version format '{0}'. Valid formats: 'x.y.z-a.b.c' or 'x.y.z-a.b.c-rc.n'"
    )]
    InvalidVersion(String),

    #[error("Invalid PR number '{0}': expected a positive integer")]
    InvalidPrNumber(String),

    #[error("Invalid repository url '{url}': {reason}")]
    InvalidRepoUrl { url: String, reason: String },

    #[error("Invalid release date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    // Document shape errors
    #[error("{} not found", .0.display())]
    ChangelogNotFound(PathBuf),

    #[error("Could not find the link definitions section in the changelog")]
    MissingLinkSection,

    #[error("Could not find [Unreleased] section in the changelog")]
    MissingUnreleasedSection,

    #[error("Could not find any previous release entries")]
    MissingPreviousRelease,

    #[error("Found more than one [Unreleased] section in the changelog")]
    DuplicateUnreleasedSection,

    #[error("Found more than one [Unreleased] link definition in the changelog")]
    DuplicateUnreleasedLink,

    #[error("Release heading [{0}] appears more than once in the changelog")]
    DuplicateRelease(String),

    // I/O errors
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a missing input error
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput(name.into())
    }

    /// Create an I/O error tied to the file it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised before the changelog is read.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingInput(_)
                | Self::InvalidVersion(_)
                | Self::InvalidPrNumber(_)
                | Self::InvalidRepoUrl { .. }
                | Self::InvalidDate(_)
        )
    }

    /// Process exit status for this error. Every failure is terminal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
