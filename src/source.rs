//! Locating, loading and persisting the changelog file.
use chrono::{NaiveDate, Utc};
use log::*;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

use crate::{
    config::DEFAULT_CHANGELOG_PATH,
    error::{ChangelogError, Result},
};

/// Format of release dates in section headings
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A changelog that exists on disk plus the date to stamp the release with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub date: NaiveDate,
}

impl Source {
    /// Release date as it appears in the section heading.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Read the whole changelog.
    pub fn load(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| ChangelogError::io(&self.path, e))
    }

    /// Replace the changelog with `content` in one step.
    ///
    /// The text is written to a sibling temp file which is then renamed over
    /// the original, so readers see either the old or the new document. A
    /// symlinked changelog is resolved first so the link itself survives.
    pub fn persist(&self, content: &str) -> Result<()> {
        let target = fs::canonicalize(&self.path)
            .map_err(|e| ChangelogError::io(&self.path, e))?;

        let dir = target.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| ChangelogError::io(dir, e))?;

        tmp.write_all(content.as_bytes())
            .map_err(|e| ChangelogError::io(tmp.path(), e))?;

        // keep the original file mode instead of the temp file's 0600
        if let Ok(metadata) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| ChangelogError::io(tmp.path(), e))?;
        }

        tmp.persist(&target).map_err(|e| ChangelogError::Persist {
            path: target.clone(),
            source: e,
        })?;

        debug!("wrote {} bytes to {}", content.len(), target.display());

        Ok(())
    }
}

/// Resolve the changelog path and release date. A missing changelog is an
/// error; it is never created.
pub fn locate(
    path_override: Option<&Path>,
    date_override: Option<NaiveDate>,
) -> Result<Source> {
    let path = path_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGELOG_PATH));

    if !path.exists() {
        return Err(ChangelogError::ChangelogNotFound(path));
    }

    let date = date_override.unwrap_or_else(|| Utc::now().date_naive());

    debug!("using changelog {} dated {}", path.display(), date);

    Ok(Source { path, date })
}
