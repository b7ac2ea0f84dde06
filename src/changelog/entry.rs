//! The changelog lines describing one nearcore bump.
use crate::version;

/// A bullet for the release section plus the link reference it cites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// `* chore: bump nearcore to <version> in [#<pr>]`
    pub bullet: String,
    /// `[#<pr>]: <repo-url>/pull/<pr>`
    pub link: String,
}

impl Entry {
    /// Compose the entry for `new_version` landing in pull request
    /// `pr_number`.
    pub fn compose(new_version: &str, pr_number: u64, repo_url: &str) -> Self {
        let nearcore_version = version::dependency_version(new_version);

        Self {
            bullet: format!(
                "* chore: bump nearcore to {nearcore_version} in [#{pr_number}]"
            ),
            link: format!("[#{pr_number}]: {repo_url}/pull/{pr_number}"),
        }
    }
}
