//! Run configuration, built once from [`Args`] and handed to the
//! orchestrator.
use chrono::NaiveDate;
use derive_builder::Builder;
use std::path::PathBuf;
use url::Url;

use crate::{
    cli::Args,
    error::{ChangelogError, Result},
    version,
};

/// Changelog used when no path override is given
pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGES.md";

/// Repository whose pull requests and tags the changelog links point at
pub const DEFAULT_REPO_URL: &str =
    "https://github.com/aurora-is-near/borealis-engine-lib";

/// Everything one changelog update needs.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Composite release version, already validated
    pub new_version: String,
    /// Pull request that carried the nearcore bump
    pub pr_number: u64,
    /// Override for [`DEFAULT_CHANGELOG_PATH`]
    #[builder(setter(strip_option), default)]
    pub changelog_path: Option<PathBuf>,
    /// Base url for pull request and compare links, without trailing slash
    #[builder(default = "DEFAULT_REPO_URL.to_string()")]
    pub repo_url: String,
    /// Release date override. Today in UTC when unset.
    #[builder(setter(strip_option), default)]
    pub release_date: Option<NaiveDate>,
    /// Compute the new changelog but don't write it
    #[builder(default)]
    pub dry_run: bool,
}

impl TryFrom<&Args> for Config {
    type Error = ChangelogError;

    fn try_from(args: &Args) -> Result<Self> {
        let new_version = non_empty(args.new_version.as_deref());
        let pr_number = non_empty(args.pr_number.as_deref());

        // a bad version is reported ahead of a missing PR number
        if let Some(v) = new_version
            && !version::validate(Some(v))
        {
            return Err(ChangelogError::InvalidVersion(v.to_string()));
        }

        let (Some(new_version), Some(pr_number)) = (new_version, pr_number)
        else {
            return Err(ChangelogError::missing_input(
                "NEW_VERSION and PR_NUMBER",
            ));
        };

        let pr_number = parse_pr_number(pr_number)?;

        let repo_url = match non_empty(args.repo_url.as_deref()) {
            Some(url) => parse_repo_url(url)?,
            None => DEFAULT_REPO_URL.to_string(),
        };

        let release_date = non_empty(args.date.as_deref())
            .map(parse_date)
            .transpose()?;

        Ok(Self {
            new_version: new_version.to_string(),
            pr_number,
            changelog_path: non_empty(args.changelog_path.as_deref())
                .map(PathBuf::from),
            repo_url,
            release_date,
            dry_run: args.dry_run,
        })
    }
}

/// Values are taken verbatim; surrounding whitespace makes them invalid.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_pr_number(value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ChangelogError::InvalidPrNumber(value.to_string()))
}

/// Only http and https repository urls make usable markdown links.
fn parse_repo_url(value: &str) -> Result<String> {
    let invalid = |reason: &str| ChangelogError::InvalidRepoUrl {
        url: value.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(value).map_err(|e| invalid(&e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid("only http and https schemes are supported")),
    }

    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    Ok(value.trim_end_matches('/').to_string())
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ChangelogError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(new_version: Option<&str>, pr_number: Option<&str>) -> Args {
        Args {
            new_version: new_version.map(String::from),
            pr_number: pr_number.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn builds_config_with_defaults() {
        let config =
            Config::try_from(&args(Some("1.2.3-4.5.6"), Some("42"))).unwrap();

        assert_eq!(config.new_version, "1.2.3-4.5.6");
        assert_eq!(config.pr_number, 42);
        assert_eq!(config.changelog_path, None);
        assert_eq!(config.repo_url, DEFAULT_REPO_URL);
        assert_eq!(config.release_date, None);
        assert!(!config.dry_run);
    }

    #[test]
    fn invalid_version_reported_before_missing_pr() {
        let err = Config::try_from(&args(Some("1.2.3"), None)).unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidVersion(v) if v == "1.2.3"));
    }

    #[test]
    fn padded_version_is_rejected() {
        let err =
            Config::try_from(&args(Some(" 1.2.3-4.5.6 "), Some("42")))
                .unwrap_err();
        assert!(
            matches!(err, ChangelogError::InvalidVersion(v) if v == " 1.2.3-4.5.6 ")
        );

        let err = Config::try_from(&args(Some("1.2.3-4.5.6"), Some(" 42")))
            .unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidPrNumber(_)));
    }

    #[test]
    fn missing_inputs_are_rejected() {
        for (version, pr) in [
            (None, Some("42")),
            (Some("1.2.3-4.5.6"), None),
            (Some(""), Some("42")),
            (None, None),
        ] {
            let err = Config::try_from(&args(version, pr)).unwrap_err();
            assert!(matches!(err, ChangelogError::MissingInput(_)));
        }
    }

    #[test]
    fn rejects_non_numeric_pr() {
        for pr in ["abc", "#42", "-1", "0"] {
            let err =
                Config::try_from(&args(Some("1.2.3-4.5.6"), Some(pr)))
                    .unwrap_err();
            assert!(matches!(err, ChangelogError::InvalidPrNumber(_)));
        }
    }

    #[test]
    fn applies_overrides() {
        let args = Args {
            new_version: Some("1.2.3-4.5.6".into()),
            pr_number: Some("42".into()),
            changelog_path: Some("docs/CHANGES.md".into()),
            repo_url: Some("https://example.com/org/repo/".into()),
            date: Some("2024-02-29".into()),
            dry_run: true,
            debug: false,
        };

        let config = Config::try_from(&args).unwrap();

        assert_eq!(
            config.changelog_path,
            Some(PathBuf::from("docs/CHANGES.md"))
        );
        assert_eq!(config.repo_url, "https://example.com/org/repo");
        assert_eq!(
            config.release_date,
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert!(config.dry_run);
    }

    #[test]
    fn only_supports_http_and_https_repo_urls() {
        let args = Args {
            repo_url: Some("git@github.com:org/repo".into()),
            ..args(Some("1.2.3-4.5.6"), Some("42"))
        };

        let err = Config::try_from(&args).unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidRepoUrl { .. }));
    }

    #[test]
    fn rejects_malformed_date() {
        let args = Args {
            date: Some("2024-13-01".into()),
            ..args(Some("1.2.3-4.5.6"), Some("42"))
        };

        let err = Config::try_from(&args).unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidDate(_)));
    }

    #[test]
    fn builder_fills_defaults() {
        let config = ConfigBuilder::default()
            .new_version("1.2.3-4.5.6")
            .pr_number(42u64)
            .build()
            .unwrap();

        assert_eq!(config.repo_url, DEFAULT_REPO_URL);
        assert_eq!(config.changelog_path, None);
        assert!(!config.dry_run);
    }
}
