//! Composite release versions of the form
//! `<semver>-<nearcore-version>[-<prerelease>.<n>]`.
use regex::Regex;
use std::sync::LazyLock;

/// Matches `1.2.3-4.5.6` and `1.2.3-4.5.6-rc.1`
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9.]+-[0-9.]+(-[a-z]+\.[0-9]+)?$").unwrap()
});

/// Returns true when `version` has the composite release shape. Empty or
/// absent input is invalid.
pub fn validate(version: Option<&str>) -> bool {
    match version {
        Some(v) if !v.is_empty() => VERSION_REGEX.is_match(v),
        _ => false,
    }
}

/// The nearcore version embedded in a composite release version.
///
/// Everything after the first `-` is kept, so a prerelease suffix stays
/// attached (`1.2.3-4.5.6-rc.1` -> `4.5.6-rc.1`). A string without a hyphen is
/// returned unchanged.
pub fn dependency_version(version: &str) -> &str {
    match version.split_once('-') {
        Some((_, rest)) => rest,
        None => version,
    }
}
