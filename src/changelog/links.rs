//! Rewriting the link table for a new release.
use regex::Regex;
use std::sync::LazyLock;

static UNRELEASED_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[Unreleased\]:.*$").unwrap());

/// Point `[Unreleased]` at the new version and add a compare link for the
/// new version right below it.
///
/// Only the first `[Unreleased]:` line is touched. A table without one is
/// returned unchanged.
pub fn update_links(
    links: &str,
    new_version: &str,
    prev_version: &str,
    repo_url: &str,
) -> String {
    let Some(unreleased) = UNRELEASED_LINK_REGEX.find(links) else {
        return links.to_string();
    };

    format!(
        "{}[Unreleased]: {repo_url}/{new_version}...main\n[{new_version}]: {repo_url}/compare/{prev_version}...{new_version}{}",
        &links[..unreleased.start()],
        &links[unreleased.end()..],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPO_URL: &str = "https://github.com/org/repo";

    #[test]
    fn rewrites_unreleased_and_adds_compare_link() {
        let links = format!(
            "[Unreleased]: {REPO_URL}/1.0.0-1.0.0...main\n[1.0.0-1.0.0]: {REPO_URL}/compare/0.9.0-0.9.0...1.0.0-1.0.0\n"
        );

        let updated = update_links(&links, "1.1.0-1.1.0", "1.0.0-1.0.0", REPO_URL);

        assert_eq!(
            updated,
            format!(
                "[Unreleased]: {REPO_URL}/1.1.0-1.1.0...main\n[1.1.0-1.1.0]: {REPO_URL}/compare/1.0.0-1.0.0...1.1.0-1.1.0\n[1.0.0-1.0.0]: {REPO_URL}/compare/0.9.0-0.9.0...1.0.0-1.0.0\n"
            )
        );
    }

    #[test]
    fn handles_unreleased_as_last_line_without_newline() {
        let links = format!("[Unreleased]: {REPO_URL}/1.0.0-1.0.0...main");

        let updated = update_links(&links, "1.1.0-1.1.0", "1.0.0-1.0.0", REPO_URL);

        assert_eq!(
            updated,
            format!(
                "[Unreleased]: {REPO_URL}/1.1.0-1.1.0...main\n[1.1.0-1.1.0]: {REPO_URL}/compare/1.0.0-1.0.0...1.1.0-1.1.0"
            )
        );
    }

    #[test]
    fn only_first_unreleased_line_is_rewritten() {
        let links = "[Unreleased]: a\n[Unreleased]: b\n";

        let updated = update_links(links, "2.0.0-2.0.0", "1.0.0-1.0.0", REPO_URL);

        assert_eq!(updated.matches("[Unreleased]: b").count(), 1);
        assert!(updated.starts_with(&format!(
            "[Unreleased]: {REPO_URL}/2.0.0-2.0.0...main\n[2.0.0-2.0.0]: "
        )));
    }

    #[test]
    fn missing_unreleased_line_is_a_no_op() {
        let links = "[1.0.0-1.0.0]: https://example.com\n";
        assert_eq!(
            update_links(links, "2.0.0-2.0.0", "1.0.0-1.0.0", REPO_URL),
            links
        );
    }
}
