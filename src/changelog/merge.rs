//! Splicing a new entry into the Unreleased body.
use regex::Regex;
use std::sync::LazyLock;

/// Heading of any level whose text is "Changes"
static CHANGES_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+[ \t]+Changes[ \t]*$").unwrap());

/// A `[#<n>]: <repo-url>/pull/<n>` reference line
static PR_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\[#[0-9]+\]: (?<repo>\S+)/pull/[0-9]+[ \t]*$").unwrap()
});

const CHANGES_HEADING: &str = "### Changes";

/// Put `bullet` at the top of the body's Changes section, creating a
/// `### Changes` heading when the body has none.
pub fn merge_entry(body: &str, bullet: &str) -> String {
    if body.is_empty() {
        return format!("{CHANGES_HEADING}\n\n{bullet}");
    }

    match CHANGES_HEADING_REGEX.find(body) {
        Some(heading) => {
            let (head, rest) = body.split_at(heading.end());
            format!("{head}\n\n{bullet}\n{}", rest.trim_start())
        }
        None => format!("{CHANGES_HEADING}\n\n{bullet}\n\n{body}"),
    }
}

/// Add `link` to the body's PR reference block.
///
/// The link goes on the line right after the last reference to this
/// repository's pull requests. With no such reference it is appended after a
/// blank line.
pub fn append_pr_link(content: &str, link: &str, repo_url: &str) -> String {
    let last = PR_LINK_REGEX
        .captures_iter(content)
        .filter(|caps| caps.name("repo").is_some_and(|r| r.as_str() == repo_url))
        .filter_map(|caps| caps.get(0))
        .last();

    match last {
        Some(existing) => {
            let (head, rest) = content.split_at(existing.end());
            format!("{head}\n{link}{rest}")
        }
        None => format!("{content}\n\n{link}"),
    }
}
