use regex::Regex;
use std::sync::LazyLock;

/// `[label](url)` where the url is http(s) and has no whitespace, quotes or angle brackets
static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[.*?\]\((https?://[^\s'"<>]+)\)"#)
        .expect("markdown link pattern should be valid")
});

/// Extracts the URLs of markdown links in left-to-right order.
///
/// Duplicates are kept. Malformed constructs (unmatched brackets, a parenthesised
/// part that is not an http(s) URL) simply don't match.
pub fn extract_markdown_links(body: &str) -> Vec<String> {
    MARKDOWN_LINK
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
