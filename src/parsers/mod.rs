pub mod html;
pub mod markdown;

#[cfg(test)]
mod tests;

pub use html::extract_embedded_image_urls;
pub use markdown::extract_markdown_links;

/// URLs found in a pull request body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Targets of markdown `[label](url)` links, in order of appearance
    pub links: Vec<String>,
    /// `src` values of embedded `<img>` tags, in order of appearance
    pub image_urls: Vec<String>,
}

impl ParseResult {
    /// Creates a new parse result from already extracted URLs
    pub fn new(links: Vec<String>, image_urls: Vec<String>) -> Self {
        Self { links, image_urls }
    }
}

/// Runs every extractor over a pull request body
pub struct Parser;

impl Parser {
    /// Extract links and embedded images from the body
    pub fn parse(body: &str) -> ParseResult {
        let result = ParseResult::new(
            extract_markdown_links(body),
            extract_embedded_image_urls(body),
        );

        ::log::debug!(
            "Pull request body has {} links and {} embedded images",
            result.links.len(),
            result.image_urls.len()
        );

        result
    }
}
