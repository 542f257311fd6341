use regex::Regex;
use std::sync::LazyLock;

/// An `<img>` tag with a quoted http(s) `src`, other attributes in any position
static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]*src\s*=\s*["'](https?://[^\s'"]+)["'][^>]*>"#)
        .expect("img src pattern should be valid")
});

/// Extracts the `src` URL of every embedded `<img>` tag, in order of appearance
pub fn extract_embedded_image_urls(body: &str) -> Vec<String> {
    let urls = IMG_SRC
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect::<Vec<String>>();

    if !urls.is_empty() {
        ::log::debug!(
            "Found embedded images: {:?}",
            urls.iter().take(5).collect::<Vec<_>>()
        );
    }

    urls
}
