use crate::error::FetchError;
use crate::fetchers::bounded::{BoundedText, ReadState};
use crate::parsers::extract_markdown_links;
use futures::future::join_all;
use std::time::Duration;
use tokio::time::timeout;

/// Per-link timeout used when none is configured
pub const DEFAULT_LINK_TIMEOUT_MS: u64 = 5000;

/// Per-link byte ceiling used when none is configured
pub const DEFAULT_MAX_LINK_BYTES: usize = 4 * 1024;

/// Fetches the resources a pull request body links to
#[derive(Debug, Clone)]
pub struct LinkFetcher {
    client: reqwest::Client,
    timeout: Duration,
    max_bytes: usize,
}

impl LinkFetcher {
    /// Create a fetcher with default limits on top of an existing HTTP client
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: Duration::from_millis(DEFAULT_LINK_TIMEOUT_MS),
            max_bytes: DEFAULT_MAX_LINK_BYTES,
        }
    }

    /// Set the timeout applied to each link independently
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = Duration::from_millis(timeout_ms);
        self
    }

    /// Set the maximum number of body bytes read from each link
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Fetch every markdown link in `body` concurrently and join the text.
    ///
    /// Contributions are joined with `\n` in the order the links appear in the
    /// body, not in completion order. A link that fails for any reason
    /// contributes an empty string. Returns immediately without touching the
    /// network when the body has no links.
    pub async fn fetch_readable_content(&self, body: &str) -> String {
        self.fetch_links(&extract_markdown_links(body)).await
    }

    /// Same as [`Self::fetch_readable_content`] for links that were already extracted
    pub async fn fetch_links(&self, links: &[String]) -> String {
        if links.is_empty() {
            return String::new();
        }

        ::log::info!("Fetching content from {} linked resources", links.len());

        let fetches = links.iter().map(|link| self.fetch_link(link));
        join_all(fetches).await.join("\n")
    }

    /// Fetch a single link, folding every failure into an empty string
    async fn fetch_link(&self, url: &str) -> String {
        match timeout(self.timeout, self.read_bounded(url)).await {
            Ok(Ok(text)) => {
                ::log::debug!("Read {} bytes from {}", text.len(), url);
                text
            }
            Ok(Err(e)) => {
                ::log::debug!("Ignoring linked content from {}: {}", url, e);
                String::new()
            }
            Err(_) => {
                ::log::debug!(
                    "Ignoring linked content from {}: timed out after {} ms",
                    url,
                    self.timeout.as_millis()
                );
                String::new()
            }
        }
    }

    /// GET the URL and read its body chunk by chunk up to the byte ceiling
    async fn read_bounded(&self, url: &str) -> Result<String, FetchError> {
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let mut reader = BoundedText::new(self.max_bytes);
        while let Some(chunk) = response.chunk().await? {
            if reader.feed(&chunk) == ReadState::Exhausted {
                ::log::debug!(
                    "Reached {} byte limit for {}, closing the stream",
                    self.max_bytes,
                    url
                );
                break;
            }
        }

        // Dropping the response closes the connection if the body is unread
        drop(response);
        Ok(reader.finish())
    }
}

/// Convenience wrapper that uses a fresh client and the default limits
pub async fn fetch_readable_content(body: &str) -> String {
    LinkFetcher::new(reqwest::Client::new())
        .fetch_readable_content(body)
        .await
}
