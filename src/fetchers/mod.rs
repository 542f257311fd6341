pub mod bounded;
pub mod links;


pub use bounded::{BoundedText, ReadState};
pub use links::{
    DEFAULT_LINK_TIMEOUT_MS, DEFAULT_MAX_LINK_BYTES, LinkFetcher, fetch_readable_content,
};
