use async_trait::async_trait;

mod config;
mod error;
mod extractor;
mod fetcher;
mod generator;
mod logging;
pub mod routes;

pub use config::Config;
pub use error::ScrapError;
pub use extractor::MetadataExtractor;
pub use fetcher::{FetchResult, Fetcher, FetcherConfig, NON_HTML_STATUS_HINT};
pub use generator::ScrapGenerator;
pub use logging::{setup_logging, LogConfig};

/// Normalized link-preview record. Every field is always present; absent
/// values are empty strings, except `title` which defaults to "Untitled".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Preview {
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
}

/// Final outcome of one scrap request. Failure is a value, not an error, so
/// the HTTP layer maps outcomes onto statuses without any error handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapOutcome {
    /// The page was HTML and metadata was extracted from it.
    Parsed(Preview),
    /// The resource is reachable but not HTML; the preview carries a
    /// sentinel title so downstream consumers know to edit it by hand.
    Unsupported { status_hint: u16, preview: Preview },
    /// The URL could not be usably fetched at all.
    Failed,
}

#[async_trait]
pub trait PreviewGenerator {
    async fn generate_preview(&self, url: &str) -> ScrapOutcome;
}
