use crate::fetcher::FetchResult;
use crate::{Fetcher, MetadataExtractor, PreviewGenerator, ScrapOutcome};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Composes the fetcher and extractor into the scrap pipeline behind the
/// [`PreviewGenerator`] seam: fetch, branch on classification, extract.
#[derive(Clone, Default)]
pub struct ScrapGenerator {
    fetcher: Fetcher,
    extractor: MetadataExtractor,
}

impl ScrapGenerator {
    pub fn new() -> Self {
        Self::new_with_fetcher(Fetcher::new())
    }

    pub fn new_with_fetcher(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            extractor: MetadataExtractor::new(),
        }
    }
}

#[async_trait]
impl PreviewGenerator for ScrapGenerator {
    async fn generate_preview(&self, url: &str) -> ScrapOutcome {
        if Url::parse(url).is_err() {
            debug!(url = %url, "Rejecting malformed URL");
            return ScrapOutcome::Failed;
        }

        match self.fetcher.fetch(url).await {
            FetchResult::Html(html) => {
                ScrapOutcome::Parsed(self.extractor.extract_valid(&html, url))
            }
            FetchResult::NonHtml {
                status_hint,
                content_type,
            } => ScrapOutcome::Unsupported {
                status_hint,
                preview: self.extractor.extract_invalid(url, &content_type),
            },
            FetchResult::Failed => ScrapOutcome::Failed,
        }
    }
}
