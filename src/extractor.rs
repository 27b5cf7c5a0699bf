use crate::Preview;
use scraper::{Html, Selector};
use tracing::debug;

const DEFAULT_TITLE: &str = "Untitled";
const SENTINEL_TITLE: &str = "Untitled - EDIT ME";

/// Content types that may self-reference as their own thumbnail.
const SELF_THUMBNAIL_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Metadata extractor, responsible for pulling preview information out of
/// fetched content. Stateless; both entry points are pure functions of
/// their inputs.
#[derive(Clone, Default)]
pub struct MetadataExtractor;

impl MetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract a preview from an HTML page, falling back through known
    /// metadata locations. Used when the fetch produced usable HTML.
    pub fn extract_valid(&self, html: &str, url: &str) -> Preview {
        let document = Html::parse_document(html);

        let preview = Preview {
            title: self.extract_title(&document),
            description: self.meta_content(
                &document,
                "meta[property='og:description']",
                Some("meta[name='description']"),
            ),
            url: url.to_string(),
            thumbnail: self.meta_content(&document, "meta[property='og:image']", None),
        };

        debug!(url = %url, title = %preview.title, "Extracted metadata from HTML");
        preview
    }

    /// Build the sentinel preview for a reachable but non-HTML resource.
    /// Image resources get themselves as the thumbnail; everything else
    /// gets an empty one.
    pub fn extract_invalid(&self, url: &str, content_type: &str) -> Preview {
        let thumbnail = if SELF_THUMBNAIL_TYPES
            .iter()
            .any(|t| content_type.contains(t))
        {
            url.to_string()
        } else {
            String::new()
        };

        Preview {
            title: SENTINEL_TITLE.to_string(),
            description: String::new(),
            url: url.to_string(),
            thumbnail,
        }
    }

    fn extract_title(&self, document: &Html) -> String {
        let Ok(selector) = Selector::parse("title") else {
            return DEFAULT_TITLE.to_string();
        };

        document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    /// Content attribute of the first element matching `primary`; when that
    /// yields nothing non-empty, the first match of `secondary` (if any);
    /// otherwise an empty string.
    fn meta_content(&self, document: &Html, primary: &str, secondary: Option<&str>) -> String {
        self.first_content(document, primary)
            .or_else(|| secondary.and_then(|s| self.first_content(document, s)))
            .unwrap_or_default()
    }

    fn first_content(&self, document: &Html, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
