use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Status hint carried on [`FetchResult::NonHtml`]: the resource is
/// reachable but not something the extractor can parse.
pub const NON_HTML_STATUS_HINT: u16 = 206;

const HTML_CONTENT_TYPE: &str = "text/html";
const DEFAULT_TIMEOUT_SECS: u64 = 3;
const MAX_REDIRECTS: usize = 10;

/// Classification of one outbound fetch. Every way a request can go wrong
/// (bad URL, DNS, timeout, redirect overflow, non-200 status) collapses into
/// `Failed`; callers never see the underlying cause.
#[derive(Debug, Clone)]
pub enum FetchResult {
    Html(String),
    NonHtml { status_hint: u16, content_type: String },
    Failed,
}

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        debug!("Fetcher initialized with default configuration");
        Self::new_with_config(FetcherConfig::default())
    }

    pub fn new_with_config(config: FetcherConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to create HTTP client");
                panic!("Failed to initialize HTTP client: {}", e);
            });
        Fetcher { client }
    }

    /// Issues a single GET against `url` and classifies the response.
    /// One outbound call, no retries; the client timeout is the only bound.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        debug!(url = %url, "Starting fetch request");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, url = %url, "Request failed");
                return FetchResult::Failed;
            }
        };

        if response.status() != StatusCode::OK {
            warn!(status = %response.status(), url = %url, "Upstream returned non-200 status");
            return FetchResult::Failed;
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        // Substring match, not MIME parsing: upstream servers commonly append
        // parameters ("text/html; charset=utf-8") that must still match.
        if !content_type.contains(HTML_CONTENT_TYPE) {
            debug!(content_type = %content_type, url = %url, "Resource is not HTML");
            return FetchResult::NonHtml {
                status_hint: NON_HTML_STATUS_HINT,
                content_type,
            };
        }

        match response.text().await {
            Ok(body) => {
                debug!(url = %url, content_length = body.len(), "Successfully fetched webpage");
                FetchResult::Html(body)
            }
            Err(e) => {
                warn!(error = %e, url = %url, "Failed to read response body");
                FetchResult::Failed
            }
        }
    }
}

pub struct FetcherConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("link-scrap/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: MAX_REDIRECTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn quick_fetcher() -> Fetcher {
        Fetcher::new_with_config(FetcherConfig {
            timeout: Duration::from_millis(500),
            ..FetcherConfig::default()
        })
    }

    #[tokio::test]
    async fn html_response_returns_exact_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/page");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html><head><title>Hi</title></head></html>");
        });

        let result = quick_fetcher().fetch(&server.url("/page")).await;
        mock.assert();

        match result {
            FetchResult::Html(body) => {
                assert_eq!(body, "<html><head><title>Hi</title></head></html>")
            }
            other => panic!("expected Html, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn content_type_parameters_still_match() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("content-type", "text/html;charset=ISO-8859-1")
                .body("<html></html>");
        });

        let result = quick_fetcher().fetch(&server.url("/")).await;
        assert!(matches!(result, FetchResult::Html(_)));
    }

    #[tokio::test]
    async fn non_html_carries_hint_and_raw_content_type() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/doc.pdf");
            then.status(200)
                .header("content-type", "application/pdf")
                .body("%PDF-1.4");
        });

        let result = quick_fetcher().fetch(&server.url("/doc.pdf")).await;
        match result {
            FetchResult::NonHtml {
                status_hint,
                content_type,
            } => {
                assert_eq!(status_hint, NON_HTML_STATUS_HINT);
                assert_eq!(content_type, "application/pdf");
            }
            other => panic!("expected NonHtml, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_content_type_is_non_html() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/raw");
            then.status(200).body("bytes");
        });

        let result = quick_fetcher().fetch(&server.url("/raw")).await;
        match result {
            FetchResult::NonHtml { content_type, .. } => assert_eq!(content_type, ""),
            other => panic!("expected NonHtml, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_200_status_is_failed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404)
                .header("content-type", "text/html")
                .body("<html>not found</html>");
        });
        server.mock(|when, then| {
            when.method(GET).path("/boom");
            then.status(500);
        });

        assert!(matches!(
            quick_fetcher().fetch(&server.url("/missing")).await,
            FetchResult::Failed
        ));
        assert!(matches!(
            quick_fetcher().fetch(&server.url("/boom")).await,
            FetchResult::Failed
        ));
    }

    #[tokio::test]
    async fn connection_refused_is_failed() {
        // Port 1 is never listening in the test environment.
        let result = quick_fetcher().fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, FetchResult::Failed));
    }

    #[tokio::test]
    async fn malformed_url_is_failed() {
        let result = quick_fetcher().fetch("not a url at all").await;
        assert!(matches!(result, FetchResult::Failed));
    }

    #[tokio::test]
    async fn slow_origin_times_out_to_failed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .header("content-type", "text/html")
                .delay(Duration::from_secs(2))
                .body("<html></html>");
        });

        let result = quick_fetcher().fetch(&server.url("/slow")).await;
        assert!(matches!(result, FetchResult::Failed));
    }

    #[tokio::test]
    async fn redirect_loop_exhausts_cap_and_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/loop");
            then.status(302).header("location", server.url("/loop"));
        });

        let result = quick_fetcher().fetch(&server.url("/loop")).await;
        assert!(matches!(result, FetchResult::Failed));
    }

    #[tokio::test]
    async fn redirects_are_followed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/old");
            then.status(302).header("location", server.url("/new"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/new");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>moved</html>");
        });

        let result = quick_fetcher().fetch(&server.url("/old")).await;
        match result {
            FetchResult::Html(body) => assert_eq!(body, "<html>moved</html>"),
            other => panic!("expected Html, got {:?}", other),
        }
    }
}
