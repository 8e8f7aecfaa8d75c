//! Reference scraping of the live article site.
//!
//! The checker never trusts the scraper under test; it re-derives the
//! expected articles itself, in two phases per page:
//!
//! 1. **Listing**: collect detail-page links of one article type
//! 2. **Detail**: read the title and teaser body of one of those links
//!
//! # Submodules
//!
//! - [`predicates`]: pure element tests over a parsed document
//! - [`nature`]: the [`nature::ReferenceExtractor`] built on them
//!
//! Network access goes through [`PageFetcher`] so the extractor can be run
//! against in-memory pages.

pub mod nature;
pub mod predicates;

use crate::config::CheckerConfig;
use crate::errors::CheckError;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

/// Source of raw HTML for a URL.
pub trait PageFetcher {
    /// Fetch the body of `url` as text.
    ///
    /// Any transport failure, including a non-success status, is a
    /// [`CheckError::Fetch`] carrying the URL.
    async fn fetch_text(&self, url: &Url) -> Result<String, CheckError>;
}

/// [`PageFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &CheckerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn fetch_text(&self, url: &Url) -> Result<String, CheckError> {
        let t0 = Instant::now();
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(%url, error = %e, "Request failed");
                CheckError::fetch(url, e)
            })?;
        let body = resp.text().await.map_err(|e| CheckError::fetch(url, e))?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// Serves fixed HTML per URL; anything else is a fetch failure.
    #[derive(Debug, Default)]
    pub struct StaticFetcher {
        pages: HashMap<String, String>,
    }

    impl StaticFetcher {
        pub fn with_page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    impl PageFetcher for StaticFetcher {
        async fn fetch_text(&self, url: &Url) -> Result<String, CheckError> {
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| CheckError::fetch(url, "connection refused"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        let config = CheckerConfig {
            timeout_secs: 5,
            ..CheckerConfig::default()
        };
        HttpFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_http_fetcher_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nature/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/nature/articles?page=1", server.uri())).unwrap();
        let body = fetcher().fetch_text(&url).await.unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_http_fetcher_server_error_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/articles/x", server.uri())).unwrap();
        let err = fetcher().fetch_text(&url).await.unwrap_err();
        match err {
            CheckError::Fetch { url: failed, .. } => assert_eq!(failed, url.to_string()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_fetcher_unreachable_host() {
        let url = Url::parse("http://127.0.0.1:1/articles").unwrap();
        let err = fetcher().fetch_text(&url).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
