//! reqwest-backed [`TextFetcher`].

use async_trait::async_trait;
use devfolio_core::traits::TextFetcher;
use devfolio_core::{Error, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::debug;

/// Plain-text HTTP client.
///
/// # Examples
///
/// ```
/// use devfolio_content::HttpFetcher;
/// use std::time::Duration;
///
/// let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
/// # let _ = fetcher;
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .user_agent(concat!("devfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::ConfigError {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Underlying client.
    #[must_use]
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let fetch_failed = |e: reqwest::Error| Error::FetchFailed {
            url: url.to_string(),
            source: Box::new(e),
        };

        let response = self.client.get(url).send().await.map_err(fetch_failed)?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "non-success response");
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(fetch_failed)?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_client() {
        assert!(HttpFetcher::new(Duration::from_secs(1)).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_failure() {
        let fetcher = HttpFetcher::new(Duration::from_millis(500)).unwrap();
        // Port 9 on localhost (discard) is closed in test environments.
        let err = fetcher
            .fetch_text("http://127.0.0.1:9/README.md")
            .await
            .unwrap_err();
        assert!(err.is_fetch_error());
    }
}
