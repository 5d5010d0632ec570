//! [`DocumentSource`] implementations.

use crate::store::{DocumentBody, DocumentStore};
use async_trait::async_trait;
use devfolio_core::traits::DocumentSource;
use devfolio_core::{Error, FixedDocument, Result};
use reqwest::header::{ACCEPT, HeaderValue};
use std::time::Duration;
use tracing::debug;

/// Reads fixed documents straight from a [`DocumentStore`].
///
/// Behaves like calling the content endpoint in-process: a failed read
/// surfaces as the endpoint's error message.
#[derive(Debug, Clone)]
pub struct LocalDocuments {
    store: DocumentStore,
}

impl LocalDocuments {
    /// Wraps `store`.
    #[must_use]
    pub const fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// The wrapped store.
    #[must_use]
    pub const fn store(&self) -> &DocumentStore {
        &self.store
    }
}

#[async_trait]
impl DocumentSource for LocalDocuments {
    async fn fetch_document(&self, doc: FixedDocument) -> Result<String> {
        self.store.handle(doc).await.into_content()
    }
}

/// Fetches fixed documents from a deployed content endpoint.
///
/// Requests `GET <base_url>/api/<slug>` with `Accept: application/json`
/// and decodes the JSON body.
#[derive(Debug, Clone)]
pub struct HttpDocuments {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocuments {
    /// Creates a source against `base_url` (e.g. `https://alqavi.dev`).
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Creates a source with its own client and request timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the HTTP client cannot be built.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("devfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::ConfigError {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self::new(client, base_url))
    }

    /// Full URL of the endpoint serving `doc`.
    #[must_use]
    pub fn endpoint_url(&self, doc: FixedDocument) -> String {
        format!("{}{}", self.base_url, doc.endpoint())
    }

    fn request(&self, doc: FixedDocument) -> reqwest::RequestBuilder {
        self.client
            .get(self.endpoint_url(doc))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
    }
}

#[async_trait]
impl DocumentSource for HttpDocuments {
    async fn fetch_document(&self, doc: FixedDocument) -> Result<String> {
        let url = self.endpoint_url(doc);
        let response = self
            .request(doc)
            .send()
            .await
            .map_err(|e| Error::FetchFailed {
                url: url.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body: DocumentBody = response.json().await.map_err(|e| Error::FetchFailed {
            url: url.clone(),
            source: Box::new(e),
        })?;
        debug!(%url, "fetched document from endpoint");

        match body {
            DocumentBody::Content { content } => Ok(content),
            DocumentBody::Error { error } => Err(Error::ResourceNotFound { resource: error }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_documents_success() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("contact.md"), "# Contact me").unwrap();
        let source = LocalDocuments::new(DocumentStore::new(temp.path()));
        assert_eq!(
            source.fetch_document(FixedDocument::Contact).await.unwrap(),
            "# Contact me"
        );
    }

    #[tokio::test]
    async fn test_local_documents_failure_carries_endpoint_message() {
        let temp = TempDir::new().unwrap();
        let source = LocalDocuments::new(DocumentStore::new(temp.path()));
        let err = source
            .fetch_document(FixedDocument::About)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Failed to load alqavi.md"));
    }

    #[test]
    fn test_requests_json_over_text_client() {
        let text_client = crate::HttpFetcher::new(Duration::from_secs(1))
            .unwrap()
            .client()
            .clone();
        let source = HttpDocuments::new(text_client, "https://alqavi.dev");
        let request = source.request(FixedDocument::Contact).build().unwrap();
        assert_eq!(request.url().as_str(), "https://alqavi.dev/api/contact");
        assert_eq!(request.headers()[ACCEPT], "application/json");
    }

    #[test]
    fn test_with_timeout_builds_client() {
        let source =
            HttpDocuments::with_timeout("https://alqavi.dev", Duration::from_secs(3)).unwrap();
        assert_eq!(
            source.endpoint_url(FixedDocument::About),
            "https://alqavi.dev/api/alqavi"
        );
    }

    #[test]
    fn test_endpoint_url_strips_trailing_slash() {
        let source = HttpDocuments::new(reqwest::Client::new(), "https://alqavi.dev/");
        assert_eq!(
            source.endpoint_url(FixedDocument::About),
            "https://alqavi.dev/api/alqavi"
        );
        assert_eq!(
            source.endpoint_url(FixedDocument::Contact),
            "https://alqavi.dev/api/contact"
        );
    }
}
