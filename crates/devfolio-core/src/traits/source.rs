//! Content source traits.

use crate::{FixedDocument, Result};
use async_trait::async_trait;
use std::fmt::Debug;

/// Supplies the body of a fixed document.
///
/// Implementations either read server-side storage directly or call the
/// deployed content endpoint.
///
/// # Type Safety
///
/// All implementations must be `Send + Sync` to work with Tokio's runtime.
#[async_trait]
pub trait DocumentSource: Send + Sync + Debug {
    /// Fetches the markdown body of `doc`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded. Callers in the
    /// resolver absorb the error into a placeholder document.
    async fn fetch_document(&self, doc: FixedDocument) -> Result<String>;
}

/// Performs a plain-text HTTP GET.
#[async_trait]
pub trait TextFetcher: Send + Sync + Debug {
    /// Fetches `url` and returns its body.
    ///
    /// # Errors
    ///
    /// Returns `Error::HttpStatus` for a non-2xx response and
    /// `Error::FetchFailed` when no response was received.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
