//! Server-side storage for the fixed documents.
//!
//! [`DocumentStore::handle`] implements the content endpoint contract:
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | read ok | 200 | `{ "content": "<markdown>" }` |
//! | read failed | 500 | `{ "error": "Failed to load <file>" }` |
//!
//! Mounting the handler on `GET /api/alqavi` and `GET /api/contact` is left
//! to whatever HTTP server hosts the site.

use devfolio_core::{Error, FixedDocument, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// JSON body of a content endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentBody {
    /// Successful read
    Content {
        /// Markdown body
        content: String,
    },
    /// Failed read
    Error {
        /// Failure message
        error: String,
    },
}

/// A content endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: DocumentBody,
}

impl DocumentResponse {
    /// Returns `true` for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Serializes the body as the endpoint would send it.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` if JSON encoding fails.
    pub fn body_json(&self) -> Result<String> {
        serde_json::to_string(&self.body).map_err(|e| Error::SerializationError {
            message: format!("failed to encode response body: {e}"),
            source: Some(e),
        })
    }

    /// Extracts the markdown body, turning an error response into an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResourceNotFound` carrying the endpoint's error
    /// message when the response is not a successful read.
    pub fn into_content(self) -> Result<String> {
        match self.body {
            DocumentBody::Content { content } if self.is_success() => Ok(content),
            DocumentBody::Content { .. } => Err(Error::ResourceNotFound {
                resource: format!("document (HTTP {})", self.status),
            }),
            DocumentBody::Error { error } => Err(Error::ResourceNotFound { resource: error }),
        }
    }
}

/// Reads fixed documents from a data directory.
///
/// # Examples
///
/// ```
/// use devfolio_content::DocumentStore;
/// use devfolio_core::FixedDocument;
/// # use tempfile::TempDir;
///
/// # tokio_test_block(async {
/// # let temp_dir = TempDir::new().unwrap();
/// # std::fs::write(temp_dir.path().join("contact.md"), "# Contact").unwrap();
/// let store = DocumentStore::new(temp_dir.path());
/// let response = store.handle(FixedDocument::Contact).await;
///
/// assert_eq!(response.status, 200);
/// assert_eq!(response.body_json().unwrap(), r##"{"content":"# Contact"}"##);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DocumentStore {
    data_dir: PathBuf,
}

impl DocumentStore {
    /// Creates a store rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the documents.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// On-disk path of `doc`.
    #[must_use]
    pub fn path_of(&self, doc: FixedDocument) -> PathBuf {
        self.data_dir.join(doc.file_name())
    }

    /// Reads the markdown body of `doc`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read.
    pub async fn read(&self, doc: FixedDocument) -> Result<String> {
        let path = self.path_of(doc);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::Io { path, source })
    }

    /// Serves the content endpoint for `doc`.
    pub async fn handle(&self, doc: FixedDocument) -> DocumentResponse {
        match self.read(doc).await {
            Ok(content) => {
                debug!(document = %doc, bytes = content.len(), "served document");
                DocumentResponse {
                    status: 200,
                    body: DocumentBody::Content { content },
                }
            }
            Err(e) => {
                warn!(document = %doc, error = %e, "failed to read document");
                DocumentResponse {
                    status: 500,
                    body: DocumentBody::Error {
                        error: format!("Failed to load {}", doc.file_name()),
                    },
                }
            }
        }
    }
}
