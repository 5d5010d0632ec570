//! Error types for the devfolio workbench.
//!
//! # Examples
//!
//! ```
//! use devfolio_core::{Error, Result};
//!
//! fn require_branch(branches: &[String]) -> Result<()> {
//!     if branches.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "at least one README branch is required".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_branch(&[]).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the workbench libraries.
///
/// Content resolution never surfaces these to the user; they are absorbed
/// into placeholder documents at the resolver boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// A network request could not be completed.
    #[error("Request to {url} failed")]
    FetchFailed {
        /// URL that was requested
        url: String,
        /// Underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A network request completed with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus {
        /// URL that was requested
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Resource not found error.
    #[error("Resource not found: {resource}")]
    ResourceNotFound {
        /// Identifier of the missing resource
        resource: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Filesystem read failed.
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a transport-level fetch failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio_core::Error;
    ///
    /// let err = Error::FetchFailed {
    ///     url: "https://example.com".to_string(),
    ///     source: "connection refused".into(),
    /// };
    /// assert!(err.is_fetch_error());
    /// ```
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }

    /// Returns `true` if the server answered with a non-success status.
    #[must_use]
    pub const fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }

    /// Returns `true` if this is a resource not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "timeout must be positive".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }
}

/// Result type alias for workbench operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_detection() {
        let err = Error::FetchFailed {
            url: "https://raw.githubusercontent.com/a/b/main/README.md".to_string(),
            source: "dns error".into(),
        };
        assert!(err.is_fetch_error());
        assert!(!err.is_http_status());
    }

    #[test]
    fn test_http_status_display() {
        let err = Error::HttpStatus {
            url: "https://example.com/api/contact".to_string(),
            status: 404,
        };
        assert!(err.is_http_status());
        let display = err.to_string();
        assert!(display.contains("404"));
        assert!(display.contains("/api/contact"));
    }

    #[test]
    fn test_not_found_error_detection() {
        let err = Error::ResourceNotFound {
            resource: "project:missing".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_io_error_display() {
        let err = Error::Io {
            path: PathBuf::from("data/alqavi.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_io_error());
        assert!(err.to_string().contains("data/alqavi.md"));
    }
}
