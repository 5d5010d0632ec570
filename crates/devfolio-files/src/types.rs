//! Core types for the file registry.
//!
//! # Examples
//!
//! ```
//! use devfolio_files::FileKind;
//!
//! assert_eq!(FileKind::from_name("README.md"), FileKind::Markdown);
//! assert_eq!(FileKind::from_name("main.rs"), FileKind::File);
//! ```

use chrono::{DateTime, Utc};
use devfolio_core::FileId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during registry uploads and exports.
///
/// Registry lookups never fail; absence is reported through `Option` and
/// `bool` returns instead.
#[derive(Error, Debug)]
pub enum FilesError {
    /// Export name is empty or would escape the export directory
    #[error("Invalid file name: {name}")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// Upload has an extension outside the accepted list
    #[error("Unsupported upload type: {}", path.display())]
    UnsupportedUpload {
        /// The rejected file
        path: PathBuf,
    },

    /// Reading or writing a file on disk failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl FilesError {
    /// Returns `true` if this is an invalid name error.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio_files::FilesError;
    ///
    /// let error = FilesError::InvalidName {
    ///     name: "../escape.md".to_string(),
    /// };
    /// assert!(error.is_invalid_name());
    /// ```
    #[must_use]
    pub const fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidName { .. })
    }

    /// Returns `true` if this is an unsupported upload error.
    #[must_use]
    pub const fn is_unsupported_upload(&self) -> bool {
        matches!(self, Self::UnsupportedUpload { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Document kind, derived from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Plain text
    File,
    /// Markdown, rendered in view mode
    Markdown,
}

impl FileKind {
    /// Derives the kind from a display name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".md") {
            Self::Markdown
        } else {
            Self::File
        }
    }
}

/// One user-authored in-memory document.
///
/// The registry owns the canonical record; callers work with clones and
/// re-read after any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualFile {
    /// Unique, never reused identifier
    pub id: FileId,
    /// Display name
    pub name: String,
    /// Full text body
    pub content: String,
    /// Kind derived from `name`
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last content or name change
    pub modified_at: DateTime<Utc>,
}

impl VirtualFile {
    pub(crate) fn new(id: FileId, name: String, content: String, now: DateTime<Utc>) -> Self {
        let kind = FileKind::from_name(&name);
        Self {
            id,
            name,
            content,
            kind,
            created_at: now,
            modified_at: now,
        }
    }

    /// Moves `modified_at` forward; never backwards if the clock steps back.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.modified_at = self.modified_at.max(now);
    }

    /// Size of the content in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Type alias for registry results.
pub type Result<T> = std::result::Result<T, FilesError>;
