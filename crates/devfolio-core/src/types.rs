//! Strong domain types for the workbench.
//!
//! Identifiers travel through the tab set, the registry and the resolver as
//! plain strings in the chrome; these newtypes keep registry ids and project
//! ids from being mixed up once they are inside the core.
//!
//! # Examples
//!
//! ```
//! use devfolio_core::{FileId, ProjectId};
//!
//! let file = FileId::new("file-1");
//! let project = ProjectId::new("tetris");
//! assert_eq!(file.as_str(), "file-1");
//! assert_eq!(project.to_string(), "tetris");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a document in the virtual file registry.
///
/// # Examples
///
/// ```
/// use devfolio_core::FileId;
///
/// let id = FileId::from_sequence(3);
/// assert_eq!(id.as_str(), "file-3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(String);

impl FileId {
    /// Creates a file identifier from any string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates the identifier allocated for the `n`th registry file.
    #[must_use]
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("file-{n}"))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `FileId` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for FileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for FileId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of a project in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a project identifier.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier of the README leaf under this project in the explorer.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio_core::ProjectId;
    ///
    /// let id = ProjectId::new("chess");
    /// assert_eq!(id.readme_path(), "projects/chess/README.md");
    /// ```
    #[must_use]
    pub fn readme_path(&self) -> String {
        format!("projects/{}/README.md", self.0)
    }

    /// Identifier of the live-demo leaf under this project in the explorer.
    #[must_use]
    pub fn demo_path(&self, leaf: &str) -> String {
        format!("projects/{}/{leaf}", self.0)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_sequence() {
        assert_eq!(FileId::from_sequence(1).as_str(), "file-1");
        assert_eq!(FileId::from_sequence(42).to_string(), "file-42");
    }

    #[test]
    fn test_file_id_conversions() {
        let a = FileId::from("file-7");
        let b = FileId::new(String::from("file-7"));
        assert_eq!(a, b);
        assert_eq!(a.into_inner(), "file-7");
    }

    #[test]
    fn test_file_id_borrow_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(FileId::new("file-1"), 1);
        assert_eq!(map.get("file-1"), Some(&1));
    }

    #[test]
    fn test_project_paths() {
        let id = ProjectId::new("portfolio");
        assert_eq!(id.readme_path(), "projects/portfolio/README.md");
        assert_eq!(id.demo_path("Portfolio"), "projects/portfolio/Portfolio");
    }

    #[test]
    fn test_project_id_serde_transparent() {
        let id: ProjectId = serde_json::from_str("\"chess\"").unwrap();
        assert_eq!(id.as_str(), "chess");
    }
}
