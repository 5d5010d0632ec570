//! Read-only project catalog.
//!
//! The catalog is loaded once from a JSON array of project records and never
//! mutated. Key names follow the camelCase of the data file:
//!
//! ```json
//! [
//!   {
//!     "id": "chess",
//!     "name": "chess",
//!     "displayName": "Chess Engine",
//!     "description": "Bitboard chess engine",
//!     "githubUrl": "https://github.com/alqavi/chess",
//!     "demoUrl": "chess.alqavi.dev"
//!   }
//! ]
//! ```

use crate::{Error, ProjectId, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier
    pub id: ProjectId,
    /// Short name shown in the explorer
    pub name: String,
    /// Heading used in synthesized README documents
    pub display_name: String,
    /// One-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Source repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Live demo URL, possibly without a scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

impl Project {
    /// Returns the repository URL if it is present and non-empty.
    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        self.github_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Returns the demo URL if it is present and non-empty.
    #[must_use]
    pub fn demo(&self) -> Option<&str> {
        self.demo_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Ordered, read-only list of projects.
///
/// # Examples
///
/// ```
/// use devfolio_core::ProjectCatalog;
///
/// let catalog = ProjectCatalog::from_json_str(
///     r#"[{"id": "chess", "name": "chess", "displayName": "Chess"}]"#,
/// )?;
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("chess").is_some());
/// # Ok::<(), devfolio_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Creates a catalog from records, keeping their order.
    #[must_use]
    pub const fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Parses a catalog from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` if the JSON is malformed or a
    /// record is missing a required field.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(json).map_err(|e| Error::SerializationError {
                message: format!("invalid project catalog: {e}"),
                source: Some(e),
            })?;
        Ok(Self::new(projects))
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, or
    /// `Error::SerializationError` if it does not parse.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&json)?;
        debug!(path = %path.display(), projects = catalog.len(), "loaded project catalog");
        Ok(catalog)
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id.as_str() == id)
    }

    /// Iterates projects in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
