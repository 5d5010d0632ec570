//! Classification of logical file identifiers.
//!
//! Identifiers are plain strings at the chrome boundary. [`FileRef::parse`]
//! is the single place that inspects their shape; everything downstream
//! matches on the variant.

use devfolio_core::{FileId, FixedDocument, ProjectCatalog, ProjectId};
use devfolio_files::FileRegistry;
use std::fmt;

const PROJECTS_PREFIX: &str = "projects/";
const README_LEAF: &str = "README.md";

/// The content source an identifier resolves to.
///
/// # Examples
///
/// ```
/// use devfolio_content::FileRef;
/// use devfolio_core::{FixedDocument, ProjectCatalog};
/// use devfolio_files::FileRegistry;
///
/// let registry = FileRegistry::new();
/// let catalog = ProjectCatalog::default();
///
/// assert_eq!(
///     FileRef::parse("contact.md", &registry, &catalog),
///     FileRef::Fixed(FixedDocument::Contact),
/// );
/// assert!(matches!(
///     FileRef::parse("projects/ghost/README.md", &registry, &catalog),
///     FileRef::Unknown(_),
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileRef {
    /// One of the two server-side documents
    Fixed(FixedDocument),
    /// A document in the virtual file registry
    Registry(FileId),
    /// README of a project with a source repository
    ProjectReadme(ProjectId),
    /// Live demo of a project, shown in an embedded frame
    ProjectDemo(ProjectId),
    /// Anything else; keeps the original identifier
    Unknown(String),
}

impl FileRef {
    /// Classifies `id`. The first matching rule wins:
    ///
    /// 1. the about document name
    /// 2. the contact document name
    /// 3. an id present in the registry
    /// 4. `projects/<id>/README.md` for a project with a repository URL
    /// 5. `projects/<id>/<leaf>` for a project with a demo URL
    /// 6. unknown
    #[must_use]
    pub fn parse(id: &str, registry: &FileRegistry, catalog: &ProjectCatalog) -> Self {
        if let Some(doc) = FixedDocument::from_file_name(id) {
            return Self::Fixed(doc);
        }

        if registry.contains(id) {
            return Self::Registry(FileId::new(id));
        }

        if let Some((project_id, leaf)) = split_project_path(id)
            && let Some(project) = catalog.get(project_id)
        {
            if leaf == README_LEAF {
                if project.repository().is_some() {
                    return Self::ProjectReadme(project.id.clone());
                }
            } else if project.demo().is_some() {
                return Self::ProjectDemo(project.id.clone());
            }
        }

        Self::Unknown(id.to_string())
    }

    /// Only fixed documents and registry files can enter edit mode.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Fixed(_) | Self::Registry(_))
    }

    /// Returns `true` for a demo frame target.
    #[must_use]
    pub const fn is_frame(&self) -> bool {
        matches!(self, Self::ProjectDemo(_))
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(doc) => write!(f, "fixed:{doc}"),
            Self::Registry(id) => write!(f, "registry:{id}"),
            Self::ProjectReadme(id) => write!(f, "readme:{id}"),
            Self::ProjectDemo(id) => write!(f, "demo:{id}"),
            Self::Unknown(id) => write!(f, "unknown:{id}"),
        }
    }
}

/// Splits `projects/<id>/<leaf>` into `(id, leaf)`; exactly three segments.
fn split_project_path(id: &str) -> Option<(&str, &str)> {
    let rest = id.strip_prefix(PROJECTS_PREFIX)?;
    let (project, leaf) = rest.split_once('/')?;
    if project.is_empty() || leaf.is_empty() || leaf.contains('/') {
        return None;
    }
    Some((project, leaf))
}

/// Tab label for an identifier.
///
/// Fixed documents use their file name, registry files their current name,
/// three-segment project paths their leaf, and anything else the raw id.
#[must_use]
pub fn display_name(id: &str, registry: &FileRegistry) -> String {
    if let Some(doc) = FixedDocument::from_file_name(id) {
        return doc.file_name().to_string();
    }
    if let Some(file) = registry.get_file(id) {
        return file.name.clone();
    }
    if id.starts_with(PROJECTS_PREFIX) {
        let parts: Vec<&str> = id.split('/').collect();
        if let [_, _, leaf] = parts.as_slice() {
            return (*leaf).to_string();
        }
    }
    id.to_string()
}
