//! Explorer sidebar tree.
//!
//! The tree is rebuilt from the registry and catalog whenever it is shown;
//! only folder expansion is stored.

use devfolio_core::{FixedDocument, ProjectCatalog};
use devfolio_files::FileRegistry;
use serde::Serialize;
use std::collections::BTreeSet;

/// Key of the workspace root folder.
pub const ROOT_FOLDER: &str = "root";
/// Key of the folder holding registry files.
pub const FILES_FOLDER: &str = "files";
/// Key of the folder holding projects.
pub const PROJECTS_FOLDER: &str = "projects";

/// One explorer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    /// A folder; children are omitted when collapsed
    Folder {
        /// Expansion key
        key: String,
        /// Folder label
        label: String,
        /// Whether the children are visible
        expanded: bool,
        /// Visible children
        children: Vec<TreeNode>,
    },
    /// An openable identifier
    File {
        /// Identifier passed to `Open`
        id: String,
        /// Label
        label: String,
    },
}

impl TreeNode {
    fn file(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::File {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Depth-first list of visible entries with their depth.
    #[must_use]
    pub fn flatten(&self) -> Vec<(usize, &Self)> {
        let mut out = Vec::new();
        self.collect(0, &mut out);
        out
    }

    /// Entry label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Folder { label, .. } | Self::File { label, .. } => label,
        }
    }

    fn collect<'a>(&'a self, depth: usize, out: &mut Vec<(usize, &'a Self)>) {
        out.push((depth, self));
        if let Self::Folder { children, .. } = self {
            for child in children {
                child.collect(depth + 1, out);
            }
        }
    }
}

/// Folder expansion state of the explorer.
///
/// # Examples
///
/// ```
/// use devfolio_core::ProjectCatalog;
/// use devfolio_files::FileRegistry;
/// use devfolio_workbench::ExplorerTree;
///
/// let tree = ExplorerTree::default();
/// let root = tree.build("portfolio", &FileRegistry::new(), &ProjectCatalog::default());
///
/// let labels: Vec<_> = root.flatten().iter().map(|(_, n)| n.label()).collect();
/// assert_eq!(labels, ["portfolio", "alqavi.md", "contact.md", "projects"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerTree {
    expanded: BTreeSet<String>,
}

impl Default for ExplorerTree {
    fn default() -> Self {
        Self {
            expanded: [ROOT_FOLDER, PROJECTS_FOLDER, FILES_FOLDER]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl ExplorerTree {
    /// Returns `true` if the folder `key` is expanded.
    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flips folder `key`. Returns the new expansion state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    /// Expands folder `key`.
    pub fn expand(&mut self, key: &str) {
        self.expanded.insert(key.to_string());
    }

    /// Builds the visible tree under a root folder labelled `root_label`.
    ///
    /// Project folders list `README.md` when the project has a repository
    /// and a leaf named after the project when it has a demo.
    #[must_use]
    pub fn build(
        &self,
        root_label: &str,
        registry: &FileRegistry,
        catalog: &ProjectCatalog,
    ) -> TreeNode {
        let mut children: Vec<TreeNode> = FixedDocument::ALL
            .iter()
            .map(|doc| TreeNode::file(doc.file_name(), doc.file_name()))
            .collect();

        if !registry.is_empty() {
            let files = registry
                .list_files()
                .into_iter()
                .map(|file| TreeNode::file(file.id.as_str(), file.name.as_str()))
                .collect();
            children.push(self.folder(FILES_FOLDER, FILES_FOLDER, files));
        }

        let projects = catalog
            .iter()
            .map(|project| {
                let mut leaves = Vec::new();
                if project.repository().is_some() {
                    leaves.push(TreeNode::file(project.id.readme_path(), "README.md"));
                }
                if project.demo().is_some() {
                    leaves.push(TreeNode::file(
                        project.id.demo_path(&project.name),
                        project.name.as_str(),
                    ));
                }
                let key = format!("{PROJECTS_FOLDER}/{}", project.id);
                self.folder(&key, &project.name, leaves)
            })
            .collect();
        children.push(self.folder(PROJECTS_FOLDER, PROJECTS_FOLDER, projects));

        self.folder(ROOT_FOLDER, root_label, children)
    }

    fn folder(&self, key: &str, label: &str, children: Vec<TreeNode>) -> TreeNode {
        let expanded = self.is_expanded(key);
        TreeNode::Folder {
            key: key.to_string(),
            label: label.to_string(),
            expanded,
            children: if expanded { children } else { Vec::new() },
        }
    }
}
