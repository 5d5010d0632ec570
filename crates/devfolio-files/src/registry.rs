//! Virtual file registry.
//!
//! Documents are stored in a `HashMap` keyed by id, with a separate
//! insertion-order list so listings match the order files were created.
//!
//! # Examples
//!
//! ```
//! use devfolio_files::FileRegistry;
//!
//! let mut registry = FileRegistry::new();
//! let a = registry.create_file("a.txt", "");
//! let b = registry.create_file("b.md", "");
//!
//! let names: Vec<_> = registry.list_files().iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["a.txt", "b.md"]);
//! assert_ne!(a.id, b.id);
//! ```

use crate::types::{FileKind, VirtualFile};
use chrono::Utc;
use devfolio_core::FileId;
use std::collections::HashMap;
use tracing::debug;

/// In-memory registry of user-authored documents.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; mutation requires `&mut self`, so sharing
/// across tasks needs an outer lock.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    files: HashMap<FileId, VirtualFile>,
    order: Vec<FileId>,
    counter: u64,
}

impl FileRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document and returns a copy of the stored record.
    ///
    /// Ids are allocated from a counter that is never decremented, so an id
    /// freed by `delete_file` is never handed out again.
    pub fn create_file(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> VirtualFile {
        self.counter += 1;
        let id = FileId::from_sequence(self.counter);
        let file = VirtualFile::new(id.clone(), name.into(), content.into(), Utc::now());

        debug!(id = %file.id, name = %file.name, kind = ?file.kind, "created file");

        self.order.push(id.clone());
        self.files.insert(id, file.clone());
        file
    }

    /// Looks up a document. Absence is not an error.
    #[must_use]
    pub fn get_file(&self, id: &str) -> Option<&VirtualFile> {
        self.files.get(id)
    }

    /// Returns `true` if `id` names a registry document.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.files.contains_key(id)
    }

    /// Overwrites the content of a document.
    ///
    /// Returns `false` and changes nothing if `id` is absent.
    pub fn update_file(&mut self, id: &str, content: impl Into<String>) -> bool {
        let Some(file) = self.files.get_mut(id) else {
            return false;
        };
        file.content = content.into();
        file.touch(Utc::now());
        debug!(id, size = file.size(), "updated file");
        true
    }

    /// Removes a document.
    pub fn delete_file(&mut self, id: &str) -> bool {
        if self.files.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| existing.as_str() != id);
        debug!(id, "deleted file");
        true
    }

    /// Renames a document and recomputes its kind.
    pub fn rename_file(&mut self, id: &str, new_name: impl Into<String>) -> bool {
        let Some(file) = self.files.get_mut(id) else {
            return false;
        };
        file.name = new_name.into();
        file.kind = FileKind::from_name(&file.name);
        file.touch(Utc::now());
        debug!(id, name = %file.name, "renamed file");
        true
    }

    /// All documents in creation order.
    #[must_use]
    pub fn list_files(&self) -> Vec<&VirtualFile> {
        self.order
            .iter()
            .filter_map(|id| self.files.get(id))
            .collect()
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if the registry holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut registry = FileRegistry::new();
        let a = registry.create_file("a.txt", "");
        let b = registry.create_file("b.txt", "");
        assert_eq!(a.id.as_str(), "file-1");
        assert_eq!(b.id.as_str(), "file-2");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut registry = FileRegistry::new();
        let a = registry.create_file("a.txt", "");
        assert!(registry.delete_file(a.id.as_str()));
        let b = registry.create_file("b.txt", "");
        assert_ne!(a.id, b.id);
        assert_eq!(b.id.as_str(), "file-2");
    }

    #[test]
    fn test_create_derives_kind() {
        let mut registry = FileRegistry::new();
        assert_eq!(registry.create_file("x.md", "").kind, FileKind::Markdown);
        assert_eq!(registry.create_file("x.rs", "").kind, FileKind::File);
    }

    #[test]
    fn test_create_timestamps_equal() {
        let mut registry = FileRegistry::new();
        let file = registry.create_file("x.md", "");
        assert_eq!(file.created_at, file.modified_at);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut registry = FileRegistry::new();
        registry.create_file("a.txt", "");
        assert!(!registry.update_file("file-99", "content"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_bumps_modified_at() {
        let mut registry = FileRegistry::new();
        let file = registry.create_file("a.txt", "old");
        assert!(registry.update_file(file.id.as_str(), "new"));

        let updated = registry.get_file(file.id.as_str()).unwrap();
        assert_eq!(updated.content, "new");
        assert!(updated.modified_at >= file.modified_at);
        assert_eq!(updated.created_at, file.created_at);
    }

    #[test]
    fn test_rename_recomputes_kind() {
        let mut registry = FileRegistry::new();
        let file = registry.create_file("draft.txt", "");
        assert!(registry.rename_file(file.id.as_str(), "draft.md"));

        let renamed = registry.get_file(file.id.as_str()).unwrap();
        assert_eq!(renamed.name, "draft.md");
        assert_eq!(renamed.kind, FileKind::Markdown);
        assert!(renamed.modified_at >= file.modified_at);

        assert!(registry.rename_file(file.id.as_str(), "draft.txt"));
        assert_eq!(
            registry.get_file(file.id.as_str()).unwrap().kind,
            FileKind::File
        );
    }

    #[test]
    fn test_rename_missing() {
        let mut registry = FileRegistry::new();
        assert!(!registry.rename_file("file-1", "x.md"));
    }

    #[test]
    fn test_delete_missing() {
        let mut registry = FileRegistry::new();
        assert!(!registry.delete_file("file-1"));
    }

    #[test]
    fn test_list_preserves_order_after_delete() {
        let mut registry = FileRegistry::new();
        let a = registry.create_file("a", "");
        registry.create_file("b", "");
        registry.create_file("c", "");
        registry.delete_file(a.id.as_str());

        let names: Vec<_> = registry
            .list_files()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["b", "c"]);
    }

    #[test]
    fn test_contains_and_empty() {
        let mut registry = FileRegistry::new();
        assert!(registry.is_empty());
        let file = registry.create_file("a", "");
        assert!(registry.contains(file.id.as_str()));
        assert!(!registry.contains("alqavi.md"));
        assert!(!registry.is_empty());
    }
}
