//! Registering local files as registry documents.

use crate::registry::FileRegistry;
use crate::types::{FilesError, Result, VirtualFile};
use std::path::Path;
use tracing::{debug, info};

/// Extensions accepted by the upload picker.
pub const UPLOAD_EXTENSIONS: &[&str] = &["txt", "md", "js", "ts", "tsx", "jsx", "json", "css", "html"];

/// A local file read for upload, not yet registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// File name the document is registered under
    pub name: String,
    /// File text
    pub content: String,
}

/// Reads a local text file for upload.
///
/// This does blocking file I/O; async callers run it on a blocking thread.
///
/// # Errors
///
/// Returns `FilesError::UnsupportedUpload` if the extension is not in
/// [`UPLOAD_EXTENSIONS`], or `FilesError::Io` if the file cannot be read
/// as UTF-8 text.
pub fn read_upload(path: impl AsRef<Path>) -> Result<Upload> {
    let path = path.as_ref();

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|_| is_accepted(path))
        .ok_or_else(|| FilesError::UnsupportedUpload {
            path: path.to_path_buf(),
        })?;

    let content = std::fs::read_to_string(path).map_err(|source| FilesError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "read upload");
    Ok(Upload {
        name: name.to_string(),
        content,
    })
}

impl FileRegistry {
    /// Registers a file read by [`read_upload`].
    pub fn register_upload(&mut self, upload: Upload) -> VirtualFile {
        let file = self.create_file(upload.name, upload.content);
        info!(id = %file.id, name = %file.name, "uploaded file");
        file
    }

    /// Reads a local text file and registers it under its file name.
    ///
    /// # Errors
    ///
    /// Same as [`read_upload`]; the registry is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use devfolio_files::FileRegistry;
    /// # use tempfile::TempDir;
    ///
    /// # let temp_dir = TempDir::new().unwrap();
    /// # let path = temp_dir.path().join("todo.md");
    /// # std::fs::write(&path, "- [ ] ship").unwrap();
    /// let mut registry = FileRegistry::new();
    /// let file = registry.create_from_upload(&path).unwrap();
    ///
    /// assert_eq!(file.name, "todo.md");
    /// assert_eq!(file.content, "- [ ] ship");
    /// ```
    pub fn create_from_upload(&mut self, path: impl AsRef<Path>) -> Result<VirtualFile> {
        read_upload(path).map(|upload| self.register_upload(upload))
    }
}

fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| UPLOAD_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_upload_markdown() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.md");
        fs::write(&path, "# Notes").unwrap();

        let mut registry = FileRegistry::new();
        let file = registry.create_from_upload(&path).unwrap();
        assert_eq!(file.kind, FileKind::Markdown);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_upload_uppercase_extension_accepted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("DATA.JSON");
        fs::write(&path, "{}").unwrap();

        let mut registry = FileRegistry::new();
        let file = registry.create_from_upload(&path).unwrap();
        assert_eq!(file.name, "DATA.JSON");
    }

    #[test]
    fn test_upload_rejects_binary_types() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("photo.png");
        fs::write(&path, [0u8, 1, 2]).unwrap();

        let mut registry = FileRegistry::new();
        let err = registry.create_from_upload(&path).unwrap_err();
        assert!(err.is_unsupported_upload());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_upload_rejects_no_extension() {
        let mut registry = FileRegistry::new();
        let err = registry.create_from_upload("/tmp/Makefile").unwrap_err();
        assert!(err.is_unsupported_upload());
    }

    #[test]
    fn test_read_upload_leaves_registry_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("todo.txt");
        fs::write(&path, "- ship").unwrap();

        let upload = read_upload(&path).unwrap();
        assert_eq!(
            upload,
            Upload {
                name: "todo.txt".into(),
                content: "- ship".into(),
            }
        );

        let mut registry = FileRegistry::new();
        assert!(registry.is_empty());
        let file = registry.register_upload(upload);
        assert_eq!(file.id.as_str(), "file-1");
        assert_eq!(file.content, "- ship");
    }

    #[test]
    fn test_upload_missing_file() {
        let mut registry = FileRegistry::new();
        let err = registry
            .create_from_upload("/nonexistent/notes.txt")
            .unwrap_err();
        assert!(err.is_io());
        assert!(registry.is_empty());
    }
}
