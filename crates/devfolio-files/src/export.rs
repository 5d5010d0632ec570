//! Document export.
//!
//! Saving a fixed document and "Save As" hand the edit buffer to the visitor
//! as a download. Here a download is a file written into the export
//! directory under the requested name.
//!
//! # Examples
//!
//! ```
//! use devfolio_files::Exporter;
//! # use tempfile::TempDir;
//!
//! # let temp_dir = TempDir::new().unwrap();
//! let exporter = Exporter::new(temp_dir.path());
//! let path = exporter.export("notes.md", "# Notes").unwrap();
//!
//! assert_eq!(std::fs::read_to_string(path).unwrap(), "# Notes");
//! ```

use crate::types::{FilesError, Result};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Options for export operations.
///
/// # Examples
///
/// ```
/// use devfolio_files::ExportOptions;
///
/// let options = ExportOptions::default()
///     .with_atomic_writes(true)
///     .with_overwrite(false);
/// assert!(!options.overwrite);
/// ```
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Use atomic writes (write to temp file, then rename)
    pub atomic: bool,
    /// Overwrite existing files
    pub overwrite: bool,
}

impl ExportOptions {
    /// Creates new export options with defaults.
    ///
    /// Defaults:
    /// - atomic: true
    /// - overwrite: true (a repeated save replaces the previous download)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atomic: true,
            overwrite: true,
        }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Sets whether to overwrite existing files.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes documents into an export directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
    options: ExportOptions,
}

impl Exporter {
    /// Creates an exporter with default options.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_options(dir, ExportOptions::default())
    }

    /// Creates an exporter with custom options.
    #[must_use]
    pub fn with_options(dir: impl Into<PathBuf>, options: ExportOptions) -> Self {
        Self {
            dir: dir.into(),
            options,
        }
    }

    /// Directory receiving exports.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Exports `content` as `<dir>/<name>` and returns the written path.
    ///
    /// The export directory is created if missing. With `overwrite`
    /// disabled an existing file is left untouched and its path returned.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidName` if `name` is empty, contains a path
    /// separator, or is `.`/`..`; `FilesError::Io` if the write fails.
    pub fn export(&self, name: &str, content: &str) -> Result<PathBuf> {
        let name = validate_name(name)?;

        fs::create_dir_all(&self.dir).map_err(|source| FilesError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(name);
        if !self.options.overwrite && path.exists() {
            debug!(path = %path.display(), "export skipped, file exists");
            return Ok(path);
        }

        if self.options.atomic {
            write_atomic(&path, content)?;
        } else {
            fs::write(&path, content).map_err(|source| FilesError::Io {
                path: path.clone(),
                source,
            })?;
        }

        info!(path = %path.display(), bytes = content.len(), "exported document");
        Ok(path)
    }
}

/// Accepts a bare file name only.
fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    let invalid = || FilesError::InvalidName {
        name: name.to_string(),
    };

    if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
        return Err(invalid());
    }

    let mut components = Path::new(trimmed).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(trimmed),
        _ => Err(invalid()),
    }
}

/// Writes to a sibling temp file, syncs, then renames over the target.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| FilesError::Io { path, source }
    };

    let mut file = fs::File::create(&temp_path).map_err(io_err(&temp_path))?;
    file.write_all(content.as_bytes())
        .map_err(io_err(&temp_path))?;
    file.sync_all().map_err(io_err(&temp_path))?;

    fs::rename(&temp_path, path).map_err(io_err(path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_file() {
        let temp = TempDir::new().unwrap();
        let exporter = Exporter::new(temp.path());
        let path = exporter.export("contact.md", "# Contact").unwrap();
        assert_eq!(path, temp.path().join("contact.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "# Contact");
    }

    #[test]
    fn test_export_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("downloads");
        let exporter = Exporter::new(&dir);
        exporter.export("a.txt", "a").unwrap();
        assert!(dir.join("a.txt").exists());
    }

    #[test]
    fn test_export_overwrites_by_default() {
        let temp = TempDir::new().unwrap();
        let exporter = Exporter::new(temp.path());
        exporter.export("a.txt", "first").unwrap();
        exporter.export("a.txt", "second").unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_export_without_overwrite_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let exporter = Exporter::with_options(
            temp.path(),
            ExportOptions::default().with_overwrite(false),
        );
        exporter.export("a.txt", "first").unwrap();
        exporter.export("a.txt", "second").unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "first"
        );
    }

    #[test]
    fn test_export_non_atomic() {
        let temp = TempDir::new().unwrap();
        let exporter = Exporter::with_options(
            temp.path(),
            ExportOptions::default().with_atomic_writes(false),
        );
        exporter.export("a.txt", "direct").unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "direct"
        );
    }

    #[test]
    fn test_atomic_export_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        Exporter::new(temp.path()).export("a.md", "x").unwrap();
        assert!(!temp.path().join("a.md.tmp").exists());
    }

    #[test]
    fn test_rejects_traversal_and_separators() {
        let temp = TempDir::new().unwrap();
        let exporter = Exporter::new(temp.path());
        for name in ["", "   ", "..", ".", "../x.md", "dir/x.md", r"dir\x.md"] {
            let err = exporter.export(name, "x").unwrap_err();
            assert!(err.is_invalid_name(), "accepted {name:?}");
        }
    }

    #[test]
    fn test_name_is_trimmed() {
        let temp = TempDir::new().unwrap();
        let path = Exporter::new(temp.path()).export("  a.md ", "x").unwrap();
        assert_eq!(path, temp.path().join("a.md"));
    }
}
