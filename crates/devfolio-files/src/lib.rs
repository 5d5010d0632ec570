//! In-memory file registry for the devfolio workbench.
//!
//! Holds the documents a visitor creates or uploads during a session and
//! exports documents to disk when they are "downloaded". Nothing here is
//! persisted: the registry lives and dies with its owner.
//!
//! # Features
//!
//! - **Monotonic ids**: `file-1`, `file-2`, ... never reused
//! - **Derived kind**: `.md` names are markdown, everything else plain
//! - **Uploads**: register a local text file under its own name
//! - **Export**: atomic writes of a document into the export directory
//!
//! # Examples
//!
//! ```
//! use devfolio_files::{FileKind, FileRegistry};
//!
//! let mut registry = FileRegistry::new();
//! let file = registry.create_file("notes.md", "hello");
//!
//! assert_eq!(file.kind, FileKind::Markdown);
//! assert_eq!(registry.get_file(file.id.as_str()).unwrap().content, "hello");
//!
//! assert!(registry.delete_file(file.id.as_str()));
//! assert!(registry.get_file(file.id.as_str()).is_none());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod export;
pub mod registry;
pub mod types;
pub mod upload;

pub use export::{ExportOptions, Exporter};
pub use registry::FileRegistry;
pub use types::{FileKind, FilesError, Result, VirtualFile};
pub use upload::{UPLOAD_EXTENSIONS, Upload, read_upload};
