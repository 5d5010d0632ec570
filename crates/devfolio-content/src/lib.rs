//! Content resolution for the devfolio workbench.
//!
//! Every identifier the workbench can open is classified once into a
//! [`FileRef`] and then resolved to displayable content. Resolution never
//! fails: network and storage errors degrade into placeholder documents.
//!
//! # Sources
//!
//! | `FileRef` | Content |
//! |-----------|---------|
//! | `Fixed` | `DocumentSource` (local store or `/api/<slug>`) |
//! | `Registry` | virtual file registry, verbatim |
//! | `ProjectReadme` | raw README from the repository host, `main` then `master` |
//! | `ProjectDemo` | embedded frame on the https demo URL |
//! | `Unknown` | "no content available" placeholder |
//!
//! # Examples
//!
//! ```
//! use devfolio_content::{ContentResolver, ContentView, FileRef, LocalDocuments, DocumentStore};
//! use devfolio_core::{ProjectCatalog, SiteConfig};
//! use devfolio_files::FileRegistry;
//! use std::sync::Arc;
//!
//! # async fn example() -> devfolio_core::Result<()> {
//! let config = SiteConfig::default();
//! let documents = Arc::new(LocalDocuments::new(DocumentStore::new("data")));
//! let resolver = ContentResolver::from_config(&config.content, documents, ProjectCatalog::default())?;
//!
//! let mut registry = FileRegistry::new();
//! let file = registry.create_file("notes.md", "hello");
//!
//! let file_ref = resolver.classify(file.id.as_str(), &registry);
//! assert!(matches!(file_ref, FileRef::Registry(_)));
//!
//! let resolved = resolver.resolve(&file_ref, &registry).await;
//! assert_eq!(resolved.view, ContentView::Document("hello".to_string()));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod demo;
pub mod file_ref;
pub mod http;
pub mod readme;
pub mod resolver;
pub mod sources;
pub mod store;

pub use demo::{FrameLoad, FramePhase, FrameTarget, normalize_demo_url};
pub use file_ref::{FileRef, display_name};
pub use http::HttpFetcher;
pub use readme::{ReadmeDocument, ReadmeFetcher};
pub use resolver::{ContentResolver, ContentView, Resolved, UNKNOWN_DOCUMENT};
pub use sources::{HttpDocuments, LocalDocuments};
pub use store::{DocumentBody, DocumentResponse, DocumentStore};
