//! Async source traits at the network seams.
//!
//! The resolver talks to the outside world through two traits so that
//! tests can substitute in-memory fakes:
//!
//! - `DocumentSource` - supplies the fixed documents
//! - `TextFetcher` - performs a plain-text GET
//!
//! # Examples
//!
//! ```
//! use devfolio_core::traits::DocumentSource;
//! use devfolio_core::{FixedDocument, Result};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct Canned;
//!
//! #[async_trait]
//! impl DocumentSource for Canned {
//!     async fn fetch_document(&self, doc: FixedDocument) -> Result<String> {
//!         Ok(format!("# {doc}"))
//!     }
//! }
//! ```

mod source;

pub use source::{DocumentSource, TextFetcher};
