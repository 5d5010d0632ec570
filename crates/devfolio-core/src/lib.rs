//! Core types, traits, and errors for the devfolio workbench.
//!
//! This crate provides the foundational types shared by every other crate in
//! the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`FileId`, `ProjectId`, `FixedDocument`)
//! - The read-only project catalog
//! - Error hierarchy with contextual information
//! - Async source traits at the network seams
//! - Site configuration loaded from TOML

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod catalog;
mod config;
mod document;
mod error;
mod types;

pub mod cli;
pub mod traits;

pub use catalog::{Project, ProjectCatalog};
pub use config::{ContentConfig, GeneralConfig, SiteConfig, WorkbenchConfig};
pub use document::FixedDocument;
pub use error::{Error, Result};
pub use types::{FileId, ProjectId};
