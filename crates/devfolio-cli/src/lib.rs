//! devfolio CLI library.
//!
//! Exposes the command implementations, the interactive shell and the
//! output formatters so they can be tested without spawning the binary.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

pub mod actions;
pub mod commands;
pub mod formatters;
pub mod shell;

pub use actions::{ConfigAction, DocumentArg};
