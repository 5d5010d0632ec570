//! Command implementations for the devfolio CLI.
//!
//! Each module parses nothing itself: it receives typed arguments from
//! `main`, runs the operation and formats output for the chosen format.

pub mod api;
pub mod common;
pub mod completions;
pub mod config;
pub mod projects;
pub mod resolve;
pub mod shell;
