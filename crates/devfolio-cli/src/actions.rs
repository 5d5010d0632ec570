//! Action type definitions for CLI commands.

use clap::{Subcommand, ValueEnum};
use devfolio_core::FixedDocument;

/// Configuration management actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file location
    Path,
}

/// Documents served by the content endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentArg {
    /// The about document (`alqavi.md`)
    #[value(alias = "alqavi")]
    About,
    /// The contact document (`contact.md`)
    Contact,
}

impl From<DocumentArg> for FixedDocument {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::About => Self::About,
            DocumentArg::Contact => Self::Contact,
        }
    }
}
