//! devfolio CLI.
#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]
//!
//! A portfolio that behaves like a code editor, in the terminal.
//!
//! # Architecture
//!
//! - `shell` - interactive workbench (default)
//! - `api` - serve one content endpoint from the data directory
//! - `resolve` - resolve one identifier and print it
//! - `projects` - list the project catalog
//! - `config` - show, create or locate the configuration file
//! - `completions` - generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Browse the portfolio
//! devfolio
//!
//! # Check what the contact endpoint serves
//! devfolio api contact --format json
//!
//! # Resolve a project README
//! devfolio resolve projects/chess/README.md
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use devfolio_cli::actions::{ConfigAction, DocumentArg};
use devfolio_cli::commands;
use devfolio_core::SiteConfig;
use devfolio_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// devfolio - a portfolio workbench with tabs, an explorer and a terminal.
#[derive(Parser, Debug)]
#[command(name = "devfolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `shell`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty); defaults to the configured one
    #[arg(long = "format", global = true)]
    format: Option<String>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "DEVFOLIO_CONFIG")]
    config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive workbench.
    ///
    /// `:` lines are workbench commands (`:help` lists them), `>` lines
    /// replace the edit buffer and everything else goes to the terminal.
    Shell,

    /// Print a content endpoint response.
    ///
    /// The exit code is 0 for a successful read and 3 when the endpoint
    /// reports an error.
    Api {
        /// Document to serve
        #[arg(value_enum)]
        document: DocumentArg,
    },

    /// Resolve an identifier and print its content.
    ///
    /// # Examples
    ///
    /// ```bash
    /// devfolio resolve alqavi.md
    /// devfolio resolve projects/chess/README.md --format json
    /// ```
    Resolve {
        /// Identifier, e.g. `contact.md` or `projects/<id>/README.md`
        id: String,
    },

    /// List the project catalog.
    Projects,

    /// Manage the configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SiteConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    init_logging(cli.verbose, &config.general.log_level)?;

    let output_format = cli
        .format
        .as_deref()
        .unwrap_or(config.general.default_format.as_str())
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(
        cli.command.unwrap_or(Commands::Shell),
        &config,
        cli.config,
        output_format,
    )
    .await?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging to stderr.
///
/// `RUST_LOG` wins over the configured level; `--verbose` wins over both.
fn init_logging(verbose: bool, configured_level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Routes a command to its handler.
async fn execute_command(
    command: Commands,
    config: &SiteConfig,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Shell => commands::shell::run(config, output_format).await,
        Commands::Api { document } => {
            commands::api::run(document, &config.content, output_format).await
        }
        Commands::Resolve { id } => {
            let resolver = commands::common::build_resolver(config).await?;
            commands::resolve::run(&resolver, &id, output_format).await
        }
        Commands::Projects => {
            let catalog = commands::common::load_catalog(&config.content).await;
            commands::projects::run(&catalog, output_format).await
        }
        Commands::Config { action } => {
            commands::config::run(action, config, config_path.as_deref(), output_format).await
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}
