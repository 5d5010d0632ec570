//! Starts the interactive shell.

use crate::commands::common::build_session;
use crate::shell::Shell;
use anyhow::Result;
use devfolio_core::SiteConfig;
use devfolio_core::cli::{ExitCode, OutputFormat};
use tracing::info;

/// Runs the shell until `:quit` or end of input.
pub async fn run(config: &SiteConfig, output_format: OutputFormat) -> Result<ExitCode> {
    let session = build_session(config).await?;
    info!(
        projects = session.resolver().catalog().len(),
        "starting shell"
    );
    Shell::new(session, output_format).run().await?;
    Ok(ExitCode::SUCCESS)
}
