//! Config command implementation.
//!
//! The configuration file is TOML; see [`SiteConfig`] for the keys.

use crate::actions::ConfigAction;
use crate::formatters::format_output;
use anyhow::{Context, Result};
use devfolio_core::SiteConfig;
use devfolio_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of `config init`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitResult {
    /// Whether a file was written
    pub success: bool,
    /// Status message
    pub message: String,
    /// Target path
    pub path: String,
}

/// Runs the config command.
///
/// `explicit_path` is the `--config` flag; it overrides the default
/// location for `init` and `path`.
pub async fn run(
    action: ConfigAction,
    config: &SiteConfig,
    explicit_path: Option<&Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Config action: {action:?}");

    match action {
        ConfigAction::Show => show_config(config, output_format),
        ConfigAction::Init { force } => {
            let path = config_path(explicit_path)?;
            let result = init_config(&path, force)?;
            println!("{}", format_output(&result, output_format)?);
            Ok(if result.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::INVALID_INPUT
            })
        }
        ConfigAction::Path => {
            let path = config_path(explicit_path)?;
            match output_format {
                OutputFormat::Json => println!("{}", format_output(&path, output_format)?),
                OutputFormat::Text | OutputFormat::Pretty => println!("{}", path.display()),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show_config(config: &SiteConfig, output_format: OutputFormat) -> Result<ExitCode> {
    let output = match output_format {
        OutputFormat::Json => format_output(config, output_format)?,
        OutputFormat::Text | OutputFormat::Pretty => config.to_toml_string()?,
    };
    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

fn config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => Ok(path.to_path_buf()),
        None => SiteConfig::default_path().context("failed to determine config directory"),
    }
}

/// Writes the default configuration to `path`.
///
/// An existing file is left alone unless `force` is set.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn init_config(path: &Path, force: bool) -> Result<InitResult> {
    let display = path.display().to_string();
    if path.exists() && !force {
        return Ok(InitResult {
            success: false,
            message: "configuration already exists (use --force to overwrite)".to_string(),
            path: display,
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }
    let toml_str = SiteConfig::default().to_toml_string()?;
    fs::write(path, toml_str).context("failed to write config file")?;
    debug!("Wrote default config to {}", path.display());

    Ok(InitResult {
        success: true,
        message: "configuration initialized".to_string(),
        path: display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let result = init_config(&path, false).unwrap();
        assert!(result.success);

        let loaded = SiteConfig::load(&path).unwrap();
        assert_eq!(loaded.content, SiteConfig::default().content);
        assert_eq!(loaded.workbench.frame_timeout_ms, 2000);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[workbench]\nframe_timeout_ms = 10\n").unwrap();

        let result = init_config(&path, false).unwrap();
        assert!(!result.success);
        assert_eq!(SiteConfig::load(&path).unwrap().workbench.frame_timeout_ms, 10);

        assert!(init_config(&path, true).unwrap().success);
        assert_eq!(SiteConfig::load(&path).unwrap().workbench.frame_timeout_ms, 2000);
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/tmp/devfolio.toml");
        assert_eq!(config_path(Some(path)).unwrap(), path);
    }

    #[tokio::test]
    async fn test_show_succeeds() {
        let code = run(
            ConfigAction::Show,
            &SiteConfig::default(),
            None,
            OutputFormat::Json,
        )
        .await
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
