//! Site configuration.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/devfolio/config.toml`
//! - macOS: `~/Library/Application Support/devfolio/config.toml`
//! - Windows: `%APPDATA%\devfolio\config.toml`
//!
//! Every section and key is optional; missing values take their defaults.
//!
//! ```toml
//! [general]
//! default_format = "pretty"
//! log_level = "info"
//!
//! [content]
//! data_dir = "data"
//! projects_file = "data/projects.json"
//! api_base_url = "https://alqavi.dev"
//! readme_branches = ["main", "master"]
//! request_timeout_secs = 10
//!
//! [workbench]
//! export_dir = "~/Downloads"
//! frame_timeout_ms = 2000
//! terminal_path = "C:\\Users\\alqavi"
//! ```
//!
//! # Examples
//!
//! ```
//! use devfolio_core::SiteConfig;
//!
//! let config = SiteConfig::from_toml_str("[workbench]\nframe_timeout_ms = 500\n")?;
//! assert_eq!(config.workbench.frame_timeout_ms, 500);
//! assert_eq!(config.content.readme_branches, ["main", "master"]);
//! # Ok::<(), devfolio_core::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete site configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SiteConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Content sources
    #[serde(default)]
    pub content: ContentConfig,

    /// Workbench behavior
    #[serde(default)]
    pub workbench: WorkbenchConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format (json, text, pretty)
    pub default_format: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where document content comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the fixed markdown documents
    pub data_dir: PathBuf,

    /// JSON file with the project catalog
    pub projects_file: PathBuf,

    /// Base URL of a deployed content API.
    ///
    /// When set, fixed documents are fetched over HTTP from
    /// `<api_base_url>/api/<slug>`; otherwise they are read from `data_dir`.
    pub api_base_url: Option<String>,

    /// Host of repository URLs in the catalog
    pub repository_host: String,

    /// Host serving raw repository files
    pub raw_content_host: String,

    /// Branches probed for a README, in order
    pub readme_branches: Vec<String>,

    /// Timeout for each network request in seconds
    pub request_timeout_secs: u64,
}

/// Workbench behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// Directory receiving exported ("downloaded") documents
    pub export_dir: PathBuf,

    /// Delay after which an embedded frame stops showing its loading state
    pub frame_timeout_ms: u64,

    /// Initial working path of the terminal
    pub terminal_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: "pretty".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            projects_file: PathBuf::from("data/projects.json"),
            api_base_url: None,
            repository_host: "github.com".to_string(),
            raw_content_host: "raw.githubusercontent.com".to_string(),
            readme_branches: vec!["main".to_string(), "master".to_string()],
            request_timeout_secs: 10,
        }
    }
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            export_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            frame_timeout_ms: 2000,
            terminal_path: r"C:\Users\alqavi".to_string(),
        }
    }
}

impl ContentConfig {
    /// Per-request network timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl WorkbenchConfig {
    /// Loading-indicator delay for embedded frames.
    #[must_use]
    pub const fn frame_timeout(&self) -> Duration {
        Duration::from_millis(self.frame_timeout_ms)
    }
}

impl SiteConfig {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the TOML is malformed or fails
    /// validation.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| Error::ConfigError {
            message: format!("failed to parse config: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, or
    /// `Error::ConfigError` if it does not parse or validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`. A missing default file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file cannot be loaded, or if
    /// an existing default file is invalid.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(default),
            _ => Ok(Self::default()),
        }
    }

    /// Default configuration file location.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("devfolio").join("config.toml"))
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigError {
            message: format!("failed to serialize config: {e}"),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if:
    /// - No README branch is configured
    /// - Request timeout or frame timeout is zero
    /// - The default format is not one of json, text, pretty
    /// - Any host is empty
    pub fn validate(&self) -> Result<()> {
        let fail = |message: &str| {
            Err(Error::ConfigError {
                message: message.to_string(),
            })
        };

        if self.content.readme_branches.is_empty()
            || self.content.readme_branches.iter().any(|b| b.trim().is_empty())
        {
            return fail("readme_branches must list at least one non-empty branch");
        }

        if self.content.request_timeout_secs == 0 {
            return fail("request_timeout_secs must be greater than zero");
        }

        if self.workbench.frame_timeout_ms == 0 {
            return fail("frame_timeout_ms must be greater than zero");
        }

        if self.content.repository_host.trim().is_empty()
            || self.content.raw_content_host.trim().is_empty()
        {
            return fail("repository and raw content hosts cannot be empty");
        }

        if !["json", "text", "pretty"].contains(&self.general.default_format.as_str()) {
            return Err(Error::ConfigError {
                message: format!(
                    "invalid default_format '{}', must be one of: json, text, pretty",
                    self.general.default_format
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.workbench.frame_timeout(), Duration::from_secs(2));
        assert_eq!(config.content.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.content.data_dir, PathBuf::from("data"));
        assert_eq!(config.workbench.terminal_path, r"C:\Users\alqavi");
        assert!(config.content.api_base_url.is_none());
    }

    #[test]
    fn test_partial_section() {
        let config =
            SiteConfig::from_toml_str("[content]\napi_base_url = \"https://alqavi.dev\"\n").unwrap();
        assert_eq!(
            config.content.api_base_url.as_deref(),
            Some("https://alqavi.dev")
        );
        assert_eq!(config.content.raw_content_host, "raw.githubusercontent.com");
    }

    #[test]
    fn test_rejects_empty_branches() {
        let err = SiteConfig::from_toml_str("[content]\nreadme_branches = []\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_rejects_zero_frame_timeout() {
        let err = SiteConfig::from_toml_str("[workbench]\nframe_timeout_ms = 0\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = SiteConfig::from_toml_str("[general]\ndefault_format = \"yaml\"\n").unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(SiteConfig::from_toml_str("[content").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SiteConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed = SiteConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = SiteConfig::load_or_default(Some(Path::new("/nonexistent/devfolio.toml")))
            .unwrap_err();
        assert!(err.is_io_error());
    }
}
