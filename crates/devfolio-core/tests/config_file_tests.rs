//! Configuration loading from disk.

use devfolio_core::SiteConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[content]
data_dir = "/srv/devfolio/data"
readme_branches = ["trunk"]

[workbench]
terminal_path = "D:\\work"
"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    assert_eq!(config.content.data_dir.to_str(), Some("/srv/devfolio/data"));
    assert_eq!(config.content.readme_branches, ["trunk"]);
    assert_eq!(config.workbench.terminal_path, r"D:\work");
    assert_eq!(config.general.default_format, "pretty");
}

#[test]
fn test_load_or_default_with_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[general]\ndefault_format = \"json\"\n").unwrap();

    let config = SiteConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.general.default_format, "json");
}

#[test]
fn test_load_invalid_file_reports_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[content]\nrequest_timeout_secs = 0\n").unwrap();

    let err = SiteConfig::load(&path).unwrap_err();
    assert!(err.is_config_error());
}
