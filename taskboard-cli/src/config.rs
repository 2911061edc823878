//! Layered configuration for the command-line harness
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `taskboard.{toml,yaml,yml,json}` in the working directory
//! 3. The file named by `--config`
//! 4. `TASKBOARD_*` environment variables

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskboard::BoardConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// File stem searched for in the working directory
pub const CONFIG_FILE_STEM: &str = "taskboard";

const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when neither `RUST_LOG` nor a verbosity flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    #[serde(flatten)]
    pub board: BoardConfig,
}

impl CliConfig {
    /// Load configuration relative to the current working directory
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        Self::load_from(&cwd, explicit)
    }

    pub fn load_from(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let config: Self = build_figment(dir, explicit)?
            .extract()
            .context("invalid configuration")?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}

fn build_figment(dir: &Path, explicit: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(CliConfig::default()));

    for path in discover_config_files(dir) {
        tracing::debug!(path = %path.display(), "merging discovered config file");
        figment = merge_file(figment, &path)?;
    }

    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        tracing::debug!(path = %path.display(), "merging explicit config file");
        figment = merge_file(figment, path)?;
    }

    Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
}

fn discover_config_files(dir: &Path) -> Vec<PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
        .filter(|path| path.is_file())
        .collect()
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);

    let merged = match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => bail!("unsupported config format: {}", path.display()),
    };
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use taskboard::Platform;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig::load_from(dir.path(), None).unwrap();
        assert_eq!(config.board, BoardConfig::default());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_discovered_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("taskboard.toml"),
            "platform = \"mac\"\nactivity_capacity = 7\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = CliConfig::load_from(dir.path(), None).unwrap();
        assert_eq!(config.board.platform, Platform::Mac);
        assert_eq!(config.board.activity_capacity, 7);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_explicit_file_overrides_discovered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.yaml"), "activity_capacity: 3\n").unwrap();
        let explicit = dir.path().join("override.json");
        fs::write(
            &explicit,
            r#"{"activity_capacity": 9, "platform": "windows"}"#,
        )
        .unwrap();

        let config = CliConfig::load_from(dir.path(), Some(&explicit)).unwrap();
        assert_eq!(config.board.activity_capacity, 9);
        assert_eq!(config.board.platform, Platform::Windows);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = CliConfig::load_from(dir.path(), Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_unsupported_extension_is_error() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("settings.ini");
        fs::write(&explicit, "activity_capacity=1").unwrap();
        assert!(CliConfig::load_from(dir.path(), Some(&explicit)).is_err());
    }

    #[test]
    fn test_invalid_platform_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskboard.toml"), "platform = \"amiga\"\n").unwrap();
        assert!(CliConfig::load_from(dir.path(), None).is_err());
    }
}
