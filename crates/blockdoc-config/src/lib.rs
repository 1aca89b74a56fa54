use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User settings for the command-line host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory that relative page paths are resolved against.
    pub workspace_path: PathBuf,
    /// Emoji used when exporting a page without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_emoji: Option<String>,
    /// Template name used by `template` when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,
}

/// Directory holding `config.toml`, before `~` expansion.
const CONFIG_DIR: &str = "~/.config/blockdoc";
const CONFIG_FILE: &str = "config.toml";

impl Config {
    pub fn new(workspace_path: impl Into<PathBuf>) -> Self {
        Self {
            workspace_path: workspace_path.into(),
            default_emoji: None,
            default_template: None,
        }
    }

    /// Reads the config at `config_path`. A missing file is `Ok(None)`,
    /// not an error.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        match std::fs::read_to_string(config_path) {
            Ok(content) => Self::from_toml(&content, config_path).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Parses `content` and normalises it: the workspace path has `~` and
    /// `$VAR` expanded, and blank defaults read as unset.
    fn from_toml(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let workspace_path =
            Self::expand_path(&config.workspace_path).unwrap_or(config.workspace_path);
        Ok(Config {
            workspace_path,
            default_emoji: non_blank(config.default_emoji),
            default_template: non_blank(config.default_template),
        })
    }

    /// Writes the config as TOML, creating the parent directory.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// `~/.config/blockdoc/config.toml` with `~` expanded.
    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }

    /// Expands `~` and `$VAR` references. `None` when a variable is unset.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
