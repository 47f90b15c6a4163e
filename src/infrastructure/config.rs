//! Configuration management

use crate::error::{ChangelogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the project root
pub const CONFIG_NAME: &str = ".md-changelog.toml";

/// Changelog file created by `init`
pub const CHANGELOG_NAME: &str = "Changelog.md";

pub const DEFAULT_VCS: &str = "git";

const SUPPORTED_VCS: &[&str] = &["git"];

fn default_vcs() -> String {
    DEFAULT_VCS.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Changelog location; relative paths are resolved against the config directory
    pub changelog: PathBuf,
    #[serde(default = "default_vcs")]
    pub vcs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(changelog: PathBuf) -> Self {
        Config {
            changelog,
            vcs: default_vcs(),
            editor: None,
        }
    }

    /// Load config from a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChangelogError::ConfigNotFound(path.to_path_buf())
            } else {
                ChangelogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a config file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        fs::write(path, contents)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !SUPPORTED_VCS.contains(&self.vcs.as_str()) {
            return Err(ChangelogError::Config(format!(
                "Unsupported vcs '{}'. Supported: {}",
                self.vcs,
                SUPPORTED_VCS.join(", ")
            )));
        }
        if self.changelog.as_os_str().is_empty() {
            return Err(ChangelogError::Config(
                "'changelog' path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute changelog path for a config living in `config_dir`
    pub fn changelog_path(&self, config_dir: &Path) -> PathBuf {
        if self.changelog.is_absolute() {
            self.changelog.clone()
        } else {
            config_dir.join(&self.changelog)
        }
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .ok()
            .or_else(|| self.editor.clone())
            .unwrap_or_else(Self::default_editor)
    }

    fn default_editor() -> String {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    }
}
