//! Project discovery and config persistence

use crate::domain::Changelog;
use crate::error::{ChangelogError, Result};
use crate::infrastructure::config::{Config, CONFIG_NAME};
use std::path::{Path, PathBuf};

/// Environment variable pointing at the project root
pub const ROOT_ENV: &str = "MD_CHANGELOG_ROOT";

/// Abstract repository for project operations
pub trait ProjectRepository {
    /// Directory holding the config file
    fn root(&self) -> &Path;

    /// Load configuration from the config file
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to the config file
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the config file exists
    fn is_initialized(&self) -> bool;
}

/// File system implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    config_file: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        let config_file = root.join(CONFIG_NAME);
        FileSystemRepository { root, config_file }
    }

    /// Use an explicit config file; its directory becomes the root
    pub fn from_config_file(config_file: PathBuf) -> Result<Self> {
        if !config_file.is_file() {
            return Err(ChangelogError::ConfigNotFound(config_file));
        }
        let root = config_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(FileSystemRepository { root, config_file })
    }

    /// Discover project root.
    /// First checks MD_CHANGELOG_ROOT environment variable, then walks up from
    /// the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_config(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ChangelogError::Config(format!(
                    "{} is set to '{}' but no {} found there. \
                    Run 'md-changelog init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    CONFIG_NAME,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover project root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ChangelogError::ConfigNotFound(start.join(CONFIG_NAME))),
            }
        }
    }

    /// Resolve the repository from an optional explicit config file
    pub fn locate(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_config_file(path.to_path_buf()),
            None => Self::discover(),
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_NAME).is_file()
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Changelog location configured for this project
    pub fn changelog_path(&self) -> Result<PathBuf> {
        let config = self.load_config()?;
        Ok(config.changelog_path(&self.root))
    }

    /// Parse the configured changelog
    pub fn open_changelog(&self) -> Result<Changelog> {
        Changelog::open(&self.changelog_path()?)
    }
}

impl ProjectRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load(&self.config_file)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save(&self.config_file)
    }

    fn is_initialized(&self) -> bool {
        self.config_file.is_file()
    }
}
