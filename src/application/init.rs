//! Initialize project use case

use crate::domain::Changelog;
use crate::error::{ChangelogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository, CHANGELOG_NAME};
use std::path::{Path, PathBuf};

/// What `init` created and what it left alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub changelog: PathBuf,
    pub changelog_created: bool,
    pub config: PathBuf,
    pub config_created: bool,
}

/// Initialize a changelog and its config in the project directory.
/// Existing files are kept untouched.
pub fn init(path: &Path) -> Result<InitReport> {
    if !path.is_dir() {
        return Err(ChangelogError::Config(format!(
            "Wrong project path {}",
            path.display()
        )));
    }

    let changelog_path = path.join(CHANGELOG_NAME);
    let changelog_created = !changelog_path.exists();
    if changelog_created {
        let mut changelog = Changelog::new(&changelog_path);
        changelog.new_entry()?;
        changelog.save()?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    let config_created = !repo.is_initialized();
    if config_created {
        repo.save_config(&Config::new(PathBuf::from(CHANGELOG_NAME)))?;
    }

    Ok(InitReport {
        changelog: changelog_path,
        changelog_created,
        config: repo.config_file().to_path_buf(),
        config_created,
    })
}
