//! Error types for md-changelog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for md-changelog
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("Broken header '{0}': version and date must be present")]
    MalformedHeader(String),

    #[error("Invalid entry state: {0}")]
    InvalidState(String),

    #[error("Unknown message category: {0}")]
    UnknownCategory(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Config is not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Empty changelog. Nothing to release")]
    EmptyChangelog,

    #[error("No UNRELEASED entries. Run 'md-changelog append'")]
    NoUnreleasedEntry,

    #[error("Changelog already contains an UNRELEASED entry ({0}). Make a release before appending a new one")]
    UnreleasedEntryExists(String),

    #[error("Version must be greater than the last one: {requested} <= {last} (last one)")]
    VersionNotGreater { requested: String, last: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ChangelogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChangelogError::EmptyChangelog
            | ChangelogError::NoUnreleasedEntry
            | ChangelogError::UnreleasedEntryExists(_)
            | ChangelogError::VersionNotGreater { .. } => 99,
            ChangelogError::ConfigNotFound(_) => 2,
            ChangelogError::MalformedHeader(_) | ChangelogError::UnknownCategory(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChangelogError::ConfigNotFound(path) => {
                format!(
                    "Config is not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'md-changelog init' in your project directory\n\
                    • Pass the config file explicitly: md-changelog -c path/to/.md-changelog.toml\n\
                    • Set MD_CHANGELOG_ROOT environment variable to your project path",
                    path.display()
                )
            }
            ChangelogError::MalformedHeader(_) => {
                format!(
                    "{}\n\n\
                    Expected header format: <version> (<YYYY-MM-DD or UNRELEASED>)\n\
                    Example: 1.2.0 (2016-03-11)\n\
                    Run 'md-changelog edit' to fix it",
                    self
                )
            }
            ChangelogError::UnknownCategory(tag) => {
                format!(
                    "Unknown message category: '{}'\n\n\
                    Valid categories: Feature, Bugfix, Improvement\n\
                    Plain messages have no [Category] prefix\n\
                    Run 'md-changelog edit' to fix it",
                    tag
                )
            }
            ChangelogError::InvalidVersion(raw) => {
                format!(
                    "Invalid version: '{}'\n\n\
                    Expected format: MAJOR.MINOR.PATCH (e.g., 1.2.0)",
                    raw
                )
            }
            ChangelogError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Set 'editor' in .md-changelog.toml",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;
