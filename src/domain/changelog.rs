//! Changelog document: parsing, rendering and one-level undo

use crate::domain::entry::LogEntry;
use crate::domain::tokens::{version::INIT_VERSION, Date, Message, Token, Version};
use crate::error::{ChangelogError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Document title rendered above the first section
pub const TITLE: &str = "Changelog";

/// Decorative underlines: `---`, `=====`, ...
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[-=]{3,}$").unwrap())
}

/// In-memory changelog document.
///
/// Entries are kept newest first: index 0 is the most recent section, which
/// matches the order they appear in the file.
#[derive(Debug, Clone)]
pub struct Changelog {
    path: PathBuf,
    entries: Vec<LogEntry>,
    backup: Option<Vec<LogEntry>>,
}

impl Changelog {
    /// Create an empty changelog bound to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_entries(path, Vec::new())
    }

    /// Create a changelog from already parsed entries (newest first)
    pub fn with_entries(path: impl Into<PathBuf>, entries: Vec<LogEntry>) -> Self {
        Changelog {
            path: path.into(),
            entries,
            backup: None,
        }
    }

    /// Read and parse the changelog file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let entries = Self::parse_entries(&content)?;
        Ok(Self::with_entries(path, entries))
    }

    /// Parse raw changelog text into entries, newest first.
    ///
    /// Headers always start a new section. Message lines are collected into
    /// the open section; any other prose is ignored. A trailing section is
    /// kept even if it has no messages.
    pub fn parse_entries(text: &str) -> Result<Vec<LogEntry>> {
        let mut entries = Vec::new();
        let mut current: Option<LogEntry> = None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || line.starts_with('#') || separator_regex().is_match(trimmed)
            {
                continue;
            }

            if LogEntry::is_header(line)? {
                if let Some(entry) = current.take() {
                    entries.push(entry);
                }
                current = Some(Self::entry_from_header(line)?);
            } else if let Some(entry) = current.as_mut().filter(|e| e.is_declared()) {
                if let Some(message) = Message::parse(line)? {
                    entry.add_message(message)?;
                }
            }
        }

        entries.extend(current);
        Ok(entries)
    }

    fn entry_from_header(line: &str) -> Result<LogEntry> {
        let mut entry = LogEntry::new();
        if let Some(version) = Version::parse(line)? {
            entry.set_version(version)?;
        }
        if let Some(date) = Date::parse(line)? {
            entry.set_date(date)?;
        }
        Ok(entry)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Most recent entry
    pub fn last_entry(&self) -> Option<&LogEntry> {
        self.entries.first()
    }

    pub fn last_entry_mut(&mut self) -> Option<&mut LogEntry> {
        self.entries.first_mut()
    }

    /// Entry released right before the most recent one
    pub fn previous_entry(&self) -> Option<&LogEntry> {
        self.entries.get(1)
    }

    /// Snapshot the current entries into the backup slot
    pub fn make_backup(&mut self) {
        self.backup = Some(self.entries.clone());
    }

    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }

    /// Restore the last snapshot, consuming it.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.backup.take() {
            Some(entries) => {
                self.entries = entries;
                true
            }
            None => false,
        }
    }

    /// Open a new unreleased section on top of the document.
    ///
    /// The version is the most recent version with its development counter
    /// bumped, or `0.1.0+1` for an empty changelog.
    pub fn new_entry(&mut self) -> Result<&mut LogEntry> {
        self.ensure_no_pending()?;

        let version = self
            .last_entry()
            .and_then(|e| e.version())
            .copied()
            .unwrap_or(INIT_VERSION)
            .next_dev();

        self.make_backup();
        self.entries
            .insert(0, LogEntry::declared(version, Date::Unreleased));
        Ok(&mut self.entries[0])
    }

    /// Put an already built entry on top of the document
    pub fn add_entry(&mut self, entry: LogEntry) -> Result<()> {
        if !entry.is_declared() {
            return Err(ChangelogError::InvalidState(
                "can't add an undeclared entry".to_string(),
            ));
        }
        self.ensure_no_pending()?;

        self.make_backup();
        self.entries.insert(0, entry);
        Ok(())
    }

    fn ensure_no_pending(&self) -> Result<()> {
        match self.last_entry() {
            Some(last) if last.is_pending() => {
                Err(ChangelogError::UnreleasedEntryExists(last.header()?))
            }
            _ => Ok(()),
        }
    }

    /// Most recent and previous versions when the most recent one does not
    /// order strictly above the previous one
    pub fn ordering_violation(&self) -> Option<(Version, Version)> {
        let current = *self.last_entry()?.version()?;
        let previous = *self.previous_entry()?.version()?;
        (current <= previous).then_some((current, previous))
    }

    /// Full document text
    pub fn render(&self) -> Result<String> {
        let mut sections = vec![format!("{}\n{}", TITLE, "=".repeat(TITLE.len()))];
        for entry in &self.entries {
            sections.push(entry.render()?);
        }
        Ok(format!("{}\n", sections.join("\n\n")))
    }

    /// Write the whole document to its path, replacing the file contents
    pub fn save(&self) -> Result<()> {
        let content = self.render()?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Re-read the document from disk, dropping in-memory changes and the
    /// backup
    pub fn reload(&mut self) -> Result<()> {
        let content = fs::read_to_string(&self.path)?;
        self.entries = Self::parse_entries(&content)?;
        self.backup = None;
        Ok(())
    }
}
