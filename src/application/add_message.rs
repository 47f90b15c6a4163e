//! Add message use case

use crate::domain::{Category, Changelog, Message, Version};
use crate::error::{ChangelogError, Result};
use std::path::PathBuf;

/// Result of adding messages to the unreleased section
#[derive(Debug, Clone, PartialEq)]
pub struct AddMessageReport {
    pub count: usize,
    pub category: Category,
    /// Version of the section the messages went to
    pub version: Version,
    pub path: PathBuf,
}

/// Add one message, or several when `split_by` is given, to the unreleased
/// section. A new section is opened when there is none.
pub fn add_messages(
    changelog: &mut Changelog,
    category: Category,
    text: &str,
    split_by: Option<&str>,
) -> Result<AddMessageReport> {
    let pieces: Vec<&str> = match split_by {
        Some(separator) if !separator.is_empty() => text.split(separator).collect(),
        _ => vec![text],
    };
    let messages = pieces
        .into_iter()
        .filter(|piece| !piece.trim().is_empty())
        .map(|piece| Message::checked(category, piece))
        .collect::<Result<Vec<_>>>()?;
    if messages.is_empty() {
        return Err(ChangelogError::InvalidMessage(format!(
            "no message text in '{}'",
            text
        )));
    }

    let pending = changelog.last_entry().is_some_and(|e| e.is_pending());
    if !pending {
        changelog.new_entry()?;
    }

    let count = messages.len();
    let entry = changelog
        .last_entry_mut()
        .ok_or(ChangelogError::EmptyChangelog)?;
    for message in messages {
        entry.add_message(message)?;
    }
    let version = entry
        .version()
        .copied()
        .ok_or_else(|| ChangelogError::InvalidState("section has no version".to_string()))?;

    changelog.save()?;

    Ok(AddMessageReport {
        count,
        category,
        version,
        path: changelog.path().to_path_buf(),
    })
}
