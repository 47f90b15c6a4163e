//! Changelog section: `version (date)` header plus messages

use crate::domain::tokens::{Date, Message, Token, Version};
use crate::error::{ChangelogError, Result};

/// One versioned section of the changelog.
///
/// An entry starts empty and becomes *declared* once it has a version and a
/// date, or an unreleased version alone. Messages can only be added to a
/// declared entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogEntry {
    version: Option<Version>,
    date: Option<Date>,
    messages: Vec<Message>,
}

impl LogEntry {
    /// Create an empty, undeclared entry
    pub fn new() -> Self {
        LogEntry::default()
    }

    /// Create a declared entry from a version and a date
    pub fn declared(version: Version, date: Date) -> Self {
        LogEntry {
            version: Some(version),
            date: Some(date),
            messages: Vec::new(),
        }
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn date(&self) -> Option<&Date> {
        self.date.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_declared(&self) -> bool {
        match (&self.version, &self.date) {
            (Some(_), Some(_)) => true,
            (Some(version), None) => !version.is_released(),
            _ => false,
        }
    }

    /// Still waiting for a release: dev version or no concrete date
    pub fn is_pending(&self) -> bool {
        let dev_version = self.version.is_some_and(|v| !v.is_released());
        let undated = self.date.is_none_or(|d| d.is_unreleased());
        dev_version || undated
    }

    /// Set the version; only an absent or unreleased version can be replaced
    pub fn set_version(&mut self, version: Version) -> Result<()> {
        match self.version {
            Some(current) if current.is_released() => Err(ChangelogError::InvalidState(format!(
                "can't set version {} because released version {} already exists",
                version, current
            ))),
            _ => {
                self.version = Some(version);
                Ok(())
            }
        }
    }

    /// Set the date; a concrete date can only be replaced while the version
    /// is unreleased
    pub fn set_date(&mut self, date: Date) -> Result<()> {
        let date_is_open = self.date.is_none_or(|d| d.is_unreleased());
        let version_is_open = self.version.is_some_and(|v| !v.is_released());

        if date_is_open || version_is_open {
            self.date = Some(date);
            Ok(())
        } else {
            Err(ChangelogError::InvalidState(format!(
                "can't set date {} because the entry is already released",
                date
            )))
        }
    }

    pub fn add_message(&mut self, message: Message) -> Result<()> {
        if !self.is_declared() {
            return Err(ChangelogError::InvalidState(format!(
                "can't add message '{}' to an undeclared entry",
                message.render()
            )));
        }
        self.messages.push(message);
        Ok(())
    }

    /// Header line, e.g. `1.2.0 (2016-03-11)`
    pub fn header(&self) -> Result<String> {
        match (&self.version, self.is_declared()) {
            (Some(version), true) => {
                let date = self.date.unwrap_or(Date::Unreleased);
                Ok(format!("{} ({})", version.render(), date.render()))
            }
            _ => Err(ChangelogError::InvalidState(
                "can't render an undeclared entry".to_string(),
            )),
        }
    }

    /// Full section text: header, underline and message bullets
    pub fn render(&self) -> Result<String> {
        let header = self.header()?;
        let underline = "-".repeat(header.chars().count());
        let mut lines = vec![header, underline];
        lines.extend(self.messages.iter().map(|m| format!("* {}", m.render())));
        Ok(lines.join("\n"))
    }

    /// Classify a line as a section header.
    ///
    /// Message bullets are never headers. A released version without a date
    /// is an ambiguous header and fails with `MalformedHeader`.
    pub fn is_header(line: &str) -> Result<bool> {
        if Message::is_bullet(line) {
            return Ok(false);
        }
        let Some(version) = Version::search(line) else {
            return Ok(false);
        };
        if Date::search(line).is_some() || !version.is_released() {
            return Ok(true);
        }
        Err(ChangelogError::MalformedHeader(line.to_string()))
    }

    pub fn is_message(line: &str) -> Result<bool> {
        Ok(Message::parse(line)?.is_some())
    }
}
