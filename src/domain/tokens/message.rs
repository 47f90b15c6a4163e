//! Message token: `* [Category] text` lines of a section

use super::Token;
use crate::error::{ChangelogError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn message_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\* (?:\[(\w+)\])? ?(.*)$").unwrap())
}

/// Kind of a changelog message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Plain message without a tag
    #[default]
    Message,
    Feature,
    Bugfix,
    Improvement,
}

impl Category {
    /// Bracket tag rendered in front of the text; plain messages have none
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Category::Message => None,
            Category::Feature => Some("Feature"),
            Category::Bugfix => Some("Bugfix"),
            Category::Improvement => Some("Improvement"),
        }
    }

    /// Lowercase name, as used by the command line
    pub fn name(&self) -> &'static str {
        match self {
            Category::Message => "message",
            Category::Feature => "feature",
            Category::Bugfix => "bugfix",
            Category::Improvement => "improvement",
        }
    }
}

impl FromStr for Category {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "message" => Ok(Category::Message),
            "feature" => Ok(Category::Feature),
            "bugfix" => Ok(Category::Bugfix),
            "improvement" => Ok(Category::Improvement),
            _ => Err(ChangelogError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of a changelog section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub category: Category,
    pub text: String,
}

impl Message {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Message {
            category,
            text: text.into(),
        }
    }

    /// Build a message from user input.
    ///
    /// The text is trimmed and must survive a render/parse cycle: it has to
    /// fit on one line, and a plain message must not start with a `[Tag]`
    /// that would be read back as a category.
    pub fn checked(category: Category, text: &str) -> Result<Self> {
        if text.contains(['\n', '\r']) {
            return Err(ChangelogError::InvalidMessage(
                "text must be a single line".to_string(),
            ));
        }

        let message = Self::new(category, text.trim());
        if category == Category::Message && tag_prefix_regex().is_match(&message.text) {
            return Err(ChangelogError::InvalidMessage(format!(
                "plain message '{}' starts with a [Tag]; use a category command instead",
                message.text
            )));
        }

        Ok(message)
    }

    /// Plain message without a category tag
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Category::Message, text)
    }

    /// Whether the line is shaped like a message bullet
    pub fn is_bullet(line: &str) -> bool {
        message_regex().is_match(line)
    }
}

fn tag_prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\[\w+\]").unwrap())
}

impl Token for Message {
    fn parse(text: &str) -> Result<Option<Self>> {
        let Some(caps) = message_regex().captures(text) else {
            return Ok(None);
        };

        let category = match caps.get(1) {
            Some(tag) => tag.as_str().parse()?,
            None => Category::Message,
        };
        let body = caps.get(2).map_or("", |m| m.as_str());

        Ok(Some(Message::new(category, body)))
    }

    fn render(&self) -> String {
        match self.category.tag() {
            Some(tag) => format!("[{}] {}", tag, self.text),
            None => self.text.clone(),
        }
    }
}
