//! Date token: `YYYY-MM-DD` or `UNRELEASED`

use super::Token;
use crate::error::Result;
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const DATE_FORMAT: &str = "%Y-%m-%d";
const UNRELEASED: &str = "UNRELEASED";

fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\d{4}-\d{2}-\d{2}|UNRELEASED").unwrap())
}

/// Release date of a changelog section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Date {
    /// Section has been released on this day
    Released(NaiveDate),
    /// Section is still waiting for a release
    Unreleased,
}

impl Date {
    /// Today's local date
    pub fn today() -> Self {
        Date::Released(Local::now().date_naive())
    }

    pub fn is_unreleased(&self) -> bool {
        matches!(self, Date::Unreleased)
    }

    /// Find the first date (or `UNRELEASED` marker) in a line.
    ///
    /// A match that is not a real calendar day yields `None`.
    pub fn search(text: &str) -> Option<Self> {
        let found = date_regex().find(text)?.as_str();
        if found == UNRELEASED {
            return Some(Date::Unreleased);
        }
        NaiveDate::parse_from_str(found, DATE_FORMAT)
            .ok()
            .map(Date::Released)
    }
}

impl Default for Date {
    fn default() -> Self {
        Date::today()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::Released(date)
    }
}

impl Token for Date {
    fn parse(text: &str) -> Result<Option<Self>> {
        Ok(Self::search(text))
    }

    fn render(&self) -> String {
        match self {
            Date::Released(date) => date.format(DATE_FORMAT).to_string(),
            Date::Unreleased => UNRELEASED.to_string(),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
