//! Version token: `MAJOR.MINOR.PATCH[+DEV]`

use super::Token;
use crate::error::{ChangelogError, Result};
use regex::{Captures, Regex};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Version of the first section of a fresh changelog (before the dev suffix)
pub const INIT_VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
    dev: None,
};

fn version_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)(?:\+(\d+))?").unwrap())
}

fn exact_version_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:\+(\d+))?$").unwrap())
}

/// Release version with an optional development counter.
///
/// A version without the `+N` counter is released. Comparison only looks at
/// the numeric `(major, minor, patch)` triple, so `1.0.0+1 == 1.0.0`.
#[derive(Debug, Clone, Copy)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub dev: Option<u64>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            dev: None,
        }
    }

    /// Same version carrying a development counter
    pub fn with_dev(self, dev: u64) -> Self {
        Version {
            dev: Some(dev),
            ..self
        }
    }

    /// A version is released when it has no development counter
    pub fn is_released(&self) -> bool {
        self.dev.is_none()
    }

    /// Next development version: the counter is incremented (absent counts as 0)
    pub fn next_dev(&self) -> Self {
        self.with_dev(self.dev.unwrap_or(0) + 1)
    }

    /// Find the first version in a line
    pub fn search(text: &str) -> Option<Self> {
        version_regex()
            .captures(text)
            .and_then(|caps| Self::from_captures(&caps))
    }

    fn from_captures(caps: &Captures) -> Option<Self> {
        let major = caps[1].parse().ok()?;
        let minor = caps[2].parse().ok()?;
        let patch = caps[3].parse().ok()?;
        let dev = match caps.get(4) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };

        Some(Version {
            major,
            minor,
            patch,
            dev,
        })
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl Token for Version {
    fn parse(text: &str) -> Result<Option<Self>> {
        Ok(Self::search(text))
    }

    fn render(&self) -> String {
        match self.dev {
            Some(dev) => format!("{}.{}.{}+{}", self.major, self.minor, self.patch, dev),
            None => format!("{}.{}.{}", self.major, self.minor, self.patch),
        }
    }
}

impl FromStr for Version {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self> {
        exact_version_regex()
            .captures(s.trim())
            .and_then(|caps| Self::from_captures(&caps))
            .ok_or_else(|| ChangelogError::InvalidVersion(s.to_string()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}
