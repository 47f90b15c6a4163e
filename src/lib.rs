//! md-changelog - Human-edited, machine-parseable changelogs
//!
//! Maintains a markdown changelog where messages are appended to an
//! unreleased section that is later released with a version and a date.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChangelogError;
