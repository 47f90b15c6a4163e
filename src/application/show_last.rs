//! Show last entry use case

use crate::domain::Changelog;
use crate::error::Result;

/// Rendered most recent section, or `None` for an empty changelog
pub fn show_last(changelog: &Changelog) -> Result<Option<String>> {
    changelog.last_entry().map(|entry| entry.render()).transpose()
}
