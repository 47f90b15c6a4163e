//! Append entry use case

use crate::domain::Changelog;
use crate::error::Result;
use crate::infrastructure::Editor;

/// Result of appending a new section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendReport {
    /// Header of the new section, e.g. `1.2.0+1 (UNRELEASED)`
    pub header: String,
}

/// Service opening a new unreleased section
pub struct AppendEntryService<E> {
    editor: E,
}

impl<E: Editor> AppendEntryService<E> {
    pub fn new(editor: E) -> Self {
        AppendEntryService { editor }
    }

    /// Add a new unreleased section on top and save.
    /// Opens the file in the editor only when `open_in_editor` is true.
    pub fn execute(&self, changelog: &mut Changelog, open_in_editor: bool) -> Result<AppendReport> {
        let header = changelog.new_entry()?.header()?;
        changelog.save()?;

        if open_in_editor {
            self.editor.open(changelog.path())?;
        }

        Ok(AppendReport { header })
    }
}
