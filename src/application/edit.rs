//! Edit changelog use case

use crate::error::Result;
use crate::infrastructure::Editor;
use std::path::Path;

/// Open the changelog in the editor and wait for it to close
pub fn edit<E: Editor>(editor: &E, changelog_path: &Path) -> Result<Option<i32>> {
    editor.open(changelog_path)
}
