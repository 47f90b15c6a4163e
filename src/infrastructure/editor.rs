//! Editor integration for opening the changelog

use crate::error::{ChangelogError, Result};
use std::path::Path;
use std::process::Command;

/// Something that lets the user edit a file
pub trait Editor {
    /// Open the file and wait until editing is done.
    ///
    /// Returns the editor's exit code (`None` if it was killed by a signal).
    fn open(&self, file_path: &Path) -> Result<Option<i32>>;
}

/// Session for opening files in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            return ("vi".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

impl Editor for EditorSession {
    fn open(&self, file_path: &Path) -> Result<Option<i32>> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program).args(&all_args);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new(&program);
            cmd.args(&all_args);
            cmd
        };

        let status = cmd.status().map_err(|e| {
            ChangelogError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        Ok(status.code())
    }
}
