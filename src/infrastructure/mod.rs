//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod prompt;
pub mod repository;

pub use config::{Config, CHANGELOG_NAME, CONFIG_NAME};
pub use editor::{Editor, EditorSession};
pub use prompt::{Prompt, StdinPrompt};
pub use repository::{FileSystemRepository, ProjectRepository};
