//! Application layer - Use cases and orchestration

pub mod add_message;
pub mod append_entry;
pub mod edit;
pub mod init;
pub mod release;
pub mod show_last;

pub use add_message::{add_messages, AddMessageReport};
pub use append_entry::{AppendEntryService, AppendReport};
pub use edit::edit;
pub use init::{init, InitReport};
pub use release::{ReleaseOptions, ReleaseOutcome, ReleaseReport, ReleaseService, ReleaseWarning};
pub use show_last::show_last;
