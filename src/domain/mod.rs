//! Domain layer - Changelog document model

pub mod changelog;
pub mod entry;
pub mod tokens;

pub use changelog::Changelog;
pub use entry::LogEntry;
pub use tokens::{Category, Date, Message, Token, Version};
