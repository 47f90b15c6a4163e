//! Header and message tokens of a changelog document
//!
//! Every token is parsed from a single line and rendered back to its
//! canonical text. Rendering is the left inverse of parsing:
//! `T::parse(&t.render())` yields a token that renders to the same text.

pub mod date;
pub mod message;
pub mod version;

pub use date::Date;
pub use message::{Category, Message};
pub use version::Version;

use crate::error::Result;

/// A parseable, renderable unit of a header or message line
pub trait Token: Sized {
    /// Parse the first occurrence of the token in `text`.
    ///
    /// Returns `Ok(None)` when the line does not contain the token.
    fn parse(text: &str) -> Result<Option<Self>>;

    /// Canonical text of the token
    fn render(&self) -> String;
}
