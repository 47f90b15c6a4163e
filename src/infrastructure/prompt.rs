//! Confirmation prompts on the terminal

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Asks the user a question and returns the typed answer
pub trait Prompt {
    fn ask(&self, question: &str) -> Result<String>;
}

/// Prompt reading answers from standard input
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&self, question: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", question)?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }
}
