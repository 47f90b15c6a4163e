//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "md-changelog")]
#[command(about = "md-changelog command-line tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Text of a new changelog message
#[derive(Args, Debug)]
pub struct MessageArgs {
    /// Enter text message here
    pub message: String,

    /// Split message into several and add it as multiple entries
    #[arg(long, value_name = "SEPARATOR")]
    pub split_by: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Init new changelog
    Init {
        /// Path to project directory (default: current directory)
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },

    /// Release current version
    Release {
        /// New release version
        #[arg(short = 'v', long)]
        version: Option<String>,

        /// Don't ask changes confirmation
        #[arg(short = 'y', long)]
        force_yes: bool,
    },

    /// Append a new changelog entry
    Append {
        /// Don't call text editor after run
        #[arg(long)]
        no_edit: bool,
    },

    /// Add new message entry to the current release
    Message(MessageArgs),

    /// Add new feature entry to the current release
    Feature(MessageArgs),

    /// Add new bugfix entry to the current release
    Bugfix(MessageArgs),

    /// Add new improvement entry to the current release
    Improvement(MessageArgs),

    /// Open changelog in the editor
    Edit,

    /// Show last log entry
    Last,
}
