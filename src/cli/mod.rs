//! Command-line interface for `notes_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.
//! The CLI is this repository's presentation surface: it validates
//! input, submits intents to the repository, and renders snapshots.

pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// `notes_rust` (nt) - single-user reactive note store.
#[derive(Parser, Debug)]
#[command(name = "nt")]
#[command(
    author,
    version,
    about = "Single-user reactive note store (SQLite)",
    long_about = None,
    after_help = "Local-only: no networking, no sync, no daemons."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a notes workspace
    Init {
        /// Recreate the database even if one exists
        #[arg(long)]
        force: bool,
    },

    /// Add a note
    Add {
        /// Note title
        title: String,

        /// Note content
        content: String,

        /// Snapshot the database after adding
        #[arg(long)]
        export: bool,
    },

    /// List all notes (alias: ls)
    #[command(alias = "ls")]
    List,

    /// Delete a note by id (alias: rm)
    #[command(alias = "rm")]
    Delete {
        /// Id of the note to delete
        id: i64,
    },

    /// Delete every note (alias: reset)
    #[command(alias = "reset")]
    Clear,

    /// Copy the database file to a backup location
    Export {
        /// Destination directory (default: config export_dir, then ./notes-export)
        dest: Option<std::path::PathBuf>,
    },

    /// Stream live snapshots until interrupted
    Watch,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Route a parsed CLI invocation to its command.
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => commands::init::execute(force)?,
        Commands::Add {
            title,
            content,
            export,
        } => commands::add::execute(&title, &content, export)?,
        Commands::List => commands::list::execute(cli.json)?,
        Commands::Delete { id } => commands::delete::execute(id)?,
        Commands::Clear => commands::clear::execute()?,
        Commands::Export { dest } => commands::export::execute(dest.as_deref())?,
        Commands::Watch => commands::watch::execute(cli.json)?,
        Commands::Completions { shell } => commands::completions::execute(shell),
    }
    Ok(())
}
