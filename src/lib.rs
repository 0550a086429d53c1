//! `notes_rust` - single-user reactive note store
//!
//! This crate provides the core functionality for the `nt` CLI tool:
//! a local SQLite table of notes observed reactively through a
//! push-based live query, with all mutations serialized onto one
//! background worker lane.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Note, NewNote)
//! - [`storage`] - `SQLite` database layer (the note store)
//! - [`repo`] - Store façade: worker lane + subscription registry
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`validation`] - Caller-side field validation
//! - [`util`] - Workspace paths and database export

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod storage;
pub mod util;
pub mod validation;

use clap::Parser;

pub use error::{NoteError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logging::init(args.verbose, args.quiet);
    cli::execute(args)
}
