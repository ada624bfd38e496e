//! Shared types for the titlenote application.
//!
//! This module holds the crate-wide `Result` alias and the CLI subcommand
//! definitions.

use clap::Subcommand;

use crate::TnError;

/// A specialized Result type for titlenote operations.
pub type Result<T> = std::result::Result<T, TnError>;

/// Available subcommands for the titlenote application
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new title
    Add {
        /// Name of the title
        name: String,
    },

    /// List titles, most recent first
    List {
        /// Filter titles by a case-insensitive substring of their name
        #[clap(short, long)]
        search: Option<String>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Delete a title and all of its notes
    Delete {
        /// ID of the title to delete
        id: String,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Add a note to a title
    Note {
        /// ID of the title the note belongs to
        title_id: String,

        /// Free-text note content
        content: String,
    },

    /// Show the notes for a title, newest first
    Notes {
        /// ID of the title
        title_id: String,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Delete a single note from a title
    RemoveNote {
        /// ID of the title the note belongs to
        title_id: String,

        /// ID of the note to delete
        note_id: String,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },
}
