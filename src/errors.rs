//! Error types for the titlenote application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur while managing titles and notes.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the titlenote application.
#[derive(Error, Debug)]
pub enum TnError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Title was not found when performing an operation.
    #[error("Title not found: {id}")]
    TitleNotFound { id: String },

    /// Note was not found within the given title.
    #[error("Note not found: {id}")]
    NoteNotFound { id: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },
}
