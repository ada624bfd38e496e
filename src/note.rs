//! Core data structures for the titlenote application.
//!
//! This module contains the primary entities of the system: a `Title` is a
//! named collection, and a `Note` is a single free-text entry belonging to
//! exactly one title. Both carry immutable ids and creation timestamps.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current wall-clock time as epoch milliseconds, the unit used by the
/// persisted layout.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A single free-text note belonging to one title.
///
/// Serialized field names follow the persisted camelCase layout so the
/// stored document stays compatible with earlier exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier for the note
    pub id: String,
    /// Free-text note content
    pub content: String,
    /// When the note was created, epoch milliseconds
    pub created_at: i64,
}

impl Note {
    /// Creates a new note with the given content, a fresh random id, and the
    /// current timestamp.
    pub fn new(content: String) -> Self {
        Note {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: now_millis(),
        }
    }
}

/// A named collection of notes, the top-level organizing entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    /// Unique identifier for the title
    pub id: String,
    /// Display name of the title
    pub name: String,
    /// Notes belonging to this title, in insertion order
    pub notes: Vec<Note>,
    /// When the title was created, epoch milliseconds
    pub created_at: i64,
}

impl Title {
    /// Creates a new title with the given name and no notes.
    pub fn new(name: String) -> Self {
        Title {
            id: Uuid::new_v4().to_string(),
            name,
            notes: Vec::new(),
            created_at: now_millis(),
        }
    }
}
