//! TitleNote note-taking application library
//!
//! This library provides functionality for organizing free-text notes under
//! named titles, with every change written through to a local JSON store.

mod cli;
mod config;
mod errors;
mod note;
mod storage;
mod store;
mod types;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use note::*;
pub use storage::*;
pub use store::*;
pub use types::*;
