//! The collection store: in-memory authority for all title and note state.
//!
//! Every mutation flows through a [`CollectionStore`] and is written through
//! in full to the underlying [`KvStore`]. Operations are total over their
//! inputs: blank input and missing ids are silent no-ops, and the only
//! failure surface is the persistence write, which costs durability for the
//! session rather than aborting the mutation (fail-soft, logged, never
//! propagated).

use log::{debug, info, warn};

use crate::{KvStore, Note, Title};

/// Storage key the full title collection is persisted under.
const TITLES_KEY: &str = "titles";

/// Owns the canonical in-memory sequence of titles. Constructed once at
/// application start and handed to consumers; there is exactly one logical
/// writer, so no locking discipline is needed.
pub struct CollectionStore {
    /// The canonical title collection, insertion-ordered
    titles: Vec<Title>,
    /// Write-through persistence backend
    storage: KvStore,
}

impl CollectionStore {
    /// Opens the store, loading any previously persisted collection. A
    /// missing or unreadable collection starts the session empty.
    pub fn open(storage: KvStore) -> Self {
        let titles: Vec<Title> = storage.read(TITLES_KEY, Vec::new());
        info!("Loaded {} titles from storage", titles.len());
        Self { titles, storage }
    }

    /// All titles in insertion order.
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    /// Creates a new title with the given name and appends it to the
    /// collection. Whitespace-only names are ignored.
    pub fn add_title(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring empty title name");
            return;
        }

        let title = Title::new(name.to_string());
        info!("Created title '{}' ({})", title.name, title.id);
        self.titles.push(title);
        self.persist();
    }

    /// Removes the title matching `id` along with all of its notes. Missing
    /// ids are a no-op.
    pub fn delete_title(&mut self, id: &str) {
        let before = self.titles.len();
        self.titles.retain(|title| title.id != id);

        if self.titles.len() == before {
            debug!("No title with id {} to delete", id);
            return;
        }

        info!("Deleted title {}", id);
        self.persist();
    }

    /// Linear lookup of a title by id.
    pub fn find_title_by_id(&self, id: &str) -> Option<&Title> {
        self.titles.iter().find(|title| title.id == id)
    }

    /// Returns the notes for a title sorted most recent first. A missing
    /// title yields an empty list.
    pub fn notes_for_title(&self, id: &str) -> Vec<Note> {
        match self.find_title_by_id(id) {
            Some(title) => {
                let mut notes = title.notes.clone();
                notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                notes
            }
            None => Vec::new(),
        }
    }

    /// Appends a new note to the title matching `title_id`. Whitespace-only
    /// content and missing titles are no-ops.
    pub fn add_note(&mut self, title_id: &str, content: &str) {
        let content = content.trim();
        if content.is_empty() {
            debug!("Ignoring empty note content");
            return;
        }

        let Some(title) = self.titles.iter_mut().find(|title| title.id == title_id) else {
            debug!("No title with id {}, note not added", title_id);
            return;
        };

        let note = Note::new(content.to_string());
        info!("Added note {} to title {}", note.id, title_id);
        title.notes.push(note);
        self.persist();
    }

    /// Removes the note matching `note_id` from the title matching
    /// `title_id`. A no-op when either is absent, and idempotent.
    pub fn delete_note(&mut self, title_id: &str, note_id: &str) {
        let Some(title) = self.titles.iter_mut().find(|title| title.id == title_id) else {
            debug!("No title with id {}, nothing to delete", title_id);
            return;
        };

        let before = title.notes.len();
        title.notes.retain(|note| note.id != note_id);

        if title.notes.len() == before {
            debug!("No note with id {} in title {}", note_id, title_id);
            return;
        }

        info!("Deleted note {} from title {}", note_id, title_id);
        self.persist();
    }

    /// Writes the whole collection through to storage. A failed write is
    /// logged and absorbed: the in-memory state remains authoritative for
    /// the session, only durability is lost until the next successful write.
    fn persist(&self) {
        if let Err(e) = self.storage.write(TITLES_KEY, &self.titles) {
            warn!("Failed to persist titles, change kept in memory only: {}", e);
        }
    }
}
