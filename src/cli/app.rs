//! CLI module for the titlenote application
//!
//! This module handles the command-line interface for interacting with the
//! collection store.
use std::io::{stdin, stdout, Write};

use crate::{now_millis, Commands, CollectionStore, Note, Result, Title, TnError};

/// CLI application handler - processes CLI commands and interfaces with the
/// collection store
pub struct App {
    /// The collection store backing all title and note state
    store: CollectionStore,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application with the given store
    pub fn new(store: CollectionStore, verbose: bool) -> Self {
        Self { store, verbose }
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Add { name } => self.handle_add(name),

            Commands::List { search, json } => self.handle_list(search, json),

            Commands::Delete { id, force } => self.handle_delete(id, force),

            Commands::Note { title_id, content } => self.handle_note(title_id, content),

            Commands::Notes { title_id, json } => self.handle_notes(title_id, json),

            Commands::RemoveNote {
                title_id,
                note_id,
                force,
            } => self.handle_remove_note(title_id, note_id, force),
        }
    }

    fn handle_add(&mut self, name: String) -> Result<()> {
        if name.trim().is_empty() {
            println!("Nothing to create: the title name is empty.");
            return Ok(());
        }

        self.store.add_title(&name);

        // The new title is always appended to the end of the collection.
        if let Some(title) = self.store.titles().last() {
            println!("Title created with ID: {}", title.id);
        }

        Ok(())
    }

    /// List titles, optionally filtered by a case-insensitive substring of
    /// their name, most recent first.
    fn handle_list(&self, search: Option<String>, json: bool) -> Result<()> {
        let mut titles: Vec<&Title> = match &search {
            Some(query) => {
                let query = query.to_lowercase();
                self.store
                    .titles()
                    .iter()
                    .filter(|title| title.name.to_lowercase().contains(&query))
                    .collect()
            }
            None => self.store.titles().iter().collect(),
        };

        titles.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if titles.is_empty() {
            match search {
                Some(query) => println!("No titles match \"{}\".", query),
                None => println!("No titles yet. Use `titlenote add <name>` to get started."),
            }
            return Ok(());
        }

        if json {
            self.display_titles_json(&titles)?;
        } else {
            self.display_titles_text(&titles);
        }

        Ok(())
    }

    /// Display titles in JSON format
    fn display_titles_json(&self, titles: &[&Title]) -> Result<()> {
        let simplified: Vec<serde_json::Value> = titles
            .iter()
            .map(|title| {
                serde_json::json!({
                    "id": title.id,
                    "name": title.name,
                    "createdAt": title.created_at,
                    "notes": title.notes.len(),
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&simplified)?);
        Ok(())
    }

    /// Display titles in text format
    fn display_titles_text(&self, titles: &[&Title]) {
        for title in titles {
            let count = title.notes.len();
            println!(
                "{}  ({} {})",
                console::style(&title.name).bold(),
                count,
                if count == 1 { "note" } else { "notes" }
            );
            println!("  ID: {}", title.id);
            if self.verbose {
                println!("  Created: {}", format_timestamp(title.created_at));
            }
        }

        println!(
            "\nFound {} title{}",
            titles.len(),
            if titles.len() == 1 { "" } else { "s" }
        );
    }

    fn handle_delete(&mut self, id: String, force: bool) -> Result<()> {
        // Fetch the title first so the prompt can show what is about to go.
        let (name, note_count) = match self.store.find_title_by_id(&id) {
            Some(title) => (title.name.clone(), title.notes.len()),
            None => return Err(TnError::TitleNotFound { id }),
        };

        if !force {
            println!("You are about to delete the following title:");
            println!("ID:    {}", id);
            println!("Name:  {}", name);
            println!("Notes: {}", note_count);
            println!("\nThis will permanently delete the title and all of its notes!");

            if !self.confirm("Are you sure you want to delete this title?")? {
                println!("Deletion cancelled.");
                return Ok(());
            }
        }

        self.store.delete_title(&id);
        println!("Title '{}' ({}) has been permanently deleted.", name, id);

        Ok(())
    }

    fn handle_note(&mut self, title_id: String, content: String) -> Result<()> {
        // Blank input is the primary no-op, checked before the title lookup
        // so it never surfaces as a not-found error.
        if content.trim().is_empty() {
            println!("Nothing to save: the note is empty.");
            return Ok(());
        }

        let name = match self.store.find_title_by_id(&title_id) {
            Some(title) => title.name.clone(),
            None => return Err(TnError::TitleNotFound { id: title_id }),
        };

        self.store.add_note(&title_id, &content);
        println!("Note added to '{}'.", name);

        Ok(())
    }

    fn handle_notes(&self, title_id: String, json: bool) -> Result<()> {
        let title = match self.store.find_title_by_id(&title_id) {
            Some(title) => title,
            None => return Err(TnError::TitleNotFound { id: title_id }),
        };

        let name = title.name.clone();
        let notes = self.store.notes_for_title(&title_id);

        if notes.is_empty() {
            println!(
                "No notes under '{}' yet. Add one with `titlenote note {} <content>`.",
                name, title_id
            );
            return Ok(());
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&notes)?);
        } else {
            self.display_notes_text(&name, &notes);
        }

        Ok(())
    }

    /// Display notes in text format, newest first
    fn display_notes_text(&self, title_name: &str, notes: &[Note]) {
        // Use terminal width for formatting if available
        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);

        println!("Notes under {}\n", console::style(title_name).bold());

        for (i, note) in notes.iter().enumerate() {
            if i > 0 {
                println!("{}", "-".repeat(term_width.min(50)));
            }

            println!("{}", note.content);
            println!(
                "{}  ID: {}",
                console::style(format_relative(note.created_at)).dim(),
                note.id
            );
        }

        println!(
            "\nFound {} note{}",
            notes.len(),
            if notes.len() == 1 { "" } else { "s" }
        );
    }

    fn handle_remove_note(&mut self, title_id: String, note_id: String, force: bool) -> Result<()> {
        let title = match self.store.find_title_by_id(&title_id) {
            Some(title) => title,
            None => return Err(TnError::TitleNotFound { id: title_id }),
        };

        let note = match title.notes.iter().find(|note| note.id == note_id) {
            Some(note) => note.clone(),
            None => return Err(TnError::NoteNotFound { id: note_id }),
        };

        if !force {
            println!("You are about to delete the following note:");
            println!("ID:      {}", note.id);
            println!("Created: {}", format_timestamp(note.created_at));
            println!("\n{}", content_preview(&note.content, 100));
            println!("\nThis action cannot be undone!");

            if !self.confirm("Are you sure you want to delete this note?")? {
                println!("Deletion cancelled.");
                return Ok(());
            }
        }

        self.store.delete_note(&title_id, &note_id);
        println!("Note {} has been permanently deleted.", note_id);

        Ok(())
    }

    /// Prompt the user for a yes/no confirmation, defaulting to no.
    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{} [y/N]: ", prompt);
        stdout().flush().map_err(TnError::Io)?;

        let mut input = String::new();
        stdin().read_line(&mut input).map_err(TnError::Io)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}

/// Format an epoch-milliseconds timestamp for display
fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Format an epoch-milliseconds timestamp as a rough "time ago" stamp
fn format_relative(millis: i64) -> String {
    let seconds = (now_millis() - millis).max(0) / 1000;

    if seconds < 60 {
        return "just now".to_string();
    }

    let (value, unit) = if seconds < 3600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3600, "hour")
    } else {
        (seconds / 86_400, "day")
    };

    format!("{} {}{} ago", value, unit, if value == 1 { "" } else { "s" })
}

/// First non-empty line of a note, truncated to `max_len` characters for
/// prompts. Truncation counts characters, not bytes, so multibyte content
/// never splits mid-character.
fn content_preview(content: &str, max_len: usize) -> String {
    let first_line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    match first_line.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &first_line[..cut]),
        None => first_line.to_string(),
    }
}
