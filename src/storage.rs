//! Persistent key-value storage for the titlenote application.
//!
//! A [`KvStore`] holds named JSON values under a single data directory, one
//! file per key. Reads are fail-soft: a missing or unparsable value falls
//! back to a caller-supplied default with a logged warning. Writes return an
//! explicit `Result`; the caller decides whether a lost write is fatal.

use std::{fs, io::Write, path::PathBuf};

use log::{debug, error, trace, warn};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::{Result, TnError};

/// Durable read/write of named JSON values, surviving process restarts.
pub struct KvStore {
    /// Directory where values are stored, one `<key>.json` file each
    data_dir: PathBuf,
}

impl KvStore {
    /// Creates a store rooted at `data_dir`, creating the directory if it
    /// does not exist yet.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        if !data_dir.exists() {
            debug!(
                "Data directory does not exist, creating: {}",
                data_dir.display()
            );
            fs::create_dir_all(&data_dir).map_err(|e| {
                error!("Failed to create data directory: {}", e);
                TnError::DirectoryError {
                    path: data_dir.clone(),
                }
            })?;
        }

        Ok(Self { data_dir })
    }

    /// Helper method to get the file path backing a key
    fn value_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Returns the value stored under `key`, or `default` when the key is
    /// absent or its content cannot be parsed.
    ///
    /// Failures never reach the caller; they are logged and absorbed here so
    /// a corrupt store degrades to an empty one instead of aborting startup.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.value_path(key);

        if !path.exists() {
            debug!("No stored value for key '{}', using default", key);
            return default;
        }

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Failed to read stored value {}: {}, using default",
                    path.display(),
                    e
                );
                return default;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => {
                trace!("Loaded stored value for key '{}'", key);
                value
            }
            Err(e) => {
                warn!(
                    "Stored value for key '{}' is unparsable, using default: {}",
                    key, e
                );
                default
            }
        }
    }

    /// Serializes `value` to JSON and stores it under `key` using atomic
    /// operations to prevent data corruption.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.value_path(key);
        debug!("Writing value for key '{}' to {}", key, path.display());

        let json = serde_json::to_string_pretty(value)?;

        // Write to a temporary file in the same directory, then atomically
        // move it over the target so readers never observe a partial value.
        let mut temp_file = NamedTempFile::new_in(&self.data_dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            TnError::Io(e)
        })?;

        temp_file.write_all(json.as_bytes()).map_err(|e| {
            error!("Failed to write to temporary file: {}", e);
            TnError::Io(e)
        })?;

        temp_file.flush().map_err(|e| {
            error!("Failed to flush temporary file: {}", e);
            TnError::Io(e)
        })?;

        temp_file.persist(&path).map_err(|e| {
            error!("Failed to persist file {}: {}", path.display(), e.error);
            TnError::Io(e.error)
        })?;

        trace!("Value for key '{}' written successfully", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Note, Title};
    use tempfile::tempdir;

    #[test]
    fn read_missing_key_returns_default() {
        let dir = tempdir().unwrap();
        let store = KvStore::new(dir.path().to_path_buf()).unwrap();

        let titles: Vec<Title> = store.read("titles", Vec::new());
        assert!(titles.is_empty());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let store = KvStore::new(dir.path().to_path_buf()).unwrap();

        let mut title = Title::new("Groceries".to_string());
        title.notes.push(Note::new("milk".to_string()));
        title.notes.push(Note::new("eggs".to_string()));
        let titles = vec![title];

        store.write("titles", &titles).unwrap();
        let loaded: Vec<Title> = store.read("titles", Vec::new());

        assert_eq!(loaded, titles);
    }

    #[test]
    fn unparsable_value_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let store = KvStore::new(dir.path().to_path_buf()).unwrap();

        fs::write(dir.path().join("titles.json"), "not valid json").unwrap();

        let titles: Vec<Title> = store.read("titles", Vec::new());
        assert!(titles.is_empty());
    }

    #[test]
    fn persisted_layout_uses_camel_case_fields() {
        let dir = tempdir().unwrap();
        let store = KvStore::new(dir.path().to_path_buf()).unwrap();

        let mut title = Title::new("Layout".to_string());
        title.notes.push(Note::new("entry".to_string()));
        store.write("titles", &vec![title]).unwrap();

        let text = fs::read_to_string(dir.path().join("titles.json")).unwrap();
        assert!(text.contains("\"createdAt\""));
        assert!(text.contains("\"notes\""));
        assert!(!text.contains("\"created_at\""));
    }
}
