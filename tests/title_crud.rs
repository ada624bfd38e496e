use std::path::Path;

use tempfile::tempdir;
use titlenote::{CollectionStore, KvStore, Title};

fn open_store(dir: &Path) -> CollectionStore {
    CollectionStore::open(KvStore::new(dir.to_path_buf()).unwrap())
}

#[test]
fn collection_survives_reopen() {
    let dir = tempdir().unwrap();

    let (groceries_id, reading_id);
    {
        let mut store = open_store(dir.path());
        store.add_title("Groceries");
        store.add_title("Reading list");
        groceries_id = store.titles()[0].id.clone();
        reading_id = store.titles()[1].id.clone();

        store.add_note(&groceries_id, "milk");
        store.add_note(&groceries_id, "eggs");
        store.add_note(&reading_id, "The Dispossessed");
    }

    let store = open_store(dir.path());
    assert_eq!(store.titles().len(), 2);

    let groceries = store.find_title_by_id(&groceries_id).unwrap();
    assert_eq!(groceries.name, "Groceries");
    assert_eq!(groceries.notes.len(), 2);

    let reading = store.find_title_by_id(&reading_id).unwrap();
    assert_eq!(reading.notes[0].content, "The Dispossessed");
}

#[test]
fn reopen_preserves_ids_names_and_timestamps() {
    let dir = tempdir().unwrap();

    let before: Vec<Title>;
    {
        let mut store = open_store(dir.path());
        store.add_title("A");
        store.add_title("B");
        let a_id = store.titles()[0].id.clone();
        store.add_note(&a_id, "first");
        store.add_note(&a_id, "second");
        before = store.titles().to_vec();
    }

    let store = open_store(dir.path());
    assert_eq!(store.titles(), before.as_slice());
}

#[test]
fn deleting_a_title_cascades_to_its_notes_across_reopen() {
    let dir = tempdir().unwrap();

    let temp_id;
    {
        let mut store = open_store(dir.path());
        store.add_title("Temp");
        temp_id = store.titles()[0].id.clone();
        store.add_note(&temp_id, "scratch");
        store.delete_title(&temp_id);
    }

    let store = open_store(dir.path());
    assert!(store.find_title_by_id(&temp_id).is_none());
    assert!(store.notes_for_title(&temp_id).is_empty());
    assert!(store.titles().is_empty());
}

#[test]
fn fresh_directory_starts_empty() {
    let dir = tempdir().unwrap();
    let store = open_store(dir.path());
    assert!(store.titles().is_empty());
}
