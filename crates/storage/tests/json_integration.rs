use std::fs;

use mindset_core::model::{ChallengeId, CompletedEntry, UserState};
use storage::json::{JsonCatalogFile, JsonStateFile};
use storage::repository::{CatalogLoadError, CatalogSource, LoadWarning, UserStateRepository};
use tempfile::TempDir;

fn sample_state() -> UserState {
    let entry = CompletedEntry::from_persisted(
        ChallengeId::new("c1"),
        "Try a new food".into(),
        "Did it!".into(),
        "2024-01-01T10:00:00".into(),
    );
    UserState::new(vec![entry], Some(ChallengeId::new("c2")))
}

#[test]
fn save_then_load_round_trips_state() {
    let dir = TempDir::new().expect("tempdir");
    let store = JsonStateFile::new(dir.path().join("user_data.json"));

    store.save(&sample_state()).expect("save");
    let loaded = store.load();

    assert!(loaded.warning.is_none());
    assert_eq!(loaded.state, sample_state());
    let entry = &loaded.state.completed_entries()[0];
    assert_eq!(entry.challenge_id().as_str(), "c1");
    assert_eq!(entry.challenge_text(), "Try a new food");
    assert_eq!(entry.reflection(), "Did it!");
    assert_eq!(entry.date_completed(), "2024-01-01T10:00:00");
    assert_eq!(
        loaded.state.current_challenge_id(),
        Some(&ChallengeId::new("c2"))
    );
}

#[test]
fn save_creates_missing_directories() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nested").join("data").join("user_data.json");
    let store = JsonStateFile::new(&path);

    store.save(&sample_state()).expect("save");
    assert!(path.exists());
}

#[test]
fn save_overwrites_previous_document() {
    let dir = TempDir::new().expect("tempdir");
    let store = JsonStateFile::new(dir.path().join("user_data.json"));

    store.save(&sample_state()).expect("first save");
    store.save(&UserState::default()).expect("second save");

    assert!(store.load().state.is_empty());
}

#[test]
fn missing_document_loads_fresh_state_without_warning() {
    let dir = TempDir::new().expect("tempdir");
    let store = JsonStateFile::new(dir.path().join("absent.json"));

    let loaded = store.load();
    assert!(loaded.state.is_empty());
    assert!(loaded.warning.is_none());
}

#[test]
fn missing_current_id_key_loads_as_none() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("user_data.json");
    fs::write(
        &path,
        r#"{"completed_entries": [{"challenge_id": "c1", "challenge_text": "Try a new food",
            "reflection": "Did it!", "date_completed": "2024-01-01T10:00:00"}]}"#,
    )
    .unwrap();

    let loaded = JsonStateFile::new(&path).load();
    assert!(loaded.warning.is_none());
    assert_eq!(loaded.state.completed_entries().len(), 1);
    assert!(loaded.state.current_challenge_id().is_none());
}

#[test]
fn corrupt_document_degrades_to_fresh_state_with_warning() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("user_data.json");
    fs::write(&path, "{ this is not json").unwrap();

    let store = JsonStateFile::new(&path);
    let loaded = store.load();
    assert!(loaded.state.is_empty());
    let Some(LoadWarning::Corrupt { moved_to, .. }) = &loaded.warning else {
        panic!("expected corrupt warning, got {:?}", loaded.warning);
    };
    assert_eq!(moved_to.as_deref(), Some(store.corrupt_backup_path().as_path()));

    // The corrupted document survives next to the fresh one.
    assert!(!path.exists());
    assert_eq!(
        fs::read_to_string(store.corrupt_backup_path()).unwrap(),
        "{ this is not json"
    );
    store.save(&sample_state()).expect("save");
    assert_eq!(
        fs::read_to_string(store.corrupt_backup_path()).unwrap(),
        "{ this is not json"
    );
}

#[test]
fn save_into_unwritable_location_reports_error() {
    let dir = TempDir::new().expect("tempdir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();
    let store = JsonStateFile::new(blocker.join("user_data.json"));

    assert!(store.save(&sample_state()).is_err());
}

#[test]
fn clear_removes_document_and_tolerates_absence() {
    let dir = TempDir::new().expect("tempdir");
    let store = JsonStateFile::new(dir.path().join("user_data.json"));
    store.save(&sample_state()).expect("save");

    store.clear().expect("clear existing");
    assert!(!store.path().exists());
    store.clear().expect("clear absent");
    assert!(store.load().state.is_empty());
}

#[test]
fn catalog_file_loads_and_reports_missing() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("challenges.json");

    let missing = JsonCatalogFile::new(&path).load_catalog().unwrap_err();
    assert!(matches!(missing, CatalogLoadError::Missing { .. }));

    fs::write(
        &path,
        r#"[{"id": "c1", "challenge": "Try a new food", "category": "Comfort Zone"},
            {"id": "c2", "challenge": "Learn a new skill"}]"#,
    )
    .unwrap();
    let catalog = JsonCatalogFile::new(&path).load_catalog().expect("catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog
            .find_by_id(&ChallengeId::new("c1"))
            .and_then(|c| c.category()),
        Some("Comfort Zone")
    );
}
