//! Tests for loading state snapshots and locale files from disk

use std::path::PathBuf;

use tempfile::TempDir;

use modcat::errors::StateError;
use modcat::model::StateSnapshot;
use modcat::subtitle::{Translate, Translations};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write file");
    path
}

#[test]
fn given_state_file_when_loading_then_categories_and_mods_parse() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "state.json",
        r#"{
            "categories": {
                "weapons": { "name": "Weapons", "order": 0 },
                "swords": { "name": "Swords", "parentCategory": "weapons", "order": 1 }
            },
            "mods": {
                "sword-of-testing": {
                    "attributes": { "category": "swords", "version": "2.1" },
                    "state": "installed"
                },
                "unsorted-mod": { "attributes": {} }
            }
        }"#,
    );

    // Act
    let snapshot = StateSnapshot::load(&path).unwrap();

    // Assert
    assert_eq!(snapshot.categories.len(), 2);
    assert_eq!(
        snapshot.categories["swords"].parent_category.as_deref(),
        Some("weapons")
    );
    assert_eq!(snapshot.mods.len(), 2);
    assert_eq!(
        snapshot.mods["sword-of-testing"].attributes.category.as_deref(),
        Some("swords")
    );
    assert_eq!(snapshot.mods["unsorted-mod"].attributes.category, None);
}

#[test]
fn given_empty_object_when_loading_then_maps_default_empty() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "state.json", "{}");

    let snapshot = StateSnapshot::load(&path).unwrap();

    assert!(snapshot.categories.is_empty());
    assert!(snapshot.mods.is_empty());
}

#[test]
fn given_missing_file_when_loading_then_io_error_carries_path() {
    let result = StateSnapshot::load(&PathBuf::from("/nonexistent/state.json"));

    match result {
        Err(StateError::Io { path, .. }) => {
            assert_eq!(path, PathBuf::from("/nonexistent/state.json"))
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn given_malformed_json_when_loading_then_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "state.json", "{ not json");

    let result = StateSnapshot::load(&path);

    assert!(matches!(result, Err(StateError::Parse { .. })));
}

#[test]
fn given_locale_file_when_loading_then_translations_apply() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "de.json",
        r#"{ "{{count}} mods": "{{count}} Mods" }"#,
    );

    let translations = Translations::load(&path).unwrap();

    assert_eq!(translations.translate("{{count}} mods"), "{{count}} Mods");
    assert_eq!(translations.translate("unknown key"), "unknown key");
}
