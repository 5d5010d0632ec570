//! End-to-end registry scenarios: create, read back, mutate, export, delete.

use devfolio_files::{Exporter, FileKind, FileRegistry};
use std::fs;
use tempfile::TempDir;

/// Create, read back, delete on an empty registry.
#[test]
fn test_create_get_delete_round() {
    let mut registry = FileRegistry::new();
    assert!(registry.is_empty());

    let file = registry.create_file("notes.md", "hello");
    assert_eq!(file.kind, FileKind::Markdown);
    assert_eq!(file.content, "hello");

    let fetched = registry.get_file(file.id.as_str()).unwrap();
    assert_eq!(fetched, &file);

    assert!(registry.delete_file(file.id.as_str()));
    assert!(registry.get_file(file.id.as_str()).is_none());
}

/// A saved registry file can also be exported under a new name without
/// touching the registry copy.
#[test]
fn test_export_does_not_mutate_registry() {
    let temp_dir = TempDir::new().unwrap();
    let exporter = Exporter::new(temp_dir.path());

    let mut registry = FileRegistry::new();
    let file = registry.create_file("draft.txt", "v1");
    registry.update_file(file.id.as_str(), "v2");

    let content = registry.get_file(file.id.as_str()).unwrap().content.clone();
    let path = exporter.export("final.txt", &content).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "v2");
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get_file(file.id.as_str()).unwrap().name, "draft.txt");
}

/// Uploads and manual files share one id sequence.
#[test]
fn test_upload_shares_id_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("styles.css");
    fs::write(&path, "body {}").unwrap();

    let mut registry = FileRegistry::new();
    let first = registry.create_file("a.txt", "");
    let uploaded = registry.create_from_upload(&path).unwrap();

    assert_eq!(first.id.as_str(), "file-1");
    assert_eq!(uploaded.id.as_str(), "file-2");
    assert_eq!(uploaded.kind, FileKind::File);
}

/// Many mutations keep modification times monotonic.
#[test]
fn test_modified_at_monotonic_over_edits() {
    let mut registry = FileRegistry::new();
    let file = registry.create_file("log.txt", "");
    let mut last = file.modified_at;

    for i in 0..50 {
        if i % 2 == 0 {
            assert!(registry.update_file(file.id.as_str(), format!("line {i}")));
        } else {
            assert!(registry.rename_file(file.id.as_str(), format!("log-{i}.txt")));
        }
        let current = registry.get_file(file.id.as_str()).unwrap().modified_at;
        assert!(current >= last);
        last = current;
    }
}
