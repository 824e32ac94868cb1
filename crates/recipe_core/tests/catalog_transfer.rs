use recipe_core::{
    decode_import, encode_export, read_import_file, write_export_file, CatalogStore, Difficulty,
    RecipeDraft, RecipeValidationError, SkipReason,
};
use serde_json::{json, Value};

fn raw(id: &str, difficulty: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Recipe {id}"),
        "description": "imported",
        "ingredients": ["a", "b"],
        "instructions": ["mix", "bake"],
        "cuisine": "Test",
        "tags": ["x"],
        "difficulty": difficulty,
        "created_at": "2024-01-15T10:30:00",
        "updated_at": "2024-01-16T10:30:00"
    })
}

#[test]
fn import_replaces_whole_collection_and_skips_bad_records() {
    let mut store = CatalogStore::seeded();
    store
        .create(RecipeDraft {
            title: "Local".to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cuisine: String::new(),
            tags: Vec::new(),
            difficulty: Difficulty::Easy,
        })
        .unwrap();

    let count = store.import_bulk(vec![
        raw("one", "Easy"),
        raw("two", "Legendary"),
        raw("three", "Hard"),
    ]);

    assert_eq!(count, 2);
    let ids: Vec<String> = store.list_all().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["one".to_string(), "three".to_string()]);
}

#[test]
fn import_report_lists_typed_skips() {
    let mut store = CatalogStore::new();
    let mut bad_timestamp = raw("ts", "Easy");
    bad_timestamp["created_at"] = json!("yesterday");

    let report = store.import_bulk_report(vec![
        raw("ok", "Easy"),
        json!({"id": "shape", "title": "missing everything"}),
        bad_timestamp,
        raw("ok", "Medium"),
        json!("not an object"),
    ]);

    assert_eq!(report.imported, 1);
    assert_eq!(report.total(), 5);
    let indexes: Vec<usize> = report.skipped.iter().map(|s| s.index).collect();
    assert_eq!(indexes, vec![1, 2, 3, 4]);
    assert!(matches!(report.skipped[0].reason, SkipReason::Shape(_)));
    assert!(matches!(
        report.skipped[1].reason,
        SkipReason::Validation(RecipeValidationError::InvalidTimestamp {
            field: "created_at",
            ..
        })
    ));
    assert_eq!(
        report.skipped[2].reason,
        SkipReason::DuplicateId("ok".to_string())
    );
    assert_eq!(store.get("ok").unwrap().difficulty, Difficulty::Easy);
}

#[test]
fn import_of_only_bad_records_still_clears_store() {
    let mut store = CatalogStore::seeded();

    let count = store.import_bulk(vec![raw("bad", "Extreme")]);

    assert_eq!(count, 0);
    assert!(store.is_empty());
}

#[test]
fn export_import_roundtrip_preserves_ids_and_fields() {
    let mut store = CatalogStore::seeded();
    let mut payload = store.get("shuba-russia-002").unwrap().to_draft();
    payload.tags.push("edited".to_string());
    store.update("shuba-russia-002", payload).unwrap().unwrap();
    let exported = store.export_all();

    let encoded = encode_export(&exported).unwrap();
    let decoded = decode_import(encoded.as_bytes()).unwrap();
    let count = store.import_bulk(decoded);

    assert_eq!(count, exported.len());
    assert_eq!(store.export_all(), exported);
}

#[test]
fn seed_skips_malformed_records_and_keeps_existing() {
    let mut store = CatalogStore::new();
    let first = store.seed(vec![raw("a", "Easy")]);
    let second = store.seed(vec![raw("b", "nope"), raw("c", "Hard"), raw("a", "Hard")]);

    assert_eq!(first.imported, 1);
    assert_eq!(second.imported, 1);
    assert_eq!(second.skipped.len(), 2);
    let ids: Vec<String> = store.list_all().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn export_file_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.json");
    let store = CatalogStore::seeded();

    write_export_file(&path, &store.export_all()).unwrap();
    let records = read_import_file(&path).unwrap();

    let mut restored = CatalogStore::new();
    assert_eq!(restored.import_bulk(records), 3);
    assert_eq!(restored.export_all(), store.export_all());
}

#[test]
fn read_import_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_import_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, recipe_core::DecodeError::Io(_)));
}
