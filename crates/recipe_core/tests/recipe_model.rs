use chrono::{TimeZone, Utc};
use recipe_core::{Difficulty, RawRecipe, Recipe, RecipeDraft, RecipeValidationError};
use serde_json::json;

fn draft() -> RecipeDraft {
    RecipeDraft {
        title: "Test Recipe".to_string(),
        description: "A test recipe".to_string(),
        ingredients: vec!["ingredient 1".to_string(), "ingredient 2".to_string()],
        instructions: vec!["First, do step 1.".to_string(), "Then, do step 2.".to_string()],
        cuisine: "Test Cuisine".to_string(),
        tags: vec!["test".to_string(), "easy".to_string()],
        difficulty: Difficulty::Easy,
    }
}

#[test]
fn from_draft_sets_equal_timestamps() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let recipe = Recipe::from_draft("abc", draft(), now);

    assert_eq!(recipe.id, "abc");
    assert_eq!(recipe.created_at, now);
    assert_eq!(recipe.updated_at, now);
    assert_eq!(recipe.to_draft(), draft());
    recipe.validate().unwrap();
}

#[test]
fn replace_with_keeps_identity_and_clamps_updated_at() {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let mut recipe = Recipe::from_draft("abc", draft(), created);

    let earlier = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let mut replacement = draft();
    replacement.title = "Other".to_string();
    recipe.replace_with(replacement, earlier);

    assert_eq!(recipe.id, "abc");
    assert_eq!(recipe.title, "Other");
    assert_eq!(recipe.created_at, created);
    assert_eq!(recipe.updated_at, created);
}

#[test]
fn draft_validate_rejects_blank_title() {
    let mut payload = draft();
    payload.title = "   ".to_string();
    assert_eq!(payload.validate().unwrap_err(), RecipeValidationError::EmptyTitle);
}

#[test]
fn recipe_serialization_uses_expected_wire_fields() {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let recipe = Recipe::from_draft("poutine-canada-001", draft(), now);

    let value = serde_json::to_value(&recipe).unwrap();
    assert_eq!(value["id"], "poutine-canada-001");
    assert_eq!(value["difficulty"], "Easy");
    assert_eq!(value["created_at"], "2024-01-15T10:30:00Z");
    assert_eq!(value["ingredients"][1], "ingredient 2");

    let decoded: Recipe = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, recipe);
}

#[test]
fn draft_deserialize_rejects_unknown_difficulty() {
    let value = json!({
        "title": "t",
        "description": "d",
        "ingredients": [],
        "instructions": [],
        "cuisine": "c",
        "tags": [],
        "difficulty": "Impossible"
    });
    let err = serde_json::from_value::<RecipeDraft>(value).unwrap_err();
    assert!(err.to_string().contains("Impossible"), "unexpected error: {err}");
}

#[test]
fn raw_recipe_keeps_supplied_id_and_timestamps() {
    let now = Utc::now();
    let raw = RawRecipe::from_value(json!({
        "id": "fixed-id",
        "title": "Shuba",
        "description": "layered salad",
        "ingredients": ["herring"],
        "instructions": ["layer"],
        "cuisine": "Russian",
        "tags": [],
        "difficulty": "medium",
        "created_at": "2024-01-20T14:45:00",
        "updated_at": "2024-01-21T14:45:00"
    }))
    .unwrap();

    let recipe = raw.into_recipe(now).unwrap();
    assert_eq!(recipe.id, "fixed-id");
    assert_eq!(recipe.difficulty, Difficulty::Medium);
    assert_eq!(
        recipe.created_at,
        Utc.with_ymd_and_hms(2024, 1, 20, 14, 45, 0).unwrap()
    );
    assert_eq!(
        recipe.updated_at,
        Utc.with_ymd_and_hms(2024, 1, 21, 14, 45, 0).unwrap()
    );
}

#[test]
fn raw_recipe_defaults_missing_id_and_timestamps() {
    let now = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 5).unwrap();
    let raw = RawRecipe::from_value(json!({
        "title": "Anon",
        "description": "",
        "ingredients": [],
        "instructions": [],
        "cuisine": "",
        "tags": [],
        "difficulty": "Hard",
        "updated_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    let recipe = raw.into_recipe(now).unwrap();
    assert!(uuid::Uuid::parse_str(&recipe.id).is_ok());
    let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(recipe.created_at, expected);
    assert_eq!(recipe.updated_at, expected);
}

#[test]
fn raw_recipe_rejects_reversed_timestamps() {
    let raw = RawRecipe::from_value(json!({
        "id": "x",
        "title": "Backwards",
        "description": "",
        "ingredients": [],
        "instructions": [],
        "cuisine": "",
        "tags": [],
        "difficulty": "Easy",
        "created_at": "2024-02-01T00:00:00",
        "updated_at": "2024-01-01T00:00:00"
    }))
    .unwrap();

    let err = raw.into_recipe(Utc::now()).unwrap_err();
    assert!(matches!(err, RecipeValidationError::TimestampOrder { .. }));
}

#[test]
fn raw_recipe_rejects_missing_required_field() {
    let err = RawRecipe::from_value(json!({
        "id": "x",
        "title": "No cuisine",
        "description": "",
        "ingredients": [],
        "instructions": [],
        "tags": [],
        "difficulty": "Easy"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("cuisine"), "unexpected error: {err}");
}
