//! Loosely-typed recipe record accepted by seed and bulk-import paths.
//!
//! # Responsibility
//! - Decode one external record (field-per-record JSON object).
//! - Convert it into a validated `Recipe`, keeping caller-supplied identity.
//!
//! # Invariants
//! - A converted record always passes `Recipe::validate()`.
//! - Conversion never touches store state.

use crate::model::recipe::{Difficulty, Recipe, RecipeId, RecipeValidationError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Generates a fresh, globally-unique recipe id (UUID v4).
pub fn new_recipe_id() -> RecipeId {
    Uuid::new_v4().to_string()
}

/// External record shape before validation.
///
/// `id` and both timestamps are optional; every other field is required.
/// `difficulty` stays textual so that a bad label is reported as a
/// validation failure rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecipe {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cuisine: String,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl RawRecipe {
    /// Decodes one JSON value into the raw shape.
    ///
    /// # Errors
    /// - Returns the serde error when a required field is missing or a field
    ///   has the wrong JSON type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Converts into a validated record.
    ///
    /// Timestamp defaults: both missing -> `now`; one missing -> copy of the
    /// other. A missing `id` is generated.
    ///
    /// # Errors
    /// - `InvalidDifficulty` for labels outside {Easy, Medium, Hard}.
    /// - `InvalidTimestamp` for unparseable timestamp text.
    /// - Any `Recipe::validate()` failure.
    pub fn into_recipe(self, now: DateTime<Utc>) -> Result<Recipe, RecipeValidationError> {
        let difficulty: Difficulty = self.difficulty.parse()?;
        let created_at = self
            .created_at
            .as_deref()
            .map(|value| parse_timestamp("created_at", value))
            .transpose()?;
        let updated_at = self
            .updated_at
            .as_deref()
            .map(|value| parse_timestamp("updated_at", value))
            .transpose()?;

        let (created_at, updated_at) = match (created_at, updated_at) {
            (Some(created), Some(updated)) => (created, updated),
            (Some(created), None) => (created, created),
            (None, Some(updated)) => (updated, updated),
            (None, None) => (now, now),
        };

        let recipe = Recipe {
            id: self.id.unwrap_or_else(new_recipe_id),
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            cuisine: self.cuisine,
            tags: self.tags,
            difficulty,
            created_at,
            updated_at,
        };
        recipe.validate()?;
        Ok(recipe)
    }
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (with offset), offset-less date-times with `T` or space
/// separators (read as UTC), and bare dates (midnight UTC).
pub fn parse_timestamp(
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, RecipeValidationError> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = trimmed.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Some(midnight) = trimmed
        .parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(RecipeValidationError::InvalidTimestamp {
        field,
        value: value.to_string(),
    })
}
