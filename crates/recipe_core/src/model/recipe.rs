//! Recipe domain model.
//!
//! # Responsibility
//! - Define the canonical recipe record and its mutable-field payload.
//! - Own the entity shape rules shared by create, update, seed and import.
//!
//! # Invariants
//! - `id` is assigned once and never changes for the lifetime of a record.
//! - `created_at <= updated_at` for every valid record.
//! - `title` is never blank.
//!
//! # See also
//! - `store::catalog` for the lifecycle that drives these rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Opaque recipe identifier.
///
/// Generated ids are UUID v4 strings; imported and seeded ids are kept as-is.
pub type RecipeId = String;

/// Fixed difficulty classification for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Canonical wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = RecipeValidationError;

    /// Accepts the canonical labels case-insensitively, ignoring surrounding
    /// whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(RecipeValidationError::InvalidDifficulty(value.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = RecipeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

/// Shape violations for recipe payloads and records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle,
    /// Caller-supplied `id` is empty or whitespace-only.
    EmptyId,
    /// `difficulty` is outside {Easy, Medium, Hard}.
    InvalidDifficulty(String),
    /// A timestamp field could not be parsed.
    InvalidTimestamp { field: &'static str, value: String },
    /// `created_at` is later than `updated_at`.
    TimestampOrder {
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}

impl Display for RecipeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyId => write!(f, "id must not be empty"),
            Self::InvalidDifficulty(value) => write!(
                f,
                "invalid difficulty `{value}`; expected Easy|Medium|Hard"
            ),
            Self::InvalidTimestamp { field, value } => {
                write!(f, "invalid timestamp `{value}` in {field}")
            }
            Self::TimestampOrder {
                created_at,
                updated_at,
            } => write!(
                f,
                "updated_at ({}) must be >= created_at ({})",
                updated_at.to_rfc3339(),
                created_at.to_rfc3339()
            ),
        }
    }
}

impl Error for RecipeValidationError {}

/// Full-replacement payload for every mutable recipe field.
///
/// Used by both create and update. There is no sparse-patch form: an update
/// overwrites every field listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    /// Display order is preserved verbatim.
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cuisine: String,
    /// Duplicates are kept.
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
}

impl RecipeDraft {
    /// Validates caller-controlled fields.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is blank.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.title.trim().is_empty() {
            return Err(RecipeValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Canonical catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cuisine: String,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation.
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Builds a fresh record from a payload with both timestamps set to `now`.
    pub fn from_draft(id: impl Into<RecipeId>, draft: RecipeDraft, now: DateTime<Utc>) -> Self {
        let RecipeDraft {
            title,
            description,
            ingredients,
            instructions,
            cuisine,
            tags,
            difficulty,
        } = draft;

        Self {
            id: id.into(),
            title,
            description,
            ingredients,
            instructions,
            cuisine,
            tags,
            difficulty,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every mutable field from `draft` and refreshes `updated_at`.
    ///
    /// # Invariants
    /// - `id` and `created_at` are untouched.
    /// - `updated_at` never drops below `created_at`, even if `now` does.
    pub fn replace_with(&mut self, draft: RecipeDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.description = draft.description;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
        self.cuisine = draft.cuisine;
        self.tags = draft.tags;
        self.difficulty = draft.difficulty;
        self.updated_at = now.max(self.created_at);
    }

    /// Returns the mutable-field projection of this record.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            cuisine: self.cuisine.clone(),
            tags: self.tags.clone(),
            difficulty: self.difficulty,
        }
    }

    /// Validates the full record shape.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is blank.
    /// - `EmptyTitle` when `title` is blank.
    /// - `TimestampOrder` when `created_at > updated_at`.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.id.trim().is_empty() {
            return Err(RecipeValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(RecipeValidationError::EmptyTitle);
        }
        if self.created_at > self.updated_at {
            return Err(RecipeValidationError::TimestampOrder {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }
}
