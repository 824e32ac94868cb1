//! Outcome types for bulk loads (seed and import).
//!
//! # Invariants
//! - `imported` equals the number of records the load inserted.
//! - A skipped record never affects store contents.

use crate::model::recipe::{RecipeId, RecipeValidationError};
use std::fmt::{Display, Formatter};

/// Why one record of a bulk load was not inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Missing field or wrong JSON type.
    Shape(String),
    /// Entity rule violation (bad difficulty, bad timestamp, blank title...).
    Validation(RecipeValidationError),
    /// Another record of the same batch already claimed this id.
    DuplicateId(RecipeId),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape(message) => write!(f, "malformed record: {message}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate id `{id}` in batch"),
        }
    }
}

impl From<RecipeValidationError> for SkipReason {
    fn from(value: RecipeValidationError) -> Self {
        Self::Validation(value)
    }
}

/// One skipped record, addressed by its position in the input batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSkip {
    pub index: usize,
    pub reason: SkipReason,
}

/// Aggregate outcome of a seed or import batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records inserted.
    pub imported: usize,
    /// Records skipped, in input order.
    pub skipped: Vec<LoadSkip>,
}

impl LoadReport {
    /// Total records examined.
    pub fn total(&self) -> usize {
        self.imported + self.skipped.len()
    }
}
