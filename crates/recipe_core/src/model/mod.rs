//! Recipe catalog domain model.
//!
//! # Responsibility
//! - Define the single canonical recipe shape used by every core path.
//! - Keep loosely-typed external records separate from validated records.
//!
//! # Invariants
//! - Every record held by the store was built from `RecipeDraft` or
//!   `RawRecipe` and passed validation.
//! - Deletion is a hard removal; there are no tombstones.

pub mod raw;
pub mod recipe;
