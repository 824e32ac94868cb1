//! Core domain logic for the recipe catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod search;
pub mod seed;
pub mod store;
pub mod transfer;

pub use logging::{default_log_level, init_logging, logging_status, LogDestination};
pub use model::raw::{new_recipe_id, parse_timestamp, RawRecipe};
pub use model::recipe::{Difficulty, Recipe, RecipeDraft, RecipeId, RecipeValidationError};
pub use search::matcher::{haystack, matches, tokenize};
pub use seed::bootstrap_records;
pub use store::catalog::CatalogStore;
pub use store::clock::{Clock, SystemClock};
pub use store::report::{LoadReport, LoadSkip, SkipReason};
pub use transfer::json::{
    decode_import, encode_export, read_import_file, write_export_file, DecodeError, DecodeResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
