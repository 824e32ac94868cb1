//! Built-in demo recipes loaded at startup.
//!
//! # Invariants
//! - Records carry fixed ids and timestamps so demo data is reproducible.
//! - A broken asset degrades to an empty seed; it never aborts startup.

use log::error;

const BOOTSTRAP_JSON: &str = include_str!("recipes.json");

/// Returns the raw bootstrap records, ready for `CatalogStore::seed`.
pub fn bootstrap_records() -> Vec<serde_json::Value> {
    match serde_json::from_str::<Vec<serde_json::Value>>(BOOTSTRAP_JSON) {
        Ok(records) => records,
        Err(err) => {
            error!("event=seed_decode module=seed status=error message={err}");
            Vec::new()
        }
    }
}
