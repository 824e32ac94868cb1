//! Recipe catalog store.
//!
//! # Responsibility
//! - Assign identity and timestamps on create.
//! - Apply full-replacement updates and hard deletes.
//! - Filter by multi-token search and move whole collections in and out.
//!
//! # Invariants
//! - Natural iteration order is insertion order; removals keep the relative
//!   order of the remaining records.
//! - `import_bulk` clears the collection before loading, whatever the outcome
//!   of individual records.
//! - Bulk loads never fail as a whole; bad records become `LoadSkip`s.

use crate::model::raw::{new_recipe_id, RawRecipe};
use crate::model::recipe::{Recipe, RecipeDraft, RecipeId, RecipeValidationError};
use crate::search::matcher::{matches, tokenize};
use crate::seed::bootstrap_records;
use crate::store::clock::{Clock, SystemClock};
use crate::store::report::{LoadReport, LoadSkip, SkipReason};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{debug, info, warn};

/// Owner of every recipe record in the process.
pub struct CatalogStore {
    recipes: IndexMap<RecipeId, Recipe>,
    clock: Box<dyn Clock>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Creates an empty store backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty store with a caller-provided time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            recipes: IndexMap::new(),
            clock: Box::new(clock),
        }
    }

    /// Creates a store loaded with the built-in demo recipes.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed(bootstrap_records());
        store
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Returns a snapshot of every record in natural order.
    pub fn list_all(&self) -> Vec<Recipe> {
        self.recipes.values().cloned().collect()
    }

    /// Exact-key lookup. `None` means the id is not present.
    pub fn get(&self, id: &str) -> Option<Recipe> {
        self.recipes.get(id).cloned()
    }

    /// Filters records by AND-of-tokens over title, cuisine and ingredients.
    ///
    /// A missing or blank query returns the same sequence as [`Self::list_all`].
    pub fn search(&self, query: Option<&str>) -> Vec<Recipe> {
        let tokens = query.map(tokenize).unwrap_or_default();
        if tokens.is_empty() {
            return self.list_all();
        }

        let hits: Vec<Recipe> = self
            .recipes
            .values()
            .filter(|recipe| matches(recipe, &tokens))
            .cloned()
            .collect();
        debug!(
            "event=recipe_search module=store status=ok tokens={} hits={}",
            tokens.len(),
            hits.len()
        );
        hits
    }

    /// Inserts a new record with a generated id and `created_at == updated_at`.
    ///
    /// # Errors
    /// - Returns the payload validation error; the store is unchanged.
    pub fn create(&mut self, draft: RecipeDraft) -> Result<Recipe, RecipeValidationError> {
        draft.validate()?;

        let mut id = new_recipe_id();
        while self.recipes.contains_key(&id) {
            id = new_recipe_id();
        }

        let recipe = Recipe::from_draft(id, draft, self.clock.now());
        self.recipes.insert(recipe.id.clone(), recipe.clone());
        info!("event=recipe_create module=store status=ok id={}", recipe.id);
        Ok(recipe)
    }

    /// Overwrites every mutable field of an existing record.
    ///
    /// Returns `Ok(None)` without changes when `id` is not present.
    ///
    /// # Errors
    /// - Returns the payload validation error; the store is unchanged.
    pub fn update(
        &mut self,
        id: &str,
        draft: RecipeDraft,
    ) -> Result<Option<Recipe>, RecipeValidationError> {
        draft.validate()?;

        let now = self.clock.now();
        let Some(recipe) = self.recipes.get_mut(id) else {
            debug!("event=recipe_update module=store status=not_found id={id}");
            return Ok(None);
        };
        recipe.replace_with(draft, now);
        info!("event=recipe_update module=store status=ok id={id}");
        Ok(Some(recipe.clone()))
    }

    /// Removes a record. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.recipes.shift_remove(id).is_some();
        if removed {
            info!("event=recipe_delete module=store status=ok id={id}");
        } else {
            debug!("event=recipe_delete module=store status=not_found id={id}");
        }
        removed
    }

    /// Snapshot intended for bulk transfer. Same content as [`Self::list_all`].
    pub fn export_all(&self) -> Vec<Recipe> {
        self.list_all()
    }

    /// Replaces the whole collection and returns the number of records loaded.
    pub fn import_bulk(&mut self, records: Vec<serde_json::Value>) -> usize {
        self.import_bulk_report(records).imported
    }

    /// Replaces the whole collection and reports every skipped record.
    ///
    /// Caller-supplied ids are kept so that export/import round-trips
    /// preserve identity.
    pub fn import_bulk_report(&mut self, records: Vec<serde_json::Value>) -> LoadReport {
        let previous = self.recipes.len();
        self.recipes.clear();
        let report = self.load_records(records, "recipe_import");
        info!(
            "event=recipe_import module=store status=ok replaced={} imported={} skipped={}",
            previous,
            report.imported,
            report.skipped.len()
        );
        report
    }

    /// Adds bootstrap records without clearing existing contents.
    ///
    /// Malformed records are skipped so that bad seed data never blocks
    /// startup.
    pub fn seed(&mut self, records: Vec<serde_json::Value>) -> LoadReport {
        let report = self.load_records(records, "recipe_seed");
        info!(
            "event=recipe_seed module=store status=ok imported={} skipped={}",
            report.imported,
            report.skipped.len()
        );
        report
    }

    fn load_records(
        &mut self,
        records: Vec<serde_json::Value>,
        event: &'static str,
    ) -> LoadReport {
        let mut report = LoadReport::default();
        let now = self.clock.now();

        for (index, value) in records.into_iter().enumerate() {
            match self.load_one(value, now) {
                Ok(()) => report.imported += 1,
                Err(reason) => {
                    warn!(
                        "event={event} module=store status=skip index={index} reason={reason}"
                    );
                    report.skipped.push(LoadSkip { index, reason });
                }
            }
        }

        report
    }

    fn load_one(
        &mut self,
        value: serde_json::Value,
        now: DateTime<Utc>,
    ) -> Result<(), SkipReason> {
        let raw = RawRecipe::from_value(value).map_err(|err| SkipReason::Shape(err.to_string()))?;
        let recipe = raw.into_recipe(now)?;
        if self.recipes.contains_key(&recipe.id) {
            return Err(SkipReason::DuplicateId(recipe.id));
        }
        self.recipes.insert(recipe.id.clone(), recipe);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogStore;

    #[test]
    fn seeded_store_contains_bootstrap_recipes() {
        let store = CatalogStore::seeded();
        assert_eq!(store.len(), 3);
        assert!(store.get("poutine-canada-001").is_some());
        assert!(store.get("shuba-russia-002").is_some());
        assert!(store.get("guo-bao-rou-china-003").is_some());
    }

    #[test]
    fn new_store_is_empty() {
        let store = CatalogStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }
}
