//! Token matcher for catalog search.
//!
//! # Responsibility
//! - Split a query into lowercase whitespace-delimited tokens.
//! - Build the searchable haystack for one recipe.
//!
//! # Invariants
//! - Matching is case-insensitive substring containment.
//! - Every token must match (AND); any field may supply the match (OR).
//! - An empty token list matches every recipe.

use crate::model::recipe::Recipe;

const HAYSTACK_SEPARATOR: &str = " ";

/// Lowercases, trims and splits `query` on whitespace.
///
/// Returns an empty list for blank input.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercased `title`, `cuisine` and every ingredient joined by a space.
pub fn haystack(recipe: &Recipe) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(recipe.ingredients.len() + 2);
    parts.push(recipe.title.as_str());
    parts.push(recipe.cuisine.as_str());
    parts.extend(recipe.ingredients.iter().map(String::as_str));
    parts.join(HAYSTACK_SEPARATOR).to_lowercase()
}

/// Returns whether every token occurs in the recipe haystack.
pub fn matches(recipe: &Recipe, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    let text = haystack(recipe);
    tokens.iter().all(|token| text.contains(token.as_str()))
}
