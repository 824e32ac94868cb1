//! Recipe CRUD and search handlers.

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_core::{Recipe, RecipeDraft};
use serde::{Deserialize, Serialize};

/// Query string for `GET /api/recipes`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// Query string for `GET /api/recipes/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Envelope for recipe collections.
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

/// Envelope for successful deletes.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET /api/recipes?search=
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<RecipeListResponse> {
    let store = state.store.read().await;
    Json(RecipeListResponse {
        recipes: store.search(params.search.as_deref()),
    })
}

/// GET /api/recipes/search?query=
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<RecipeListResponse> {
    let store = state.store.read().await;
    Json(RecipeListResponse {
        recipes: store.search(params.query.as_deref()),
    })
}

/// GET /api/recipes/:id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let store = state.store.read().await;
    store
        .get(&recipe_id)
        .map(Json)
        .ok_or(ApiError::RecipeNotFound(recipe_id))
}

/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(draft) = payload?;
    let mut store = state.store.write().await;
    let recipe = store.create(draft)?;
    Ok((StatusCode::CREATED, Json(recipe)).into_response())
}

/// PUT /api/recipes/:id
///
/// Full replacement: every mutable field is required in the body.
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    payload: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let Json(draft) = payload?;
    let mut store = state.store.write().await;
    store
        .update(&recipe_id, draft)?
        .map(Json)
        .ok_or(ApiError::RecipeNotFound(recipe_id))
}

/// DELETE /api/recipes/:id
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut store = state.store.write().await;
    if !store.delete(&recipe_id) {
        return Err(ApiError::RecipeNotFound(recipe_id));
    }
    Ok(Json(DeleteResponse {
        message: "Recipe deleted successfully",
        status: "success",
    }))
}
