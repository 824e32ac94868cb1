//! Axum router configuration for the recipe API.

use crate::handlers::{recipes, transfer};
use crate::AppState;
use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        // Static segments are matched before `:recipe_id`.
        .route("/api/recipes/search", get(recipes::search_recipes))
        .route("/api/recipes/export", get(transfer::export_recipes))
        .route("/api/recipes/import", post(transfer::import_recipes))
        .route(
            "/api/recipes/:recipe_id",
            get(recipes::get_recipe)
                .put(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .with_state(state)
}

/// Liveness probe. Does not touch the store.
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "app": state.config.app_name,
        "version": state.config.version,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use recipe_core::CatalogStore;
    use tower::ServiceExt;

    #[tokio::test]
    async fn static_segments_win_over_recipe_id() {
        let app = create_router(AppState::new(ApiConfig::default(), CatalogStore::new()));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/recipes/search").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "recipes": [] }));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/recipes/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
