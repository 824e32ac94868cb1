//! Bulk import/export handlers.

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::info;
use recipe_core::{decode_import, encode_export};
use serde::Serialize;

const UPLOAD_FIELD: &str = "file";
const EXPORT_FILE_NAME: &str = "recipes.json";

/// Result of a bulk import.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: String,
    pub count: usize,
    pub skipped: usize,
}

/// GET /api/recipes/export
///
/// Serves every record as a downloadable JSON array.
pub async fn export_recipes(State(state): State<AppState>) -> Result<Response, ApiError> {
    let recipes = state.store.read().await.export_all();
    let body = encode_export(&recipes).map_err(|err| ApiError::Internal(err.to_string()))?;
    info!(
        "event=recipe_export module=api status=ok count={}",
        recipes.len()
    );

    let disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// POST /api/recipes/import
///
/// Expects a multipart upload with a `file` field holding a JSON array.
/// Replaces the whole catalog; malformed records are skipped.
pub async fn import_recipes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("invalid multipart body: {err}")))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| ApiError::BadRequest(format!("failed to read upload: {err}")))?;
            upload = Some((file_name, bytes));
            break;
        }
    }

    let Some((file_name, bytes)) = upload else {
        return Err(ApiError::BadRequest(format!(
            "missing upload field `{UPLOAD_FIELD}`"
        )));
    };

    let records = decode_import(&bytes)?;
    let received = records.len();
    let report = state.store.write().await.import_bulk_report(records);
    info!(
        "event=recipe_import module=api status=ok file={} received={} imported={}",
        file_name, received, report.imported
    );

    Ok(Json(ImportResponse {
        message: format!("Successfully imported {} recipes", report.imported),
        count: report.imported,
        skipped: report.skipped.len(),
    }))
}
