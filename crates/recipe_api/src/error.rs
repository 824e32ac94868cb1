//! Error-to-response mapping for the HTTP layer.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use recipe_core::{DecodeError, RecipeValidationError};
use serde_json::json;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Request-level failure returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Requested recipe id has no record.
    RecipeNotFound(String),
    /// Payload violates the recipe shape.
    Validation(RecipeValidationError),
    /// Request body could not be decoded into a recipe payload.
    Payload(JsonRejection),
    /// Import upload is not a JSON array.
    InvalidImport(DecodeError),
    /// Request is malformed before reaching the store.
    BadRequest(String),
    /// Unexpected server-side failure.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::RecipeNotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Payload(rejection) => rejection.status(),
            Self::InvalidImport(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::RecipeNotFound(_) => "Recipe not found".to_string(),
            Self::Validation(err) => err.to_string(),
            Self::Payload(rejection) => rejection.body_text(),
            Self::InvalidImport(_) => "Invalid JSON file".to_string(),
            Self::BadRequest(message) | Self::Internal(message) => message.clone(),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecipeNotFound(id) => write!(f, "recipe not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Payload(rejection) => write!(f, "invalid payload: {}", rejection.body_text()),
            Self::InvalidImport(err) => write!(f, "{err}"),
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidImport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecipeValidationError> for ApiError {
    fn from(value: RecipeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Payload(value)
    }
}

impl From<DecodeError> for ApiError {
    fn from(value: DecodeError) -> Self {
        Self::InvalidImport(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("event=request_failed module=api status=error message={self}");
        } else {
            log::debug!("event=request_rejected module=api status={} message={self}", status.as_u16());
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
