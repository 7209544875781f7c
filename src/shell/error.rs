use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::modules::projects::core::ports::RegistryError;

/// Client-facing failure taxonomy for the HTTP surface. Validation names the
/// offending input; Not Found carries the requested identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("project with id {0} not found")]
    NotFound(i64),
}

impl ApiError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, field) = match &self {
            ApiError::Validation { field, .. } => (StatusCode::UNPROCESSABLE_ENTITY, Some(*field)),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, None),
        };
        let body = ErrorBody {
            detail: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}
