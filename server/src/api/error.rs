//! HTTP error mapping
//!
//! Storage causes are logged here and never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DomainError;

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Client-facing failures; the message is the response body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("List not found")]
    ListNotFound,
    #[error("Label and value are required")]
    MissingFields,
    #[error("Failed to load {0}")]
    LoadFailed(String),
    #[error("Failed to update {0}")]
    UpdateFailed(String),
}

impl ApiError {
    /// Map a failed read of `list`
    pub fn load(list: &str, err: DomainError) -> Self {
        match err {
            DomainError::InvalidListName(_) => ApiError::ListNotFound,
            DomainError::Validation(_) => ApiError::MissingFields,
            other => {
                tracing::error!(list, error = %other, "GET /api/lists failed");
                ApiError::LoadFailed(list.to_string())
            }
        }
    }

    /// Map a failed append to `list`
    pub fn update(list: &str, err: DomainError) -> Self {
        match err {
            DomainError::InvalidListName(_) => ApiError::ListNotFound,
            DomainError::Validation(_) => ApiError::MissingFields,
            other => {
                tracing::error!(list, error = %other, "POST /api/lists failed");
                ApiError::UpdateFailed(list.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ListNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::LoadFailed(_) | ApiError::UpdateFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
