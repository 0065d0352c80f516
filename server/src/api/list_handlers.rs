//! List endpoints
//!
//! `GET /api/lists/{name}` and `POST /api/lists/{name}`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::error::ApiError;
use crate::domain::ListOption;
use crate::state::AppState;

/// Body of `POST /api/lists/{name}`
#[derive(Debug, Default, Deserialize)]
pub struct CreateOptionRequest {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl CreateOptionRequest {
    /// Both fields present and non-blank
    fn into_option(self) -> Option<ListOption> {
        let label = self.label.filter(|l| !l.trim().is_empty())?;
        let value = self.value.filter(|v| !v.trim().is_empty())?;
        Some(ListOption::new(label, value))
    }
}

fn ensure_known(state: &AppState, name: &str) -> Result<(), ApiError> {
    if state.repo.catalog().contains(name) {
        Ok(())
    } else {
        Err(ApiError::ListNotFound)
    }
}

/// Full option list
pub async fn list_options(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ListOption>>, ApiError> {
    ensure_known(&state, &name)?;
    state
        .repo
        .get(&name)
        .await
        .map(Json)
        .map_err(|e| ApiError::load(&name, e))
}

/// Append an option unless it already exists; replies with the full list
pub async fn add_option(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<ListOption>>), ApiError> {
    ensure_known(&state, &name)?;

    // Malformed JSON is reported the same way as missing fields
    let option = serde_json::from_slice::<CreateOptionRequest>(&body)
        .ok()
        .and_then(CreateOptionRequest::into_option)
        .ok_or(ApiError::MissingFields)?;

    let options = state
        .repo
        .append_if_absent(&name, &option)
        .await
        .map_err(|e| ApiError::update(&name, e))?;
    Ok((StatusCode::CREATED, Json(options)))
}
