//! Router construction

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::list_handlers::{add_option, list_options};
use crate::state::AppState;

/// All routes served by this backend
///
/// - `GET  /api/lists/{name}`       - full option list
/// - `POST /api/lists/{name}`       - append if absent
/// - `GET  /data-files/{name}.json` - raw list file, read-only
pub fn create_router(state: AppState) -> Router {
    let data_files = Router::new()
        .fallback_service(ServeDir::new(&state.config.data_dir))
        .layer(middleware::from_fn_with_state(state.clone(), only_list_files));

    Router::new()
        .route("/api/lists/{name}", get(list_options).post(add_option))
        .nest("/data-files", data_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Temp files and anything else in the data dir stay hidden
async fn only_list_files(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let file = request.uri().path().trim_start_matches('/');
    let is_list = file
        .strip_suffix(".json")
        .is_some_and(|name| state.repo.catalog().contains(name));

    if !is_list {
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}
