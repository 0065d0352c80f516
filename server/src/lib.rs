//! Option Lists Backend
//!
//! Layered architecture:
//! - domain: Option entity, list allow-list and errors
//! - repository: Option list storage abstraction and JSON file implementation
//! - api: axum handlers exposing the lists over HTTP

pub mod api;
pub mod config;
pub mod domain;
pub mod repository;
pub mod state;

pub use api::create_router;
pub use config::AppConfig;
pub use state::{shared_state, AppState};
