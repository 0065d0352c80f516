//! HTTP Layer
//!
//! axum handlers that bridge HTTP clients to the option list repository.

mod error;
mod list_handlers;
mod routes;

pub use error::{ApiError, ErrorBody};
pub use list_handlers::{add_option, list_options, CreateOptionRequest};
pub use routes::create_router;
