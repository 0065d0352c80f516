//! Domain Layer
//!
//! Contains the option list entities and core abstractions.
//! This layer has NO I/O (serde only for serialization).

mod error;
mod list_catalog;
mod list_option;

pub use error::{DomainError, DomainResult};
pub use list_catalog::ListCatalog;
pub use list_option::ListOption;
