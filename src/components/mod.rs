//! UI Components
//!
//! Reusable Leptos components.

mod autocomplete_field;

pub use autocomplete_field::AutocompleteField;
