//! Resource Draft Store
//!
//! The record being edited. Autocomplete fields write their committed
//! values here; uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::Serialize;

/// Draft of a resource record
#[derive(Clone, Debug, Default, Serialize, Store)]
pub struct ResourceDraft {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub area: String,
}

/// Type alias for the store
pub type DraftStore = Store<ResourceDraft>;

/// Get the draft store from context
pub fn use_draft_store() -> DraftStore {
    expect_context::<DraftStore>()
}

/// Record fields backed by an option list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListField {
    Category,
    Type,
    Area,
}

impl ListField {
    pub const ALL: [ListField; 3] = [ListField::Category, ListField::Type, ListField::Area];

    /// Backend list name
    pub fn list_name(self) -> &'static str {
        match self {
            ListField::Category => "category",
            ListField::Type => "type",
            ListField::Area => "area",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListField::Category => "Category",
            ListField::Type => "Type",
            ListField::Area => "Area",
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Current value of a field, without tracking
pub fn store_field_value(store: &DraftStore, field: ListField) -> String {
    match field {
        ListField::Category => store.category().get_untracked(),
        ListField::Type => store.kind().get_untracked(),
        ListField::Area => store.area().get_untracked(),
    }
}

/// Write a committed value (None clears the field)
pub fn store_set_field(store: &DraftStore, field: ListField, value: Option<String>) {
    let value = value.unwrap_or_default();
    match field {
        ListField::Category => *store.category().write() = value,
        ListField::Type => *store.kind().write() = value,
        ListField::Area => *store.area().write() = value,
    }
}
