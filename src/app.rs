//! Resource Form App
//!
//! Resource editor whose category/type/area fields are autocomplete
//! inputs backed by the option list API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::AutocompleteField;
use crate::store::{store_field_value, store_set_field, use_draft_store, ListField, ResourceDraft};

#[component]
pub fn App() -> impl IntoView {
    // Provide the draft record to all children
    provide_context(Store::new(ResourceDraft::default()));

    view! {
        <main class="resource-form">
            <h1>"New Resource"</h1>
            <form on:submit=|ev| ev.prevent_default()>
                {ListField::ALL
                    .into_iter()
                    .map(|field| view! { <ListFieldInput field=field /> })
                    .collect_view()}
            </form>
            <DraftPreview />
        </main>
    }
}

/// One record field bound to its option list
#[component]
fn ListFieldInput(field: ListField) -> impl IntoView {
    let store = use_draft_store();
    let initial = Some(store_field_value(&store, field)).filter(|v| !v.is_empty());

    view! {
        <AutocompleteField
            list_name=field.list_name()
            label=field.label()
            required=true
            initial=initial
            on_commit={move |value: Option<String>| store_set_field(&store, field, value)}
        />
    }
}

/// Current record as it would be saved
#[component]
fn DraftPreview() -> impl IntoView {
    let store = use_draft_store();

    view! {
        <pre class="draft-preview">
            {move || serde_json::to_string_pretty(&store.get()).unwrap_or_default()}
        </pre>
    }
}
