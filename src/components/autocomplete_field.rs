//! Autocomplete Field Component
//!
//! Text input bound to one option list: filters suggestions as the user
//! types and creates a new option when nothing matches.
//! All decisions live in [`AutocompleteController`]; this component renders
//! it and runs the network calls it requests.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::controller::{AutocompleteController, CreateRequest};

/// Autocomplete input with create-new support
///
/// Props:
/// - list_name: backend list the options come from
/// - initial: value already stored on the record
/// - on_commit: called whenever the committed value changes (None = cleared)
#[component]
pub fn AutocompleteField(
    list_name: &'static str,
    label: &'static str,
    #[prop(optional)] required: bool,
    initial: Option<String>,
    #[prop(into)] on_commit: Callback<Option<String>>,
) -> impl IntoView {
    // Fetch the list once per mount
    let mut state = AutocompleteController::new(initial);
    let ticket = state.mount();
    let controller = RwSignal::new(state);

    spawn_local(async move {
        let result = commands::fetch_options(list_name).await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("[{list_name}] load failed: {e}").into());
        }
        controller.try_update(|c| c.apply_fetch(ticket, result));
    });

    on_cleanup(move || {
        controller.try_update(|c| c.unmount());
    });

    // Push committed changes to the record
    let committed = Memo::new(move |_| controller.with(|c| c.committed().map(str::to_string)));
    Effect::new(move |prev: Option<()>| {
        let value = committed.get();
        if prev.is_some() {
            on_commit.run(value);
        }
    });

    let run_create = move |request: Option<CreateRequest>| {
        let Some(CreateRequest { ticket, option }) = request else {
            return;
        };
        spawn_local(async move {
            let result = commands::add_option(list_name, &option).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[{list_name}] create failed: {e}").into());
            }
            controller.try_update(|c| c.finish_create(ticket, result));
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            // Do not submit the surrounding form
            ev.prevent_default();
            run_create(controller.try_update(|c| c.press_enter()).flatten());
        }
    };

    view! {
        <div class="custom-autocomplete-field">
            <label for=list_name class="field-label">
                {label}
                {required.then_some("*")}
            </label>
            <div class="autocomplete-input-wrapper">
                <input
                    type="text"
                    id=list_name
                    name=list_name
                    autocomplete="off"
                    placeholder="Type to search or add new..."
                    required=required
                    prop:value=move || controller.with(|c| c.input_text().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        controller.update(|c| c.input(text));
                    }
                    on:focus=move |_| controller.update(|c| c.focus())
                    on:keydown=on_keydown
                />

                {move || {
                    if !controller.with(|c| c.shows_suggestions()) {
                        return view! { <div></div> }.into_any();
                    }
                    let suggestions = controller.with(|c| c.suggestions().to_vec());
                    let create_label = controller
                        .with(|c| c.offers_create().then(|| c.input_text().to_string()));
                    view! {
                        <ul class="suggestions-list">
                            {suggestions.into_iter().map(|option| {
                                let text = option.label.clone();
                                view! {
                                    <li
                                        // Keep focus on the input until click fires
                                        on:mousedown=|ev| ev.prevent_default()
                                        on:click=move |_| controller.update(|c| c.select(&option))
                                    >
                                        {text}
                                    </li>
                                }
                            }).collect_view()}
                            {create_label.map(|text| view! {
                                <li
                                    class="create-new-option"
                                    on:mousedown=|ev| ev.prevent_default()
                                    on:click=move |_| {
                                        let request = controller
                                            .try_update(|c| c.request_create())
                                            .flatten();
                                        run_create(request);
                                    }
                                >
                                    {format!("Create new option: \"{text}\"")}
                                </li>
                            })}
                        </ul>
                    }.into_any()
                }}
            </div>
            {move || controller.with(|c| c.is_loading()).then(|| view! { <p>"Loading..."</p> })}
            {move || controller.with(|c| c.error().map(str::to_string)).map(|e| view! {
                <p class="field-error">"Error: " {e}</p>
            })}
        </div>
    }
}
