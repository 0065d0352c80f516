//! Backend Command Wrappers
//!
//! Frontend bindings to the option list HTTP API, built on the browser
//! `fetch` API. Every call is aborted after [`REQUEST_TIMEOUT_MS`].

use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response};

use crate::models::{ErrorBody, ListOption};

const API_BASE: &str = "/api/lists";
pub const REQUEST_TIMEOUT_MS: u32 = 5_000;

// ========================
// Option List Commands
// ========================

pub async fn fetch_options(list_name: &str) -> Result<Vec<ListOption>, String> {
    send_json("GET", &list_url(list_name), None).await
}

/// Returns the full list after the append
pub async fn add_option(list_name: &str, option: &ListOption) -> Result<Vec<ListOption>, String> {
    let body = serde_json::to_string(option).map_err(|e| e.to_string())?;
    send_json("POST", &list_url(list_name), Some(body)).await
}

fn list_url(list_name: &str) -> String {
    format!("{API_BASE}/{list_name}")
}

// ========================
// Transport
// ========================

async fn send_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, String> {
    let window = web_sys::window().ok_or("No window available")?;

    let abort = AbortController::new().map_err(js_error)?;
    let signal = abort.signal();

    let init = RequestInit::new();
    init.set_method(method);
    init.set_signal(Some(&signal));
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    // Dropped at the end of this function, which cancels it
    let _timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || abort.abort());

    let timed_out = || format!("Request to {url} timed out after {}s", REQUEST_TIMEOUT_MS / 1000);

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| if signal.aborted() { timed_out() } else { js_error(e) })?
        .dyn_into()
        .map_err(js_error)?;

    let payload = match response.json() {
        Ok(promise) => JsFuture::from(promise).await.ok(),
        Err(_) => None,
    };
    if signal.aborted() {
        return Err(timed_out());
    }

    if !response.ok() {
        let message = payload
            .and_then(|p| serde_wasm_bindgen::from_value::<ErrorBody>(p).ok())
            .map(|b| b.error)
            .unwrap_or_else(|| format!("Failed to fetch {url}: HTTP {}", response.status()));
        return Err(message);
    }

    let payload = payload.ok_or_else(|| format!("Invalid JSON from {url}"))?;
    serde_wasm_bindgen::from_value(payload).map_err(|e| e.to_string())
}

fn js_error(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| "Network error".to_string())
}
