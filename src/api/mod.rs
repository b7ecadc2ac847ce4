//! REST Gateway
//!
//! Typed request functions against the board service, organized by domain.

mod archive;
mod board_settings;
mod cards;
mod columns;
mod search;
mod tags;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use archive::*;
pub use board_settings::*;
pub use cards::*;
pub use columns::*;
pub use search::*;
pub use tags::*;

const API_BASE: &str = "/api";

fn operation_failed(action: &str) -> String {
    format!("Failed to {action}")
}

/// Send a request. Transport failures and non-2xx statuses collapse into a
/// generic operation-failed error named after the attempted action; the
/// status detail only goes to the console.
async fn send(
    method: &str,
    path: &str,
    json_body: Option<String>,
    action: &str,
) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &json_body {
        opts.set_body(&JsValue::from_str(body));
    }
    let url = format!("{API_BASE}{path}");
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|_| operation_failed(action))?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| operation_failed(action))?;
    }

    let window = web_sys::window().ok_or_else(|| operation_failed(action))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| operation_failed(action))?;
    let response: Response = response.dyn_into().map_err(|_| operation_failed(action))?;

    if !response.ok() {
        web_sys::console::error_1(
            &format!("[API] {} {} -> {}", method, url, response.status()).into(),
        );
        return Err(operation_failed(action));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response, action: &str) -> Result<T, String> {
    let promise = response.json().map_err(|_| operation_failed(action))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| operation_failed(action))?;
    serde_wasm_bindgen::from_value(value).map_err(|_| operation_failed(action))
}

/// Body-less request with a JSON response
async fn request_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    action: &str,
) -> Result<T, String> {
    let response = send(method, path, None, action).await?;
    decode(response, action).await
}

/// Body-less request, response body ignored
async fn request_empty(method: &str, path: &str, action: &str) -> Result<(), String> {
    send(method, path, None, action).await.map(|_| ())
}

/// JSON request body, JSON response
async fn send_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: &impl Serialize,
    action: &str,
) -> Result<T, String> {
    let json = serde_json::to_string(body).map_err(|_| operation_failed(action))?;
    let response = send(method, path, Some(json), action).await?;
    decode(response, action).await
}
