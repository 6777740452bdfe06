//! Backend API Wrappers
//!
//! Frontend bindings to the REST backend, organized by domain. Every call
//! goes through `fetch` with credentials included and decodes the reply
//! with the shared envelope rules.

mod auth;
mod profile;
mod admin;
mod provider;
mod customer;

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use urbanease_domain::{decode, ApiError, ApiResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestCredentials, RequestInit, Response};

// Re-export all public items
pub use auth::*;
pub use profile::*;
pub use admin::*;
pub use provider::*;
pub use customer::*;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Set the route prefix once at startup
pub fn set_base(base: &str) {
    let _ = API_BASE.set(base.trim_end_matches('/').to_string());
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE.get().map(String::as_str).unwrap_or(""), path)
}

pub(crate) fn js_err(value: JsValue) -> ApiError {
    let text = value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "fetch failed".to_string());
    ApiError::Network(text)
}

// ========================
// Transport
// ========================

pub(crate) enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

async fn send(method: &str, path: &str, body: Body, extra_headers: &[(&str, &str)]) -> ApiResult<(u16, String)> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::Include);

    let headers = Headers::new().map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;
    match &body {
        Body::Empty => {}
        Body::Json(json) => {
            headers.set("Content-Type", "application/json").map_err(js_err)?;
            init.set_body(&JsValue::from_str(json));
        }
        // The browser sets the multipart boundary itself
        Body::Form(form) => init.set_body(form),
    }
    for (name, value) in extra_headers {
        headers.set(name, value).map_err(js_err)?;
    }
    init.set_headers(&headers);

    let target = url(path);
    log::debug!("{} {}", method, target);
    let request = Request::new_with_str_and_init(&target, &init).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    let status = response.status();
    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();
    if status >= 400 {
        log::warn!("{} {} -> {}", method, target, status);
    }
    Ok((status, text))
}

async fn call<T: DeserializeOwned>(method: &str, path: &str, body: Body, headers: &[(&str, &str)]) -> ApiResult<T> {
    let (status, text) = send(method, path, body, headers).await?;
    decode(status, &text)
}

fn to_json<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    call("GET", path, Body::Empty, &[]).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    call("POST", path, Body::Empty, &[]).await
}

pub(crate) async fn delete<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    call("DELETE", path, Body::Empty, &[]).await
}

pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(method: &str, path: &str, body: &B) -> ApiResult<T> {
    call(method, path, Body::Json(to_json(body)?), &[]).await
}

pub(crate) async fn send_form<T: DeserializeOwned>(
    method: &str,
    path: &str,
    form: FormData,
    headers: &[(&str, &str)],
) -> ApiResult<T> {
    call(method, path, Body::Form(form), headers).await
}
