use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Base path of the backend API.
pub const API_BASE_URL: &str = "/api";

/// Error type for all backend calls.
///
/// `status` is the HTTP status code for non-2xx responses; transport-level
/// failures (network, JSON decode) carry no status. `message` is always the
/// static description of the operation that failed, never the server's own
/// error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: &'static str,
}

impl ApiError {
    pub fn http(status: u16, message: &'static str) -> Self {
        Self {
            status: Some(status),
            message,
        }
    }

    pub fn transport(message: &'static str) -> Self {
        Self {
            status: None,
            message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} (HTTP {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Acknowledgement body returned by DELETE endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAck {
    pub message: String,
}

/// Issue a single fetch and resolve to the parsed JSON body.
///
/// Non-2xx statuses become `ApiError::http`; everything below the HTTP layer
/// collapses into `ApiError::transport` with the same operation message. No
/// retries, no timeout, no abort wiring.
async fn dispatch(
    method: &str,
    path: &str,
    body: Option<String>,
    op: &'static str,
) -> Result<JsValue, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{API_BASE_URL}{path}");
    let request =
        Request::new_with_str_and_init(&url, &init).map_err(|_| ApiError::transport(op))?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::transport(op))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::transport(op))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::transport(op))?
        .dyn_into()
        .map_err(|_| ApiError::transport(op))?;

    if !response.ok() {
        return Err(ApiError::http(response.status(), op));
    }

    let json_promise = response.json().map_err(|_| ApiError::transport(op))?;
    JsFuture::from(json_promise)
        .await
        .map_err(|_| ApiError::transport(op))
}

pub(super) async fn get_json<R: DeserializeOwned>(
    path: &str,
    op: &'static str,
) -> Result<R, ApiError> {
    let value = dispatch("GET", path, None, op).await?;
    serde_wasm_bindgen::from_value(value).map_err(|_| ApiError::transport(op))
}

pub(super) async fn send_json<B: Serialize, R: DeserializeOwned>(
    method: &str,
    path: &str,
    body: &B,
    op: &'static str,
) -> Result<R, ApiError> {
    let body = serde_json::to_string(body).map_err(|_| ApiError::transport(op))?;
    let value = dispatch(method, path, Some(body), op).await?;
    serde_wasm_bindgen::from_value(value).map_err(|_| ApiError::transport(op))
}

pub(super) async fn delete_json<R: DeserializeOwned>(
    path: &str,
    op: &'static str,
) -> Result<R, ApiError> {
    let value = dispatch("DELETE", path, None, op).await?;
    serde_wasm_bindgen::from_value(value).map_err(|_| ApiError::transport(op))
}
