//! Remote session endpoint calls.
//!
//! Bodies are JSON sent as `text/plain` so the Apps-Script-style endpoint
//! can parse them without triggering a CORS preflight.

use pazucal_core::{ApiRequest, Credentials, HeartbeatResponse, LoginResponse};
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::dom;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Endpoint URL, overridable at compile time for deployed builds.
#[must_use]
pub fn api_url() -> &'static str {
    option_env!("PAZUCAL_API_URL").unwrap_or("/api")
}

/// Authenticate and hand back the server-issued token.
///
/// # Errors
/// Returns `ApiError` when the endpoint is unreachable or answers with a
/// body that is not a login response.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn login(id: &str, pass: &str) -> Result<LoginResponse, ApiError> {
    post(&ApiRequest::Login { id, pass }).await
}

/// Liveness/refresh check for a stored session.
///
/// # Errors
/// Returns `ApiError` on transport failure or an undecodable body.
#[allow(clippy::future_not_send)]
pub async fn heartbeat(creds: &Credentials) -> Result<HeartbeatResponse, ApiError> {
    post(&ApiRequest::Heartbeat {
        id: &creds.user_id,
        token: &creds.token,
    })
    .await
}

/// Best-effort server-side session invalidation.
///
/// # Errors
/// Returns `ApiError` on transport failure; callers log and proceed with
/// the local logout regardless.
#[allow(clippy::future_not_send)]
pub async fn logout(creds: &Credentials) -> Result<(), ApiError> {
    let _ = post::<serde_json::Value>(&ApiRequest::Logout {
        id: &creds.user_id,
        token: &creds.token,
    })
    .await?;
    Ok(())
}

#[allow(clippy::future_not_send)]
async fn post<T: DeserializeOwned>(request: &ApiRequest<'_>) -> Result<T, ApiError> {
    let body = serde_json::to_string(request)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let text = post_text(&body)
        .await
        .map_err(|err| ApiError::Network(dom::js_error_message(&err)))?;
    serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
}

#[allow(clippy::future_not_send)]
async fn post_text(body: &str) -> Result<String, JsValue> {
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    let headers = web_sys::Headers::new()?;
    headers.set("Content-Type", "text/plain")?;
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(body));

    let resp_value =
        JsFuture::from(dom::window().fetch_with_str_and_init(api_url(), &init)).await?;
    let resp: web_sys::Response = resp_value.dyn_into()?;
    dom::response_text(&resp).await
}
