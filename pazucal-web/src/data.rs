//! Static JSON asset loading.
//!
//! Every asset is fetched with a timestamp query parameter so intermediate
//! caches never serve yesterday's damage table. Any network or parse
//! failure degrades to `None`; callers treat that as "feature unavailable".

use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::dom;
use crate::paths::asset_path;

pub const DUNGEON_TABLE: &str = "dungeonData.json";
pub const ANNOUNCEMENTS: &str = "announcements.json";
pub const MEDIA_LIST: &str = "media-list.json";

/// Fetch and parse a JSON asset, returning `None` on any failure.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_json<T: DeserializeOwned>(asset: &str) -> Option<T> {
    let url = format!("{}?t={}", asset_path(asset), timestamp_ms());
    match try_fetch(&url).await {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("failed to load {asset}: {}", dom::js_error_message(&err));
            None
        }
    }
}

#[allow(clippy::future_not_send)]
async fn try_fetch<T: DeserializeOwned>(url: &str) -> Result<T, JsValue> {
    let resp = dom::fetch_response(url).await?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("status {}", resp.status())));
    }
    let text = dom::response_text(&resp).await?;
    serde_json::from_str(&text).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timestamp_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}
