//! Cache policy: what gets pre-cached, under which store, and when a
//! refreshed response may overwrite a cached one.

/// Versioned cache store. Bumping the suffix drops every older store on
/// the next activation.
pub const CACHE_NAME: &str = "pazucal-static-v1";

/// Fixed allowlist of same-origin assets pre-populated on install.
pub const PRECACHE_URLS: &[&str] = &[
    "/",
    "/index.html",
    "/style.css",
    "/manifest.json",
    "/dungeonData.json",
    "/announcements.json",
    "/pazucal_web.js",
    "/pazucal_web_bg.wasm",
];

/// Whether a cache store belongs to the current version.
#[must_use]
pub fn is_current_cache(name: &str) -> bool {
    name == CACHE_NAME
}

/// Only a plain 200 may overwrite a cached entry; redirects, opaque
/// responses and errors leave the stale copy in place.
#[must_use]
pub fn should_store(status: u16) -> bool {
    status == 200
}

/// The cache API only accepts GET entries; session POSTs pass straight
/// through to the network.
#[must_use]
pub fn is_cacheable_method(method: &str) -> bool {
    method.eq_ignore_ascii_case("GET")
}
