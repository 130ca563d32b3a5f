//! PazuCal offline cache worker.
//!
//! Runs in the service-worker global scope, fully separate from the page:
//! the two only meet through intercepted network requests. Install
//! pre-populates a versioned cache from a fixed allowlist; fetch answers
//! stale-while-revalidate; activate drops every out-of-version store.

#![forbid(unsafe_code)]

pub mod policy;

#[cfg(target_arch = "wasm32")]
mod worker {
    use js_sys::Promise;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, future_to_promise};
    use web_sys::{Cache, ExtendableEvent, FetchEvent, Request, Response, ServiceWorkerGlobalScope};

    use crate::policy;

    fn scope() -> ServiceWorkerGlobalScope {
        js_sys::global().unchecked_into()
    }

    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    async fn open_cache() -> Result<Cache, JsValue> {
        let cache = JsFuture::from(scope().caches()?.open(policy::CACHE_NAME)).await?;
        cache.dyn_into::<Cache>()
    }

    #[allow(clippy::future_not_send)]
    async fn precache() -> Result<JsValue, JsValue> {
        let cache = open_cache().await?;
        let urls = js_sys::Array::new();
        for url in policy::PRECACHE_URLS {
            urls.push(&JsValue::from_str(url));
        }
        JsFuture::from(cache.add_all_with_str_sequence(&urls)).await?;
        Ok(JsValue::UNDEFINED)
    }

    #[allow(clippy::future_not_send)]
    async fn drop_stale_caches() -> Result<JsValue, JsValue> {
        let caches = scope().caches()?;
        let keys = JsFuture::from(caches.keys()).await?;
        for name in js_sys::Array::from(&keys).iter() {
            if let Some(name) = name.as_string() {
                if !policy::is_current_cache(&name) {
                    let _ = JsFuture::from(caches.delete(&name)).await;
                }
            }
        }
        Ok(JsValue::UNDEFINED)
    }

    /// Fetch from the network, overwriting the cache entry on a 200.
    #[allow(clippy::future_not_send)]
    async fn fetch_and_store(cache: Cache, request: Request) -> Result<Response, JsValue> {
        let resp_value = JsFuture::from(scope().fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;
        if policy::is_cacheable_method(&request.method()) && policy::should_store(resp.status()) {
            let copy = resp.clone()?;
            JsFuture::from(cache.put_with_request(&request, &copy)?).await?;
        }
        Ok(resp)
    }

    /// Stale-while-revalidate: a cached answer goes out immediately while
    /// the network refreshes the entry; a cache miss waits for the network.
    #[allow(clippy::future_not_send)]
    async fn respond(request: Request) -> Result<JsValue, JsValue> {
        let cache = open_cache().await?;
        let cached = JsFuture::from(cache.match_with_request(&request)).await?;
        if cached.is_undefined() {
            let resp = fetch_and_store(cache, request).await?;
            return Ok(resp.into());
        }
        wasm_bindgen_futures::spawn_local(async move {
            let _ = fetch_and_store(cache, request).await;
        });
        Ok(cached)
    }

    pub fn register_listeners() {
        let sw = scope();

        let on_install = Closure::<dyn FnMut(ExtendableEvent)>::new(|event: ExtendableEvent| {
            let _ = event.wait_until(&future_to_promise(precache()));
        });
        sw.set_oninstall(Some(on_install.as_ref().unchecked_ref()));
        on_install.forget();

        let on_activate = Closure::<dyn FnMut(ExtendableEvent)>::new(|event: ExtendableEvent| {
            let _ = event.wait_until(&future_to_promise(drop_stale_caches()));
        });
        sw.set_onactivate(Some(on_activate.as_ref().unchecked_ref()));
        on_activate.forget();

        let on_fetch = Closure::<dyn FnMut(FetchEvent)>::new(|event: FetchEvent| {
            let promise: Promise = future_to_promise(respond(event.request()));
            let _ = event.respond_with(&promise);
        });
        sw.set_onfetch(Some(on_fetch.as_ref().unchecked_ref()));
        on_fetch.forget();
    }
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    worker::register_listeners();
}
