//! Random page background, picked from the deployed media list.

use rand::seq::SliceRandom;

use crate::data;
use crate::dom;

/// Fetch the media list and apply one entry at random.
///
/// A missing or empty list leaves the default background in place.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn apply_random() {
    let Some(images) = data::fetch_json::<Vec<String>>(data::MEDIA_LIST).await else {
        log::warn!("media list unavailable; keeping default background");
        return;
    };
    match images.choose(&mut rand::thread_rng()) {
        Some(url) => dom::set_body_background(url),
        None => log::warn!("media list is empty; keeping default background"),
    }
}
