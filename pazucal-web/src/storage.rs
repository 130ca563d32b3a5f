//! Typed wrappers over the four local-storage keys the app persists.

use gloo::storage::{LocalStorage, Storage};
use pazucal_core::Credentials;

const KEY_USER: &str = "pazucal.user";
const KEY_TOKEN: &str = "pazucal.token";
const KEY_LAST_READ: &str = "pazucal.last_read";
const KEY_TAB: &str = "pazucal.tab";

/// Stored session, present only when both halves survived.
#[must_use]
pub fn load_credentials() -> Option<Credentials> {
    let user_id: String = LocalStorage::get(KEY_USER).ok()?;
    let token: String = LocalStorage::get(KEY_TOKEN).ok()?;
    Some(Credentials { user_id, token })
}

pub fn save_credentials(creds: &Credentials) {
    let _ = LocalStorage::set(KEY_USER, &creds.user_id);
    let _ = LocalStorage::set(KEY_TOKEN, &creds.token);
}

pub fn clear_credentials() {
    LocalStorage::delete(KEY_USER);
    LocalStorage::delete(KEY_TOKEN);
}

/// Date of the newest announcement the user has opened the popup on.
#[must_use]
pub fn last_read_date() -> Option<String> {
    LocalStorage::get(KEY_LAST_READ).ok()
}

pub fn set_last_read_date(date: &str) {
    let _ = LocalStorage::set(KEY_LAST_READ, date);
}

/// Identifier of the last active tab, restored on the next load.
#[must_use]
pub fn last_active_tab() -> Option<String> {
    LocalStorage::get(KEY_TAB).ok()
}

pub fn set_last_active_tab(id: &str) {
    let _ = LocalStorage::set(KEY_TAB, id);
}
