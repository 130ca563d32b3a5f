//! Browser-only round-trips for the persisted keys.

#![cfg(target_arch = "wasm32")]

use pazucal_core::Credentials;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn credentials_round_trip() {
    let creds = Credentials {
        user_id: String::from("tester"),
        token: String::from("tok-123"),
    };
    pazucal_web::storage::save_credentials(&creds);
    assert_eq!(pazucal_web::storage::load_credentials(), Some(creds));

    pazucal_web::storage::clear_credentials();
    assert_eq!(pazucal_web::storage::load_credentials(), None);
}

#[wasm_bindgen_test]
fn watermark_and_tab_round_trip() {
    pazucal_web::storage::set_last_read_date("2025-06-01");
    assert_eq!(
        pazucal_web::storage::last_read_date().as_deref(),
        Some("2025-06-01")
    );

    pazucal_web::storage::set_last_active_tab("about");
    assert_eq!(
        pazucal_web::storage::last_active_tab().as_deref(),
        Some("about")
    );
}
