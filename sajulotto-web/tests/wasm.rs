//! Browser-only smoke tests. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use sajulotto_core::{AccountGate, KeyValueStore};
use sajulotto_web::storage::BrowserStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_store_round_trips_strings() {
    let store = BrowserStore;
    store.set("sajulotto.test", "value").unwrap();
    assert_eq!(
        store.get("sajulotto.test").unwrap(),
        Some("value".to_string())
    );
    store.remove("sajulotto.test").unwrap();
    assert_eq!(store.get("sajulotto.test").unwrap(), None);
}

#[wasm_bindgen_test]
fn member_flag_round_trips_through_local_storage() {
    let gate = AccountGate::new(BrowserStore);
    gate.log_out().unwrap();
    assert!(!gate.is_member());
    gate.log_in().unwrap();
    assert!(gate.is_member());
    gate.log_out().unwrap();
}
