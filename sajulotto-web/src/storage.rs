//! localStorage-backed implementation of the core key-value contract.

use sajulotto_core::KeyValueStore;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum BrowserStoreError {
    #[error("storage error: {0}")]
    Storage(String),
}

/// The browser's `localStorage`, behind the core trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    type Error = BrowserStoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        dom::local_storage()
            .and_then(|storage| storage.get_item(key))
            .map_err(|err| BrowserStoreError::Storage(dom::js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        dom::local_storage()
            .and_then(|storage| storage.set_item(key, value))
            .map_err(|err| BrowserStoreError::Storage(dom::js_error_message(&err)))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        dom::local_storage()
            .and_then(|storage| storage.remove_item(key))
            .map_err(|err| BrowserStoreError::Storage(dom::js_error_message(&err)))
    }
}
