//! Browser Storage
//!
//! `window.localStorage` backed key-value store.

use wasm_bindgen::JsValue;

use super::traits::{KeyValueStore, StorageError};

/// DOMException message when there is one, debug form otherwise
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Persists to the page's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        // local_storage() errors when storage is disabled (privacy mode, sandboxed iframe)
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Whether a `localStorage` object can be reached at all
    pub fn is_available() -> bool {
        Self::local_storage().is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("[STORAGE] Failed to read '{}': {}", key, describe(&err));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(describe(&err)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let storage = BrowserStorage;
        assert!(BrowserStorage::is_available());

        storage.set("fashion-radar-test", "[1,2,3]").unwrap();
        assert_eq!(storage.get("fashion-radar-test").as_deref(), Some("[1,2,3]"));
    }

    #[wasm_bindgen_test]
    fn test_missing_key_is_none() {
        assert_eq!(BrowserStorage.get("fashion-radar-never-written"), None);
    }
}
