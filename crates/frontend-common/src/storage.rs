//! Browser `sessionStorage` access

use goldmanager_http::{SessionStorage, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.sessionStorage`, looked up on every read
///
/// Holds no JS handles, so it can live inside the `Send + Sync` token provider
/// of the shared client.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        get_session_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(describe(&e)))
    }
}

/// Get sessionStorage
fn get_session_storage() -> Result<Storage, StorageError> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

    window
        .session_storage()
        .map_err(|e| StorageError::Unavailable(describe(&e)))?
        .ok_or_else(|| StorageError::Unavailable("sessionStorage is disabled".to_string()))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
