//! `localStorage` backing for the cart.

use bistro_core::CartStorage;

/// Cart persistence over `window.localStorage`.
///
/// Off the browser (server-side render tests) the store behaves as empty and
/// accepts writes without keeping them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalCartStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(target_arch = "wasm32")]
fn storage() -> Result<web_sys::Storage, WebStorageError> {
    crate::dom::local_storage()
        .map_err(|err| WebStorageError::Storage(crate::dom::js_error_message(&err)))
}

#[cfg(target_arch = "wasm32")]
fn js_err(err: &wasm_bindgen::JsValue) -> WebStorageError {
    WebStorageError::Storage(crate::dom::js_error_message(err))
}

impl CartStorage for LocalCartStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?.get_item(key).map_err(|e| js_err(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?.set_item(key, value).map_err(|e| js_err(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?.remove_item(key).map_err(|e| js_err(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::LocalCartStorage;
    use bistro_core::{CART_STORAGE_KEY, CartStorage};

    #[test]
    fn native_storage_reads_nothing_and_accepts_writes() {
        let storage = LocalCartStorage;
        assert!(storage.write(CART_STORAGE_KEY, "{}").is_ok());
        assert!(matches!(storage.read(CART_STORAGE_KEY), Ok(None)));
        assert!(storage.remove(CART_STORAGE_KEY).is_ok());
    }
}
