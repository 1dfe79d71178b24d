//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] used on the web platform. It
//! reopens `window.localStorage` on every call, since `web_sys::Storage` is a
//! cheap handle and the window may be unavailable (e.g. inside a worker).
//!
//! Errors (quota exceeded, storage disabled by privacy settings) are logged
//! and swallowed: the session then simply does not survive a reload.

use crate::storage::KeyValueStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable, value not persisted");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, "localStorage write failed: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!(key, "localStorage remove failed: {e:?}");
            }
        }
    }
}
