//! Shared storage constructor for all platforms.
//!
//! Returns the [`store::KeyValueStorage`] the auth store persists into:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Anything else**: process memory via [`store::MemoryStorage`], so the
//!   session ends with the process

use std::sync::Arc;

use store::KeyValueStorage;

pub fn make_storage() -> Arc<dyn KeyValueStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::debug!("no durable storage on this platform, using memory");
        Arc::new(store::MemoryStorage::new())
    }
}
