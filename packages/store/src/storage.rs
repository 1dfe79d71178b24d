//! # Durable client storage
//!
//! A string key/value interface shaped like the browser's `localStorage`.
//! Two keys survive reloads:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | the bearer token, as a bare string |
//! | [`AUTH_SNAPSHOT_KEY`] | JSON [`AuthSnapshot`](crate::auth::AuthSnapshot): `{"user": ..., "isAuthenticated": ...}` |
//!
//! Implementations: [`MemoryStorage`](crate::MemoryStorage) (tests, native
//! builds) and `LocalStorage` (wasm32 with the `web` feature).

pub const TOKEN_KEY: &str = "token";
pub const AUTH_SNAPSHOT_KEY: &str = "auth-storage";

/// Synchronous string storage. Writes are fire-and-forget: a full or
/// unavailable backend degrades to "nothing stored".
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
