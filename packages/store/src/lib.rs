//! # Store crate: client state for the farm dashboard
//!
//! State containers and the pieces they are assembled from. Nothing here
//! depends on Dioxus: containers write through a [`StateCell`] and report
//! through a [`Notifier`], both supplied by the UI.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`AuthStore`]: session restore, login, register, profile, logout |
//! | [`fields`] | [`FieldStore`]: field list, selection, CRUD |
//! | [`crops`] | [`CropStore`]: disease/pest detection, recommendations, yield |
//! | [`upload`] | image checks run before any upload |
//! | [`forms`] | input validation for every form |
//! | [`guard`] | route access decision |
//! | [`source`] | demo or live data for the dashboard panels |
//! | [`storage`] | durable key/value seam and its keys |
//! | [`config`] | [`ClientConfig`] |
//! | [`display`] | shared text formatting |

pub mod auth;
pub mod cell;
pub mod config;
pub mod crops;
pub mod display;
pub mod error;
pub mod fields;
pub mod forms;
pub mod guard;
pub mod notify;
pub mod source;
pub mod storage;
pub mod upload;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

#[cfg(test)]
mod testing;

pub use auth::{AuthSnapshot, AuthState, AuthStore};
pub use cell::{LocalCell, StateCell};
pub use config::ClientConfig;
pub use crops::{CropState, CropStore};
pub use error::{best_effort, Error, Result};
pub use fields::{FieldState, FieldStore, FieldSummary};
pub use forms::FormErrors;
pub use guard::{decide, Access, GuardDecision, RedirectTarget};
pub use notify::{Notifier, ToastLevel};
pub use source::{DashboardData, DashboardSource, DemoSource, LiveSource};
pub use storage::KeyValueStorage;
pub use upload::{ImageUpload, ValidationError};
