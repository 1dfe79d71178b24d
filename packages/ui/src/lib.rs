//! This crate contains all shared UI for the farm dashboard.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod cell;
pub use cell::{use_cancel_token, SignalCell};

mod storage;
pub use storage::make_storage;

pub mod context;
pub use context::{
    use_auth, use_auth_store, use_config, use_connection, use_crop_store, use_crops,
    use_dashboard_source, use_field_store, use_fields, use_services, AppServices, Connection,
};

pub mod views;

pub mod forms;
pub mod widgets;

pub const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{AuthProvider, LogoutButton};

mod online_indicator;
pub use online_indicator::OnlineIndicator;

mod shell;
pub use shell::{AppShell, NavSection};

pub mod toast;
pub use toast::{
    use_toasts, SignalNotifier, ToastHistoryPanel, ToastHistoryToggle, ToastHost, ToastQueue,
};

/// Resolve after `ms` milliseconds on whichever runtime is driving the app.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
