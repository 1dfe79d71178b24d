use api::User;
use dioxus::prelude::*;

use crate::icons::{FaBars, FaBell};
use crate::toast::ToastHistoryToggle;
use crate::{Icon, LogoutButton, OnlineIndicator};

/// Top bar of the signed-in shell.
#[component]
pub fn Navbar(
    user: Option<User>,
    unread_alerts: usize,
    on_toggle_sidebar: EventHandler<()>,
    on_open_alerts: EventHandler<()>,
    on_open_profile: EventHandler<()>,
) -> Element {
    rsx! {
        header {
            class: "navbar",
            button {
                class: "navbar-menu",
                title: "Menu",
                onclick: move |_| on_toggle_sidebar.call(()),
                Icon { icon: FaBars, width: 16, height: 16 }
            }
            div { class: "navbar-spacer" }
            OnlineIndicator {}
            ToastHistoryToggle {}
            button {
                class: "navbar-alerts",
                title: "Alerts",
                onclick: move |_| on_open_alerts.call(()),
                Icon { icon: FaBell, width: 16, height: 16 }
                if unread_alerts > 0 {
                    span { class: "navbar-badge", "{unread_alerts}" }
                }
            }
            if let Some(user) = user {
                button {
                    class: "navbar-user",
                    onclick: move |_| on_open_profile.call(()),
                    span { class: "navbar-avatar", {user.initials()} }
                    span { class: "navbar-user-name", {user.display_name().to_string()} }
                }
            }
            LogoutButton { class: "btn btn-ghost navbar-logout" }
        }
    }
}
