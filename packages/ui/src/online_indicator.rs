//! Online/offline status indicator for the top bar.

use dioxus::prelude::*;

use crate::context::use_connection;
use crate::Icon;
use crate::icons::{FaCloud, FaPlugCircleXmark};

/// A small icon showing whether the backend answered the last health check.
///
/// - **Online**: green cloud icon
/// - **Offline**: red unplugged icon; data on screen may be stale
/// - **Not yet checked**: nothing
#[component]
pub fn OnlineIndicator() -> Element {
    let connection = use_connection()();

    if !connection.checked {
        return rsx! {};
    }

    if connection.online {
        rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Connected",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        }
    } else {
        rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Server unreachable",
                Icon { icon: FaPlugCircleXmark, width: 14, height: 14 }
                span { class: "online-indicator-text", "Offline" }
            }
        }
    }
}
