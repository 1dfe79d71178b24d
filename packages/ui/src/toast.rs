//! Toast queue and notification history.
//!
//! Stores report through [`store::Notifier`]; [`SignalNotifier`] pushes each
//! message onto the [`ToastQueue`] signal provided at the app root.
//! [`ToastHost`] shows the live toasts and dismisses them after
//! [`TOAST_TIMEOUT_MS`]. Every toast is also kept in the history opened with
//! [`ToastHistoryToggle`].

use dioxus::prelude::*;
use store::{Notifier, ToastLevel};

use crate::Icon;
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation, FaXmark};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

pub const TOAST_TIMEOUT_MS: u32 = 4_000;
/// Oldest history entries are dropped past this many.
const HISTORY_LIMIT: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub active: Vec<Toast>,
    pub history: Vec<Toast>,
    pub history_visible: bool,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        self.next_id += 1;
        let toast = Toast {
            id: self.next_id,
            level,
            message: message.to_string(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        };
        self.active.push(toast.clone());
        self.history.push(toast);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// [`Notifier`] writing to the toast queue signal.
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    queue: Signal<ToastQueue>,
}

impl SignalNotifier {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }
}

impl Notifier for SignalNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        match level {
            ToastLevel::Error => tracing::warn!("toast: {message}"),
            _ => tracing::debug!("toast: {message}"),
        }
        let mut queue = self.queue;
        let id = queue.write().push(level, message);
        spawn(async move {
            crate::sleep_ms(TOAST_TIMEOUT_MS).await;
            queue.write().dismiss(id);
        });
    }
}

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Error => "error",
        ToastLevel::Warning => "warning",
        ToastLevel::Success => "success",
        ToastLevel::Info => "info",
    }
}

#[component]
fn ToastIcon(level: ToastLevel) -> Element {
    match level {
        ToastLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        ToastLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
        ToastLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
        ToastLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
    }
}

/// Live toasts, stacked bottom-right.
#[component]
pub fn ToastHost() -> Element {
    let mut queue = use_toasts();
    let active = queue.read().active.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        div {
            class: "toast-stack",
            for toast in active {
                div {
                    key: "{toast.id}",
                    class: format!("toast toast--{}", level_class(toast.level)),
                    role: "status",
                    ToastIcon { level: toast.level }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| queue.write().dismiss(toast.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ToastHistoryPanel() -> Element {
    let mut queue = use_toasts();

    if !queue.read().history_visible {
        return rsx! {};
    }

    let entries = queue.read().history.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toast-history-panel",
            div {
                class: "toast-history-header",
                span { "Notifications" }
                div {
                    class: "toast-history-actions",
                    button {
                        onclick: move |_| queue.write().history.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| queue.write().history_visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "toast-history-entries",
                if entries.is_empty() {
                    p { class: "toast-history-empty", "No notifications yet" }
                }
                for entry in entries.iter().rev() {
                    div {
                        key: "{entry.id}",
                        class: format!("toast-history-entry {}", level_class(entry.level)),
                        span { class: "toast-history-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ToastHistoryToggle() -> Element {
    let mut queue = use_toasts();
    let count = queue.read().history.len();
    let has_errors = queue
        .read()
        .history
        .iter()
        .any(|t| t.level == ToastLevel::Error);

    rsx! {
        button {
            class: if has_errors { "toast-history-toggle has-errors" } else { "toast-history-toggle" },
            onclick: move |_| {
                let visible = queue.read().history_visible;
                queue.write().history_visible = !visible;
            },
            title: "Notification history",
            if count > 0 {
                "{count}"
            } else {
                "Log"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Success, "Field added successfully");
        let b = queue.push(ToastLevel::Error, "Failed to fetch fields");
        assert_ne!(a, b);
        assert_eq!(queue.active.len(), 2);

        queue.dismiss(a);
        assert_eq!(queue.active.len(), 1);
        assert_eq!(queue.active[0].message, "Failed to fetch fields");
        assert_eq!(queue.history.len(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut queue = ToastQueue::default();
        for i in 0..(HISTORY_LIMIT + 5) {
            queue.push(ToastLevel::Info, &format!("message {i}"));
        }
        assert_eq!(queue.history.len(), HISTORY_LIMIT);
        assert_eq!(queue.history[0].message, "message 5");
    }
}
