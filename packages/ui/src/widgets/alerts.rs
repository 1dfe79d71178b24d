//! Alert feed shared by the top-bar badge and the alerts panels.

use api::models::advisory::unread_count;
use api::{Alert, CancelToken, Severity};
use dioxus::prelude::*;
use store::display::time_ago;
use store::DashboardSource;

use crate::cell::use_cancel_token;
use crate::components::{Button, ButtonVariant, Card};
use crate::context::{use_dashboard_source, Dashboard};
use crate::widgets::{LoadError, LoadingRow};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertFeed {
    pub alerts: Vec<Alert>,
    pub loaded: bool,
    pub error: Option<String>,
}

impl AlertFeed {
    pub fn unread(&self) -> usize {
        unread_count(&self.alerts)
    }

    fn mark_read(&mut self, id: &str) {
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
            alert.read = true;
        }
    }
}

/// The feed provided by [`AppShell`](crate::AppShell).
pub fn use_alert_feed() -> Signal<AlertFeed> {
    use_context::<Signal<AlertFeed>>()
}

/// Fill `feed` from the dashboard source. Newest alerts first.
pub async fn load_alerts(source: &Dashboard, mut feed: Signal<AlertFeed>, cancel: &CancelToken) {
    match source.alerts(cancel).await {
        Ok(mut alerts) => {
            alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            feed.set(AlertFeed {
                alerts,
                loaded: true,
                error: None,
            });
        }
        Err(e) if e.is_cancelled() => {}
        Err(e) => {
            tracing::warn!("alerts unavailable: {e}");
            feed.set(AlertFeed {
                alerts: Vec::new(),
                loaded: true,
                error: Some(e.user_message("Failed to load alerts")),
            });
        }
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "severity severity--low",
        Severity::Medium => "severity severity--medium",
        Severity::High => "severity severity--high",
        Severity::Critical => "severity severity--critical",
    }
}

/// Alert list with mark-as-read. `limit` caps the number shown.
#[component]
pub fn AlertsPanel(#[props(default)] limit: Option<usize>) -> Element {
    let mut feed = use_alert_feed();
    let source = use_dashboard_source();
    let cancel = use_cancel_token();

    let mark_read = use_callback(move |id: String| {
        let source = source.clone();
        let cancel = cancel.clone();
        spawn(async move {
            match source.mark_alert_read(&id, &cancel).await {
                Ok(()) => feed.write().mark_read(&id),
                Err(e) if e.is_cancelled() => {}
                Err(e) => tracing::warn!(id, "could not mark alert read: {e}"),
            }
        });
    });

    let state = feed();
    let now = chrono::Utc::now();
    let shown: Vec<Alert> = state
        .alerts
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    rsx! {
        Card {
            title: "Alerts",
            class: "alerts-panel",
            if !state.loaded {
                LoadingRow {}
            } else if let Some(message) = state.error.clone() {
                LoadError { message: message }
            } else if shown.is_empty() {
                p { class: "widget-empty", "No alerts" }
            } else {
                ul {
                    class: "alert-list",
                    for alert in shown {
                        li {
                            key: "{alert.id}",
                            class: if alert.read { "alert-item read" } else { "alert-item" },
                            span { class: severity_class(alert.severity), {alert.severity.label()} }
                            div {
                                class: "alert-text",
                                if let Some(title) = alert.title.clone() {
                                    strong { "{title}" }
                                }
                                p { "{alert.message}" }
                                span { class: "alert-time", {time_ago(alert.timestamp, now)} }
                            }
                            if !alert.read {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    class: "alert-mark-read",
                                    onclick: {
                                        let id = alert.id.clone();
                                        move |_| mark_read.call(id.clone())
                                    },
                                    "Mark as read"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
