use api::ActivityItem;
use dioxus::prelude::*;
use store::display::time_ago;
use store::source::ACTIVITY_LIMIT;
use store::DashboardSource;

use crate::cell::use_cancel_token;
use crate::components::Card;
use crate::context::use_dashboard_source;
use crate::icons::{FaBug, FaDroplet, FaLeaf, FaMapLocationDot, FaWheatAwn};
use crate::widgets::{settle_into, Load, LoadError, LoadingRow};
use crate::Icon;

#[component]
fn ActivityIcon(kind: String) -> Element {
    match kind.as_str() {
        "irrigation" => rsx! { Icon { icon: FaDroplet, width: 14, height: 14 } },
        "field" => rsx! { Icon { icon: FaMapLocationDot, width: 14, height: 14 } },
        "disease" | "pest" => rsx! { Icon { icon: FaBug, width: 14, height: 14 } },
        "harvest" | "yield" => rsx! { Icon { icon: FaWheatAwn, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaLeaf, width: 14, height: 14 } },
    }
}

/// The most recent farm activity, newest first.
#[component]
pub fn ActivityFeed() -> Element {
    let source = use_dashboard_source();
    let cancel = use_cancel_token();
    let items = use_signal(|| Load::<Vec<ActivityItem>>::Loading);

    let _loader = use_resource(move || {
        let source = source.clone();
        let cancel = cancel.clone();
        async move {
            let result = source
                .recent_activity(ACTIVITY_LIMIT, &cancel)
                .await
                .map(|mut items| {
                    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                    items.truncate(ACTIVITY_LIMIT);
                    items
                });
            settle_into(items, result, "Failed to load recent activity");
        }
    });

    let now = chrono::Utc::now();

    rsx! {
        Card {
            title: "Recent Activity",
            class: "activity-card",
            {match items() {
                Load::Loading => rsx! { LoadingRow {} },
                Load::Failed(message) => rsx! { LoadError { message: message } },
                Load::Ready(list) if list.is_empty() => rsx! {
                    p { class: "widget-empty", "No recent activity" }
                },
                Load::Ready(list) => rsx! {
                    ul {
                        class: "activity-list",
                        for item in list {
                            li {
                                key: "{item.id}",
                                class: "activity-item",
                                ActivityIcon { kind: item.kind.clone() }
                                span { class: "activity-text", "{item.description}" }
                                span { class: "activity-time", {time_ago(item.timestamp, now)} }
                            }
                        }
                    }
                },
            }}
        }
    }
}
