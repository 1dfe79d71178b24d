use api::DashboardStats;
use dioxus::prelude::*;
use store::display::hectares;

use crate::cell::use_cancel_token;
use crate::components::StatCard;
use crate::context::{use_fields, use_services};
use crate::icons::{FaBell, FaMapLocationDot, FaRulerCombined, FaSeedling};
use crate::widgets::{settle_into, use_alert_feed, Load};
use crate::Icon;

/// Stat cards across the top of the dashboard.
///
/// Field totals come from the field list already in state. The backend's
/// counters are only asked for when running live; they fill in whatever the
/// field list cannot, such as monitored crops not tied to a field.
#[component]
pub fn StatsOverview() -> Element {
    let services = use_services();
    let fields = use_fields();
    let feed = use_alert_feed();
    let cancel = use_cancel_token();
    let server = use_signal(|| Load::<DashboardStats>::Loading);
    let live = !services.dashboard.is_demo();

    let _loader = use_resource(move || {
        let client = services.client.clone();
        let cancel = cancel.clone();
        async move {
            if live {
                settle_into(
                    server,
                    client.users().dashboard_stats(&cancel).await,
                    "Failed to load dashboard stats",
                );
            }
        }
    });

    let summary = fields.read().summary();
    let stats = match server() {
        Load::Ready(stats) => Some(stats),
        _ => None,
    };

    let field_count = summary.count.max(stats.as_ref().map_or(0, |s| s.total_fields as usize));
    let area = if summary.total_area > 0.0 {
        summary.total_area
    } else {
        stats.as_ref().map_or(0.0, |s| s.total_area)
    };
    let crops = summary
        .crops
        .len()
        .max(stats.as_ref().map_or(0, |s| s.crops_monitored as usize));
    let unread = feed.read().unread();
    let crop_hint = if summary.crops.is_empty() {
        "No crops recorded".to_string()
    } else {
        summary.crops.join(", ")
    };

    rsx! {
        div {
            class: "stats-grid",
            StatCard {
                label: "Fields",
                value: "{field_count}",
                icon: rsx! { Icon { icon: FaMapLocationDot, width: 20, height: 20 } },
            }
            StatCard {
                label: "Total Area",
                value: hectares(area),
                icon: rsx! { Icon { icon: FaRulerCombined, width: 20, height: 20 } },
                tone: "blue",
            }
            StatCard {
                label: "Crops",
                value: "{crops}",
                icon: rsx! { Icon { icon: FaSeedling, width: 20, height: 20 } },
                hint: crop_hint,
                tone: "amber",
            }
            StatCard {
                label: "Unread Alerts",
                value: "{unread}",
                icon: rsx! { Icon { icon: FaBell, width: 20, height: 20 } },
                tone: if unread > 0 { "red".to_string() } else { "green".to_string() },
            }
        }
    }
}
