use api::IrrigationStatus;
use dioxus::prelude::*;
use store::display::{grouped, time_until};
use store::DashboardSource;

use crate::cell::use_cancel_token;
use crate::components::Card;
use crate::context::use_dashboard_source;
use crate::widgets::{settle_into, Load, LoadError, LoadingRow};

/// Soil moisture gauge, next scheduled irrigation and weekly water use.
#[component]
pub fn IrrigationCard() -> Element {
    let source = use_dashboard_source();
    let cancel = use_cancel_token();
    let status = use_signal(|| Load::<IrrigationStatus>::Loading);

    let _loader = use_resource(move || {
        let source = source.clone();
        let cancel = cancel.clone();
        async move {
            settle_into(
                status,
                source.irrigation_status(&cancel).await,
                "Failed to load irrigation status",
            );
        }
    });

    let now = chrono::Utc::now();

    rsx! {
        Card {
            title: "Irrigation",
            class: "irrigation-card",
            {match status() {
                Load::Loading => rsx! { LoadingRow {} },
                Load::Failed(message) => rsx! { LoadError { message: message } },
                Load::Ready(status) => {
                    let moisture = status.soil_moisture.clamp(0.0, 100.0);
                    let band = status.moisture_label().to_ascii_lowercase();
                    rsx! {
                        div {
                            class: "moisture",
                            div {
                                class: "moisture-header",
                                span { "Soil moisture" }
                                span { class: "moisture-value", "{moisture:.0}% " {status.moisture_label()} }
                            }
                            div {
                                class: "moisture-bar",
                                div {
                                    class: format!("moisture-fill moisture-fill--{band}"),
                                    style: format!("width: {moisture:.0}%"),
                                }
                            }
                        }
                        dl {
                            class: "irrigation-details",
                            dt { "Next irrigation" }
                            dd {
                                {match status.next_irrigation {
                                    Some(at) => time_until(at, now),
                                    None => "Not scheduled".to_string(),
                                }}
                            }
                            dt { "Water used this week" }
                            dd { {format!("{} L", grouped(status.water_used_liters))} }
                            dt { "Active schedules" }
                            dd { "{status.active_schedules}" }
                        }
                    }
                }
            }}
        }
    }
}
