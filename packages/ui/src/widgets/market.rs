use api::{MarketPrice, Trend};
use dioxus::prelude::*;
use store::display::{grouped, signed_percent};
use store::DashboardSource;

use crate::cell::use_cancel_token;
use crate::components::Card;
use crate::context::use_dashboard_source;
use crate::icons::{FaArrowTrendDown, FaArrowTrendUp, FaMinus};
use crate::widgets::{settle_into, Load, LoadError, LoadingRow};
use crate::Icon;

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trend trend--up",
        Trend::Down => "trend trend--down",
        Trend::Flat => "trend trend--flat",
    }
}

#[component]
fn TrendIcon(trend: Trend) -> Element {
    match trend {
        Trend::Up => rsx! { Icon { icon: FaArrowTrendUp, width: 14, height: 14 } },
        Trend::Down => rsx! { Icon { icon: FaArrowTrendDown, width: 14, height: 14 } },
        Trend::Flat => rsx! { Icon { icon: FaMinus, width: 14, height: 14 } },
    }
}

/// Latest commodity prices with day-over-day change.
#[component]
pub fn MarketPrices(#[props(default)] limit: Option<usize>) -> Element {
    let source = use_dashboard_source();
    let cancel = use_cancel_token();
    let prices = use_signal(|| Load::<Vec<MarketPrice>>::Loading);

    let _loader = use_resource(move || {
        let source = source.clone();
        let cancel = cancel.clone();
        async move {
            settle_into(
                prices,
                source.market_prices(&cancel).await,
                "Failed to load market prices",
            );
        }
    });

    rsx! {
        Card {
            title: "Market Prices",
            class: "market-card",
            {match prices() {
                Load::Loading => rsx! { LoadingRow {} },
                Load::Failed(message) => rsx! { LoadError { message: message } },
                Load::Ready(rows) if rows.is_empty() => rsx! {
                    p { class: "widget-empty", "No price data" }
                },
                Load::Ready(rows) => rsx! {
                    table {
                        class: "market-table",
                        thead {
                            tr {
                                th { "Commodity" }
                                th { "Market" }
                                th { class: "num", "Price" }
                                th { class: "num", "Change" }
                            }
                        }
                        tbody {
                            for row in rows.into_iter().take(limit.unwrap_or(usize::MAX)) {
                                tr {
                                    key: "{row.commodity}-{row.market}",
                                    td { "{row.commodity}" }
                                    td { "{row.market}" }
                                    td {
                                        class: "num",
                                        {format!("₹{} {}", grouped(row.price), row.unit)}
                                    }
                                    td {
                                        class: trend_class(row.trend()),
                                        TrendIcon { trend: row.trend() }
                                        {signed_percent(row.change_percent)}
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
