//! Landing page: stat cards and every dashboard widget.

use dioxus::prelude::*;
use ui::widgets::{
    preferred_location, ActivityFeed, AlertsPanel, IrrigationCard, MarketPrices, StatsOverview,
    WeatherCard,
};
use ui::{use_auth, use_cancel_token, use_field_store, use_fields};

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let fields = use_fields();
    let store = use_field_store();
    let cancel = use_cancel_token();

    // Stat cards and the weather location come from the field list
    let _loader = use_resource(move || {
        let store = store.clone();
        let cancel = cancel.clone();
        async move { store.fetch_fields(&cancel).await }
    });

    let greeting = auth
        .read()
        .user
        .as_ref()
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_else(|| "Welcome".to_string());
    let location = preferred_location(auth.read().user.as_ref(), &fields.read().fields);

    rsx! {
        div {
            class: "page-header",
            h1 { "{greeting}" }
        }
        StatsOverview {}
        div {
            class: "page-grid",
            WeatherCard { location: location }
            IrrigationCard {}
            MarketPrices { limit: 5 }
            AlertsPanel { limit: 5 }
            ActivityFeed {}
        }
    }
}
