//! # Dashboard widgets
//!
//! Each widget loads its own data through the
//! [`DashboardSource`](store::DashboardSource) in context, so it renders the
//! same against demo data or the backend.
//!
//! | Widget | Data |
//! |--------|------|
//! | [`StatsOverview`] | field summary, dashboard counters, alert feed |
//! | [`WeatherCard`] | current conditions and forecast |
//! | [`MarketPrices`] | latest commodity prices |
//! | [`IrrigationCard`] | soil moisture and next irrigation |
//! | [`ActivityFeed`] | recent activity |
//! | [`AlertsPanel`] | alert feed shared with the top bar, mark-as-read |

pub mod activity;
pub mod alerts;
pub mod irrigation;
pub mod market;
pub mod stats;
pub mod weather;

pub use activity::ActivityFeed;
pub use alerts::{use_alert_feed, AlertFeed, AlertsPanel};
pub use irrigation::IrrigationCard;
pub use market::MarketPrices;
pub use stats::StatsOverview;
pub use weather::{preferred_location, WeatherCard};

use api::ApiError;
use dioxus::prelude::*;

use crate::components::Spinner;

/// Loading state of one widget.
#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    /// The state a finished request leaves behind. `None` for a cancelled
    /// request, whose widget is already gone.
    pub fn settle(result: Result<T, ApiError>, fallback: &str) -> Option<Self> {
        match result {
            Ok(value) => Some(Load::Ready(value)),
            Err(ApiError::Cancelled) => None,
            Err(e) => {
                tracing::warn!("{fallback}: {e}");
                Some(Load::Failed(e.user_message(fallback)))
            }
        }
    }
}

/// Write the outcome of a request into a widget's state signal.
pub(crate) fn settle_into<T: 'static>(
    mut state: Signal<Load<T>>,
    result: Result<T, ApiError>,
    fallback: &str,
) {
    if let Some(load) = Load::settle(result, fallback) {
        state.set(load);
    }
}

#[component]
pub(crate) fn LoadError(message: String) -> Element {
    rsx! {
        p { class: "widget-error", "{message}" }
    }
}

#[component]
pub(crate) fn LoadingRow() -> Element {
    rsx! {
        Spinner { label: "Loading..." }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle() {
        assert_eq!(Load::settle(Ok(3), "x"), Some(Load::Ready(3)));
        assert_eq!(Load::<u8>::settle(Err(ApiError::Cancelled), "x"), None);
        assert_eq!(
            Load::<u8>::settle(Err(ApiError::Transport("down".into())), "Failed to load weather"),
            Some(Load::Failed("Failed to load weather".into()))
        );
    }
}
