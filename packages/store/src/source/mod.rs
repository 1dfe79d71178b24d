//! # Dashboard data sources
//!
//! The dashboard panels (weather, market, irrigation, activity, alerts) read
//! through [`DashboardSource`] so they can run against the backend or against
//! built-in demo data without change.
//!
//! | Implementation | Backing |
//! |----------------|---------|
//! | [`LiveSource`] | the domain API clients |
//! | [`DemoSource`] | fixed sample data, optional simulated latency |
//! | [`DashboardData`] | one of the above, chosen from [`DashboardConfig`] |
//!
//! Demo data ignores cancellation: it resolves immediately or after the
//! configured delay.

mod demo;
mod live;

use std::future::Future;

use api::{
    ActivityItem, Alert, ApiClient, ApiError, CancelToken, CurrentWeather, ForecastDay,
    IrrigationStatus, Location, MarketPrice, Transport,
};

use crate::config::DashboardConfig;

pub use demo::DemoSource;
pub use live::LiveSource;

/// Number of activity entries shown on the dashboard.
pub const ACTIVITY_LIMIT: usize = 10;

pub trait DashboardSource {
    fn current_weather(
        &self,
        location: &Location,
        cancel: &CancelToken,
    ) -> impl Future<Output = Result<CurrentWeather, ApiError>>;

    fn forecast(
        &self,
        location: &Location,
        days: u8,
        cancel: &CancelToken,
    ) -> impl Future<Output = Result<Vec<ForecastDay>, ApiError>>;

    fn market_prices(
        &self,
        cancel: &CancelToken,
    ) -> impl Future<Output = Result<Vec<MarketPrice>, ApiError>>;

    fn irrigation_status(
        &self,
        cancel: &CancelToken,
    ) -> impl Future<Output = Result<IrrigationStatus, ApiError>>;

    fn recent_activity(
        &self,
        limit: usize,
        cancel: &CancelToken,
    ) -> impl Future<Output = Result<Vec<ActivityItem>, ApiError>>;

    fn alerts(&self, cancel: &CancelToken) -> impl Future<Output = Result<Vec<Alert>, ApiError>>;

    fn mark_alert_read(
        &self,
        id: &str,
        cancel: &CancelToken,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// The source the running app uses.
#[derive(Clone)]
pub enum DashboardData<T> {
    Demo(DemoSource),
    Live(LiveSource<T>),
}

impl<T: Transport> DashboardData<T> {
    pub fn from_config(config: &DashboardConfig, client: ApiClient<T>) -> Self {
        if config.demo_data {
            tracing::info!("dashboard panels use demo data");
            DashboardData::Demo(DemoSource::new().with_latency_ms(config.demo_latency_ms))
        } else {
            DashboardData::Live(LiveSource::new(client))
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, DashboardData::Demo(_))
    }
}

impl<T: Transport> DashboardSource for DashboardData<T> {
    async fn current_weather(
        &self,
        location: &Location,
        cancel: &CancelToken,
    ) -> Result<CurrentWeather, ApiError> {
        match self {
            DashboardData::Demo(s) => s.current_weather(location, cancel).await,
            DashboardData::Live(s) => s.current_weather(location, cancel).await,
        }
    }

    async fn forecast(
        &self,
        location: &Location,
        days: u8,
        cancel: &CancelToken,
    ) -> Result<Vec<ForecastDay>, ApiError> {
        match self {
            DashboardData::Demo(s) => s.forecast(location, days, cancel).await,
            DashboardData::Live(s) => s.forecast(location, days, cancel).await,
        }
    }

    async fn market_prices(&self, cancel: &CancelToken) -> Result<Vec<MarketPrice>, ApiError> {
        match self {
            DashboardData::Demo(s) => s.market_prices(cancel).await,
            DashboardData::Live(s) => s.market_prices(cancel).await,
        }
    }

    async fn irrigation_status(&self, cancel: &CancelToken) -> Result<IrrigationStatus, ApiError> {
        match self {
            DashboardData::Demo(s) => s.irrigation_status(cancel).await,
            DashboardData::Live(s) => s.irrigation_status(cancel).await,
        }
    }

    async fn recent_activity(
        &self,
        limit: usize,
        cancel: &CancelToken,
    ) -> Result<Vec<ActivityItem>, ApiError> {
        match self {
            DashboardData::Demo(s) => s.recent_activity(limit, cancel).await,
            DashboardData::Live(s) => s.recent_activity(limit, cancel).await,
        }
    }

    async fn alerts(&self, cancel: &CancelToken) -> Result<Vec<Alert>, ApiError> {
        match self {
            DashboardData::Demo(s) => s.alerts(cancel).await,
            DashboardData::Live(s) => s.alerts(cancel).await,
        }
    }

    async fn mark_alert_read(&self, id: &str, cancel: &CancelToken) -> Result<(), ApiError> {
        match self {
            DashboardData::Demo(s) => s.mark_alert_read(id, cancel).await,
            DashboardData::Live(s) => s.mark_alert_read(id, cancel).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mock_client;

    #[tokio::test]
    async fn test_config_selects_source() {
        let (mock, client) = mock_client();
        let demo = DashboardData::from_config(
            &DashboardConfig {
                demo_data: true,
                demo_latency_ms: 0,
            },
            client.clone(),
        );
        assert!(demo.is_demo());
        assert!(!demo.market_prices(&CancelToken::new()).await.unwrap().is_empty());
        assert_eq!(mock.request_count(), 0);

        let live = DashboardData::from_config(&DashboardConfig::default(), client);
        assert!(!live.is_demo());
    }
}
