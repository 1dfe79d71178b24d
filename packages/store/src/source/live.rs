use api::{
    ActivityItem, Alert, ApiClient, ApiError, CancelToken, CurrentWeather, ForecastDay,
    IrrigationStatus, Location, MarketPrice, Transport,
};

use super::DashboardSource;

/// Dashboard data from the backend.
#[derive(Clone, Debug)]
pub struct LiveSource<T> {
    client: ApiClient<T>,
}

impl<T> LiveSource<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }
}

impl<T: Transport> DashboardSource for LiveSource<T> {
    async fn current_weather(
        &self,
        location: &Location,
        cancel: &CancelToken,
    ) -> Result<CurrentWeather, ApiError> {
        self.client.weather().current(location, cancel).await
    }

    async fn forecast(
        &self,
        location: &Location,
        days: u8,
        cancel: &CancelToken,
    ) -> Result<Vec<ForecastDay>, ApiError> {
        self.client.weather().forecast(location, days, cancel).await
    }

    async fn market_prices(&self, cancel: &CancelToken) -> Result<Vec<MarketPrice>, ApiError> {
        self.client.market().prices(None, cancel).await
    }

    async fn irrigation_status(&self, cancel: &CancelToken) -> Result<IrrigationStatus, ApiError> {
        self.client.irrigation().status(cancel).await
    }

    async fn recent_activity(
        &self,
        limit: usize,
        cancel: &CancelToken,
    ) -> Result<Vec<ActivityItem>, ApiError> {
        self.client.advisory().activity(limit, cancel).await
    }

    async fn alerts(&self, cancel: &CancelToken) -> Result<Vec<Alert>, ApiError> {
        self.client.advisory().alerts(cancel).await
    }

    async fn mark_alert_read(&self, id: &str, cancel: &CancelToken) -> Result<(), ApiError> {
        self.client.advisory().mark_alert_read(id, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mock_client;
    use api::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_live_source_reads_backend() {
        let (mock, client) = mock_client();
        mock.respond(
            Method::Get,
            "/api/v1/advisory/alerts/",
            200,
            json!([{"id": 3, "type": "pest", "severity": "high", "message": "Aphids spotted",
                    "created_at": "2024-06-01T08:00:00Z"}]),
        );
        let source = LiveSource::new(client);

        let alerts = source.alerts(&CancelToken::new()).await.unwrap();

        assert_eq!(alerts[0].id, "3");
        assert_eq!(alerts[0].severity, api::Severity::High);
        assert_eq!(mock.request_count(), 1);
    }
}
