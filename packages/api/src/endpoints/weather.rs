use crate::cancel::CancelToken;
use crate::models::weather::Forecast;
use crate::models::{Alert, CurrentWeather, ForecastDay, Location};
use crate::transport::Transport;
use crate::{ApiClient, ApiError};

const CURRENT: &str = "/api/v1/weather/current/";
const FORECAST: &str = "/api/v1/weather/forecast/";
const ALERTS: &str = "/api/v1/weather/alerts/";

pub struct WeatherApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

impl<T: Transport> WeatherApi<'_, T> {
    pub async fn current(
        &self,
        location: &Location,
        cancel: &CancelToken,
    ) -> Result<CurrentWeather, ApiError> {
        self.client.get(CURRENT, &location.to_query(), cancel).await
    }

    pub async fn forecast(
        &self,
        location: &Location,
        days: u8,
        cancel: &CancelToken,
    ) -> Result<Vec<ForecastDay>, ApiError> {
        let mut query = location.to_query();
        query.push(("days", days.to_string()));
        let forecast: Forecast = self.client.get(FORECAST, &query, cancel).await?;
        Ok(forecast.forecast)
    }

    pub async fn alerts(
        &self,
        location: &Location,
        cancel: &CancelToken,
    ) -> Result<Vec<Alert>, ApiError> {
        self.client.get(ALERTS, &location.to_query(), cancel).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use crate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_forecast_forwards_days_and_location() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/v1/weather/forecast/",
            200,
            json!({"forecast": [{"date": "2024-06-01", "high": 33, "low": 24}]}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");
        let days = client
            .weather()
            .forecast(&Location::Named("Nashik".into()), 5, &CancelToken::new())
            .await
            .unwrap();
        assert_eq!(days.len(), 1);

        let sent = &mock.requests()[0];
        assert_eq!(sent.query_value("location"), Some("Nashik"));
        assert_eq!(sent.query_value("days"), Some("5"));
    }
}
