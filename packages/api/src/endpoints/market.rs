use crate::cancel::CancelToken;
use crate::models::{MarketPrice, PriceTrend};
use crate::transport::Transport;
use crate::{ApiClient, ApiError};

const PRICES: &str = "/api/v1/market/prices/";
const TRENDS: &str = "/api/v1/market/trends/";

pub struct MarketApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

impl<T: Transport> MarketApi<'_, T> {
    /// Latest prices, optionally narrowed to one commodity.
    pub async fn prices(
        &self,
        commodity: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<Vec<MarketPrice>, ApiError> {
        let query: Vec<(&str, String)> = commodity
            .map(|c| vec![("commodity", c.to_string())])
            .unwrap_or_default();
        self.client.get(PRICES, &query, cancel).await
    }

    pub async fn trends(
        &self,
        commodity: &str,
        days: u16,
        cancel: &CancelToken,
    ) -> Result<PriceTrend, ApiError> {
        let query = [("commodity", commodity.to_string()), ("days", days.to_string())];
        self.client.get(TRENDS, &query, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use crate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_trends_forwards_commodity_and_window() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/v1/market/trends/",
            200,
            json!({"commodity": "wheat", "data": [
                {"date": "2024-05-01", "price": 2000.0},
                {"date": "2024-05-30", "price": 2200.0}
            ]}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let trend = client
            .market()
            .trends("wheat", 30, &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(trend.commodity, "wheat");
        assert_eq!(trend.points.len(), 2);
        assert_eq!(trend.overall_change().map(f64::round), Some(10.0));
        let sent = &mock.requests()[0];
        assert_eq!(sent.query_value("commodity"), Some("wheat"));
        assert_eq!(sent.query_value("days"), Some("30"));
    }

    #[tokio::test]
    async fn test_prices_without_commodity_sends_no_query() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/v1/market/prices/", 200, json!([]));
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let prices = client
            .market()
            .prices(None, &CancelToken::new())
            .await
            .unwrap();

        assert!(prices.is_empty());
        assert!(mock.requests()[0].query.is_empty());
    }
}
