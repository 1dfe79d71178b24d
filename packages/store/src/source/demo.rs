use std::sync::{Arc, Mutex};

use api::{
    ActivityItem, Alert, ApiError, CancelToken, CurrentWeather, ForecastDay, IrrigationStatus,
    Location, MarketPrice, Severity,
};
use chrono::{Duration, Utc};

use super::DashboardSource;

/// Sample data for running the dashboard without a backend.
///
/// Alerts are held in memory so marking one as read sticks for the lifetime
/// of the source. Everything else is regenerated per call, relative to now.
#[derive(Clone, Debug)]
pub struct DemoSource {
    alerts: Arc<Mutex<Vec<Alert>>>,
    latency_ms: u32,
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoSource {
    pub fn new() -> Self {
        Self {
            alerts: Arc::new(Mutex::new(sample_alerts())),
            latency_ms: 0,
        }
    }

    /// Builder method to delay every response, so loading states are visible.
    pub fn with_latency_ms(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    async fn simulate_latency(&self) {
        if self.latency_ms == 0 {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
    }
}

impl DashboardSource for DemoSource {
    async fn current_weather(
        &self,
        location: &Location,
        _cancel: &CancelToken,
    ) -> Result<CurrentWeather, ApiError> {
        self.simulate_latency().await;
        let name = match location {
            Location::Named(name) => name.clone(),
            Location::Coordinates {
                latitude,
                longitude,
            } => format!("{latitude:.2}, {longitude:.2}"),
        };
        Ok(CurrentWeather {
            location: name,
            temperature: 28.0,
            feels_like: Some(30.0),
            humidity: 65.0,
            wind_speed: 12.0,
            conditions: "Partly Cloudy".to_string(),
            rainfall: Some(0.0),
            uv_index: Some(6.0),
        })
    }

    async fn forecast(
        &self,
        _location: &Location,
        days: u8,
        _cancel: &CancelToken,
    ) -> Result<Vec<ForecastDay>, ApiError> {
        self.simulate_latency().await;
        let pattern = [
            (30.0, 22.0, "Sunny", 5.0),
            (29.0, 21.0, "Partly Cloudy", 15.0),
            (26.0, 20.0, "Light Rain", 70.0),
            (27.0, 19.0, "Cloudy", 35.0),
            (31.0, 23.0, "Sunny", 0.0),
        ];
        let today = Utc::now().date_naive();
        Ok((0..days)
            .map(|i| {
                let (high, low, conditions, rain) = pattern[i as usize % pattern.len()];
                ForecastDay {
                    date: (today + Duration::days(i64::from(i))).to_string(),
                    high,
                    low,
                    conditions: conditions.to_string(),
                    precipitation_chance: rain,
                }
            })
            .collect())
    }

    async fn market_prices(&self, _cancel: &CancelToken) -> Result<Vec<MarketPrice>, ApiError> {
        self.simulate_latency().await;
        let updated = Some(Utc::now().to_rfc3339());
        let price = |commodity: &str, price: f64, change: f64| MarketPrice {
            commodity: commodity.to_string(),
            market: "Local Mandi".to_string(),
            price,
            unit: "INR/quintal".to_string(),
            change_percent: change,
            updated_at: updated.clone(),
        };
        Ok(vec![
            price("Wheat", 2250.0, 2.5),
            price("Rice", 3100.0, -1.2),
            price("Maize", 1980.0, 0.0),
            price("Soybean", 4450.0, 3.8),
            price("Cotton", 6620.0, -0.6),
        ])
    }

    async fn irrigation_status(&self, _cancel: &CancelToken) -> Result<IrrigationStatus, ApiError> {
        self.simulate_latency().await;
        Ok(IrrigationStatus {
            soil_moisture: 42.0,
            next_irrigation: Some(Utc::now() + Duration::hours(6)),
            water_used_liters: 12_500.0,
            active_schedules: 3,
        })
    }

    async fn recent_activity(
        &self,
        limit: usize,
        _cancel: &CancelToken,
    ) -> Result<Vec<ActivityItem>, ApiError> {
        self.simulate_latency().await;
        let now = Utc::now();
        let item = |id: &str, kind: &str, description: &str, ago: Duration| ActivityItem {
            id: id.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
            timestamp: now - ago,
        };
        let mut items = vec![
            item("a1", "irrigation", "Irrigation completed on North Field", Duration::minutes(45)),
            item("a2", "disease", "Leaf scan: tomato plants healthy", Duration::hours(3)),
            item("a3", "field", "South Field soil type updated", Duration::hours(20)),
            item("a4", "market", "Wheat price rose 2.5%", Duration::days(1)),
            item("a5", "advisory", "New fertiliser advisory for rice", Duration::days(2)),
        ];
        items.truncate(limit);
        Ok(items)
    }

    async fn alerts(&self, _cancel: &CancelToken) -> Result<Vec<Alert>, ApiError> {
        self.simulate_latency().await;
        Ok(self.alerts.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn mark_alert_read(&self, id: &str, _cancel: &CancelToken) -> Result<(), ApiError> {
        self.simulate_latency().await;
        let mut alerts = self.alerts.lock().unwrap_or_else(|e| e.into_inner());
        match alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.read = true;
                Ok(())
            }
            None => Err(ApiError::from_status(
                404,
                r#"{"detail": "Alert not found"}"#.to_string(),
            )),
        }
    }
}

fn sample_alerts() -> Vec<Alert> {
    let now = Utc::now();
    let alert = |id: &str, kind: &str, severity, title: &str, message: &str, ago| Alert {
        id: id.to_string(),
        kind: kind.to_string(),
        severity,
        title: Some(title.to_string()),
        message: message.to_string(),
        timestamp: now - ago,
        read: false,
    };
    vec![
        alert(
            "1",
            "weather",
            Severity::High,
            "Heavy rain expected",
            "Heavy rainfall forecast for the next 48 hours. Check drainage.",
            Duration::hours(2),
        ),
        alert(
            "2",
            "pest",
            Severity::Medium,
            "Aphid activity nearby",
            "Aphid infestations reported in neighbouring farms.",
            Duration::hours(8),
        ),
        alert(
            "3",
            "irrigation",
            Severity::Low,
            "Irrigation scheduled",
            "North Field irrigation runs tomorrow at 06:00.",
            Duration::days(1),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::advisory::unread_count;

    #[tokio::test]
    async fn test_mark_alert_read_persists() {
        let source = DemoSource::new();
        let cancel = CancelToken::new();
        assert_eq!(unread_count(&source.alerts(&cancel).await.unwrap()), 3);

        source.mark_alert_read("2", &cancel).await.unwrap();

        let alerts = source.alerts(&cancel).await.unwrap();
        assert_eq!(unread_count(&alerts), 2);
        assert!(alerts.iter().find(|a| a.id == "2").unwrap().read);
        assert_eq!(
            source.mark_alert_read("missing", &cancel).await.unwrap_err().status(),
            Some(404)
        );
    }

    #[tokio::test]
    async fn test_forecast_and_activity_respect_requested_sizes() {
        let source = DemoSource::new();
        let cancel = CancelToken::new();
        let location = Location::Named("Ludhiana".into());

        assert_eq!(source.forecast(&location, 7, &cancel).await.unwrap().len(), 7);
        assert_eq!(source.recent_activity(2, &cancel).await.unwrap().len(), 2);
        assert_eq!(
            source.current_weather(&location, &cancel).await.unwrap().location,
            "Ludhiana"
        );
    }
}
