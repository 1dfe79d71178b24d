use crate::cancel::CancelToken;
use crate::models::{IrrigationRecommendation, IrrigationSchedule, IrrigationStatus, SoilMoisture};
use crate::transport::Transport;
use crate::{ApiClient, ApiError};

const SCHEDULES: &str = "/api/v1/irrigation/schedules/";
const RECOMMENDATIONS: &str = "/api/v1/irrigation/recommendations/";
const SOIL_MOISTURE: &str = "/api/v1/irrigation/soil-moisture/";
const STATUS: &str = "/api/v1/irrigation/status/";

pub struct IrrigationApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

fn by_field(field_id: Option<&str>) -> Vec<(&'static str, String)> {
    field_id
        .map(|id| vec![("field_id", id.to_string())])
        .unwrap_or_default()
}

impl<T: Transport> IrrigationApi<'_, T> {
    pub async fn schedule(
        &self,
        field_id: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<Vec<IrrigationSchedule>, ApiError> {
        self.client.get(SCHEDULES, &by_field(field_id), cancel).await
    }

    pub async fn recommendation(
        &self,
        field_id: &str,
        cancel: &CancelToken,
    ) -> Result<IrrigationRecommendation, ApiError> {
        self.client
            .get(RECOMMENDATIONS, &by_field(Some(field_id)), cancel)
            .await
    }

    pub async fn soil_moisture(
        &self,
        field_id: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<Vec<SoilMoisture>, ApiError> {
        self.client.get(SOIL_MOISTURE, &by_field(field_id), cancel).await
    }

    pub async fn update_schedule(
        &self,
        schedule: &IrrigationSchedule,
        cancel: &CancelToken,
    ) -> Result<IrrigationSchedule, ApiError> {
        let path = format!("{SCHEDULES}{}/", schedule.id);
        self.client.put(&path, schedule, cancel).await
    }

    /// Condensed numbers for the dashboard card.
    pub async fn status(&self, cancel: &CancelToken) -> Result<IrrigationStatus, ApiError> {
        self.client.get(STATUS, &[], cancel).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use crate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_schedule_filters_by_field() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/v1/irrigation/schedules/",
            200,
            json!([{"id": 3, "field_id": 9, "duration_minutes": 45, "scheduled_time": "2024-06-01T06:00:00Z"}]),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let schedules = client
            .irrigation()
            .schedule(Some("9"), &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].id, "3");
        assert_eq!(schedules[0].field_id.as_deref(), Some("9"));
        assert!(schedules[0].next_run.is_some());
        assert!(schedules[0].enabled);
        assert_eq!(mock.requests()[0].query_value("field_id"), Some("9"));
    }

    #[tokio::test]
    async fn test_schedule_without_field_sends_no_query() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/v1/irrigation/schedules/", 200, json!([]));
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let schedules = client
            .irrigation()
            .schedule(None, &CancelToken::new())
            .await
            .unwrap();

        assert!(schedules.is_empty());
        assert!(mock.requests()[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_recommendation_for_field() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/v1/irrigation/recommendations/",
            200,
            json!({"fieldId": "f1", "shouldIrrigate": true, "amount_mm": 12.5, "reason": "Dry spell ahead"}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let rec = client
            .irrigation()
            .recommendation("f1", &CancelToken::new())
            .await
            .unwrap();

        assert!(rec.should_irrigate);
        assert_eq!(rec.recommended_amount_mm, 12.5);
        assert_eq!(rec.reason, "Dry spell ahead");
        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.query_value("field_id"), Some("f1"));
    }

    #[tokio::test]
    async fn test_update_schedule_puts_to_schedule_path() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Put,
            "/api/v1/irrigation/schedules/3/",
            200,
            json!({"id": 3, "field_id": 9, "duration_minutes": 60, "enabled": false}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let schedule = IrrigationSchedule {
            id: "3".into(),
            field_id: Some("9".into()),
            duration_minutes: 60,
            enabled: false,
            ..Default::default()
        };
        let saved = client
            .irrigation()
            .update_schedule(&schedule, &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(saved.duration_minutes, 60);
        assert!(!saved.enabled);
        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://farm.test/api/v1/irrigation/schedules/3/");
        let body = sent.json().unwrap();
        assert_eq!(body["duration_minutes"], 60);
        assert_eq!(body["enabled"], false);
    }
}
