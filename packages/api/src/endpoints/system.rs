use crate::cancel::CancelToken;
use crate::models::HealthStatus;
use crate::transport::Transport;
use crate::{ApiClient, ApiError};

const HEALTH: &str = "/api/v1/system/health/";

pub struct SystemApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

impl<T: Transport> SystemApi<'_, T> {
    pub async fn health(&self, cancel: &CancelToken) -> Result<HealthStatus, ApiError> {
        self.client.get(HEALTH, &[], cancel).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use crate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_decodes_status() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/v1/system/health/",
            200,
            json!({"status": "OK", "version": "1.4.0", "services": {"database": "ok"}}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let health = client.system().health(&CancelToken::new()).await.unwrap();

        assert!(health.is_healthy());
        assert_eq!(health.version.as_deref(), Some("1.4.0"));
        assert_eq!(health.services.get("database").map(String::as_str), Some("ok"));
        assert_eq!(mock.requests()[0].url, "http://farm.test/api/v1/system/health/");
    }

    #[tokio::test]
    async fn test_unavailable_backend_is_an_error_after_one_retry() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/v1/system/health/", 503, json!({}));
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        assert!(client.system().health(&CancelToken::new()).await.is_err());
        assert_eq!(mock.request_count(), 2);
    }
}
