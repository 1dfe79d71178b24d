use crate::cancel::CancelToken;
use crate::models::{ActivityItem, Advisory, Alert};
use crate::transport::Transport;
use crate::{ApiClient, ApiError};

const ADVISORIES: &str = "/api/v1/advisory/";
const ALERTS: &str = "/api/v1/advisory/alerts/";
const ACTIVITY: &str = "/api/v1/advisory/activity/";

pub struct AdvisoryApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

impl<T: Transport> AdvisoryApi<'_, T> {
    /// Advisories, optionally filtered by crop.
    pub async fn list(
        &self,
        crop: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<Vec<Advisory>, ApiError> {
        let query: Vec<(&str, String)> = crop
            .map(|c| vec![("crop", c.to_string())])
            .unwrap_or_default();
        self.client.get(ADVISORIES, &query, cancel).await
    }

    pub async fn alerts(&self, cancel: &CancelToken) -> Result<Vec<Alert>, ApiError> {
        self.client.get(ALERTS, &[], cancel).await
    }

    pub async fn mark_alert_read(&self, id: &str, cancel: &CancelToken) -> Result<(), ApiError> {
        let path = format!("{ALERTS}{id}/read/");
        self.client
            .post_discard(&path, &serde_json::json!({}), cancel)
            .await
    }

    pub async fn activity(
        &self,
        limit: usize,
        cancel: &CancelToken,
    ) -> Result<Vec<ActivityItem>, ApiError> {
        self.client
            .get(ACTIVITY, &[("limit", limit.to_string())], cancel)
            .await
    }
}
