use crate::cancel::CancelToken;
use crate::models::{DashboardStats, PasswordChange, ProfileUpdate, User};
use crate::transport::Transport;
use crate::{ApiClient, ApiError};

const PROFILE: &str = "/api/v1/users/profile/";
const DASHBOARD_STATS: &str = "/api/v1/users/dashboard-stats/";
const CHANGE_PASSWORD: &str = "/api/v1/users/change-password/";

pub struct UserApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

impl<T: Transport> UserApi<'_, T> {
    pub async fn profile(&self, cancel: &CancelToken) -> Result<User, ApiError> {
        self.client.get(PROFILE, &[], cancel).await
    }

    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
        cancel: &CancelToken,
    ) -> Result<User, ApiError> {
        self.client.patch(PROFILE, update, cancel).await
    }

    pub async fn dashboard_stats(&self, cancel: &CancelToken) -> Result<DashboardStats, ApiError> {
        self.client.get(DASHBOARD_STATS, &[], cancel).await
    }

    pub async fn change_password(
        &self,
        change: &PasswordChange,
        cancel: &CancelToken,
    ) -> Result<(), ApiError> {
        self.client.post_discard(CHANGE_PASSWORD, change, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use crate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_change_password_posts_both_passwords() {
        let mock = MockTransport::new();
        mock.respond_raw(Method::Post, "/api/v1/users/change-password/", 204, "");
        let client = ApiClient::new(mock.clone(), "http://farm.test");
        client.set_token(Some("t1".into()));

        let change = PasswordChange {
            old_password: "oldsecret".into(),
            new_password: "newsecret".into(),
        };
        client
            .users()
            .change_password(&change, &CancelToken::new())
            .await
            .unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://farm.test/api/v1/users/change-password/");
        assert_eq!(sent.bearer.as_deref(), Some("t1"));
        assert_eq!(
            sent.json().unwrap(),
            &json!({"old_password": "oldsecret", "new_password": "newsecret"})
        );
    }

    #[tokio::test]
    async fn test_change_password_rejection_carries_server_message() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/v1/users/change-password/",
            400,
            json!({"detail": "Old password is incorrect"}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let err = client
            .users()
            .change_password(&PasswordChange::default(), &CancelToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.user_message("x"), "Old password is incorrect");
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_dashboard_stats_decodes_camel_case() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/v1/users/dashboard-stats/",
            200,
            json!({"totalFields": 3, "totalArea": 21.5, "activeAlerts": 2, "cropsMonitored": 4}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let stats = client
            .users()
            .dashboard_stats(&CancelToken::new())
            .await
            .unwrap();

        assert_eq!(stats.total_fields, 3);
        assert_eq!(stats.total_area, 21.5);
        assert_eq!(stats.active_alerts, 2);
        assert_eq!(stats.crops_monitored, 4);
    }
}
