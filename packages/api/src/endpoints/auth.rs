use serde::{Deserialize, Serialize};

use crate::cancel::CancelToken;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::transport::Transport;
use crate::{ApiClient, ApiError};

const LOGIN: &str = "/api/v1/auth/login/";
const REGISTER: &str = "/api/v1/auth/register/";
const LOGOUT: &str = "/api/v1/auth/logout/";
const PROFILE: &str = "/api/v1/auth/profile/";
const REFRESH: &str = "/api/v1/auth/token/refresh/";

pub struct AuthApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    #[serde(alias = "access")]
    token: String,
}

impl<T: Transport> AuthApi<'_, T> {
    pub async fn login(
        &self,
        credentials: &LoginRequest,
        cancel: &CancelToken,
    ) -> Result<AuthResponse, ApiError> {
        self.client.post(LOGIN, credentials, cancel).await
    }

    pub async fn register(
        &self,
        data: &RegisterRequest,
        cancel: &CancelToken,
    ) -> Result<AuthResponse, ApiError> {
        self.client.post(REGISTER, data, cancel).await
    }

    pub async fn logout(&self, cancel: &CancelToken) -> Result<(), ApiError> {
        self.client
            .post_discard(LOGOUT, &serde_json::json!({}), cancel)
            .await
    }

    /// Profile of the user owning the current token.
    pub async fn profile(&self, cancel: &CancelToken) -> Result<User, ApiError> {
        self.client.get(PROFILE, &[], cancel).await
    }

    /// Exchange a refresh token for a new access token.
    pub async fn refresh_token(
        &self,
        refresh: &str,
        cancel: &CancelToken,
    ) -> Result<String, ApiError> {
        let resp: RefreshResponse = self
            .client
            .post(REFRESH, &RefreshRequest { refresh }, cancel)
            .await?;
        Ok(resp.token)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use crate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/v1/auth/login/",
            200,
            json!({"token": "t1", "user": {"id": "1", "username": "farmer1"}}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");
        let cancel = CancelToken::new();

        let resp = client
            .auth()
            .login(
                &LoginRequest {
                    username: "farmer1".into(),
                    password: "secret".into(),
                },
                &cancel,
            )
            .await
            .unwrap();

        assert_eq!(resp.token.as_deref(), Some("t1"));
        assert_eq!(resp.user.username, "farmer1");
        let sent = &mock.requests()[0];
        assert_eq!(sent.json().unwrap()["username"], "farmer1");
        assert_eq!(sent.json().unwrap()["password"], "secret");
    }

    #[tokio::test]
    async fn test_refresh_token_reads_access_alias() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/v1/auth/token/refresh/",
            200,
            json!({"access": "t2"}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");
        let token = client
            .auth()
            .refresh_token("r1", &CancelToken::new())
            .await
            .unwrap();
        assert_eq!(token, "t2");
        assert_eq!(mock.requests()[0].json().unwrap()["refresh"], "r1");
    }
}
