//! # HTTP client wrapper
//!
//! [`ApiClient`] owns the base URL, the bearer token slot and the read-retry
//! policy. Domain clients in [`crate::endpoints`] borrow it and only decide
//! paths and payloads.
//!
//! - The token slot is shared between clones, so installing a token after
//!   login is visible to every store holding a copy of the client.
//! - GET requests are retried `read_retries` times (default 1) when the
//!   failure is retryable. Mutations and uploads are sent exactly once.
//! - Non-2xx responses become [`ApiError::Status`] with the server message
//!   extracted from the body.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cancel::{run_cancellable, CancelToken};
use crate::transport::{ApiRequest, ApiResponse, FilePart, Method, RequestBody, Transport};
use crate::ApiError;

/// Number of extra attempts for failed reads.
pub const DEFAULT_READ_RETRIES: u32 = 1;

#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: Arc<str>,
    token: Arc<Mutex<Option<String>>>,
    read_retries: u32,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            transport,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            token: Arc::new(Mutex::new(None)),
            read_retries: DEFAULT_READ_RETRIES,
        }
    }

    /// Builder method to change how many times a failed read is re-issued.
    pub fn with_read_retries(mut self, retries: u32) -> Self {
        self.read_retries = retries;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Install or clear the bearer token attached to every request.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        let mut request = ApiRequest::new(method, self.url(path));
        request.bearer = self.token();
        request
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        cancel: &CancelToken,
    ) -> Result<R, ApiError> {
        let mut request = self.request(Method::Get, path);
        request.query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let response = self.execute(request, cancel).await?;
        decode(&response)
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancelToken,
    ) -> Result<R, ApiError> {
        self.send_json(Method::Post, path, body, cancel).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancelToken,
    ) -> Result<R, ApiError> {
        self.send_json(Method::Put, path, body, cancel).await
    }

    pub async fn patch<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancelToken,
    ) -> Result<R, ApiError> {
        self.send_json(Method::Patch, path, body, cancel).await
    }

    /// POST whose response body is ignored (logout, mark-as-read).
    pub async fn post_discard<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancelToken,
    ) -> Result<(), ApiError> {
        let mut request = self.request(Method::Post, path);
        request.body = RequestBody::Json(to_json(body)?);
        self.execute(request, cancel).await.map(|_| ())
    }

    /// DELETE; any 2xx counts as success regardless of body.
    pub async fn delete(&self, path: &str, cancel: &CancelToken) -> Result<(), ApiError> {
        let request = self.request(Method::Delete, path);
        self.execute(request, cancel).await.map(|_| ())
    }

    /// Multipart POST carrying one file plus optional text fields.
    pub async fn upload<R: DeserializeOwned>(
        &self,
        path: &str,
        file: FilePart,
        fields: Vec<(String, String)>,
        cancel: &CancelToken,
    ) -> Result<R, ApiError> {
        let mut request = self.request(Method::Post, path);
        request.body = RequestBody::Multipart { file, fields };
        let response = self.execute(request, cancel).await?;
        decode(&response)
    }

    async fn send_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        cancel: &CancelToken,
    ) -> Result<R, ApiError> {
        let mut request = self.request(method, path);
        request.body = RequestBody::Json(to_json(body)?);
        let response = self.execute(request, cancel).await?;
        decode(&response)
    }

    async fn execute(
        &self,
        request: ApiRequest,
        cancel: &CancelToken,
    ) -> Result<ApiResponse, ApiError> {
        if request.method != Method::Get {
            return self.send_once(request, cancel).await;
        }

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.send_once(request.clone(), cancel).await {
                Err(err) if attempt <= self.read_retries && err.is_retryable() => {
                    tracing::warn!(url = %request.url, attempt, "read failed, retrying: {err}");
                }
                other => return other,
            }
        }
    }

    async fn send_once(
        &self,
        request: ApiRequest,
        cancel: &CancelToken,
    ) -> Result<ApiResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = run_cancellable(cancel, self.transport.send(request)).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_status(response.status, response.body))
        }
    }
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .field("read_retries", &self.read_retries)
            .finish()
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

/// Decode a success body. An empty body decodes as JSON `null`.
fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    let text = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use serde_json::json;

    fn client(mock: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(mock.clone(), "http://farm.test/")
    }

    #[tokio::test]
    async fn test_get_attaches_token_and_query() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/v1/fields/", 200, json!([]));
        let client = client(&mock);
        client.set_token(Some("t1".into()));

        let cancel = CancelToken::new();
        let fields: Vec<serde_json::Value> = client
            .get("/api/v1/fields/", &[("page", "2".to_string())], &cancel)
            .await
            .unwrap();
        assert!(fields.is_empty());

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://farm.test/api/v1/fields/");
        assert_eq!(requests[0].bearer.as_deref(), Some("t1"));
        assert_eq!(requests[0].query_value("page"), Some("2"));
    }

    #[tokio::test]
    async fn test_get_retries_once_on_server_error() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/v1/weather/current/", 503, json!({}));
        mock.respond(Method::Get, "/api/v1/weather/current/", 200, json!({"ok": true}));

        let cancel = CancelToken::new();
        let body: serde_json::Value = client(&mock)
            .get("/api/v1/weather/current/", &[], &cancel)
            .await
            .unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_get_gives_up_after_one_retry() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/api/v1/market/prices/", ApiError::Transport("down".into()));

        let cancel = CancelToken::new();
        let err = client(&mock)
            .get::<serde_json::Value>("/api/v1/market/prices/", &[], &cancel)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Transport("down".into()));
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/v1/fields/9/", 404, json!({"detail": "Not found."}));

        let cancel = CancelToken::new();
        let err = client(&mock)
            .get::<serde_json::Value>("/api/v1/fields/9/", &[], &cancel)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message("x"), "Not found.");
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_mutations_are_never_retried() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/v1/fields/", 500, json!({"message": "boom"}));

        let cancel = CancelToken::new();
        let err = client(&mock)
            .post::<_, serde_json::Value>("/api/v1/fields/", &json!({"name": "a"}), &cancel)
            .await
            .unwrap_err();
        assert_eq!(err.user_message("x"), "boom");
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_token_sends_nothing() {
        let mock = MockTransport::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = client(&mock)
            .get::<serde_json::Value>("/api/v1/fields/", &[], &cancel)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_ignores_body_and_empty_decodes_as_null() {
        let mock = MockTransport::new();
        mock.respond(Method::Delete, "/api/v1/fields/3/", 204, serde_json::Value::Null);
        mock.respond_raw(Method::Post, "/api/v1/auth/logout/", 200, "");

        let cancel = CancelToken::new();
        let client = client(&mock);
        client.delete("/api/v1/fields/3/", &cancel).await.unwrap();
        let _: () = client.post("/api/v1/auth/logout/", &json!({}), &cancel).await.unwrap();
        assert_eq!(mock.request_count(), 2);
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = ApiClient::new(MockTransport::new(), "http://farm.test");
        client.set_token(Some("secret".into()));
        let out = format!("{client:?}");
        assert!(!out.contains("secret"));
    }
}
