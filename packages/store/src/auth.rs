//! # Auth state container
//!
//! [`AuthStore`] owns the session lifecycle: restore, login, registration,
//! profile update and logout. State lives in an injected [`StateCell`]; the
//! token and an [`AuthSnapshot`] live in an injected [`KeyValueStorage`].
//!
//! | Action | Network | On failure |
//! |--------|---------|------------|
//! | [`hydrate`](AuthStore::hydrate) | none | corrupt snapshot ignored |
//! | [`check_auth`](AuthStore::check_auth) | profile, only if a token is stored | token cleared, silently unauthenticated |
//! | [`login`](AuthStore::login) / [`register`](AuthStore::register) | one POST | message stored, error re-raised |
//! | [`update_profile`](AuthStore::update_profile) | one PATCH | message stored and toasted, error re-raised |
//! | [`logout`](AuthStore::logout) | one POST, best effort | ignored; local session always cleared |
//!
//! Actions are not serialised against each other. Two overlapping calls both
//! write state and the one whose response arrives last wins.

use std::sync::Arc;

use api::{ApiClient, ApiError, CancelToken, LoginRequest, ProfileUpdate, RegisterRequest, Transport, User};
use serde::{Deserialize, Serialize};

use crate::cell::StateCell;
use crate::error::{best_effort, Result};
use crate::notify::Notifier;
use crate::storage::{KeyValueStorage, AUTH_SNAPSHOT_KEY, TOKEN_KEY};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True until the first [`AuthStore::check_auth`] resolves. The route
    /// guard shows a spinner while it is set, so nothing else touches it.
    pub loading: bool,
    /// A login or registration request is in flight.
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true,
            submitting: false,
            error: None,
        }
    }
}

/// The part of [`AuthState`] persisted across reloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

#[derive(Clone)]
pub struct AuthStore<T, C> {
    client: ApiClient<T>,
    state: C,
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
}

impl<T, C> AuthStore<T, C>
where
    T: Transport,
    C: StateCell<AuthState>,
{
    pub fn new(
        client: ApiClient<T>,
        state: C,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            state,
            storage,
            notifier,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Load the persisted snapshot into memory. Runs before
    /// [`check_auth`](Self::check_auth) so the shell can render the last
    /// known user while the token is being verified.
    pub fn hydrate(&self) {
        let Some(raw) = self.storage.get(AUTH_SNAPSHOT_KEY) else {
            return;
        };
        match serde_json::from_str::<AuthSnapshot>(&raw) {
            Ok(snapshot) => self.state.update(|s| {
                s.user = snapshot.user;
                s.is_authenticated = snapshot.is_authenticated;
            }),
            Err(e) => tracing::warn!("ignoring corrupt auth snapshot: {e}"),
        }
    }

    pub async fn login(&self, credentials: &LoginRequest, cancel: &CancelToken) -> Result<User> {
        self.begin();
        let result = self.client.auth().login(credentials, cancel).await;
        match result {
            Ok(resp) => {
                self.establish(resp.token, resp.user.clone());
                tracing::info!(user = %resp.user.username, "logged in");
                self.notifier.success("Login successful");
                Ok(resp.user)
            }
            Err(e) => Err(self.fail(e, "Login failed")),
        }
    }

    pub async fn register(&self, data: &RegisterRequest, cancel: &CancelToken) -> Result<User> {
        self.begin();
        let result = self.client.auth().register(data, cancel).await;
        match result {
            Ok(resp) => {
                self.establish(resp.token, resp.user.clone());
                tracing::info!(user = %resp.user.username, "registered");
                self.notifier.success("Registration successful");
                Ok(resp.user)
            }
            Err(e) => Err(self.fail(e, "Registration failed")),
        }
    }

    /// End the session. The server call is best effort; the local session is
    /// cleared whatever it returns.
    pub async fn logout(&self, cancel: &CancelToken) {
        best_effort("logout", self.client.auth().logout(cancel).await);
        self.forget();
        self.state.set(AuthState {
            loading: false,
            ..AuthState::default()
        });
        tracing::info!("logged out");
        self.notifier.success("Logged out successfully");
    }

    /// Verify the stored token on start-up.
    ///
    /// Without a token no request is made. A token the profile endpoint
    /// rejects is removed; nothing is raised or toasted either way.
    pub async fn check_auth(&self, cancel: &CancelToken) {
        let Some(token) = self.storage.get(TOKEN_KEY) else {
            self.state.set(AuthState {
                loading: false,
                ..AuthState::default()
            });
            return;
        };

        self.client.set_token(Some(token));
        match self.client.auth().profile(cancel).await {
            Ok(user) => {
                self.state.set(AuthState {
                    user: Some(user),
                    is_authenticated: true,
                    loading: false,
                    submitting: false,
                    error: None,
                });
                self.persist();
            }
            Err(ApiError::Cancelled) => {
                self.state.update(|s| s.loading = false);
            }
            Err(e) => {
                tracing::info!("stored session rejected: {e}");
                self.forget();
                self.state.set(AuthState {
                    loading: false,
                    ..AuthState::default()
                });
            }
        }
    }

    pub async fn update_profile(&self, data: &ProfileUpdate, cancel: &CancelToken) -> Result<User> {
        match self.client.users().update_profile(data, cancel).await {
            Ok(user) => {
                self.state.update(|s| {
                    s.user = Some(user.clone());
                    s.error = None;
                });
                self.persist();
                self.notifier.success("Profile updated successfully");
                Ok(user)
            }
            Err(ApiError::Cancelled) => Err(ApiError::Cancelled.into()),
            Err(e) => {
                let message = e.user_message("Failed to update profile");
                self.state.update(|s| s.error = Some(message.clone()));
                self.notifier.error(&message);
                Err(e.into())
            }
        }
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    fn begin(&self) {
        self.state.update(|s| {
            s.submitting = true;
            s.error = None;
        });
    }

    fn establish(&self, token: Option<String>, user: User) {
        if let Some(token) = token {
            self.storage.set(TOKEN_KEY, &token);
            self.client.set_token(Some(token));
        }
        self.state.set(AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
            submitting: false,
            error: None,
        });
        self.persist();
    }

    fn fail(&self, e: ApiError, fallback: &str) -> crate::Error {
        if e.is_cancelled() {
            self.state.update(|s| s.submitting = false);
        } else {
            let message = e.user_message(fallback);
            tracing::warn!("{fallback}: {e}");
            self.state.update(|s| {
                s.submitting = false;
                s.error = Some(message);
            });
        }
        e.into()
    }

    fn persist(&self) {
        let state = self.state.get();
        let snapshot = AuthSnapshot {
            user: state.user,
            is_authenticated: state.is_authenticated,
        };
        match serde_json::to_string(&snapshot) {
            Ok(raw) => self.storage.set(AUTH_SNAPSHOT_KEY, &raw),
            Err(e) => tracing::warn!("could not serialise auth snapshot: {e}"),
        }
    }

    fn forget(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(AUTH_SNAPSHOT_KEY);
        self.client.set_token(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::LocalCell;
    use crate::guard::{decide, Access, GuardDecision, RedirectTarget};
    use crate::memory::MemoryStorage;
    use crate::notify::ToastLevel;
    use crate::testing::{mock_client, RecordingNotifier};
    use api::testing::MockTransport;
    use api::Method;
    use serde_json::json;

    struct Harness {
        mock: MockTransport,
        storage: MemoryStorage,
        notifier: RecordingNotifier,
        store: AuthStore<MockTransport, LocalCell<AuthState>>,
    }

    fn harness() -> Harness {
        let (mock, client) = mock_client();
        let storage = MemoryStorage::new();
        let notifier = RecordingNotifier::default();
        let store = AuthStore::new(
            client,
            LocalCell::new(AuthState::default()),
            Arc::new(storage.clone()),
            Arc::new(notifier.clone()),
        );
        Harness {
            mock,
            storage,
            notifier,
            store,
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            username: "farmer1".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_token_and_authenticates() {
        let h = harness();
        h.mock.respond(
            Method::Post,
            "/api/v1/auth/login/",
            200,
            json!({"token": "t1", "user": {"id": "1", "username": "farmer1"}}),
        );

        let user = h.store.login(&credentials(), &CancelToken::new()).await.unwrap();

        assert_eq!(user.username, "farmer1");
        assert_eq!(h.storage.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(h.store.client().token().as_deref(), Some("t1"));

        let state = h.store.state();
        assert!(state.is_authenticated);
        assert!(!state.loading);
        assert_eq!(state.user.unwrap().id, "1");

        let snapshot: AuthSnapshot =
            serde_json::from_str(&h.storage.get(AUTH_SNAPSHOT_KEY).unwrap()).unwrap();
        assert!(snapshot.is_authenticated);
    }

    /// Records the public-page guard decision at the moment each request
    /// goes out, then answers from the wrapped mock.
    struct GuardWatcher {
        inner: MockTransport,
        state: LocalCell<AuthState>,
        seen: Arc<std::sync::Mutex<Vec<GuardDecision>>>,
    }

    impl Transport for GuardWatcher {
        async fn send(
            &self,
            request: api::transport::ApiRequest,
        ) -> std::result::Result<api::transport::ApiResponse, ApiError> {
            let decision = decide(&self.state.get(), Access::PublicOnly);
            self.seen.lock().unwrap().push(decision);
            self.inner.send(request).await
        }
    }

    #[tokio::test]
    async fn test_login_page_stays_rendered_while_request_in_flight() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/v1/auth/login/",
            401,
            json!({"message": "Invalid credentials"}),
        );
        let cell = LocalCell::new(AuthState::default());
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let watcher = GuardWatcher {
            inner: mock,
            state: cell.clone(),
            seen: seen.clone(),
        };
        let store = AuthStore::new(
            ApiClient::new(watcher, "http://farm.test"),
            cell.clone(),
            Arc::new(MemoryStorage::new()),
            Arc::new(RecordingNotifier::default()),
        );
        let cancel = CancelToken::new();

        store.check_auth(&cancel).await;
        assert_eq!(decide(&cell.get(), Access::PublicOnly), GuardDecision::Render);

        assert!(store.login(&credentials(), &cancel).await.is_err());

        assert_eq!(*seen.lock().unwrap(), vec![GuardDecision::Render]);
        let state = cell.get();
        assert!(!state.submitting);
        assert!(!state.loading);
        assert_eq!(decide(&state, Access::PublicOnly), GuardDecision::Render);
    }

    #[tokio::test]
    async fn test_login_marks_submitting_not_loading() {
        let h = harness();
        h.store.state.set(AuthState {
            loading: false,
            ..AuthState::default()
        });
        h.mock.respond(
            Method::Post,
            "/api/v1/auth/login/",
            200,
            json!({"token": "t1", "user": {"id": "1", "username": "farmer1"}}),
        );

        h.store.login(&credentials(), &CancelToken::new()).await.unwrap();

        let state = h.store.state();
        assert!(!state.submitting);
        assert!(!state.loading);
        assert_eq!(
            decide(&state, Access::PublicOnly),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );
    }

    #[tokio::test]
    async fn test_login_failure_stores_server_message_and_reraises() {
        let h = harness();
        h.mock.respond(
            Method::Post,
            "/api/v1/auth/login/",
            401,
            json!({"message": "Invalid credentials"}),
        );

        let err = h.store.login(&credentials(), &CancelToken::new()).await.unwrap_err();

        assert_eq!(err.user_message("x"), "Invalid credentials");
        let state = h.store.state();
        assert!(!state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(h.storage.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_login_failure_without_message_uses_fallback() {
        let h = harness();
        h.mock.fail(
            Method::Post,
            "/api/v1/auth/login/",
            ApiError::Transport("offline".into()),
        );

        assert!(h.store.login(&credentials(), &CancelToken::new()).await.is_err());
        assert_eq!(h.store.state().error.as_deref(), Some("Login failed"));
    }

    #[tokio::test]
    async fn test_register_issues_one_request_and_authenticates() {
        let h = harness();
        h.mock.respond(
            Method::Post,
            "/api/v1/auth/register/",
            201,
            json!({"token": "t9", "user": {"id": 9, "username": "newfarmer", "email": "n@f.io"}}),
        );

        let data = RegisterRequest {
            username: "newfarmer".into(),
            email: "n@f.io".into(),
            password: "longenough".into(),
            password_confirm: "longenough".into(),
            ..Default::default()
        };
        h.store.register(&data, &CancelToken::new()).await.unwrap();

        assert_eq!(h.mock.request_count(), 1);
        let state = h.store.state();
        assert!(state.is_authenticated);
        assert_eq!(state.user.unwrap().id, "9");
        assert_eq!(
            h.notifier.last(),
            Some((ToastLevel::Success, "Registration successful".to_string()))
        );
    }

    #[tokio::test]
    async fn test_check_auth_without_token_makes_no_request() {
        let h = harness();

        h.store.check_auth(&CancelToken::new()).await;

        assert_eq!(h.mock.request_count(), 0);
        let state = h.store.state();
        assert!(!state.is_authenticated);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_check_auth_with_valid_token_restores_user() {
        let h = harness();
        h.storage.set(TOKEN_KEY, "t1");
        h.mock.respond(
            Method::Get,
            "/api/v1/auth/profile/",
            200,
            json!({"id": "1", "username": "farmer1"}),
        );

        h.store.check_auth(&CancelToken::new()).await;

        assert_eq!(h.mock.requests()[0].bearer.as_deref(), Some("t1"));
        let state = h.store.state();
        assert!(state.is_authenticated);
        assert_eq!(state.user.unwrap().username, "farmer1");
    }

    #[tokio::test]
    async fn test_check_auth_with_rejected_token_clears_it_silently() {
        let h = harness();
        h.storage.set(TOKEN_KEY, "stale");
        h.storage.set(AUTH_SNAPSHOT_KEY, r#"{"user":null,"isAuthenticated":true}"#);
        h.mock.respond(
            Method::Get,
            "/api/v1/auth/profile/",
            401,
            json!({"detail": "Token expired"}),
        );

        h.store.check_auth(&CancelToken::new()).await;

        assert!(h.storage.get(TOKEN_KEY).is_none());
        assert!(h.storage.get(AUTH_SNAPSHOT_KEY).is_none());
        assert!(h.store.client().token().is_none());
        let state = h.store.state();
        assert!(!state.is_authenticated);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(h.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_endpoint_fails() {
        let h = harness();
        h.mock.respond(
            Method::Post,
            "/api/v1/auth/login/",
            200,
            json!({"token": "t1", "user": {"id": "1", "username": "farmer1"}}),
        );
        h.mock.respond(Method::Post, "/api/v1/auth/logout/", 500, json!({}));
        let cancel = CancelToken::new();
        h.store.login(&credentials(), &cancel).await.unwrap();

        h.store.logout(&cancel).await;

        assert!(h.storage.is_empty());
        assert!(h.store.client().token().is_none());
        let state = h.store.state();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert_eq!(
            h.notifier.last(),
            Some((ToastLevel::Success, "Logged out successfully".to_string()))
        );
    }

    #[tokio::test]
    async fn test_hydrate_restores_snapshot_and_ignores_garbage() {
        let h = harness();
        h.storage.set(
            AUTH_SNAPSHOT_KEY,
            r#"{"user":{"id":"1","username":"farmer1"},"isAuthenticated":true}"#,
        );
        h.store.hydrate();
        assert!(h.store.state().is_authenticated);

        let h = harness();
        h.storage.set(AUTH_SNAPSHOT_KEY, "{not json");
        h.store.hydrate();
        assert!(!h.store.state().is_authenticated);
    }

    #[tokio::test]
    async fn test_update_profile_failure_toasts_and_reraises() {
        let h = harness();
        h.mock.respond(
            Method::Patch,
            "/api/v1/users/profile/",
            400,
            json!({"phone": ["Enter a valid phone number."]}),
        );

        let update = ProfileUpdate {
            phone: Some("abc".into()),
            ..Default::default()
        };
        let err = h.store.update_profile(&update, &CancelToken::new()).await;

        assert!(err.is_err());
        assert_eq!(
            h.store.state().error.as_deref(),
            Some("Enter a valid phone number.")
        );
        assert_eq!(
            h.notifier.last(),
            Some((ToastLevel::Error, "Enter a valid phone number.".to_string()))
        );
    }

    #[tokio::test]
    async fn test_clear_error() {
        let h = harness();
        h.store.state.update(|s| s.error = Some("boom".into()));
        h.store.clear_error();
        assert!(h.store.state().error.is_none());
    }
}
