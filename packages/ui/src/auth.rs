//! Application root provider and session controls.

use std::sync::Arc;

use api::{ApiClient, CancelToken, HttpTransport};
use dioxus::prelude::*;
use store::{
    AuthState, AuthStore, ClientConfig, CropState, CropStore, DashboardData, FieldState,
    FieldStore, Notifier,
};

use crate::cell::{use_cancel_token, SignalCell};
use crate::context::{use_auth_store, AppServices, Client, Connection};
use crate::storage::make_storage;
use crate::toast::{SignalNotifier, ToastQueue};

/// Seconds between backend health checks.
const HEALTH_CHECK_INTERVAL_SECS: u32 = 30;

/// Provider component that builds the API client and every state container,
/// then restores the session. Wrap your app with this component.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let toasts = use_context_provider(|| Signal::new(ToastQueue::default()));
    let auth_state = use_context_provider(|| Signal::new(AuthState::default()));
    let field_state = use_context_provider(|| Signal::new(FieldState::default()));
    let crop_state = use_context_provider(|| Signal::new(CropState::default()));
    let mut connection = use_context_provider(|| Signal::new(Connection::default()));

    let services = use_context_provider(move || {
        let client: Client = ApiClient::new(HttpTransport::new(), config.api.base_url.clone())
            .with_read_retries(config.api.read_retries);
        let notifier: Arc<dyn Notifier> = Arc::new(SignalNotifier::new(toasts));
        tracing::info!(base_url = %client.base_url(), "api client ready");

        let auth = AuthStore::new(
            client.clone(),
            SignalCell::new(auth_state),
            make_storage(),
            notifier.clone(),
        );
        // Last known user is shown while the token is re-verified.
        auth.hydrate();

        AppServices {
            fields: FieldStore::new(client.clone(), SignalCell::new(field_state), notifier.clone()),
            crops: CropStore::new(client.clone(), SignalCell::new(crop_state), notifier),
            dashboard: DashboardData::from_config(&config.dashboard, client.clone()),
            auth,
            client,
            config,
        }
    });

    let cancel = use_cancel_token();

    // Verify the stored token on mount
    let _ = use_resource({
        let auth = services.auth.clone();
        let cancel = cancel.clone();
        move || {
            let auth = auth.clone();
            let cancel = cancel.clone();
            async move { auth.check_auth(&cancel).await }
        }
    });

    // Periodic connectivity check
    use_effect({
        let client = services.client.clone();
        move || {
            let client = client.clone();
            let cancel = cancel.clone();
            spawn(async move {
                loop {
                    let online = probe(&client, &cancel).await;
                    let current = *connection.peek();
                    if current.online != online || !current.checked {
                        if current.checked {
                            tracing::info!(online, "backend connectivity changed");
                        }
                        connection.set(Connection {
                            online,
                            checked: true,
                        });
                    }
                    crate::sleep_ms(HEALTH_CHECK_INTERVAL_SECS * 1000).await;
                }
            });
        }
    });

    rsx! {
        {children}
    }
}

async fn probe(client: &Client, cancel: &CancelToken) -> bool {
    match client.system().health(cancel).await {
        Ok(health) => health.is_healthy(),
        Err(e) => {
            tracing::debug!("health check failed: {e}");
            false
        }
    }
}

/// Ends the session. The route guard takes the user back to the login page
/// once the auth state flips.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth_store();
    let cancel = use_cancel_token();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let auth = auth.clone();
        let cancel = cancel.clone();
        busy.set(true);
        spawn(async move {
            auth.logout(&cancel).await;
            busy.set(false);
        });
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}
