//! Services and state shared through Dioxus context.
//!
//! [`AuthProvider`](crate::AuthProvider) builds one [`AppServices`] at the app
//! root. Views reach it through the hooks below instead of globals.

use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;
use store::{
    AuthState, AuthStore, ClientConfig, CropState, CropStore, DashboardData, FieldState,
    FieldStore,
};

use crate::cell::SignalCell;

pub type Client = ApiClient<HttpTransport>;
pub type Auth = AuthStore<HttpTransport, SignalCell<AuthState>>;
pub type Fields = FieldStore<HttpTransport, SignalCell<FieldState>>;
pub type Crops = CropStore<HttpTransport, SignalCell<CropState>>;
pub type Dashboard = DashboardData<HttpTransport>;

#[derive(Clone)]
pub struct AppServices {
    pub config: ClientConfig,
    pub client: Client,
    pub auth: Auth,
    pub fields: Fields,
    pub crops: Crops,
    pub dashboard: Dashboard,
}

/// Backend reachability, refreshed by the provider's health check.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Connection {
    pub online: bool,
    /// False until the first health check completes.
    pub checked: bool,
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

pub fn use_config() -> ClientConfig {
    use_services().config
}

/// Current auth state. Reading it subscribes the component.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_auth_store() -> Auth {
    use_services().auth
}

pub fn use_fields() -> Signal<FieldState> {
    use_context::<Signal<FieldState>>()
}

pub fn use_field_store() -> Fields {
    use_services().fields
}

pub fn use_crops() -> Signal<CropState> {
    use_context::<Signal<CropState>>()
}

pub fn use_crop_store() -> Crops {
    use_services().crops
}

pub fn use_dashboard_source() -> Dashboard {
    use_services().dashboard
}

pub fn use_connection() -> Signal<Connection> {
    use_context::<Signal<Connection>>()
}
