//! # Client configuration
//!
//! Everything the dashboard reads at build or start-up time. Values come from
//! compiled-in defaults, optionally overridden by build-time environment
//! variables ([`ClientConfig::from_build_env`]) or a TOML document
//! ([`ClientConfig::from_toml`]). Nothing here is validated: a wrong API URL
//! shows up as failed requests.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! read_retries = 1
//!
//! [maps]
//! mapbox_token = "pk.…"
//!
//! [dashboard]
//! demo_data = false
//! demo_latency_ms = 0
//!
//! [logging]
//! level = "info"
//! ```
//!
//! ## Build-time variables
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `AGRODASH_API_URL` | `api.base_url` |
//! | `AGRODASH_MAPBOX_TOKEN` | `maps.mapbox_token` |
//! | `AGRODASH_GOOGLE_MAPS_KEY` | `maps.google_maps_key` |
//! | `AGRODASH_DEMO_DATA` | `dashboard.demo_data` (`1`/`true`/`yes`) |
//! | `AGRODASH_LOG_LEVEL` | `logging.level` |
//!
//! All structs derive `Default` so that a missing section is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub maps: MapsConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Extra attempts for failed reads. Mutations are never retried.
    #[serde(default = "default_read_retries")]
    pub read_retries: u32,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_read_retries() -> u32 {
    api::client::DEFAULT_READ_RETRIES
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            read_retries: default_read_retries(),
        }
    }
}

/// Map-provider credentials, passed through to map widgets untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapsConfig {
    #[serde(default)]
    pub mapbox_token: Option<String>,
    #[serde(default)]
    pub google_maps_key: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Serve weather, market, irrigation and activity panels from built-in
    /// demo data instead of the backend.
    #[serde(default)]
    pub demo_data: bool,
    /// Simulated loading delay for demo data, in milliseconds.
    #[serde(default)]
    pub demo_latency_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Raw override values, one per build-time variable.
#[derive(Clone, Debug, Default)]
pub struct EnvOverrides<'a> {
    pub api_url: Option<&'a str>,
    pub mapbox_token: Option<&'a str>,
    pub google_maps_key: Option<&'a str>,
    pub demo_data: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

impl EnvOverrides<'static> {
    /// Values captured by `option_env!` when the crate was compiled.
    pub fn from_build() -> Self {
        Self {
            api_url: option_env!("AGRODASH_API_URL"),
            mapbox_token: option_env!("AGRODASH_MAPBOX_TOKEN"),
            google_maps_key: option_env!("AGRODASH_GOOGLE_MAPS_KEY"),
            demo_data: option_env!("AGRODASH_DEMO_DATA"),
            log_level: option_env!("AGRODASH_LOG_LEVEL"),
        }
    }
}

impl ClientConfig {
    /// Defaults with build-time overrides applied.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        config.apply(&EnvOverrides::from_build());
        config
    }

    /// Apply every override that is set and non-empty.
    pub fn apply(&mut self, env: &EnvOverrides<'_>) {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string);

        if let Some(url) = non_empty(env.api_url) {
            self.api.base_url = url;
        }
        if let Some(token) = non_empty(env.mapbox_token) {
            self.maps.mapbox_token = Some(token);
        }
        if let Some(key) = non_empty(env.google_maps_key) {
            self.maps.google_maps_key = Some(key);
        }
        if let Some(flag) = non_empty(env.demo_data) {
            self.dashboard.demo_data = matches!(flag.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(level) = non_empty(env.log_level) {
            self.logging.level = level;
        }
    }

    /// Builder method to switch the dashboard panels to demo data.
    pub fn with_demo_data(mut self, enabled: bool) -> Self {
        self.dashboard.demo_data = enabled;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
