//! # API crate: typed REST client for the farm backend
//!
//! Everything the dashboard needs to talk to the remote HTTP API. No state
//! lives here beyond the bearer token slot inside [`ApiClient`]; state
//! containers are in the `store` crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | [`Transport`] seam and the `reqwest`-backed [`HttpTransport`] |
//! | [`client`] | [`ApiClient`]: base URL, bearer token, read retry, JSON and multipart verbs |
//! | [`endpoints`] | One client per backend area (auth, users, fields, crops, weather, market, irrigation, advisory, system) |
//! | [`models`] | Wire records |
//! | [`cancel`] | [`CancelToken`] threaded through every call |
//! | [`error`] | [`ApiError`] and server message extraction |
//! | `testing` | Recording [`MockTransport`](testing::MockTransport), behind the `testing` feature |

pub mod cancel;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use cancel::CancelToken;
pub use client::ApiClient;
pub use error::ApiError;
pub use transport::{HttpTransport, Method, Transport};

pub use models::{
    ActivityItem, Advisory, Alert, AuthResponse, Crop, CropRecommendation, CurrentWeather,
    DashboardStats, DiseaseResult, Field, FieldInput, ForecastDay, HealthStatus,
    IrrigationRecommendation, IrrigationSchedule, IrrigationStatus, Location, LoginRequest,
    MarketPrice, PasswordChange, PestResult, PriceTrend, ProfileUpdate, RecommendationRequest,
    RegisterRequest, Severity, SoilMoisture, Trend, User, UserProfile, YieldPrediction,
    YieldRequest,
};
