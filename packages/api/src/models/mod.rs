//! # Wire models
//!
//! Plain serde records exchanged with the backend. Nothing here enforces
//! invariants: the server is the authority and responses are trusted verbatim.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | [`User`], [`UserProfile`], auth requests/responses, [`ProfileUpdate`], [`DashboardStats`] |
//! | [`field`] | [`Field`], [`FieldInput`] |
//! | [`crop`] | recommendations, disease and pest results, yield prediction |
//! | [`weather`] | [`Location`], [`CurrentWeather`], [`ForecastDay`] |
//! | [`market`] | [`MarketPrice`], [`PriceTrend`] |
//! | [`irrigation`] | schedules, soil moisture, recommendations, dashboard status |
//! | [`advisory`] | [`Alert`], [`Advisory`], [`ActivityItem`] |
//! | [`system`] | [`HealthStatus`] |
//!
//! Identifiers are held as `String` but accepted as either JSON strings or
//! numbers, since the backend serialises primary keys as integers.

pub mod advisory;
pub mod crop;
pub mod field;
pub mod irrigation;
pub mod market;
pub mod system;
pub mod user;
pub mod weather;

pub use advisory::{ActivityItem, Advisory, Alert, Severity};
pub use crop::{
    Crop, CropRecommendation, DiseaseResult, PestResult, RecommendationRequest, YieldPrediction,
    YieldRequest,
};
pub use field::{Field, FieldInput};
pub use irrigation::{IrrigationRecommendation, IrrigationSchedule, IrrigationStatus, SoilMoisture};
pub use market::{MarketPrice, PricePoint, PriceTrend, Trend};
pub use system::HealthStatus;
pub use user::{
    AuthResponse, DashboardStats, LoginRequest, PasswordChange, ProfileUpdate, RegisterRequest,
    User, UserProfile,
};
pub use weather::{CurrentWeather, ForecastDay, Location};

use serde::{Deserialize, Deserializer};

/// Deserialize an identifier that may arrive as a string or a number.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}

/// Same as [`id_string`] for optional identifiers.
pub(crate) fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    }))
}
