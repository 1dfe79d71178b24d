//! # Domain API clients
//!
//! One borrowing wrapper per backend area. Each method maps to exactly one
//! endpoint, forwards its parameters as query string or body and returns the
//! decoded body unchanged. Obtain them from an [`ApiClient`]:
//!
//! ```ignore
//! let fields = client.fields().list(&cancel).await?;
//! ```
//!
//! | Accessor | Client | Base path |
//! |----------|--------|-----------|
//! | [`ApiClient::auth`] | [`AuthApi`] | `/api/v1/auth/` |
//! | [`ApiClient::users`] | [`UserApi`] | `/api/v1/users/` |
//! | [`ApiClient::fields`] | [`FieldApi`] | `/api/v1/fields/` |
//! | [`ApiClient::crops`] | [`CropApi`] | `/api/v1/crops/` |
//! | [`ApiClient::weather`] | [`WeatherApi`] | `/api/v1/weather/` |
//! | [`ApiClient::market`] | [`MarketApi`] | `/api/v1/market/` |
//! | [`ApiClient::irrigation`] | [`IrrigationApi`] | `/api/v1/irrigation/` |
//! | [`ApiClient::advisory`] | [`AdvisoryApi`] | `/api/v1/advisory/` |
//! | [`ApiClient::system`] | [`SystemApi`] | `/api/v1/system/` |

mod advisory;
mod auth;
mod crops;
mod fields;
mod irrigation;
mod market;
mod system;
mod users;
mod weather;

pub use advisory::AdvisoryApi;
pub use auth::AuthApi;
pub use crops::CropApi;
pub use fields::FieldApi;
pub use irrigation::IrrigationApi;
pub use market::MarketApi;
pub use system::SystemApi;
pub use users::UserApi;
pub use weather::WeatherApi;

use crate::transport::Transport;
use crate::ApiClient;

impl<T: Transport> ApiClient<T> {
    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi { client: self }
    }

    pub fn users(&self) -> UserApi<'_, T> {
        UserApi { client: self }
    }

    pub fn fields(&self) -> FieldApi<'_, T> {
        FieldApi { client: self }
    }

    pub fn crops(&self) -> CropApi<'_, T> {
        CropApi { client: self }
    }

    pub fn weather(&self) -> WeatherApi<'_, T> {
        WeatherApi { client: self }
    }

    pub fn market(&self) -> MarketApi<'_, T> {
        MarketApi { client: self }
    }

    pub fn irrigation(&self) -> IrrigationApi<'_, T> {
        IrrigationApi { client: self }
    }

    pub fn advisory(&self) -> AdvisoryApi<'_, T> {
        AdvisoryApi { client: self }
    }

    pub fn system(&self) -> SystemApi<'_, T> {
        SystemApi { client: self }
    }
}
