//! Weather readings and forecasts.

use serde::{Deserialize, Serialize};

/// Where to ask for weather.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Coordinates { latitude: f64, longitude: f64 },
    Named(String),
}

impl Location {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        match self {
            Location::Coordinates {
                latitude,
                longitude,
            } => vec![("lat", latitude.to_string()), ("lon", longitude.to_string())],
            Location::Named(name) => vec![("location", name.clone())],
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::Named("default".to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    #[serde(default)]
    pub location: String,
    /// Degrees Celsius.
    pub temperature: f64,
    #[serde(default, alias = "feelsLike")]
    pub feels_like: Option<f64>,
    /// Percent.
    #[serde(default)]
    pub humidity: f64,
    /// km/h.
    #[serde(default, alias = "windSpeed")]
    pub wind_speed: f64,
    #[serde(default, alias = "description")]
    pub conditions: String,
    /// Millimetres over the last 24h.
    #[serde(default)]
    pub rainfall: Option<f64>,
    #[serde(default, alias = "uvIndex")]
    pub uv_index: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    /// ISO date, e.g. `2024-06-01`.
    pub date: String,
    #[serde(alias = "maxTemp", alias = "max_temp")]
    pub high: f64,
    #[serde(alias = "minTemp", alias = "min_temp")]
    pub low: f64,
    #[serde(default, alias = "description")]
    pub conditions: String,
    /// Percent.
    #[serde(default, alias = "precipitationChance", alias = "rain_chance")]
    pub precipitation_chance: f64,
}

/// Envelope used by the forecast endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub(crate) struct Forecast {
    #[serde(default, alias = "days")]
    pub forecast: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_query_pairs() {
        let loc = Location::Coordinates {
            latitude: 28.6,
            longitude: 77.2,
        };
        assert_eq!(
            loc.to_query(),
            vec![("lat", "28.6".to_string()), ("lon", "77.2".to_string())]
        );
        assert_eq!(
            Location::Named("Pune".into()).to_query(),
            vec![("location", "Pune".to_string())]
        );
    }

    #[test]
    fn test_forecast_aliases() {
        let f: Forecast = serde_json::from_str(
            r#"{"days": [{"date": "2024-06-01", "max_temp": 31, "min_temp": 22, "rain_chance": 40}]}"#,
        )
        .unwrap();
        assert_eq!(f.forecast.len(), 1);
        assert_eq!(f.forecast[0].high, 31.0);
        assert_eq!(f.forecast[0].precipitation_chance, 40.0);
    }
}
