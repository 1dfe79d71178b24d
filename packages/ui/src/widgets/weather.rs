use api::{CurrentWeather, Field, ForecastDay, Location, User};
use dioxus::prelude::*;
use store::DashboardSource;

use crate::cell::use_cancel_token;
use crate::components::Card;
use crate::context::use_dashboard_source;
use crate::icons::{FaCloud, FaCloudRain, FaCloudSun, FaSun};
use crate::widgets::{settle_into, Load, LoadError, LoadingRow};
use crate::Icon;

/// Days of forecast shown under the current conditions.
pub const FORECAST_DAYS: u8 = 5;

/// Where the farm is: the profile's location if set, else the first field
/// with coordinates, else the backend's default.
pub fn preferred_location(user: Option<&User>, fields: &[Field]) -> Location {
    let named = user
        .and_then(|u| u.profile.location.as_deref())
        .map(str::trim)
        .filter(|l| !l.is_empty());
    if let Some(name) = named {
        return Location::Named(name.to_string());
    }
    fields
        .iter()
        .find_map(Field::coordinates)
        .map(|(latitude, longitude)| Location::Coordinates {
            latitude,
            longitude,
        })
        .unwrap_or_default()
}

#[component]
fn ConditionIcon(conditions: String, size: u32) -> Element {
    let c = conditions.to_ascii_lowercase();
    if c.contains("rain") || c.contains("storm") || c.contains("shower") {
        rsx! { Icon { icon: FaCloudRain, width: size, height: size } }
    } else if c.contains("partly") {
        rsx! { Icon { icon: FaCloudSun, width: size, height: size } }
    } else if c.contains("cloud") || c.contains("overcast") {
        rsx! { Icon { icon: FaCloud, width: size, height: size } }
    } else {
        rsx! { Icon { icon: FaSun, width: size, height: size } }
    }
}

/// Current conditions and a short forecast for `location`.
#[component]
pub fn WeatherCard(
    location: ReadOnlySignal<Location>,
    #[props(default = FORECAST_DAYS)] days: u8,
) -> Element {
    let source = use_dashboard_source();
    let cancel = use_cancel_token();
    let current = use_signal(|| Load::<CurrentWeather>::Loading);
    let forecast = use_signal(|| Load::<Vec<ForecastDay>>::Loading);

    let _loader = use_resource(move || {
        let location = location();
        let source = source.clone();
        let cancel = cancel.clone();
        async move {
            settle_into(
                current,
                source.current_weather(&location, &cancel).await,
                "Failed to load weather",
            );
            settle_into(
                forecast,
                source.forecast(&location, days, &cancel).await,
                "Failed to load forecast",
            );
        }
    });

    rsx! {
        Card {
            title: "Weather",
            class: "weather-card",
            {match current() {
                Load::Loading => rsx! { LoadingRow {} },
                Load::Failed(message) => rsx! { LoadError { message: message } },
                Load::Ready(weather) => rsx! {
                    div {
                        class: "weather-now",
                        ConditionIcon { conditions: weather.conditions.clone(), size: 40 }
                        div {
                            class: "weather-now-text",
                            span { class: "weather-temp", "{weather.temperature:.0}°C" }
                            span { class: "weather-conditions", "{weather.conditions}" }
                            span { class: "weather-location", "{weather.location}" }
                        }
                        dl {
                            class: "weather-details",
                            dt { "Humidity" }
                            dd { "{weather.humidity:.0}%" }
                            dt { "Wind" }
                            dd { "{weather.wind_speed:.0} km/h" }
                            if let Some(feels) = weather.feels_like {
                                dt { "Feels like" }
                                dd { "{feels:.0}°C" }
                            }
                            if let Some(rain) = weather.rainfall {
                                dt { "Rain (24h)" }
                                dd { "{rain:.1} mm" }
                            }
                        }
                    }
                },
            }}
            if let Load::Ready(outlook) = forecast() {
                ul {
                    class: "forecast",
                    for day in outlook {
                        li {
                            key: "{day.date}",
                            class: "forecast-day",
                            span { class: "forecast-date", "{day.date}" }
                            ConditionIcon { conditions: day.conditions.clone(), size: 20 }
                            span { class: "forecast-range", "{day.high:.0}° / {day.low:.0}°" }
                            span { class: "forecast-rain", "{day.precipitation_chance:.0}%" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_location_order() {
        let mut user = User {
            id: "1".into(),
            username: "farmer1".into(),
            ..Default::default()
        };
        let field = Field {
            id: "7".into(),
            name: "North Field".into(),
            latitude: Some(18.5),
            longitude: Some(73.8),
            ..Default::default()
        };

        assert_eq!(preferred_location(None, &[]), Location::default());
        assert_eq!(
            preferred_location(Some(&user), std::slice::from_ref(&field)),
            Location::Coordinates {
                latitude: 18.5,
                longitude: 73.8
            }
        );

        user.profile.location = Some("Pune".into());
        assert_eq!(
            preferred_location(Some(&user), &[field]),
            Location::Named("Pune".into())
        );
    }
}
