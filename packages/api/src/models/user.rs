//! # User and authentication payloads
//!
//! [`User`] is the account record returned by login, registration and the
//! profile endpoints. Its farm details live in the nested [`UserProfile`].
//! [`User::display_name`] returns the farm name or falls back to the username.
//!
//! Requests ([`LoginRequest`], [`RegisterRequest`], [`ProfileUpdate`],
//! [`PasswordChange`]) serialise in snake_case. Responses also accept the
//! camelCase spellings some endpoints use.

use serde::{Deserialize, Serialize};

use super::{id_string, opt_id_string};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile: UserProfile,
}

impl User {
    /// Farm name if set, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.profile
            .farm_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Up to two uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Farm details attached to a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default, alias = "farmName")]
    pub farm_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Hectares.
    #[serde(default, alias = "farmSize")]
    pub farm_size: Option<f64>,
    #[serde(default)]
    pub crops: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body returned by login and registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default, alias = "access", alias = "access_token")]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: User,
}

/// Partial profile update. Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crops: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Aggregate counters for the dashboard header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default, alias = "totalFields")]
    pub total_fields: u32,
    /// Hectares.
    #[serde(default, alias = "totalArea")]
    pub total_area: f64,
    #[serde(default, alias = "activeAlerts")]
    pub active_alerts: u32,
    #[serde(default, alias = "cropsMonitored")]
    pub crops_monitored: u32,
    #[serde(default, alias = "lastFieldId", deserialize_with = "opt_id_string")]
    pub last_field_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_numeric_id_and_missing_profile() {
        let user: User = serde_json::from_str(r#"{"id": 42, "username": "farmer1"}"#).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.display_name(), "farmer1");
        assert_eq!(user.profile, UserProfile::default());
    }

    #[test]
    fn test_display_name_prefers_farm_name() {
        let user: User = serde_json::from_str(
            r#"{"id": "1", "username": "farmer1", "profile": {"farmName": "green acres"}}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "green acres");
        assert_eq!(user.initials(), "GA");
    }

    #[test]
    fn test_auth_response_token_aliases() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"access": "jwt", "user": {"id": "1", "username": "farmer1"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token.as_deref(), Some("jwt"));
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            phone: Some("555".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"phone":"555"}"#);
    }
}
