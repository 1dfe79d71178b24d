//! Field (land parcel) records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id_string;

/// A farmer-managed land parcel as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Field {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    /// Hectares.
    #[serde(default)]
    pub area: f64,
    #[serde(default, alias = "cropType")]
    pub crop_type: String,
    #[serde(default, alias = "soilType")]
    pub soil_type: Option<String>,
    #[serde(default, alias = "irrigationType")]
    pub irrigation_type: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Field {
    /// `(latitude, longitude)` when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Payload for creating or updating a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldInput {
    pub name: String,
    pub area: f64,
    pub crop_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrigation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl From<&Field> for FieldInput {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            area: field.area,
            crop_type: field.crop_type.clone(),
            soil_type: field.soil_type.clone(),
            irrigation_type: field.irrigation_type.clone(),
            latitude: field.latitude,
            longitude: field.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_camel_case_response() {
        let field: Field = serde_json::from_str(
            r#"{"id": 7, "name": "North Field", "area": 10, "cropType": "wheat",
                "latitude": 28.6, "longitude": 77.2, "createdAt": "2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(field.id, "7");
        assert_eq!(field.crop_type, "wheat");
        assert_eq!(field.coordinates(), Some((28.6, 77.2)));
        assert!(field.created_at.is_some());
    }

    #[test]
    fn test_coordinates_need_both_axes() {
        let field = Field {
            latitude: Some(1.0),
            ..Default::default()
        };
        assert_eq!(field.coordinates(), None);
    }
}
