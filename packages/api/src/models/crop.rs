//! Crop analysis payloads. All responses here are transient: shown once and
//! never persisted.

use serde::{Deserialize, Serialize};

use super::{id_string, opt_id_string};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default, alias = "durationDays")]
    pub duration_days: Option<u32>,
}

/// Soil and climate readings used to rank suitable crops.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Percent.
    pub humidity: f64,
    pub ph: f64,
    /// Millimetres.
    pub rainfall: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CropRecommendation {
    pub crop: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default, alias = "description")]
    pub reason: Option<String>,
    #[serde(default, alias = "expectedYield")]
    pub expected_yield: Option<String>,
}

impl CropRecommendation {
    pub fn confidence_percent(&self) -> u8 {
        to_percent(self.confidence)
    }
}

/// Envelope used by the recommendations endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub(crate) struct RecommendationList {
    #[serde(default)]
    pub recommendations: Vec<CropRecommendation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiseaseResult {
    #[serde(default, alias = "isHealthy")]
    pub is_healthy: bool,
    #[serde(default, alias = "diseaseName", alias = "disease_name")]
    pub disease: Option<String>,
    /// Either a 0..1 probability or a 0..100 percentage, depending on the model.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub treatments: Vec<String>,
}

impl DiseaseResult {
    pub fn confidence_percent(&self) -> u8 {
        to_percent(self.confidence)
    }

    /// Headline for the result panel.
    pub fn headline(&self) -> String {
        if self.is_healthy {
            "Healthy".to_string()
        } else {
            self.disease
                .clone()
                .unwrap_or_else(|| "Disease detected".to_string())
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PestResult {
    #[serde(default)]
    pub detected: bool,
    #[serde(default, alias = "pestName", alias = "pest_name")]
    pub pest: Option<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl PestResult {
    pub fn confidence_percent(&self) -> u8 {
        to_percent(self.confidence)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct YieldRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    pub crop_type: String,
    /// Hectares.
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct YieldPrediction {
    #[serde(default, alias = "fieldId", deserialize_with = "opt_id_string")]
    pub field_id: Option<String>,
    #[serde(alias = "predictedYield")]
    pub predicted_yield: f64,
    #[serde(default = "default_yield_unit")]
    pub unit: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub factors: Vec<String>,
}

fn default_yield_unit() -> String {
    "tonnes".to_string()
}

/// Normalise a confidence value to a whole percentage in `0..=100`.
fn to_percent(confidence: f64) -> u8 {
    let pct = if confidence <= 1.0 {
        confidence * 100.0
    } else {
        confidence
    };
    pct.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_accepts_ratio_or_percent() {
        let a = DiseaseResult {
            confidence: 0.873,
            ..Default::default()
        };
        let b = DiseaseResult {
            confidence: 87.3,
            ..Default::default()
        };
        assert_eq!(a.confidence_percent(), 87);
        assert_eq!(b.confidence_percent(), 87);
    }

    #[test]
    fn test_disease_headline() {
        let healthy: DiseaseResult =
            serde_json::from_str(r#"{"isHealthy": true, "confidence": 0.99}"#).unwrap();
        assert_eq!(healthy.headline(), "Healthy");

        let sick: DiseaseResult = serde_json::from_str(
            r#"{"is_healthy": false, "disease_name": "Leaf Rust", "confidence": 0.8, "severity": "moderate"}"#,
        )
        .unwrap();
        assert_eq!(sick.headline(), "Leaf Rust");
        assert_eq!(sick.severity.as_deref(), Some("moderate"));
    }

    #[test]
    fn test_yield_prediction_default_unit() {
        let p: YieldPrediction = serde_json::from_str(r#"{"predicted_yield": 4.2}"#).unwrap();
        assert_eq!(p.unit, "tonnes");
    }
}
