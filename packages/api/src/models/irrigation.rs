//! Irrigation schedules, soil moisture readings and recommendations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{id_string, opt_id_string};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IrrigationSchedule {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, alias = "fieldId", deserialize_with = "opt_id_string")]
    pub field_id: Option<String>,
    #[serde(default, alias = "fieldName")]
    pub field_name: Option<String>,
    #[serde(default, alias = "nextRun", alias = "scheduled_time")]
    pub next_run: Option<DateTime<Utc>>,
    #[serde(default, alias = "durationMinutes")]
    pub duration_minutes: u32,
    #[serde(default, alias = "waterVolume", alias = "water_volume")]
    pub water_volume_liters: Option<f64>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SoilMoisture {
    #[serde(default, alias = "fieldId", deserialize_with = "opt_id_string")]
    pub field_id: Option<String>,
    /// Volumetric water content, percent.
    #[serde(alias = "moisture", alias = "moisturePercent")]
    pub moisture_percent: f64,
    #[serde(default, alias = "measuredAt", alias = "timestamp")]
    pub measured_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IrrigationRecommendation {
    #[serde(default, alias = "fieldId", deserialize_with = "opt_id_string")]
    pub field_id: Option<String>,
    #[serde(default, alias = "shouldIrrigate")]
    pub should_irrigate: bool,
    /// Millimetres of water to apply.
    #[serde(default, alias = "recommendedAmount", alias = "amount_mm")]
    pub recommended_amount_mm: f64,
    #[serde(default)]
    pub reason: String,
}

/// Condensed view used by the dashboard irrigation card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IrrigationStatus {
    /// Average soil moisture across fields, percent.
    #[serde(alias = "soilMoisture")]
    pub soil_moisture: f64,
    #[serde(default, alias = "nextIrrigation")]
    pub next_irrigation: Option<DateTime<Utc>>,
    /// Litres used this week.
    #[serde(default, alias = "waterUsed")]
    pub water_used_liters: f64,
    #[serde(default, alias = "activeSchedules")]
    pub active_schedules: u32,
}

impl IrrigationStatus {
    /// Moisture band shown next to the gauge.
    pub fn moisture_label(&self) -> &'static str {
        match self.soil_moisture {
            m if m < 25.0 => "Dry",
            m if m < 60.0 => "Optimal",
            _ => "Saturated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_defaults_enabled() {
        let s: IrrigationSchedule =
            serde_json::from_str(r#"{"id": 3, "field_id": 9, "duration_minutes": 45}"#).unwrap();
        assert!(s.enabled);
        assert_eq!(s.field_id.as_deref(), Some("9"));
    }

    #[test]
    fn test_moisture_label_bands() {
        let mut status = IrrigationStatus {
            soil_moisture: 18.0,
            ..Default::default()
        };
        assert_eq!(status.moisture_label(), "Dry");
        status.soil_moisture = 42.0;
        assert_eq!(status.moisture_label(), "Optimal");
        status.soil_moisture = 75.0;
        assert_eq!(status.moisture_label(), "Saturated");
    }
}
