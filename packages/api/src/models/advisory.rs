//! Alerts, advisories and the activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id_string;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    #[serde(alias = "info")]
    Low,
    #[serde(alias = "warning", alias = "moderate")]
    Medium,
    High,
    #[serde(alias = "severe")]
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// A notification whose read flag is toggled server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Category, e.g. `"weather"`, `"pest"`, `"irrigation"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    #[serde(alias = "created_at", alias = "createdAt")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, alias = "is_read", alias = "isRead")]
    pub read: bool,
}

/// Count of alerts not yet marked read.
pub fn unread_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| !a.read).count()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Advisory {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "body")]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_parses_type_and_severity() {
        let alert: Alert = serde_json::from_str(
            r#"{"id": 1, "type": "weather", "severity": "high",
                "message": "Heavy rain expected", "created_at": "2024-06-01T06:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(alert.kind, "weather");
        assert_eq!(alert.severity, Severity::High);
        assert!(!alert.read);
    }

    #[test]
    fn test_unread_count() {
        let mut a = Alert::default();
        let mut b = Alert::default();
        b.read = true;
        a.read = false;
        assert_eq!(unread_count(&[a, b]), 1);
    }
}
