//! Text formatting shared by the widgets.

use chrono::{DateTime, Utc};

/// "just now", "5m ago", "3h ago", "2d ago", then a date.
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds();
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s if s < 7 * 86_400 => format!("{}d ago", s / 86_400),
        _ => at.format("%b %-d, %Y").to_string(),
    }
}

/// Time until a future instant: "in 45m", "in 6h", "in 2d". Past instants
/// read "due now".
pub fn time_until(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (at - now).num_seconds();
    match secs {
        s if s <= 0 => "due now".to_string(),
        s if s < 3_600 => format!("in {}m", (s / 60).max(1)),
        s if s < 86_400 => format!("in {}h", s / 3_600),
        s => format!("in {}d", s / 86_400),
    }
}

/// Signed percentage with one decimal: "+2.5%", "-1.2%", "0.0%".
pub fn signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Area in hectares, without trailing zeros: "10 ha", "2.5 ha".
pub fn hectares(area: f64) -> String {
    let rounded = (area * 100.0).round() / 100.0;
    format!("{rounded} ha")
}

/// Thousands-separated integer, e.g. "12,500".
pub fn grouped(value: f64) -> String {
    let n = value.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now - Duration::seconds(10), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2d ago");
        assert_eq!(time_ago(now - Duration::days(30), now), "May 11, 2024");
    }

    #[test]
    fn test_time_until() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        assert_eq!(time_until(now + Duration::hours(6), now), "in 6h");
        assert_eq!(time_until(now - Duration::hours(1), now), "due now");
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(signed_percent(2.5), "+2.5%");
        assert_eq!(signed_percent(-1.24), "-1.2%");
        assert_eq!(hectares(10.0), "10 ha");
        assert_eq!(hectares(2.456), "2.46 ha");
        assert_eq!(grouped(12_500.0), "12,500");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(-1_234_567.0), "-1,234,567");
    }
}
