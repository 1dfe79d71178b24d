//! Commodity market prices.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketPrice {
    pub commodity: String,
    #[serde(default)]
    pub market: String,
    pub price: f64,
    /// e.g. `"INR/quintal"`.
    #[serde(default)]
    pub unit: String,
    /// Percent change since the previous trading day.
    #[serde(default, alias = "changePercent", alias = "change")]
    pub change_percent: f64,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
}

impl MarketPrice {
    /// Moves smaller than 0.05% count as flat.
    pub fn trend(&self) -> Trend {
        if self.change_percent > 0.05 {
            Trend::Up
        } else if self.change_percent < -0.05 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceTrend {
    pub commodity: String,
    #[serde(default, alias = "data")]
    pub points: Vec<PricePoint>,
}

impl PriceTrend {
    /// Percent change between the first and last point.
    pub fn overall_change(&self) -> Option<f64> {
        let first = self.points.first()?.price;
        let last = self.points.last()?.price;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_thresholds() {
        let mut p = MarketPrice {
            change_percent: 1.2,
            ..Default::default()
        };
        assert_eq!(p.trend(), Trend::Up);
        p.change_percent = -0.8;
        assert_eq!(p.trend(), Trend::Down);
        p.change_percent = 0.01;
        assert_eq!(p.trend(), Trend::Flat);
    }

    #[test]
    fn test_overall_change() {
        let t = PriceTrend {
            commodity: "wheat".into(),
            points: vec![
                PricePoint { date: "d1".into(), price: 2000.0 },
                PricePoint { date: "d2".into(), price: 2100.0 },
            ],
        };
        assert_eq!(t.overall_change(), Some(5.0));
        assert_eq!(PriceTrend::default().overall_change(), None);
    }
}
