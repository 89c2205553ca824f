//! Historical price series models

use serde::{Deserialize, Serialize};

/// Response from /coins/{id}/market_chart
///
/// Each list is a chronological sequence of `[timestamp_ms, value]` pairs.
/// The series is replaced wholesale on every (coin, currency, range) change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Vec<PricePoint>,
    #[serde(default)]
    pub market_caps: Vec<PricePoint>,
    #[serde(default)]
    pub total_volumes: Vec<PricePoint>,
}

/// A single (timestamp, price) sample.
///
/// The wire format is a bare two-element JSON array; timestamps are
/// milliseconds since the Unix epoch and may arrive as floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }
}

impl From<(f64, f64)> for PricePoint {
    fn from((timestamp, price): (f64, f64)) -> Self {
        Self {
            timestamp_ms: timestamp as i64,
            price,
        }
    }
}

impl From<PricePoint> for (f64, f64) {
    fn from(point: PricePoint) -> Self {
        (point.timestamp_ms as f64, point.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_timestamp_price_pairs() {
        let json = r#"{
            "prices": [[1700000000000, 37000.5], [1700003600000.0, 37120.25]],
            "market_caps": [[1700000000000, 720000000000.0]],
            "total_volumes": []
        }"#;
        let chart: MarketChartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0], PricePoint::new(1700000000000, 37000.5));
        assert_eq!(chart.prices[1].price, 37120.25);
        assert_eq!(chart.market_caps.len(), 1);
        assert!(chart.total_volumes.is_empty());
    }

    #[test]
    fn decodes_missing_series_as_empty() {
        let chart: MarketChartResponse = serde_json::from_str("{}").unwrap();
        assert!(chart.prices.is_empty());
    }
}
