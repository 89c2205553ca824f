//! Shared type definitions

use serde::{Deserialize, Serialize};

/// Display currency used when none has been picked yet
pub const DEFAULT_CURRENCY: &str = "usd";

/// Currencies offered by the picker when discovery fails
pub const FALLBACK_CURRENCIES: [&str; 5] = ["usd", "eur", "inr", "gbp", "jpy"];

/// User-selectable chart window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
    ThreeMonths,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::ThreeMonths,
        TimeRange::Year,
    ];

    /// Day-count window passed to the market-chart endpoint
    pub fn days(&self) -> u32 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::ThreeMonths => 90,
            TimeRange::Year => 365,
        }
    }

    /// Short label shown on the range selector
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "1D",
            TimeRange::Week => "7D",
            TimeRange::Month => "1M",
            TimeRange::ThreeMonths => "3M",
            TimeRange::Year => "1Y",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Navigation parameters handed from the list screen to the detail screen.
///
/// Always passed as a named record; the detail screen consumes the fields
/// by name and performs no validation of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinRoute {
    pub id: String,
    pub currency: String,
}

impl CoinRoute {
    pub fn new(id: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            currency: currency.into(),
        }
    }
}

/// Where a currency set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencySource {
    /// Codes read from the market-data API
    Discovered,
    /// Discovery failed or returned an unexpected shape
    Fallback,
}

/// The set of display currencies offered by the picker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencySet {
    pub codes: Vec<String>,
    pub source: CurrencySource,
}

impl CurrencySet {
    /// Build a discovered set. Codes are lowercased, sorted, and deduplicated
    /// so the picker order is stable across fetches.
    pub fn discovered(codes: Vec<String>) -> Self {
        let mut codes: Vec<String> = codes.into_iter().map(|c| c.to_lowercase()).collect();
        codes.sort();
        codes.dedup();
        Self {
            codes,
            source: CurrencySource::Discovered,
        }
    }

    /// The fixed five-currency fallback set
    pub fn fallback() -> Self {
        Self {
            codes: FALLBACK_CURRENCIES.iter().map(|c| c.to_string()).collect(),
            source: CurrencySource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == CurrencySource::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_day_counts() {
        assert_eq!(TimeRange::Day.days(), 1);
        assert_eq!(TimeRange::Week.days(), 7);
        assert_eq!(TimeRange::Month.days(), 30);
        assert_eq!(TimeRange::ThreeMonths.days(), 90);
        assert_eq!(TimeRange::Year.days(), 365);
    }

    #[test]
    fn time_range_labels() {
        let labels: Vec<&str> = TimeRange::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["1D", "7D", "1M", "3M", "1Y"]);
    }

    #[test]
    fn discovered_set_is_sorted_and_deduplicated() {
        let set = CurrencySet::discovered(vec![
            "USD".to_string(),
            "eur".to_string(),
            "usd".to_string(),
        ]);
        assert_eq!(set.codes, vec!["eur", "usd"]);
        assert_eq!(set.source, CurrencySource::Discovered);
    }

    #[test]
    fn fallback_set_has_five_currencies() {
        let set = CurrencySet::fallback();
        assert_eq!(set.codes.len(), 5);
        assert!(set.is_fallback());
        assert!(set.codes.contains(&"usd".to_string()));
    }
}
