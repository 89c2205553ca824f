//! Market list models

use serde::{Deserialize, Serialize};

/// One row of the market listing from /coins/markets
///
/// Every numeric field is optional: the API nulls or omits values for
/// thinly traded coins, and a missing value renders as a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

impl CoinSummary {
    /// Case-insensitive substring match of `query` against the coin name
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Ticker symbol in display form
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}
