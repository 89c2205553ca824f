//! Coin detail models
//!
//! The detail endpoint returns a deeply nested, externally controlled JSON
//! document. Decoding it into these types is the single boundary between
//! the untyped payload and the rest of the app: every block and every
//! numeric field is optional, and absence is data, not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full coin record from /coins/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub image: Option<CoinImage>,
    #[serde(default)]
    pub description: Option<CoinDescription>,
    #[serde(default)]
    pub links: Option<CoinLinks>,
    #[serde(default)]
    pub market_data: Option<MarketData>,
    #[serde(default)]
    pub community_data: Option<CommunityData>,
    #[serde(default)]
    pub developer_data: Option<DeveloperData>,
    #[serde(default)]
    pub genesis_date: Option<String>,
    #[serde(default)]
    pub hashing_algorithm: Option<String>,
    #[serde(default)]
    pub block_time_in_minutes: Option<f64>,
}

impl CoinDetail {
    /// Ticker symbol in display form
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// English description text, if present and non-empty
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_ref()
            .and_then(|d| d.en.as_deref())
            .filter(|text| !text.is_empty())
    }
}

/// Icon URLs at the three sizes the API serves
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoinImage {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Localized description block (only English is consumed)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoinDescription {
    #[serde(default)]
    pub en: Option<String>,
}

/// External links for a coin
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoinLinks {
    #[serde(default)]
    pub homepage: Vec<String>,
    #[serde(default)]
    pub blockchain_site: Vec<String>,
    #[serde(default)]
    pub official_forum_url: Vec<String>,
    #[serde(default)]
    pub subreddit_url: Option<String>,
    #[serde(default)]
    pub repos_url: Option<ReposUrl>,
}

impl CoinLinks {
    pub fn primary_homepage(&self) -> Option<&str> {
        first_nonempty(&self.homepage)
    }

    pub fn primary_explorer(&self) -> Option<&str> {
        first_nonempty(&self.blockchain_site)
    }

    pub fn primary_forum(&self) -> Option<&str> {
        first_nonempty(&self.official_forum_url)
    }

    pub fn primary_github(&self) -> Option<&str> {
        self.repos_url
            .as_ref()
            .and_then(|r| first_nonempty(&r.github))
    }
}

/// Source repository links
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReposUrl {
    #[serde(default)]
    pub github: Vec<String>,
}

/// Market data block, with per-currency quote maps
///
/// The API pads link lists and quote maps with empty strings and nulls;
/// the accessors flatten those away.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub market_cap: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub total_volume: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub high_24h: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub low_24h: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_14d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1y: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
}

impl MarketData {
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        lookup(&self.current_price, currency)
    }

    pub fn market_cap_in(&self, currency: &str) -> Option<f64> {
        lookup(&self.market_cap, currency)
    }

    pub fn volume_in(&self, currency: &str) -> Option<f64> {
        lookup(&self.total_volume, currency)
    }

    pub fn high_24h_in(&self, currency: &str) -> Option<f64> {
        lookup(&self.high_24h, currency)
    }

    pub fn low_24h_in(&self, currency: &str) -> Option<f64> {
        lookup(&self.low_24h, currency)
    }

    /// Currency codes the API quotes market caps in.
    /// This key set doubles as the supported-currency list for the picker.
    pub fn quoted_currencies(&self) -> Vec<String> {
        self.market_cap.keys().cloned().collect()
    }
}

fn lookup(map: &HashMap<String, Option<f64>>, currency: &str) -> Option<f64> {
    map.get(&currency.to_lowercase()).copied().flatten()
}

/// Community metrics block
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommunityData {
    #[serde(default)]
    pub twitter_followers: Option<u64>,
    #[serde(default)]
    pub reddit_subscribers: Option<u64>,
}

/// Developer activity block
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeveloperData {
    #[serde(default)]
    pub stars: Option<u64>,
    #[serde(default)]
    pub forks: Option<u64>,
    #[serde(default)]
    pub commit_count_4_weeks: Option<u64>,
}

fn first_nonempty(urls: &[String]) -> Option<&str> {
    urls.iter().map(String::as_str).find(|u| !u.is_empty())
}
