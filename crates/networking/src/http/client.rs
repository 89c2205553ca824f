//! CoinGecko HTTP client
//!
//! Three read-only endpoints are consumed: the market list, the full coin
//! record, and the historical price series. Each call decodes the body in
//! one step into the typed models from `coinx-core`.

use coinx_core::{CoinDetail, CoinSummary, Error, MarketChartResponse, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE},
    Client, Response,
};
use tracing::{debug, error, instrument};

const API_BASE: &str = "https://api.coingecko.com/api/v3";
// The public API throttles or blocks clients without a browser-like User-Agent
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// HTTP client for the CoinGecko market-data API
///
/// Stateless and unauthenticated; a single instance is shared across the
/// whole app. No response is cached — every call hits the network.
pub struct CoinGeckoClient {
    http: Client,
}

impl CoinGeckoClient {
    pub fn new() -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .expect("Failed to create HTTP client");

        Self { http }
    }

    /// Default headers for requests
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers
    }

    /// Check if the response indicates free-tier throttling
    fn check_rate_limit(response: &Response) -> Option<Error> {
        if response.status().as_u16() == 429 {
            Some(Error::RateLimited)
        } else {
            None
        }
    }

    /// Get the market listing for a display currency
    ///
    /// Rows come back ordered by market cap; the order is preserved.
    #[instrument(skip(self))]
    pub async fn markets(&self, vs_currency: &str) -> Result<Vec<CoinSummary>> {
        let url = format!(
            "{}/coins/markets?vs_currency={}",
            API_BASE,
            vs_currency.to_lowercase()
        );

        debug!("Fetching market list from: {}", url);

        let response = self
            .http
            .get(&url)
            .headers(self.default_headers())
            .send()
            .await?;

        if let Some(err) = Self::check_rate_limit(&response) {
            return Err(err);
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Market list request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let coins: Vec<CoinSummary> = response.json().await.map_err(|e| {
            error!("Failed to parse market list: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Market list fetched: {} coins", coins.len());
        Ok(coins)
    }

    /// Get the full record for one coin, including market, community,
    /// and developer blocks
    #[instrument(skip(self))]
    pub async fn coin_detail(&self, id: &str) -> Result<CoinDetail> {
        let url = format!(
            "{}/coins/{}?market_data=true&community_data=true&developer_data=true&sparkline=true",
            API_BASE, id
        );

        debug!("Fetching coin detail from: {}", url);

        let response = self
            .http
            .get(&url)
            .headers(self.default_headers())
            .send()
            .await?;

        if let Some(err) = Self::check_rate_limit(&response) {
            return Err(err);
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Coin detail request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let detail: CoinDetail = response.json().await.map_err(|e| {
            error!("Failed to parse coin detail: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!(
            "Coin detail fetched: {} (rank {:?})",
            detail.name, detail.market_cap_rank
        );
        Ok(detail)
    }

    /// Get the historical price series for a coin over a day-count window
    #[instrument(skip(self))]
    pub async fn market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<MarketChartResponse> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            API_BASE,
            id,
            vs_currency.to_lowercase(),
            days
        );

        debug!("Fetching market chart from: {}", url);

        let response = self
            .http
            .get(&url)
            .headers(self.default_headers())
            .send()
            .await?;

        if let Some(err) = Self::check_rate_limit(&response) {
            return Err(err);
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Market chart request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let chart: MarketChartResponse = response.json().await.map_err(|e| {
            error!("Failed to parse market chart: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!(
            "Market chart fetched: {} price points over {} days",
            chart.prices.len(),
            days
        );
        Ok(chart)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}
