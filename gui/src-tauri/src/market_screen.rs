//! List screen state machine
//!
//! Holds the market rows, the live search text, and the selected display
//! currency. Fetch results are applied through [`RequestToken`]s so a
//! response for a superseded currency never lands on screen.

use coinx_core::{CoinRoute, CoinSummary, CurrencySet, Error, DEFAULT_CURRENCY};
use tracing::{debug, error};

use crate::request::{Generation, RequestToken};

pub struct MarketScreen {
    currency: String,
    search: String,
    currencies: Option<CurrencySet>,
    coins: Vec<CoinSummary>,
    loading: bool,
    generation: Generation,
}

impl MarketScreen {
    pub fn new() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            search: String::new(),
            currencies: None,
            coins: Vec::new(),
            loading: false,
            generation: Generation::default(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn currencies(&self) -> Option<&CurrencySet> {
        self.currencies.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Change the display currency. Outstanding market fetches become
    /// stale. Returns false when the currency is unchanged (no re-fetch
    /// needed); the currency set itself is never re-fetched here.
    pub fn set_currency(&mut self, currency: &str) -> bool {
        let currency = currency.to_lowercase();
        if currency == self.currency {
            return false;
        }
        self.currency = currency;
        self.generation.bump();
        true
    }

    /// Update the live search text (recomputed per keystroke, no debounce)
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Store the picker's currency set (discovered or fallback)
    pub fn set_currencies(&mut self, set: CurrencySet) {
        self.currencies = Some(set);
    }

    /// Start a market fetch for the current currency
    pub fn begin_load(&mut self) -> (RequestToken, String) {
        self.loading = true;
        (self.generation.token(), self.currency.clone())
    }

    /// Apply a completed market fetch. Failures keep the previous rows —
    /// the list degrades, it never shows a failure screen.
    pub fn apply_market(&mut self, token: RequestToken, result: Result<Vec<CoinSummary>, Error>) {
        if !self.generation.accepts(token) {
            debug!("Discarding stale market response");
            return;
        }
        self.loading = false;
        match result {
            Ok(coins) => {
                debug!("Market list applied: {} coins", coins.len());
                self.coins = coins;
            }
            Err(e) => error!("Market list fetch failed: {}", e),
        }
    }

    /// Rows matching the live search text; an empty search yields all rows
    pub fn filtered_coins(&self) -> Vec<&CoinSummary> {
        self.coins
            .iter()
            .filter(|coin| coin.name_matches(&self.search))
            .collect()
    }

    /// Navigation handoff for a tapped row. The id is forwarded unchanged;
    /// no validation happens here.
    pub fn route_for(&self, id: &str) -> CoinRoute {
        CoinRoute::new(id, self.currency.clone())
    }
}

impl Default for MarketScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(id: &str, name: &str) -> CoinSummary {
        CoinSummary {
            id: id.to_string(),
            symbol: id[..3.min(id.len())].to_string(),
            name: name.to_string(),
            image: None,
            current_price: Some(1.0),
            market_cap: None,
            market_cap_rank: None,
            total_volume: None,
            price_change_percentage_24h: None,
        }
    }

    fn loaded_screen() -> MarketScreen {
        let mut screen = MarketScreen::new();
        let (token, _) = screen.begin_load();
        screen.apply_market(
            token,
            Ok(vec![
                coin("bitcoin", "Bitcoin"),
                coin("ethereum", "Ethereum"),
                coin("dogecoin", "Dogecoin"),
            ]),
        );
        screen
    }

    #[test]
    fn starts_with_default_currency_and_no_rows() {
        let screen = MarketScreen::new();
        assert_eq!(screen.currency(), "usd");
        assert!(screen.filtered_coins().is_empty());
        assert!(!screen.is_loading());
    }

    #[test]
    fn empty_search_returns_full_list() {
        let screen = loaded_screen();
        assert_eq!(screen.filtered_coins().len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut screen = loaded_screen();
        screen.set_search("BIT");
        assert_eq!(screen.filtered_coins().len(), 1);
        assert_eq!(screen.filtered_coins()[0].name, "Bitcoin");

        screen.set_search("coin");
        assert_eq!(screen.filtered_coins().len(), 3);

        screen.set_search("zebra");
        assert!(screen.filtered_coins().is_empty());
    }

    #[test]
    fn currency_change_invalidates_in_flight_fetch() {
        let mut screen = loaded_screen();
        let (stale_token, currency) = screen.begin_load();
        assert_eq!(currency, "usd");

        assert!(screen.set_currency("eur"));
        let (fresh_token, currency) = screen.begin_load();
        assert_eq!(currency, "eur");

        // The usd response resolves late; it must not land
        screen.apply_market(stale_token, Ok(vec![coin("tether", "Tether")]));
        assert!(screen.is_loading());
        assert_eq!(screen.filtered_coins().len(), 3);

        screen.apply_market(fresh_token, Ok(vec![coin("solana", "Solana")]));
        assert!(!screen.is_loading());
        assert_eq!(screen.filtered_coins().len(), 1);
    }

    #[test]
    fn unchanged_currency_needs_no_refetch() {
        let mut screen = MarketScreen::new();
        assert!(!screen.set_currency("usd"));
        assert!(!screen.set_currency("USD"));
        assert!(screen.set_currency("eur"));
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let mut screen = loaded_screen();
        let (token, _) = screen.begin_load();
        screen.apply_market(token, Err(Error::ApiError("500".to_string())));
        assert!(!screen.is_loading());
        assert_eq!(screen.filtered_coins().len(), 3);
    }

    #[test]
    fn route_carries_selected_currency() {
        let mut screen = loaded_screen();
        screen.set_currency("gbp");
        let route = screen.route_for("bitcoin");
        assert_eq!(route.id, "bitcoin");
        assert_eq!(route.currency, "gbp");
    }
}
