//! Market screen commands for Tauri

use crate::market_screen::MarketScreen;
use crate::AppState;
use coinx_core::{CoinRoute, CoinSummary, CurrencySet};
use coinx_networking::api;
use serde::Serialize;
use tauri::State;
use tracing::debug;

/// Snapshot of the market screen for rendering
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    /// Rows matching the live search text
    pub coins: Vec<CoinSummary>,
    pub currency: String,
    pub search: String,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies: Option<CurrencySet>,
}

fn snapshot(screen: &MarketScreen) -> MarketSnapshot {
    MarketSnapshot {
        coins: screen.filtered_coins().into_iter().cloned().collect(),
        currency: screen.currency().to_string(),
        search: screen.search().to_string(),
        loading: screen.is_loading(),
        currencies: screen.currencies().cloned(),
    }
}

/// Resolve the picker's currency set (discovered, or the fixed fallback).
/// Called once on mount; currency changes never re-run discovery.
#[tauri::command]
pub async fn load_currencies(state: State<'_, AppState>) -> Result<CurrencySet, String> {
    let set = api::supported_currencies(&state.client).await;
    let mut market = state.market.write().await;
    market.set_currencies(set.clone());
    Ok(set)
}

/// Fetch the market list for the currently selected currency
#[tauri::command]
pub async fn load_market(state: State<'_, AppState>) -> Result<MarketSnapshot, String> {
    let (token, currency) = {
        let mut market = state.market.write().await;
        market.begin_load()
    };

    debug!("Loading market list for {}", currency);
    let result = state.client.markets(&currency).await;

    let mut market = state.market.write().await;
    market.apply_market(token, result);
    Ok(snapshot(&market))
}

/// Switch the display currency and re-fetch the market list
/// (the currency set itself is not re-fetched)
#[tauri::command]
pub async fn set_currency(
    currency: String,
    state: State<'_, AppState>,
) -> Result<MarketSnapshot, String> {
    let changed = {
        let mut market = state.market.write().await;
        market.set_currency(&currency)
    };

    if changed {
        load_market(state).await
    } else {
        let market = state.market.read().await;
        Ok(snapshot(&market))
    }
}

/// Update the search text; the filtered rows come back immediately
#[tauri::command]
pub async fn set_search(
    text: String,
    state: State<'_, AppState>,
) -> Result<MarketSnapshot, String> {
    let mut market = state.market.write().await;
    market.set_search(&text);
    Ok(snapshot(&market))
}

/// Current screen state without any fetching
#[tauri::command]
pub async fn market_snapshot(state: State<'_, AppState>) -> Result<MarketSnapshot, String> {
    let market = state.market.read().await;
    Ok(snapshot(&market))
}

/// Navigation handoff for a tapped row: the (id, currency) pair the
/// detail screen opens with, forwarded unchanged
#[tauri::command]
pub async fn select_coin(id: String, state: State<'_, AppState>) -> Result<CoinRoute, String> {
    let market = state.market.read().await;
    let route = market.route_for(&id);
    debug!("Selected {} in {}", route.id, route.currency);
    Ok(route)
}
