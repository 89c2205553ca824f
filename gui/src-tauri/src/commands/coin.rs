//! Detail screen commands for Tauri

use crate::detail_screen::{DetailScreen, LoadState};
use crate::present::{detail_cards, DetailCards};
use crate::AppState;
use coinx_chart::ChartView;
use coinx_core::{CoinRoute, TimeRange, DEFAULT_CURRENCY};
use serde::Serialize;
use tauri::State;
use tracing::debug;

/// Snapshot of the detail screen for rendering
#[derive(Debug, Clone, Serialize)]
pub struct DetailSnapshot {
    pub cards: DetailCards,
    pub chart: ChartView,
    pub time_range: TimeRange,
    pub detail_state: LoadState,
    pub chart_state: LoadState,
    pub show_full_description: bool,
}

fn snapshot(screen: &DetailScreen) -> DetailSnapshot {
    let currency = screen
        .route()
        .map(|route| route.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    DetailSnapshot {
        cards: detail_cards(screen.detail(), &currency, screen.show_full_description()),
        chart: screen.chart_view(),
        time_range: screen.time_range(),
        detail_state: screen.detail_state(),
        chart_state: screen.chart_state(),
        show_full_description: screen.show_full_description(),
    }
}

/// Issue the detail + chart fetch pair for the current parameters and
/// apply whatever comes back. The two fetches run concurrently and are
/// applied independently; stale completions are dropped inside the
/// screen's apply methods.
async fn refresh(state: &AppState) -> DetailSnapshot {
    let pending = {
        let mut screen = state.detail.write().await;
        screen.begin_loads()
    };

    let Some(pending) = pending else {
        let screen = state.detail.read().await;
        return snapshot(&screen);
    };

    debug!(
        "Refreshing {} ({}, {} days)",
        pending.route.id, pending.route.currency, pending.days
    );

    let (detail, chart) = tokio::join!(
        state.client.coin_detail(&pending.route.id),
        state
            .client
            .market_chart(&pending.route.id, &pending.route.currency, pending.days),
    );

    let mut screen = state.detail.write().await;
    screen.apply_detail(pending.token, detail);
    screen.apply_chart(pending.token, chart);
    snapshot(&screen)
}

/// Open a coin from the list screen and load both slots
#[tauri::command]
pub async fn open_coin(
    route: CoinRoute,
    state: State<'_, AppState>,
) -> Result<DetailSnapshot, String> {
    {
        let mut screen = state.detail.write().await;
        screen.open(route);
    }
    Ok(refresh(&state).await)
}

/// Switch the chart window; both slots re-fetch when it actually changed
#[tauri::command]
pub async fn set_time_range(
    range: TimeRange,
    state: State<'_, AppState>,
) -> Result<DetailSnapshot, String> {
    let changed = {
        let mut screen = state.detail.write().await;
        screen.set_time_range(range)
    };

    if changed {
        Ok(refresh(&state).await)
    } else {
        let screen = state.detail.read().await;
        Ok(snapshot(&screen))
    }
}

/// Flip the description between preview and full text
#[tauri::command]
pub async fn toggle_description(state: State<'_, AppState>) -> Result<DetailSnapshot, String> {
    let mut screen = state.detail.write().await;
    screen.toggle_description();
    Ok(snapshot(&screen))
}

/// Current screen state without any fetching
#[tauri::command]
pub async fn detail_snapshot(state: State<'_, AppState>) -> Result<DetailSnapshot, String> {
    let screen = state.detail.read().await;
    Ok(snapshot(&screen))
}

/// Just the prepared chart for the current series and load state
#[tauri::command]
pub async fn chart_snapshot(state: State<'_, AppState>) -> Result<ChartView, String> {
    let screen = state.detail.read().await;
    Ok(screen.chart_view())
}
