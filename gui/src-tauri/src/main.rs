//! CoinX GUI - Main entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use coinx_gui_lib::{commands, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinx_gui=debug,coinx_networking=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CoinX");

    tauri::Builder::default()
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            // Market screen commands
            commands::load_currencies,
            commands::load_market,
            commands::set_currency,
            commands::set_search,
            commands::market_snapshot,
            commands::select_coin,
            // Detail screen commands
            commands::open_coin,
            commands::set_time_range,
            commands::toggle_description,
            commands::detail_snapshot,
            commands::chart_snapshot,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
