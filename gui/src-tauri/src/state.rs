//! Application state management

use std::sync::Arc;

use coinx_networking::CoinGeckoClient;
use tokio::sync::RwLock;

use crate::detail_screen::DetailScreen;
use crate::market_screen::MarketScreen;

/// Global application state shared across Tauri commands
///
/// One HTTP client for the whole app; each screen owns its state machine
/// behind a lock. Screens share nothing beyond the route handoff at
/// navigation time.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<CoinGeckoClient>,
    pub market: Arc<RwLock<MarketScreen>>,
    pub detail: Arc<RwLock<DetailScreen>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            client: Arc::new(CoinGeckoClient::new()),
            market: Arc::new(RwLock::new(MarketScreen::new())),
            detail: Arc::new(RwLock::new(DetailScreen::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
