//! CoinX GUI - Tauri application library

pub mod commands;
pub mod detail_screen;
pub mod market_screen;
pub mod present;
mod request;
mod state;

pub use detail_screen::DetailScreen;
pub use market_screen::MarketScreen;
pub use request::{Generation, RequestToken};
pub use state::AppState;
