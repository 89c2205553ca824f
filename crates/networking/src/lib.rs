//! CoinX Networking - HTTP client and API wrappers for the market-data API

pub mod api;
pub mod http;

pub use http::CoinGeckoClient;
