mod client;

pub use client::CoinGeckoClient;
