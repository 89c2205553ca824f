//! Data models for CoinGecko entities

mod chart;
mod coin;
mod detail;

pub use chart::*;
pub use coin::*;
pub use detail::*;
