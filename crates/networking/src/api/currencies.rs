//! Supported display-currency discovery with a fixed fallback
//!
//! The picker's currency set is read from the key set of bitcoin's
//! market-cap quote map. A transport failure, a decode failure, or an
//! empty key set all degrade to the same five-currency fallback — the
//! picker is never left empty and the caller never sees an error.

use crate::CoinGeckoClient;
use coinx_core::{CoinDetail, CurrencySet};
use tracing::{debug, warn};

/// Coin whose quote map is used for currency discovery
const REFERENCE_COIN: &str = "bitcoin";

/// Resolve the set of display currencies offered by the picker
pub async fn supported_currencies(client: &CoinGeckoClient) -> CurrencySet {
    let detail = match client.coin_detail(REFERENCE_COIN).await {
        Ok(detail) => detail,
        Err(e) => {
            warn!("Currency discovery failed, using defaults: {}", e);
            return CurrencySet::fallback();
        }
    };

    match discovered_from(detail) {
        Some(set) => {
            debug!("Discovered {} display currencies", set.codes.len());
            set
        }
        None => {
            warn!("Currency discovery returned no quote currencies, using defaults");
            CurrencySet::fallback()
        }
    }
}

/// Extract a discovered currency set from a coin record, if it has one
fn discovered_from(detail: CoinDetail) -> Option<CurrencySet> {
    let codes = detail
        .market_data
        .map(|market| market.quoted_currencies())
        .unwrap_or_default();

    if codes.is_empty() {
        None
    } else {
        Some(CurrencySet::discovered(codes))
    }
}
