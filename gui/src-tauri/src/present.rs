//! Detail screen presentation rows
//!
//! Builders that turn the (possibly absent) coin record into the labeled
//! rows each card renders. Every absent value becomes a placeholder
//! string, so a failed detail fetch produces a complete set of
//! placeholder cards while the chart card renders independently.

use coinx_chart::format::{
    change_color, format_date, format_description, format_number, format_percent_opt,
    format_price, NOT_AVAILABLE, UNLIMITED,
};
use coinx_core::CoinDetail;
use serde::Serialize;

/// One label/value display row
#[derive(Debug, Clone, Serialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
    /// Hex color for percent rows; absent renders in the default color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl InfoRow {
    fn plain(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
            color: None,
        }
    }

    fn percent(label: &str, change: Option<f64>) -> Self {
        Self {
            label: label.to_string(),
            value: format_percent_opt(change),
            color: Some(change_color(change).to_string()),
        }
    }
}

/// Header block above the cards
#[derive(Debug, Clone, Serialize)]
pub struct HeaderCard {
    pub name: String,
    pub symbol: String,
    pub rank: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Everything the detail screen renders outside the chart card
#[derive(Debug, Clone, Serialize)]
pub struct DetailCards {
    pub header: HeaderCard,
    pub price: Vec<InfoRow>,
    pub market: Vec<InfoRow>,
    /// 7d/14d/30d/1y change grid
    pub changes: Vec<InfoRow>,
    pub additional: Vec<InfoRow>,
    pub description: String,
    /// Whether the expand/collapse control should be shown
    pub description_expandable: bool,
    /// Conditional cards: empty when the corresponding block is absent
    pub links: Vec<InfoRow>,
    pub community: Vec<InfoRow>,
    pub developer: Vec<InfoRow>,
}

/// Build the full card set for the current detail slot
pub fn detail_cards(
    detail: Option<&CoinDetail>,
    currency: &str,
    show_full_description: bool,
) -> DetailCards {
    let market = detail.and_then(|d| d.market_data.as_ref());
    let symbol = detail.map(|d| d.display_symbol());

    let header = HeaderCard {
        name: detail
            .map(|d| d.name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        symbol: symbol.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        rank: detail
            .and_then(|d| d.market_cap_rank)
            .map(|rank| format!("Rank #{}", rank))
            .unwrap_or_else(|| format!("Rank #{}", NOT_AVAILABLE)),
        image: detail
            .and_then(|d| d.image.as_ref())
            .and_then(|image| image.small.clone()),
    };

    let price = vec![
        InfoRow::plain(
            "Current Price",
            format_price(market.and_then(|m| m.price_in(currency)), currency),
        ),
        InfoRow::percent(
            "24h Change",
            market.and_then(|m| m.price_change_percentage_24h),
        ),
        InfoRow::plain(
            "24h High",
            format_price(market.and_then(|m| m.high_24h_in(currency)), currency),
        ),
        InfoRow::plain(
            "24h Low",
            format_price(market.and_then(|m| m.low_24h_in(currency)), currency),
        ),
    ];

    let market_rows = vec![
        InfoRow::plain(
            "Market Cap",
            format_price(market.and_then(|m| m.market_cap_in(currency)), currency),
        ),
        InfoRow::plain(
            "24h Volume",
            format_price(market.and_then(|m| m.volume_in(currency)), currency),
        ),
        InfoRow::plain(
            "Circulating Supply",
            with_symbol(
                format_number(market.and_then(|m| m.circulating_supply)),
                symbol.as_deref(),
            ),
        ),
        InfoRow::plain(
            "Max Supply",
            with_symbol(
                market
                    .and_then(|m| m.max_supply)
                    .map(|supply| format_number(Some(supply)))
                    .unwrap_or_else(|| UNLIMITED.to_string()),
                symbol.as_deref(),
            ),
        ),
    ];

    let changes = vec![
        InfoRow::percent("7d", market.and_then(|m| m.price_change_percentage_7d)),
        InfoRow::percent("14d", market.and_then(|m| m.price_change_percentage_14d)),
        InfoRow::percent("30d", market.and_then(|m| m.price_change_percentage_30d)),
        InfoRow::percent("1y", market.and_then(|m| m.price_change_percentage_1y)),
    ];

    let additional = vec![
        InfoRow::plain(
            "Genesis Date",
            format_date(detail.and_then(|d| d.genesis_date.as_deref())),
        ),
        InfoRow::plain(
            "Hashing Algorithm",
            detail
                .and_then(|d| d.hashing_algorithm.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        InfoRow::plain(
            "Block Time",
            detail
                .and_then(|d| d.block_time_in_minutes)
                .map(|minutes| format!("{} minutes", minutes))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
    ];

    let description_text = detail.and_then(|d| d.description_text());
    let description = format_description(description_text, show_full_description);
    let description_expandable = description_text
        .map(|text| coinx_chart::format::strip_html(text).chars().count() > 300)
        .unwrap_or(false);

    DetailCards {
        header,
        price,
        market: market_rows,
        changes,
        additional,
        description,
        description_expandable,
        links: link_rows(detail),
        community: community_rows(detail),
        developer: developer_rows(detail),
    }
}

fn with_symbol(value: String, symbol: Option<&str>) -> String {
    match symbol {
        Some(symbol) if value != NOT_AVAILABLE => format!("{} {}", value, symbol),
        _ => value,
    }
}

fn link_rows(detail: Option<&CoinDetail>) -> Vec<InfoRow> {
    let Some(links) = detail.and_then(|d| d.links.as_ref()) else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    if let Some(url) = links.primary_homepage() {
        rows.push(InfoRow::plain("Website", url.to_string()));
    }
    if let Some(url) = links.primary_explorer() {
        rows.push(InfoRow::plain("Blockchain Explorer", url.to_string()));
    }
    if let Some(url) = links.primary_forum() {
        rows.push(InfoRow::plain("Official Forum", url.to_string()));
    }
    if let Some(url) = links.subreddit_url.as_deref().filter(|u| !u.is_empty()) {
        rows.push(InfoRow::plain("Reddit", url.to_string()));
    }
    if let Some(url) = links.primary_github() {
        rows.push(InfoRow::plain("GitHub", url.to_string()));
    }
    rows
}

fn community_rows(detail: Option<&CoinDetail>) -> Vec<InfoRow> {
    let Some(community) = detail.and_then(|d| d.community_data.as_ref()) else {
        return Vec::new();
    };

    vec![
        InfoRow::plain(
            "Twitter Followers",
            format_number(community.twitter_followers.map(|v| v as f64)),
        ),
        InfoRow::plain(
            "Reddit Subscribers",
            format_number(community.reddit_subscribers.map(|v| v as f64)),
        ),
    ]
}

fn developer_rows(detail: Option<&CoinDetail>) -> Vec<InfoRow> {
    let Some(developer) = detail.and_then(|d| d.developer_data.as_ref()) else {
        return Vec::new();
    };

    vec![
        InfoRow::plain("GitHub Stars", format_number(developer.stars.map(|v| v as f64))),
        InfoRow::plain("GitHub Forks", format_number(developer.forks.map(|v| v as f64))),
        InfoRow::plain(
            "Commits (4w)",
            format_number(developer.commit_count_4_weeks.map(|v| v as f64)),
        ),
    ]
}
