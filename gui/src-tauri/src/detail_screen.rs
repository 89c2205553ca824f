//! Detail screen state machine
//!
//! The coin record and the chart series load independently: both fetches
//! are issued together whenever (coin id, currency, time range) changes,
//! each slot tracks its own load state, and the screen always renders
//! with whatever partial data it has. Late completions for a superseded
//! parameter tuple are discarded by token comparison.

use coinx_chart::ChartView;
use coinx_core::{
    CoinDetail, CoinRoute, Error, MarketChartResponse, PricePoint, TimeRange, DEFAULT_CURRENCY,
};
use serde::Serialize;
use tracing::{debug, error};

use crate::request::{Generation, RequestToken};

/// Load state of one independently fetched slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Parameters for the pair of fetches issued after an open or a
/// parameter change
#[derive(Debug, Clone)]
pub struct PendingLoads {
    pub token: RequestToken,
    pub route: CoinRoute,
    pub days: u32,
}

pub struct DetailScreen {
    route: Option<CoinRoute>,
    time_range: TimeRange,
    detail: Option<CoinDetail>,
    series: Vec<PricePoint>,
    detail_state: LoadState,
    chart_state: LoadState,
    show_full_description: bool,
    generation: Generation,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self {
            route: None,
            time_range: TimeRange::default(),
            detail: None,
            series: Vec::new(),
            detail_state: LoadState::Idle,
            chart_state: LoadState::Idle,
            show_full_description: false,
            generation: Generation::default(),
        }
    }

    pub fn route(&self) -> Option<&CoinRoute> {
        self.route.as_ref()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn detail(&self) -> Option<&CoinDetail> {
        self.detail.as_ref()
    }

    pub fn detail_state(&self) -> LoadState {
        self.detail_state
    }

    pub fn chart_state(&self) -> LoadState {
        self.chart_state
    }

    pub fn show_full_description(&self) -> bool {
        self.show_full_description
    }

    /// Open a coin from the list screen. Selection state resets as if the
    /// screen were freshly mounted; outstanding fetches become stale.
    pub fn open(&mut self, route: CoinRoute) {
        debug!("Opening coin {} in {}", route.id, route.currency);
        self.route = Some(route);
        self.time_range = TimeRange::default();
        self.show_full_description = false;
        self.detail = None;
        self.series.clear();
        self.detail_state = LoadState::Idle;
        self.chart_state = LoadState::Idle;
        self.generation.bump();
    }

    /// Switch the chart window. Returns false when unchanged (no
    /// re-fetch); otherwise both slots reload.
    pub fn set_time_range(&mut self, range: TimeRange) -> bool {
        if range == self.time_range {
            return false;
        }
        self.time_range = range;
        self.generation.bump();
        true
    }

    /// Start the detail + chart fetch pair, if a coin is open
    pub fn begin_loads(&mut self) -> Option<PendingLoads> {
        let route = self.route.clone()?;
        self.detail_state = LoadState::Loading;
        self.chart_state = LoadState::Loading;
        Some(PendingLoads {
            token: self.generation.token(),
            days: self.time_range.days(),
            route,
        })
    }

    /// Apply a completed detail fetch
    pub fn apply_detail(&mut self, token: RequestToken, result: Result<CoinDetail, Error>) {
        if !self.generation.accepts(token) {
            debug!("Discarding stale detail response");
            return;
        }
        match result {
            Ok(detail) => {
                debug!("Coin detail applied: {}", detail.id);
                self.detail = Some(detail);
                self.detail_state = LoadState::Ready;
            }
            Err(e) => {
                error!("Coin detail fetch failed: {}", e);
                self.detail_state = LoadState::Failed;
            }
        }
    }

    /// Apply a completed chart fetch. A response without a price series
    /// stores an empty series (renders as "unavailable"); a failure keeps
    /// whatever series was on screen.
    pub fn apply_chart(&mut self, token: RequestToken, result: Result<MarketChartResponse, Error>) {
        if !self.generation.accepts(token) {
            debug!("Discarding stale chart response");
            return;
        }
        match result {
            Ok(chart) => {
                debug!("Chart series applied: {} points", chart.prices.len());
                self.series = chart.prices;
                self.chart_state = LoadState::Ready;
            }
            Err(e) => {
                error!("Chart fetch failed: {}", e);
                self.chart_state = LoadState::Failed;
            }
        }
    }

    /// Flip the description between preview and full text
    pub fn toggle_description(&mut self) -> bool {
        self.show_full_description = !self.show_full_description;
        self.show_full_description
    }

    /// Prepared chart for the current series and load state
    pub fn chart_view(&self) -> ChartView {
        let currency = self
            .route
            .as_ref()
            .map(|r| r.currency.as_str())
            .unwrap_or(DEFAULT_CURRENCY);
        coinx_chart::prepare(&self.series, currency, self.chart_state == LoadState::Loading)
    }
}

impl Default for DetailScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinx_chart::Trend;

    fn route() -> CoinRoute {
        CoinRoute::new("bitcoin", "usd")
    }

    fn detail_fixture() -> CoinDetail {
        serde_json::from_str(
            r#"{
                "id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
                "market_data": { "current_price": { "usd": 67412.0 } }
            }"#,
        )
        .unwrap()
    }

    fn chart_fixture(prices: &[f64]) -> MarketChartResponse {
        MarketChartResponse {
            prices: prices
                .iter()
                .enumerate()
                .map(|(i, &p)| PricePoint::new(1_700_000_000_000 + i as i64 * 3_600_000, p))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn open_issues_both_loads_with_default_range() {
        let mut screen = DetailScreen::new();
        assert!(screen.begin_loads().is_none());

        screen.open(route());
        let pending = screen.begin_loads().unwrap();
        assert_eq!(pending.route, route());
        assert_eq!(pending.days, 7);
        assert_eq!(screen.detail_state(), LoadState::Loading);
        assert_eq!(screen.chart_state(), LoadState::Loading);
    }

    #[test]
    fn detail_failure_still_renders_chart() {
        let mut screen = DetailScreen::new();
        screen.open(route());
        let pending = screen.begin_loads().unwrap();

        screen.apply_detail(pending.token, Err(Error::NetworkError("down".to_string())));
        screen.apply_chart(pending.token, Ok(chart_fixture(&[100.0, 110.0])));

        assert_eq!(screen.detail_state(), LoadState::Failed);
        assert!(screen.detail().is_none());
        let ChartView::Ready(data) = screen.chart_view() else {
            panic!("chart should render despite the detail failure");
        };
        assert_eq!(data.summary.trend, Trend::Positive);
    }

    #[test]
    fn chart_failure_still_renders_detail() {
        let mut screen = DetailScreen::new();
        screen.open(route());
        let pending = screen.begin_loads().unwrap();

        screen.apply_detail(pending.token, Ok(detail_fixture()));
        screen.apply_chart(pending.token, Err(Error::RateLimited));

        assert_eq!(screen.detail_state(), LoadState::Ready);
        assert_eq!(screen.chart_state(), LoadState::Failed);
        assert!(screen.detail().is_some());
        assert!(matches!(screen.chart_view(), ChartView::Unavailable));
    }

    #[test]
    fn stale_chart_response_is_discarded() {
        let mut screen = DetailScreen::new();
        screen.open(route());
        let stale = screen.begin_loads().unwrap();

        // User switches range before the 7-day series arrives
        assert!(screen.set_time_range(TimeRange::Year));
        let fresh = screen.begin_loads().unwrap();
        assert_eq!(fresh.days, 365);

        screen.apply_chart(stale.token, Ok(chart_fixture(&[1.0, 2.0, 3.0])));
        assert_eq!(screen.chart_state(), LoadState::Loading);
        assert!(matches!(screen.chart_view(), ChartView::Loading));

        screen.apply_chart(fresh.token, Ok(chart_fixture(&[5.0, 6.0])));
        assert_eq!(screen.chart_state(), LoadState::Ready);
        let ChartView::Ready(data) = screen.chart_view() else {
            panic!("expected ready chart");
        };
        assert_eq!(data.points.len(), 2);
    }

    #[test]
    fn unchanged_time_range_needs_no_refetch() {
        let mut screen = DetailScreen::new();
        screen.open(route());
        assert!(!screen.set_time_range(TimeRange::Week));
        assert!(screen.set_time_range(TimeRange::Day));
    }

    #[test]
    fn reopening_resets_selection_state() {
        let mut screen = DetailScreen::new();
        screen.open(route());
        screen.set_time_range(TimeRange::Year);
        screen.toggle_description();

        screen.open(CoinRoute::new("ethereum", "eur"));
        assert_eq!(screen.time_range(), TimeRange::Week);
        assert!(!screen.show_full_description());
        assert!(screen.detail().is_none());
        assert!(matches!(screen.chart_view(), ChartView::Unavailable));
    }

    #[test]
    fn empty_series_renders_unavailable_after_load() {
        let mut screen = DetailScreen::new();
        screen.open(route());
        let pending = screen.begin_loads().unwrap();
        screen.apply_chart(pending.token, Ok(MarketChartResponse::default()));
        assert_eq!(screen.chart_state(), LoadState::Ready);
        assert!(matches!(screen.chart_view(), ChartView::Unavailable));
    }
}
