//! Chart data preparation
//!
//! Turns a raw price series into what the line-chart primitive needs: a
//! down-sampled point set, axis bounds, marker-hiding indices, date labels,
//! and the headline summary figures. No side effects and no error paths —
//! an in-flight fetch or an absent series degrades to a Loading or
//! Unavailable view instead of failing.

use coinx_core::PricePoint;
use serde::{Deserialize, Serialize};

use crate::labels::{self, DateGranularity};

/// Down-sampling keeps at most this many points
const MAX_POINTS: usize = 60;

/// What the chart card should render
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartView {
    /// A series fetch is in flight
    Loading,
    /// No series to draw
    Unavailable,
    Ready(ChartData),
}

/// Fully prepared chart render data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    /// Down-sampled points, in original order
    pub points: Vec<PricePoint>,
    /// One date label per down-sampled point
    pub labels: Vec<String>,
    /// Indices into `points` whose markers are suppressed; the connecting
    /// line still passes through them
    pub hidden_points: Vec<usize>,
    pub bounds: AxisBounds,
    pub summary: ChartSummary,
}

/// Vertical axis range. A fixed 1% padding band around the observed
/// extremes; never zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

/// Headline figures shown above the chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSummary {
    pub currency: String,
    /// Price at the last sample
    pub current: f64,
    /// Percent change from the first to the last sample
    pub change_pct: f64,
    pub trend: Trend,
}

/// Sign of the first-to-last move; a flat series counts as positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Positive,
    Negative,
}

/// Prepare a price series for rendering
pub fn prepare(series: &[PricePoint], currency: &str, loading: bool) -> ChartView {
    if loading {
        return ChartView::Loading;
    }
    if series.is_empty() {
        return ChartView::Unavailable;
    }

    let points = down_sample(series);
    let granularity = DateGranularity::for_len(series.len());
    let point_labels = points
        .iter()
        .map(|p| labels::format_timestamp(p.timestamp_ms, granularity))
        .collect();
    let hidden_points = hidden_point_indices(points.len(), marker_step(series.len()));

    ChartView::Ready(ChartData {
        bounds: axis_bounds(series),
        summary: ChartSummary::from_series(series, currency),
        labels: point_labels,
        hidden_points,
        points,
    })
}

/// Keep every k-th point so at most `MAX_POINTS` survive.
///
/// Each kept point is an original sample (nearest preceding, no
/// interpolation), order preserved, first point always retained.
pub fn down_sample(series: &[PricePoint]) -> Vec<PricePoint> {
    if series.len() <= MAX_POINTS {
        return series.to_vec();
    }
    let step = series.len().div_ceil(MAX_POINTS);
    series.iter().copied().step_by(step).collect()
}

/// Axis bounds with the fixed 1% padding band
pub fn axis_bounds(series: &[PricePoint]) -> AxisBounds {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in series {
        min = min.min(point.price);
        max = max.max(point.price);
    }
    AxisBounds {
        min: min * 0.99,
        max: max * 1.01,
    }
}

/// Marker step for a series of the given original length: denser series
/// show proportionally fewer markers
pub fn marker_step(original_len: usize) -> usize {
    if original_len > 200 {
        20
    } else if original_len > 100 {
        10
    } else if original_len > 50 {
        5
    } else {
        3
    }
}

/// Indices of down-sampled points whose markers are hidden: everything
/// except every `step`-th point
pub fn hidden_point_indices(sampled_len: usize, step: usize) -> Vec<usize> {
    (0..sampled_len).filter(|i| i % step != 0).collect()
}

impl ChartSummary {
    fn from_series(series: &[PricePoint], currency: &str) -> Self {
        let first = series[0].price;
        let last = series[series.len() - 1].price;
        // A series that opens at zero reads as flat rather than infinite
        let change_pct = if first == 0.0 {
            0.0
        } else {
            (last - first) / first * 100.0
        };
        let trend = if last >= first {
            Trend::Positive
        } else {
            Trend::Negative
        };

        Self {
            currency: currency.to_string(),
            current: last,
            change_pct,
            trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PricePoint::new(1_700_000_000_000 + i as i64 * 3_600_000, p))
            .collect()
    }

    fn flat_series(len: usize) -> Vec<PricePoint> {
        series(&vec![100.0; len])
    }

    #[test]
    fn short_series_is_not_down_sampled() {
        for len in [1, 30, 60] {
            let s = flat_series(len);
            assert_eq!(down_sample(&s), s, "len {}", len);
        }
    }

    #[test]
    fn long_series_keeps_ceil_of_len_over_step_points() {
        for len in [61, 100, 180, 365, 1000] {
            let s = flat_series(len);
            let step = len.div_ceil(60);
            let sampled = down_sample(&s);
            assert_eq!(sampled.len(), len.div_ceil(step), "len {}", len);
            assert!(sampled.len() <= 60, "len {}", len);
            assert_eq!(sampled[0], s[0], "first point retained, len {}", len);
        }
    }

    #[test]
    fn down_sampling_preserves_order() {
        let prices: Vec<f64> = (0..250).map(|i| i as f64).collect();
        let sampled = down_sample(&series(&prices));
        for pair in sampled.windows(2) {
            assert!(pair[0].timestamp_ms < pair[1].timestamp_ms);
        }
    }

    #[test]
    fn axis_bounds_pad_one_percent() {
        let s = series(&[200.0, 100.0, 150.0]);
        let bounds = axis_bounds(&s);
        assert_eq!(bounds.min, 99.0);
        assert_eq!(bounds.max, 202.0);
        assert!(bounds.min <= 100.0 && 200.0 <= bounds.max);
    }

    #[test]
    fn marker_step_boundaries() {
        assert_eq!(marker_step(50), 3);
        assert_eq!(marker_step(51), 5);
        assert_eq!(marker_step(100), 5);
        assert_eq!(marker_step(101), 10);
        assert_eq!(marker_step(200), 10);
        assert_eq!(marker_step(201), 20);
    }

    #[test]
    fn hidden_points_skip_every_nth() {
        assert_eq!(hidden_point_indices(7, 3), vec![1, 2, 4, 5]);
        assert!(hidden_point_indices(5, 1).is_empty());
    }

    #[test]
    fn loading_flag_short_circuits() {
        let s = flat_series(10);
        assert!(matches!(prepare(&s, "usd", true), ChartView::Loading));
    }

    #[test]
    fn empty_series_is_unavailable() {
        assert!(matches!(prepare(&[], "usd", false), ChartView::Unavailable));
    }

    #[test]
    fn summary_change_is_first_to_last() {
        let s = series(&[100.0, 180.0, 110.0]);
        let ChartView::Ready(data) = prepare(&s, "eur", false) else {
            panic!("expected ready chart");
        };
        assert_eq!(data.summary.current, 110.0);
        assert!((data.summary.change_pct - 10.0).abs() < 1e-9);
        assert_eq!(data.summary.trend, Trend::Positive);
        assert_eq!(data.summary.currency, "eur");
    }

    #[test]
    fn falling_series_has_negative_trend() {
        let s = series(&[100.0, 90.0]);
        let ChartView::Ready(data) = prepare(&s, "usd", false) else {
            panic!("expected ready chart");
        };
        assert_eq!(data.summary.trend, Trend::Negative);
        assert!(data.summary.change_pct < 0.0);
    }

    #[test]
    fn flat_series_counts_as_positive() {
        let s = flat_series(2);
        let ChartView::Ready(data) = prepare(&s, "usd", false) else {
            panic!("expected ready chart");
        };
        assert_eq!(data.summary.trend, Trend::Positive);
        assert_eq!(data.summary.change_pct, 0.0);
    }

    #[test]
    fn labels_align_with_points() {
        let s = flat_series(120);
        let ChartView::Ready(data) = prepare(&s, "usd", false) else {
            panic!("expected ready chart");
        };
        assert_eq!(data.labels.len(), data.points.len());
        assert!(data.hidden_points.iter().all(|&i| i < data.points.len()));
    }
}
