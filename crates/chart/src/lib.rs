//! CoinX Chart - chart data preparation and display formatting
//!
//! Everything here is a pure transform over decoded API data; the Tauri
//! frontend renders the output without further computation.

pub mod format;
pub mod labels;
pub mod prepare;

pub use labels::DateGranularity;
pub use prepare::{prepare, AxisBounds, ChartData, ChartSummary, ChartView, Trend};
