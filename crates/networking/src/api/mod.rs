//! High-level API wrappers around the raw HTTP client
//!
//! These add the policy the raw endpoints don't carry, such as the
//! fallback behavior for display-currency discovery.

mod currencies;

pub use currencies::*;
