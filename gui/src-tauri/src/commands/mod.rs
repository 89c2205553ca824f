//! Tauri command handlers

pub mod coin;
pub mod market;

pub use coin::*;
pub use market::*;
