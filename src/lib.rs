//! Coinglyph: browse, search, preview, copy, and save cryptocurrency SVG icons.

mod app;
pub mod catalog;
pub mod config;
pub mod util;

pub use app::CoinglyphApp;
