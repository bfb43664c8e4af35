//! Unicode UI icon constants.
//!
//! Uses a BMP-only "safe" subset for broad font coverage (no emoji fonts needed).

pub const ICON_MENU: &str = "☰";
pub const ICON_SEARCH: &str = "⌕";
pub const ICON_CLEAR: &str = "✖";
pub const ICON_OPEN_FOLDER: &str = "⊞";
pub const ICON_OPEN_MANIFEST: &str = "≣";
pub const ICON_RELOAD: &str = "⟳";
pub const ICON_BUNDLED: &str = "★";
pub const ICON_COPY: &str = "⎘";
pub const ICON_SAVE: &str = "⇩";
pub const ICON_PREVIEW: &str = "⊕";
pub const ICON_OK: &str = "✔";
pub const ICON_ERROR: &str = "⚠";
