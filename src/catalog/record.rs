use std::path::PathBuf;
use std::sync::Arc;

/// One catalog entry: a cryptocurrency icon and its SVG markup.
///
/// Records are built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRecord {
    /// Unique identifier within a catalog (lower-case slug).
    pub name: String,
    pub display_name: String,
    /// Ticker symbol, when known.
    pub symbol: Option<String>,
    /// Location of the asset, relative to the catalog root when possible.
    pub path: PathBuf,
    /// File name offered when saving the icon.
    pub file_name: String,
    pub markup: Arc<str>,
    pub color: Option<[u8; 3]>,
    /// Width and height declared by the SVG document.
    pub intrinsic_size: [f32; 2],
}

impl IconRecord {
    pub fn byte_len(&self) -> usize {
        self.markup.len()
    }

    /// Markup as shared bytes for the image loaders (no copy).
    pub fn markup_bytes(&self) -> Arc<[u8]> {
        Arc::from(Arc::clone(&self.markup))
    }
}

/// Turn a slug such as `bitcoin-cash` into `Bitcoin Cash`.
pub fn derive_display_name(slug: &str) -> String {
    slug.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse `#RRGGBB` (leading `#` optional).
pub fn parse_hex_color(text: &str) -> Option<[u8; 3]> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Normalize an optional ticker: trimmed, upper-cased, empty treated as absent.
pub fn normalize_symbol(symbol: Option<&str>) -> Option<String> {
    symbol
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
}
