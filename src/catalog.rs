mod builtin;
mod filter;
mod load;
mod record;
mod state;

pub use filter::{FilteredView, filter_icons, normalize_query, record_matches};
pub use load::{Catalog, CatalogSource, MANIFEST_FILE_NAME, load_catalog, parse_svg_size};
pub use record::{IconRecord, derive_display_name, parse_hex_color};
pub use state::CatalogState;

#[cfg(test)]
mod tests;
