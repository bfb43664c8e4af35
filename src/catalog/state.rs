use super::{Catalog, IconRecord};

/// Status of the catalog as seen by the UI.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(String),
}

impl CatalogState {
    /// Loaded records; empty while loading or after a failure.
    pub fn records(&self) -> &[IconRecord] {
        match self {
            Self::Ready(catalog) => catalog.records(),
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    pub const fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Generation of the loaded catalog, `0` when none is loaded.
    pub const fn generation(&self) -> u64 {
        match self {
            Self::Ready(catalog) => catalog.generation(),
            Self::Loading | Self::Failed(_) => 0,
        }
    }
}
