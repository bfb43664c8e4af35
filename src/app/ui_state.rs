use crate::catalog::IconRecord;
use egui_file_dialog::FileDialog;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct UiState {
    /// Catalog index of the icon shown in the preview modal.
    pub(super) preview: Option<usize>,
    pub(super) focus_search: bool,
    pub(super) last_status: Option<String>,
}

/// Everything needed to write an icon once the user picks a path.
///
/// Detached from the catalog so a reload while the dialog is open cannot invalidate it.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub display_name: String,
    pub file_name: String,
    pub markup: Arc<str>,
}

impl SaveRequest {
    pub fn from_record(record: &IconRecord) -> Self {
        Self {
            display_name: record.display_name.clone(),
            file_name: record.file_name.clone(),
            markup: Arc::clone(&record.markup),
        }
    }
}

#[derive(Debug)]
pub enum NativeDialog {
    OpenFolder(FileDialog),
    OpenManifest(FileDialog),
    SaveIcon {
        dialog: FileDialog,
        request: SaveRequest,
    },
}
