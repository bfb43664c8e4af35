use super::super::{CoinglyphApp, NativeDialog};
use crate::catalog::CatalogSource;
use egui_file_dialog::{DialogState, FileDialog};
use std::path::Path;

impl CoinglyphApp {
    pub(crate) fn open_folder_dialog(&mut self) {
        let mut dialog = FileDialog::new().title("Open icon folder");
        if let Some(dir) = self.last_catalog_dir.as_deref() {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog.pick_directory();
        self.active_dialog = Some(NativeDialog::OpenFolder(dialog));
    }

    pub(crate) fn open_manifest_dialog(&mut self) {
        let mut dialog = FileDialog::new()
            .title("Open icon manifest")
            .add_file_filter_extensions("Icon manifest", vec!["json"])
            .default_file_filter("Icon manifest");
        if let Some(dir) = self.last_catalog_dir.as_deref() {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog.pick_file();
        self.active_dialog = Some(NativeDialog::OpenManifest(dialog));
    }

    pub(crate) fn make_save_dialog(
        title: &str,
        default_name: &str,
        extensions: &[&str],
        initial_dir: Option<&Path>,
    ) -> FileDialog {
        let mut dialog = FileDialog::new()
            .title(title)
            .default_file_name(default_name);
        let mut first_label: Option<String> = None;
        for ext in extensions {
            let label = format!("*.{ext}");
            if first_label.is_none() {
                first_label = Some(label.clone());
            }
            dialog = dialog.add_save_extension(&label, ext);
        }
        if let Some(label) = first_label.as_deref() {
            dialog = dialog.default_save_extension(label);
        }
        if let Some(dir) = initial_dir {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog
    }

    /// Drive the open dialog, if any, and act on its result.
    pub(crate) fn update_active_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut active) = self.active_dialog.take() else {
            return;
        };
        let dialog = match &mut active {
            NativeDialog::OpenFolder(dialog) | NativeDialog::OpenManifest(dialog) => dialog,
            NativeDialog::SaveIcon { dialog, .. } => dialog,
        };
        dialog.update(ctx);
        let picked = dialog.take_picked();
        let cancelled = matches!(dialog.state(), DialogState::Cancelled);
        let closed = matches!(dialog.state(), DialogState::Closed);

        if let Some(path) = picked {
            match active {
                NativeDialog::OpenFolder(_) => {
                    self.start_catalog_load(CatalogSource::Directory(path));
                }
                NativeDialog::OpenManifest(_) => {
                    self.start_catalog_load(CatalogSource::Manifest(path));
                }
                NativeDialog::SaveIcon { request, .. } => {
                    self.finish_save_icon(&path, &request);
                }
            }
            return;
        }

        if cancelled {
            let msg = match active {
                NativeDialog::OpenFolder(_) | NativeDialog::OpenManifest(_) => "Open canceled.",
                NativeDialog::SaveIcon { .. } => "Save canceled.",
            };
            self.set_status(msg);
        } else if !closed {
            self.active_dialog = Some(active);
        }
    }
}
