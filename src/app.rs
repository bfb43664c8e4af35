//! Main egui/eframe application state and UI orchestration.

use crate::catalog::{CatalogSource, CatalogState, FilteredView};
use crate::config::AppConfig;
use arboard::Clipboard;
use egui::{Context, Key};
use std::path::{Path, PathBuf};

mod clipboard;
mod download;
mod loader;
mod toast;
mod ui;
mod ui_state;

use loader::PendingCatalogLoad;
use toast::{ToastKind, Toasts};
use ui_state::{NativeDialog, UiState};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const SEARCH_FIELD_ID: &str = "icon_search";
const DIALOG_BUSY_STATUS: &str = "Close the open file dialog first.";

/// A request raised by a card or the preview, applied after the frame's UI pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconIntent {
    Preview(usize),
    Copy(usize),
    Save(usize),
}

/// Top-level application state for the Coinglyph UI.
pub struct CoinglyphApp {
    config: AppConfig,
    source: CatalogSource,
    catalog: CatalogState,
    view: FilteredView,
    query: String,
    pending_load: Option<PendingCatalogLoad>,
    next_generation: u64,
    clipboard: Option<Clipboard>,
    toasts: Toasts,
    ui: UiState,
    active_dialog: Option<NativeDialog>,
    last_catalog_dir: Option<PathBuf>,
    last_save_dir: Option<PathBuf>,
}

impl CoinglyphApp {
    /// Create the app and start loading the initial catalog.
    ///
    /// `initial_path` wins over the configured catalog; with neither, the bundled icons load.
    pub fn new(config: AppConfig, initial_path: Option<&Path>) -> Self {
        let requested = initial_path.or(config.catalog.as_deref());
        let source = requested
            .and_then(CatalogSource::from_path)
            .unwrap_or(CatalogSource::Builtin);
        let rejected = requested
            .filter(|_| source == CatalogSource::Builtin)
            .map(Path::to_path_buf);
        let toasts = Toasts::new(config.toast.duration(), config.toast.max_visible());
        let mut app = Self {
            config,
            source: CatalogSource::Builtin,
            catalog: CatalogState::Loading,
            view: FilteredView::default(),
            query: String::new(),
            pending_load: None,
            next_generation: 1,
            clipboard: None,
            toasts,
            ui: UiState::default(),
            active_dialog: None,
            last_catalog_dir: None,
            last_save_dir: None,
        };
        app.start_catalog_load(source);
        if let Some(path) = rejected {
            log::warn!("{} is not a folder or .json manifest", path.display());
            app.set_status(format!(
                "{} is not a folder or .json manifest; showing bundled icons.",
                path.display()
            ));
        }
        app
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.ui.last_status = Some(msg.into());
    }

    /// Show a transient notification and mirror it in the status bar.
    fn notify(&mut self, kind: ToastKind, msg: impl Into<String>) {
        let msg = msg.into();
        self.toasts.push(kind, msg.clone());
        self.set_status(msg);
    }

    fn refresh_view(&mut self) {
        self.view
            .refresh(self.catalog.records(), self.catalog.generation(), &self.query);
    }

    fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refresh_view();
        }
    }

    fn apply_intent(&mut self, intent: IconIntent) {
        match intent {
            IconIntent::Preview(index) => {
                if self.catalog.records().get(index).is_some() {
                    self.ui.preview = Some(index);
                }
            }
            IconIntent::Copy(index) => self.copy_icon_markup(index),
            IconIntent::Save(index) => {
                if self.active_dialog.is_some() {
                    self.set_status(DIALOG_BUSY_STATUS);
                    return;
                }
                // The file dialog lives under the modal layer, so the preview must go first.
                self.ui.preview = None;
                self.start_save_icon(index);
            }
        }
    }

    fn handle_hotkeys(&mut self, ctx: &Context) {
        // Ctrl/Cmd + F: focus search
        if ctx.input(|i| i.key_pressed(Key::F) && i.modifiers.command) {
            self.ui.focus_search = true;
        }
        // Ctrl/Cmd + O: open folder, with Shift: open manifest
        let (open_pressed, shift) =
            ctx.input(|i| (i.key_pressed(Key::O) && i.modifiers.command, i.modifiers.shift));
        if open_pressed && self.active_dialog.is_none() {
            if shift {
                self.open_manifest_dialog();
            } else {
                self.open_folder_dialog();
            }
        }
        // F5: reload current catalog
        if ctx.input(|i| i.key_pressed(Key::F5)) && !self.catalog.is_loading() {
            self.reload_catalog();
        }
        // Esc: clear the query (the preview modal handles its own Esc)
        let search_focused = ctx.memory(|m| m.has_focus(egui::Id::new(SEARCH_FIELD_ID)));
        if self.ui.preview.is_none()
            && !search_focused
            && ctx.input(|i| i.key_pressed(Key::Escape))
        {
            self.clear_query();
        }
    }
}

impl eframe::App for CoinglyphApp {
    // Required by eframe 0.34; all rendering happens in `update`, which
    // eframe still calls right before `ui`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_catalog_loader(ctx);
        if self.active_dialog.is_none() {
            self.handle_hotkeys(ctx);
        }
        self.refresh_view();

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        let grid_intent = egui::CentralPanel::default()
            .show(ctx, |ui| self.ui_central(ui))
            .inner;
        let preview_intent = self.ui_preview_modal(ctx);
        for intent in [grid_intent, preview_intent].into_iter().flatten() {
            self.apply_intent(intent);
        }
        self.ui_toasts(ctx);
        self.update_active_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_file_dialog::FileDialog;

    #[test]
    fn save_while_dialog_open_keeps_preview() {
        let mut app = CoinglyphApp::new(AppConfig::default(), None);
        app.ui.preview = Some(0);
        app.active_dialog = Some(NativeDialog::OpenFolder(FileDialog::new()));

        app.apply_intent(IconIntent::Save(0));

        assert_eq!(app.ui.preview, Some(0));
        assert!(matches!(app.active_dialog, Some(NativeDialog::OpenFolder(_))));
        assert_eq!(app.ui.last_status.as_deref(), Some(DIALOG_BUSY_STATUS));
    }

    #[test]
    fn unsupported_start_path_falls_back_to_bundled_icons() {
        let stray = Path::new("/nonexistent/coinglyph/btc.png");
        let app = CoinglyphApp::new(AppConfig::default(), Some(stray));

        assert_eq!(app.source, CatalogSource::Builtin);
        let status = app.ui.last_status.as_deref().unwrap_or_default();
        assert!(status.contains("not a folder or .json manifest"));
    }
}
