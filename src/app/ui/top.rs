use super::super::{CoinglyphApp, SEARCH_FIELD_ID};
use super::icons;
use crate::catalog::{CatalogSource, CatalogState};
use egui::{Color32, RichText};

const SEARCH_FIELD_WIDTH: f32 = 240.0;

impl CoinglyphApp {
    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Use egui's built-in theme toggle so icon matches current mode.
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            self.ui_file_menu(ui);
            ui.separator();

            self.ui_search_box(ui);
            ui.separator();

            self.ui_result_count(ui);
        });
    }

    fn ui_file_menu(&mut self, ui: &mut egui::Ui) {
        let can_open = self.active_dialog.is_none();
        let loading = self.catalog.is_loading();
        ui.menu_button(format!("{} File", icons::ICON_MENU), |ui| {
            if ui
                .add_enabled(
                    can_open,
                    egui::Button::new(format!("{} Open folder…", icons::ICON_OPEN_FOLDER))
                        .shortcut_text("Ctrl+O"),
                )
                .on_hover_text("Open a folder of SVG icons (Ctrl+O). You can also drop it here.")
                .clicked()
            {
                self.open_folder_dialog();
                ui.close();
            }

            if ui
                .add_enabled(
                    can_open,
                    egui::Button::new(format!("{} Open manifest…", icons::ICON_OPEN_MANIFEST))
                        .shortcut_text("Ctrl+Shift+O"),
                )
                .on_hover_text("Open a JSON manifest describing the icons (Ctrl+Shift+O)")
                .clicked()
            {
                self.open_manifest_dialog();
                ui.close();
            }

            ui.separator();

            if ui
                .add_enabled(
                    !loading,
                    egui::Button::new(format!("{} Reload", icons::ICON_RELOAD)).shortcut_text("F5"),
                )
                .on_hover_text("Load the current catalog again from disk (F5)")
                .clicked()
            {
                self.reload_catalog();
                ui.close();
            }

            if ui
                .add_enabled(
                    !loading && self.source != CatalogSource::Builtin,
                    egui::Button::new(format!("{} Bundled icons", icons::ICON_BUNDLED)),
                )
                .on_hover_text("Switch back to the icons shipped with Coinglyph")
                .clicked()
            {
                self.start_catalog_load(CatalogSource::Builtin);
                ui.close();
            }
        });
    }

    fn ui_search_box(&mut self, ui: &mut egui::Ui) {
        ui.label(icons::ICON_SEARCH);
        let response = ui
            .add(
                egui::TextEdit::singleline(&mut self.query)
                    .id(egui::Id::new(SEARCH_FIELD_ID))
                    .hint_text("Search name or symbol…")
                    .desired_width(SEARCH_FIELD_WIDTH),
            )
            .on_hover_text("Filter icons by name, label, or ticker (Ctrl+F)");
        if std::mem::take(&mut self.ui.focus_search) {
            response.request_focus();
        }
        if response.changed() {
            self.refresh_view();
        }

        if !self.query.is_empty()
            && ui
                .small_button(icons::ICON_CLEAR)
                .on_hover_text("Clear search (Esc)")
                .clicked()
        {
            self.clear_query();
        }
    }

    fn ui_result_count(&self, ui: &mut egui::Ui) {
        let text = match &self.catalog {
            CatalogState::Ready(catalog) if self.query.trim().is_empty() => {
                format!("{} icons", catalog.len())
            }
            CatalogState::Ready(catalog) => {
                format!("Showing {} of {} icons", self.view.len(), catalog.len())
            }
            CatalogState::Loading => "Loading…".to_string(),
            CatalogState::Failed(_) => "No catalog".to_string(),
        };
        ui.label(RichText::new(text).color(Color32::from_gray(170)));
    }
}
