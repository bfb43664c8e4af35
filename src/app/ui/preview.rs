use super::super::{CoinglyphApp, IconIntent};
use super::common::{accent_color, icon_image};
use super::icons;
use crate::util::{format_dimensions, human_readable_bytes, usize_to_u64};
use egui::{Color32, RichText, vec2};

impl CoinglyphApp {
    /// Modal with a large rendering of the selected icon and its details.
    pub(crate) fn ui_preview_modal(&mut self, ctx: &egui::Context) -> Option<IconIntent> {
        let index = self.ui.preview?;
        let Some(record) = self.catalog.records().get(index) else {
            self.ui.preview = None;
            return None;
        };
        let generation = self.catalog.generation();
        let size = self.config.preview.size();
        let mut intent = None;
        let mut close = false;

        let modal = egui::Modal::new(egui::Id::new("icon_preview")).show(ctx, |ui| {
            ui.set_min_width(size + 48.0);
            ui.vertical_centered(|ui| {
                ui.heading(&record.display_name);
                if let Some(symbol) = record.symbol.as_deref() {
                    let color = accent_color(record).unwrap_or(Color32::from_gray(170));
                    ui.label(RichText::new(symbol).strong().monospace().color(color));
                }
                ui.add_space(8.0);
                ui.add(icon_image(generation, record).fit_to_exact_size(vec2(size, size)));
                ui.add_space(8.0);
            });

            egui::Grid::new("icon_preview_details")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.monospace(&record.name);
                    ui.end_row();

                    ui.label("Path");
                    ui.monospace(record.path.display().to_string());
                    ui.end_row();

                    ui.label("File");
                    ui.monospace(&record.file_name);
                    ui.end_row();

                    ui.label("Size");
                    ui.label(human_readable_bytes(usize_to_u64(record.byte_len())));
                    ui.end_row();

                    ui.label("Dimensions");
                    ui.label(format_dimensions(record.intrinsic_size));
                    ui.end_row();
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .button(format!("{} Copy SVG", icons::ICON_COPY))
                    .on_hover_text("Copy the SVG markup to the clipboard (Ctrl+C)")
                    .clicked()
                {
                    intent = Some(IconIntent::Copy(index));
                }
                if ui
                    .button(format!("{} Save…", icons::ICON_SAVE))
                    .on_hover_text("Save the SVG file to disk")
                    .clicked()
                {
                    intent = Some(IconIntent::Save(index));
                }
                if ui.button("Close").on_hover_text("Close (Esc)").clicked() {
                    close = true;
                }
            });
        });

        let copy_requested =
            ctx.input(|i| i.events.iter().any(|e| matches!(e, egui::Event::Copy)));
        if intent.is_none() && copy_requested && !ctx.wants_keyboard_input() {
            intent = Some(IconIntent::Copy(index));
        }
        if close || modal.should_close() {
            self.ui.preview = None;
        }
        intent
    }
}
