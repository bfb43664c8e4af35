use super::super::{CoinglyphApp, IconIntent};
use super::common::{accent_color, elide, icon_image};
use super::icons;
use crate::catalog::{CatalogSource, IconRecord};
use egui::{Align2, Color32, CornerRadius, FontId, Rect, Sense, Stroke, StrokeKind, pos2, vec2};

const CARD_TOP_PAD: f32 = 10.0;
const CARD_LABEL_GAP: f32 = 6.0;
const CARD_NAME_HEIGHT: f32 = 16.0;
const CARD_SYMBOL_HEIGHT: f32 = 14.0;
const CARD_BOTTOM_PAD: f32 = 8.0;
const CARD_ACCENT_WIDTH: f32 = 3.0;
const CARD_CHAR_WIDTH: f32 = 7.0;

fn card_size(tile: f32, icon: f32) -> egui::Vec2 {
    vec2(
        tile,
        CARD_TOP_PAD + icon + CARD_LABEL_GAP + CARD_NAME_HEIGHT + CARD_SYMBOL_HEIGHT + CARD_BOTTOM_PAD,
    )
}

fn grid_columns(available_width: f32, tile: f32, spacing: f32) -> usize {
    let fit = ((available_width + spacing) / (tile + spacing)).floor().max(1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        fit as usize
    }
}

fn max_label_chars(tile: f32) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (tile / CARD_CHAR_WIDTH).floor().max(3.0) as usize
    }
}

impl CoinglyphApp {
    pub(crate) fn ui_central(&mut self, ui: &mut egui::Ui) -> Option<IconIntent> {
        self.handle_dropped_files(ui);

        let intent = if self.catalog.is_loading() {
            Self::ui_loading(ui);
            None
        } else if let Some(msg) = self.catalog.error_message().map(str::to_owned) {
            self.ui_load_error(ui, &msg);
            None
        } else {
            self.refresh_view();
            if self.view.is_empty() {
                self.ui_empty_state(ui);
                None
            } else {
                self.ui_icon_grid(ui)
            }
        };

        Self::paint_drop_hint(ui);
        intent
    }

    fn ui_loading(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.spinner();
            ui.label("Loading icons…");
        });
    }

    fn ui_load_error(&mut self, ui: &mut egui::Ui, msg: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.heading(format!("{} Could not load icons", icons::ICON_ERROR));
            ui.add_space(6.0);
            ui.label(egui::RichText::new(msg).color(Color32::from_rgb(220, 90, 90)));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                // Center the button row inside the vertical layout.
                let row_width = 220.0;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                if ui.button(format!("{} Retry", icons::ICON_RELOAD)).clicked() {
                    self.reload_catalog();
                }
                if self.source != CatalogSource::Builtin
                    && ui
                        .button(format!("{} Bundled icons", icons::ICON_BUNDLED))
                        .clicked()
                {
                    self.start_catalog_load(CatalogSource::Builtin);
                }
            });
        });
    }

    fn ui_empty_state(&mut self, ui: &mut egui::Ui) {
        let has_query = !self.query.trim().is_empty();
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.heading("No icons found");
            ui.add_space(6.0);
            if has_query {
                ui.label(format!("Nothing matches \"{}\".", self.query.trim()));
                ui.add_space(8.0);
                if ui.button(format!("{} Clear search", icons::ICON_CLEAR)).clicked() {
                    self.clear_query();
                }
            } else {
                ui.label("This catalog has no icons. Open a folder of SVG files or a manifest.");
            }
        });
    }

    fn ui_icon_grid(&self, ui: &mut egui::Ui) -> Option<IconIntent> {
        let tile = self.config.grid.tile_size();
        let icon = self.config.grid.icon_size();
        let spacing = self.config.grid.spacing();
        let card = card_size(tile, icon);
        let records = self.catalog.records();
        let generation = self.catalog.generation();
        let indices = self.view.indices();
        let columns = grid_columns(ui.available_width(), tile, spacing);
        let rows = indices.len().div_ceil(columns);

        let mut intent = None;
        ui.spacing_mut().item_spacing = vec2(spacing, spacing);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, card.y, rows, |ui, row_range| {
                for row in row_range {
                    let start = row * columns;
                    let end = (start + columns).min(indices.len());
                    ui.horizontal(|ui| {
                        for &idx in &indices[start..end] {
                            let Some(record) = records.get(idx) else {
                                continue;
                            };
                            if let Some(card_intent) =
                                self.ui_icon_card(ui, generation, idx, record, card)
                            {
                                intent = Some(card_intent);
                            }
                        }
                    });
                }
            });
        intent
    }

    fn ui_icon_card(
        &self,
        ui: &mut egui::Ui,
        generation: u64,
        idx: usize,
        record: &IconRecord,
        size: egui::Vec2,
    ) -> Option<IconIntent> {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        if ui.is_rect_visible(rect) {
            let visuals = *ui.style().interact(&response);
            let painter = ui.painter_at(rect);
            painter.rect(
                rect,
                CornerRadius::same(6),
                visuals.weak_bg_fill,
                visuals.bg_stroke,
                StrokeKind::Inside,
            );
            if let Some(color) = accent_color(record) {
                let y = rect.top() + CARD_ACCENT_WIDTH / 2.0;
                painter.hline(
                    rect.x_range().shrink(6.0),
                    y,
                    Stroke::new(CARD_ACCENT_WIDTH, color),
                );
            }

            let icon = self.config.grid.icon_size();
            let icon_rect = Rect::from_min_size(
                pos2(rect.center().x - icon / 2.0, rect.top() + CARD_TOP_PAD),
                vec2(icon, icon),
            );
            icon_image(generation, record).paint_at(ui, icon_rect);

            let max_chars = max_label_chars(size.x);
            let name_pos = pos2(rect.center().x, icon_rect.bottom() + CARD_LABEL_GAP);
            painter.text(
                name_pos,
                Align2::CENTER_TOP,
                elide(&record.display_name, max_chars),
                FontId::proportional(13.0),
                visuals.text_color(),
            );
            if let Some(symbol) = record.symbol.as_deref() {
                painter.text(
                    name_pos + vec2(0.0, CARD_NAME_HEIGHT),
                    Align2::CENTER_TOP,
                    elide(symbol, max_chars),
                    FontId::monospace(11.0),
                    ui.visuals().weak_text_color(),
                );
            }
        }

        let response = response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text(format!(
                "{} ({})\nClick to preview, right-click for more",
                record.display_name, record.name
            ));
        let mut intent = response.clicked().then_some(IconIntent::Preview(idx));
        response.context_menu(|ui| {
            if ui.button(format!("{} Preview", icons::ICON_PREVIEW)).clicked() {
                intent = Some(IconIntent::Preview(idx));
                ui.close();
            }
            if ui.button(format!("{} Copy SVG", icons::ICON_COPY)).clicked() {
                intent = Some(IconIntent::Copy(idx));
                ui.close();
            }
            if ui.button(format!("{} Save…", icons::ICON_SAVE)).clicked() {
                intent = Some(IconIntent::Save(idx));
                ui.close();
            }
        });
        intent
    }

    fn handle_dropped_files(&mut self, ui: &egui::Ui) {
        let dropped = ui.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let Some(path) = dropped.iter().find_map(|f| f.path.clone()) else {
            self.set_status("Drop a folder or manifest from disk to open it.");
            return;
        };
        match CatalogSource::from_path(&path) {
            Some(source) => {
                log::info!("Opening dropped catalog {}", path.display());
                self.start_catalog_load(source);
            }
            None => {
                log::info!("Ignoring dropped file {}", path.display());
                self.set_status(format!(
                    "{} is not a folder or .json manifest.",
                    path.display()
                ));
            }
        }
    }

    fn paint_drop_hint(ui: &egui::Ui) {
        let hovering = ui.input(|i| !i.raw.hovered_files.is_empty());
        if !hovering {
            return;
        }
        let rect = ui.max_rect();
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::ZERO, Color32::from_black_alpha(160));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Drop a folder or manifest to open it",
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fill_available_width() {
        assert_eq!(grid_columns(1000.0, 96.0, 8.0), 9);
        assert_eq!(grid_columns(96.0, 96.0, 8.0), 1);
        assert_eq!(grid_columns(10.0, 96.0, 8.0), 1);
    }

    #[test]
    fn card_height_includes_labels() {
        let size = card_size(96.0, 48.0);
        assert!((size.x - 96.0).abs() < f32::EPSILON);
        assert!((size.y - 102.0).abs() < f32::EPSILON);
    }
}
