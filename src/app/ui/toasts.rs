use super::super::CoinglyphApp;
use super::super::toast::ToastKind;
use super::icons;
use egui::{Align2, Color32, RichText};
use std::time::{Duration, Instant};

const TOAST_OFFSET: egui::Vec2 = egui::vec2(-12.0, -36.0);
const TOAST_REPAINT: Duration = Duration::from_millis(50);

impl CoinglyphApp {
    pub(crate) fn ui_toasts(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.toasts.prune(now);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, TOAST_OFFSET)
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in self.toasts.iter() {
                    let (icon, color) = match toast.kind {
                        ToastKind::Info => (icons::ICON_OK, Color32::from_rgb(110, 200, 130)),
                        ToastKind::Error => (icons::ICON_ERROR, Color32::from_rgb(230, 100, 100)),
                    };
                    let opacity = self.toasts.opacity(toast, now);
                    ui.scope(|ui| {
                        ui.multiply_opacity(opacity);
                        egui::Frame::popup(ui.style()).show(ui, |ui| {
                            ui.label(RichText::new(format!("{icon} {}", toast.message)).color(color));
                        });
                    });
                }
            });
        ctx.request_repaint_after(TOAST_REPAINT);
    }
}
