use std::time::Instant;

use eframe::egui;

use crate::ui::notice::{ToastKind, Toasts};

pub fn render(ctx: &egui::Context, toasts: &mut Toasts, now: Instant) {
    let visible = toasts.visible(now);
    if visible.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui| {
            for toast in visible {
                let fill = match toast.kind {
                    ToastKind::Info => egui::Color32::from_rgb(220, 252, 231),
                    ToastKind::Error => egui::Color32::from_rgb(254, 226, 226),
                };
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&toast.text).color(egui::Color32::BLACK));
                    });
                ui.add_space(4.0);
            }
        });
}
