use eframe::egui;

use crate::common::ChatMessage;

const CREATOR_FILL: egui::Color32 = egui::Color32::from_rgb(237, 228, 255);
const OWN_FILL: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
const OTHER_FILL: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);

/// Message list in server order. Own messages sit on the right.
pub fn render(
    ui: &mut egui::Ui,
    messages: &[ChatMessage],
    own_user_id: &str,
    scroll_to_bottom: &mut bool,
) {
    let height = (ui.available_height() - 48.0).max(80.0);
    egui::ScrollArea::vertical()
        .max_height(height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if messages.is_empty() {
                ui.label(egui::RichText::new("No messages yet. Say hello!").weak());
            }

            for message in messages {
                let own = message.user_id == own_user_id;
                let layout = if own {
                    egui::Layout::right_to_left(egui::Align::TOP)
                } else {
                    egui::Layout::left_to_right(egui::Align::TOP)
                };
                ui.with_layout(layout, |ui| render_bubble(ui, message, own));
                ui.add_space(6.0);
            }

            if std::mem::take(scroll_to_bottom) {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

fn render_bubble(ui: &mut egui::Ui, message: &ChatMessage, own: bool) {
    let fill = if message.is_creator {
        CREATOR_FILL
    } else if own {
        OWN_FILL
    } else {
        OTHER_FILL
    };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_max_width(420.0);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    let name = egui::RichText::new(&message.username).strong();
                    if message.is_creator {
                        ui.label(name.color(egui::Color32::from_rgb(109, 40, 217)));
                        ui.label(egui::RichText::new("creator").small().italics());
                    } else {
                        ui.label(name);
                    }
                    let time = ui.label(egui::RichText::new(&message.timestamp).small().weak());
                    if let Some(created_at) = &message.created_at {
                        time.on_hover_text(created_at);
                    }
                });
                ui.label(egui::RichText::new(&message.text).color(egui::Color32::BLACK));
            });
        });
}
