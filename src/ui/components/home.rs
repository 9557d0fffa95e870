use eframe::egui;

use crate::ui::Page;

pub fn render(ui: &mut egui::Ui) -> Option<Page> {
    let mut picked = None;
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(egui::RichText::new("💬").size(48.0));
        ui.add_space(12.0);
        ui.heading(egui::RichText::new("Talk to the creator").size(36.0).strong());
        ui.add_space(8.0);
        ui.label(
            "An open place for direct conversation. Ask questions, share ideas \
             and get answers right here.",
        );
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            if ui.button("Start chatting").clicked() {
                picked = Some(Page::Chat);
            }
            if ui.button("About the creator").clicked() {
                picked = Some(Page::About);
            }
        });

        ui.add_space(40.0);
        ui.columns(3, |columns| {
            feature(&mut columns[0], "⚡ Fast", "New messages show up within seconds.");
            feature(&mut columns[1], "🔒 Simple", "No account needed, just pick a name.");
            feature(&mut columns[2], "🤝 Open", "Everyone shares the same conversation.");
        });
    });
    picked
}

fn feature(ui: &mut egui::Ui, title: &str, body: &str) {
    ui.group(|ui| {
        ui.strong(title);
        ui.label(body);
    });
}
