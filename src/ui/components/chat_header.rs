use eframe::egui;

/// Header of the chat card. Returns `true` when "Change name" was clicked.
pub fn render(ui: &mut egui::Ui, display_name: &str, new_message: bool) -> bool {
    let mut rename = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Site creator");
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::GREEN, "●");
                ui.label(egui::RichText::new("Online").weak());
            });
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Change name").clicked() {
                rename = true;
            }
            ui.label(format!("You are {display_name}"));

            if new_message {
                ui.label(
                    egui::RichText::new("🔔 New message")
                        .strong()
                        .color(egui::Color32::from_rgb(109, 40, 217)),
                );
            }
        });
    });
    rename
}
