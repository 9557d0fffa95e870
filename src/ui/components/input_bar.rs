use eframe::egui;

/// Message field plus send button. Returns `true` when the user asked to send.
pub fn render(ui: &mut egui::Ui, input_text: &mut String, can_send: bool) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let field_width = (ui.available_width() - 80.0).max(120.0);
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Type a message...")
                .desired_width(field_width),
        );

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }

        if ui.add_enabled(can_send, egui::Button::new("Send")).clicked() {
            send = true;
        }
    });

    send
}
