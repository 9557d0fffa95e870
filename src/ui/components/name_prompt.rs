use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePromptAction {
    Submit,
    Cancel,
}

/// Modal asking for a display name. Only a rename can be cancelled.
pub fn render(
    ctx: &egui::Context,
    name_input: &mut String,
    cancellable: bool,
) -> Option<NamePromptAction> {
    let mut action = None;
    egui::Window::new("What's your name?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Other people in the chat will see this name.");
            let response = ui.add(egui::TextEdit::singleline(name_input).hint_text("Your name"));
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Some(NamePromptAction::Submit);
            }

            ui.horizontal(|ui| {
                let has_name = !name_input.trim().is_empty();
                if ui.add_enabled(has_name, egui::Button::new("Continue")).clicked() {
                    action = Some(NamePromptAction::Submit);
                }
                if cancellable && ui.button("Cancel").clicked() {
                    action = Some(NamePromptAction::Cancel);
                }
            });
        });
    action
}
