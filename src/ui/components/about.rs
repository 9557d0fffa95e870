use eframe::egui;

const SKILLS: [&str; 4] = ["Rust", "Networking", "Design", "UX/UI"];
const ACHIEVEMENTS: [(&str, &str); 3] = [
    ("500+", "Projects"),
    ("1000+", "Hours of work"),
    ("50+", "Happy clients"),
];

pub fn render(ui: &mut egui::Ui) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(egui::RichText::new("About the creator").size(32.0).strong());
            ui.add_space(8.0);
            ui.label(
                "I build small, focused tools and like talking to the people who use them. \
                 Drop a line in the chat any time.",
            );
            ui.add_space(24.0);

            ui.horizontal_wrapped(|ui| {
                for skill in SKILLS {
                    ui.label(egui::RichText::new(skill).strong());
                    ui.separator();
                }
            });

            ui.add_space(24.0);
            ui.columns(ACHIEVEMENTS.len(), |columns| {
                for (column, (number, label)) in columns.iter_mut().zip(ACHIEVEMENTS) {
                    column.vertical_centered(|ui| {
                        ui.heading(egui::RichText::new(number).size(28.0));
                        ui.label(label);
                    });
                }
            });
        });
    });
}
