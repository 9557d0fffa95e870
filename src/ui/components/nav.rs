use eframe::egui;

use crate::ui::Page;

/// Top navigation bar. Returns the page the user picked, if any.
pub fn render(ui: &mut egui::Ui, current: Page) -> Option<Page> {
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("ChatSpace").strong());
        ui.add_space(24.0);

        for page in [Page::Home, Page::Chat, Page::About] {
            if ui.selectable_label(current == page, page.title()).clicked() && current != page {
                picked = Some(page);
            }
        }
    });
    picked
}
