// src/gui/components/selection_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Major Groups:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.majors_text)
                .hint_text("1, 2, 7-9 or all")
                .desired_width(160.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("All").clicked() {
            app.state.gui.majors_text = s!("all");
        }

        ui.separator();

        if ui.button("Scrape").clicked() || enter {
            actions::scrape(app);
        }

        ui.label(format!("{} records", app.records.len()));
    });
}
