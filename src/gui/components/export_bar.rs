// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    gui::{actions, app::App},
    config::options::ExportFormat,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            // Keep the shown extension in step unless the user is typing
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.add_enabled(
            export.format != ExportFormat::Json,
            egui::Checkbox::new(&mut export.include_headers, "Include headers"),
        );
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        let resp = ui.add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(320.0));
        if resp.changed() {
            app.out_path_dirty = true;
        }
        if resp.lost_focus() {
            app.commit_out_path();
            app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
    });
}
