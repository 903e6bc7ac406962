// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, csv::records_to_string};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    match records_to_string(&app.records, export.format, export.include_headers) {
        Ok(txt) => {
            logf!("Copy: records={}, format={:?}", app.records.len(), export.format);
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
