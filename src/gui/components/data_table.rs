// src/gui/components/data_table.rs
//
// Draws the records table. Purely a view over App::records.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, sic::RECORD_HEADERS};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.records.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No records yet. Pick Major Groups and press Scrape.");
        });
        return;
    }

    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(420.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::remainder().clip(true))
        .header(24.0, |mut header| {
            for h in RECORD_HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.records.len(), |mut row| {
                let Some(rec) = app.records.get(row.index()) else { return };
                // Groups stand out from SIC4 leaves
                let is_group = !rec.full_desc.starts_with("SIC4 ");
                row.col(|ui| {
                    let text = RichText::new(rec.full_desc.as_str());
                    ui.label(if is_group { text.strong() } else { text });
                });
                row.col(|ui| {
                    ui.label(rec.parent_desc.as_str());
                });
            });
        });
}
