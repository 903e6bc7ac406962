// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use sic_scrape::{
    config::{consts::LOG_FILE, state::GuiState},
    gui,
    log::{self, LogTarget},
};

fn main() {
    log::init(LogTarget::File(Path::new(LOG_FILE)), 1);

    let defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("SIC Manual Scraper")
            .with_inner_size([defaults.window_w as f32, defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
