// src/gui/actions/scrape.rs
use crate::{
    config::options::MajorSelector,
    core::HttpSource,
    gui::app::App,
    gui::progress::GuiProgress,
    scrape,
};

pub fn scrape(app: &mut App) {
    // Align scrape options with the typed selection
    match MajorSelector::parse(&app.state.gui.majors_text) {
        Ok(sel) => app.state.options.scrape.majors = sel,
        Err(e) => {
            logd!("Scrape: bad selection {:?}: {}", app.state.gui.majors_text, e);
            app.status(format!("Error: {e}"));
            return;
        }
    }

    let opts = &app.state.options.scrape;
    logf!("Scrape: Begin majors={:?}", opts.majors);

    let src = match HttpSource::new(&opts.base_url) {
        Ok(src) => src,
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    match scrape::collect(&src, opts, Some(&mut prog)) {
        Ok(records) => {
            logf!("Scrape: OK records={}", records.len());
            app.records = records;
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
