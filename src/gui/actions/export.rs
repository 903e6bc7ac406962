// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.commit_out_path();

    if app.records.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    logf!("Export: Begin records={}, format={:?}", app.records.len(), export.format);

    let status_msg = match file::write_export(export, &app.records) {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            format!("Exported {} records to {}", app.records.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
