// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::core::sanitize::sanitize_filename;
use crate::csv::write_records;
use crate::error::{Result, ScrapeError};
use crate::sic::Record;

/// Write one export file based on ExportOptions (path, headers policy, format).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, records: &[Record]) -> Result<PathBuf> {
    let path = export.out_path();
    write_records_to_path(&path, records, export.format, export.include_headers)?;
    Ok(path)
}

/// Final file for an explicit output target. A directory (existing, or spelled
/// with a trailing separator) gets `<sanitized stem>.<ext>` inside it.
pub fn resolve_out_path(target: &Path, stem: &str, format: ExportFormat) -> PathBuf {
    if target.is_dir() || target.to_string_lossy().ends_with(['/', '\\']) {
        target.join(join!(&sanitize_filename(stem, "sic"), ".", format.ext()))
    } else {
        target.to_path_buf()
    }
}

/// Create/truncate `path` (and its parent dirs) and stream `records` into it.
pub fn write_records_to_path(
    path: &Path,
    records: &[Record],
    format: ExportFormat,
    include_headers: bool,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    match format.delim() {
        Some(sep) => write_records(&mut out, records, include_headers, sep)?,
        None => {
            serde_json::to_writer_pretty(&mut out, records)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    logf!("Export: {} records → {}", records.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
