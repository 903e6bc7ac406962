// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;
use crate::error::{ Result, ScrapeError };

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Which Major Groups to scrape. Ids are the manual's page ids
/// (`sic_manual.display?id=<id>&tab=group`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MajorSelector {
    All,
    One(u32),
    Ids(Vec<u32>),
}

impl MajorSelector {
    /// Parse "all", "1", or a list like "1,2,7-9". Order is kept as typed,
    /// duplicates dropped.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(MajorSelector::All);
        }

        let mut ids: Vec<u32> = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() { continue; }
            let (a, b) = match part.split_once('-') {
                Some((a, b)) => (parse_id(a)?, parse_id(b)?),
                None => { let v = parse_id(part)?; (v, v) }
            };
            if a > b {
                return Err(ScrapeError::Selection(format!("invalid range: {part}")));
            }
            for v in a..=b {
                if !ids.contains(&v) { ids.push(v); }
            }
        }

        match ids.len() {
            0 => Err(ScrapeError::Selection(s!("no major group ids given"))),
            1 => Ok(MajorSelector::One(ids[0])),
            _ => Ok(MajorSelector::Ids(ids)),
        }
    }
}

fn parse_id(s: &str) -> Result<u32> {
    let v: u32 = s.trim().parse()
        .map_err(|_| ScrapeError::Selection(format!("not a major group id: {:?}", s.trim())))?;
    if v == 0 || v > MAX_MAJOR_ID {
        return Err(ScrapeError::Selection(format!("major group id out of range (1..={MAX_MAJOR_ID}): {v}")));
    }
    Ok(v)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub majors: MajorSelector,
    /// Pause between page requests; jitter adds `id % jitter_ms` on top.
    pub pause: Duration,
    pub jitter_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            majors: MajorSelector::One(1),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            jitter_ms: JITTER_MS,
        }
    }
}

impl ScrapeOptions {
    pub fn delay_for(&self, id: u32) -> Duration {
        let jitter = if self.jitter_ms == 0 { 0 } else { u64::from(id) % self.jitter_ms };
        self.pause + Duration::from_millis(jitter)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv", ExportFormat::Json => "json" }
    }
    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self { ExportFormat::Csv => Some(','), ExportFormat::Tsv => Some('\t'), ExportFormat::Json => None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem.as_ref(), ".", self.format.ext()))
    }

    /// Parse user text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
