// src/specs/manual.rs
//! Scraping *spec* for the manual index (`sic_manual.html`).
//!
//! The index lists each Division followed by links to its Major Groups:
//!
//! ```text
//! <a href="sic_manual.display?id=1&tab=division">Division A: Agriculture, Forestry, And Fishing</a>
//! <ul><li><a href="sic_manual.display?id=1&tab=group">Major Group 01: Agricultural Production Crops</a></li> ...</ul>
//! ```
//!
//! Only links count as Major Groups here; a heading without an href has no
//! page to fetch.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::core::html::{label_selector, scan_matches};
use crate::error::{Result, ScrapeError};
use crate::sic::{Heading, Level, classify};

static ID_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=(\d+)").expect("id regex"));

/// A Major Group page listed in the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MajorRef {
    pub id: u32,
    pub label: String,
    /// Link as found in the index, relative to the manual base.
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionRef {
    pub label: String,
    pub majors: Vec<MajorRef>,
}

enum Hit {
    Division(Heading),
    Major(Heading, String),
}

pub fn parse(doc: &str) -> Result<Vec<DivisionRef>> {
    let html = Html::parse_document(doc);
    let hits = scan_matches(&html, &label_selector(), |el, text| {
        let h = classify(text)?;
        match h.level {
            Level::Division => Some(Hit::Division(h)),
            Level::Major => {
                let href = el.value().attr("href")?;
                Some(Hit::Major(h, s!(href.trim())))
            }
            _ => None,
        }
    });

    let mut divisions: Vec<DivisionRef> = Vec::new();
    for (_, hit) in hits {
        match hit {
            Hit::Division(h) => {
                let label = h.label();
                // The same division may be linked twice (menu + body)
                if divisions.last().is_some_and(|d| d.label == label) {
                    continue;
                }
                divisions.push(DivisionRef { label, majors: Vec::new() });
            }
            Hit::Major(h, path) => {
                let label = h.label();
                let Some(div) = divisions.last_mut() else {
                    return Err(ScrapeError::OrphanMajor(label));
                };
                let id = ID_PARAM
                    .captures(&path)
                    .and_then(|c| c[1].parse().ok())
                    .or_else(|| h.code.parse().ok())
                    .unwrap_or_default();
                if div.majors.iter().any(|m| m.id == id) {
                    continue;
                }
                div.majors.push(MajorRef { id, label, path });
            }
        }
    }

    // Division headings with nothing under them are menu noise
    divisions.retain(|d| !d.majors.is_empty());
    if divisions.is_empty() {
        return Err(ScrapeError::EmptyIndex);
    }

    logd!(
        "Index: {} divisions, {} major groups",
        divisions.len(),
        divisions.iter().map(|d| d.majors.len()).sum::<usize>()
    );
    Ok(divisions)
}
