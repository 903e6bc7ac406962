// src/specs/major.rs
//! Scraping *spec* for a Major Group page (`sic_manual.display?id=N&tab=group`).
//!
//! The page lists one Major Group heading, then its Industry Groups, each
//! followed by the SIC4 entries it contains:
//!
//! ```text
//! <h2>Major Group 01: Agricultural Production Crops</h2>
//! <strong>Industry Group 011: Cash Grains</strong>
//! <ul><li><a href="sic_manual.display?id=47&tab=description">0111</a> Wheat</li> ...</ul>
//! ```
//!
//! Markup varies across captures, so elements are matched by their text and
//! placed by their codes: an Industry Group must start with the major code,
//! a SIC4 entry with its Industry Group code. Anything before the Major
//! Group heading or outside an open group (breadcrumbs, footer years) is
//! dropped.

use scraper::Html;

use crate::core::html::{label_selector, scan_matches};
use crate::error::{Result, ScrapeError};
use crate::sic::{Heading, Level, Node, classify};

/// Parse a Major Group page into a tree rooted at the Major Group.
pub fn parse(doc: &str) -> Result<Node> {
    let html = Html::parse_document(doc);
    let headings: Vec<Heading> = scan_matches(&html, &label_selector(), |_, text| classify(text))
        .into_iter()
        .map(|(_, h)| h)
        .collect();

    let Some(start) = headings.iter().position(|h| h.level == Level::Major) else {
        return Err(ScrapeError::MissingMajorGroup);
    };
    let mut headings = headings.into_iter().skip(start);
    let Some(major) = headings.next() else {
        return Err(ScrapeError::MissingMajorGroup);
    };
    let major_code = major.code.clone();
    let mut root = major.into_node();

    // Code and child index of the Industry Group entries go into
    let mut open_group: Option<(String, usize)> = None;

    for h in headings {
        match h.level {
            Level::IndustryGroup if h.code.starts_with(&major_code) => {
                open_group = Some((h.code.clone(), root.children.len()));
                root.children.push(h.into_node());
            }
            Level::Sic4 => match &open_group {
                Some((group, idx)) if h.code.starts_with(group.as_str()) => {
                    root.children[*idx].children.push(h.into_node());
                }
                _ => logd!("Skipping {:?}: not under an Industry Group of {}", h.label(), major_code),
            },
            Level::Major if h.code != major_code => {
                logd!("Ignoring second Major Group heading {:?}", h.label());
            }
            Level::IndustryGroup => {
                logd!("Skipping {:?}: not under Major Group {}", h.label(), major_code);
            }
            Level::Major | Level::Division => {}
        }
    }

    logd!("Parsed {}: {} nodes", root.label, root.descendant_count());
    Ok(root)
}
