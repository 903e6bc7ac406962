// src/core/html.rs
use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Elements whose text is never part of a heading: nested lists and tables
/// belong to the children, scripts and styles to nobody.
const SKIP_SUBTREES: &[&str] = &["ul", "ol", "table", "script", "style"];

/// Elements that may carry a heading or an entry label.
pub const LABEL_CANDIDATES: &str = "h1, h2, h3, h4, h5, h6, strong, b, dt, li, a";

/// Text of `el`, without the text of nested lists/tables, whitespace collapsed.
pub fn own_text(el: ElementRef<'_>) -> String {
    let mut buf = s!();
    collect_text(el, &mut buf);
    normalize_ws(&buf)
}

fn collect_text(el: ElementRef<'_>, buf: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            buf.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if is_skipped(name) {
                continue;
            }
            // <br> separates words the way the browser renders it
            if name.eq_ignore_ascii_case("br") {
                buf.push(' ');
                continue;
            }
            collect_text(child_el, buf);
        }
    }
}

fn is_skipped(name: &str) -> bool {
    SKIP_SUBTREES.iter().any(|t| name.eq_ignore_ascii_case(t))
}

/// Walk `selector` matches in document order and keep the ones `classify`
/// accepts.
///
/// An element that lies in the own text of an accepted element is skipped,
/// so `<li><a>0111</a> Wheat</li>` yields one hit for the `li`, not two.
/// Crossing a nested list or table starts fresh content: the entries of
/// `<li>Industry Group 011 ...<ul><li>0111 Wheat</li></ul></li>` are kept.
pub fn scan_matches<'a, T>(
    doc: &'a Html,
    selector: &Selector,
    mut classify: impl FnMut(ElementRef<'a>, &str) -> Option<T>,
) -> Vec<(ElementRef<'a>, T)> {
    let mut accepted = HashSet::new();
    let mut out = Vec::new();

    for el in doc.select(selector) {
        let mut covered = false;
        for anc in el.ancestors() {
            if accepted.contains(&anc.id()) {
                covered = true;
                break;
            }
            if ElementRef::wrap(anc).is_some_and(|e| is_skipped(e.value().name())) {
                break;
            }
        }
        if covered {
            continue;
        }

        let text = own_text(el);
        if text.is_empty() {
            continue;
        }
        if let Some(hit) = classify(el, &text) {
            accepted.insert(el.id());
            out.push((el, hit));
        }
    }
    out
}

/// Selector for [`LABEL_CANDIDATES`].
pub fn label_selector() -> Selector {
    Selector::parse(LABEL_CANDIDATES).expect("static label selector")
}
