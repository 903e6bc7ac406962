// src/sic/label.rs
//! Recognizes SIC headings in page text and rebuilds canonical labels.

use std::sync::LazyLock;

use regex::Regex;

use super::{Level, Node};
use crate::core::sanitize::{normalize_ws, title_case};

static DIVISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^division\s+([a-j])(?:\s*[:.\-]\s*|\s+)(\S.*)$").expect("division regex")
});
static MAJOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^major\s+group\s+(\d{2})(?:\s*[:.\-]\s*|\s+)(\S.*)$").expect("major regex")
});
static INDUSTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^industry\s+group\s+(\d{3})(?:\s*[:.\-]\s*|\s+)(\S.*)$").expect("industry regex")
});
static SIC4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(?:\s*[:.\-]\s*|\s+)(\S.*)$").expect("sic4 regex")
});

/// A recognized heading: level, code as printed ("01", "011", "0111", "A")
/// and the normalized title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: Level,
    pub code: String,
    pub title: String,
}

impl Heading {
    pub fn label(&self) -> String {
        let prefix = match self.level {
            Level::Division => "Division",
            Level::Major => "Major Group",
            Level::IndustryGroup => "Industry Group",
            Level::Sic4 => "SIC4",
        };
        format!("{prefix} {}: {}", self.code, self.title)
    }

    pub fn into_node(self) -> Node {
        Node::new(self.label(), self.level)
    }
}

/// Classify a piece of element text. Returns `None` for anything that is not
/// a Division, Major Group, Industry Group or SIC4 heading.
pub fn classify(text: &str) -> Option<Heading> {
    let text = normalize_ws(text);
    let patterns: [(&Regex, Level); 4] = [
        (&*DIVISION, Level::Division),
        (&*MAJOR, Level::Major),
        (&*INDUSTRY, Level::IndustryGroup),
        (&*SIC4, Level::Sic4),
    ];

    patterns.into_iter().find_map(|(re, level)| {
        let caps = re.captures(&text)?;
        let code = caps.get(1)?.as_str();
        let title = title_case(caps.get(2)?.as_str());
        let code = if level == Level::Division { code.to_ascii_uppercase() } else { s!(code) };
        Some(Heading { level, code, title })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_group_title_is_title_cased() {
        let h = classify("Industry Group 017:  Fruits and Tree Nuts").unwrap();
        assert_eq!(h.level, Level::IndustryGroup);
        assert_eq!(h.code, "017");
        assert_eq!(h.label(), "Industry Group 017: Fruits And Tree Nuts");
    }

    #[test]
    fn sic4_with_and_without_colon() {
        assert_eq!(classify("0172 Grapes").unwrap().label(), "SIC4 0172: Grapes");
        assert_eq!(classify("0172: grapes").unwrap().label(), "SIC4 0172: Grapes");
    }

    #[test]
    fn division_code_upper_cased() {
        let h = classify("division a: agriculture, forestry, and fishing").unwrap();
        assert_eq!(h.label(), "Division A: Agriculture, Forestry, And Fishing");
    }

    #[test]
    fn plain_text_is_not_a_heading() {
        assert!(classify("This major group includes establishments").is_none());
        assert!(classify("Major Group 01").is_none());
        assert!(classify("01234 too many digits").is_none());
    }
}
