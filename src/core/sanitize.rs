// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Upper-case the first letter of every word, lower-case the rest.
/// A word starts after any non-letter except an apostrophe, so
/// "fruits and tree nuts" → "Fruits And Tree Nuts", "N.E.C." stays put
/// and "men's" → "Men's".
pub fn title_case(s: &str) -> String {
    let s = normalize_ws(s);
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word { out.extend(ch.to_lowercase()); }
            else { out.extend(ch.to_uppercase()); }
            in_word = true;
        } else {
            out.push(ch);
            in_word = in_word && ch == '\'';
        }
    }
    out
}

/// Turn a record label into something safe for a file stem.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if (ch.is_whitespace() || ch == ':' || ch == ',') && !last_us { out.push('_'); last_us = true; }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_nbsp() {
        assert_eq!(normalize_ws("  Cash\u{a0}\n Grains "), "Cash Grains");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("GENERAL FARMS, primarily crop"), "General Farms, Primarily Crop");
        assert_eq!(title_case("cash grains, n.e.c."), "Cash Grains, N.E.C.");
        assert_eq!(title_case("men's and boys' clothing"), "Men's And Boys' Clothing");
    }

    #[test]
    fn filename_from_label() {
        assert_eq!(
            sanitize_filename("Major Group 01: Agricultural Production Crops", "major"),
            "Major_Group_01_Agricultural_Production_Crops"
        );
        assert_eq!(sanitize_filename("???", "major"), "major");
    }
}
