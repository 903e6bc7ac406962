// tests/collect.rs
//
// scrape::* against an offline page source.
//
use std::collections::HashMap;
use std::time::Duration;

use sic_scrape::{
    config::options::{MajorSelector, ScrapeOptions},
    core::PageSource,
    progress::Progress,
    scrape,
    sic::Record,
    Result, ScrapeError,
};

const MAJOR_10: &str = r#"
    <h2>Major Group 10: Metal Mining</h2>
    <p><strong>Industry Group 101: Iron Ores</strong></p>
    <ul><li><a href="x">1011</a> Iron Ores</li></ul>
"#;

struct FixtureSource {
    pages: HashMap<String, String>,
}

impl FixtureSource {
    fn new() -> Self {
        let mut pages = HashMap::new();
        pages.insert(s("sic_manual.html"), s(include_str!("fixtures/sic_manual.html")));
        pages.insert(scrape::major_path(1), s(include_str!("fixtures/major_group_01.html")));
        pages.insert(scrape::major_path(2), s(include_str!("fixtures/major_group_02.html")));
        // id 3 (Major Group 07) deliberately missing
        pages.insert(scrape::major_path(4), s(MAJOR_10));
        Self { pages }
    }
}

impl PageSource for FixtureSource {
    fn fetch(&self, path: &str) -> Result<String> {
        self.pages.get(path).cloned().ok_or_else(|| ScrapeError::Status {
            status: 404,
            url: s(path),
        })
    }
}

fn s(x: &str) -> String {
    x.to_string()
}

fn opts(majors: MajorSelector) -> ScrapeOptions {
    ScrapeOptions { majors, pause: Duration::ZERO, jitter_ms: 0, ..ScrapeOptions::default() }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(u32, String)>,
    failed: Vec<u32>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, id: u32, label: &str) {
        self.done.push((id, s(label)));
    }
    fn item_failed(&mut self, id: u32, _msg: &str) {
        self.failed.push(id);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn get_major_matches_the_page() {
    let src = FixtureSource::new();
    let recs = scrape::get_major(&src, "sic_manual.display?id=1&tab=group").unwrap();
    assert_eq!(recs.len(), 26);
    assert_eq!(recs[16].full_desc, "SIC4 0172: Grapes");
}

#[test]
fn get_major_propagates_fetch_errors() {
    let src = FixtureSource::new();
    let err = scrape::get_major(&src, &scrape::major_path(3)).unwrap_err();
    assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
}

#[test]
fn list_majors_reads_divisions_in_order() {
    let src = FixtureSource::new();
    let divs = scrape::list_majors(&src).unwrap();
    assert_eq!(divs.len(), 2);
    assert_eq!(divs[0].label, "Division A: Agriculture, Forestry, And Fishing");
    let ids: Vec<u32> = divs[0].majors.iter().map(|m| m.id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(divs[0].majors[1].label, "Major Group 02: Agriculture Production Livestock And Animal Specialties");
    assert_eq!(divs[1].label, "Division B: Mining");
    assert_eq!(divs[1].majors[0].path, "sic_manual.display?id=4&tab=group");
}

#[test]
fn ids_are_scraped_in_the_given_order() {
    let src = FixtureSource::new();
    let mut rec = Recorder::default();
    let recs = scrape::collect(&src, &opts(MajorSelector::Ids(vec![2, 1])), Some(&mut rec)).unwrap();

    assert_eq!(recs.len(), 5 + 26);
    assert_eq!(recs[0].parent_desc, "Major Group 02: Agriculture Production Livestock And Animal Specialties");
    assert_eq!(recs[5].full_desc, "Industry Group 011: Cash Grains");
    assert_eq!(rec.total, 2);
    assert_eq!(rec.done.iter().map(|(id, _)| *id).collect::<Vec<_>>(), [2, 1]);
    assert!(rec.finished);
}

#[test]
fn all_puts_majors_under_their_division() {
    let src = FixtureSource::new();
    let mut rec = Recorder::default();
    let recs = scrape::collect(&src, &opts(MajorSelector::All), Some(&mut rec)).unwrap();

    // A: 01 (1 + 26), 02 (1 + 5), 07 failed; B: 10 (1 + 2)
    assert_eq!(recs.len(), 36);
    assert_eq!(
        recs[0],
        Record::new("Major Group 01: Agricultural Production Crops", "Division A: Agriculture, Forestry, And Fishing")
    );
    assert_eq!(recs[1].parent_desc, "Major Group 01: Agricultural Production Crops");
    assert_eq!(
        recs[33],
        Record::new("Major Group 10: Metal Mining", "Division B: Mining")
    );
    assert_eq!(recs[35], Record::new("SIC4 1011: Iron Ores", "Industry Group 101: Iron Ores"));

    assert_eq!(rec.total, 4);
    assert_eq!(rec.failed, [3]);
    assert_eq!(rec.done.len(), 3);
}

#[test]
fn failing_index_is_an_error() {
    let src = FixtureSource { pages: HashMap::new() };
    let res = scrape::collect(&src, &opts(MajorSelector::All), None);
    assert!(matches!(res, Err(ScrapeError::Status { status: 404, .. })));
}

#[test]
fn failed_single_major_gives_empty_records() {
    let src = FixtureSource::new();
    let mut rec = Recorder::default();
    let recs = scrape::collect(&src, &opts(MajorSelector::One(3)), Some(&mut rec)).unwrap();
    assert!(recs.is_empty());
    assert_eq!(rec.failed, [3]);
}
