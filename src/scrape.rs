// src/scrape.rs
use std::thread;

use crate::{
    config::consts::{ MAJOR_PATH_PREFIX, MAJOR_PATH_SUFFIX, MANUAL_INDEX_PATH },
    config::options::{ MajorSelector, ScrapeOptions },
    core::PageSource,
    error::Result,
    progress::Progress,
    sic::{ self, Level, Node, Record },
    specs::{ major, manual::{ self, DivisionRef } },
};

/// Path of the Major Group page with manual id `id`.
pub fn major_path(id: u32) -> String {
    format!("{MAJOR_PATH_PREFIX}{id}{MAJOR_PATH_SUFFIX}")
}

/// Fetch a Major Group page and parse it into a tree.
pub fn get_major_tree(src: &dyn PageSource, path: &str) -> Result<Node> {
    let doc = src.fetch(path)?;
    major::parse(&doc)
}

/// Fetch a Major Group page and flatten it: one record per Industry Group
/// and SIC4 entry, each paired with its direct parent's label.
pub fn get_major(src: &dyn PageSource, path: &str) -> Result<Vec<Record>> {
    let tree = get_major_tree(src, path)?;
    Ok(sic::flatten(&tree))
}

/// Divisions and their Major Group pages, from the manual index.
pub fn list_majors(src: &dyn PageSource) -> Result<Vec<DivisionRef>> {
    let doc = src.fetch(MANUAL_INDEX_PATH)?;
    manual::parse(&doc)
}

/// Scrape the selected Major Groups, one page at a time, into records.
///
/// `All` reads the index first and emits each Major Group under its Division;
/// `One`/`Ids` emit the Industry Group and SIC4 records of each page only.
/// A page that fails is reported and skipped; a failing index is an error.
pub fn collect(
    src: &dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Record>> {
    let records = match &opts.majors {
        MajorSelector::All => {
            if let Some(p) = progress.as_deref_mut() {
                p.log("Reading manual index…");
            }
            let divisions = list_majors(src)?;
            collect_divisions(src, opts, &divisions, progress.as_deref_mut())
        }
        MajorSelector::One(id) => collect_ids(src, opts, &[*id], progress.as_deref_mut()),
        MajorSelector::Ids(ids) => collect_ids(src, opts, ids, progress.as_deref_mut()),
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Scrape: {} records", records.len());
    Ok(records)
}

fn collect_ids(
    src: &dyn PageSource,
    opts: &ScrapeOptions,
    ids: &[u32],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<Record> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let mut records = Vec::new();
    for (i, &id) in ids.iter().enumerate() {
        if i > 0 {
            thread::sleep(opts.delay_for(id));
        }
        if let Some(tree) = fetch_one(src, id, &major_path(id), progress.as_deref_mut()) {
            records.extend(sic::flatten(&tree));
        }
    }
    records
}

fn collect_divisions(
    src: &dyn PageSource,
    opts: &ScrapeOptions,
    divisions: &[DivisionRef],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<Record> {
    let total = divisions.iter().map(|d| d.majors.len()).sum();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut records = Vec::new();
    let mut first = true;
    for div in divisions {
        let mut division = Node::new(div.label.as_str(), Level::Division);
        for m in &div.majors {
            if !first {
                thread::sleep(opts.delay_for(m.id));
            }
            first = false;
            if let Some(tree) = fetch_one(src, m.id, &m.path, progress.as_deref_mut()) {
                division.children.push(tree);
            }
        }
        records.extend(sic::flatten(&division));
    }
    records
}

fn fetch_one(
    src: &dyn PageSource,
    id: u32,
    path: &str,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Option<Node> {
    match get_major_tree(src, path) {
        Ok(tree) => {
            logd!("Major Group id {id}: {} ({} nodes)", tree.label, tree.descendant_count());
            if let Some(p) = progress {
                p.item_done(id, &tree.label);
            }
            Some(tree)
        }
        Err(e) => {
            loge!("Major Group id {id}: {e}");
            if let Some(p) = progress {
                p.item_failed(id, &e.to_string());
            }
            None
        }
    }
}
