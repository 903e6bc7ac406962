// tests/export.rs
//
// Record export (CSV/TSV/JSON) and ExportOptions path logic.
//
use std::fs;
use std::path::Path;

use sic_scrape::{
    config::options::{ExportFormat, ExportOptions},
    csv::records_to_string,
    file,
    sic::Record,
};

fn sample() -> Vec<Record> {
    vec![
        Record::new("Industry Group 019: General Farms, Primarily Crop", "Major Group 01: Agricultural Production Crops"),
        Record::new("SIC4 0191: General Farms, Primarily Crop", "Industry Group 019: General Farms, Primarily Crop"),
    ]
}

#[test]
fn csv_quotes_labels_with_commas() {
    let out = records_to_string(&sample(), ExportFormat::Csv, true).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "full_desc,parent_desc");
    assert_eq!(
        lines[2],
        "\"SIC4 0191: General Farms, Primarily Crop\",\"Industry Group 019: General Farms, Primarily Crop\""
    );
}

#[test]
fn tsv_without_headers() {
    let out = records_to_string(&sample(), ExportFormat::Tsv, false).unwrap();
    assert_eq!(out.lines().count(), 2);
    assert!(out.starts_with("Industry Group 019: General Farms, Primarily Crop\tMajor Group 01"));
}

#[test]
fn json_is_an_array_of_records() {
    let out = records_to_string(&sample(), ExportFormat::Json, true).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 2);
    assert_eq!(v[1]["full_desc"], "SIC4 0191: General Farms, Primarily Crop");
    assert_eq!(v[1]["parent_desc"], "Industry Group 019: General Farms, Primarily Crop");
}

#[test]
fn write_export_creates_dirs_and_uses_format_ext() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.set_path(&dir.path().join("nested/major_01.csv").to_string_lossy());

    let path = file::write_export(&export, &sample()).unwrap();
    assert_eq!(path, dir.path().join("nested/major_01.tsv"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("full_desc\tparent_desc\n"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn default_out_path() {
    let mut export = ExportOptions::default();
    assert_eq!(export.out_path(), Path::new("out").join("sic.csv"));
    export.format = ExportFormat::Json;
    assert_eq!(export.out_path(), Path::new("out").join("sic.json"));
}

#[test]
fn export_into_a_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let target = blocker.join("out.csv");
    let res = file::write_records_to_path(&target, &sample(), ExportFormat::Csv, false);
    assert!(res.is_err());
}

#[test]
fn directory_target_gets_label_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = file::resolve_out_path(dir.path(), "Major Group 01: Agricultural Production Crops", ExportFormat::Tsv);
    assert_eq!(path, dir.path().join("Major_Group_01_Agricultural_Production_Crops.tsv"));

    file::write_records_to_path(&path, &sample(), ExportFormat::Tsv, false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
}

#[test]
fn file_target_is_used_as_given() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("grains.csv");
    assert_eq!(file::resolve_out_path(&target, "Major Group 01: Agricultural Production Crops", ExportFormat::Json), target);

    let unnamed = file::resolve_out_path(dir.path(), ":::", ExportFormat::Json);
    assert_eq!(unnamed, dir.path().join("sic.json"));
}
