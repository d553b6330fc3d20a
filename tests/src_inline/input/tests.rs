use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::{load_events, load_report_data};
use crate::error::ReportError;
use crate::model::ReportEvent;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("devmgt_report_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

const REPORT_JSON: &str = r#"{
    "duration": ["2019-01-01", "2019-01-31"],
    "segments": [{"item": "BYOD", "count": 30}, {"item": "COPE", "count": 10}]
}"#;

#[test]
fn test_load_report_data_plain() {
    let dir = make_temp_dir();
    let path = dir.join("report.json");
    fs::write(&path, REPORT_JSON).unwrap();

    let data = load_report_data(&path).unwrap();
    assert_eq!(data.start(), "2019-01-01");
    assert_eq!(data.end(), "2019-01-31");
    assert_eq!(data.segments.len(), 2);
    assert_eq!(data.total(), 40);
}

#[test]
fn test_load_report_data_gz_matches_plain() {
    let dir = make_temp_dir();
    let plain = dir.join("report.json");
    let gz = dir.join("report.json.gz");
    fs::write(&plain, REPORT_JSON).unwrap();
    write_gz(&gz, REPORT_JSON);

    assert_eq!(
        load_report_data(&plain).unwrap(),
        load_report_data(&gz).unwrap()
    );
}

#[test]
fn test_segments_optional() {
    let dir = make_temp_dir();
    let path = dir.join("report.json");
    fs::write(&path, r#"{"duration": ["2019-02-01", "2019-02-28"]}"#).unwrap();
    let data = load_report_data(&path).unwrap();
    assert!(data.segments.is_empty());
    assert_eq!(data.total(), 0);
}

#[test]
fn test_empty_duration_bound_rejected() {
    let dir = make_temp_dir();
    let path = dir.join("report.json");
    fs::write(&path, r#"{"duration": ["2019-02-01", " "]}"#).unwrap();
    assert!(matches!(
        load_report_data(&path),
        Err(ReportError::InvalidInput(_))
    ));
}

#[test]
fn test_duration_needs_two_bounds() {
    let dir = make_temp_dir();
    let path = dir.join("report.json");
    fs::write(&path, r#"{"duration": ["2019-02-01"]}"#).unwrap();
    assert!(matches!(load_report_data(&path), Err(ReportError::Json(_))));
}

#[test]
fn test_load_events_gz() {
    let dir = make_temp_dir();
    let path = dir.join("events.tsv.gz");
    write_gz(&path, "chart\tBYOD\nstatus\tACTIVE\n");
    let events = load_events(&path).unwrap();
    assert_eq!(
        events,
        vec![
            ReportEvent::ChartSegmentClicked("BYOD".to_string()),
            ReportEvent::StatusChanged(Some("ACTIVE".to_string())),
        ]
    );
}

#[test]
fn test_duplicate_segments_kept_as_given() {
    let dir = make_temp_dir();
    let path = dir.join("report.json");
    fs::write(
        &path,
        r#"{"duration": ["2019-01-01", "2019-01-31"],
            "segments": [{"item": "BYOD", "count": 3}, {"item": "BYOD", "count": 4}]}"#,
    )
    .unwrap();
    let data = load_report_data(&path).unwrap();
    assert_eq!(data.segments.len(), 2);
    assert_eq!(data.total(), 7);
}
