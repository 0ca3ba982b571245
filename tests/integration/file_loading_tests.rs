//! File loading integration tests
//!
//! Tests for the load, analyse and report cycle the binary performs.

use crate::common::synthetic::*;
use crate::common::write_fixture;
use peakfinder::parsers::{load_file, CsvOptions};
use peakfinder::report::{append_csv, render_text, report_path};
use peakfinder::session::{AnalysisParams, AnalysisSession};

fn spike_file() -> (tempfile::TempDir, std::path::PathBuf) {
    let times = uniform_times(200, 0.05);
    let content = csv_text(
        &times,
        &[spike_train(200, 20, 3.0), sine(200, 40.0, 1.0)],
    );
    write_fixture("spikes.csv", &content)
}

#[test]
fn test_file_to_text_report() {
    let (_dir, path) = spike_file();
    let dataset = load_file(&path, &CsvOptions::default()).unwrap();
    let params = AnalysisParams {
        delta: 0.5,
        numnei: 4,
        a: 0.0,
        b: 5.0,
        c: 0.0,
    };
    let session = AnalysisSession::initialize(dataset, params).unwrap();
    let text = render_text(&session.reports());

    assert!(text.contains("Data set  1 (Series 1)"));
    assert!(text.contains("Data set  2 (Series 2)"));
    assert!(text.contains("[A-B]"));
    assert!(text.contains("[B-C]"));
    assert!(text.contains("Average"));
}

#[test]
fn test_report_file_accumulates_runs() {
    let (dir, path) = spike_file();
    let dataset = load_file(&path, &CsvOptions::default()).unwrap();
    let session = AnalysisSession::initialize(dataset, AnalysisParams::default()).unwrap();

    let out = report_path(&dir.path().join("output"), session.dataset());
    assert!(out.ends_with("output/spikes_out.csv"));

    append_csv(&out, &session.reports()).unwrap();
    let once = std::fs::read_to_string(&out).unwrap();
    append_csv(&out, &session.reports()).unwrap();
    let twice = std::fs::read_to_string(&out).unwrap();

    assert!(!once.is_empty());
    assert_eq!(twice.len(), once.len() * 2);
    assert!(twice.starts_with(&once));
}

#[test]
fn test_empty_second_range_is_reported_not_fatal() {
    let (_dir, path) = spike_file();
    let dataset = load_file(&path, &CsvOptions::default()).unwrap();
    let session = AnalysisSession::initialize(dataset, AnalysisParams::default()).unwrap();

    let text = render_text(&session.reports());
    assert!(text.contains("Warning: empty range"));
}
