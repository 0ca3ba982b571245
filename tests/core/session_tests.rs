//! Tests for the analysis session lifecycle
//!
//! Tests cover:
//! - Initialization over multiple series
//! - Reset with new parameters
//! - Per-range diagnostics
//! - Report generation

use crate::common::synthetic::*;
use peakfinder::analysis::{AnalysisError, CutIndices};
use peakfinder::parsers::Dataset;
use peakfinder::report::render_text;
use peakfinder::session::{AnalysisParams, AnalysisSession, Diagnostic, Segment};

fn two_series_dataset() -> Dataset {
    let times = uniform_times(100, 0.1);
    Dataset::from_columns(
        times,
        vec![spike_train(100, 10, 5.0), spike_train(100, 20, 2.0)],
    )
}

fn params(delta: f64, numnei: usize, a: f64, b: f64, c: f64) -> AnalysisParams {
    AnalysisParams {
        delta,
        numnei,
        a,
        b,
        c,
    }
}

// ============================================
// Initialization Tests
// ============================================

#[test]
fn test_initialize_analyses_every_series() {
    let session =
        AnalysisSession::initialize(two_series_dataset(), params(1.0, 3, 0.0, 0.0, 0.0)).unwrap();

    assert_eq!(session.results().len(), 2);
    assert_eq!(session.results()[0].name, "Series 1");
    assert_eq!(session.results()[1].name, "Series 2");

    // Whole series in A-B, nothing left for B-C
    let first = &session.results()[0];
    assert_eq!(first.ranges[0].segment, Segment::AB);
    assert_eq!(first.ranges[0].range, 0..99);
    assert_eq!(first.ranges[0].result.maxima.len(), 10);
    assert_eq!(first.ranges[1].diagnostic, Some(Diagnostic::EmptyRange));
}

#[test]
fn test_split_ranges_use_slice_relative_indices() {
    let session =
        AnalysisSession::initialize(two_series_dataset(), params(1.0, 2, 0.0, 5.0, 0.0)).unwrap();

    let ranges = &session.results()[0].ranges;
    assert_eq!(ranges[0].range, 0..50);
    assert_eq!(ranges[1].range, 50..99);

    // Spikes at 55, 65, ... sit at 5, 15, ... inside the second range
    let second: Vec<usize> = ranges[1].result.maxima.iter().map(|p| p.index).collect();
    assert_eq!(second, vec![5, 15, 25, 35, 45]);
}

#[test]
fn test_no_peaks_diagnostic() {
    let times = uniform_times(20, 1.0);
    let dataset = Dataset::from_columns(times, vec![vec![1.0; 20]]);
    let session = AnalysisSession::initialize(dataset, AnalysisParams::default()).unwrap();

    assert_eq!(
        session.results()[0].ranges[0].diagnostic,
        Some(Diagnostic::NoPeaks)
    );
}

// ============================================
// Reset Tests
// ============================================

#[test]
fn test_reset_replaces_results() {
    let mut session =
        AnalysisSession::initialize(two_series_dataset(), params(1.0, 3, 0.0, 0.0, 0.0)).unwrap();
    let before = session.results()[1].ranges[0].result.maxima.len();

    // Second series spikes only reach 2.0
    session.reset(params(3.0, 3, 0.0, 0.0, 0.0)).unwrap();
    let after = session.results()[1].ranges[0].result.maxima.len();

    assert!(before > 0);
    assert_eq!(after, 0);
    assert_eq!(session.params().delta, 3.0);
}

#[test]
fn test_reset_is_repeatable() {
    let mut session =
        AnalysisSession::initialize(two_series_dataset(), params(1.0, 3, 1.0, 4.0, 8.0)).unwrap();
    let first = session.results().to_vec();

    session.reset(params(1.0, 3, 1.0, 4.0, 8.0)).unwrap();
    assert_eq!(session.results(), first.as_slice());
}

#[test]
fn test_failed_reset_clears_cut_indices() {
    let mut session =
        AnalysisSession::initialize(two_series_dataset(), params(1.0, 3, 1.0, 4.0, 8.0)).unwrap();
    assert_ne!(session.cuts(), CutIndices::default());

    assert!(session.reset(params(0.0, 3, 1.0, 4.0, 8.0)).is_err());
    assert!(session.results().is_empty());
    assert_eq!(session.cuts(), CutIndices::default());
    assert_eq!(session.cut_times(), [Some(0.0), Some(0.0), Some(0.0)]);
}

#[test]
fn test_invalid_delta_is_rejected() {
    let result = AnalysisSession::initialize(two_series_dataset(), params(-1.0, 3, 0.0, 0.0, 0.0));
    assert!(matches!(result, Err(AnalysisError::InvalidParameter(_))));
}

// ============================================
// Report Tests
// ============================================

#[test]
fn test_reports_cover_every_series_and_range() {
    let session =
        AnalysisSession::initialize(two_series_dataset(), params(1.0, 3, 0.0, 5.0, 0.0)).unwrap();
    let reports = session.reports();

    assert_eq!(reports.len(), 4);
    assert_eq!(
        reports.iter().map(|r| r.data_set).collect::<Vec<_>>(),
        vec![1, 1, 2, 2]
    );

    let report = reports[0].report.as_ref().unwrap();
    assert_eq!(report.rows.len(), 5);
    let summary = report.summary.as_ref().unwrap();
    assert!((summary.mean_isp - 1.0).abs() < 1e-9);
    assert!((summary.frequency_hz - 1.0).abs() < 1e-9);
    assert_eq!(summary.mean_amplitude, 5.0);
}

#[test]
fn test_reports_without_base_search_use_peaks_as_bases() {
    // Spikes at 5, 15, 25, 35
    let dataset = Dataset::from_columns(uniform_times(40, 1.0), vec![spike_train(40, 10, 4.0)]);
    let session = AnalysisSession::initialize(dataset, params(1.0, 0, 0.0, 0.0, 0.0)).unwrap();

    assert!(session.results()[0].ranges[0].result.bases.is_empty());

    let reports = session.reports();
    let report = reports[0].report.as_ref().unwrap();
    assert_eq!(report.rows.len(), 4);
    assert!(report.rows.iter().all(|r| r.amplitude == 0.0));
    assert!(report.rows.iter().all(|r| r.base_time == r.peak_time));
    assert_eq!(report.isps(), vec![10.0, 10.0, 10.0]);

    let summary = report.summary_or_err().unwrap();
    assert_eq!(summary.mean_isp, 10.0);
    assert!((summary.frequency_hz - 0.1).abs() < 1e-12);

    let text = render_text(&reports);
    assert!(text.contains("Peak    4 |"));
    assert!(!text.contains("Error"));
}

#[test]
fn test_cut_times() {
    let session =
        AnalysisSession::initialize(two_series_dataset(), params(1.0, 3, 0.25, 5.0, 0.0)).unwrap();
    let [a, b, c] = session.cut_times();

    assert!((a.unwrap() - 0.3).abs() < 1e-9);
    assert!((b.unwrap() - 5.0).abs() < 1e-9);
    assert!((c.unwrap() - 9.9).abs() < 1e-9);
}
