//! Tests for peak metrics
//!
//! Tests cover:
//! - Amplitudes and inter-spike periods
//! - Summary presence rules
//! - Index offsets for sub-ranges
//! - Mismatched peak and base counts

use crate::common::synthetic::uniform_times;
use peakfinder::analysis::{compute_metrics, detect, AnalysisError, Extremum};

// ============================================
// Report Content Tests
// ============================================

#[test]
fn test_two_peak_report() {
    let times = uniform_times(30, 1.0);
    let peaks = [Extremum::new(10, 9.0), Extremum::new(25, 12.0)];
    let bases = [Extremum::new(8, 2.0), Extremum::new(22, 3.0)];

    let report = compute_metrics(&peaks, &bases, &times, 0).unwrap();

    let amplitudes: Vec<f64> = report.rows.iter().map(|r| r.amplitude).collect();
    assert_eq!(amplitudes, vec![7.0, 9.0]);
    assert_eq!(report.isps(), vec![15.0]);

    let summary = report.summary_or_err().unwrap();
    assert_eq!(summary.mean_isp, 15.0);
    assert_eq!(summary.mean_amplitude, 8.0);
    assert!((summary.frequency_hz - 0.0667).abs() < 1e-4);
    assert!((summary.frequency_per_min - 4.0).abs() < 1e-12);
}

#[test]
fn test_rows_are_numbered_from_one() {
    let times = uniform_times(10, 0.1);
    let peaks = [Extremum::new(1, 1.0), Extremum::new(4, 1.0), Extremum::new(8, 1.0)];
    let bases = [Extremum::new(0, 0.0), Extremum::new(3, 0.0), Extremum::new(7, 0.0)];

    let report = compute_metrics(&peaks, &bases, &times, 0).unwrap();
    let numbers: Vec<usize> = report.rows.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(report.rows[0].isp, None);
    assert_eq!(report.isps().len(), 2);
}

// ============================================
// Summary Presence Tests
// ============================================

#[test]
fn test_single_peak_has_no_summary() {
    let times = uniform_times(5, 1.0);
    let report =
        compute_metrics(&[Extremum::new(2, 5.0)], &[Extremum::new(1, 1.0)], &times, 0).unwrap();

    assert_eq!(report.rows.len(), 1);
    assert!(report.summary.is_none());
    assert!(matches!(
        report.summary_or_err(),
        Err(AnalysisError::InsufficientData { needed: 2, got: 1, .. })
    ));
}

#[test]
fn test_zero_isp_has_no_summary() {
    // Duplicate timestamps give a zero period
    let times = [0.0, 1.0, 1.0, 2.0];
    let peaks = [Extremum::new(1, 3.0), Extremum::new(2, 3.0)];
    let bases = [Extremum::new(0, 0.0), Extremum::new(3, 0.0)];

    let report = compute_metrics(&peaks, &bases, &times, 0).unwrap();
    assert_eq!(report.isps(), vec![0.0]);
    assert!(report.summary.is_none());
}

#[test]
fn test_empty_input_gives_empty_report() {
    let report = compute_metrics(&[], &[], &[0.0, 1.0], 0).unwrap();
    assert!(report.rows.is_empty());
    assert!(report.summary.is_none());
}

// ============================================
// Offset and Consistency Tests
// ============================================

#[test]
fn test_index_offset_shifts_times() {
    let times = uniform_times(20, 0.5);
    let peaks = [Extremum::new(0, 4.0), Extremum::new(4, 4.0)];
    let bases = [Extremum::new(1, 1.0), Extremum::new(5, 1.0)];

    let report = compute_metrics(&peaks, &bases, &times, 10).unwrap();
    assert_eq!(report.rows[0].peak_time, 5.0);
    assert_eq!(report.rows[0].base_time, 5.5);
    assert_eq!(report.rows[1].peak_time, 7.0);
    assert_eq!(report.isps(), vec![2.0]);
}

#[test]
fn test_offset_past_time_axis_errors() {
    let times = uniform_times(5, 1.0);
    let result = compute_metrics(&[Extremum::new(3, 1.0)], &[Extremum::new(3, 0.0)], &times, 4);
    assert!(matches!(result, Err(AnalysisError::ComputationError(_))));
}

#[test]
fn test_more_peaks_than_bases_errors() {
    let times = uniform_times(10, 1.0);
    let peaks = [Extremum::new(1, 1.0), Extremum::new(4, 1.0), Extremum::new(7, 1.0)];
    let bases = [Extremum::new(0, 0.0), Extremum::new(3, 0.0)];

    assert_eq!(
        compute_metrics(&peaks, &bases, &times, 0),
        Err(AnalysisError::InsufficientData {
            what: "bases",
            needed: 3,
            got: 2
        })
    );
}

#[test]
fn test_disabled_bases_cannot_be_reported() {
    let values = [0.0, 3.0, 0.0, 3.0, 0.0];
    let times = uniform_times(values.len(), 1.0);
    let result = detect(&values, 1.0, 0).unwrap();

    assert_eq!(result.maxima.len(), 2);
    assert!(compute_metrics(&result.maxima, &result.bases, &times, 0).is_err());
}
