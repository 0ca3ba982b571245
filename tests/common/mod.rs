//! Common test utilities shared across all test modules
//!
//! This module provides synthetic signal generators, fixture file writers
//! and assertion helpers for analysis results.

#![allow(dead_code)]

use std::path::PathBuf;

/// Reference series with two peaks and two troughs
pub const REFERENCE_SERIES: [f64; 17] = [
    0.0, 0.0, 0.0, 2.0, 1.0, 1.0, 0.0, -2.0, 0.0, 0.0, 1.0, 2.0, 0.0, 0.0, 0.0, -2.0, 0.0,
];

/// Write `content` to `name` inside a fresh temporary directory.
///
/// The directory is returned so it lives as long as the test needs it.
pub fn write_fixture(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write fixture '{}': {}", path.display(), e));
    (dir, path)
}

/// Test data generators for synthetic tests
pub mod synthetic {
    /// Create a time array with uniform spacing
    pub fn uniform_times(count: usize, interval: f64) -> Vec<f64> {
        (0..count).map(|i| i as f64 * interval).collect()
    }

    /// Flat baseline with a spike of `height` every `period` samples,
    /// starting at `period / 2`
    pub fn spike_train(count: usize, period: usize, height: f64) -> Vec<f64> {
        (0..count)
            .map(|i| if i % period == period / 2 { height } else { 0.0 })
            .collect()
    }

    /// Sine wave of the given amplitude and period in samples
    pub fn sine(count: usize, period: f64, amplitude: f64) -> Vec<f64> {
        (0..count)
            .map(|i| amplitude * (2.0 * std::f64::consts::PI * i as f64 / period).sin())
            .collect()
    }

    /// Render a headerless CSV with one time column and the given series
    pub fn csv_text(times: &[f64], series: &[Vec<f64>]) -> String {
        let mut out = String::new();
        for (i, t) in times.iter().enumerate() {
            out.push_str(&t.to_string());
            for s in series {
                out.push(',');
                out.push_str(&s[i].to_string());
            }
            out.push('\n');
        }
        out
    }
}

/// Assertion helpers for common test patterns
pub mod assertions {
    use peakfinder::analysis::{AnalysisResult, Extremum};

    /// Collect `(index, value)` pairs for compact comparisons
    pub fn pairs(extrema: &[Extremum]) -> Vec<(usize, f64)> {
        extrema.iter().map(|e| (e.index, e.value)).collect()
    }

    /// Assert that indices of each extremum kind strictly increase
    pub fn assert_strictly_increasing(result: &AnalysisResult) {
        for (kind, list) in [("maxima", &result.maxima), ("minima", &result.minima)] {
            for (i, window) in list.windows(2).enumerate() {
                assert!(
                    window[0].index < window[1].index,
                    "{} at position {} should be strictly increasing: {} < {}",
                    kind,
                    i,
                    window[0].index,
                    window[1].index
                );
            }
        }
    }

    /// Assert that maxima and minima alternate, starting with a maximum
    pub fn assert_alternating(result: &AnalysisResult) {
        let maxima = &result.maxima;
        let minima = &result.minima;
        assert!(
            maxima.len() == minima.len() || maxima.len() == minima.len() + 1,
            "Expected alternating extrema, got {} maxima and {} minima",
            maxima.len(),
            minima.len()
        );
        for (i, min) in minima.iter().enumerate() {
            assert!(maxima[i].index < min.index);
            if let Some(next) = maxima.get(i + 1) {
                assert!(min.index < next.index);
            }
        }
    }
}
