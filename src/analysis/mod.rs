//! Analysis module for peak detection over time series.
//!
//! The algorithms here are pure functions over in-memory slices:
//! - [`extrema`] - hysteresis extrema tracker and the windowed base lookup
//! - [`range`] - mapping of A/B/C time cut points onto sample indices
//! - [`metrics`] - amplitudes, inter-spike periods and their averages
//!
//! [`crate::session::AnalysisSession`] drives them over every series of a
//! loaded dataset.

pub mod extrema;
pub mod metrics;
pub mod range;

use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

pub use extrema::{detect, detect_with_axis, lowest_in_window, place_on_axis};
pub use metrics::{compute_metrics, PeakReport, PeakRow, PeakSummary};
pub use range::{map_cuts_to_indices, CutIndices};

/// Errors that can occur during analysis
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Invalid parameter configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Not enough (or inconsistent) data for the requested computation
    #[error("Insufficient data: need {needed} {what}, got {got}")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        got: usize,
    },
    /// General computation error
    #[error("Computation error: {0}")]
    ComputationError(String),
}

/// A located sample: a peak, a trough or a base.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Extremum {
    /// Position in the analysed slice
    pub index: usize,
    pub value: f64,
}

impl Extremum {
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }
}

/// Local maximum confirmed by the tracker
pub type Peak = Extremum;
/// Local minimum confirmed by the tracker
pub type Trough = Extremum;
/// Lowest sample in the neighbourhood of a peak
pub type Base = Extremum;

/// Output of one detection run over one slice of one series
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub maxima: Vec<Peak>,
    pub minima: Vec<Trough>,
    /// One entry per maximum, or empty when base search is disabled
    pub bases: Vec<Base>,
}

impl AnalysisResult {
    /// Check if the run confirmed no peak at all
    pub fn is_empty(&self) -> bool {
        self.maxima.is_empty()
    }
}

/// Helper function to measure analysis execution time
pub fn timed_analyze<F, T>(f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_millis() as u64;
    (result, elapsed)
}

/// Helper to validate the hysteresis threshold
pub fn require_positive_delta(delta: f64) -> Result<(), AnalysisError> {
    if !delta.is_finite() {
        return Err(AnalysisError::InvalidParameter(format!(
            "delta must be a finite number, got {}",
            delta
        )));
    }
    if delta <= 0.0 {
        return Err(AnalysisError::InvalidParameter(format!(
            "delta must be positive, got {}",
            delta
        )));
    }
    Ok(())
}
