//! Peak metrics: amplitudes, inter-spike periods (ISP) and their averages.

use serde::Serialize;

use super::{AnalysisError, Base, Peak};

/// One line of a peak report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeakRow {
    /// 1-based peak number
    pub number: usize,
    pub peak_time: f64,
    pub base_time: f64,
    pub base: f64,
    pub peak: f64,
    /// Peak height above its base
    pub amplitude: f64,
    /// Time since the previous peak (absent for the first one)
    pub isp: Option<f64>,
}

/// Averages over a whole report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeakSummary {
    pub mean_amplitude: f64,
    pub mean_isp: f64,
    /// Spike frequency in s^-1
    pub frequency_hz: f64,
    /// Spike frequency in min^-1
    pub frequency_per_min: f64,
}

/// Metrics for the peaks of one analysed range
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PeakReport {
    pub rows: Vec<PeakRow>,
    /// Present only when at least two peaks give a non-zero mean ISP
    pub summary: Option<PeakSummary>,
}

impl PeakReport {
    /// Inter-spike periods in peak order
    pub fn isps(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.isp).collect()
    }

    /// Get the summary, or the reason it could not be computed
    pub fn summary_or_err(&self) -> Result<&PeakSummary, AnalysisError> {
        self.summary.as_ref().ok_or(AnalysisError::InsufficientData {
            what: "peaks",
            needed: 2,
            got: self.rows.len(),
        })
    }
}

/// Build the report for `peaks` and their matching `bases`.
///
/// Peak and base indices are relative to a slice that starts at
/// `index_offset` within `times`.
pub fn compute_metrics(
    peaks: &[Peak],
    bases: &[Base],
    times: &[f64],
    index_offset: usize,
) -> Result<PeakReport, AnalysisError> {
    if peaks.len() != bases.len() {
        return Err(AnalysisError::InsufficientData {
            what: "bases",
            needed: peaks.len(),
            got: bases.len(),
        });
    }

    let time_at = |index: usize| -> Result<f64, AnalysisError> {
        let position = index + index_offset;
        times.get(position).copied().ok_or_else(|| {
            AnalysisError::ComputationError(format!(
                "sample {} is outside a time axis of {} samples",
                position,
                times.len()
            ))
        })
    };

    let mut rows = Vec::with_capacity(peaks.len());
    let mut previous_time: Option<f64> = None;

    for (i, (peak, base)) in peaks.iter().zip(bases).enumerate() {
        let peak_time = time_at(peak.index)?;
        let base_time = time_at(base.index)?;

        rows.push(PeakRow {
            number: i + 1,
            peak_time,
            base_time,
            base: base.value,
            peak: peak.value,
            amplitude: peak.value - base.value,
            isp: previous_time.map(|t| peak_time - t),
        });
        previous_time = Some(peak_time);
    }

    let mut report = PeakReport {
        rows,
        summary: None,
    };
    report.summary = summarize(&report);
    Ok(report)
}

fn summarize(report: &PeakReport) -> Option<PeakSummary> {
    let rows = &report.rows;
    if rows.len() < 2 {
        return None;
    }

    let isps = report.isps();
    let mean_isp = isps.iter().sum::<f64>() / isps.len() as f64;
    if mean_isp == 0.0 || !mean_isp.is_finite() {
        tracing::warn!("Mean inter-spike period is {}, skipping averages", mean_isp);
        return None;
    }

    let mean_amplitude = rows.iter().map(|row| row.amplitude).sum::<f64>() / rows.len() as f64;

    Some(PeakSummary {
        mean_amplitude,
        mean_isp,
        frequency_hz: 1.0 / mean_isp,
        frequency_per_min: 60.0 / mean_isp,
    })
}
