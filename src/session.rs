//! Analysis session: the loaded dataset, the current parameter set and the
//! detection results for every series.
//!
//! The session is a small state machine driven by [`AnalysisSession::initialize`]
//! and [`AnalysisSession::reset`]. Every reset recomputes everything; there is
//! no incremental update. Presenters (the report printer and the viewer) only
//! read from it.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum::{AsRefStr, Display};

use crate::analysis::{
    compute_metrics, detect, lowest_in_window, map_cuts_to_indices, require_positive_delta,
    timed_analyze, AnalysisError, AnalysisResult, Base, CutIndices, PeakReport,
};
use crate::parsers::Dataset;

/// Parameters of one analysis run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Hysteresis threshold confirming an extremum
    pub delta: f64,
    /// Half-width of the base search window, 0 disables bases
    pub numnei: usize,
    /// Start of the first analysed range (time)
    pub a: f64,
    /// End of the first / start of the second range (time), 0 = last sample
    pub b: f64,
    /// End of the second range (time), 0 = last sample
    pub c: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            delta: 0.2,
            numnei: 5,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        }
    }
}

/// Which of the two analysed ranges a result belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
pub enum Segment {
    #[strum(serialize = "A-B")]
    AB,
    #[strum(serialize = "B-C")]
    BC,
}

/// Non-fatal findings about a range
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
pub enum Diagnostic {
    /// The cut points leave no samples in this range
    #[strum(serialize = "empty range")]
    EmptyRange,
    /// Samples were analysed but no peak was confirmed
    #[strum(serialize = "no peaks found")]
    NoPeaks,
}

/// Detection output for one range of one series
#[derive(Clone, Debug, PartialEq)]
pub struct RangeAnalysis {
    pub segment: Segment,
    /// Sample indices covered, relative to the whole series
    pub range: Range<usize>,
    /// Extremum indices are relative to `range.start`
    pub result: AnalysisResult,
    pub diagnostic: Option<Diagnostic>,
}

/// Detection output for one series
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesAnalysis {
    pub name: String,
    pub ranges: [RangeAnalysis; 2],
}

/// Metrics for one range of one series, ready for presentation
#[derive(Clone, Debug)]
pub struct SegmentReport {
    /// 1-based data set number
    pub data_set: usize,
    pub series_name: String,
    pub segment: Segment,
    pub diagnostic: Option<Diagnostic>,
    /// Metrics, or why they could not be computed for this range
    pub report: Result<PeakReport, AnalysisError>,
}

/// Owner of the dataset, parameters and cached results
#[derive(Clone, Debug, Default)]
pub struct AnalysisSession {
    dataset: Dataset,
    params: AnalysisParams,
    cuts: CutIndices,
    results: Vec<SeriesAnalysis>,
}

impl AnalysisSession {
    /// Store the input and run a first analysis
    pub fn initialize(dataset: Dataset, params: AnalysisParams) -> Result<Self, AnalysisError> {
        let mut session = Self {
            dataset,
            ..Default::default()
        };
        session.reset(params)?;
        Ok(session)
    }

    /// Replace the parameters and recompute everything.
    ///
    /// On error the new parameters are kept and the results stay empty.
    pub fn reset(&mut self, params: AnalysisParams) -> Result<(), AnalysisError> {
        self.params = params;
        self.run()
    }

    /// Replace the dataset. Results are cleared until the next [`Self::run`].
    pub fn load_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.cuts = CutIndices::default();
        self.results.clear();
    }

    /// Recompute cut indices and results with the current parameters
    pub fn run(&mut self) -> Result<(), AnalysisError> {
        self.results.clear();
        self.cuts = CutIndices::default();
        require_positive_delta(self.params.delta)?;

        let times = &self.dataset.times;
        for series in &self.dataset.series {
            if series.values.len() != times.len() {
                return Err(AnalysisError::InvalidParameter(format!(
                    "series '{}' has {} samples but the time axis has {}",
                    series.name,
                    series.values.len(),
                    times.len()
                )));
            }
        }

        let params = self.params;
        let cuts = map_cuts_to_indices(times, params.a, params.b, params.c);

        tracing::info!(
            "Analysing {} series (delta={}, numnei={}, A={} B={} C={} -> {:?})",
            self.dataset.series.len(),
            params.delta,
            params.numnei,
            params.a,
            params.b,
            params.c,
            cuts
        );

        let (results, elapsed_ms) = timed_analyze(|| {
            self.dataset
                .series
                .par_iter()
                .map(|series| analyze_series(&series.name, &series.values, cuts, &params))
                .collect::<Result<Vec<_>, _>>()
        });

        self.cuts = cuts;
        self.results = results?;
        tracing::debug!("Analysis finished in {} ms", elapsed_ms);
        Ok(())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    pub fn cuts(&self) -> CutIndices {
        self.cuts
    }

    pub fn results(&self) -> &[SeriesAnalysis] {
        &self.results
    }

    /// Times of the A, B and C cut samples, where they fall inside the data
    pub fn cut_times(&self) -> [Option<f64>; 3] {
        let times = &self.dataset.times;
        [self.cuts.a, self.cuts.b, self.cuts.c].map(|i| times.get(i).copied())
    }

    /// Metrics for every series and range, in data set order.
    ///
    /// With `numnei == 0` detection keeps no bases; each peak is then its own
    /// base (a zero-width window), so rows, ISPs and frequencies are still
    /// reported with zero amplitude.
    pub fn reports(&self) -> Vec<SegmentReport> {
        let times = &self.dataset.times;
        let numnei = self.params.numnei;

        self.results
            .iter()
            .zip(&self.dataset.series)
            .enumerate()
            .flat_map(|(i, (series, data))| {
                series.ranges.iter().map(move |range| SegmentReport {
                    data_set: i + 1,
                    series_name: series.name.clone(),
                    segment: range.segment,
                    diagnostic: range.diagnostic,
                    report: range_bases(range, &data.values, numnei).and_then(|bases| {
                        compute_metrics(&range.result.maxima, &bases, times, range.range.start)
                    }),
                })
            })
            .collect()
    }
}

/// Bases to report for `range`: the detected ones, or zero-width windows
/// around each peak when base search is disabled
fn range_bases(
    range: &RangeAnalysis,
    values: &[f64],
    numnei: usize,
) -> Result<Vec<Base>, AnalysisError> {
    if numnei > 0 {
        return Ok(range.result.bases.clone());
    }

    let slice = values.get(range.range.clone()).unwrap_or_default();
    range
        .result
        .maxima
        .iter()
        .map(|peak| lowest_in_window(slice, peak.index, 0))
        .collect()
}

fn analyze_series(
    name: &str,
    values: &[f64],
    cuts: CutIndices,
    params: &AnalysisParams,
) -> Result<SeriesAnalysis, AnalysisError> {
    let [first, second] = cuts.segments();

    Ok(SeriesAnalysis {
        name: name.to_string(),
        ranges: [
            analyze_range(name, values, Segment::AB, first, params)?,
            analyze_range(name, values, Segment::BC, second, params)?,
        ],
    })
}

fn analyze_range(
    name: &str,
    values: &[f64],
    segment: Segment,
    range: Range<usize>,
    params: &AnalysisParams,
) -> Result<RangeAnalysis, AnalysisError> {
    let result = detect(&values[range.clone()], params.delta, params.numnei)?;

    let diagnostic = if range.is_empty() {
        Some(Diagnostic::EmptyRange)
    } else if result.is_empty() {
        Some(Diagnostic::NoPeaks)
    } else {
        None
    };

    if let Some(diagnostic) = diagnostic {
        tracing::warn!("{} [{}]: {}", name, segment, diagnostic);
    }

    Ok(RangeAnalysis {
        segment,
        range,
        result,
        diagnostic,
    })
}
