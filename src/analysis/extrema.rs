//! Hysteresis extrema tracker.
//!
//! A point is a maximum if it holds the highest value seen since the last
//! confirmed minimum and the signal later drops by more than `delta` below
//! it. Minima are confirmed symmetrically. Detection is confirmatory: an
//! extremum still waiting for its confirming move when the data ends is
//! never reported.

use super::{require_positive_delta, AnalysisError, AnalysisResult, Base, Extremum};

/// Detect maxima and minima in `values`.
///
/// When `numnei > 0`, every confirmed maximum also gets a base: the lowest
/// sample within `numnei` positions of it (see [`lowest_in_window`]),
/// searched over the whole of `values`. With `numnei == 0` the base list
/// stays empty.
pub fn detect(values: &[f64], delta: f64, numnei: usize) -> Result<AnalysisResult, AnalysisError> {
    require_positive_delta(delta)?;

    let mut result = AnalysisResult::default();

    let mut min = Extremum::new(0, f64::INFINITY);
    let mut max = Extremum::new(0, f64::NEG_INFINITY);
    let mut seeking_max = true;

    for (i, &this) in values.iter().enumerate() {
        if this > max.value {
            max = Extremum::new(i, this);
        }
        if this < min.value {
            min = Extremum::new(i, this);
        }

        if seeking_max {
            if this < max.value - delta {
                result.maxima.push(max);
                // the next minimum search starts from the confirming sample
                min = Extremum::new(i, this);

                if numnei > 0 {
                    result.bases.push(lowest_in_window(values, max.index, numnei)?);
                }

                seeking_max = false;
            }
        } else if this > min.value + delta {
            result.minima.push(min);
            max = Extremum::new(i, this);
            seeking_max = true;
        }
    }

    tracing::debug!(
        "Detected {} maxima, {} minima, {} bases in {} samples (delta={}, numnei={})",
        result.maxima.len(),
        result.minima.len(),
        result.bases.len(),
        values.len(),
        delta,
        numnei
    );

    Ok(result)
}

/// Lowest sample in `data[center - half_width .. center + half_width]`.
///
/// The window is clamped to the slice and its upper end is exclusive, so it
/// can be narrower than `2 * half_width` near either edge. Ties go to the
/// earliest index. A zero half-width yields the centre sample itself.
pub fn lowest_in_window(
    data: &[f64],
    center: usize,
    half_width: usize,
) -> Result<Base, AnalysisError> {
    if data.is_empty() {
        return Err(AnalysisError::InvalidParameter(
            "cannot search a window in an empty series".to_string(),
        ));
    }
    if center >= data.len() {
        return Err(AnalysisError::InvalidParameter(format!(
            "window centre {} is outside a series of {} samples",
            center,
            data.len()
        )));
    }

    let start = center.saturating_sub(half_width);
    let end = center.saturating_add(half_width).min(data.len());

    if end <= start {
        return Ok(Extremum::new(center, data[center]));
    }

    let mut lowest = Extremum::new(start, data[start]);
    for (i, &value) in data.iter().enumerate().take(end).skip(start + 1) {
        if value < lowest.value {
            lowest = Extremum::new(i, value);
        }
    }

    Ok(lowest)
}

/// Extrema positioned on an x-axis instead of by sample index.
///
/// Each point is `[x, value]`, ready for plotting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisExtrema {
    pub maxima: Vec<[f64; 2]>,
    pub minima: Vec<[f64; 2]>,
    pub bases: Vec<[f64; 2]>,
}

/// Run [`detect`] and report every position as the matching `axis` value.
pub fn detect_with_axis(
    values: &[f64],
    axis: &[f64],
    delta: f64,
    numnei: usize,
) -> Result<AxisExtrema, AnalysisError> {
    if values.len() != axis.len() {
        return Err(AnalysisError::InvalidParameter(format!(
            "values and axis must have the same length ({} vs {})",
            values.len(),
            axis.len()
        )));
    }

    let result = detect(values, delta, numnei)?;
    Ok(AxisExtrema {
        maxima: place_on_axis(&result.maxima, axis),
        minima: place_on_axis(&result.minima, axis),
        bases: place_on_axis(&result.bases, axis),
    })
}

/// Pair each extremum's value with `axis[index]`.
///
/// Extrema whose index falls outside `axis` are skipped.
pub fn place_on_axis(points: &[Extremum], axis: &[f64]) -> Vec<[f64; 2]> {
    points
        .iter()
        .filter_map(|p| axis.get(p.index).map(|&x| [x, p.value]))
        .collect()
}
