//! Mapping of time cut points onto sample indices.

use serde::Serialize;
use std::ops::Range;

/// Sample indices of the A, B and C cut points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CutIndices {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl CutIndices {
    /// The two analysed sub-ranges `[A, B)` and `[B, C)`.
    ///
    /// Cut points given out of order collapse to empty ranges rather than
    /// producing inverted slices.
    pub fn segments(&self) -> [Range<usize>; 2] {
        [
            self.a..self.b.max(self.a),
            self.b..self.c.max(self.b),
        ]
    }
}

/// Map the three cut values onto the first sample whose time is `>=` each.
///
/// A cut past the last timestamp maps to `times.len()`. `b` and `c` use
/// `0.0` to mean "unspecified" and are replaced by the final timestamp, so
/// an unspecified bound lands on the last sample. `times` must be sorted
/// ascending; this is not checked.
pub fn map_cuts_to_indices(times: &[f64], a: f64, b: f64, c: f64) -> CutIndices {
    let Some(&last) = times.last() else {
        return CutIndices::default();
    };

    let b = if b == 0.0 { last } else { b };
    let c = if c == 0.0 { last } else { c };

    CutIndices {
        a: first_at_or_after(times, a),
        b: first_at_or_after(times, b),
        c: first_at_or_after(times, c),
    }
}

/// Index of the first element `>= value`, or `times.len()`
fn first_at_or_after(times: &[f64], value: f64) -> usize {
    times
        .iter()
        .position(|&t| t >= value)
        .unwrap_or(times.len())
}
