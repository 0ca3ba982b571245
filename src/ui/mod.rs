//! User interface components for the PeakFinder viewer.
//!
//! Each submodule adds `render_*` methods to [`crate::app::PeakFinderApp`]:
//! - `side_panel` - parameter editing, file loading, dataset info
//! - `chart` - one plot per series with peaks, bases and cut markers
//! - `summary` - per-range averages below the charts
//! - `export` - saving the report through a file dialog
//! - `toast` - transient notifications

pub mod chart;
pub mod export;
pub mod side_panel;
pub mod summary;
pub mod toast;
