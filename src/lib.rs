//! PeakFinder - peak and base detection for sampled time series
//!
//! Reads a delimited file holding one time column and one or more value
//! columns, finds local maxima and their bases with a hysteresis threshold,
//! and reports amplitudes and inter-spike periods inside two time ranges
//! delimited by the cut points A, B and C.
//!
//! ## Module Structure
//!
//! - [`analysis`] - Extremum detection, base search, cut mapping and metrics
//! - [`parsers`] - Delimited text loading into a [`parsers::Dataset`]
//! - [`session`] - Dataset, parameters and results of one analysis
//! - [`report`] - Text table and CSV report output
//! - [`settings`] - Parameter presets and persisted preferences
//! - [`cli`] - Command-line arguments
//! - [`app`] - Interactive viewer (eframe::App implementation)
//! - [`state`] - Viewer constants and toast types
//! - [`ui`] - Viewer panels and charts

pub mod analysis;
pub mod app;
pub mod cli;
pub mod parsers;
pub mod report;
pub mod session;
pub mod settings;
pub mod state;
pub mod ui;
