use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a data file
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Row {row}, column {column}: '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Row {row} has {got} fields, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Time column {column} does not exist in rows of {width} fields")]
    MissingTimeColumn { column: usize, width: usize },

    #[error("Delimiter '{0}' must be a single ASCII character")]
    InvalidDelimiter(char),

    #[error("File contains no data rows")]
    Empty,

    #[error("File has a time column but no data series")]
    NoSeries,
}

/// Column semantics for delimited input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field separator
    pub delimiter: char,
    /// First row holds series names instead of samples
    pub has_header: bool,
    /// Column holding the timestamps; every other column is a series
    pub time_column: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: false,
            time_column: 0,
        }
    }
}

/// One named data column
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Parsed data file: one shared time axis and one or more series
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    /// File the data was read from, if any
    pub source: Option<PathBuf>,
    /// Time values (seconds), assumed non-decreasing
    pub times: Vec<f64>,
    pub series: Vec<Series>,
}

impl Dataset {
    /// Build a dataset from raw columns, naming the series `Series 1..N`
    pub fn from_columns(times: Vec<f64>, columns: Vec<Vec<f64>>) -> Self {
        let series = columns
            .into_iter()
            .enumerate()
            .map(|(i, values)| Series {
                name: format!("Series {}", i + 1),
                values,
            })
            .collect();

        Self {
            source: None,
            times,
            series,
        }
    }

    /// Number of samples per series
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First and last timestamps
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }

    /// Stem of the source file name, used to name report files
    pub fn source_stem(&self) -> String {
        self.source
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".to_string())
    }
}

/// Trait for data file parsers
pub trait Parseable {
    fn parse(&self, data: &str) -> Result<Dataset, ParseError>;
}
