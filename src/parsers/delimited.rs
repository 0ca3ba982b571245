//! Delimited (CSV) time series parser.
//!
//! Every row is `time, value_1, ..., value_N` by default. The time column can
//! be moved with [`CsvOptions::time_column`]; all remaining columns become
//! series in file order. Row and column numbers in errors are 1-based.

use std::path::Path;

use super::types::{CsvOptions, Dataset, ParseError, Parseable, Series};

/// CSV log file parser
#[derive(Clone, Debug, Default)]
pub struct CsvParser {
    pub options: CsvOptions,
}

impl CsvParser {
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Read and parse a file from disk
    pub fn parse_file(&self, path: &Path) -> Result<Dataset, ParseError> {
        let contents = std::fs::read_to_string(path)?;
        let mut dataset = self.parse(&contents)?;
        dataset.source = Some(path.to_path_buf());

        tracing::info!(
            "Loaded {} samples of {:?} from {}",
            dataset.len(),
            series_names(&dataset),
            path.display()
        );

        Ok(dataset)
    }
}

impl Parseable for CsvParser {
    fn parse(&self, file_contents: &str) -> Result<Dataset, ParseError> {
        let delimiter = self.options.delimiter;
        if !delimiter.is_ascii() {
            return Err(ParseError::InvalidDelimiter(delimiter));
        }

        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .has_headers(false)
            .flexible(true)
            .trim(::csv::Trim::All)
            .from_reader(file_contents.as_bytes());

        let time_column = self.options.time_column;
        let mut width: Option<usize> = None;
        let mut names: Option<Vec<String>> = None;
        let mut times: Vec<f64> = vec![];
        let mut columns: Vec<Vec<f64>> = vec![];

        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let row = i + 1;

            // Lines holding only whitespace come through as a single empty field
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            let expected = match width {
                Some(w) => w,
                None => {
                    let w = record.len();
                    if time_column >= w {
                        return Err(ParseError::MissingTimeColumn {
                            column: time_column,
                            width: w,
                        });
                    }
                    if w < 2 {
                        return Err(ParseError::NoSeries);
                    }
                    width = Some(w);
                    columns = vec![Vec::new(); w - 1];

                    if self.options.has_header {
                        names = Some(
                            record
                                .iter()
                                .enumerate()
                                .filter(|(c, _)| *c != time_column)
                                .map(|(_, name)| name.to_string())
                                .collect(),
                        );
                        continue;
                    }
                    w
                }
            };

            if record.len() != expected {
                return Err(ParseError::InconsistentWidth {
                    row,
                    expected,
                    got: record.len(),
                });
            }

            let mut series_index = 0;
            for (c, field) in record.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| ParseError::InvalidNumber {
                    row,
                    column: c + 1,
                    value: field.to_string(),
                })?;

                if c == time_column {
                    times.push(value);
                } else {
                    columns[series_index].push(value);
                    series_index += 1;
                }
            }
        }

        if times.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut dataset = Dataset::from_columns(times, columns);
        if let Some(names) = names {
            for (series, name) in dataset.series.iter_mut().zip(names) {
                if !name.is_empty() {
                    series.name = name;
                }
            }
        }

        if dataset.times.windows(2).any(|w| w[1] < w[0]) {
            tracing::warn!("Time column is not sorted; cut points may map unexpectedly");
        }

        Ok(dataset)
    }
}

/// Convenience wrapper used by the binary and the viewer
pub fn load_file(path: &Path, options: &CsvOptions) -> Result<Dataset, ParseError> {
    CsvParser::new(options.clone()).parse_file(path)
}

/// Series column names, mostly for log output
pub fn series_names(dataset: &Dataset) -> Vec<&str> {
    dataset.series.iter().map(|s: &Series| s.name.as_str()).collect()
}
