//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::settings::{Preset, UserSettings};

/// Detect peaks and bases in CSV time series and report inter-spike periods.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file: one time column plus one column per series
    #[arg(short, long, default_value = "data.csv")]
    pub file: PathBuf,

    /// Jump in value required to confirm a maximum or minimum
    #[arg(short, long)]
    pub delta: Option<f64>,

    /// Samples searched on each side of a peak to find its base (0 disables bases)
    #[arg(short, long)]
    pub numnei: Option<usize>,

    /// Start time of the first analysed range
    #[arg(short = 'a', allow_hyphen_values = true)]
    pub a: Option<f64>,

    /// End of the first / start of the second range (0 = end of data)
    #[arg(short = 'b', allow_hyphen_values = true)]
    pub b: Option<f64>,

    /// End time of the second range (0 = end of data)
    #[arg(short = 'c', allow_hyphen_values = true)]
    pub c: Option<f64>,

    /// Open the interactive plot after printing the report
    #[arg(short, long)]
    pub plot: bool,

    /// Parameter defaults to start from
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Directory receiving `<file>_out.csv` reports
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Do not append the report to a CSV file
    #[arg(long)]
    pub no_csv: bool,

    /// First row holds series names
    #[arg(long)]
    pub header: bool,

    /// First row is data, overriding a stored header setting
    #[arg(long, conflicts_with = "header")]
    pub no_header: bool,

    /// Field separator of the input file
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Zero-based index of the time column
    #[arg(long)]
    pub time_column: Option<usize>,

    /// Ignore the stored settings file
    #[arg(long)]
    pub ignore_settings: bool,

    /// Store the resulting parameters as the new defaults
    #[arg(long)]
    pub save_settings: bool,
}

impl Args {
    /// Apply command-line overrides on top of `stored` settings.
    ///
    /// An explicit `--preset` replaces the stored parameters; individual
    /// flags win over both.
    pub fn resolve(&self, stored: UserSettings) -> UserSettings {
        let mut settings = if self.ignore_settings {
            UserSettings::from_preset(self.preset.unwrap_or_default())
        } else {
            stored
        };

        if let Some(preset) = self.preset {
            tracing::info!("Using {} preset parameters", preset.as_ref());
            settings.params = preset.params();
        }

        let params = &mut settings.params;
        if let Some(delta) = self.delta {
            params.delta = delta;
        }
        if let Some(numnei) = self.numnei {
            params.numnei = numnei;
        }
        if let Some(a) = self.a {
            params.a = a;
        }
        if let Some(b) = self.b {
            params.b = b;
        }
        if let Some(c) = self.c {
            params.c = c;
        }

        if let Some(dir) = &self.output_dir {
            settings.report.output_dir = dir.clone();
        }
        if self.no_csv {
            settings.report.write_csv = false;
        }

        if self.header {
            settings.csv.has_header = true;
        }
        if self.no_header {
            settings.csv.has_header = false;
        }
        if let Some(delimiter) = self.delimiter {
            settings.csv.delimiter = delimiter;
        }
        if let Some(column) = self.time_column {
            settings.csv.time_column = column;
        }

        settings
    }
}
