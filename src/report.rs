//! Peak report rendering: a text table for the terminal and CSV rows for
//! persistence.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analysis::{PeakReport, PeakRow};
use crate::parsers::Dataset;
use crate::session::SegmentReport;

/// Column titles shared by the text and CSV outputs
pub const COLUMNS: [&str; 8] = [
    "Peak#",
    "Time",
    "Base",
    "Peak",
    "Delta",
    "ISP",
    "ISP freq (s^-1)",
    "ISP freq (min^-1)",
];

/// Errors raised while writing a report file
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to open report file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write report row: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Report file for `dataset` inside `output_dir`: `<stem>_out.csv`
pub fn report_path(output_dir: &Path, dataset: &Dataset) -> PathBuf {
    output_dir.join(format!("{}_out.csv", dataset.source_stem()))
}

/// Render every segment report as a human-readable table
pub fn render_text(reports: &[SegmentReport]) -> String {
    let mut out = String::new();
    let mut current_set = 0;

    for segment in reports {
        if segment.data_set != current_set {
            current_set = segment.data_set;
            let _ = writeln!(
                out,
                "\n****************   Data set {:2} ({})   ****************\n",
                segment.data_set, segment.series_name
            );
        }

        let _ = writeln!(out, "[{}]", segment.segment);

        match &segment.report {
            Ok(report) if report.rows.is_empty() => {
                let reason = segment
                    .diagnostic
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "no peaks found".to_string());
                let _ = writeln!(out, "Warning: {}\n", reason);
            }
            Ok(report) => render_table(&mut out, report),
            Err(e) => {
                let _ = writeln!(out, "Error: {}\n", e);
            }
        }
    }

    out
}

fn render_table(out: &mut String, report: &PeakReport) {
    let _ = writeln!(out, "          \t{}", COLUMNS[1..].join("\t"));
    let _ = writeln!(out, "{}", "-".repeat(10) + "|" + &"-".repeat(78));

    for row in &report.rows {
        let _ = write!(
            out,
            "Peak {:4} |\t{:8.3}\t{:4.3}\t{:4.3}\t{:4.3}",
            row.number, row.peak_time, row.base, row.peak, row.amplitude
        );
        if let Some(isp) = row.isp {
            let _ = write!(out, "\t{:4.3}", isp);
        }
        out.push('\n');
    }

    if let Some(summary) = &report.summary {
        let _ = writeln!(
            out,
            "Average   |\t\t\t\t{:4.3}\t{:4.3}\t{:4.6}\t{:4.6}",
            summary.mean_amplitude,
            summary.mean_isp,
            summary.frequency_hz,
            summary.frequency_per_min
        );
    }
    out.push('\n');
}

/// Append every segment report to the CSV file at `path`
pub fn append_csv(path: &Path, reports: &[SegmentReport]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(file);

    for segment in reports {
        writer.write_record([
            format!("Data set {:2}", segment.data_set),
            segment.series_name.clone(),
            segment.segment.to_string(),
        ])?;

        match &segment.report {
            Ok(report) if report.rows.is_empty() => {
                let reason = segment
                    .diagnostic
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "no peaks found".to_string());
                writer.write_record(["Warning", reason.as_str()])?;
            }
            Ok(report) => {
                writer.write_record(COLUMNS)?;
                for row in &report.rows {
                    writer.write_record(csv_row(row))?;
                }
                if let Some(summary) = &report.summary {
                    writer.write_record([
                        "Average".to_string(),
                        String::new(),
                        String::new(),
                        String::new(),
                        format!("{:.3}", summary.mean_amplitude),
                        format!("{:.3}", summary.mean_isp),
                        format!("{:.6}", summary.frequency_hz),
                        format!("{:.6}", summary.frequency_per_min),
                    ])?;
                }
            }
            Err(e) => writer.write_record(["Error".to_string(), e.to_string()])?,
        }
    }

    writer.flush()?;
    tracing::info!("Appended {} report sections to {}", reports.len(), path.display());
    Ok(())
}

fn csv_row(row: &PeakRow) -> Vec<String> {
    let mut fields = vec![
        row.number.to_string(),
        format!("{:.3}", row.peak_time),
        format!("{:.3}", row.base),
        format!("{:.3}", row.peak),
        format!("{:.3}", row.amplitude),
    ];
    if let Some(isp) = row.isp {
        fields.push(format!("{:.3}", isp));
    }
    fields
}
