//! Report export from the viewer (CSV).

use std::path::Path;

use crate::app::PeakFinderApp;
use crate::report::append_csv;

impl PeakFinderApp {
    /// Ask for a destination and append the current report to it
    pub fn export_report(&mut self) {
        let file_name = format!("{}_out.csv", self.session.dataset().source_stem());

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV report", &["csv"])
            .set_directory(&self.settings.report.output_dir)
            .set_file_name(file_name)
            .save_file()
        else {
            return;
        };

        self.export_report_to(&path);
    }

    /// Append the current report to `path`, reporting the outcome as a toast
    pub fn export_report_to(&mut self, path: &Path) {
        let reports = self.session.reports();

        match append_csv(path, &reports) {
            Ok(()) => {
                self.show_toast_success(&format!("Report saved to {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Failed to export report: {}", e);
                self.show_toast_error(&format!("Failed to export report: {}", e));
            }
        }
    }
}
