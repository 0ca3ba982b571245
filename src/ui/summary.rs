//! Summary panel: per-range peak counts and averages.

use eframe::egui;

use crate::app::PeakFinderApp;

impl PeakFinderApp {
    pub fn render_summary(&mut self, ui: &mut egui::Ui) {
        let reports = self.session.reports();

        if reports.is_empty() {
            ui.label(egui::RichText::new("No analysis results").color(egui::Color32::GRAY));
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("summary_grid")
                    .num_columns(7)
                    .striped(true)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        for title in [
                            "Series", "Range", "Peaks", "Mean Δ", "Mean ISP", "Hz", "per min",
                        ] {
                            ui.label(egui::RichText::new(title).strong());
                        }
                        ui.end_row();

                        for segment in &reports {
                            ui.label(&segment.series_name);
                            ui.label(segment.segment.as_ref());

                            match &segment.report {
                                Ok(report) => {
                                    ui.label(report.rows.len().to_string());
                                    match report.summary_or_err() {
                                        Ok(s) => {
                                            ui.label(format!("{:.3}", s.mean_amplitude));
                                            ui.label(format!("{:.3}", s.mean_isp));
                                            ui.label(format!("{:.4}", s.frequency_hz));
                                            ui.label(format!("{:.2}", s.frequency_per_min));
                                        }
                                        Err(_) => {
                                            let note = segment
                                                .diagnostic
                                                .map(|d| d.to_string())
                                                .unwrap_or_else(|| "-".to_string());
                                            ui.label(
                                                egui::RichText::new(note)
                                                    .color(egui::Color32::GRAY),
                                            );
                                            for _ in 0..3 {
                                                ui.label("");
                                            }
                                        }
                                    }
                                }
                                Err(e) => {
                                    ui.label("-");
                                    ui.label(
                                        egui::RichText::new(e.to_string())
                                            .color(egui::Color32::from_rgb(220, 80, 80)),
                                    );
                                    for _ in 0..3 {
                                        ui.label("");
                                    }
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
