//! Side panel: cut points, detection parameters and the loaded file.

use eframe::egui;

use crate::app::PeakFinderApp;
use crate::state::SUPPORTED_EXTENSIONS;

impl PeakFinderApp {
    /// Render the parameter editor and file controls
    pub fn render_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parameters");
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        let mut commit = false;

        egui::Grid::new("params_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let params = &mut self.edit_params;

                ui.label("A");
                commit |= committed(ui.add(egui::DragValue::new(&mut params.a).speed(1.0)));
                ui.end_row();

                ui.label("B");
                commit |= committed(ui.add(egui::DragValue::new(&mut params.b).speed(1.0)));
                ui.end_row();

                ui.label("C");
                commit |= committed(ui.add(egui::DragValue::new(&mut params.c).speed(1.0)));
                ui.end_row();

                ui.label("Neighbors");
                commit |= committed(
                    ui.add(
                        egui::DragValue::new(&mut params.numnei)
                            .speed(0.2)
                            .range(0..=100),
                    ),
                );
                ui.end_row();

                ui.label("Delta");
                commit |= committed(
                    ui.add(
                        egui::DragValue::new(&mut params.delta)
                            .speed(0.01)
                            .range(0.001..=f64::MAX),
                    ),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.button("Recalculate").clicked() {
            commit = true;
        }
        if commit {
            self.recalculate();
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Open CSV...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Delimited data", SUPPORTED_EXTENSIONS)
                    .pick_file()
                {
                    self.open_file(path);
                }
            }
            if ui.button("Save report...").clicked() {
                self.export_report();
            }
        });

        ui.add_space(8.0);
        self.render_dataset_info(ui);
    }

    fn render_dataset_info(&self, ui: &mut egui::Ui) {
        let dataset = self.session.dataset();

        let source = dataset
            .source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "(no file)".to_string());
        ui.label(egui::RichText::new(source).strong());

        ui.label(format!(
            "{} samples, {} series",
            dataset.len(),
            dataset.series.len()
        ));
        if let Some((start, end)) = dataset.time_range() {
            ui.label(format!("t = {:.3} .. {:.3}", start, end));
        }

        let cuts = self.session.cuts();
        ui.label(
            egui::RichText::new(format!("indices A={} B={} C={}", cuts.a, cuts.b, cuts.c))
                .small()
                .color(egui::Color32::GRAY),
        );
    }
}

/// A drag finished or a typed value was confirmed
fn committed(response: egui::Response) -> bool {
    response.drag_stopped() || response.lost_focus()
}
