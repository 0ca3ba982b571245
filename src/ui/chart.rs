//! Chart rendering: one plot per series with the analysed ranges colored,
//! peak and base markers, and vertical lines at the cut points.

use eframe::egui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text, VLine};

use crate::analysis::place_on_axis;
use crate::app::PeakFinderApp;
use crate::session::SeriesAnalysis;
use crate::state::{
    BASE_COLOR, CUT_COLOR, MAX_CHART_POINTS, MIN_PLOT_HEIGHT, OUTSIDE_COLOR, PEAK_COLOR,
    SEGMENT_COLORS,
};

const CUT_LABELS: [&str; 3] = ["A", "B", "C"];

fn rgb([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

impl PeakFinderApp {
    /// Render every series of the session, stacked vertically
    pub fn render_charts(&mut self, ui: &mut egui::Ui) {
        let results = self.session.results();

        if results.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No results - open a CSV file or fix the parameters")
                        .size(18.0)
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        }

        let count = results.len() as f32;
        let height = (ui.available_height() / count - 8.0).max(MIN_PLOT_HEIGHT);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, series) in results.iter().enumerate() {
                    self.render_series_plot(ui, i, series, height);
                }
            });
    }

    fn render_series_plot(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        series: &SeriesAnalysis,
        height: f32,
    ) {
        let times = &self.session.dataset().times;
        let Some(values) = self
            .session
            .dataset()
            .series
            .get(index)
            .map(|s| s.values.as_slice())
        else {
            return;
        };
        let cut_times = self.session.cut_times();

        Plot::new(("series_plot", index))
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                // Whole trace underneath, the ranges drawn on top
                plot_ui.line(
                    Line::new(
                        series.name.clone(),
                        PlotPoints::from(downsample_lttb(times, values, MAX_CHART_POINTS)),
                    )
                    .color(rgb(OUTSIDE_COLOR))
                    .width(1.0),
                );

                for (range, color) in series.ranges.iter().zip(SEGMENT_COLORS) {
                    if range.range.is_empty() {
                        continue;
                    }
                    // One extra sample joins the range to the next one
                    let end = (range.range.end + 1).min(times.len());
                    let span = range.range.start..end;
                    let points =
                        downsample_lttb(&times[span.clone()], &values[span], MAX_CHART_POINTS);

                    plot_ui.line(
                        Line::new(range.segment.to_string(), PlotPoints::from(points))
                            .color(rgb(color))
                            .width(1.5),
                    );

                    // Extremum indices are relative to the range start
                    let axis = &times[range.range.start..];
                    let peaks = place_on_axis(&range.result.maxima, axis);
                    let bases = place_on_axis(&range.result.bases, axis);

                    for (n, [t, v]) in peaks.iter().enumerate() {
                        plot_ui.text(
                            Text::new("", PlotPoint::new(*t, *v), format!("peak {}", n + 1))
                                .color(rgb(PEAK_COLOR))
                                .anchor(egui::Align2::CENTER_BOTTOM),
                        );
                    }
                    for (n, [t, v]) in bases.iter().enumerate() {
                        plot_ui.text(
                            Text::new("", PlotPoint::new(*t, *v), format!("base {}", n + 1))
                                .color(rgb(BASE_COLOR))
                                .anchor(egui::Align2::CENTER_TOP),
                        );
                    }

                    plot_ui.points(
                        Points::new("Peaks", peaks)
                            .shape(MarkerShape::Up)
                            .filled(true)
                            .radius(4.0)
                            .color(rgb(PEAK_COLOR)),
                    );
                    plot_ui.points(
                        Points::new("Bases", bases)
                            .shape(MarkerShape::Down)
                            .filled(true)
                            .radius(4.0)
                            .color(rgb(BASE_COLOR)),
                    );
                }

                for (label, time) in CUT_LABELS.iter().zip(cut_times) {
                    if let Some(t) = time {
                        plot_ui.vline(
                            VLine::new(*label, t)
                                .color(rgb(CUT_COLOR))
                                .width(1.0),
                        );
                    }
                }
            });
    }
}

/// Largest-Triangle-Three-Buckets downsampling.
///
/// Keeps the first and last sample and, per bucket, the sample spanning the
/// largest triangle with its neighbours, so peaks survive the reduction.
pub fn downsample_lttb(times: &[f64], values: &[f64], target_points: usize) -> Vec<[f64; 2]> {
    let n = times.len().min(values.len());

    if n <= target_points || target_points < 3 {
        return times
            .iter()
            .zip(values.iter())
            .map(|(t, v)| [*t, *v])
            .collect();
    }

    let mut result = Vec::with_capacity(target_points);
    result.push([times[0], values[0]]);

    let bucket_size = (n - 2) as f64 / (target_points - 2) as f64;
    let mut anchor = 0usize;

    for i in 0..(target_points - 2) {
        // Bucket i covers [start, end); the last one ends before the final sample
        let bucket_start = ((i as f64 * bucket_size).floor() as usize + 1).min(n - 2);
        let bucket_end = ((((i + 1) as f64) * bucket_size).floor() as usize + 1)
            .clamp(bucket_start + 1, n - 1);

        let next_end = ((((i + 2) as f64) * bucket_size).floor() as usize + 1).min(n);
        let (avg_x, avg_y) = if bucket_end < next_end {
            let count = (next_end - bucket_end) as f64;
            let sum_x: f64 = times[bucket_end..next_end].iter().sum();
            let sum_y: f64 = values[bucket_end..next_end].iter().sum();
            (sum_x / count, sum_y / count)
        } else {
            (times[n - 1], values[n - 1])
        };

        let (a_x, a_y) = (times[anchor], values[anchor]);
        let mut max_area = -1.0f64;
        let mut max_index = bucket_start;

        for j in bucket_start..bucket_end {
            let area = ((a_x - avg_x) * (values[j] - a_y) - (a_x - times[j]) * (avg_y - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_index = j;
            }
        }

        result.push([times[max_index], values[max_index]]);
        anchor = max_index;
    }

    result.push([times[n - 1], values[n - 1]]);
    result
}
