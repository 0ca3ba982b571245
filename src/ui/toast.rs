//! Toast notification system for user feedback.

use eframe::egui;

use crate::app::PeakFinderApp;

/// Seconds a toast stays on screen
const TOAST_SECONDS: u64 = 3;

impl PeakFinderApp {
    /// Render toast notifications in the bottom right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some((message, time, toast_type)) = &self.toast_message else {
            return;
        };

        if time.elapsed().as_secs() >= TOAST_SECONDS {
            self.toast_message = None;
            return;
        }

        let [bg_r, bg_g, bg_b] = toast_type.color();
        let [fg_r, fg_g, fg_b] = toast_type.text_color();
        let margin = 20.0;

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(bg_r, bg_g, bg_b))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .shadow(egui::epaint::Shadow {
                        offset: [2, 2],
                        blur: 8,
                        spread: 0,
                        color: egui::Color32::from_black_alpha(60),
                    })
                    .show(ui, |ui| {
                        ui.set_min_width(200.0);
                        ui.set_max_width(400.0);
                        ui.label(
                            egui::RichText::new(message.as_str())
                                .color(egui::Color32::from_rgb(fg_r, fg_g, fg_b))
                                .size(14.0),
                        );
                    });
            });

        // Keep repainting so the toast disappears without user input
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
