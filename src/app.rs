//! Interactive viewer: an eframe application wrapping an [`AnalysisSession`].
//!
//! Parameter edits are applied synchronously through
//! [`AnalysisSession::reset`]; failures are shown as toasts and never end
//! the session.

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::parsers::load_file;
use crate::session::{AnalysisParams, AnalysisSession};
use crate::settings::UserSettings;
use crate::state::ToastType;

/// Main application state
pub struct PeakFinderApp {
    /// Dataset, parameters and results
    pub(crate) session: AnalysisSession,
    /// Persisted preferences (CSV options, last parameters)
    pub(crate) settings: UserSettings,
    /// Parameters being edited in the side panel, applied on Recalculate
    pub(crate) edit_params: AnalysisParams,
    /// Where edited parameters are persisted, `None` keeps them in memory
    pub(crate) settings_path: Option<PathBuf>,
    /// Toast messages for user feedback
    pub(crate) toast_message: Option<(String, Instant, ToastType)>,
}

impl PeakFinderApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        session: AnalysisSession,
        settings: UserSettings,
    ) -> Self {
        let mut app = Self::with_session(session, settings);
        app.settings_path = UserSettings::get_settings_path();
        app
    }

    /// Build the app state without a window (used by `new` and tests)
    pub fn with_session(session: AnalysisSession, settings: UserSettings) -> Self {
        let edit_params = *session.params();
        Self {
            session,
            settings,
            edit_params,
            settings_path: None,
            toast_message: None,
        }
    }

    /// Apply the edited parameters and rerun the analysis
    pub fn recalculate(&mut self) {
        match self.session.reset(self.edit_params) {
            Ok(()) => {
                self.settings.params = self.edit_params;
                if let Some(path) = &self.settings_path {
                    if let Err(e) = self.settings.save_to(path) {
                        tracing::warn!("Failed to save settings: {}", e);
                    }
                }
                let peaks: usize = self
                    .session
                    .results()
                    .iter()
                    .flat_map(|s| s.ranges.iter())
                    .map(|r| r.result.maxima.len())
                    .sum();
                if peaks == 0 {
                    self.show_toast_warning("No peaks found, try a smaller delta");
                } else {
                    self.show_toast_success(&format!("Found {} peaks", peaks));
                }
            }
            Err(e) => {
                tracing::error!("Recalculation failed: {}", e);
                self.show_toast_error(&e.to_string());
            }
        }
    }

    /// Replace the dataset with the file at `path` and rerun the analysis
    pub fn open_file(&mut self, path: PathBuf) {
        match load_file(&path, &self.settings.csv) {
            Ok(dataset) => {
                self.session.load_dataset(dataset);
                match self.session.run() {
                    Ok(()) => self.show_toast_success(&format!("Loaded {}", path.display())),
                    Err(e) => self.show_toast_error(&e.to_string()),
                }
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                self.show_toast_error(&e.to_string());
            }
        }
    }

    /// Load the first file dropped onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Option<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|f| f.path.clone())
        });

        if let Some(path) = dropped {
            self.open_file(path);
        }
    }

    pub fn show_toast_success(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now(), ToastType::Success));
    }

    pub fn show_toast_warning(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now(), ToastType::Warning));
    }

    pub fn show_toast_error(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now(), ToastType::Error));
    }
}

impl eframe::App for PeakFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.handle_dropped_files(ctx);
        self.render_toast(ctx);

        egui::SidePanel::left("controls_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_side_panel(ui);
            });

        egui::TopBottomPanel::bottom("summary_panel")
            .resizable(true)
            .min_height(80.0)
            .show(ctx, |ui| {
                self.render_summary(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_charts(ui);
        });
    }
}
