//! PeakFinder - command-line entry point
//!
//! Loads the input file, prints the peak report, appends it to
//! `<output-dir>/<file>_out.csv` and optionally opens the viewer.

use anyhow::{Context, Result};
use clap::Parser;

use peakfinder::app::PeakFinderApp;
use peakfinder::cli::Args;
use peakfinder::parsers::load_file;
use peakfinder::report::{append_csv, render_text, report_path};
use peakfinder::session::AnalysisSession;
use peakfinder::settings::UserSettings;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let stored = if args.ignore_settings {
        UserSettings::default()
    } else {
        UserSettings::load()
    };
    let settings = args.resolve(stored);

    let dataset = load_file(&args.file, &settings.csv)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let session = AnalysisSession::initialize(dataset, settings.params)
        .context("Analysis failed")?;

    let reports = session.reports();
    print!("{}", render_text(&reports));

    if settings.report.write_csv {
        let path = report_path(&settings.report.output_dir, session.dataset());
        append_csv(&path, &reports)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
    }

    if args.save_settings {
        settings.save().context("Failed to save settings")?;
    }

    if args.plot {
        run_viewer(session, settings)?;
    }

    Ok(())
}

fn run_viewer(session: AnalysisSession, settings: UserSettings) -> Result<()> {
    let title = format!("PeakFinder - {}", session.dataset().source_stem());

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(title)
            .with_app_id("PeakFinder")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "PeakFinder",
        native_options,
        Box::new(move |cc| Ok(Box::new(PeakFinderApp::new(cc, session, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Viewer failed: {}", e))
}
