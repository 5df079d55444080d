#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based GPA predictor UI.

use eframe::egui;
use gradecast::egui_app::ui::{GpaApp, MIN_VIEWPORT_SIZE};
use gradecast::logging;
use gradecast::pipeline::PredictorContext;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    // Artifacts are loaded once here; a failure means the app cannot predict
    // and only the launch-error screen is shown.
    let context = PredictorContext::load_default();

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_title("Student GPA Predictor");
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Gradecast",
        native_options,
        Box::new(move |_cc| match context {
            Ok(context) => Ok(Box::new(GpaApp::new(context))),
            Err(err) => {
                tracing::error!("Startup failed: {err}");
                Ok(Box::new(LaunchError {
                    message: err.to_string(),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start GPA predictor");
                ui.label(&self.message);
            });
        });
    }
}
