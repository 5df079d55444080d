//! egui renderer for the application UI.

use egui::{
    CentralPanel, Color32, ComboBox, Context, DragValue, RichText, SidePanel, Ui, Vec2, Visuals,
};
use tracing::info;

use crate::egui_app::state::InputFormState;
use crate::features::{
    ABSENCES_RANGE, AGE_RANGE, Ethnicity, Gender, ParentalEducation, ParentalSupport,
    STUDY_TIME_RANGE,
};
use crate::pipeline::PredictorContext;

/// Minimum window size for the predictor layout.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(560.0, 420.0);

const ACCENT: Color32 = Color32::from_rgb(76, 175, 80);

/// Renders the sidebar form and the prediction result panel.
pub struct GpaApp {
    context: PredictorContext,
    form: InputFormState,
    prediction: Option<f32>,
    visuals_set: bool,
}

impl GpaApp {
    /// Create the app around an already-loaded inference context.
    pub fn new(context: PredictorContext) -> Self {
        Self {
            context,
            form: InputFormState::default(),
            prediction: None,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = Visuals::dark();
        visuals.window_fill = Color32::from_rgb(12, 12, 12);
        visuals.panel_fill = Color32::from_rgb(16, 16, 16);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_input_sidebar(&mut self, ctx: &Context) {
        SidePanel::left("input_features")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Input Features");
                ui.add_space(8.0);

                ui.add(
                    DragValue::new(&mut self.form.age)
                        .range(AGE_RANGE)
                        .prefix("Age: "),
                );
                ui.add(
                    DragValue::new(&mut self.form.study_time_weekly)
                        .range(STUDY_TIME_RANGE)
                        .speed(0.5)
                        .prefix("Study Time Weekly: "),
                );
                ui.add(
                    DragValue::new(&mut self.form.absences)
                        .range(ABSENCES_RANGE)
                        .prefix("Absences: "),
                );
                ui.add_space(6.0);

                Self::choice(
                    ui,
                    "Gender",
                    &mut self.form.gender,
                    &Gender::ALL,
                    Gender::label,
                );
                Self::choice(
                    ui,
                    "Ethnicity",
                    &mut self.form.ethnicity,
                    &Ethnicity::ALL,
                    Ethnicity::label,
                );
                Self::choice(
                    ui,
                    "Parental Education",
                    &mut self.form.parental_education,
                    &ParentalEducation::ALL,
                    ParentalEducation::label,
                );
                Self::choice(
                    ui,
                    "Parental Support",
                    &mut self.form.parental_support,
                    &ParentalSupport::ALL,
                    ParentalSupport::label,
                );
                ui.add_space(6.0);

                ui.checkbox(&mut self.form.tutoring, "Tutoring");
                ui.checkbox(&mut self.form.extracurricular, "Extracurricular");
                ui.checkbox(&mut self.form.sports, "Sports");
                ui.checkbox(&mut self.form.music, "Music");
                ui.checkbox(&mut self.form.volunteering, "Volunteering");

                ui.add_space(12.0);
                if ui.button(RichText::new("Predict GPA").color(ACCENT)).clicked() {
                    let record = self.form.to_record();
                    let prediction = self.context.predict_gpa(&record);
                    info!(prediction, "Predicted GPA");
                    self.prediction = Some(prediction);
                }
            });
    }

    fn render_result(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading(RichText::new("Student GPA Predictor").color(ACCENT));
                ui.add_space(24.0);
                match self.prediction {
                    Some(prediction) => {
                        ui.heading("Predicted GPA");
                        ui.add_space(8.0);
                        ui.heading(
                            RichText::new(format!("{prediction:.2}")).color(ACCENT).size(32.0),
                        );
                    }
                    None => {
                        ui.heading("Awaiting input features...");
                    }
                }
            });
        });
    }

    /// Render one categorical selector over a fixed variant list.
    fn choice<T: Copy + PartialEq>(
        ui: &mut Ui,
        label: &str,
        selected: &mut T,
        variants: &[T],
        label_of: fn(T) -> &'static str,
    ) {
        ComboBox::from_label(label)
            .selected_text(label_of(*selected))
            .show_ui(ui, |ui| {
                for variant in variants {
                    ui.selectable_value(selected, *variant, label_of(*variant));
                }
            });
    }
}

impl eframe::App for GpaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_input_sidebar(ctx);
        self.render_result(ctx);
    }
}
