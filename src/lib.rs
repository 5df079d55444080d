//! Library exports for reuse in benchmarks and tests.
/// Application directory helpers.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Student feature schema and encodings.
pub mod features;
/// Tracing setup.
pub mod logging;
/// Persisted scaler and regression model artifacts.
pub mod model;
/// Artifact loading and GPA inference.
pub mod pipeline;
