//! Prediction pipeline: artifact loading and GPA inference.
//!
//! Both artifacts live in [`PredictorContext`], constructed once at startup
//! and passed into the UI. Prediction is a pure function of the context and a
//! [`FeatureRecord`].

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::features::{FEATURE_COUNT, FeatureRecord, SCALED_FEATURE_INDEXES};
use crate::model::{GbrtModel, StandardScaler};

/// Lowest displayable GPA.
pub const GPA_MIN: f32 = 0.0;
/// Highest displayable GPA.
pub const GPA_MAX: f32 = 4.0;

/// Directory the artifacts are loaded from, relative to the working directory.
pub const MODELS_DIR: &str = "models";
/// Scaler artifact file name.
pub const SCALER_FILE: &str = "scaler.json";
/// Regression model artifact file name.
pub const MODEL_FILE: &str = "gbrt.json";

/// Errors that can occur while loading the persisted artifacts.
///
/// All of these are fatal at startup; there is no degraded mode without a
/// usable scaler and model.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The scaler artifact could not be read, parsed or validated.
    #[error("Failed to load scaler artifact {path}: {detail}")]
    Scaler {
        /// Path the load was attempted from.
        path: PathBuf,
        /// Underlying read/parse/validation detail.
        detail: String,
    },
    /// The model artifact could not be read, parsed or validated.
    #[error("Failed to load model artifact {path}: {detail}")]
    Model {
        /// Path the load was attempted from.
        path: PathBuf,
        /// Underlying read/parse/validation detail.
        detail: String,
    },
    /// The model was fitted on a different number of features than the
    /// record layout provides.
    #[error("Model expects {model} features but the record layout has {expected}")]
    FeatureCountMismatch {
        /// Feature count declared by the model artifact.
        model: usize,
        /// Feature count of the canonical record layout.
        expected: usize,
    },
}

/// Immutable inference context holding the two fitted artifacts.
#[derive(Debug)]
pub struct PredictorContext {
    scaler: StandardScaler,
    model: GbrtModel,
}

impl PredictorContext {
    /// Load both artifacts from the default `models/` directory.
    pub fn load_default() -> Result<Self, ArtifactError> {
        Self::load(Path::new(MODELS_DIR))
    }

    /// Load both artifacts from `models_dir` and cross-check their shapes.
    pub fn load(models_dir: &Path) -> Result<Self, ArtifactError> {
        let scaler_path = models_dir.join(SCALER_FILE);
        let scaler =
            StandardScaler::load_json(&scaler_path).map_err(|detail| ArtifactError::Scaler {
                path: scaler_path.clone(),
                detail,
            })?;

        let model_path = models_dir.join(MODEL_FILE);
        let model = GbrtModel::load_json(&model_path).map_err(|detail| ArtifactError::Model {
            path: model_path.clone(),
            detail,
        })?;
        if model.feature_count != FEATURE_COUNT {
            return Err(ArtifactError::FeatureCountMismatch {
                model: model.feature_count,
                expected: FEATURE_COUNT,
            });
        }

        info!(
            scaler = %scaler_path.display(),
            model = %model_path.display(),
            trees = model.trees.len(),
            "Loaded prediction artifacts"
        );
        Ok(Self { scaler, model })
    }

    /// Build a context from already-validated artifacts.
    pub fn new(scaler: StandardScaler, model: GbrtModel) -> Self {
        Self { scaler, model }
    }

    /// Predict the GPA for one student record, clamped to [0.0, 4.0].
    pub fn predict_gpa(&self, record: &FeatureRecord) -> f32 {
        let features = self.scaled_vector(record);
        let raw = self.model.predict(&features);
        raw.clamp(GPA_MIN, GPA_MAX)
    }

    /// Canonical model input for a record: numeric features standardized in
    /// place, all other positions untouched.
    pub fn scaled_vector(&self, record: &FeatureRecord) -> [f32; FEATURE_COUNT] {
        let mut features = record.to_vector();
        let scaled = self.scaler.transform([
            features[SCALED_FEATURE_INDEXES[0]],
            features[SCALED_FEATURE_INDEXES[1]],
            features[SCALED_FEATURE_INDEXES[2]],
        ]);
        for (index, value) in SCALED_FEATURE_INDEXES.iter().zip(scaled) {
            features[*index] = value;
        }
        features
    }
}
