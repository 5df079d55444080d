//! Standard scaler fitted on the numeric features.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::features::SCALED_FEATURE_NAMES;

/// Per-feature standardization parameters for `Age`, `StudyTimeWeekly` and
/// `Absences`, in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Artifact format version.
    pub model_version: i64,
    /// Names of the features the scaler was fitted on, in parameter order.
    pub feature_names: Vec<String>,
    /// Per-feature means learned from training data.
    pub means: Vec<f32>,
    /// Per-feature scales (standard deviations) learned from training data.
    pub scales: Vec<f32>,
}

impl StandardScaler {
    /// Validate structural invariants of the scaler.
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_names.len() != SCALED_FEATURE_NAMES.len() {
            return Err(format!(
                "Scaler covers {} features but {} are scaled",
                self.feature_names.len(),
                SCALED_FEATURE_NAMES.len()
            ));
        }
        for (position, (got, expected)) in self
            .feature_names
            .iter()
            .zip(SCALED_FEATURE_NAMES)
            .enumerate()
        {
            if got != expected {
                return Err(format!(
                    "Scaler position {position} was fitted on {got} but {expected} is expected"
                ));
            }
        }
        if self.means.len() != self.feature_names.len() {
            return Err("means length must match feature_names length".to_string());
        }
        if self.scales.len() != self.feature_names.len() {
            return Err("scales length must match feature_names length".to_string());
        }
        if self.means.iter().any(|mean| !mean.is_finite()) {
            return Err("means must be finite".to_string());
        }
        if self
            .scales
            .iter()
            .any(|scale| !scale.is_finite() || *scale == 0.0)
        {
            return Err("scales must be finite and non-zero".to_string());
        }
        Ok(())
    }

    /// Load a scaler from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, String> {
        let bytes = std::fs::read(path).map_err(|err| err.to_string())?;
        let scaler: Self = serde_json::from_slice(&bytes).map_err(|err| err.to_string())?;
        scaler.validate()?;
        Ok(scaler)
    }

    /// Standardize the three numeric features, in scaler order.
    pub fn transform(&self, values: [f32; 3]) -> [f32; 3] {
        let mut out = values;
        for (index, value) in out.iter_mut().enumerate() {
            *value = (*value - self.means[index]) / self.scales[index];
        }
        out
    }
}
