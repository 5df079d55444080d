//! Gradient-boosted regression tree ensemble for GPA prediction.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One node of a binary regression tree stored as a flat array.
///
/// Internal nodes carry both child indices; leaves carry neither and only
/// their `value` is read. Children always point at higher indices, so a walk
/// from the root terminates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Feature index used for the split; ignored on leaves.
    pub feature_index: u16,
    /// Threshold in feature units; the left branch covers `feature <= threshold`.
    pub threshold: f32,
    /// Index of the left child, `None` on leaves.
    pub left: Option<u32>,
    /// Index of the right child, `None` on leaves.
    pub right: Option<u32>,
    /// Leaf output before the learning rate is applied.
    pub value: f32,
}

impl TreeNode {
    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A single regression tree, node 0 being the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    /// Flat node storage.
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Validate node links and split indices against the feature count.
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("Tree must contain at least one node".to_string());
        }
        for (index, node) in self.nodes.iter().enumerate() {
            if !node.value.is_finite() {
                return Err(format!("Node {index} has a non-finite value"));
            }
            match (node.left, node.right) {
                (None, None) => {}
                (Some(left), Some(right)) => {
                    if !node.threshold.is_finite() {
                        return Err(format!("Node {index} has a non-finite threshold"));
                    }
                    if usize::from(node.feature_index) >= feature_count {
                        return Err(format!(
                            "Node {index} splits on feature {} but only {feature_count} exist",
                            node.feature_index
                        ));
                    }
                    for child in [left, right] {
                        let child = child as usize;
                        if child <= index || child >= self.nodes.len() {
                            return Err(format!("Node {index} has an invalid child link {child}"));
                        }
                    }
                }
                _ => {
                    return Err(format!("Node {index} has exactly one child"));
                }
            }
        }
        Ok(())
    }

    /// Walk the tree for a feature vector and return the reached leaf value.
    pub fn predict(&self, features: &[f32]) -> f32 {
        let mut index = 0usize;
        // Validation guarantees children point forward, so this walk terminates.
        while let Some(node) = self.nodes.get(index) {
            if node.is_leaf() {
                return node.value;
            }
            let value = features
                .get(usize::from(node.feature_index))
                .copied()
                .unwrap_or(0.0);
            let next = if value <= node.threshold {
                node.left
            } else {
                node.right
            };
            match next {
                Some(child) => index = child as usize,
                None => return node.value,
            }
        }
        0.0
    }
}

/// Gradient-boosted regression tree model loaded from a JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbrtModel {
    /// Artifact format version.
    pub model_version: i64,
    /// Number of `f32` values per input vector.
    pub feature_count: usize,
    /// Learning rate applied to each tree's output.
    pub learning_rate: f32,
    /// Base prediction before any boosting rounds.
    pub init_prediction: f32,
    /// Boosted trees in application order.
    pub trees: Vec<RegressionTree>,
}

impl GbrtModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_count == 0 {
            return Err("feature_count must be positive".to_string());
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err("learning_rate must be > 0".to_string());
        }
        if !self.init_prediction.is_finite() {
            return Err("init_prediction must be finite".to_string());
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_count)
                .map_err(|err| format!("Tree {tree_idx}: {err}"))?;
        }
        Ok(())
    }

    /// Load a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, String> {
        let bytes = std::fs::read(path).map_err(|err| err.to_string())?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|err| err.to_string())?;
        model.validate()?;
        Ok(model)
    }

    /// Predict the raw (unclamped) regression output for a feature vector.
    pub fn predict(&self, features: &[f32]) -> f32 {
        let mut output = self.init_prediction;
        for tree in &self.trees {
            output += self.learning_rate * tree.predict(features);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: f32) -> TreeNode {
        TreeNode {
            feature_index: 0,
            threshold: 0.0,
            left: None,
            right: None,
            value,
        }
    }

    fn split(feature_index: u16, threshold: f32, left: u32, right: u32) -> TreeNode {
        TreeNode {
            feature_index,
            threshold,
            left: Some(left),
            right: Some(right),
            value: 0.0,
        }
    }

    fn stump(feature_index: u16, threshold: f32, left: f32, right: f32) -> RegressionTree {
        RegressionTree {
            nodes: vec![
                split(feature_index, threshold, 1, 2),
                leaf(left),
                leaf(right),
            ],
        }
    }

    #[test]
    fn stump_predict_branches() {
        let tree = stump(0, 0.5, -1.0, 2.0);
        assert_eq!(tree.predict(&[0.0]), -1.0);
        assert_eq!(tree.predict(&[0.5]), -1.0);
        assert_eq!(tree.predict(&[0.6]), 2.0);
    }

    #[test]
    fn deeper_tree_reaches_nested_leaves() {
        // Splits on feature 0 at the root and feature 1 on the left branch.
        let tree = RegressionTree {
            nodes: vec![
                split(0, 10.0, 1, 2),
                split(1, 0.5, 3, 4),
                leaf(3.0),
                leaf(0.5),
                leaf(1.5),
            ],
        };
        tree.validate(2).unwrap();
        assert_eq!(tree.predict(&[9.0, 0.0]), 0.5);
        assert_eq!(tree.predict(&[9.0, 1.0]), 1.5);
        assert_eq!(tree.predict(&[11.0, 0.0]), 3.0);
    }

    #[test]
    fn ensemble_sums_scaled_tree_outputs() {
        let model = GbrtModel {
            model_version: 1,
            feature_count: 1,
            learning_rate: 0.1,
            init_prediction: 2.0,
            trees: vec![stump(0, 0.0, -1.0, 1.0), stump(0, 0.0, -1.0, 1.0)],
        };
        model.validate().unwrap();
        assert!((model.predict(&[1.0]) - 2.2).abs() < 1e-6);
        assert!((model.predict(&[-1.0]) - 1.8).abs() < 1e-6);
    }

    #[test]
    fn validate_rejects_out_of_range_split_feature() {
        let model = GbrtModel {
            model_version: 1,
            feature_count: 2,
            learning_rate: 0.1,
            init_prediction: 0.0,
            trees: vec![stump(2, 0.0, -1.0, 1.0)],
        };
        let err = model.validate().unwrap_err();
        assert!(err.contains("Tree 0"), "unexpected error: {err}");
    }

    #[test]
    fn validate_rejects_backward_child_links() {
        let tree = RegressionTree {
            nodes: vec![split(0, 0.0, 0, 2), leaf(1.0), leaf(2.0)],
        };
        assert!(tree.validate(1).is_err());
    }

    #[test]
    fn validate_rejects_single_child_nodes() {
        let mut node = split(0, 0.0, 1, 2);
        node.right = None;
        let tree = RegressionTree {
            nodes: vec![node, leaf(1.0)],
        };
        assert!(tree.validate(1).is_err());
    }

    #[test]
    fn validate_rejects_empty_tree() {
        let tree = RegressionTree { nodes: Vec::new() };
        assert!(tree.validate(1).is_err());
    }

    #[test]
    fn load_json_rejects_invalid_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gbrt.json");
        let model = GbrtModel {
            model_version: 1,
            feature_count: 0,
            learning_rate: 0.1,
            init_prediction: 0.0,
            trees: Vec::new(),
        };
        std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();
        assert!(GbrtModel::load_json(&path).is_err());
    }
}
