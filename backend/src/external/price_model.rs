//! Price Model
//!
//! The pre-trained regression artifact behind the forecast. It is loaded once
//! at startup and shared read-only between requests.

use serde::Deserialize;
use shared::{FeatureRow, FEATURE_COLUMNS};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// A trained model that predicts one price per feature row
pub trait PriceModel: Send + Sync {
    fn predict(&self, rows: &[FeatureRow]) -> AppResult<Vec<f64>>;

    /// Short description for health reporting
    fn describe(&self) -> String;
}

/// Child index scikit-learn stores for a leaf
const TREE_LEAF: i64 = -1;

/// One tree as exported from scikit-learn's `tree_` arrays
///
/// Node `i` is a leaf when `children_left[i] == -1`. `value[i]` is the
/// leaf's prediction. Children always have larger ids than their parent.
#[derive(Debug, Deserialize)]
struct TreeArtifact {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    value: Vec<f64>,
}

#[derive(Debug, Clone, Copy)]
enum TreeNode {
    /// Go left when `x[feature] <= threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(f64),
}

/// A validated regression tree stored as a flat node array
#[derive(Debug, Clone)]
struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl TryFrom<TreeArtifact> for RegressionTree {
    type Error = String;

    fn try_from(tree: TreeArtifact) -> Result<Self, Self::Error> {
        let n = tree.children_left.len();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if [
            tree.children_right.len(),
            tree.feature.len(),
            tree.threshold.len(),
            tree.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err("node arrays have different lengths".to_string());
        }

        // Children must point forward, which also rules out cycles
        let child = |id: usize, raw: i64| -> Result<usize, String> {
            usize::try_from(raw)
                .ok()
                .filter(|&c| c > id && c < n)
                .ok_or_else(|| format!("node {} has invalid child {}", id, raw))
        };

        let nodes = (0..n)
            .map(|id| {
                let (left, right) = (tree.children_left[id], tree.children_right[id]);
                if left == TREE_LEAF && right == TREE_LEAF {
                    return Ok(TreeNode::Leaf(tree.value[id]));
                }

                let feature = usize::try_from(tree.feature[id])
                    .ok()
                    .filter(|&f| f < FEATURE_COLUMNS.len())
                    .ok_or_else(|| {
                        format!(
                            "node {} splits on feature {} but only {} columns exist",
                            id,
                            tree.feature[id],
                            FEATURE_COLUMNS.len()
                        )
                    })?;

                Ok(TreeNode::Split {
                    feature,
                    threshold: tree.threshold[id],
                    left: child(id, left)?,
                    right: child(id, right)?,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self { nodes })
    }
}

impl RegressionTree {
    fn predict_one(&self, x: &[f64]) -> f64 {
        let mut id = 0;
        loop {
            match self.nodes[id] {
                TreeNode::Leaf(value) => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    id = if x[feature] <= threshold { left } else { right };
                }
            }
        }
    }

    fn n_nodes(&self) -> usize {
        self.nodes.len()
    }
}

/// On-disk JSON layout of the forest
#[derive(Debug, Deserialize)]
struct ForestArtifact {
    feature_names: Vec<String>,
    trees: Vec<TreeArtifact>,
}

/// Random forest regressor: the prediction is the mean over trees
#[derive(Debug, Clone)]
pub struct RandomForestModel {
    trees: Vec<RegressionTree>,
}

impl RandomForestModel {
    /// Build a forest, checking every tree's structure and split features
    fn from_artifact(artifact: ForestArtifact) -> AppResult<Self> {
        if artifact.trees.is_empty() {
            return Err(AppError::ModelArtifact("forest has no trees".to_string()));
        }

        let trees = artifact
            .trees
            .into_iter()
            .enumerate()
            .map(|(i, tree)| {
                RegressionTree::try_from(tree)
                    .map_err(|e| AppError::ModelArtifact(format!("tree {}: {}", i, e)))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { trees })
    }

    /// Parse a JSON artifact
    pub fn from_json(json: &str) -> AppResult<Self> {
        let artifact: ForestArtifact = serde_json::from_str(json)
            .map_err(|e| AppError::ModelArtifact(format!("invalid JSON: {}", e)))?;

        if artifact.feature_names != FEATURE_COLUMNS {
            return Err(AppError::ModelArtifact(format!(
                "feature columns {:?} do not match expected {:?}",
                artifact.feature_names, FEATURE_COLUMNS
            )));
        }

        Self::from_artifact(artifact)
    }

    /// Load the artifact from disk
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::ModelArtifact(format!("cannot read {}: {}", path.display(), e))
        })?;

        let model = Self::from_json(&json)?;
        tracing::info!(
            "Loaded random forest with {} trees from {}",
            model.n_trees(),
            path.display()
        );
        Ok(model)
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl PriceModel for RandomForestModel {
    fn predict(&self, rows: &[FeatureRow]) -> AppResult<Vec<f64>> {
        let n_trees = self.trees.len() as f64;

        let predictions = rows
            .iter()
            .map(|row| {
                let x = row.to_vector();
                self.trees.iter().map(|t| t.predict_one(&x)).sum::<f64>() / n_trees
            })
            .collect();

        Ok(predictions)
    }

    fn describe(&self) -> String {
        let n_nodes: usize = self.trees.iter().map(RegressionTree::n_nodes).sum();
        format!("random_forest ({} trees, {} nodes)", self.trees.len(), n_nodes)
    }
}
