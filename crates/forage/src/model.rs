//! Serialized decision tree classifier.
//!
//! The tree is produced by an out-of-scope training step and loaded read-only
//! from `model.json`. Internal nodes compare one encoded feature against a
//! threshold; leaves carry the encoded class index. The artifact also records
//! the feature column names in training order so the store can verify the
//! model matches the compiled-in domains before any prediction runs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f32,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    root: TreeNode,
    feature_names: Vec<String>,
    n_classes: usize,
}

impl DecisionTree {
    pub fn new(root: TreeNode, feature_names: Vec<String>, n_classes: usize) -> Self {
        Self {
            root,
            feature_names,
            n_classes,
        }
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Predicts the class index for a single encoded sample.
    ///
    /// Callers must pass one value per feature column; the store validates at
    /// load time that every split index is within bounds.
    pub fn predict_one(&self, sample: &[usize]) -> usize {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf { class } => return *class,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if (sample[*feature] as f32) <= *threshold {
                        node = left;
                    } else {
                        node = right;
                    }
                }
            }
        }
    }

    /// True when every split references a feature index below `n_features`.
    pub fn features_within(&self, n_features: usize) -> bool {
        fn walk(node: &TreeNode, n: usize) -> bool {
            match node {
                TreeNode::Leaf { .. } => true,
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => *feature < n && walk(left, n) && walk(right, n),
            }
        }
        walk(&self.root, n_features)
    }

    /// True when every leaf's class index is below `n_classes`.
    pub fn classes_within(&self, n_classes: usize) -> bool {
        fn walk(node: &TreeNode, n: usize) -> bool {
            match node {
                TreeNode::Leaf { class } => *class < n,
                TreeNode::Split { left, right, .. } => walk(left, n) && walk(right, n),
            }
        }
        walk(&self.root, n_classes)
    }
}
