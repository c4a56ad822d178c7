use forage_lib::{
    DecisionTree, EncoderSet, FeatureDomain, ModelContext, Result, TreeNode, FEATURE_COLUMNS,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Odor labels the fixture model treats as edible.
pub const EDIBLE_ODOR_LABELS: [&str; 3] = ["almond", "anise", "none"];

/// Codes of the edible odors, in declaration order.
pub const EDIBLE_ODOR_CODES: [char; 3] = ['a', 'l', 'n'];

pub struct TestFixture {
    pub temp_dir: TempDir,
    pub model_dir: PathBuf,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let model_dir = temp_dir.path().to_path_buf();
        write_artifacts(&model_dir)?;
        Ok(Self {
            temp_dir,
            model_dir,
        })
    }

    pub fn load(&self) -> Result<ModelContext> {
        ModelContext::load(&self.model_dir)
    }
}

/// A synthetic classifier that predicts edible exactly when the odor is one
/// of `EDIBLE_ODOR_LABELS`. Splits only on the odor column, with thresholds
/// between consecutive encoder indices, so every odor index reaches its own
/// leaf.
pub fn odor_rule_tree(encoders: &EncoderSet) -> DecisionTree {
    let odor = encoders.feature_encoder(FeatureDomain::Odor).unwrap();
    let edible: Vec<usize> = EDIBLE_ODOR_LABELS
        .iter()
        .map(|label| FeatureDomain::Odor.code_for_label(label).unwrap())
        .map(|code| odor.transform("odor", code).unwrap())
        .collect();
    // class encoder is fit over ['e', 'p']: edible = 0, poisonous = 1
    let class_of = |index: usize| -> usize {
        if edible.contains(&index) {
            0
        } else {
            1
        }
    };

    let n = odor.classes().len();
    let mut node = TreeNode::Leaf {
        class: class_of(n - 1),
    };
    for index in (0..n - 1).rev() {
        node = TreeNode::Split {
            feature: 3,
            threshold: index as f32 + 0.5,
            left: Box::new(TreeNode::Leaf {
                class: class_of(index),
            }),
            right: Box::new(node),
        };
    }

    let names = FEATURE_COLUMNS
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    DecisionTree::new(node, names, 2)
}

pub fn write_artifacts(dir: &Path) -> Result<()> {
    let encoders = EncoderSet::from_vocabularies();
    let tree = odor_rule_tree(&encoders);
    fs::write(
        dir.join(ModelContext::MODEL_FILE),
        serde_json::to_string_pretty(&tree)?,
    )?;
    fs::write(
        dir.join(ModelContext::ENCODERS_FILE),
        serde_json::to_string_pretty(&encoders)?,
    )?;
    Ok(())
}
