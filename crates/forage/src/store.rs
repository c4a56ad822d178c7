//! Loading of the persisted model artifacts.
//!
//! The store reads two JSON artifacts from the model directory and hands out
//! an immutable [`ModelContext`] valid for the process lifetime. A missing
//! artifact is fatal (the training step has not been run); an artifact that
//! disagrees with the compiled-in domain tables is an `ArtifactMismatch`,
//! kept distinct from the per-operation `UnknownCategory` failure.

use crate::codec::EncoderSet;
use crate::domain::{Edibility, FEATURE_COLUMNS};
use crate::error::{ForageError, Result};
use crate::model::DecisionTree;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The loaded classifier and encoders, read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct ModelContext {
    tree: DecisionTree,
    encoders: EncoderSet,
}

impl ModelContext {
    pub const MODEL_FILE: &'static str = "model.json";
    pub const ENCODERS_FILE: &'static str = "encoders.json";

    /// Load both artifacts from `dir` and validate them against the
    /// compiled-in domain tables.
    pub fn load(dir: &Path) -> Result<Self> {
        let tree: DecisionTree = read_artifact(&dir.join(Self::MODEL_FILE))?;
        let encoders: EncoderSet = read_artifact(&dir.join(Self::ENCODERS_FILE))?;
        Self::new(tree, encoders)
    }

    /// Build a context from in-memory parts, applying the same validation as
    /// [`ModelContext::load`].
    pub fn new(tree: DecisionTree, encoders: EncoderSet) -> Result<Self> {
        validate(&tree, &encoders)?;
        Ok(Self { tree, encoders })
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ForageError::ArtifactNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn validate(tree: &DecisionTree, encoders: &EncoderSet) -> Result<()> {
    let expected: Vec<&str> = FEATURE_COLUMNS.iter().map(|d| d.name()).collect();
    let actual: Vec<&str> = tree.feature_names().iter().map(String::as_str).collect();
    if actual != expected {
        return Err(ForageError::ArtifactMismatch(format!(
            "model feature columns {:?} do not match expected {:?}",
            actual, expected
        )));
    }
    if !tree.features_within(expected.len()) {
        return Err(ForageError::ArtifactMismatch(
            "model references a feature index outside its declared columns".to_string(),
        ));
    }

    for domain in FEATURE_COLUMNS {
        encoders.feature_encoder(domain)?;
    }

    let class = encoders.class_encoder()?;
    let expected_classes: Vec<char> = Edibility::ALL.iter().map(|c| c.code()).collect();
    if class.classes() != expected_classes.as_slice() {
        return Err(ForageError::ArtifactMismatch(format!(
            "class encoder vocabulary {:?} does not match expected {:?}",
            class.classes(),
            expected_classes
        )));
    }
    if tree.n_classes() != class.classes().len() || !tree.classes_within(tree.n_classes()) {
        return Err(ForageError::ArtifactMismatch(
            "model class count does not match the class encoder".to_string(),
        ));
    }

    Ok(())
}
