//! Ordinal encoders bridging domain codes and classifier integers.
//!
//! Mirrors the convention of the training step: an encoder's classes are the
//! lexicographically sorted codes seen at fit time, and a code's integer is
//! its sorted position. The fitted state is what `encoders.json` persists.

use crate::domain::{Edibility, FeatureDomain, FEATURE_COLUMNS};
use crate::error::{ForageError, Result};
use crate::predict::FeatureSample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the output-class encoder in the encoder artifact.
pub const CLASS_ENCODER_KEY: &str = "class";

/// A fitted categorical-to-ordinal-integer mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrdinalEncoder {
    classes: Vec<char>,
}

impl OrdinalEncoder {
    /// Fit an encoder over a set of codes: sort, dedup, index by position.
    pub fn fit(codes: &[char]) -> Self {
        let mut classes = codes.to_vec();
        classes.sort_unstable();
        classes.dedup();
        Self { classes }
    }

    pub fn classes(&self) -> &[char] {
        &self.classes
    }

    /// Integer for a fitted code. `domain` is only used to name the failing
    /// domain when the code was never seen at fit time.
    pub fn transform(&self, domain: &str, code: char) -> Result<usize> {
        self.classes
            .binary_search(&code)
            .map_err(|_| ForageError::UnknownCategory {
                domain: domain.to_string(),
                code,
            })
    }

    pub fn inverse_transform(&self, index: usize) -> Option<char> {
        self.classes.get(index).copied()
    }
}

/// The domain-name-keyed encoder map loaded from `encoders.json`, including
/// the `class` entry used to decode classifier output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncoderSet {
    by_domain: BTreeMap<String, OrdinalEncoder>,
}

impl EncoderSet {
    pub fn new(by_domain: BTreeMap<String, OrdinalEncoder>) -> Self {
        Self { by_domain }
    }

    /// Encoders refit from the compiled-in vocabulary tables. Byte-compatible
    /// with artifacts produced by the training step over the same vocabulary.
    pub fn from_vocabularies() -> Self {
        let mut by_domain = BTreeMap::new();
        for domain in FEATURE_COLUMNS {
            let codes: Vec<char> = domain.vocabulary().iter().map(|&(_, code)| code).collect();
            by_domain.insert(domain.name().to_string(), OrdinalEncoder::fit(&codes));
        }
        let class_codes: Vec<char> = Edibility::ALL.iter().map(|class| class.code()).collect();
        by_domain.insert(CLASS_ENCODER_KEY.to_string(), OrdinalEncoder::fit(&class_codes));
        Self { by_domain }
    }

    pub fn insert(&mut self, domain: impl Into<String>, encoder: OrdinalEncoder) {
        self.by_domain.insert(domain.into(), encoder);
    }

    pub fn feature_encoder(&self, domain: FeatureDomain) -> Result<&OrdinalEncoder> {
        self.by_domain.get(domain.name()).ok_or_else(|| {
            ForageError::ArtifactMismatch(format!("no encoder for domain '{}'", domain.name()))
        })
    }

    pub fn class_encoder(&self) -> Result<&OrdinalEncoder> {
        self.by_domain.get(CLASS_ENCODER_KEY).ok_or_else(|| {
            ForageError::ArtifactMismatch("no encoder for the class domain".to_string())
        })
    }

    /// Encode a sample into the positional feature vector the classifier
    /// expects, columns in `FEATURE_COLUMNS` order.
    pub fn encode_sample(&self, sample: &FeatureSample) -> Result<Vec<usize>> {
        let mut encoded = Vec::with_capacity(FEATURE_COLUMNS.len());
        for (domain, code) in sample.codes() {
            encoded.push(self.feature_encoder(domain)?.transform(domain.name(), code)?);
        }
        Ok(encoded)
    }
}
