//! The encode → predict → decode pipeline.

use crate::domain::{Edibility, FeatureDomain};
use crate::error::{ForageError, Result};
use crate::store::ModelContext;

/// One domain code per feature, the raw input to a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSample {
    pub gill_color: char,
    pub gill_size: char,
    pub spore_print_color: char,
    pub odor: char,
}

impl FeatureSample {
    /// The sample's `(domain, code)` pairs in classifier column order.
    pub fn codes(&self) -> [(FeatureDomain, char); 4] {
        [
            (FeatureDomain::GillColor, self.gill_color),
            (FeatureDomain::GillSize, self.gill_size),
            (FeatureDomain::SporePrintColor, self.spore_print_color),
            (FeatureDomain::Odor, self.odor),
        ]
    }

    /// Build a sample from human-readable labels, as supplied on the command
    /// line. Labels outside a domain's closed vocabulary are rejected.
    pub fn from_labels(
        gill_color: &str,
        gill_size: &str,
        spore_print_color: &str,
        odor: &str,
    ) -> Result<Self> {
        Ok(Self {
            gill_color: label_code(FeatureDomain::GillColor, gill_color)?,
            gill_size: label_code(FeatureDomain::GillSize, gill_size)?,
            spore_print_color: label_code(FeatureDomain::SporePrintColor, spore_print_color)?,
            odor: label_code(FeatureDomain::Odor, odor)?,
        })
    }
}

fn label_code(domain: FeatureDomain, label: &str) -> Result<char> {
    domain
        .code_for_label(label)
        .ok_or_else(|| ForageError::UnknownLabel {
            domain: domain.name().to_string(),
            label: label.to_string(),
        })
}

/// Run one sample through the pipeline: encode each code to its ordinal
/// integer, walk the tree, decode the class index back to an [`Edibility`].
///
/// Pure function of `(ctx, sample)`; identical inputs always yield the same
/// label for a given loaded context.
pub fn predict(ctx: &ModelContext, sample: &FeatureSample) -> Result<Edibility> {
    let encoded = ctx.encoders().encode_sample(sample)?;
    let raw = ctx.tree().predict_one(&encoded);
    let code = ctx
        .encoders()
        .class_encoder()?
        .inverse_transform(raw)
        .ok_or_else(|| {
            ForageError::ArtifactMismatch(format!("classifier produced out-of-range class {}", raw))
        })?;
    Edibility::from_code(code).ok_or_else(|| {
        ForageError::ArtifactMismatch(format!("class encoder holds unknown class code '{}'", code))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_to_codes() {
        let sample = FeatureSample::from_labels("white", "narrow", "white", "none").unwrap();
        assert_eq!(
            sample,
            FeatureSample {
                gill_color: 'w',
                gill_size: 'n',
                spore_print_color: 'w',
                odor: 'n',
            }
        );
    }

    #[test]
    fn unknown_label_names_its_domain() {
        match FeatureSample::from_labels("magenta", "narrow", "white", "none") {
            Err(ForageError::UnknownLabel { domain, label }) => {
                assert_eq!(domain, "gill-color");
                assert_eq!(label, "magenta");
            }
            other => panic!("expected UnknownLabel, got {:?}", other),
        }
    }
}
