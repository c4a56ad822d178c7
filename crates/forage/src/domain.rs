//! Feature domains and their closed vocabularies.
//!
//! Each domain maps human-readable labels to the single-character codes used
//! in the training data. The tables here are the single source of truth for
//! both the interactive and the enumeration front-ends; declaration order is
//! the presentation and iteration order everywhere.

use serde::{Deserialize, Serialize};

const GILL_COLOR_VOCAB: &[(&str, char)] = &[
    ("black", 'k'),
    ("brown", 'n'),
    ("buff", 'b'),
    ("chocolate", 'h'),
    ("gray", 'g'),
    ("green", 'r'),
    ("orange", 'o'),
    ("pink", 'p'),
    ("purple", 'u'),
    ("red", 'e'),
    ("white", 'w'),
    ("yellow", 'y'),
];

const GILL_SIZE_VOCAB: &[(&str, char)] = &[("broad", 'b'), ("narrow", 'n')];

const SPORE_PRINT_COLOR_VOCAB: &[(&str, char)] = &[
    ("black", 'k'),
    ("brown", 'n'),
    ("buff", 'b'),
    ("chocolate", 'h'),
    ("green", 'r'),
    ("orange", 'o'),
    ("purple", 'u'),
    ("white", 'w'),
    ("yellow", 'y'),
];

const ODOR_VOCAB: &[(&str, char)] = &[
    ("almond", 'a'),
    ("anise", 'l'),
    ("creosote", 'c'),
    ("fishy", 'y'),
    ("foul", 'f'),
    ("musty", 'm'),
    ("none", 'n'),
    ("pungent", 'p'),
    ("spicy", 's'),
];

/// A categorical feature the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureDomain {
    GillColor,
    GillSize,
    SporePrintColor,
    Odor,
}

/// Classifier input columns, in training order. The classifier is positional,
/// so this order must never change.
pub const FEATURE_COLUMNS: [FeatureDomain; 4] = [
    FeatureDomain::GillColor,
    FeatureDomain::GillSize,
    FeatureDomain::SporePrintColor,
    FeatureDomain::Odor,
];

impl FeatureDomain {
    /// Column name as used in the training data and the encoder artifact.
    pub fn name(&self) -> &'static str {
        match self {
            FeatureDomain::GillColor => "gill-color",
            FeatureDomain::GillSize => "gill-size",
            FeatureDomain::SporePrintColor => "spore-print-color",
            FeatureDomain::Odor => "odor",
        }
    }

    /// The `(label, code)` vocabulary, in declaration order.
    pub fn vocabulary(&self) -> &'static [(&'static str, char)] {
        match self {
            FeatureDomain::GillColor => GILL_COLOR_VOCAB,
            FeatureDomain::GillSize => GILL_SIZE_VOCAB,
            FeatureDomain::SporePrintColor => SPORE_PRINT_COLOR_VOCAB,
            FeatureDomain::Odor => ODOR_VOCAB,
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.vocabulary().iter().map(|&(label, _)| label).collect()
    }

    pub fn code_for_label(&self, label: &str) -> Option<char> {
        self.vocabulary()
            .iter()
            .find(|&&(l, _)| l == label)
            .map(|&(_, code)| code)
    }

    pub fn label_for_code(&self, code: char) -> Option<&'static str> {
        self.vocabulary()
            .iter()
            .find(|&&(_, c)| c == code)
            .map(|&(label, _)| label)
    }
}

/// Decoded classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edibility {
    Edible,
    Poisonous,
}

impl Edibility {
    pub const ALL: [Edibility; 2] = [Edibility::Edible, Edibility::Poisonous];

    pub fn code(&self) -> char {
        match self {
            Edibility::Edible => 'e',
            Edibility::Poisonous => 'p',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'e' => Some(Edibility::Edible),
            'p' => Some(Edibility::Poisonous),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Edibility::Edible => "edible",
            Edibility::Poisonous => "poisonous",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_sizes_are_fixed() {
        assert_eq!(FeatureDomain::GillColor.vocabulary().len(), 12);
        assert_eq!(FeatureDomain::GillSize.vocabulary().len(), 2);
        assert_eq!(FeatureDomain::SporePrintColor.vocabulary().len(), 9);
        assert_eq!(FeatureDomain::Odor.vocabulary().len(), 9);

        let product: usize = FEATURE_COLUMNS
            .iter()
            .map(|d| d.vocabulary().len())
            .product();
        assert_eq!(product, 1944);
    }

    #[test]
    fn label_and_code_lookups_are_bijective() {
        for domain in FEATURE_COLUMNS {
            for &(label, code) in domain.vocabulary() {
                assert_eq!(domain.code_for_label(label), Some(code));
                assert_eq!(domain.label_for_code(code), Some(label));
            }
        }
    }

    #[test]
    fn unknown_labels_and_codes_are_rejected() {
        assert_eq!(FeatureDomain::GillColor.code_for_label("magenta"), None);
        assert_eq!(FeatureDomain::GillSize.label_for_code('x'), None);
    }

    #[test]
    fn declaration_order_is_preserved() {
        assert_eq!(FeatureDomain::GillColor.vocabulary()[0], ("black", 'k'));
        assert_eq!(FeatureDomain::Odor.vocabulary()[0], ("almond", 'a'));
        assert_eq!(FeatureDomain::Odor.vocabulary()[8], ("spicy", 's'));
    }

    #[test]
    fn edibility_codes_round_trip() {
        for class in Edibility::ALL {
            assert_eq!(Edibility::from_code(class.code()), Some(class));
        }
        assert_eq!(Edibility::from_code('x'), None);
    }
}
