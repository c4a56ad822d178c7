use forage_lib::{OrdinalEncoder, FEATURE_COLUMNS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn label_and_code_form_a_bijection(domain_idx in 0usize..4, pick in 0usize..64) {
        let domain = FEATURE_COLUMNS[domain_idx];
        let vocab = domain.vocabulary();
        let (label, code) = vocab[pick % vocab.len()];

        prop_assert_eq!(domain.code_for_label(label), Some(code));
        prop_assert_eq!(domain.label_for_code(code), Some(label));
    }

    #[test]
    fn encoding_then_decoding_returns_the_code(domain_idx in 0usize..4, pick in 0usize..64) {
        let domain = FEATURE_COLUMNS[domain_idx];
        let codes: Vec<char> = domain.vocabulary().iter().map(|&(_, c)| c).collect();
        let encoder = OrdinalEncoder::fit(&codes);
        let code = codes[pick % codes.len()];

        let index = encoder.transform(domain.name(), code).unwrap();
        prop_assert_eq!(encoder.inverse_transform(index), Some(code));
        prop_assert!(index < codes.len());
    }
}
