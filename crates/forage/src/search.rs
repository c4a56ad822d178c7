//! Exhaustive search over every feature combination.
//!
//! Iterates the Cartesian product of the four vocabularies in declaration
//! order (gill-color outermost, odor innermost) and collects the combinations
//! the classifier predicts edible, in iteration order. A combination that
//! fails to encode is warned about and skipped; it never aborts the search.

use crate::domain::{Edibility, FeatureDomain, FEATURE_COLUMNS};
use crate::predict::{predict, FeatureSample};
use crate::store::ModelContext;

/// A combination that could not be run through the pipeline.
#[derive(Debug, Clone)]
pub struct SkippedCombination {
    pub sample: FeatureSample,
    pub reason: String,
}

/// Result of a full enumeration.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Combinations considered, edible or not.
    pub total: usize,
    /// Combinations predicted edible, in iteration order.
    pub edible: Vec<FeatureSample>,
    /// Combinations skipped due to encoding failures.
    pub skipped: Vec<SkippedCombination>,
}

/// Size of the full Cartesian product (12 x 2 x 9 x 9 = 1944).
pub fn total_combinations() -> usize {
    FEATURE_COLUMNS
        .iter()
        .map(|d| d.vocabulary().len())
        .product()
}

pub fn enumerate_edible(ctx: &ModelContext) -> SearchOutcome {
    enumerate_edible_with(ctx, |_| {})
}

/// Enumerate with a per-combination progress callback (receives the running
/// count of combinations considered so far).
pub fn enumerate_edible_with<F: FnMut(usize)>(ctx: &ModelContext, mut progress: F) -> SearchOutcome {
    let mut total = 0usize;
    let mut edible = Vec::new();
    let mut skipped = Vec::new();

    for &(_, gill_color) in FeatureDomain::GillColor.vocabulary() {
        for &(_, gill_size) in FeatureDomain::GillSize.vocabulary() {
            for &(_, spore_print_color) in FeatureDomain::SporePrintColor.vocabulary() {
                for &(_, odor) in FeatureDomain::Odor.vocabulary() {
                    total += 1;
                    progress(total);

                    let sample = FeatureSample {
                        gill_color,
                        gill_size,
                        spore_print_color,
                        odor,
                    };

                    match predict(ctx, &sample) {
                        Ok(Edibility::Edible) => edible.push(sample),
                        Ok(Edibility::Poisonous) => {}
                        Err(err) => {
                            log::warn!(
                                "skipping combination ({}, {}, {}, {}): {}",
                                gill_color,
                                gill_size,
                                spore_print_color,
                                odor,
                                err
                            );
                            skipped.push(SkippedCombination {
                                sample,
                                reason: err.to_string(),
                            });
                        }
                    }
                }
            }
        }
    }

    SearchOutcome {
        total,
        edible,
        skipped,
    }
}

/// Render one numbered combination block with labels and codes.
pub fn render_combination(number: usize, sample: &FeatureSample) -> String {
    let mut block = format!("Combination {}:", number);
    for (domain, code) in sample.codes() {
        let label = domain.label_for_code(code).unwrap_or("?");
        block.push_str(&format!("\n  {}: {} ({})", domain.name(), label, code));
    }
    block
}

/// Render the full text report: header with the total considered, one
/// numbered block per edible combination, then the summary count.
pub fn render_report(outcome: &SearchOutcome) -> String {
    let mut out = format!("Checked {} feature combinations.\n", outcome.total);

    if !outcome.skipped.is_empty() {
        out.push_str(&format!(
            "Skipped {} combinations that could not be encoded.\n",
            outcome.skipped.len()
        ));
    }

    if outcome.edible.is_empty() {
        out.push_str("\nNo edible combinations found.\n");
        return out;
    }

    for (i, sample) in outcome.edible.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_combination(i + 1, sample));
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} edible combinations found.\n",
        outcome.edible.len()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_block_renders_labels_and_codes() {
        let sample = FeatureSample {
            gill_color: 'k',
            gill_size: 'b',
            spore_print_color: 'k',
            odor: 'a',
        };
        insta::assert_snapshot!(render_combination(1, &sample), @r"
        Combination 1:
          gill-color: black (k)
          gill-size: broad (b)
          spore-print-color: black (k)
          odor: almond (a)
        ");
    }

    #[test]
    fn empty_result_reports_none_found() {
        let outcome = SearchOutcome {
            total: 1944,
            edible: Vec::new(),
            skipped: Vec::new(),
        };
        let report = render_report(&outcome);
        assert!(report.contains("Checked 1944 feature combinations."));
        assert!(report.contains("No edible combinations found."));
    }

    #[test]
    fn skips_are_counted_in_the_report() {
        let outcome = SearchOutcome {
            total: 1944,
            edible: Vec::new(),
            skipped: vec![SkippedCombination {
                sample: FeatureSample {
                    gill_color: 'k',
                    gill_size: 'n',
                    spore_print_color: 'k',
                    odor: 'a',
                },
                reason: "Unknown category code 'n' for domain gill-size".to_string(),
            }],
        };
        let report = render_report(&outcome);
        assert!(report.contains("Skipped 1 combinations"));
    }
}
