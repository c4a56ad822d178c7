pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod model;
pub mod predict;
pub mod search;
pub mod store;

pub use codec::{EncoderSet, OrdinalEncoder, CLASS_ENCODER_KEY};
pub use config::Config;
pub use domain::{Edibility, FeatureDomain, FEATURE_COLUMNS};
pub use error::{ForageError, Result};
pub use model::{DecisionTree, TreeNode};
pub use predict::{predict, FeatureSample};
pub use search::{
    enumerate_edible, enumerate_edible_with, render_report, total_combinations, SearchOutcome,
    SkippedCombination,
};
pub use store::ModelContext;
