pub mod predict;
pub mod search;
pub mod vocab;

use clap::{Parser, Subcommand};
use forage_lib::{Config, ModelContext, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forage")]
#[command(about = "Mushroom edibility prediction over a trained classifier", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Directory containing the model artifacts")]
    pub model_dir: Option<PathBuf>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, short = 'q', global = true, help = "Suppress non-essential output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Predict edibility for one set of features")]
    Predict {
        #[arg(long, help = "gill-color label (skips the prompt)")]
        gill_color: Option<String>,

        #[arg(long, help = "gill-size label (skips the prompt)")]
        gill_size: Option<String>,

        #[arg(long, help = "spore-print-color label (skips the prompt)")]
        spore_print_color: Option<String>,

        #[arg(long, help = "odor label (skips the prompt)")]
        odor: Option<String>,
    },

    #[command(about = "Enumerate every feature combination predicted edible")]
    Search,

    #[command(about = "List the feature vocabularies and their codes")]
    Vocab,
}

pub fn load_context(model_dir: Option<PathBuf>) -> Result<ModelContext> {
    let config = Config::new(model_dir)?;
    ModelContext::load(&config.model_dir)
}
