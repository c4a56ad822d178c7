mod cli;
mod util;

use clap::Parser;
use console::style;
use forage_lib::{ForageError, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", style("error:").red().bold(), err);
        if matches!(err, ForageError::ArtifactNotFound { .. }) {
            eprintln!(
                "Run the training step to generate model.json and encoders.json, \
                 then point --model-dir (or FORAGE_MODEL_DIR) at them."
            );
        }
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    match cli.command {
        cli::Commands::Predict {
            gill_color,
            gill_size,
            spore_print_color,
            odor,
        } => {
            let ctx = cli::load_context(cli.model_dir)?;
            cli::predict::handle_predict_command(
                &ctx,
                gill_color,
                gill_size,
                spore_print_color,
                odor,
                cli.verbose,
            )
        }

        cli::Commands::Search => {
            let ctx = cli::load_context(cli.model_dir)?;
            cli::search::handle_search_command(&ctx, cli.verbose, cli.quiet)
        }

        cli::Commands::Vocab => cli::vocab::handle_vocab_command(),
    }
}
