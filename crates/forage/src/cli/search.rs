use console::style;
use forage_lib::{search, ModelContext, Result};

pub fn handle_search_command(ctx: &ModelContext, verbose: bool, quiet: bool) -> Result<()> {
    let total = search::total_combinations();

    let pb = if quiet {
        None
    } else {
        Some(crate::util::progress::create_progress_bar(
            total as u64,
            "Evaluating feature combinations",
        ))
    };

    let outcome = search::enumerate_edible_with(ctx, |_| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if verbose && !outcome.skipped.is_empty() {
        println!("{} Skipped combinations:", style(">>>").cyan());
        for skip in &outcome.skipped {
            println!(
                "  ({}, {}, {}, {}): {}",
                skip.sample.gill_color,
                skip.sample.gill_size,
                skip.sample.spore_print_color,
                skip.sample.odor,
                skip.reason
            );
        }
        println!();
    }

    print!("{}", search::render_report(&outcome));

    Ok(())
}
