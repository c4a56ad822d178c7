use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use forage_lib::{predict, Edibility, FeatureDomain, FeatureSample, ForageError, ModelContext, Result};

pub fn handle_predict_command(
    ctx: &ModelContext,
    gill_color: Option<String>,
    gill_size: Option<String>,
    spore_print_color: Option<String>,
    odor: Option<String>,
    verbose: bool,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let term = Term::stdout();

    let sample = FeatureSample {
        gill_color: resolve_code(FeatureDomain::GillColor, gill_color, &theme, &term)?,
        gill_size: resolve_code(FeatureDomain::GillSize, gill_size, &theme, &term)?,
        spore_print_color: resolve_code(
            FeatureDomain::SporePrintColor,
            spore_print_color,
            &theme,
            &term,
        )?,
        odor: resolve_code(FeatureDomain::Odor, odor, &theme, &term)?,
    };

    if verbose {
        let encoded = ctx.encoders().encode_sample(&sample)?;
        println!(
            "{} Encoded feature vector: {:?}",
            style(">>>").cyan(),
            encoded
        );
    }

    let prediction = predict(ctx, &sample)?;

    println!();
    match prediction {
        Edibility::Edible => println!(
            "{}",
            style(format!(
                "This mushroom is predicted {} ({}).",
                prediction.label(),
                prediction.code()
            ))
            .green()
            .bold()
        ),
        Edibility::Poisonous => println!(
            "{}",
            style(format!(
                "This mushroom is predicted {} ({}).",
                prediction.label(),
                prediction.code()
            ))
            .yellow()
            .bold()
        ),
    }

    println!("\nSelected features:");
    for (domain, code) in sample.codes() {
        println!(
            "  {}: {} ({})",
            domain.name(),
            domain.label_for_code(code).unwrap_or("?"),
            code
        );
    }

    Ok(())
}

/// Resolve one domain value: take the flag label when given, otherwise prompt
/// with a single-select over the labels in declaration order.
fn resolve_code(
    domain: FeatureDomain,
    preset: Option<String>,
    theme: &ColorfulTheme,
    term: &Term,
) -> Result<char> {
    if let Some(label) = preset {
        return domain
            .code_for_label(&label)
            .ok_or_else(|| ForageError::UnknownLabel {
                domain: domain.name().to_string(),
                label,
            });
    }

    let labels = domain.labels();
    let selection = Select::with_theme(theme)
        .with_prompt(domain.name())
        .items(&labels)
        .default(0)
        .interact_on(term)?;

    Ok(domain.vocabulary()[selection].1)
}
