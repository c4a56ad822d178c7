use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use forage_lib::{Result, FEATURE_COLUMNS};

pub fn handle_vocab_command() -> Result<()> {
    for domain in FEATURE_COLUMNS {
        println!("\n{}", style(domain.name()).bold().cyan());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Label").fg(Color::Cyan),
            Cell::new("Code").fg(Color::Cyan),
        ]);

        for &(label, code) in domain.vocabulary() {
            table.add_row(vec![Cell::new(label), Cell::new(code)]);
        }

        println!("{}", table);
    }

    Ok(())
}
