use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use prdkit_core::list_templates as catalog;

pub fn list_templates() {
    let templates = catalog();

    println!("{}", "PRD Templates".blue().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["ID", "Name", "Category", "Description"]);

    for template in templates {
        table.add_row(vec![
            template.id.as_str(),
            template.name.as_str(),
            template.category.label(),
            template.description.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "{}",
        "Use 'prdkit generate --template <id>' to start from one".dimmed()
    );
}
