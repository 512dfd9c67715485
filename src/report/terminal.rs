use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement};

use super::table;
use crate::models::Component;

/// Print the `analyze` listing: project header, count, and component table.
pub fn render(components: &[Component], path: &Path, project_type: &str) {
    println!("\n {} v{}", "sbomgen".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Project: {}", path.display());
    println!(" Type:    {}\n", project_type.cyan());

    let dev = components.iter().filter(|c| c.is_dev_dependency()).count();
    println!(
        " Found {} components ({} development)\n",
        components.len().to_string().bold(),
        dev
    );

    if components.is_empty() {
        return;
    }

    let mut grid = table::build(components, true);
    grid.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Supplier").add_attribute(Attribute::Bold),
            Cell::new("PURL").add_attribute(Attribute::Bold),
        ]);

    println!("{}", grid);
}
