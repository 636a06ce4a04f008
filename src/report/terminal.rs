use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::output::FileStatus;
use crate::pipeline::GeneratedUnit;

/// Render the run summary: one row per generated unit, plus the id mappings in verbose mode.
pub fn render(results: &[(GeneratedUnit, FileStatus)], verbose: bool, quiet: bool) {
    if quiet {
        let line: Vec<String> = results
            .iter()
            .map(|(unit, status)| {
                format!(
                    "{} {}: {} ids ({})",
                    unit.registry.kind,
                    unit.registry.version,
                    unit.names.len(),
                    colored_status(*status)
                )
            })
            .collect();
        println!("{}", line.join("  "));
        return;
    }

    println!(
        "\n {} v{}\n",
        "spdx-gen".bold(),
        env!("CARGO_PKG_VERSION")
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Registry").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Ids").add_attribute(Attribute::Bold),
            Cell::new("Deprecated").add_attribute(Attribute::Bold),
            Cell::new("Lossy names").add_attribute(Attribute::Bold),
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for (unit, status) in results {
        let (status_str, status_color) = match status {
            FileStatus::Written => ("✓ written", Color::Green),
            FileStatus::UpToDate => ("✓ up to date", Color::Green),
            FileStatus::Stale => ("✗ stale", Color::Red),
            FileStatus::Missing => ("✗ missing", Color::Red),
        };

        let lossy = lossy_names(unit);
        let lossy_color = if lossy > 0 { Color::Yellow } else { Color::Reset };

        table.add_row(vec![
            Cell::new(unit.registry.kind.to_string()),
            Cell::new(&unit.registry.version),
            Cell::new(unit.names.len()).set_alignment(CellAlignment::Right),
            Cell::new(unit.registry.dropped).set_alignment(CellAlignment::Right),
            Cell::new(lossy)
                .fg(lossy_color)
                .set_alignment(CellAlignment::Right),
            Cell::new(unit.path.display()),
            Cell::new(status_str)
                .fg(status_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);

    if verbose {
        for (unit, _) in results {
            println!("\n {} {}:\n", "[IDS]".cyan().bold(), unit.registry.kind);
            render_ids(unit);
        }
    }
    println!();
}

fn render_ids(unit: &GeneratedUnit) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("SPDX id").add_attribute(Attribute::Bold),
            Cell::new("Ada identifier").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
        ]);

    for (entry, name) in unit.registry.entries.iter().zip(&unit.names) {
        let name_cell = if entry.name.is_ascii() {
            Cell::new(&entry.name)
        } else {
            Cell::new(&entry.name).fg(Color::Yellow)
        };
        table.add_row(vec![Cell::new(&entry.id), Cell::new(name), name_cell]);
    }

    println!("{}", table);
}

fn colored_status(status: FileStatus) -> ColoredString {
    match status {
        FileStatus::Written | FileStatus::UpToDate => status.to_string().green(),
        FileStatus::Stale | FileStatus::Missing => status.to_string().red(),
    }
}

/// Display names that lose characters when quoted for Ada.
fn lossy_names(unit: &GeneratedUnit) -> usize {
    unit.registry
        .entries
        .iter()
        .filter(|e| !e.name.is_ascii())
        .count()
}
