use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_cli::commands::{CheckReport, FilterReport};
use roster_map::ColumnStatus;
use roster_model::{CandidateOption, ImportSummary};

pub fn print_filter(report: &FilterReport) {
    println!("Query: {:?} (threshold {})", report.query, report.threshold);
    println!("{}", filter_table(report));
}

fn filter_table(report: &FilterReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Key"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, candidate) in report.candidates.iter().enumerate() {
        let label = candidate.label(&report.uncategorized_label);
        table.add_row(vec![
            Cell::new(index + 1),
            kind_cell(candidate),
            dim_cell(candidate.key()),
            Cell::new(label),
        ]);
    }
    table
}

pub fn print_check(report: &CheckReport) {
    println!("{}", check_table(report));
    let summary = &report.summary;
    println!(
        "{} columns: {} ready, {} need config, {} need mapping, {} skipped",
        summary.total_columns,
        summary.ready,
        summary.needs_config,
        summary.needs_mapping,
        summary.skipped
    );
    if report.can_proceed {
        println!("Mapping complete.");
    } else {
        eprintln!("Mapping incomplete.");
    }
}

fn check_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Target"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in &report.columns {
        let target = if column.target.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&column.target)
        };
        table.add_row(vec![
            Cell::new(column.index),
            Cell::new(&column.title),
            target,
            status_cell(column.status),
        ]);
    }
    table
}

pub fn print_import_summary(summary: &ImportSummary) {
    println!("{}", import_summary_table(summary));
}

fn import_summary_table(summary: &ImportSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("People"), header_cell("Total")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Created"),
        count_cell(summary.created.total, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Updated"),
        count_cell(summary.updated.total, Color::Cyan),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn kind_cell(candidate: &CandidateOption) -> Cell {
    match candidate {
        CandidateOption::Existing { .. } => Cell::new("existing"),
        CandidateOption::Uncategorized => Cell::new("uncategorized").fg(Color::DarkGrey),
        CandidateOption::CreateNew { .. } => Cell::new("create")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    }
}

fn status_cell(status: ColumnStatus) -> Cell {
    let cell = Cell::new(status.as_str());
    match status {
        ColumnStatus::Ready => cell.fg(Color::Green),
        ColumnStatus::Skipped => cell.add_attribute(Attribute::Dim),
        ColumnStatus::NeedsConfig | ColumnStatus::NeedsMapping => {
            cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
        }
    }
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}
