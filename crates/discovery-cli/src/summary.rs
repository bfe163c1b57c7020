//! Table rendering for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use discovery_cli::DiscoverReport;
use discovery_model::StepStatus;

pub fn print_report(report: &DiscoverReport) {
    println!("Flow: {} ({})", report.flow.label(), report.flow);
    print_steps(report);
    if let Some(blocked) = &report.blocked {
        println!("Blocked at {}: {}", blocked.step, blocked.requirement);
    }
    if report.fetched {
        print_results(report);
        print_insights(report);
    }
    if let Some(save) = &report.save {
        println!("{}", save.title);
        match &save.message {
            Some(message) => println!("  {message}"),
            None => println!("  not completed"),
        }
    }
}

fn print_steps(report: &DiscoverReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Description"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, step) in report.steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&step.title),
            dim_cell(&step.description),
            status_cell(step.status),
        ]);
    }
    println!("{table}");
}

fn print_results(report: &DiscoverReport) {
    println!("Results: {}", report.rows.len());
    if report.rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(
        report
            .columns
            .iter()
            .map(|column| header_cell(&column.label))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in &report.rows {
        table.add_row(row.cells.iter().map(|cell| text_cell(cell)).collect::<Vec<_>>());
    }
    println!("{table}");
}

fn print_insights(report: &DiscoverReport) {
    let insights = &report.insights;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Insight"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Total companies"),
        Cell::new(insights.total_companies),
    ]);
    table.add_row(vec![
        Cell::new("Top industries"),
        text_cell(&insights.top_industries.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("Average company size"),
        Cell::new(&insights.average_company_size),
    ]);
    table.add_row(vec![
        Cell::new("Cities"),
        Cell::new(insights.geographic_spread),
    ]);
    align_column(&mut table, 1, CellAlignment::Left);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: StepStatus) -> Cell {
    match status {
        StepStatus::Completed => Cell::new("done").fg(Color::Green),
        StepStatus::Current => Cell::new("current")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        StepStatus::Upcoming => dim_cell("upcoming"),
    }
}

/// Empty values render as a dimmed dash.
fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
