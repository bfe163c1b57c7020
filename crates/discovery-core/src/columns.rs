//! Column selection derived from the criteria.

use tracing::debug;

use discovery_model::{
    ColumnCategory, ColumnConfig, ColumnId, FilterCriteria, contact_column_id,
};

/// Case-insensitive substring match in either direction.
pub fn loosely_matches(label: &str, option: &str) -> bool {
    let label = label.to_lowercase();
    let option = option.to_lowercase();
    label.contains(&option) || option.contains(&label)
}

fn industry_column_selected(column: &ColumnConfig, criteria: &FilterCriteria) -> bool {
    criteria
        .industry_specific()
        .iter()
        .any(|option| loosely_matches(&column.label, option))
}

fn contact_column_selected(column: &ColumnConfig, criteria: &FilterCriteria) -> bool {
    criteria
        .contacts()
        .iter()
        .filter_map(|function| contact_column_id(function))
        .any(|id| column.id == *id)
}

/// Recompute the `selected` flag of every derived column.
///
/// Industry columns follow the industry-specific selection through a loose
/// label match; contact columns follow the contact selection through the
/// fixed function → id table. Basic columns are returned unchanged.
pub fn derive_column_selection(
    columns: &[ColumnConfig],
    criteria: &FilterCriteria,
) -> Vec<ColumnConfig> {
    let derived: Vec<ColumnConfig> = columns
        .iter()
        .map(|column| {
            let selected = match column.category {
                ColumnCategory::Basic => column.selected,
                ColumnCategory::Industry => industry_column_selected(column, criteria),
                ColumnCategory::Contact => contact_column_selected(column, criteria),
            };
            ColumnConfig {
                selected,
                ..column.clone()
            }
        })
        .collect();
    debug!(
        selected = derived.iter().filter(|c| c.selected).count(),
        total = derived.len(),
        "derived column selection"
    );
    derived
}

/// Flip one column's `selected` flag. Returns false when the id is unknown.
pub fn toggle_column(columns: &mut [ColumnConfig], id: &ColumnId) -> bool {
    match columns.iter_mut().find(|column| &column.id == id) {
        Some(column) => {
            column.selected = !column.selected;
            true
        }
        None => false,
    }
}

/// Columns currently selected, in configuration order.
pub fn selected_columns(columns: &[ColumnConfig]) -> impl Iterator<Item = &ColumnConfig> {
    columns.iter().filter(|column| column.selected)
}
