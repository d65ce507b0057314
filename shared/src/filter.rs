use crate::party::is_summary_name;

/// Case-insensitive substring match of `query` against a row's name cell.
/// An empty query matches everything.
pub fn row_matches(name_cell: &str, query: &str) -> bool {
    name_cell.to_lowercase().contains(&query.to_lowercase())
}

/// Visibility decision for one pass over the table body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// `None` for rows without a name cell; those are left as they are.
    pub visible: Vec<Option<bool>>,
    /// Visible rows that are not the summary row.
    pub visible_count: usize,
}

/// Decide row visibility for `query`. `name_cells` holds each row's first-cell
/// text, or `None` when the row has no cells.
pub fn filter_rows<S: AsRef<str>>(name_cells: &[Option<S>], query: &str) -> FilterOutcome {
    let mut outcome = FilterOutcome {
        visible: Vec::with_capacity(name_cells.len()),
        visible_count: 0,
    };
    for cell in name_cells {
        let decision = cell.as_ref().map(|text| {
            let text = text.as_ref();
            let visible = row_matches(text, query);
            if visible && !is_summary_name(text) {
                outcome.visible_count += 1;
            }
            visible
        });
        outcome.visible.push(decision);
    }
    outcome
}
