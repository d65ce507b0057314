use crate::page::{Page, name_cell_text};

/// Labels for the first three columns, used for both headers and the
/// `data-label` attributes the mobile card layout reads.
pub const COLUMN_LABELS: [&str; 3] = ["会派名", "略称", "所属議員数"];

/// Relabel headers, tag body cells for the mobile layout and mark the table
/// for the slide-in reveal. Returns the body rows for click wiring.
pub fn modernize_table<P: Page>(page: &P) -> Vec<P::Node> {
    let Some(table) = page.table() else {
        return Vec::new();
    };
    page.add_class(&table, "slide-in");

    for (header, label) in page.header_cells(&table).iter().zip(COLUMN_LABELS) {
        page.set_text(header, label);
    }

    let rows = page.body_rows(&table);
    for row in &rows {
        for (cell, label) in page.cells(row).iter().zip(COLUMN_LABELS) {
            page.set_attribute(cell, "data-label", label);
        }
    }
    rows
}

/// Party name for the details modal: the row's first cell, if any.
pub fn clicked_party_name<P: Page>(page: &P, row: &P::Node) -> Option<String> {
    name_cell_text(page, row).filter(|name| !name.is_empty())
}
