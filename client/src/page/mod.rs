//! Capability-scoped access to the host page.
//!
//! Feature code never touches `web_sys::window()` directly; it receives a
//! [`Page`] and works on its opaque node handles. The browser implementation
//! is [`web::WebPage`]; tests drive the same code against an in-memory tree.

#[cfg(test)]
pub mod fake;
pub mod web;

use shugiin_shared::PartyRow;

pub trait Page {
    type Node: Clone;

    fn hostname(&self) -> String;
    fn body(&self) -> Option<Self::Node>;
    fn head(&self) -> Option<Self::Node>;
    /// The first `<table>` in the document.
    fn table(&self) -> Option<Self::Node>;
    /// `tbody tr` rows of `table`.
    fn body_rows(&self, table: &Self::Node) -> Vec<Self::Node>;
    /// `td` cells of `row`.
    fn cells(&self, row: &Self::Node) -> Vec<Self::Node>;
    /// `th` cells of `table`.
    fn header_cells(&self, table: &Self::Node) -> Vec<Self::Node>;
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;
    fn has_meta(&self, name: &str) -> bool;
    fn is_touch_capable(&self) -> bool;

    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    /// Insert `node` as the previous sibling of `anchor`.
    fn insert_before(&self, anchor: &Self::Node, node: &Self::Node) -> bool;
    fn prepend_child(&self, parent: &Self::Node, child: &Self::Node);
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    fn remove(&self, node: &Self::Node);

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_inner_html(&self, node: &Self::Node, html: &str);
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    /// An empty `value` clears the inline property.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
}

/// Create `<tag class="...">`.
pub fn create_with_class<P: Page>(page: &P, tag: &str, class: &str) -> Option<P::Node> {
    let node = page.create_element(tag)?;
    page.set_attribute(&node, "class", class);
    Some(node)
}

/// Text of the first cell, if the row has cells.
pub fn name_cell_text<P: Page>(page: &P, row: &P::Node) -> Option<String> {
    page.cells(row).first().map(|cell| page.text(cell))
}

/// Cell text of one body row. Rows without cells read as empty.
pub fn party_row<P: Page>(page: &P, row: &P::Node) -> PartyRow {
    let cells = page.cells(row);
    let text_at = |index: usize| cells.get(index).map(|c| page.text(c)).unwrap_or_default();
    PartyRow {
        name: text_at(0),
        abbreviation: text_at(1),
        seat_text: cells.last().map(|c| page.text(c)).unwrap_or_default(),
    }
}

/// All body rows of the table, in order, including the summary row.
pub fn party_rows<P: Page>(page: &P, table: &P::Node) -> Vec<PartyRow> {
    page.body_rows(table)
        .iter()
        .map(|row| party_row(page, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::fake::FakePage;
    use super::{Page, party_rows};

    #[test]
    fn reads_name_abbreviation_and_last_cell() {
        let page = FakePage::with_table(&[
            &["A党", "A", "10（3）"],
            &["B党", "B", "注", "5"],
            &["計", "", "15"],
        ]);
        let table = page.table().expect("table");
        let rows = party_rows(&page, &table);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].abbreviation, "A");
        assert_eq!(rows[1].seat_text, "5");
        assert!(rows[2].is_summary());
    }

    #[test]
    fn rows_without_cells_read_empty() {
        let page = FakePage::with_table(&[&[]]);
        let table = page.table().expect("table");
        let rows = party_rows(&page, &table);
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].seat_text, "");
    }
}
