use shugiin_shared::filter::filter_rows;
use shugiin_shared::is_summary_name;

use crate::page::{Page, create_with_class, name_cell_text};

pub const SEARCH_PLACEHOLDER: &str = "会派名で検索...";

/// Handles to the injected search bar.
#[derive(Clone)]
pub struct SearchBar<N> {
    pub container: N,
    pub input: N,
    pub count: N,
}

/// Insert the search bar above the table and show the initial party count.
pub fn insert_search_bar<P: Page>(page: &P) -> Option<SearchBar<P::Node>> {
    let table = page.table()?;

    let container = create_with_class(page, "div", "search-filter fade-in")?;
    let input = create_with_class(page, "input", "search-input")?;
    page.set_attribute(&input, "type", "text");
    page.set_attribute(&input, "placeholder", SEARCH_PLACEHOLDER);
    page.set_attribute(&input, "aria-label", SEARCH_PLACEHOLDER);

    let info = create_with_class(page, "div", "filter-info")?;
    let count = page.create_element("span")?;
    page.set_attribute(&count, "id", "total-count");
    let suffix = page.create_element("span")?;
    page.set_text(&suffix, "件の会派が表示されています");
    page.append_child(&info, &count);
    page.append_child(&info, &suffix);

    page.append_child(&container, &input);
    page.append_child(&container, &info);
    if !page.insert_before(&table, &container) {
        return None;
    }

    let initial = page
        .body_rows(&table)
        .iter()
        .filter(|row| !name_cell_text(page, *row).is_some_and(|name| is_summary_name(&name)))
        .count();
    page.set_text(&count, &initial.to_string());

    Some(SearchBar {
        container,
        input,
        count,
    })
}

/// Show rows whose name contains `query` (case-insensitively), hide the rest,
/// and write the visible non-summary count into `count`.
pub fn apply_filter<P: Page>(page: &P, query: &str, count: &P::Node) -> Option<usize> {
    let table = page.table()?;
    let rows = page.body_rows(&table);
    let names: Vec<Option<String>> = rows.iter().map(|row| name_cell_text(page, row)).collect();
    let outcome = filter_rows(&names, query);

    for (row, visible) in rows.iter().zip(&outcome.visible) {
        if let Some(visible) = visible {
            page.set_style(row, "display", if *visible { "" } else { "none" });
        }
    }
    page.set_text(count, &outcome.visible_count.to_string());
    Some(outcome.visible_count)
}
