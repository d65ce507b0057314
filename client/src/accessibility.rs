use crate::page::{Page, create_with_class};

pub const MAIN_CONTENT_ID: &str = "main-content";
pub const TABLE_LABEL: &str = "衆議院会派別所属議員数一覧";

const SKIP_LINK_HIDDEN_TOP: &str = "-40px";
const SKIP_LINK_FOCUSED_TOP: &str = "6px";

/// Prepend a skip link to `<body>`, give the table an id, role and label, and
/// scope its header cells. Returns the skip link for focus wiring.
pub fn improve_accessibility<P: Page>(page: &P) -> Option<P::Node> {
    let skip_link = insert_skip_link(page);

    if let Some(table) = page.table() {
        page.set_attribute(&table, "id", MAIN_CONTENT_ID);
        page.set_attribute(&table, "role", "table");
        page.set_attribute(&table, "aria-label", TABLE_LABEL);
        for header in page.header_cells(&table) {
            page.set_attribute(&header, "scope", "col");
        }
    }

    skip_link
}

fn insert_skip_link<P: Page>(page: &P) -> Option<P::Node> {
    let body = page.body()?;
    let link = create_with_class(page, "a", "sr-only")?;
    page.set_attribute(&link, "href", &format!("#{MAIN_CONTENT_ID}"));
    page.set_text(&link, "メインコンテンツへスキップ");
    for (property, value) in [
        ("position", "absolute"),
        ("top", SKIP_LINK_HIDDEN_TOP),
        ("left", "6px"),
        ("background", "#000"),
        ("color", "#fff"),
        ("padding", "8px"),
        ("text-decoration", "none"),
        ("z-index", "100000"),
        ("border-radius", "4px"),
    ] {
        page.set_style(&link, property, value);
    }
    page.prepend_child(&body, &link);
    Some(link)
}

/// Slide the skip link into view while it has keyboard focus.
pub fn set_skip_link_focused<P: Page>(page: &P, link: &P::Node, focused: bool) {
    let top = if focused {
        SKIP_LINK_FOCUSED_TOP
    } else {
        SKIP_LINK_HIDDEN_TOP
    };
    page.set_style(link, "top", top);
}
