use shugiin_shared::config::VIEWPORT_CONTENT;

use crate::page::Page;

/// Add a viewport meta tag if the page lacks one, and flag touch devices.
/// Returns the table when swipe handling should be attached to it.
pub fn optimize_for_mobile<P: Page>(page: &P) -> Option<P::Node> {
    if !page.has_meta("viewport")
        && let Some(head) = page.head()
        && let Some(meta) = page.create_element("meta")
    {
        page.set_attribute(&meta, "name", "viewport");
        page.set_attribute(&meta, "content", VIEWPORT_CONTENT);
        page.append_child(&head, &meta);
    }

    if !page.is_touch_capable() {
        return None;
    }
    if let Some(body) = page.body() {
        page.add_class(&body, "touch-device");
    }
    page.table()
}

#[cfg(test)]
mod tests {
    use super::optimize_for_mobile;
    use crate::page::Page;
    use crate::page::fake::FakePage;

    #[test]
    fn adds_viewport_once() {
        let page = FakePage::with_table(&[]);
        optimize_for_mobile(&page);
        optimize_for_mobile(&page);
        let metas = page.elements_with_tag("meta");
        assert_eq!(metas.len(), 1);
        assert_eq!(
            page.attribute(metas[0], "content").as_deref(),
            Some("width=device-width, initial-scale=1.0")
        );
    }

    #[test]
    fn desktop_gets_no_swipe_target() {
        let page = FakePage::with_table(&[]);
        assert!(optimize_for_mobile(&page).is_none());
        assert!(!page.has_class(page.body_node(), "touch-device"));
    }

    #[test]
    fn touch_device_flags_body_and_returns_table() {
        let page = FakePage::with_table(&[]).with_touch();
        assert_eq!(optimize_for_mobile(&page), page.table());
        assert!(page.has_class(page.body_node(), "touch-device"));
    }
}
