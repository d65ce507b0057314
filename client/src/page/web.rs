use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::Page;

/// The live document.
#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn select_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        let Ok(list) = scope.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn select_document(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl Page for WebPage {
    type Node = Element;

    fn hostname(&self) -> String {
        self.window.location().hostname().unwrap_or_default()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn head(&self) -> Option<Element> {
        self.document.head().map(Into::into)
    }

    fn table(&self) -> Option<Element> {
        self.document.query_selector("table").ok().flatten()
    }

    fn body_rows(&self, table: &Element) -> Vec<Element> {
        self.select_within(table, "tbody tr")
    }

    fn cells(&self, row: &Element) -> Vec<Element> {
        self.select_within(row, "td")
    }

    fn header_cells(&self, table: &Element) -> Vec<Element> {
        self.select_within(table, "th")
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        self.select_document(&format!(".{class}"))
    }

    fn has_meta(&self, name: &str) -> bool {
        self.document
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()
            .flatten()
            .is_some()
    }

    fn is_touch_capable(&self) -> bool {
        Reflect::has(self.window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn insert_before(&self, anchor: &Element, node: &Element) -> bool {
        let Some(parent) = anchor.parent_node() else {
            return false;
        };
        parent.insert_before(node, Some(anchor)).is_ok()
    }

    fn prepend_child(&self, parent: &Element, child: &Element) {
        let _ = parent.insert_before(child, parent.first_child().as_ref());
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        // SVG and other non-HTML elements carry no inline style object here.
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }
}
