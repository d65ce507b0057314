use std::cell::RefCell;
use std::collections::BTreeMap;

use super::Page;

#[derive(Debug, Default, Clone)]
struct NodeData {
    tag: String,
    text: String,
    inner_html: Option<String>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// In-memory document for exercising feature code without a browser.
/// Node handles are arena indices; index 0 is the document root.
pub struct FakePage {
    nodes: RefCell<Vec<NodeData>>,
    host: String,
    touch: bool,
}

const ROOT: usize = 0;
const HEAD: usize = 1;
const BODY: usize = 2;

impl FakePage {
    pub fn empty() -> Self {
        let page = Self {
            nodes: RefCell::new(Vec::new()),
            host: shugiin_shared::config::TARGET_HOST.to_string(),
            touch: false,
        };
        page.alloc("html");
        let head = page.alloc("head");
        let body = page.alloc("body");
        page.append_child(&ROOT, &head);
        page.append_child(&ROOT, &body);
        page
    }

    /// A body containing one wrapper `<div>` around a table with a three
    /// column header and one body row per entry of `rows`.
    pub fn with_table(rows: &[&[&str]]) -> Self {
        let page = Self::empty();
        let wrapper = page.alloc("div");
        page.append_child(&BODY, &wrapper);
        let table = page.alloc("table");
        page.append_child(&wrapper, &table);

        let thead = page.alloc("thead");
        page.append_child(&table, &thead);
        let header_row = page.alloc("tr");
        page.append_child(&thead, &header_row);
        for label in ["名称", "略", "人数"] {
            let th = page.alloc("th");
            page.set_text(&th, label);
            page.append_child(&header_row, &th);
        }

        let tbody = page.alloc("tbody");
        page.append_child(&table, &tbody);
        for cells in rows {
            let tr = page.alloc("tr");
            page.append_child(&tbody, &tr);
            for text in cells.iter() {
                let td = page.alloc("td");
                page.set_text(&td, text);
                page.append_child(&tr, &td);
            }
        }
        page
    }

    pub fn with_touch(mut self) -> Self {
        self.touch = true;
        self
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    fn alloc(&self, tag: &str) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        });
        nodes.len() - 1
    }

    fn detach(&self, node: usize) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[node].parent.take() {
            nodes[parent].children.retain(|&c| c != node);
        }
    }

    fn children_tagged(&self, node: usize, tag: &str) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        nodes[node]
            .children
            .iter()
            .copied()
            .filter(|&c| nodes[c].tag == tag)
            .collect()
    }

    /// Attached nodes in document order.
    fn walk(&self) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        let mut order = Vec::new();
        let mut stack = vec![ROOT];
        while let Some(n) = stack.pop() {
            order.push(n);
            stack.extend(nodes[n].children.iter().rev().copied());
        }
        order
    }

    fn descendants(&self, node: usize) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        let mut order = Vec::new();
        let mut stack: Vec<usize> = nodes[node].children.iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            order.push(n);
            stack.extend(nodes[n].children.iter().rev().copied());
        }
        order
    }

    pub fn body_node(&self) -> usize {
        BODY
    }

    pub fn tag(&self, node: usize) -> String {
        self.nodes.borrow()[node].tag.clone()
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.borrow()[node].parent
    }

    pub fn children(&self, node: usize) -> Vec<usize> {
        self.nodes.borrow()[node].children.clone()
    }

    pub fn style(&self, node: usize, property: &str) -> Option<String> {
        self.nodes.borrow()[node].styles.get(property).cloned()
    }

    pub fn attribute(&self, node: usize, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        if name == "class" {
            return Some(nodes[node].classes.join(" "));
        }
        nodes[node].attributes.get(name).cloned()
    }

    pub fn has_class(&self, node: usize, class: &str) -> bool {
        self.nodes.borrow()[node].classes.iter().any(|c| c == class)
    }

    pub fn inner_html(&self, node: usize) -> Option<String> {
        self.nodes.borrow()[node].inner_html.clone()
    }

    pub fn is_attached(&self, node: usize) -> bool {
        self.walk().contains(&node)
    }

    pub fn first_with_class(&self, class: &str) -> Option<usize> {
        self.elements_with_class(class).into_iter().next()
    }

    pub fn elements_with_tag(&self, tag: &str) -> Vec<usize> {
        let order = self.walk();
        let nodes = self.nodes.borrow();
        order.into_iter().filter(|&n| nodes[n].tag == tag).collect()
    }
}

fn strip_tags(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

impl Page for FakePage {
    type Node = usize;

    fn hostname(&self) -> String {
        self.host.clone()
    }

    fn body(&self) -> Option<usize> {
        Some(BODY)
    }

    fn head(&self) -> Option<usize> {
        Some(HEAD)
    }

    fn table(&self) -> Option<usize> {
        self.elements_with_tag("table").into_iter().next()
    }

    fn body_rows(&self, table: &usize) -> Vec<usize> {
        self.children_tagged(*table, "tbody")
            .into_iter()
            .flat_map(|tbody| self.children_tagged(tbody, "tr"))
            .collect()
    }

    fn cells(&self, row: &usize) -> Vec<usize> {
        self.children_tagged(*row, "td")
    }

    fn header_cells(&self, table: &usize) -> Vec<usize> {
        let nodes = self.descendants(*table);
        let data = self.nodes.borrow();
        nodes.into_iter().filter(|&n| data[n].tag == "th").collect()
    }

    fn elements_with_class(&self, class: &str) -> Vec<usize> {
        let order = self.walk();
        let nodes = self.nodes.borrow();
        order
            .into_iter()
            .filter(|&n| nodes[n].classes.iter().any(|c| c == class))
            .collect()
    }

    fn has_meta(&self, name: &str) -> bool {
        self.elements_with_tag("meta")
            .into_iter()
            .any(|n| self.attribute(n, "name").as_deref() == Some(name))
    }

    fn is_touch_capable(&self) -> bool {
        self.touch
    }

    fn create_element(&self, tag: &str) -> Option<usize> {
        Some(self.alloc(tag))
    }

    fn insert_before(&self, anchor: &usize, node: &usize) -> bool {
        let Some(parent) = self.parent(*anchor) else {
            return false;
        };
        self.detach(*node);
        let mut nodes = self.nodes.borrow_mut();
        let Some(pos) = nodes[parent].children.iter().position(|&c| c == *anchor) else {
            return false;
        };
        nodes[parent].children.insert(pos, *node);
        nodes[*node].parent = Some(parent);
        true
    }

    fn prepend_child(&self, parent: &usize, child: &usize) {
        self.detach(*child);
        let mut nodes = self.nodes.borrow_mut();
        nodes[*parent].children.insert(0, *child);
        nodes[*child].parent = Some(*parent);
    }

    fn append_child(&self, parent: &usize, child: &usize) {
        self.detach(*child);
        let mut nodes = self.nodes.borrow_mut();
        nodes[*parent].children.push(*child);
        nodes[*child].parent = Some(*parent);
    }

    fn remove(&self, node: &usize) {
        self.detach(*node);
    }

    fn text(&self, node: &usize) -> String {
        let own = {
            let nodes = self.nodes.borrow();
            match &nodes[*node].inner_html {
                Some(html) => strip_tags(html),
                None => nodes[*node].text.clone(),
            }
        };
        let mut text = own;
        for child in self.children(*node) {
            text.push_str(&self.text(&child));
        }
        text
    }

    fn set_text(&self, node: &usize, text: &str) {
        for child in self.children(*node) {
            self.detach(child);
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes[*node].text = text.to_string();
        nodes[*node].inner_html = None;
    }

    fn set_inner_html(&self, node: &usize, html: &str) {
        for child in self.children(*node) {
            self.detach(child);
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes[*node].text.clear();
        nodes[*node].inner_html = Some(html.to_string());
    }

    fn set_attribute(&self, node: &usize, name: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if name == "class" {
            nodes[*node].classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            nodes[*node]
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn add_class(&self, node: &usize, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if !nodes[*node].classes.iter().any(|c| c == class) {
            nodes[*node].classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &usize, class: &str) {
        self.nodes.borrow_mut()[*node].classes.retain(|c| c != class);
    }

    fn set_style(&self, node: &usize, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if value.is_empty() {
            nodes[*node].styles.remove(property);
        } else {
            nodes[*node]
                .styles
                .insert(property.to_string(), value.to_string());
        }
    }
}
