// src/dom/mod.rs
//! Arena-backed document model for the landing page.
//!
//! `remove` and `set_inner_html` release the detached subtree; its slots go
//! onto a free list and get reused by later insertions, so `NodeId`s of
//! removed nodes must not be used afterwards. Every query walks the attached
//! tree from the root, so detached nodes are invisible to lookups and
//! serialisation.

mod entities;
mod node;
mod parser;

pub use entities::{decode, escape_attr, escape_text};
pub use node::{Attribute, Element, Node, NodeData, NodeId};

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    pub fn parse(html: &str) -> Self {
        let mut doc = Self::new();
        let root = doc.root;
        parser::parse_into(&mut doc, root, html);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).and_then(Node::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0).map(|n| &mut n.data) {
            Some(NodeData::Element(el)) => Some(el),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    // ===== Tree mutation =====

    pub(crate) fn push(&mut self, data: NodeData) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = Node::new(data);
            return id;
        }
        self.nodes.push(Node::new(data));
        NodeId(self.nodes.len() - 1)
    }

    /// Puts `id` and its subtree back on the free list. `id` must be detached.
    fn release(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let blank = Node::new(NodeData::Comment(String::new()));
            let node = std::mem::replace(&mut self.nodes[next.0], blank);
            pending.extend(node.children);
            self.free.push(next);
        }
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element::new(tag)))
    }

    /// Creates a detached text node; `text` is plain text and gets escaped.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(escape_text(text)))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Unlinks `id` from its parent and frees its subtree.
    /// No-op for the root or detached nodes.
    pub fn remove(&mut self, id: NodeId) {
        if self.detach(id) {
            self.release(id);
        }
    }

    fn detach(&mut self, id: NodeId) -> bool {
        match self.nodes[id.0].parent.take() {
            Some(parent) => {
                self.nodes[parent.0].children.retain(|&c| c != id);
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Replaces all children of `id` with the nodes parsed from `html`.
    pub fn set_inner_html(&mut self, id: NodeId, html: &str) {
        let old = std::mem::take(&mut self.nodes[id.0].children);
        for child in old {
            self.nodes[child.0].parent = None;
            self.release(child);
        }
        parser::parse_into(self, id, html);
    }

    // ===== Queries =====

    /// Attached descendants of `id` in document order (excluding `id`).
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    fn elements_within(&self, scope: NodeId) -> impl Iterator<Item = (NodeId, &Element)> + '_ {
        self.descendants(scope)
            .into_iter()
            .filter_map(move |id| self.element(id).map(|el| (id, el)))
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements_within(self.root)
            .find(|(_, el)| el.id() == Some(id))
            .map(|(node, _)| node)
    }

    pub fn first_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.elements_within(self.root)
            .find(|(_, el)| el.tag == tag)
            .map(|(node, _)| node)
    }

    pub fn body(&self) -> NodeId {
        self.first_by_tag("body").unwrap_or(self.root)
    }

    /// Elements carrying every class in `classes` (`.a.b` selector).
    pub fn query_classes(&self, classes: &[&str]) -> Vec<NodeId> {
        self.query_classes_within(self.root, classes)
    }

    pub fn query_classes_within(&self, scope: NodeId, classes: &[&str]) -> Vec<NodeId> {
        self.elements_within(scope)
            .filter(|(_, el)| classes.iter().all(|c| el.has_class(c)))
            .map(|(node, _)| node)
            .collect()
    }

    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.query_classes(&[class])
    }

    pub fn first_with_class(&self, class: &str) -> Option<NodeId> {
        self.elements_within(self.root)
            .find(|(_, el)| el.has_class(class))
            .map(|(node, _)| node)
    }

    pub fn query_attr(&self, name: &str) -> Vec<NodeId> {
        self.elements_within(self.root)
            .filter(|(_, el)| el.has_attr(name))
            .map(|(node, _)| node)
            .collect()
    }

    /// Nearest inclusive ancestor carrying `class`, like `Element.closest('.class')`.
    pub fn closest_with_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.element(node).is_some_and(|el| el.has_class(class)) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    pub fn closest_by_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.element(node).is_some_and(|el| el.tag == tag) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    // ===== Element helpers (missing nodes are no-ops) =====

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attr(name, value);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.add_class(class))
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.remove_class(class))
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.toggle_class(class))
    }

    /// Concatenated, entity-decoded text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut raw = String::new();
        if let NodeData::Text(text) = &self.node(id).data {
            raw.push_str(text);
        }
        for node in self.descendants(id) {
            if let NodeData::Text(text) = &self.node(node).data {
                raw.push_str(text);
            }
        }
        decode(&raw)
    }

    // ===== Serialisation =====

    pub fn to_html(&self) -> String {
        self.inner_html(self.root)
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_node(child, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match &self.node(id).data {
            NodeData::Document => {
                for &child in self.children(id) {
                    self.write_node(child, out);
                }
            }
            NodeData::Doctype(decl) => {
                out.push_str("<!");
                out.push_str(decl);
                out.push('>');
            }
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for attr in &el.attrs {
                    out.push(' ');
                    out.push_str(&attr.name);
                    if let Some(value) = &attr.value {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }

                let children = self.children(id);
                if el.self_closing && children.is_empty() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                if parser::is_void(&el.tag) {
                    return;
                }
                for &child in children {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html><html><head><title>T</title></head><body><nav id="navLinks" class="nav-links"><a class="nav-lang-btn active">DE</a><a class="nav-lang-btn">EN</a></nav><section class="install-section"><div id="one" class="tab-content active"><p class="lang-content de active">Hallo &amp; tschüss</p></div></section></body></html>"#;

    #[test]
    fn serialisation_round_trips_own_markup() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.to_html(), PAGE);
    }

    #[test]
    fn id_class_and_closest_queries() {
        let doc = Document::parse(PAGE);
        let one = doc.get_element_by_id("one").unwrap();
        let section = doc.closest_with_class(one, "install-section").unwrap();
        assert_eq!(doc.element(section).unwrap().tag, "section");
        assert_eq!(doc.closest_with_class(one, "tab-content"), Some(one));

        assert_eq!(doc.query_class("nav-lang-btn").len(), 2);
        assert_eq!(doc.query_classes(&["lang-content", "de"]).len(), 1);
        assert!(doc.query_classes(&["lang-content", "en"]).is_empty());
        assert!(doc.get_element_by_id("missing").is_none());
    }

    #[test]
    fn text_content_decodes_entities() {
        let doc = Document::parse(PAGE);
        let p = doc.first_with_class("lang-content").unwrap();
        assert_eq!(doc.text_content(p), "Hallo & tschüss");
    }

    #[test]
    fn detached_nodes_disappear_from_queries() {
        let mut doc = Document::parse(PAGE);
        let body = doc.body();
        let area = doc.create_element("textarea");
        let text = doc.create_text("a<b");
        doc.append_child(area, text);
        doc.append_child(body, area);
        assert!(doc.is_attached(area));
        assert!(doc.to_html().contains("<textarea>a&lt;b</textarea>"));

        doc.remove(area);
        assert!(!doc.is_attached(area));
        assert_eq!(doc.to_html(), PAGE);
    }

    #[test]
    fn set_inner_html_replaces_children() {
        let mut doc = Document::parse(r#"<div id="c"><span>old</span></div>"#);
        let c = doc.get_element_by_id("c").unwrap();
        doc.set_inner_html(c, "<b>new</b>");
        assert_eq!(doc.inner_html(c), "<b>new</b>");
        doc.set_inner_html(c, "<b>new</b>");
        assert_eq!(doc.to_html(), r#"<div id="c"><b>new</b></div>"#);
    }

    #[test]
    fn removed_subtrees_are_reused() {
        let mut doc = Document::parse(PAGE);
        let body = doc.body();
        let slots = doc.slot_count();
        for _ in 0..100 {
            let area = doc.create_element("textarea");
            let text = doc.create_text("x");
            doc.append_child(area, text);
            doc.append_child(body, area);
            doc.remove(area);
        }
        assert!(doc.slot_count() <= slots + 2);
        assert_eq!(doc.to_html(), PAGE);

        let one = doc.get_element_by_id("one").unwrap();
        doc.set_inner_html(one, "<p>a</p><p>b</p>");
        let after_first = doc.slot_count();
        for _ in 0..50 {
            doc.set_inner_html(one, "<p>a</p><p>b</p>");
        }
        assert_eq!(doc.slot_count(), after_first);
        assert_eq!(doc.inner_html(one), "<p>a</p><p>b</p>");
    }

    #[test]
    fn removing_a_detached_node_does_not_free_it_twice() {
        let mut doc = Document::parse(PAGE);
        let body = doc.body();
        let area = doc.create_element("textarea");
        doc.append_child(body, area);
        doc.remove(area);
        doc.remove(area);
        let a = doc.create_element("a");
        let b = doc.create_element("b");
        assert_ne!(a, b);
    }

    #[test]
    fn class_helpers_ignore_non_elements() {
        let mut doc = Document::parse("text only");
        let text = doc.children(doc.root())[0];
        assert!(!doc.add_class(text, "x"));
        assert!(!doc.has_class(text, "x"));
    }
}
