// src/dom/node.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Doctype(String),
    Element(Element),
    /// Raw source text, entities still encoded.
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.data {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// Attribute with its decoded value; `None` for bare boolean attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<Attribute>,
    /// Written as `<tag/>` in the source (SVG content).
    pub self_closing: bool,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            self_closing: false,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = Some(value.to_string()),
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value: Some(value.to_string()),
            }),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Returns `true` when the class list changed.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        let mut list: Vec<String> = self.classes().map(str::to_string).collect();
        list.push(class.to_string());
        self.set_attr("class", &list.join(" "));
        true
    }

    /// Returns `true` when the class list changed.
    pub fn remove_class(&mut self, class: &str) -> bool {
        if !self.has_class(class) {
            return false;
        }
        let list: Vec<String> = self
            .classes()
            .filter(|c| *c != class)
            .map(str::to_string)
            .collect();
        self.set_attr("class", &list.join(" "));
        true
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_operations() {
        let mut el = Element::new("DIV");
        assert_eq!(el.tag, "div");
        assert!(el.add_class("lang-content"));
        assert!(el.add_class("de"));
        assert!(!el.add_class("de"));
        assert_eq!(el.attr("class"), Some("lang-content de"));

        assert!(el.toggle_class("active"));
        assert!(el.has_class("active"));
        assert!(!el.toggle_class("active"));

        assert!(el.remove_class("lang-content"));
        assert!(!el.remove_class("missing"));
        assert_eq!(el.attr("class"), Some("de"));
    }

    #[test]
    fn bare_attributes_read_as_empty() {
        let el = Element {
            tag: "button".into(),
            attrs: vec![Attribute {
                name: "disabled".into(),
                value: None,
            }],
            self_closing: false,
        };
        assert_eq!(el.attr("disabled"), Some(""));
        assert!(el.attr("title").is_none());
    }
}
