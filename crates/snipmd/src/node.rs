//! Owned DOM node structure consumed by the Markdown converter.
//!
//! The converter never talks to an HTML parser directly. Any parser can build
//! this tree (see [`crate::html`] for the scraper adapter) and hand it over;
//! the converter only reads it.

use crate::utilities::{RAW_TEXT_ELEMENTS, VOID_ELEMENTS};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// A node of a parsed HTML document.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, etc.)
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g., "DIV", "#text" for text nodes)
    pub node_name: String,

    /// Character data for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in the order the parser reports them (scraper sorts them
    /// by name); only present for element nodes
    pub attributes: Option<Vec<(String, String)>>,

    /// Child nodes
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_uppercase(),
            node_value: None,
            attributes: Some(Vec::new()),
            children: Some(Vec::new()),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let attrs = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            attributes: Some(attrs),
            ..Self::element(tag_name)
        }
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: None,
            children: None,
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            attributes: None,
            children: None,
        }
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self {
            node_type: NodeType::DocumentFragment,
            node_name: "#document-fragment".to_string(),
            node_value: None,
            attributes: None,
            children: Some(Vec::new()),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        if let Some(ref mut children) = self.children {
            children.push(child);
        } else {
            self.children = Some(vec![child]);
        }
    }

    /// Builder-style [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// All descendant elements whose tag is one of `tags`, in document order.
    ///
    /// The node itself is never part of the result.
    pub fn find_all(&self, tags: &[&str]) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_descendants(tags, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tags: &[&str], found: &mut Vec<&'a Node>) {
        for child in self.element_children() {
            if tags.contains(&child.tag_name().as_str()) {
                found.push(child);
            }
            child.collect_descendants(tags, found);
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            NodeType::Comment => String::new(),
            _ => self.children().map(|child| child.text_content()).collect(),
        }
    }

    /// Serialize this node back to HTML
    pub fn outer_html(&self) -> String {
        match self.node_type {
            NodeType::Text => escape_html_text(self.node_value.as_deref().unwrap_or_default()),
            NodeType::Comment => {
                format!("<!--{}-->", self.node_value.as_deref().unwrap_or_default())
            }
            NodeType::Element => {
                let tag = self.tag_name();
                let attrs = self.attributes_string();
                let open = if attrs.is_empty() {
                    format!("<{}>", tag)
                } else {
                    format!("<{} {}>", tag, attrs)
                };

                if self.is_void_element() {
                    open
                } else {
                    format!("{}{}</{}>", open, self.inner_html(), tag)
                }
            }
            _ => self.inner_html(),
        }
    }

    /// Serialize the children of this node back to HTML
    ///
    /// Text inside raw-text elements such as `script` and `style` is
    /// emitted as is.
    pub fn inner_html(&self) -> String {
        let raw = self.is_element() && RAW_TEXT_ELEMENTS.contains(&self.tag_name().as_str());
        self.children()
            .map(|child| match child.node_value.as_deref() {
                Some(text) if raw && child.is_text() => text.to_string(),
                _ => child.outer_html(),
            })
            .collect()
    }

    fn attributes_string(&self) -> String {
        let Some(ref attrs) = self.attributes else {
            return String::new();
        };

        attrs
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, escape_html_attr(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_void_element(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag_name().as_str())
    }
}

/// Escape HTML attribute value
fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_html_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
