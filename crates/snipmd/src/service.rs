//! SnipService - the main entry point for HTML to Markdown conversion.

use crate::node::{Node, NodeType};
use crate::rules::{self, TableScope, TagRule};
use crate::utilities::{escape_markdown, trim_line_ends};

/// Options for SnipService
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Where table rows and cells are looked up
    pub table_scope: TableScope,
}

/// An element that was passed through as HTML, either because its tag has
/// no rule or because its rule rendered nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Lowercase tag name
    pub tag: String,
    /// The outer HTML emitted in place of Markdown
    pub html: String,
}

/// Result of converting one subtree.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub markdown: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// The main service for converting a DOM subtree to Markdown
#[derive(Debug, Clone, Default)]
pub struct SnipService {
    options: ConvertOptions,
}

impl SnipService {
    /// Create a new SnipService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a SnipService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    /// Convert a node and strip trailing whitespace from every output line.
    pub fn convert(&self, node: &Node) -> Conversion {
        let mut conversion = self.render(node);
        conversion.markdown = trim_line_ends(&conversion.markdown);
        conversion
    }

    /// Convert a node exactly as the rules produce it, without cleanup.
    pub fn render(&self, node: &Node) -> Conversion {
        let mut walker = Walker::new(&self.options);
        let markdown = walker.node(node);
        Conversion {
            markdown,
            diagnostics: walker.diagnostics,
        }
    }

    /// Parse `html`, select the first element matching `selector` and convert it.
    #[cfg(feature = "html")]
    pub fn snip(&self, html: &str, selector: &str) -> crate::Result<Conversion> {
        let root = crate::html::select_first(html, selector)?;
        tracing::debug!(selector, tag = %root.tag_name(), "selected root element");
        Ok(self.convert(&root))
    }
}

/// Depth-first conversion state for a single run.
pub(crate) struct Walker<'a> {
    options: &'a ConvertOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Walker<'a> {
    fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn options(&self) -> &ConvertOptions {
        self.options
    }

    /// Convert any node
    pub(crate) fn node(&mut self, node: &Node) -> String {
        match node.node_type {
            NodeType::Element => {
                let rule = rules::rule_for(&node.node_name);
                let markdown = rules::render(rule, node, self);
                // A rule that renders nothing counts as a miss; rows are
                // exempt since their cells are consumed by the table.
                if markdown.is_empty() && rule.is_known() && rule != TagRule::Row {
                    self.keep(node)
                } else {
                    markdown
                }
            }
            NodeType::Text => {
                let text = node.node_value.as_deref().unwrap_or_default();
                if text.trim().is_empty() {
                    String::new()
                } else {
                    escape_markdown(text)
                }
            }
            NodeType::Comment => String::new(),
            NodeType::DocumentFragment => self.children(node),
        }
    }

    /// Convert the children of a node and concatenate the results
    pub(crate) fn children(&mut self, node: &Node) -> String {
        node.children().map(|child| self.node(child)).collect()
    }

    /// Emit an element as raw HTML and record it
    pub(crate) fn keep(&mut self, el: &Node) -> String {
        let html = el.outer_html();
        let tag = el.tag_name();
        tracing::warn!(tag = %tag, "no markdown for element, keeping html: {}", html);
        self.diagnostics.push(Diagnostic {
            tag,
            html: html.clone(),
        });
        html
    }
}
