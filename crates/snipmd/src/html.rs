//! HTML parsing and selection support.
//!
//! This module parses HTML strings with scraper, resolves CSS selectors, and
//! converts the selected element into the Node structure used by the
//! converter.

use scraper::{ElementRef, Html, Node as ScraperNode, Selector};

use crate::node::Node;
use crate::{Result, SnipError};

/// Parse an HTML fragment into a Node tree.
///
/// The returned node is a document fragment holding the parsed top-level
/// nodes.
///
/// # Example
///
/// ```rust
/// use snipmd::{parse_html, SnipService};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let markdown = SnipService::new().convert(&node).markdown;
/// assert_eq!(markdown, "# Hello *World*\n\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let fragment = Html::parse_fragment(html);
    let mut root = Node::document_fragment();
    append_children(&mut root, fragment.root_element());
    root
}

/// Parse an HTML document and return the first element matching `selector`,
/// in document order.
pub fn select_first(html: &str, selector: &str) -> Result<Node> {
    let parsed = Selector::parse(selector).map_err(|e| SnipError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    document
        .select(&parsed)
        .next()
        .map(scraper_to_node)
        .ok_or_else(|| SnipError::NoMatch(selector.to_string()))
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    append_children(&mut node, element);
    node
}

fn append_children(node: &mut Node, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnipService;

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p><!-- c -->");
        assert_eq!(node.children().count(), 2);
        let p = node.element_children().next().unwrap();
        assert_eq!(p.tag_name(), "p");
        assert_eq!(p.text_content(), "Hello World");
    }

    #[test]
    fn test_select_first_in_document_order() {
        let html = "<div class=x>one</div><section><div class=x>two</div></section>";
        let node = select_first(html, ".x").unwrap();
        assert_eq!(node.text_content(), "one");
    }

    #[test]
    fn test_select_keeps_attributes_and_comments() {
        let html = r#"<div id="main"><a href="/x">go</a><!-- note --></div>"#;
        let node = select_first(html, "#main").unwrap();
        assert_eq!(node.attr("id"), Some("main"));
        assert_eq!(node.outer_html(), r#"<div id="main"><a href="/x">go</a><!-- note --></div>"#);
    }

    #[test]
    fn test_select_keeps_every_attribute() {
        let html = r#"<svg width="10" height="20" viewBox="0 0 1 1"></svg>"#;
        let node = select_first(html, "svg").unwrap();
        let attrs = node.attributes.as_ref().unwrap();
        assert_eq!(attrs.len(), 3);
        assert_eq!(node.attr("width"), Some("10"));
        assert_eq!(node.attr("viewbox"), Some("0 0 1 1"));
    }

    #[test]
    fn test_select_no_match() {
        let err = select_first("<p>hi</p>", "article").unwrap_err();
        assert!(matches!(err, SnipError::NoMatch(ref s) if s == "article"));
        assert_eq!(err.to_string(), "no element matched selector `article`");
    }

    #[test]
    fn test_select_invalid_selector() {
        let err = select_first("<p>hi</p>", "p[").unwrap_err();
        assert!(matches!(err, SnipError::InvalidSelector { .. }));
    }

    #[test]
    fn test_snip_html() {
        let service = SnipService::new();
        let result = service
            .snip("<body><p>Hello <strong>World</strong></p></body>", "p")
            .unwrap();
        assert_eq!(result.markdown, "Hello **World**\n\n");
    }

    #[test]
    fn test_snip_decodes_entities() {
        let service = SnipService::new();
        let result = service.snip("<p>a &amp; b &lt;c&gt;</p>", "p").unwrap();
        assert_eq!(result.markdown, "a & b <c>\n\n");
    }
}
