//! Markdown output for each tag rule.

use super::{TableScope, TagRule};
use crate::node::Node;
use crate::service::Walker;
use crate::utilities::layout_table;

/// Render an element with the given rule.
///
/// Most rules wrap the converted children; `code`, `pre`, `img` and `table`
/// read the element's text, attributes or rows directly instead.
pub(crate) fn render(rule: TagRule, el: &Node, walker: &mut Walker<'_>) -> String {
    match rule {
        TagRule::Paragraph => format!("{}\n\n", walker.children(el)),
        TagRule::Container => walker.children(el),
        TagRule::List => format!("{}\n", walker.children(el)),
        TagRule::ListItem => format!("- {}\n", walker.children(el)),
        TagRule::Heading(level) => format!("{} {}\n\n", "#".repeat(level), walker.children(el)),
        TagRule::Code => code(el),
        TagRule::CodeBlock => format!("```q\n{}\n```\n\n", el.text_content()),
        TagRule::Link => {
            let href = el.attr("href").filter(|h| !h.is_empty()).unwrap_or("#");
            format!("[{}]({})", walker.children(el), href)
        }
        TagRule::LineBreak => "  \n".to_string(),
        TagRule::HorizontalRule => "\n---\n\n".to_string(),
        TagRule::Emphasis => format!("*{}*", walker.children(el)),
        TagRule::Strong => format!("**{}**", walker.children(el)),
        TagRule::Image => {
            let alt = el.attr("alt").filter(|a| !a.is_empty()).unwrap_or("image");
            format!("![{}]({})\n", alt, el.attr("src").unwrap_or_default())
        }
        TagRule::Table => table(el, walker),
        TagRule::Row => row(el, walker).concat(),
        TagRule::Cell => format!("| {} ", walker.children(el)),
        TagRule::Unknown => walker.keep(el),
    }
}

/// Inline code; a backtick inside needs a double-backtick delimiter.
fn code(el: &Node) -> String {
    let text = el.text_content();
    if el.inner_html().contains('`') {
        format!("`` {} ``", text)
    } else {
        format!("`{}`", text)
    }
}

fn table(el: &Node, walker: &mut Walker<'_>) -> String {
    let scope = walker.options().table_scope;
    let rows: Vec<Vec<String>> = table_rows(el, scope)
        .into_iter()
        .map(|tr| row(tr, walker))
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    format!("{}|\n\n", layout_table(&rows))
}

/// Rendered cells of a `tr`.
fn row(el: &Node, walker: &mut Walker<'_>) -> Vec<String> {
    let scope = walker.options().table_scope;
    row_cells(el, scope)
        .into_iter()
        .map(|cell| walker.node(cell))
        .collect()
}

fn table_rows(table: &Node, scope: TableScope) -> Vec<&Node> {
    match scope {
        TableScope::Descendants => table.find_all(&["tr"]),
        TableScope::Direct => table
            .element_children()
            .flat_map(|child| match child.tag_name().as_str() {
                "tr" => vec![child],
                "thead" | "tbody" | "tfoot" => child
                    .element_children()
                    .filter(|n| n.tag_name() == "tr")
                    .collect(),
                _ => Vec::new(),
            })
            .collect(),
    }
}

fn row_cells(row: &Node, scope: TableScope) -> Vec<&Node> {
    match scope {
        TableScope::Descendants => row.find_all(&["th", "td"]),
        TableScope::Direct => row
            .element_children()
            .filter(|n| matches!(n.tag_name().as_str(), "th" | "td"))
            .collect(),
    }
}
