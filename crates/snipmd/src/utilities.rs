//! Text helpers: inline escaping, table layout and output cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text content is serialized without escaping
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script",
    "style", "xmp",
];

/// A line break together with the spaces hugging it.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\n *").expect("valid regex"));

/// Escape markdown inline syntax in a run of text.
///
/// Backslashes are passed through untouched, so text that already contains
/// an escape sequence keeps it. Line breaks (and the spaces around them)
/// become a single space.
pub fn escape_markdown(text: &str) -> String {
    let escaped = text
        .replace('`', "\\`")
        .replace('*', "\\*")
        .replace('_', "\\_")
        .replace('~', "\\~");

    LINE_BREAK.replace_all(&escaped, " ").into_owned()
}

/// Pad the cells of a table so the columns line up.
///
/// Every cell is expected to carry its own leading `"| "`. A separator row is
/// inserted after the header row and rows are joined with `"|\n"`; the
/// closing pipe of the last row is left to the caller. Column widths are
/// taken from the header row's column count.
pub fn layout_table(rows: &[Vec<String>]) -> String {
    let Some(header) = rows.first() else {
        return String::new();
    };

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator: Vec<String> = widths
        .iter()
        .map(|&width| format!("| -{} ", "-".repeat(width.saturating_sub(4))))
        .collect();

    let pad_row = |row: &[String]| -> String {
        row.iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(&width) => pad_end(cell, width),
                None => cell.clone(),
            })
            .collect()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(pad_row(header));
    lines.push(pad_row(&separator));
    lines.extend(rows[1..].iter().map(|row| pad_row(row)));

    lines.join("|\n")
}

fn pad_end(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    if len >= width {
        cell.to_string()
    } else {
        format!("{}{}", cell, " ".repeat(width - len))
    }
}

/// Strip trailing whitespace from every line.
pub fn trim_line_ends(markdown: &str) -> String {
    markdown
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("*test*"), "\\*test\\*");
        assert_eq!(escape_markdown("_test_"), "\\_test\\_");
        assert_eq!(escape_markdown("`tick`"), "\\`tick\\`");
        assert_eq!(escape_markdown("~strike~"), "\\~strike\\~");
        assert_eq!(escape_markdown("normal"), "normal");
    }

    #[test]
    fn test_escape_leaves_other_punctuation() {
        let text = "[link](#) + 1. ! | {x} # - <b>";
        assert_eq!(escape_markdown(text), text);
    }

    #[test]
    fn test_escape_passes_backslash_through() {
        assert_eq!(escape_markdown("a\\b"), "a\\b");
        assert_eq!(escape_markdown("\\*"), "\\\\*");
    }

    #[test]
    fn test_escape_collapses_line_breaks() {
        assert_eq!(escape_markdown("one  \n   two"), "one two");
        assert_eq!(escape_markdown("\n  Hello\n"), " Hello ");
        assert_eq!(escape_markdown("a\n\nb"), "a  b");
        assert_eq!(escape_markdown("tab\tstays"), "tab\tstays");
    }

    #[test]
    fn test_layout_table() {
        let rows = vec![row(&["| a ", "| bb "]), row(&["| c ", "| d "])];
        assert_eq!(layout_table(&rows), "| a | bb |\n| - | -- |\n| c | d  ");
    }

    #[test]
    fn test_layout_table_pads_to_widest_cell() {
        let rows = vec![
            row(&["| Name ", "| Qty "]),
            row(&["| apples ", "| 3 "]),
            row(&["| kiwi ", "| 12 "]),
        ];
        let expected = "| Name   | Qty |\n| ------ | --- |\n| apples | 3   |\n| kiwi   | 12  ";
        assert_eq!(layout_table(&rows), expected);
    }

    #[test]
    fn test_layout_table_narrow_column_separator() {
        let rows = vec![row(&["| "]), row(&["| "])];
        assert_eq!(layout_table(&rows), "| |\n| - |\n| ");
    }

    #[test]
    fn test_layout_table_ragged_rows() {
        let rows = vec![row(&["| a ", "| b "]), row(&["| long "]), row(&["| c ", "| d ", "| extra "])];
        assert_eq!(
            layout_table(&rows),
            "| a    | b |\n| ---- | - |\n| long |\n| c    | d | extra "
        );
    }

    #[test]
    fn test_layout_table_empty() {
        assert_eq!(layout_table(&[]), "");
    }

    #[test]
    fn test_trim_line_ends() {
        assert_eq!(trim_line_ends("a  \nb\t\n  c \n"), "a\nb\n  c\n");
        assert_eq!(trim_line_ends("| x |\n\n"), "| x |\n\n");
    }
}
