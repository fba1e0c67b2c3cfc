//! The closed set of tag rules.

/// How an element is rendered to Markdown.
///
/// Every supported tag maps to exactly one variant; anything else resolves to
/// [`TagRule::Unknown`] and is passed through as raw HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// `p`
    Paragraph,
    /// `div`, `body`, `blockquote`, `font`: children only
    Container,
    /// `ul`
    List,
    /// `li`
    ListItem,
    /// `h1` through `h6`
    Heading(usize),
    /// Inline `code`
    Code,
    /// `pre`, rendered as a fenced block
    CodeBlock,
    /// `a`
    Link,
    /// `br`
    LineBreak,
    /// `hr`
    HorizontalRule,
    /// `i`, `em`
    Emphasis,
    /// `b`, `strong`
    Strong,
    /// `img`
    Image,
    /// `table`
    Table,
    /// `tr`
    Row,
    /// `th`, `td`
    Cell,
    /// Any tag without a rule
    Unknown,
}

impl TagRule {
    /// Whether this rule produces Markdown (as opposed to raw HTML passthrough)
    pub fn is_known(self) -> bool {
        self != TagRule::Unknown
    }
}

/// How table rows and cells are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableScope {
    /// Every `tr` below the table and every `th`/`td` below the row,
    /// including those of nested tables.
    #[default]
    Descendants,
    /// Only rows that are children of the table (or of its `thead`, `tbody`
    /// and `tfoot`) and cells that are children of the row.
    Direct,
}
