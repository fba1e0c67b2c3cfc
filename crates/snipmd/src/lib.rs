//! # snipmd
//!
//! Convert a selected part of an HTML page to Markdown.
//!
//! ## Design
//!
//! Conversion is a single depth-first pass over a [`Node`] tree. Each
//! supported tag has a fixed [`TagRule`]; text is escaped for inline
//! Markdown, tables are padded into aligned pipe tables, and elements
//! without a rule (or whose rule renders nothing) are passed through as
//! their original HTML, reported as a [`Diagnostic`].
//!
//! The converter only reads the [`Node`] structure, so any HTML parser can
//! feed it. With the default `html` feature, scraper does the parsing and
//! CSS selection.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use snipmd::{Node, SnipService};
//!
//! let service = SnipService::new();
//!
//! let h1 = Node::element("h1").with_child(Node::text("Hello World"));
//!
//! let conversion = service.convert(&h1);
//! assert_eq!(conversion.markdown, "# Hello World\n\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use snipmd::SnipService;
//!
//! let service = SnipService::new();
//! let html = "<html><body><h2>Title</h2><p>Some <em>text</em></p></body></html>";
//! let conversion = service.snip(html, "body").unwrap();
//! assert_eq!(conversion.markdown, "## Title\n\nSome *text*\n\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod rules;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::{parse_html, select_first};
pub use node::{Node, NodeType};
pub use rules::{rule_for, supported_tags, TableScope, TagRule};
pub use service::{Conversion, ConvertOptions, Diagnostic, SnipService};
pub use utilities::{escape_markdown, layout_table, trim_line_ends};

/// Error type for snipmd operations
#[derive(Debug, thiserror::Error)]
pub enum SnipError {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("no element matched selector `{0}`")]
    NoMatch(String),
}

pub type Result<T> = std::result::Result<T, SnipError>;
