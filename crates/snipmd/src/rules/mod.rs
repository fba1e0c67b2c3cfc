//! Tag rule table for HTML to Markdown conversion.

mod markdown;
mod rule;

pub(crate) use markdown::render;
pub use rule::{TableScope, TagRule};

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Lowercase tag name to rule, in the order the rules are listed.
static TAG_RULES: Lazy<IndexMap<&'static str, TagRule>> = Lazy::new(|| {
    IndexMap::from([
        ("p", TagRule::Paragraph),
        ("div", TagRule::Container),
        ("body", TagRule::Container),
        ("blockquote", TagRule::Container),
        ("font", TagRule::Container),
        ("ul", TagRule::List),
        ("li", TagRule::ListItem),
        ("h1", TagRule::Heading(1)),
        ("h2", TagRule::Heading(2)),
        ("h3", TagRule::Heading(3)),
        ("h4", TagRule::Heading(4)),
        ("h5", TagRule::Heading(5)),
        ("h6", TagRule::Heading(6)),
        ("code", TagRule::Code),
        ("pre", TagRule::CodeBlock),
        ("a", TagRule::Link),
        ("br", TagRule::LineBreak),
        ("hr", TagRule::HorizontalRule),
        ("i", TagRule::Emphasis),
        ("em", TagRule::Emphasis),
        ("b", TagRule::Strong),
        ("strong", TagRule::Strong),
        ("img", TagRule::Image),
        ("table", TagRule::Table),
        ("th", TagRule::Cell),
        ("td", TagRule::Cell),
        ("tr", TagRule::Row),
    ])
});

/// Find the rule for a tag name (case-insensitive)
pub fn rule_for(tag: &str) -> TagRule {
    TAG_RULES
        .get(tag.to_lowercase().as_str())
        .copied()
        .unwrap_or(TagRule::Unknown)
}

/// Tag names that have a rule, in table order
pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    TAG_RULES.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lookup_is_case_insensitive() {
        assert_eq!(rule_for("h3"), TagRule::Heading(3));
        assert_eq!(rule_for("H3"), TagRule::Heading(3));
        assert_eq!(rule_for("Strong"), TagRule::Strong);
    }

    #[test]
    fn test_unmapped_tags_are_unknown() {
        for tag in ["svg", "span", "ol", "thead", "tbody", "script"] {
            assert_eq!(rule_for(tag), TagRule::Unknown, "{tag}");
            assert!(!rule_for(tag).is_known());
        }
    }

    #[test]
    fn test_supported_tags_order() {
        let tags: Vec<_> = supported_tags().collect();
        assert_eq!(tags.len(), 27);
        assert_eq!(tags.first(), Some(&"p"));
        assert_eq!(tags.last(), Some(&"tr"));
        assert!(tags.iter().all(|t| rule_for(t).is_known()));
    }
}
