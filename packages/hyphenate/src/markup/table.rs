//! Tag capability table.

use std::collections::{HashMap, HashSet};

/// How the walker treats an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Prose container: its text is hyphenated and its children visited.
    Hyphenatable,
    /// Verbatim content: neither its text nor its children are touched.
    Opaque,
    /// Not in the table; processing must stop.
    Unknown,
}

/// Table mapping tag names to capabilities.
///
/// Tags that are neither registered nor marked opaque classify as
/// `Capability::Unknown`.
#[derive(Debug, Clone, Default)]
pub struct CapabilityTable {
    tags: HashMap<String, Capability>,
}

impl CapabilityTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark tags as hyphenatable.
    pub fn register(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.tags.insert(tag.into(), Capability::Hyphenatable);
        }
    }

    /// Mark tags as opaque (kept verbatim, never descended into).
    pub fn opaque(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.tags.insert(tag.into(), Capability::Opaque);
        }
    }

    /// Classify a tag name.
    #[must_use]
    pub fn classify(&self, tag_name: &str) -> Capability {
        self.tags
            .get(tag_name)
            .copied()
            .unwrap_or(Capability::Unknown)
    }

    /// Return set of all hyphenatable tag names.
    #[must_use]
    pub fn hyphenatable_tags(&self) -> HashSet<&str> {
        self.tags_with(Capability::Hyphenatable)
    }

    /// Return set of all opaque tag names.
    #[must_use]
    pub fn opaque_tags(&self) -> HashSet<&str> {
        self.tags_with(Capability::Opaque)
    }

    fn tags_with(&self, capability: Capability) -> HashSet<&str> {
        self.tags
            .iter()
            .filter(|(_, c)| **c == capability)
            .map(|(tag, _)| tag.as_str())
            .collect()
    }
}

/// Create a table for XHTML documents.
///
/// Block and inline prose containers are hyphenatable. Preformatted, code,
/// and non-text elements are opaque. Scripting, styling, embedding and form
/// elements are deliberately absent so documents using them are rejected.
#[must_use]
pub fn create_xhtml_table() -> CapabilityTable {
    let mut table = CapabilityTable::new();

    // Sectioning and block containers
    table.register([
        "body", "div", "section", "article", "aside", "header", "footer", "nav", "main",
        "address", "figure", "figcaption", "blockquote",
    ]);

    // Headings and paragraphs
    table.register(["h1", "h2", "h3", "h4", "h5", "h6", "p"]);

    // Lists and tables
    table.register([
        "ul", "ol", "li", "dl", "dt", "dd", "table", "caption", "thead", "tbody", "tfoot", "tr",
        "td", "th",
    ]);

    // Inline phrasing
    table.register([
        "span", "a", "em", "strong", "b", "i", "u", "s", "small", "big", "sub", "sup", "abbr",
        "dfn", "mark", "del", "ins", "q", "cite",
    ]);

    // Verbatim or non-text content:
    //   - pre/code/kbd/samp/var/tt: whitespace and spelling are significant
    //   - br/hr/img: empty elements
    //   - math/svg: foreign vocabularies
    table.opaque([
        "pre", "code", "kbd", "samp", "var", "tt", "br", "hr", "img", "math", "svg",
    ]);

    table
}
