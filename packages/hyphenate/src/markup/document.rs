//! Owned element tree for the content part of a markup document.
//!
//! The tree only records what hyphenation needs: tag names, capabilities and
//! the direct character data of every element. Text runs are raw slices of
//! the source: references, CDATA sections, comments and line terminators are
//! never decoded, so serialization can splice changed runs back in and leave
//! every other byte of the file alone.

use std::ops::Range;

use roxmltree::{Node, ParsingOptions};

use super::table::{Capability, CapabilityTable};
use crate::config::CONTENT_ROOT;
use crate::error::{HyphenateError, Result};
use crate::xml::{
    character_data_ranges, content_range, escape_text, find_in_namespace, get_tag_name,
    root_namespace,
};

/// A stretch of plain character data directly inside an element.
///
/// Runs end at any reference or markup, so `a&amp;b` is two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    source_range: Option<Range<usize>>,
    original: String,
    replacement: Option<String>,
}

impl TextRun {
    /// A run not backed by any source document.
    #[must_use]
    pub fn detached(text: impl Into<String>) -> Self {
        Self {
            source_range: None,
            original: text.into(),
            replacement: None,
        }
    }

    fn from_source(range: Range<usize>, text: &str) -> Self {
        Self {
            source_range: Some(range),
            original: text.to_string(),
            replacement: None,
        }
    }

    /// Current text, after any replacement.
    #[must_use]
    pub fn text(&self) -> &str {
        self.replacement.as_deref().unwrap_or(&self.original)
    }

    /// Text exactly as written in the source.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Replace the text. Setting it back to the original clears the change.
    pub fn set_text(&mut self, text: String) {
        self.replacement = (text != self.original).then_some(text);
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.replacement.is_some()
    }
}

/// An element of the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Local tag name.
    pub tag: String,
    pub capability: Capability,
    /// Direct text nodes in document order.
    pub text: Vec<TextRun>,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>, capability: Capability) -> Self {
        Self {
            tag: tag.into(),
            capability,
            text: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element classified through `table`.
    #[must_use]
    pub fn classified(tag: &str, table: &CapabilityTable) -> Self {
        Self::new(tag, table.classify(tag))
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.push(TextRun::detached(text));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Concatenated direct text.
    #[must_use]
    pub fn direct_text(&self) -> String {
        self.text.iter().map(TextRun::text).collect()
    }

    fn collect_changes<'a>(&'a self, changes: &mut Vec<(&'a Range<usize>, &'a str)>) {
        for run in &self.text {
            if let (Some(range), Some(text)) = (&run.source_range, &run.replacement) {
                changes.push((range, text));
            }
        }
        for child in &self.children {
            child.collect_changes(changes);
        }
    }
}

/// A parsed markup document and the content tree built from it.
#[derive(Debug)]
pub struct Document<'input> {
    source: &'input str,
    content: Element,
}

impl<'input> Document<'input> {
    /// Parse `source` and build the tree rooted at the content element.
    ///
    /// The content element is the first `<body>` in the namespace of the
    /// document's root element.
    ///
    /// # Errors
    /// Returns `XmlParse` for malformed XML and `MissingElement` when the
    /// content element is absent.
    pub fn parse(source: &'input str, table: &CapabilityTable) -> Result<Self> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let doc = roxmltree::Document::parse_with_options(source, options)?;

        let namespace = root_namespace(&doc);
        let content = find_in_namespace(&doc, namespace, CONTENT_ROOT).ok_or_else(|| {
            HyphenateError::MissingElement {
                element: namespace.map_or_else(
                    || CONTENT_ROOT.to_string(),
                    |ns| format!("{{{ns}}}{CONTENT_ROOT}"),
                ),
                context: format!("<{}>", get_tag_name(doc.root_element())),
            }
        })?;

        Ok(Self {
            source,
            content: build_element(content, source, table),
        })
    }

    /// The content element.
    #[must_use]
    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Element {
        &mut self.content
    }

    /// Write the document back out, replacing only modified text runs.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut changes = Vec::new();
        self.content.collect_changes(&mut changes);
        changes.sort_by_key(|(range, _)| range.start);

        let mut out = String::with_capacity(self.source.len() + self.source.len() / 8);
        let mut pos = 0;
        for (range, text) in changes {
            out.push_str(&self.source[pos..range.start]);
            out.push_str(&escape_text(text));
            pos = range.end;
        }
        out.push_str(&self.source[pos..]);
        out
    }
}

fn build_element(node: Node<'_, '_>, source: &str, table: &CapabilityTable) -> Element {
    let mut element = Element::classified(get_tag_name(node), table);
    let Some(content) = content_range(source, node) else {
        return element;
    };

    let mut pos = content.start;
    for child in node.children().filter(Node::is_element) {
        let range = child.range();
        if range.start < pos || range.end > content.end {
            // expanded from an entity declared in the DTD
            tracing::debug!(tag = get_tag_name(child), "skipping element without source text");
            continue;
        }
        push_character_data(&mut element, source, pos..range.start);
        element.children.push(build_element(child, source, table));
        pos = range.end;
    }
    push_character_data(&mut element, source, pos..content.end);
    element
}

fn push_character_data(element: &mut Element, source: &str, range: Range<usize>) {
    for run in character_data_ranges(source, range) {
        let text = &source[run.clone()];
        element.text.push(TextRun::from_source(run, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inserter::HyphenationInserter;
    use crate::markup::table::create_xhtml_table;
    use crate::markup::walker::MarkupWalker;
    use crate::provider::fixed::FixedProvider;
    use pretty_assertions::assert_eq;

    /// Parse, hyphenate "hyphenation" as hy§phen§a§tion, serialize.
    fn hyphenate(source: &str) -> String {
        let table = create_xhtml_table();
        let provider = FixedProvider::new([("hyphenation", &[2, 7, 9][..])]);
        let inserter = HyphenationInserter::new(&provider, '§');
        let mut doc = Document::parse(source, &table).unwrap();
        MarkupWalker::new(&inserter).process(doc.content_mut()).unwrap();
        doc.serialize()
    }

    const XHTML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
<head><title>Title stays</title><script>var x = 1;</script></head>
<body class="main">
  <p>Some <em>text</em> &amp; more</p>
  <pre>keep  as   is</pre>
</body>
</html>
"#;

    #[test]
    fn test_parse_builds_content_tree() {
        let table = create_xhtml_table();
        let doc = Document::parse(XHTML, &table).unwrap();
        let body = doc.content();

        assert_eq!(body.tag, "body");
        assert_eq!(body.capability, Capability::Hyphenatable);
        assert_eq!(body.children.len(), 2);

        let p = &body.children[0];
        assert_eq!(p.tag, "p");
        let runs: Vec<_> = p.text.iter().map(TextRun::original).collect();
        assert_eq!(runs, ["Some ", " ", " more"]);
        assert_eq!(p.children[0].direct_text(), "text");

        let pre = &body.children[1];
        assert_eq!(pre.capability, Capability::Opaque);
        assert_eq!(pre.direct_text(), "keep  as   is");
    }

    #[test]
    fn test_head_is_not_part_of_content() {
        let table = create_xhtml_table();
        let doc = Document::parse(XHTML, &table).unwrap();
        // <script> in <head> would be Unknown, but only <body> is built
        fn has_unknown(e: &Element) -> bool {
            e.capability == Capability::Unknown || e.children.iter().any(has_unknown)
        }
        assert!(!has_unknown(doc.content()));
    }

    #[test]
    fn test_serialize_unmodified_is_identical() {
        let table = create_xhtml_table();
        let doc = Document::parse(XHTML, &table).unwrap();
        assert_eq!(doc.serialize(), XHTML);
    }

    #[test]
    fn test_serialize_splices_modified_runs() {
        let table = create_xhtml_table();
        let mut doc = Document::parse(XHTML, &table).unwrap();
        let p = &mut doc.content_mut().children[0];
        p.text[0].set_text("Some <new> ".to_string());
        p.children[0].text[0].set_text("TEXT".to_string());

        let out = doc.serialize();
        assert!(out.contains("<p>Some &lt;new> <em>TEXT</em> &amp; more</p>"));
        assert!(out.contains("<pre>keep  as   is</pre>"));
        assert!(out.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(out.contains(r#"<body class="main">"#));
    }

    #[test]
    fn test_set_text_back_to_original_is_not_a_change() {
        let mut run = TextRun::detached("same");
        run.set_text("same".to_string());
        assert!(!run.is_modified());
        run.set_text("other".to_string());
        assert!(run.is_modified());
        assert_eq!(run.text(), "other");
        assert_eq!(run.original(), "same");
    }

    #[test]
    fn test_missing_body() {
        let table = create_xhtml_table();
        let xml = r#"<html xmlns="http://www.w3.org/1999/xhtml"><head/></html>"#;
        let err = Document::parse(xml, &table).unwrap_err();
        match err {
            HyphenateError::MissingElement { element, context } => {
                assert_eq!(element, "{http://www.w3.org/1999/xhtml}body");
                assert_eq!(context, "<html>");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_body_in_other_namespace_is_missing() {
        let table = create_xhtml_table();
        let xml = r#"<html xmlns="urn:a"><x:body xmlns:x="urn:b"/></html>"#;
        assert!(matches!(
            Document::parse(xml, &table),
            Err(HyphenateError::MissingElement { .. })
        ));
    }

    #[test]
    fn test_without_namespace() {
        let table = create_xhtml_table();
        let doc = Document::parse("<html><body><p>x</p></body></html>", &table).unwrap();
        assert_eq!(doc.content().children[0].tag, "p");
    }

    #[test]
    fn test_doctype_is_accepted() {
        let table = create_xhtml_table();
        let xml = "<!DOCTYPE html>\n<html xmlns=\"http://www.w3.org/1999/xhtml\"><body>x</body></html>";
        let doc = Document::parse(xml, &table).unwrap();
        assert_eq!(doc.serialize(), xml);
    }

    #[test]
    fn test_malformed_xml() {
        let table = create_xhtml_table();
        assert!(matches!(
            Document::parse("<html><body></html>", &table),
            Err(HyphenateError::XmlParse(_))
        ));
    }

    #[test]
    fn test_cdata_is_kept_once() {
        let source = "<html><body><p>hyphenation <![CDATA[a < b hyphenation]]> hyphenation tail</p></body></html>";
        assert_eq!(
            hyphenate(source),
            "<html><body><p>hy§phen§a§tion <![CDATA[a < b hyphenation]]> hy§phen§a§tion tail</p></body></html>"
        );
    }

    #[test]
    fn test_crlf_line_endings_are_kept() {
        let source = "<html>\r\n<body>\r\n<p>hyphenation\r\nhyphenation</p>\r\n</body>\r\n</html>\r\n";
        let out = hyphenate(source);
        assert_eq!(
            out,
            "<html>\r\n<body>\r\n<p>hy§phen§a§tion\r\nhy§phen§a§tion</p>\r\n</body>\r\n</html>\r\n"
        );
        assert_eq!(out.matches("\r\n").count(), source.matches("\r\n").count());
    }

    #[test]
    fn test_references_are_kept_verbatim() {
        let source = "<html><body><p>hyphenation&#160;hyphenation &amp; caf&#xE9; &#x4E2D;</p></body></html>";
        assert_eq!(
            hyphenate(source),
            "<html><body><p>hy§phen§a§tion&#160;hy§phen§a§tion &amp; caf&#xE9; &#x4E2D;</p></body></html>"
        );
    }

    #[test]
    fn test_comments_and_processing_instructions_are_kept() {
        let source = "<html><body><p>hyphenation<!-- hyphenation --><?pi hyphenation?> end</p></body></html>";
        assert_eq!(
            hyphenate(source),
            "<html><body><p>hy§phen§a§tion<!-- hyphenation --><?pi hyphenation?> end</p></body></html>"
        );
    }

    #[test]
    fn test_empty_element_tags() {
        let table = create_xhtml_table();
        let doc = Document::parse("<html><body><p/>x<br/></body></html>", &table).unwrap();
        let body = doc.content();
        assert!(body.children[0].text.is_empty());
        assert_eq!(body.direct_text(), "x");
    }
}
