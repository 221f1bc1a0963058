//! XML utility functions for navigating DOM trees and writing text back.

use std::ops::Range;

use roxmltree::{Document, Node};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use hyphenate::xml::get_tag_name;
///
/// let xml = r#"<html xmlns="http://www.w3.org/1999/xhtml"><body/></html>"#;
/// let doc = Document::parse(xml).unwrap();
/// let body = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(body), "body");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Namespace URI of the document's root element, if any.
pub fn root_namespace<'a>(doc: &'a Document<'_>) -> Option<&'a str> {
    doc.root_element().tag_name().namespace()
}

/// Find the first element with local name `tag` in namespace `namespace`.
///
/// Searches the whole document in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use hyphenate::xml::find_in_namespace;
///
/// let xml = r#"<html xmlns="urn:a"><body/><x:body xmlns:x="urn:b"/></html>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert!(find_in_namespace(&doc, Some("urn:a"), "body").is_some());
/// assert!(find_in_namespace(&doc, None, "body").is_none());
/// ```
pub fn find_in_namespace<'a, 'input>(
    doc: &'a Document<'input>,
    namespace: Option<&str>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    doc.descendants().find(|node| {
        node.is_element() && get_tag_name(*node) == tag && node.tag_name().namespace() == namespace
    })
}

/// Escape text content for inclusion between XML tags.
///
/// `&` and `<` are always escaped; `>` only where it would close a `]]>`.
/// Anything else, including line terminators, is copied as is.
///
/// # Examples
/// ```
/// use hyphenate::xml::escape_text;
///
/// assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c > d");
/// assert_eq!(escape_text("x]]>"), "x]]&gt;");
/// ```
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' if out.ends_with("]]") => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Byte range of an element's content in `source`, between the end of its
/// start tag and the beginning of its end tag.
///
/// Returns `None` for an empty-element tag (`<br/>`).
pub fn content_range(source: &str, node: Node<'_, '_>) -> Option<Range<usize>> {
    let range = node.range();
    let element = source.get(range.clone())?;

    let mut quote = None;
    let mut tag_end = None;
    for (i, b) in element.bytes().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => {
                tag_end = Some(i);
                break;
            }
            None => {}
        }
    }

    let tag_end = tag_end?;
    if element[..tag_end].ends_with('/') {
        return None;
    }
    let close = element.rfind("</")?;
    Some(range.start + tag_end + 1..range.start + close)
}

/// Split raw content between markup into plain character data.
///
/// Returns the ranges of `source[range]` that contain neither references
/// (`&amp;`, `&#160;`) nor markup (CDATA sections, comments, processing
/// instructions). Those are skipped and stay exactly as written. `range`
/// must not contain child elements.
///
/// # Examples
/// ```
/// use hyphenate::xml::character_data_ranges;
///
/// let raw = "a &amp; b<!-- c -->d";
/// let parts: Vec<_> = character_data_ranges(raw, 0..raw.len())
///     .into_iter()
///     .map(|r| &raw[r])
///     .collect();
/// assert_eq!(parts, ["a ", " b", "d"]);
/// ```
pub fn character_data_ranges(source: &str, range: Range<usize>) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let Some(raw) = source.get(range.clone()) else {
        return ranges;
    };

    let mut pos = 0;
    while pos < raw.len() {
        let rest = &raw[pos..];
        let Some(markup) = rest.find(['&', '<']) else {
            ranges.push(range.start + pos..range.end);
            break;
        };
        if markup > 0 {
            ranges.push(range.start + pos..range.start + pos + markup);
        }

        let construct = &rest[markup..];
        let terminator = [
            ("<![CDATA[", "]]>"),
            ("<!--", "-->"),
            ("<?", "?>"),
            ("&", ";"),
        ]
        .iter()
        .find(|(open, _)| construct.starts_with(open))
        .map_or(">", |(_, close)| *close);

        match construct.find(terminator) {
            Some(end) => pos += markup + end + terminator.len(),
            None => break,
        }
    }
    ranges
}
