//! Walker that applies hyphenation to the content tree.

use super::document::Element;
use super::table::Capability;
use crate::error::{HyphenateError, Result};
use crate::inserter::HyphenationInserter;
use crate::tokenizer::Granularity;

/// Walks an element tree depth-first and hyphenates the text of
/// hyphenatable elements.
///
/// Opaque subtrees are left alone. An element with `Capability::Unknown`
/// stops the walk with `UnsupportedMarkup`; text already hyphenated is then
/// incomplete, so callers must discard the tree.
pub struct MarkupWalker<'a, 'p> {
    inserter: &'a HyphenationInserter<'p>,
}

impl<'a, 'p> MarkupWalker<'a, 'p> {
    #[must_use]
    pub fn new(inserter: &'a HyphenationInserter<'p>) -> Self {
        Self { inserter }
    }

    /// Process `root` and everything below it.
    ///
    /// # Errors
    /// Returns `UnsupportedMarkup` for an element outside the capability
    /// table and propagates provider failures.
    pub fn process(&self, root: &mut Element) -> Result<()> {
        self.visit(root, None)
    }

    fn visit(&self, element: &mut Element, parent: Option<&str>) -> Result<()> {
        match element.capability {
            Capability::Opaque => {
                tracing::trace!(tag = %element.tag, "leaving opaque element untouched");
                Ok(())
            }
            Capability::Unknown => Err(HyphenateError::UnsupportedMarkup {
                tag: element.tag.clone(),
                context: parent.map(|p| format!("<{p}>")),
            }),
            Capability::Hyphenatable => {
                for run in &mut element.text {
                    let hyphenated = self
                        .inserter
                        .insert_text(run.original(), Granularity::Whitespace)?;
                    run.set_text(hyphenated);
                }
                for child in &mut element.children {
                    self.visit(child, Some(element.tag.as_str()))?;
                }
                Ok(())
            }
        }
    }
}
