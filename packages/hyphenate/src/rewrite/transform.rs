//! Content transforms applied by the rewriter.

use crate::error::Result;
use crate::inserter::HyphenationInserter;
use crate::markup::{CapabilityTable, Document, MarkupWalker};
use crate::tokenizer::Granularity;

/// Turns the decoded contents of a file into its new contents.
pub trait Transform {
    /// # Errors
    /// Any error aborts the rewrite and leaves the file untouched.
    fn apply(&self, input: &str) -> Result<String>;
}

impl<F> Transform for F
where
    F: Fn(&str) -> Result<String>,
{
    fn apply(&self, input: &str) -> Result<String> {
        self(input)
    }
}

/// Line-oriented plain text.
///
/// Every line is hyphenated on its own; a word broken across two lines is
/// seen as two words.
pub struct TextTransform<'a, 'p> {
    inserter: &'a HyphenationInserter<'p>,
    granularity: Granularity,
}

impl<'a, 'p> TextTransform<'a, 'p> {
    #[must_use]
    pub fn new(inserter: &'a HyphenationInserter<'p>, granularity: Granularity) -> Self {
        Self {
            inserter,
            granularity,
        }
    }
}

impl Transform for TextTransform<'_, '_> {
    fn apply(&self, input: &str) -> Result<String> {
        let mut out = String::with_capacity(input.len() + input.len() / 4);
        for line in input.split_inclusive('\n') {
            out.push_str(&self.inserter.insert_text(line, self.granularity)?);
        }
        Ok(out)
    }
}

/// XHTML-style markup: parse, walk the content element, serialize.
pub struct MarkupTransform<'a, 'p> {
    walker: MarkupWalker<'a, 'p>,
    table: &'a CapabilityTable,
}

impl<'a, 'p> MarkupTransform<'a, 'p> {
    #[must_use]
    pub fn new(inserter: &'a HyphenationInserter<'p>, table: &'a CapabilityTable) -> Self {
        Self {
            walker: MarkupWalker::new(inserter),
            table,
        }
    }
}

impl Transform for MarkupTransform<'_, '_> {
    fn apply(&self, input: &str) -> Result<String> {
        let mut doc = Document::parse(input, self.table)?;
        self.walker.process(doc.content_mut())?;
        Ok(doc.serialize())
    }
}
