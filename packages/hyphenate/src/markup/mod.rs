//! Markup support: capability table, content tree and walker.
//!
//! Only elements whose tag is in the capability table are processed. Opaque
//! elements are copied verbatim and anything else aborts the file.

mod document;
mod table;
mod walker;

pub use document::{Document, Element, TextRun};
pub use table::{create_xhtml_table, Capability, CapabilityTable};
pub use walker::MarkupWalker;
