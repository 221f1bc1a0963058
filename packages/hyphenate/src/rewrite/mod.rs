//! Atomic file rewriting and the transforms it applies.

mod atomic;
mod encoding;
mod transform;

pub use atomic::AtomicFileRewriter;
pub use encoding::{decode, encode};
pub use transform::{MarkupTransform, TextTransform, Transform};
