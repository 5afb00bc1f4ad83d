#![deny(missing_docs)]
//! Refdef core: CommonMark link reference definition parsing with source spans.

/// Forward-scanning character cursors.
pub mod cursor;
/// The definition entity and its parse entry point.
pub mod definition;
/// Inline nodes and the reference construction hook.
pub mod inline;
/// Character-level definition tokenizer.
pub mod scan;
/// Source span model and offset translation.
pub mod span;

pub use cursor::{CharCursor, LineCursor, StrCursor};
pub use definition::LinkReferenceDefinition;
pub use inline::{
    Inline, InlineBuilder, ResolutionContext, build_reference_inline, default_inline,
};
pub use scan::{RawDefinition, scan_definition};
pub use span::Span;
