//! The link reference definition entity and its parse entry point.

use crate::cursor::CharCursor;
use crate::inline::InlineBuilder;
use crate::scan::scan_definition;
use crate::span::Span;

/// A parsed `[label]: destination "title"` definition with document-global
/// spans for each source fragment.
///
/// This is a plain mutable record: later pipeline passes may rewrite the
/// destination or title after construction (URL normalization and the
/// like). Entities are created atomically by [`Self::try_parse`] or
/// programmatically by [`Self::new`]; unlike multi-line blocks they are
/// never extended after construction, so `open` is always `false`.
pub struct LinkReferenceDefinition {
    /// Bracketed key text, not normalized (normalization belongs to the
    /// label registry, not this entity).
    pub label: String,
    /// Link or image target.
    pub destination: String,
    /// Title text, `None` when the source supplied no title.
    pub title: Option<String>,
    /// Document-global span of the label text; zero-length when absent.
    pub label_span: Span,
    /// Document-global span of the destination token; zero-length when absent.
    pub destination_span: Span,
    /// Document-global span of the title token; zero-length when absent.
    pub title_span: Span,
    /// Full extent of the definition, ending at the title fragment when a
    /// title was parsed and at the destination fragment otherwise.
    pub span: Span,
    /// Optional construction strategy consulted when a reference link or
    /// image matches this definition; `None` means default construction.
    pub inline_builder: Option<Box<dyn InlineBuilder>>,
    /// Whether the block is still accumulating content. Always `false`:
    /// a definition is fully materialized in one parse call.
    pub open: bool,
}

impl LinkReferenceDefinition {
    /// Create a definition from known values, bypassing parsing.
    ///
    /// Used for programmatic or synthetic definitions injected by
    /// extensions; all spans are left as the absent sentinel.
    pub fn new(
        label: impl Into<String>,
        destination: impl Into<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            label: label.into(),
            destination: destination.into(),
            title,
            label_span: Span::EMPTY,
            destination_span: Span::EMPTY,
            title_span: Span::EMPTY,
            span: Span::EMPTY,
            inline_builder: None,
            open: false,
        }
    }

    /// Try to parse a definition at the cursor's position.
    ///
    /// `document_offset` is the document-global character index of the
    /// cursor's local position 0; the label, destination, and title spans
    /// are translated into global coordinates with it (zero-length spans
    /// stay untranslated, preserving the absent sentinel). Returns `None`
    /// when the text does not match the grammar - an expected outcome used
    /// for block disambiguation, after which the cursor is left wherever
    /// the tokenizer stopped.
    pub fn try_parse<C: CharCursor>(
        cursor: &mut C,
        document_offset: usize,
    ) -> Option<LinkReferenceDefinition> {
        let start = cursor.pos();
        let Some(raw) = scan_definition(cursor) else {
            log::trace!("no link reference definition at local position {start}");
            return None;
        };

        let end = if raw.title_span.len() > 0 {
            raw.title_span.end
        } else {
            raw.destination_span.end
        };
        log::trace!(
            "link reference definition [{}] at {}..{}",
            raw.label,
            start + document_offset,
            end + document_offset
        );

        let mut definition = Self::new(raw.label, raw.destination, raw.title);
        definition.label_span = raw.label_span.offset_by(document_offset);
        definition.destination_span = raw.destination_span.offset_by(document_offset);
        definition.title_span = raw.title_span.offset_by(document_offset);
        // The overall extent comes from real positions recorded above, so it
        // is translated unconditionally, never through the sentinel rule.
        definition.span = Span::new(start + document_offset, end + document_offset);
        Some(definition)
    }
}

impl std::fmt::Debug for LinkReferenceDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkReferenceDefinition")
            .field("label", &self.label)
            .field("destination", &self.destination)
            .field("title", &self.title)
            .field("label_span", &self.label_span)
            .field("destination_span", &self.destination_span)
            .field("title_span", &self.title_span)
            .field("span", &self.span)
            .field("inline_builder", &self.inline_builder.is_some())
            .field("open", &self.open)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{LineCursor, StrCursor};
    use crate::inline::{Inline, ResolutionContext, build_reference_inline};

    #[test]
    fn parses_and_translates_spans() {
        let mut cursor = StrCursor::new("[foo]: /url \"bar\"");
        let def = LinkReferenceDefinition::try_parse(&mut cursor, 100).unwrap();
        assert_eq!(def.label, "foo");
        assert_eq!(def.destination, "/url");
        assert_eq!(def.title.as_deref(), Some("bar"));
        assert_eq!(def.label_span, Span::new(101, 104));
        assert_eq!(def.destination_span, Span::new(107, 111));
        assert_eq!(def.title_span, Span::new(112, 117));
        // Overall extent is built from the local start/end plus the offset.
        assert_eq!(def.span, Span::new(100, 117));
        assert_eq!(def.span.end, def.title_span.end);
        assert!(!def.open);
    }

    #[test]
    fn untitled_definition_keeps_the_title_sentinel() {
        let mut cursor = StrCursor::new("[foo]: /url");
        let def = LinkReferenceDefinition::try_parse(&mut cursor, 50).unwrap();
        assert_eq!(def.title, None);
        assert_eq!(def.title_span, Span::EMPTY);
        assert_eq!(def.destination_span, Span::new(57, 61));
        assert_eq!(def.span.end, def.destination_span.end);
        assert_eq!(def.span, Span::new(50, 61));
    }

    #[test]
    fn zero_offset_leaves_spans_local() {
        let mut cursor = StrCursor::new("[foo]: /url \"bar\"");
        let def = LinkReferenceDefinition::try_parse(&mut cursor, 0).unwrap();
        assert_eq!(def.label_span, Span::new(1, 4));
        assert_eq!(def.span, Span::new(0, 17));
    }

    #[test]
    fn failure_produces_no_entity() {
        let mut cursor = StrCursor::new("plain paragraph text");
        assert!(LinkReferenceDefinition::try_parse(&mut cursor, 0).is_none());
    }

    #[test]
    fn identical_over_both_cursor_representations() {
        let lines = ["[foo]: /url", "\"title\""];
        let joined = lines.join("\n");

        let mut str_cursor = StrCursor::new(&joined);
        let from_str = LinkReferenceDefinition::try_parse(&mut str_cursor, 30).unwrap();
        let mut line_cursor = LineCursor::new(&lines);
        let from_lines = LinkReferenceDefinition::try_parse(&mut line_cursor, 30).unwrap();

        assert_eq!(from_str.label, from_lines.label);
        assert_eq!(from_str.destination, from_lines.destination);
        assert_eq!(from_str.title, from_lines.title);
        assert_eq!(from_str.label_span, from_lines.label_span);
        assert_eq!(from_str.destination_span, from_lines.destination_span);
        assert_eq!(from_str.title_span, from_lines.title_span);
        assert_eq!(from_str.span, from_lines.span);
    }

    #[test]
    fn programmatic_construction_has_absent_spans() {
        let def = LinkReferenceDefinition::new("foo", "/url", Some("My Title".to_string()));
        assert_eq!(def.label, "foo");
        assert_eq!(def.destination, "/url");
        assert_eq!(def.title.as_deref(), Some("My Title"));
        assert_eq!(def.label_span, Span::EMPTY);
        assert_eq!(def.destination_span, Span::EMPTY);
        assert_eq!(def.title_span, Span::EMPTY);
        assert_eq!(def.span, Span::EMPTY);
        assert!(def.inline_builder.is_none());
        assert!(!def.open);
    }

    #[test]
    fn entity_is_mutable_after_parsing() {
        let mut cursor = StrCursor::new("[foo]: HTTP://EXAMPLE.COM");
        let mut def = LinkReferenceDefinition::try_parse(&mut cursor, 0).unwrap();
        // A later normalization pass may rewrite fields in place.
        def.destination = def.destination.to_lowercase();
        def.title = Some("added later".to_string());
        assert_eq!(def.destination, "http://example.com");
    }

    #[test]
    fn installed_builder_overrides_default_construction() {
        let mut cursor = StrCursor::new("[foo]: /url \"bar\"");
        let mut def = LinkReferenceDefinition::try_parse(&mut cursor, 0).unwrap();
        def.inline_builder = Some(Box::new(
            |_ctx: &mut ResolutionContext, d: &LinkReferenceDefinition, _child: Option<Inline>| {
                Some(Inline::Text(format!("custom:{}", d.destination)))
            },
        ));

        let mut ctx = ResolutionContext::link();
        let node = build_reference_inline(&mut ctx, &def, None);
        assert_eq!(node, Inline::Text("custom:/url".to_string()));
    }
}
