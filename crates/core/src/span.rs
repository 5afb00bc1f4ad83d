use serde::Serialize;

/// Half-open character range `[start, end)` in some coordinate space.
///
/// Spans reported by the tokenizer are local (relative to the cursor's
/// position 0); [`crate::LinkReferenceDefinition::try_parse`] translates
/// them into document-global coordinates. A zero-length span is the
/// sentinel for "this fragment is absent or was not separately tracked"
/// and carries no positional meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// Start offset, inclusive.
    pub start: usize,
    /// End offset, exclusive.
    pub end: usize,
}

impl Span {
    /// The absent-fragment sentinel.
    pub const EMPTY: Span = Span { start: 0, end: 0 };

    /// Create a span from start/end offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether this span covers no characters (the absent-fragment sentinel).
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Shift both endpoints into document-global coordinates.
    ///
    /// Zero-length spans are returned unchanged: a translated sentinel at an
    /// arbitrary global position would be indistinguishable from a real
    /// zero-width match at that position.
    pub fn offset_by(self, offset: usize) -> Span {
        if self.is_empty() {
            self
        } else {
            Span::new(self.start + offset, self.end + offset)
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_emptiness() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(!Span::new(3, 7).is_empty());
        assert_eq!(Span::EMPTY.len(), 0);
        assert!(Span::EMPTY.is_empty());
        assert!(Span::new(5, 5).is_empty());
    }

    #[test]
    fn offset_shifts_both_endpoints() {
        assert_eq!(Span::new(6, 10).offset_by(100), Span::new(106, 110));
        assert_eq!(Span::new(0, 1).offset_by(0), Span::new(0, 1));
    }

    #[test]
    fn empty_span_is_never_translated() {
        assert_eq!(Span::EMPTY.offset_by(100), Span::EMPTY);
        assert_eq!(Span::new(5, 5).offset_by(42), Span::new(5, 5));
    }

    #[test]
    fn displays_as_range() {
        assert_eq!(Span::new(12, 15).to_string(), "12..15");
    }

    #[test]
    fn serializes_to_start_end_object() {
        let json = serde_json::to_string(&Span::new(6, 10)).unwrap();
        assert_eq!(json, r#"{"start":6,"end":10}"#);
    }
}
