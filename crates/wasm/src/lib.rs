use refdef_core::{LinkReferenceDefinition, Span, StrCursor};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

/// Result of a parse attempt, serialized for JavaScript consumers.
///
/// When `matched` is false all other fields are absent. Spans are
/// document-global; zero-length spans mean "fragment absent".
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseResult {
    /// Whether the input matched the definition grammar.
    pub matched: bool,
    /// Bracketed key text, not normalized.
    pub label: Option<String>,
    /// Link or image target.
    pub destination: Option<String>,
    /// Title text, absent when the source had none.
    pub title: Option<String>,
    /// Span of the label text.
    pub label_span: Option<Span>,
    /// Span of the destination token.
    pub destination_span: Option<Span>,
    /// Span of the title token.
    pub title_span: Option<Span>,
    /// Full extent of the definition.
    pub span: Option<Span>,
}

impl From<LinkReferenceDefinition> for ParseResult {
    fn from(def: LinkReferenceDefinition) -> Self {
        ParseResult {
            matched: true,
            label: Some(def.label),
            destination: Some(def.destination),
            title: def.title,
            label_span: Some(def.label_span),
            destination_span: Some(def.destination_span),
            title_span: Some(def.title_span),
            span: Some(def.span),
        }
    }
}

/// Tries to parse a link reference definition at the start of `input`.
///
/// `document_offset` is the document-global character index of the start
/// of `input`; all spans in the result are translated with it.
///
/// # Returns
///
/// A `ParseResult` object. `matched: false` means the input is not a
/// definition - an expected outcome, not an error.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { try_parse } from './refdef_wasm';
///
/// const result = try_parse('[foo]: /url "bar"', 100);
/// // result = {
/// //   matched: true,
/// //   label: "foo",
/// //   destination: "/url",
/// //   title: "bar",
/// //   destination_span: { start: 107, end: 111 },
/// //   ...
/// // }
/// ```
#[wasm_bindgen]
pub fn try_parse(input: &str, document_offset: usize) -> Result<JsValue, JsError> {
    let mut cursor = StrCursor::new(input);
    let result = match LinkReferenceDefinition::try_parse(&mut cursor, document_offset) {
        Some(def) => ParseResult::from(def),
        None => ParseResult::default(),
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
