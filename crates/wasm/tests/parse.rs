use refdef_wasm::try_parse;
use serde::Deserialize;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ParseResult {
    matched: bool,
    label: Option<String>,
    destination: Option<String>,
    title: Option<String>,
    label_span: Option<SpanDto>,
    destination_span: Option<SpanDto>,
    title_span: Option<SpanDto>,
    span: Option<SpanDto>,
}

#[derive(Deserialize, Debug, PartialEq)]
struct SpanDto {
    start: usize,
    end: usize,
}

fn span(start: usize, end: usize) -> SpanDto {
    SpanDto { start, end }
}

#[wasm_bindgen_test]
fn parse_definition_with_title() {
    let result = try_parse("[foo]: /url \"bar\"", 100).expect("parse should succeed");
    let result: ParseResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.matched);
    assert_eq!(result.label.as_deref(), Some("foo"));
    assert_eq!(result.destination.as_deref(), Some("/url"));
    assert_eq!(result.title.as_deref(), Some("bar"));

    // Spans are translated into document-global coordinates.
    assert_eq!(result.label_span, Some(span(101, 104)));
    assert_eq!(result.destination_span, Some(span(107, 111)));
    assert_eq!(result.title_span, Some(span(112, 117)));
    assert_eq!(result.span, Some(span(100, 117)));
}

#[wasm_bindgen_test]
fn parse_definition_without_title() {
    let result = try_parse("[foo]: /url", 50).expect("parse should succeed");
    let result: ParseResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.matched);
    assert_eq!(result.title, None);
    // The absent-title sentinel is never translated.
    assert_eq!(result.title_span, Some(span(0, 0)));
    assert_eq!(result.destination_span, Some(span(57, 61)));
    assert_eq!(result.span, Some(span(50, 61)));
}

#[wasm_bindgen_test]
fn non_definition_reports_unmatched() {
    let result = try_parse("plain paragraph text", 0).expect("parse should succeed");
    let result: ParseResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(!result.matched);
    assert_eq!(result.label, None);
    assert_eq!(result.destination, None);
    assert_eq!(result.span, None);
}
