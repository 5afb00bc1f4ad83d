//! Character-level tokenizer for link reference definitions.
//!
//! Lexes `[label]: destination "title"` (CommonMark 0.31, section 4.7)
//! from any [`CharCursor`], reporting the matched text together with
//! *local* spans, relative to the cursor's position 0. Translation into
//! document-global coordinates happens in the parse entry point, not here.

use crate::cursor::CharCursor;
use crate::span::Span;

/// Raw scan result: matched text plus cursor-local spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDefinition {
    /// Label text between the brackets, escapes kept raw.
    pub label: String,
    /// Destination with backslash escapes resolved.
    pub destination: String,
    /// Title with escapes resolved, `None` when the source had none.
    pub title: Option<String>,
    /// Span of the label text, excluding the brackets.
    pub label_span: Span,
    /// Span of the destination token, including angle brackets when used.
    pub destination_span: Span,
    /// Span of the title token including its delimiters, or the empty
    /// sentinel when no title was matched.
    pub title_span: Span,
}

/// Attempt to lex one link reference definition at the cursor's position.
///
/// On success the cursor is left after the definition (the trailing
/// newline, when present, is consumed). On failure the cursor is left
/// wherever scanning stopped; callers must not assume rollback.
pub fn scan_definition<C: CharCursor>(cursor: &mut C) -> Option<RawDefinition> {
    if cursor.peek() != Some('[') {
        return None;
    }
    cursor.bump();

    let label_start = cursor.pos();
    let mut label_end = label_start;
    let mut label = String::new();
    let mut closed = false;
    while let Some(ch) = cursor.peek() {
        match ch {
            ']' => {
                label_end = cursor.pos();
                cursor.bump();
                closed = true;
                break;
            }
            '[' => return None,
            '\\' => {
                cursor.bump();
                label.push('\\');
                if let Some(escaped) = cursor.bump() {
                    label.push(escaped);
                }
            }
            _ => {
                cursor.bump();
                label.push(ch);
            }
        }
    }
    // Labels must have visible content and at most 999 characters.
    if !closed || label.trim().is_empty() || label.chars().count() > 999 {
        return None;
    }
    if cursor.bump() != Some(':') {
        return None;
    }

    skip_spaces_and_optional_newline(cursor);
    let (destination, destination_span) = scan_destination(cursor)?;

    // The title is speculative: it must be separated from the destination
    // by whitespace and nothing but spaces may follow it on its last line.
    // Probe on a clone so a failed attempt falls back to the titleless form.
    let after_destination = cursor.pos();
    let mut probe = cursor.clone();
    skip_spaces_and_optional_newline(&mut probe);
    if probe.pos() > after_destination
        && probe.peek().is_some()
        && let Some((title, title_span)) = scan_title(&mut probe)
    {
        skip_line_spaces(&mut probe);
        let terminated = match probe.peek() {
            None => true,
            Some('\n') => {
                probe.bump();
                true
            }
            Some(_) => false,
        };
        if terminated {
            *cursor = probe;
            return Some(RawDefinition {
                label,
                destination,
                title: Some(title),
                label_span: Span::new(label_start, label_end),
                destination_span,
                title_span,
            });
        }
    }

    // No usable title, so the destination's own line must end cleanly.
    skip_line_spaces(cursor);
    match cursor.peek() {
        None => {}
        Some('\n') => {
            cursor.bump();
        }
        Some(_) => return None,
    }
    Some(RawDefinition {
        label,
        destination,
        title: None,
        label_span: Span::new(label_start, label_end),
        destination_span,
        title_span: Span::EMPTY,
    })
}

fn scan_destination<C: CharCursor>(cursor: &mut C) -> Option<(String, Span)> {
    let start = cursor.pos();
    if cursor.peek()? == '<' {
        cursor.bump();
        let mut destination = String::new();
        loop {
            match cursor.peek()? {
                '>' => {
                    cursor.bump();
                    return Some((destination, Span::new(start, cursor.pos())));
                }
                '<' | '\n' => return None,
                '\\' => {
                    cursor.bump();
                    let escaped = cursor.bump()?;
                    destination.push(escaped);
                }
                ch => {
                    cursor.bump();
                    destination.push(ch);
                }
            }
        }
    }

    let mut destination = String::new();
    let mut depth = 0i32;
    while let Some(ch) = cursor.peek() {
        match ch {
            ' ' | '\t' | '\n' => break,
            c if (c as u32) < 0x20 => break,
            '(' => {
                depth += 1;
                if depth > 32 {
                    return None;
                }
                cursor.bump();
                destination.push('(');
            }
            ')' => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                cursor.bump();
                destination.push(')');
            }
            '\\' => {
                cursor.bump();
                match cursor.peek() {
                    Some(p) if p.is_ascii_punctuation() => {
                        cursor.bump();
                        destination.push(p);
                    }
                    _ => destination.push('\\'),
                }
            }
            _ => {
                cursor.bump();
                destination.push(ch);
            }
        }
    }
    if depth != 0 || destination.is_empty() {
        return None;
    }
    Some((destination, Span::new(start, cursor.pos())))
}

fn scan_title<C: CharCursor>(cursor: &mut C) -> Option<(String, Span)> {
    let start = cursor.pos();
    let closer = match cursor.peek()? {
        '"' => '"',
        '\'' => '\'',
        '(' => ')',
        _ => return None,
    };
    cursor.bump();
    let mut title = String::new();
    loop {
        match cursor.peek()? {
            ch if ch == closer => {
                cursor.bump();
                return Some((title, Span::new(start, cursor.pos())));
            }
            // Paren titles cannot contain an unescaped opener.
            '(' if closer == ')' => return None,
            '\\' => {
                cursor.bump();
                match cursor.peek() {
                    Some(p) if p.is_ascii_punctuation() => {
                        cursor.bump();
                        title.push(p);
                    }
                    _ => title.push('\\'),
                }
            }
            ch => {
                cursor.bump();
                title.push(ch);
            }
        }
    }
}

fn skip_spaces_and_optional_newline<C: CharCursor>(cursor: &mut C) {
    skip_line_spaces(cursor);
    if cursor.peek() == Some('\n') {
        cursor.bump();
        skip_line_spaces(cursor);
    }
}

fn skip_line_spaces<C: CharCursor>(cursor: &mut C) {
    while matches!(cursor.peek(), Some(' ' | '\t')) {
        cursor.bump();
    }
}
