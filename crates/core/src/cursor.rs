//! Forward-scanning character cursors.
//!
//! The parse entry point is generic over [`CharCursor`] so the same
//! algorithm runs unchanged over a whole-document buffer or over lines
//! extracted elsewhere in a block pipeline. Positions are character
//! offsets counted from where the cursor was created; the caller maps
//! local position 0 to a document-global offset.

/// A forward-only character source with a local position.
///
/// Cursors advance monotonically; there is no rollback. Cloning produces
/// an independent probe for speculative lookahead, which the scanner
/// commits by assigning the probe back over the original.
pub trait CharCursor: Clone {
    /// Local character offset from the cursor's creation point.
    fn pos(&self) -> usize;

    /// The next character, without consuming it.
    fn peek(&self) -> Option<char>;

    /// Consume and return the next character.
    fn bump(&mut self) -> Option<char>;
}

/// Cursor over a single `&str`, whether a whole document buffer or a
/// slice extracted from one.
#[derive(Debug, Clone)]
pub struct StrCursor<'a> {
    rest: std::str::Chars<'a>,
    pos: usize,
}

impl<'a> StrCursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input.chars(),
            pos: 0,
        }
    }
}

impl CharCursor for StrCursor<'_> {
    fn pos(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        self.rest.clone().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.rest.next()?;
        self.pos += 1;
        Some(ch)
    }
}

/// Cursor over a group of extracted lines, presented as if the lines were
/// joined with `\n` (no trailing newline after the last line).
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    line: usize,
    rest: std::str::Chars<'a>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at the start of the first line.
    pub fn new(lines: &'a [&'a str]) -> Self {
        let rest = lines.first().map(|l| l.chars()).unwrap_or("".chars());
        Self {
            lines,
            line: 0,
            rest,
            pos: 0,
        }
    }
}

impl CharCursor for LineCursor<'_> {
    fn pos(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        if let Some(ch) = self.rest.clone().next() {
            return Some(ch);
        }
        if self.line + 1 < self.lines.len() {
            Some('\n')
        } else {
            None
        }
    }

    fn bump(&mut self) -> Option<char> {
        if let Some(ch) = self.rest.next() {
            self.pos += 1;
            return Some(ch);
        }
        if self.line + 1 < self.lines.len() {
            self.line += 1;
            self.rest = self.lines[self.line].chars();
            self.pos += 1;
            Some('\n')
        } else {
            None
        }
    }
}
