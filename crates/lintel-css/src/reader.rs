//! Character cursor over the source text.
//!
//! The reader tracks a byte offset together with a 1-based line and column
//! (counted in characters). Line breaks are `\n`, `\r\n`, a lone `\r` and
//! `\f`; the text itself is never normalized, so slices taken from the
//! reader always match the input byte for byte.

use std::fmt;

use crate::error::{Error, Result};

/// An absolute location in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number in characters (1-indexed).
    pub col: u32,
    /// Byte offset from the start of the input.
    pub offset: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position {
        line: 1,
        col: 1,
        offset: 0,
    };

    /// Create a position.
    pub const fn new(line: u32, col: u32, offset: usize) -> Self {
        Self { line, col, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A cursor over a string slice.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    text: &'a str,
    pos: Position,
    bookmark: Position,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: Position::START,
            bookmark: Position::START,
        }
    }

    /// The whole input.
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// The current cursor position.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.pos.offset
    }

    /// Whether the whole input was consumed.
    pub fn eof(&self) -> bool {
        self.pos.offset >= self.text.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos.offset..]
    }

    /// A slice of the input between two byte offsets, clipped to its length.
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        let to = to.min(self.text.len());
        &self.text[from.min(to)..to]
    }

    /// Look at the `n`-th character ahead without consuming anything.
    ///
    /// `peek(1)` is the next character.
    pub fn peek(&self, n: usize) -> Option<char> {
        if n == 0 {
            return None;
        }
        self.rest().chars().nth(n - 1)
    }

    /// Consume one character.
    pub fn read(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos.offset += c.len_utf8();
        match c {
            '\n' | '\u{c}' => {
                self.pos.line += 1;
                self.pos.col = 1;
            }
            // \r\n is a single break, counted when the \n is read
            '\r' if self.rest().starts_with('\n') => self.pos.col += 1,
            '\r' => {
                self.pos.line += 1;
                self.pos.col = 1;
            }
            _ => self.pos.col += 1,
        }
        Some(c)
    }

    /// Save the cursor into the internal bookmark and return it.
    pub fn mark(&mut self) -> Position {
        self.bookmark = self.pos;
        self.pos
    }

    /// Restore the cursor saved by the last [`Reader::mark`].
    pub fn reset(&mut self) {
        self.pos = self.bookmark;
    }

    /// Move the cursor to a position previously produced by this reader
    /// (or by a reader over an identical prefix).
    pub fn seek(&mut self, pos: Position) {
        self.pos = pos;
    }

    /// Consume `n` characters, stopping early at the end of input.
    pub fn read_count(&mut self, n: usize) -> &'a str {
        let start = self.pos.offset;
        for _ in 0..n {
            if self.read().is_none() {
                break;
            }
        }
        &self.text[start..self.pos.offset]
    }

    /// Consume `lit` if the input continues with it.
    pub fn read_match_str(&mut self, lit: &str) -> Option<&'a str> {
        if !self.rest().starts_with(lit) {
            return None;
        }
        Some(self.consume_bytes(lit.len()))
    }

    /// Consume `lit` (ASCII, case-insensitive) if the input continues with it.
    pub fn read_match_ascii_ci(&mut self, lit: &str) -> Option<&'a str> {
        let rest = self.rest().as_bytes();
        if rest.len() < lit.len() || !rest[..lit.len()].eq_ignore_ascii_case(lit.as_bytes()) {
            return None;
        }
        Some(self.consume_bytes(lit.len()))
    }

    /// Consume the longest run of characters satisfying `pred`.
    ///
    /// Returns `None` when not even one character matched.
    pub fn read_match(&mut self, pred: impl FnMut(char) -> bool) -> Option<&'a str> {
        let run = self.read_while(pred);
        (!run.is_empty()).then_some(run)
    }

    /// Consume characters while `pred` holds; may return an empty slice.
    pub fn read_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos.offset;
        while let Some(c) = self.peek(1) {
            if !pred(c) {
                break;
            }
            self.read();
        }
        &self.text[start..self.pos.offset]
    }

    /// Consume everything up to and including `delim`.
    ///
    /// Fails without moving the cursor when `delim` never occurs.
    pub fn read_to(&mut self, delim: &str) -> Result<&'a str> {
        match self.rest().find(delim) {
            Some(idx) => Ok(self.consume_bytes(idx + delim.len())),
            None => Err(Error::syntax(
                format!("Expected \"{delim}\" but reached end of input."),
                self.pos,
            )),
        }
    }

    fn consume_bytes(&mut self, len: usize) -> &'a str {
        let start = self.pos.offset;
        let end = start + len;
        while self.pos.offset < end {
            self.read();
        }
        &self.text[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_tracks_lines_and_columns() {
        let mut r = Reader::new("ab\ncd");
        assert_eq!(r.read(), Some('a'));
        assert_eq!(r.read(), Some('b'));
        assert_eq!(r.position(), Position::new(1, 3, 2));
        r.read();
        assert_eq!(r.position(), Position::new(2, 1, 3));
        assert_eq!(r.read_count(10), "cd");
        assert!(r.eof());
        assert_eq!(r.read(), None);
    }

    #[test]
    fn crlf_is_one_line_break() {
        let mut r = Reader::new("a\r\nb\rc");
        r.read_count(3);
        assert_eq!(r.position(), Position::new(2, 1, 3));
        r.read_count(2);
        assert_eq!(r.position(), Position::new(3, 1, 5));
    }

    #[test]
    fn peek_does_not_move() {
        let r = Reader::new("xyz");
        assert_eq!(r.peek(1), Some('x'));
        assert_eq!(r.peek(3), Some('z'));
        assert_eq!(r.peek(4), None);
        assert_eq!(r.position(), Position::START);
    }

    #[test]
    fn mark_and_reset() {
        let mut r = Reader::new("hello world");
        r.read_count(2);
        r.mark();
        r.read_count(5);
        r.reset();
        assert_eq!(r.offset(), 2);
        assert_eq!(r.rest(), "llo world");
    }

    #[test]
    fn read_match_only_consumes_on_success() {
        let mut r = Reader::new("Important!");
        assert_eq!(r.read_match_str("imp"), None);
        assert_eq!(r.read_match_ascii_ci("imp"), Some("Imp"));
        assert_eq!(r.read_match(|c| c.is_ascii_digit()), None);
        assert_eq!(r.read_match(|c| c.is_ascii_alphabetic()), Some("ortant"));
        assert_eq!(r.rest(), "!");
    }

    #[test]
    fn read_to_spans_newlines() {
        let mut r = Reader::new("/* a\n b */x");
        r.read_count(2);
        assert_eq!(r.read_to("*/").unwrap(), " a\n b */");
        assert_eq!(r.position(), Position::new(2, 6, 10));
    }

    #[test]
    fn read_to_fails_without_delimiter() {
        let mut r = Reader::new("abc");
        assert!(r.read_to("*/").is_err());
        assert_eq!(r.offset(), 0);
    }

    #[test]
    fn read_count_clips_at_end() {
        let mut r = Reader::new("é!");
        assert_eq!(r.read_count(5), "é!");
        assert_eq!(r.position().col, 3);
        assert_eq!(r.position().offset, 3);
    }
}
