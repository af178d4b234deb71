//! Look-ahead token stream used by the parser.

use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use super::{Tokenizer, is_space};
use crate::error::{Error, Result, expected_message};
use crate::logging::targets;
use crate::reader::Position;
use crate::token::{Token, TokenKind};

/// Number of consumed tokens kept for [`TokenStream::unget`].
pub const LOOKAHEAD: usize = 4;

/// Kinds an embedded variable may stand in for.
const VAR_PROXIES: &[TokenKind] = &[
    TokenKind::Percentage,
    TokenKind::Ident,
    TokenKind::Number,
    TokenKind::Dimension,
    TokenKind::Str,
];

/// An `an+b` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nth {
    pub a: i32,
    pub b: i32,
}

impl Nth {
    /// Whether the 1-based `index` is selected.
    pub fn matches(&self, index: i32) -> bool {
        if self.a == 0 {
            return index == self.b;
        }
        let (a, diff) = (i64::from(self.a), i64::from(index) - i64::from(self.b));
        diff % a == 0 && diff / a >= 0
    }
}

impl fmt::Display for Nth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.a, self.b) {
            (0, b) => write!(f, "{b}"),
            (a, 0) => write!(f, "{a}n"),
            (a, b) if b < 0 => write!(f, "{a}n{b}"),
            (a, b) => write!(f, "{a}n+{b}"),
        }
    }
}

/// Token stream with a bounded ring buffer of already-scanned tokens.
///
/// Comments never reach the buffer. Whitespace and embedded variables are
/// buffered but skipped by reads that did not ask for them.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokenizer: Tokenizer<'a>,
    buf: VecDeque<Token>,
    /// Number of buffered tokens already handed out.
    cur: usize,
    /// `&` tokens currently consumed.
    amp: usize,
    start: Token,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(text),
            buf: VecDeque::with_capacity(LOOKAHEAD),
            cur: 0,
            amp: 0,
            start: Token::eof(Position::START),
        }
    }

    /// The whole input.
    pub fn source(&self) -> &'a str {
        self.tokenizer.reader().source()
    }

    /// Tokens scanned from the source so far, re-reads excluded.
    pub fn tokens_scanned(&self) -> usize {
        self.tokenizer.tokens_scanned()
    }

    /// Reader position, i.e. just past the furthest scanned token.
    pub fn position(&self) -> Position {
        self.tokenizer.reader().position()
    }

    /// Whether nothing but end of input is left, look-ahead included.
    pub fn at_source_end(&self) -> bool {
        self.buf
            .iter()
            .skip(self.cur)
            .all(|t| matches!(t.kind, TokenKind::Eof | TokenKind::Whitespace))
            && self.tokenizer.reader().eof()
    }

    /// Number of `&` tokens consumed and not given back.
    pub fn amp_count(&self) -> usize {
        self.amp
    }

    /// The most recently consumed token.
    pub fn token(&self) -> &Token {
        match self.cur {
            0 => &self.start,
            n => &self.buf[n - 1],
        }
    }

    /// The next buffered token that was scanned but not yet consumed.
    pub fn peek_cached(&self) -> Option<&Token> {
        self.buf.get(self.cur)
    }

    /// Consume the next token.
    ///
    /// Comments are always skipped; whitespace unless `ws` and embedded
    /// variables unless `uvar`.
    pub fn get(&mut self, uvar: bool, ws: bool) -> Token {
        let skip = |tok: &Token| {
            tok.kind == TokenKind::Whitespace && !ws || tok.kind == TokenKind::UserVar && !uvar
        };
        while self.cur < self.buf.len() {
            self.cur += 1;
            let tok = &self.buf[self.cur - 1];
            if !skip(tok) {
                let tok = tok.clone();
                self.consumed(&tok);
                return tok;
            }
        }
        let tok = loop {
            let tok = self.tokenizer.next_token();
            if tok.kind != TokenKind::Comment && !skip(&tok) {
                break tok;
            }
        };
        if self.buf.len() == LOOKAHEAD {
            self.buf.pop_front();
        }
        self.buf.push_back(tok.clone());
        self.cur = self.buf.len();
        self.consumed(&tok);
        tok
    }

    /// Consume the next non-whitespace token, skipping embedded variables.
    pub fn grab(&mut self) -> Token {
        self.get(false, false)
    }

    /// Kind of the next token without consuming it.
    pub fn peek(&mut self, uvar: bool, ws: bool) -> Result<TokenKind> {
        let kind = self.get(uvar, ws).kind;
        self.unget()?;
        Ok(kind)
    }

    /// Give back the last consumed token.
    pub fn unget(&mut self) -> Result<()> {
        if self.cur == 0 {
            trace!(target: targets::TOKENIZER, "unget past buffer start");
            return Err(Error::internal("Too much lookahead."));
        }
        if self.buf[self.cur - 1].kind == TokenKind::Amp {
            self.amp -= 1;
        }
        self.cur -= 1;
        Ok(())
    }

    fn consumed(&mut self, tok: &Token) {
        if tok.kind == TokenKind::Amp {
            self.amp += 1;
        }
    }

    /// Consume the next raw token (whitespace included) if its kind is one of
    /// `kinds`.
    pub fn matches(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>> {
        let tok = self.get(false, true);
        if kinds.contains(&tok.kind) {
            return Ok(Some(tok));
        }
        self.unget()?;
        Ok(None)
    }

    /// Consume the next non-whitespace token if its kind is one of `kinds`.
    ///
    /// When a value kind is wanted, an embedded variable may stand in for it
    /// unless the token after it matches instead.
    pub fn match_smart(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>> {
        let ws = kinds.contains(&TokenKind::Whitespace);
        let proxy = kinds.iter().any(|k| VAR_PROXIES.contains(k));
        let tok = self.get(proxy, ws);
        if kinds.contains(&tok.kind) {
            return Ok(Some(tok));
        }
        if tok.is_var() {
            let next = self.get(false, ws);
            if kinds.contains(&next.kind) {
                return Ok(Some(next));
            }
            self.unget()?;
            return Ok(Some(tok));
        }
        self.unget()?;
        Ok(None)
    }

    /// Like [`TokenStream::match_smart`], additionally requiring the token
    /// text to be one of `words` (ASCII case-insensitive).
    pub fn match_smart_text(
        &mut self,
        kinds: &[TokenKind],
        words: &[&str],
    ) -> Result<Option<Token>> {
        let tok = self.get(false, false);
        if kinds.contains(&tok.kind) && words.iter().any(|w| tok.is(w)) {
            return Ok(Some(tok));
        }
        self.unget()?;
        Ok(None)
    }

    /// [`TokenStream::match_smart`] or a syntax error naming `kinds`.
    pub fn must_smart(&mut self, kinds: &[TokenKind]) -> Result<Token> {
        match self.match_smart(kinds)? {
            Some(tok) => Ok(tok),
            None => {
                let found = self.grab();
                self.unget()?;
                Err(self.failure(&describe_kinds(kinds), &found))
            }
        }
    }

    /// [`TokenStream::match_smart_text`] or a syntax error naming `words`.
    pub fn must_smart_text(&mut self, kinds: &[TokenKind], words: &[&str]) -> Result<Token> {
        match self.match_smart_text(kinds, words)? {
            Some(tok) => Ok(tok),
            None => {
                let found = self.grab();
                self.unget()?;
                let goal = words
                    .iter()
                    .map(|w| format!("\"{w}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(self.failure(&goal, &found))
            }
        }
    }

    /// Check the current token against `kinds`; on mismatch the token is
    /// given back and a syntax error returned.
    pub fn expect_current(&mut self, kinds: &[TokenKind]) -> Result<Token> {
        let tok = self.token().clone();
        if kinds.contains(&tok.kind) {
            return Ok(tok);
        }
        if self.cur > 0 {
            self.unget()?;
        }
        Err(self.failure(&describe_kinds(kinds), &tok))
    }

    /// `Expected {goal} but found "{tok}".` at the token's position.
    pub fn failure(&self, goal: &str, tok: &Token) -> Error {
        Error::syntax(expected_message(goal, &tok.text), tok.pos)
    }

    /// Drop the look-ahead buffer and continue scanning at `pos`.
    pub fn reposition(&mut self, pos: Position) {
        trace!(target: targets::TOKENIZER, %pos, "reposition");
        self.tokenizer.reader_mut().seek(pos);
        self.reset_buffer();
    }

    fn reset_buffer(&mut self) {
        self.buf.clear();
        self.cur = 0;
        self.amp = 0;
    }

    /// Skip whitespace and comments directly in the source.
    fn skip_space_comments(&mut self) {
        let reader = self.tokenizer.reader_mut();
        loop {
            reader.read_while(is_space);
            if !reader.rest().starts_with("/*") {
                return;
            }
            reader.read_count(2);
            if reader.read_to("*/").is_err() {
                reader.read_count(usize::MAX);
            }
        }
    }

    /// Scan the `an+b` argument of `:nth-child(` directly from the source.
    ///
    /// Must be called right after the function token, with no look-ahead
    /// pending. On success the cursor is left before the `of` keyword or the
    /// closing parenthesis; on failure it is restored.
    pub fn read_nth(&mut self) -> Option<Nth> {
        self.skip_space_comments();
        let reader = self.tokenizer.reader_mut();
        let restore = reader.position();
        let digits = |s: &str| s.parse::<i32>().ok();

        let nth = if reader.read_match_ascii_ci("even").is_some() {
            Some(Nth { a: 2, b: 0 })
        } else if reader.read_match_ascii_ci("odd").is_some() {
            Some(Nth { a: 2, b: 1 })
        } else {
            let negative = match reader.peek(1) {
                Some('-') => {
                    reader.read();
                    true
                }
                Some('+') => {
                    reader.read();
                    false
                }
                _ => false,
            };
            let sign = if negative { -1 } else { 1 };
            let num = reader.read_while(|c| c.is_ascii_digit());
            if matches!(reader.peek(1), Some('n' | 'N')) {
                reader.read();
                let a = if num.is_empty() { 1 } else { digits(num).unwrap_or(0) };
                let a = sign * a;
                let after_n = reader.position();
                reader.read_while(is_space);
                match reader.peek(1) {
                    Some(op @ ('+' | '-')) => {
                        reader.read();
                        reader.read_while(is_space);
                        let b = digits(reader.read_while(|c| c.is_ascii_digit()));
                        b.map(|b| Nth {
                            a,
                            b: if op == '-' { -b } else { b },
                        })
                    }
                    _ => {
                        reader.seek(after_n);
                        Some(Nth { a, b: 0 })
                    }
                }
            } else {
                digits(num).map(|b| Nth { a: 0, b: sign * b })
            }
        };

        let terminated = match reader.peek(1) {
            Some(c) if is_space(c) || c == ')' => true,
            _ => reader.rest().starts_with("/*"),
        };
        match nth {
            Some(nth) if terminated => Some(nth),
            _ => {
                reader.seek(restore);
                None
            }
        }
    }

    /// Skip the remainder of a malformed declaration or block directly in
    /// the source, honoring nested brackets, strings and comments.
    ///
    /// At declaration level the skip stops after a `;`, before a `}`, or
    /// after the `}` closing a nested block. With `in_block` it stops before
    /// the `}` closing the current block.
    pub fn skip_decl_block(&mut self, in_block: bool) {
        if self
            .peek_cached()
            .is_some_and(|t| matches!(t.kind, TokenKind::RBrace | TokenKind::Semicolon))
        {
            return;
        }
        #[derive(Clone, Copy, PartialEq)]
        enum End {
            Decl,
            Char(char),
        }
        // Scanning restarts at the end of the last consumed token.
        let resume = self.resume_position();
        let reader = self.tokenizer.reader_mut();
        reader.seek(resume);
        let mut stack: Vec<End> = Vec::new();
        let mut end = if in_block { End::Char('}') } else { End::Decl };
        while let Some(c) = reader.peek(1) {
            let closes = end == End::Char(c) || end == End::Decl && (c == ';' || c == '}');
            if closes {
                match stack.pop() {
                    None => {
                        if c == ';' {
                            reader.read();
                        }
                        break;
                    }
                    Some(End::Decl) if c == '}' => {
                        reader.read();
                        break;
                    }
                    Some(outer) => end = outer,
                }
            } else if matches!(c, '}' | ')' | ']') {
                break;
            } else if let Some(closer) = match c {
                '{' => Some('}'),
                '(' => Some(')'),
                '[' => Some(']'),
                _ => None,
            } {
                stack.push(end);
                end = End::Char(closer);
            }
            reader.read();
            match c {
                '"' | '\'' => loop {
                    match reader.read() {
                        None | Some('\n' | '\r' | '\u{c}') => break,
                        Some('\\') => {
                            reader.read();
                        }
                        Some(q) if q == c => break,
                        Some(_) => {}
                    }
                },
                '/' if reader.peek(1) == Some('*') => {
                    reader.read();
                    if reader.read_to("*/").is_err() {
                        reader.read_count(usize::MAX);
                    }
                }
                '\\' => {
                    reader.read();
                }
                _ => {}
            }
        }
        self.reset_buffer();
    }

    /// Where scanning continues when the look-ahead is discarded.
    fn resume_position(&self) -> Position {
        match self.peek_cached() {
            Some(next) => next.pos,
            None => self.position(),
        }
    }
}

pub(crate) fn describe_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|k| k.describe())
        .collect::<Vec<_>>()
        .join(", ")
}
