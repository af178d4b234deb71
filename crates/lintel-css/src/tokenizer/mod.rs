//! Tokenizer: turns source text into [`Token`]s.
//!
//! [`Tokenizer`] produces every token of the input, whitespace and comments
//! included, one per call. [`TokenStream`] layers the small look-ahead ring
//! buffer used by the parser on top of it.

mod stream;

use crate::reader::{Position, Reader};
use crate::token::{
    AtKeyword, AtRule, CommentKind, Name, Numeric, Payload, Token, TokenKind, UnitCategory,
};

pub use stream::{LOOKAHEAD, Nth, TokenStream};
pub(crate) use stream::describe_kinds;

const REPLACEMENT: char = '\u{FFFD}';

/// Comment prefixes recognized as embedded directives.
const DIRECTIVE_PREFIXES: &[&str] = &["lintel", "csslint"];

pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{c}')
}

fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{c}')
}

pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn is_valid_escape(a: Option<char>, b: Option<char>) -> bool {
    a == Some('\\') && b.is_some_and(|b| !is_newline(b))
}

/// Whether the three characters would start an identifier.
///
/// A leading `--` is not covered here; custom property names are scanned
/// separately.
fn starts_ident(a: Option<char>, b: Option<char>, c: Option<char>) -> bool {
    match a {
        Some('-') => b != Some('-') && starts_ident(b, c, None) || is_valid_escape(b, c),
        Some('\\') => is_valid_escape(a, b),
        Some(ch) => ch.is_ascii_alphabetic() || ch == '_' || !ch.is_ascii(),
        None => false,
    }
}

/// Single-character punctuation.
fn punctuation(c: char) -> Option<TokenKind> {
    Some(match c {
        '&' => TokenKind::Amp,
        ':' => TokenKind::Colon,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '=' => TokenKind::Equals,
        '>' => TokenKind::Gt,
        '{' => TokenKind::LBrace,
        '[' => TokenKind::LBracket,
        '(' => TokenKind::LParen,
        '-' => TokenKind::Minus,
        '|' => TokenKind::Pipe,
        '+' => TokenKind::Plus,
        '}' => TokenKind::RBrace,
        ']' => TokenKind::RBracket,
        ')' => TokenKind::RParen,
        ';' => TokenKind::Semicolon,
        '~' => TokenKind::Combinator,
        _ => return None,
    })
}

/// Decode the backslash escapes and line continuations of a string body.
pub(crate) fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            None => {}
            Some('\r') => {
                chars.next();
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            Some(n) if is_newline(n) => {
                chars.next();
            }
            Some(h) if h.is_ascii_hexdigit() => {
                let mut code = 0u32;
                let mut len = 0;
                while len < 6 {
                    match chars.peek().and_then(|c| c.to_digit(16)) {
                        Some(d) => {
                            code = code * 16 + d;
                            len += 1;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if chars.peek().is_some_and(|&c| c == ' ' || c == '\t' || c == '\n') {
                    chars.next();
                }
                out.push(code_point(code));
            }
            Some(other) => {
                chars.next();
                out.push(other);
            }
        }
    }
    out
}

fn code_point(code: u32) -> char {
    match code {
        0 => REPLACEMENT,
        _ => char::from_u32(code).unwrap_or(REPLACEMENT),
    }
}

/// Produces one token per call from a [`Reader`].
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    reader: Reader<'a>,
    scanned: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            reader: Reader::new(text),
            scanned: 0,
        }
    }

    /// The underlying reader.
    pub fn reader(&self) -> &Reader<'a> {
        &self.reader
    }

    pub(crate) fn reader_mut(&mut self) -> &mut Reader<'a> {
        &mut self.reader
    }

    /// Number of tokens scanned so far.
    pub fn tokens_scanned(&self) -> usize {
        self.scanned
    }

    /// Scan every remaining token, ending with (and including) `Eof`.
    pub fn tokenize_all(mut self) -> Vec<Token> {
        let mut out = Vec::new();
        loop {
            let tok = self.next_token();
            let done = tok.is_eof();
            out.push(tok);
            if done {
                return out;
            }
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.scanned += 1;
        let start = self.reader.position();
        let Some(a) = self.reader.read() else {
            return Token::eof(start);
        };
        let b = self.reader.peek(1);
        match a {
            _ if is_space(a) => {
                self.reader.read_while(is_space);
                self.finish(start, TokenKind::Whitespace)
            }
            '/' if b == Some('*') => self.comment(start),
            '0'..='9' => self.number(start, a),
            '+' | '.' if self.number_follows(a, b) => self.number(start, a),
            '-' if self.number_follows(a, b) => self.number(start, a),
            '-' if b == Some('-') => self.double_dash(start),
            '-' if starts_ident(Some(a), b, self.reader.peek(2)) => self.ident_like(start),
            'u' | 'U' if b == Some('+') => self
                .unicode_range(start)
                .unwrap_or_else(|| self.ident_like(start)),
            _ if starts_ident(Some(a), b, self.reader.peek(2)) => self.ident_like(start),
            '$' | '*' | '^' | '|' | '~' if b == Some('=') => {
                self.reader.read();
                self.finish(start, TokenKind::AttrEq)
            }
            '<' | '>' if b == Some('=') => {
                self.reader.read();
                self.finish(start, TokenKind::EqCmp)
            }
            '|' if b == Some('|') => {
                self.reader.read();
                self.finish(start, TokenKind::Combinator)
            }
            '#' if b.is_some_and(is_name_char) || is_valid_escape(b, self.reader.peek(2)) => {
                let name = self.read_name();
                let mut tok = self.finish(start, TokenKind::Hash);
                tok.payload = Payload::Name(Name::new(&name));
                tok
            }
            '*' => {
                let mut tok = self.finish(start, TokenKind::Star);
                tok.flags.star_hack = starts_ident(b, self.reader.peek(2), self.reader.peek(3));
                tok
            }
            '!' => self.important(start),
            '"' | '\'' => self.string(start, a),
            '\\' if b.is_some_and(is_newline) => {
                self.reader.read_while(is_space);
                self.finish(start, TokenKind::Whitespace)
            }
            '@' if starts_ident(b, self.reader.peek(2), self.reader.peek(3)) => {
                self.at_keyword(start)
            }
            '<' if self.reader.read_match_str("!--").is_some() => {
                self.finish(start, TokenKind::Cdco)
            }
            _ => match punctuation(a) {
                Some(kind) => self.finish(start, kind),
                None => self.finish(start, TokenKind::Char),
            },
        }
    }

    fn finish(&self, start: Position, kind: TokenKind) -> Token {
        let text = self.reader.slice(start.offset, self.reader.offset());
        Token::new(kind, text, start)
    }

    /// `a` was consumed; does a number start here?
    fn number_follows(&self, a: char, b: Option<char>) -> bool {
        let digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
        digit(b) || a != '.' && b == Some('.') && digit(self.reader.peek(2))
    }

    fn comment(&mut self, start: Position) -> Token {
        self.reader.read();
        let closed = self.reader.read_to("*/").is_ok();
        if !closed {
            self.reader.read_count(usize::MAX);
        }
        let text = self.reader.slice(start.offset, self.reader.offset());
        let body = if closed {
            &text[2..text.len() - 2]
        } else {
            &text[2..]
        };
        if closed && let Some(name) = embedded_variable(body) {
            let mut tok = Token::new(TokenKind::UserVar, text, start);
            tok.flags.is_var = true;
            tok.payload = Payload::Comment(CommentKind::Variable(name.to_string()));
            return tok;
        }
        let kind = match directive(body) {
            Some(directive) => CommentKind::Directive(directive.to_string()),
            None => CommentKind::Plain,
        };
        let mut tok = Token::new(TokenKind::Comment, text, start);
        tok.payload = Payload::Comment(kind);
        tok
    }

    fn number(&mut self, start: Position, first: char) -> Token {
        let digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
        let mut is_float = first == '.';
        if matches!(first, '+' | '-') && self.reader.peek(1) == Some('.') {
            self.reader.read();
            is_float = true;
        }
        self.reader.read_while(|c| c.is_ascii_digit());
        if !is_float && self.reader.peek(1) == Some('.') && digit(self.reader.peek(2)) {
            self.reader.read();
            self.reader.read_while(|c| c.is_ascii_digit());
            is_float = true;
        }
        if matches!(self.reader.peek(1), Some('e' | 'E')) {
            let exp = match self.reader.peek(2) {
                Some('+' | '-') => digit(self.reader.peek(3)),
                c => digit(c),
            };
            if exp {
                self.reader.read_count(2);
                self.reader.read_while(|c| c.is_ascii_digit());
                is_float = true;
            }
        }
        let num_text = self.reader.slice(start.offset, self.reader.offset());
        let value = num_text.parse::<f64>().unwrap_or(0.0);

        let (kind, unit) = if self.reader.peek(1) == Some('%') {
            self.reader.read();
            (TokenKind::Percentage, "%".to_string())
        } else if starts_ident(self.reader.peek(1), self.reader.peek(2), self.reader.peek(3)) {
            (TokenKind::Dimension, self.read_name().to_lowercase())
        } else {
            (TokenKind::Number, String::new())
        };
        let category = match kind {
            TokenKind::Dimension => UnitCategory::of(&unit),
            _ => UnitCategory::Unknown,
        };
        let is_zero = unit.is_empty() && value == 0.0;
        let mut tok = self.finish(start, kind);
        tok.payload = Payload::Numeric(Numeric {
            value,
            is_int: is_zero || unit.is_empty() && !is_float,
            is_zero,
            unit,
            category,
        });
        tok
    }

    /// `-` followed by `-` was seen.
    fn double_dash(&mut self, start: Position) -> Token {
        match self.reader.peek(2) {
            Some(c) if is_name_char(c) || c == '\\' => {
                let mut tok = self.ident_like(start);
                tok.flags.custom_property = tok.kind == TokenKind::Ident;
                tok
            }
            Some('>') => {
                self.reader.read_count(2);
                self.finish(start, TokenKind::Cdco)
            }
            _ => self.finish(start, TokenKind::Minus),
        }
    }

    /// Identifier, function, `url(...)` or IE `progid:` filter.
    fn ident_like(&mut self, start: Position) -> Token {
        self.reader.seek(start);
        let raw = self.read_name();
        let name = Name::new(&raw);
        if self.reader.peek(1) == Some('(') {
            self.reader.read();
            if matches!(name.lower.as_str(), "url" | "url-prefix" | "domain")
                && let Some(value) = self.uri_value()
            {
                let mut tok = self.finish(start, TokenKind::Uri);
                tok.payload = Payload::Uri { name, value };
                return tok;
            }
            let mut tok = self.finish(start, TokenKind::Function);
            tok.payload = Payload::Name(name);
            return tok;
        }
        if self.reader.peek(1) == Some(':') && name.lower == "progid" {
            let line_end = self
                .reader
                .rest()
                .find(is_newline)
                .unwrap_or(self.reader.rest().len());
            if let Some(paren) = self.reader.rest()[..line_end].find('(') {
                self.reader.read_count(self.reader.rest()[..=paren].chars().count());
                let mut tok = self.finish(start, TokenKind::Function);
                let fn_name = &tok.text[..tok.text.len() - 1];
                tok.payload = Payload::Name(Name {
                    lower: fn_name.to_lowercase(),
                    vendor_pos: 0,
                });
                tok.flags.ie = true;
                return tok;
            }
        }
        let mut tok = self.finish(start, TokenKind::Ident);
        tok.payload = Payload::Name(name);
        tok
    }

    /// Read an identifier sequence, decoding escapes.
    fn read_name(&mut self) -> String {
        let mut out = String::new();
        loop {
            match self.reader.peek(1) {
                Some(c) if is_name_char(c) => {
                    self.reader.read();
                    out.push(c);
                }
                Some('\\') if is_valid_escape(Some('\\'), self.reader.peek(2)) => {
                    self.reader.read();
                    out.push(self.read_escape());
                }
                Some('\\') if self.reader.peek(2).is_none() => {
                    self.reader.read();
                    out.push(REPLACEMENT);
                }
                _ => return out,
            }
        }
    }

    /// The backslash was consumed.
    fn read_escape(&mut self) -> char {
        let hex = self.reader.read_while({
            let mut n = 0;
            move |c| {
                n += 1;
                n <= 6 && c.is_ascii_hexdigit()
            }
        });
        if hex.is_empty() {
            return self.reader.read().unwrap_or(REPLACEMENT);
        }
        let code = u32::from_str_radix(hex, 16).unwrap_or(0);
        match self.reader.peek(1) {
            Some('\r') => {
                self.reader.read();
                if self.reader.peek(1) == Some('\n') {
                    self.reader.read();
                }
            }
            Some(c) if is_space(c) => {
                self.reader.read();
            }
            _ => {}
        }
        code_point(code)
    }

    /// Contents of `url(` up to and including `)`, or `None` (cursor restored).
    fn uri_value(&mut self) -> Option<String> {
        let restore = self.reader.position();
        self.reader.read_while(is_space);
        let value = match self.reader.peek(1) {
            Some(q @ ('"' | '\'')) => {
                let body_start = self.reader.offset() + 1;
                self.reader.read();
                if !self.scan_string_body(q) {
                    self.reader.seek(restore);
                    return None;
                }
                let body = self.reader.slice(body_start, self.reader.offset() - 1);
                unescape(body)
            }
            _ => {
                let mut out = String::new();
                loop {
                    match self.reader.peek(1) {
                        Some('\\') if is_valid_escape(Some('\\'), self.reader.peek(2)) => {
                            self.reader.read();
                            out.push(self.read_escape());
                        }
                        Some(c)
                            if !is_space(c)
                                && !matches!(c, '"' | '\'' | '(' | ')' | '\\')
                                && !c.is_control() =>
                        {
                            self.reader.read();
                            out.push(c);
                        }
                        _ => break,
                    }
                }
                out
            }
        };
        self.reader.read_while(is_space);
        if self.reader.read_match_str(")").is_some() {
            Some(value)
        } else {
            self.reader.seek(restore);
            None
        }
    }

    /// Scan a string body after the opening quote. Returns whether the
    /// closing quote was found and consumed.
    fn scan_string_body(&mut self, quote: char) -> bool {
        loop {
            match self.reader.peek(1) {
                None => return false,
                Some(c) if is_newline(c) => return false,
                Some(c) if c == quote => {
                    self.reader.read();
                    return true;
                }
                Some('\\') => {
                    self.reader.read();
                    if let Some(next) = self.reader.read()
                        && next == '\r'
                        && self.reader.peek(1) == Some('\n')
                    {
                        self.reader.read();
                    }
                }
                Some(_) => {
                    self.reader.read();
                }
            }
        }
    }

    fn string(&mut self, start: Position, quote: char) -> Token {
        if !self.scan_string_body(quote) {
            return self.finish(start, TokenKind::Invalid);
        }
        let mut tok = self.finish(start, TokenKind::Str);
        let body = &tok.text[1..tok.text.len() - 1];
        tok.payload = Payload::Str(unescape(body));
        tok
    }

    /// `!` was consumed: `!important` allowing whitespace and comments
    /// in between, otherwise a plain delimiter.
    fn important(&mut self, start: Position) -> Token {
        let after_bang = self.reader.position();
        loop {
            self.reader.read_while(is_space);
            if self.reader.rest().starts_with("/*") {
                self.reader.read_count(2);
                if self.reader.read_to("*/").is_err() {
                    break;
                }
            } else {
                break;
            }
        }
        if self.reader.read_match_ascii_ci("important").is_some()
            && !self.reader.peek(1).is_some_and(is_name_char)
        {
            return self.finish(start, TokenKind::Important);
        }
        self.reader.seek(after_bang);
        self.finish(start, TokenKind::Delim)
    }

    fn at_keyword(&mut self, start: Position) -> Token {
        let raw = self.read_name();
        let name = Name::new(&raw);
        let rule = AtRule::lookup(name.unprefixed());
        let mut tok = self.finish(start, TokenKind::At);
        tok.payload = Payload::At(AtKeyword { rule, name });
        tok
    }

    /// `U+` was seen; scan a unicode-range or give up with the cursor restored.
    fn unicode_range(&mut self, start: Position) -> Option<Token> {
        self.reader.read();
        let restore = |this: &mut Self| {
            this.reader.seek(Position::new(start.line, start.col + 1, start.offset + 1));
            None
        };
        let hex6 = |this: &mut Self| {
            let mut n = 0;
            this.reader
                .read_while(|c| {
                    n += 1;
                    n <= 6 && c.is_ascii_hexdigit()
                })
                .to_string()
        };
        let first = hex6(self);
        if first.is_empty() {
            return restore(self);
        }
        let valid = if self.reader.peek(1) == Some('?') {
            let mut n = first.len();
            let wild = self.reader.read_while(|c| {
                n += 1;
                c == '?' && n <= 6
            });
            first.len() + wild.len() <= 6
        } else if self.reader.peek(1) == Some('-')
            && self.reader.peek(2).is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.reader.read();
            let last = hex6(self);
            u32::from_str_radix(&last, 16).is_ok_and(|v| v <= 0x10FFFF)
        } else {
            true
        };
        if !valid || u32::from_str_radix(&first, 16).map_or(true, |v| v > 0x10FFFF) {
            return restore(self);
        }
        Some(self.finish(start, TokenKind::UnicodeRange))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields every token up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        (!tok.is_eof()).then_some(tok)
    }
}

/// `[[name]]` inside a comment body.
fn embedded_variable(body: &str) -> Option<&str> {
    let name = body.strip_prefix("[[")?.strip_suffix("]]")?;
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    valid.then_some(name)
}

/// `lintel allow: foo` style directive body.
fn directive(body: &str) -> Option<&str> {
    let trimmed = body.trim_start();
    DIRECTIVE_PREFIXES.iter().find_map(|prefix| {
        let rest = trimmed.get(..prefix.len())?;
        if !rest.eq_ignore_ascii_case(prefix) {
            return None;
        }
        let after = &trimmed[prefix.len()..];
        after
            .starts_with(is_space)
            .then(|| after.trim())
            .filter(|d| !d.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Tokenizer::new(src).map(|t| t.kind).collect()
    }

    fn first(src: &str) -> Token {
        Tokenizer::new(src).next_token()
    }

    #[test]
    fn punctuation_and_whitespace() {
        use TokenKind::*;
        assert_eq!(
            kinds("a > b  {}"),
            vec![Ident, Whitespace, Gt, Whitespace, Ident, Whitespace, LBrace, RBrace]
        );
        assert_eq!(kinds("[a|=b]"), vec![LBracket, Ident, AttrEq, Ident, RBracket]);
        assert_eq!(kinds("a||b~c"), vec![Ident, Combinator, Ident, Combinator, Ident]);
    }

    #[test]
    fn numbers_with_units() {
        let tok = first("12.5px");
        assert_eq!(tok.kind, TokenKind::Dimension);
        let n = tok.numeric().unwrap();
        assert_eq!(n.value, 12.5);
        assert_eq!(n.unit, "px");
        assert_eq!(n.category, UnitCategory::Length);
        assert!(!n.is_int);

        let tok = first("50%");
        assert_eq!(tok.kind, TokenKind::Percentage);
        assert_eq!(tok.numeric().unwrap().value, 50.0);

        let tok = first("0");
        let n = tok.numeric().unwrap();
        assert!(n.is_zero && n.is_int);

        let tok = first("-.5e2Deg");
        assert_eq!(tok.text, "-.5e2Deg");
        let n = tok.numeric().unwrap();
        assert_eq!(n.value, -50.0);
        assert_eq!(n.unit, "deg");
        assert_eq!(n.category, UnitCategory::Angle);

        assert_eq!(kinds("1e"), vec![TokenKind::Dimension]);
        assert_eq!(kinds("+3"), vec![TokenKind::Number]);
        assert_eq!(kinds("+ 3"), vec![TokenKind::Plus, TokenKind::Whitespace, TokenKind::Number]);
    }

    #[test]
    fn identifiers_and_functions() {
        let tok = first("-webkit-Box(");
        assert_eq!(tok.kind, TokenKind::Function);
        assert_eq!(tok.function_name(), Some("box"));
        assert_eq!(tok.name().unwrap().prefix(), "-webkit-");

        let tok = first("--main-color");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert!(tok.flags.custom_property);

        let tok = first("\\31 a");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.name().unwrap().lower, "1a");

        assert_eq!(kinds("-->"), vec![TokenKind::Cdco]);
        assert_eq!(kinds("<!--"), vec![TokenKind::Cdco]);
        assert_eq!(kinds("- x"), vec![TokenKind::Minus, TokenKind::Whitespace, TokenKind::Ident]);
    }

    #[test]
    fn urls() {
        let tok = first("url( \"a b.png\" )");
        assert_eq!(tok.kind, TokenKind::Uri);
        assert_eq!(tok.string_value(), Some("a b.png"));

        let tok = first("url(img/x\\).png)");
        assert_eq!(tok.kind, TokenKind::Uri);
        assert_eq!(tok.string_value(), Some("img/x).png"));

        let tok = first("url-prefix(http://x)");
        assert_eq!(tok.kind, TokenKind::Uri);
        assert_eq!(tok.function_name(), Some("url-prefix"));

        // not a valid unquoted url: falls back to a function token
        let tok = first("url(a b)");
        assert_eq!(tok.kind, TokenKind::Function);
        assert_eq!(tok.text, "url(");
    }

    #[test]
    fn strings() {
        let tok = first("'it\\'s \\41'");
        assert_eq!(tok.kind, TokenKind::Str);
        assert_eq!(tok.string_value(), Some("it's A"));

        let tok = first("\"a\\\nb\"");
        assert_eq!(tok.string_value(), Some("ab"));

        let toks: Vec<_> = Tokenizer::new("\"abc\nx").collect();
        assert_eq!(toks[0].kind, TokenKind::Invalid);
        assert_eq!(toks[0].text, "\"abc");
        assert_eq!(toks[1].kind, TokenKind::Whitespace);
    }

    #[test]
    fn comments() {
        let tok = first("/*[[my-var]]*/");
        assert_eq!(tok.kind, TokenKind::UserVar);
        assert!(tok.is_var());

        let tok = first("/* csslint allow: box-model */");
        assert_eq!(tok.kind, TokenKind::Comment);
        assert_eq!(
            tok.payload,
            Payload::Comment(CommentKind::Directive("allow: box-model".into()))
        );

        let tok = first("/* plain");
        assert_eq!(tok.kind, TokenKind::Comment);
        assert_eq!(tok.text, "/* plain");
    }

    #[test]
    fn important_tolerates_comments() {
        assert_eq!(first("! /* x */ IMPORTANT").kind, TokenKind::Important);
        assert_eq!(first("!important").kind, TokenKind::Important);
        assert_eq!(kinds("!importantly"), vec![TokenKind::Delim, TokenKind::Ident]);
        assert_eq!(kinds("! x"), vec![TokenKind::Delim, TokenKind::Whitespace, TokenKind::Ident]);
    }

    #[test]
    fn at_keywords() {
        let tok = first("@-moz-document");
        let at = tok.at_keyword().unwrap();
        assert_eq!(at.rule, AtRule::Document);
        assert_eq!(at.name.prefix(), "-moz-");

        let tok = first("@Media");
        assert_eq!(tok.at_keyword().unwrap().rule, AtRule::Media);

        let tok = first("@tailwind");
        assert_eq!(tok.at_keyword().unwrap().rule, AtRule::Unknown);

        assert_eq!(kinds("@ x"), vec![TokenKind::Char, TokenKind::Whitespace, TokenKind::Ident]);
    }

    #[test]
    fn hashes_stars_and_ranges() {
        let tok = first("#fff");
        assert_eq!(tok.kind, TokenKind::Hash);
        assert_eq!(tok.name().unwrap().lower, "fff");
        assert_eq!(kinds("# "), vec![TokenKind::Char, TokenKind::Whitespace]);

        assert!(first("*zoom").flags.star_hack);
        assert!(!first("* a").flags.star_hack);

        assert_eq!(first("U+0025-00FF").kind, TokenKind::UnicodeRange);
        assert_eq!(first("u+4??").kind, TokenKind::UnicodeRange);
        assert_eq!(first("U+0025-00FF").text, "U+0025-00FF");
        assert_eq!(kinds("u+x"), vec![TokenKind::Ident, TokenKind::Plus, TokenKind::Ident]);
    }

    #[test]
    fn ie_filters() {
        let tok = first("progid:DXImageTransform.Microsoft.gradient(");
        assert_eq!(tok.kind, TokenKind::Function);
        assert!(tok.flags.ie);
        assert_eq!(
            tok.name().unwrap().lower,
            "progid:dximagetransform.microsoft.gradient"
        );
    }

    #[test]
    fn positions_are_absolute() {
        let toks: Vec<_> = Tokenizer::new("a\n  b").collect();
        assert_eq!(toks[2].pos, Position::new(2, 3, 4));
        assert_eq!(toks[2].end, 5);
    }

    #[test]
    fn round_trip() {
        let src = "@media screen{a:hover>b::before{color:#F00!important;/*c*/x:url( y )}}\r\n\
                   .x{margin:-1.5e3px 0 +.5em;content:\"\\\"q\";grid:1fr/2fr}\t@x;<!-- -->";
        let text: String = Tokenizer::new(src).map(|t| t.text).collect();
        assert_eq!(text, src);
    }

    #[test]
    fn counts_scanned_tokens() {
        let mut tz = Tokenizer::new("a b");
        while tz.next().is_some() {}
        assert_eq!(tz.tokens_scanned(), 4);
    }
}
