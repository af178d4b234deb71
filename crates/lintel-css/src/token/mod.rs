//! Tokens produced by the tokenizer.
//!
//! A [`Token`] keeps the raw source text it was scanned from, its absolute
//! position and a kind-specific [`Payload`]. Concatenating the text of every
//! token of an input reproduces that input exactly.

mod units;

use std::borrow::Cow;
use std::fmt;

use crate::reader::Position;

pub use units::UnitCategory;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// `&` (nesting selector).
    Amp,
    /// `@name`.
    At,
    /// `|=`, `~=`, `^=`, `*=`, `$=`.
    AttrEq,
    /// `<!--` or `-->`.
    Cdco,
    /// Any character without a dedicated kind.
    Char,
    /// `:`.
    Colon,
    /// `~` or `||`.
    Combinator,
    /// `,`.
    Comma,
    /// `/* ... */`.
    Comment,
    /// `!` not followed by `important`.
    Delim,
    /// `.`.
    Dot,
    /// `=`.
    Equals,
    /// `<=` or `>=`.
    EqCmp,
    /// `name(`.
    Function,
    /// `>`.
    Gt,
    /// `#name`.
    Hash,
    /// An identifier.
    Ident,
    /// `!important`, possibly with whitespace or comments after the `!`.
    Important,
    /// Unterminated string or other malformed input.
    Invalid,
    /// `{`.
    LBrace,
    /// `[`.
    LBracket,
    /// `(`.
    LParen,
    /// `-`.
    Minus,
    /// `|`.
    Pipe,
    /// `+`.
    Plus,
    /// `}`.
    RBrace,
    /// `]`.
    RBracket,
    /// `)`.
    RParen,
    /// `;`.
    Semicolon,
    /// `*`.
    Star,
    /// A quoted string.
    Str,
    /// `U+0-7F`.
    UnicodeRange,
    /// `url(...)` with its contents.
    Uri,
    /// Embedded variable comment `/*[[name]]*/`.
    UserVar,
    /// Coalesced whitespace.
    Whitespace,
    /// A unitless number.
    Number,
    /// A number followed by `%`.
    Percentage,
    /// A number followed by a unit.
    Dimension,
}

impl TokenKind {
    /// Literal text of punctuation kinds.
    pub fn literal(self) -> Option<&'static str> {
        Some(match self {
            Self::Amp => "&",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Delim => "!",
            Self::Dot => ".",
            Self::Equals => "=",
            Self::Gt => ">",
            Self::Hash => "#",
            Self::LBrace => "{",
            Self::LBracket => "[",
            Self::LParen => "(",
            Self::Minus => "-",
            Self::Pipe => "|",
            Self::Plus => "+",
            Self::RBrace => "}",
            Self::RBracket => "]",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Star => "*",
            _ => return None,
        })
    }

    /// Description used in "Expected ..." messages.
    pub fn describe(self) -> Cow<'static, str> {
        if let Some(lit) = self.literal() {
            return Cow::Owned(format!("\"{lit}\""));
        }
        Cow::Borrowed(match self {
            Self::Eof => "end of input",
            Self::At => "<at-keyword>",
            Self::AttrEq => "\"|=\", \"~=\", \"^=\", \"*=\", \"$=\"",
            Self::Combinator => "\"~\", \"||\"",
            Self::EqCmp => "\">=\", \"<=\"",
            Self::Function => "<function>",
            Self::Ident => "<ident>",
            Self::Important => "\"!important\"",
            Self::Str => "<string>",
            Self::UnicodeRange => "<unicode-range>",
            Self::Uri => "<url>",
            Self::Number => "<number>",
            Self::Percentage => "<percentage>",
            Self::Dimension => "<dimension>",
            Self::Whitespace => "whitespace",
            _ => "token",
        })
    }

    /// Whether the kind is one of the numeric kinds.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Percentage | Self::Dimension)
    }
}

/// Known at-rules, looked up by the lower-case name without vendor prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtRule {
    Charset,
    Container,
    CounterStyle,
    Document,
    FontFace,
    FontPaletteValues,
    Import,
    Keyframes,
    Layer,
    Media,
    Namespace,
    Page,
    /// A page-margin box such as `@top-left`.
    PageMargin,
    Property,
    Scope,
    Supports,
    Viewport,
    /// Syntactically an at-rule, but not one the parser knows.
    Unknown,
}

impl AtRule {
    /// Classify an unprefixed lower-case at-rule name.
    pub fn lookup(name: &str) -> Self {
        match name {
            "charset" => Self::Charset,
            "container" => Self::Container,
            "counter-style" => Self::CounterStyle,
            "document" => Self::Document,
            "font-face" => Self::FontFace,
            "font-palette-values" => Self::FontPaletteValues,
            "import" => Self::Import,
            "keyframes" => Self::Keyframes,
            "layer" => Self::Layer,
            "media" => Self::Media,
            "namespace" => Self::Namespace,
            "page" => Self::Page,
            "property" => Self::Property,
            "scope" => Self::Scope,
            "supports" => Self::Supports,
            "viewport" => Self::Viewport,
            _ if MARGIN_BOXES.contains(&name) => Self::PageMargin,
            _ => Self::Unknown,
        }
    }
}

/// Page-margin at-rules allowed inside `@page`.
pub const MARGIN_BOXES: &[&str] = &[
    "bottom-center",
    "bottom-left-corner",
    "bottom-left",
    "bottom-right-corner",
    "bottom-right",
    "left-bottom",
    "left-middle",
    "left-top",
    "right-bottom",
    "right-middle",
    "right-top",
    "top-center",
    "top-left-corner",
    "top-left",
    "top-right-corner",
    "top-right",
];

/// Numeric payload of numbers, percentages and dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Numeric {
    /// Parsed value.
    pub value: f64,
    /// Lower-case unit, `%` for percentages, empty for plain numbers.
    pub unit: String,
    /// Unit category.
    pub category: UnitCategory,
    /// Unitless integer.
    pub is_int: bool,
    /// Unitless zero.
    pub is_zero: bool,
}

/// A lower-case, unescaped name with an optional vendor prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    /// Full lower-case name including the vendor prefix.
    pub lower: String,
    /// Byte length of the vendor prefix (`5` for `-moz-foo`), zero if none.
    pub vendor_pos: usize,
}

impl Name {
    /// Build a name, detecting a `-vendor-` prefix.
    pub fn new(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        let vendor_pos = vendor_prefix_len(&lower);
        Self { lower, vendor_pos }
    }

    /// The name without its vendor prefix.
    pub fn unprefixed(&self) -> &str {
        &self.lower[self.vendor_pos..]
    }

    /// The vendor prefix, e.g. `-webkit-`.
    pub fn prefix(&self) -> &str {
        &self.lower[..self.vendor_pos]
    }
}

/// Length of a `-vendor-` prefix of `name`, zero when there is none.
///
/// Custom property names (`--x`) have no vendor prefix.
pub fn vendor_prefix_len(name: &str) -> usize {
    if !name.starts_with('-') || name.starts_with("--") {
        return 0;
    }
    match name[1..].find('-') {
        Some(idx) if idx > 0 => idx + 2,
        _ => 0,
    }
}

/// Parsed at-keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtKeyword {
    /// Rule kind.
    pub rule: AtRule,
    /// Name without `@`.
    pub name: Name,
}

/// Classification of a comment token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentKind {
    /// An ordinary comment.
    Plain,
    /// `/* lintel ... */` or `/* csslint ... */` with the directive body.
    Directive(String),
    /// `/*[[name]]*/` with the variable name.
    Variable(String),
}

/// Kind-specific token data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// No additional data.
    #[default]
    None,
    /// Number, percentage or dimension.
    Numeric(Numeric),
    /// Identifier, function, hash or unicode-range name.
    Name(Name),
    /// Decoded contents of a string or a URI.
    Str(String),
    /// Function-like URI: decoded contents plus the function name.
    Uri { name: Name, value: String },
    /// At-keyword.
    At(AtKeyword),
    /// Comment classification.
    Comment(CommentKind),
}

/// Boolean token attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenFlags {
    /// `*` immediately followed by an identifier (IE property hack).
    pub star_hack: bool,
    /// `--name` custom property identifier.
    pub custom_property: bool,
    /// IE `progid:...(` filter function.
    pub ie: bool,
    /// Embedded `/*[[name]]*/` variable.
    pub is_var: bool,
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Raw source text.
    pub text: String,
    /// Position of the first character.
    pub pos: Position,
    /// Byte offset just past the last character.
    pub end: usize,
    /// Kind-specific data.
    pub payload: Payload,
    /// Boolean attributes.
    pub flags: TokenFlags,
}

impl Token {
    /// Create a token without payload.
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        let text = text.into();
        let end = pos.offset + text.len();
        Self {
            kind,
            text,
            pos,
            end,
            payload: Payload::None,
            flags: TokenFlags::default(),
        }
    }

    /// An end-of-input token at `pos`.
    pub fn eof(pos: Position) -> Self {
        Self::new(TokenKind::Eof, "", pos)
    }

    /// Whether this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Whether the token is an embedded variable.
    pub fn is_var(&self) -> bool {
        self.flags.is_var
    }

    /// Numeric payload, if any.
    pub fn numeric(&self) -> Option<&Numeric> {
        match &self.payload {
            Payload::Numeric(n) => Some(n),
            _ => None,
        }
    }

    /// Name payload of identifiers, functions, hashes and at-keywords.
    pub fn name(&self) -> Option<&Name> {
        match &self.payload {
            Payload::Name(name) | Payload::Uri { name, .. } => Some(name),
            Payload::At(at) => Some(&at.name),
            _ => None,
        }
    }

    /// Lower-case function name without vendor prefix.
    pub fn function_name(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Function | TokenKind::Uri => self.name().map(Name::unprefixed),
            _ => None,
        }
    }

    /// Decoded contents of strings and URIs.
    pub fn string_value(&self) -> Option<&str> {
        match &self.payload {
            Payload::Str(value) | Payload::Uri { value, .. } => Some(value),
            _ => None,
        }
    }

    /// At-keyword payload.
    pub fn at_keyword(&self) -> Option<&AtKeyword> {
        match &self.payload {
            Payload::At(at) => Some(at),
            _ => None,
        }
    }

    /// Lower-case source text.
    pub fn lower(&self) -> Cow<'_, str> {
        if self.text.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(self.text.to_ascii_lowercase())
        } else {
            Cow::Borrowed(&self.text)
        }
    }

    /// ASCII case-insensitive comparison of the source text.
    pub fn is(&self, text: &str) -> bool {
        self.text.eq_ignore_ascii_case(text)
    }

    /// Whether the token is an identifier equal to one of `words`.
    pub fn is_ident_in(&self, words: &[&str]) -> bool {
        self.kind == TokenKind::Ident && words.iter().any(|w| self.is(w))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_prefixes() {
        assert_eq!(vendor_prefix_len("-moz-foo"), 5);
        assert_eq!(vendor_prefix_len("-webkit-box-shadow"), 8);
        assert_eq!(vendor_prefix_len("--custom"), 0);
        assert_eq!(vendor_prefix_len("-x"), 0);
        assert_eq!(vendor_prefix_len("color"), 0);
        let name = Name::new("-MS-Viewport");
        assert_eq!(name.prefix(), "-ms-");
        assert_eq!(name.unprefixed(), "viewport");
    }

    #[test]
    fn at_rule_lookup() {
        assert_eq!(AtRule::lookup("media"), AtRule::Media);
        assert_eq!(AtRule::lookup("top-left-corner"), AtRule::PageMargin);
        assert_eq!(AtRule::lookup("tailwind"), AtRule::Unknown);
    }

    #[test]
    fn describe_kinds() {
        assert_eq!(TokenKind::LBrace.describe(), "\"{\"");
        assert_eq!(TokenKind::Ident.describe(), "<ident>");
    }

    #[test]
    fn token_end_and_case() {
        let tok = Token::new(TokenKind::Ident, "Red", Position::new(1, 5, 4));
        assert_eq!(tok.end, 7);
        assert!(tok.is("red"));
        assert_eq!(tok.lower(), "red");
        assert!(tok.is_ident_in(&["blue", "RED"]));
    }
}
