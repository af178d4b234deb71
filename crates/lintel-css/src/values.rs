//! Parsed property values.
//!
//! A [`PropertyValue`] is the flat list of significant parts of a
//! declaration value, whitespace removed. Functions and `(...)`/`{...}`
//! blocks carry their contents as a nested value.

use std::fmt;

use cssparser::color::{parse_hash_color, parse_named_color};

use crate::reader::Position;
use crate::token::{Token, TokenKind};

/// Functions that compute a numeric value.
const CALC_FUNCTIONS: &[&str] = &[
    "calc", "clamp", "min", "max", "sin", "cos", "tan", "asin", "acos", "atan", "atan2",
];

/// Classification of a value part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Named or hex color.
    Color,
    Ident,
    Number,
    Percentage,
    Dimension,
    Str,
    Uri,
    Function,
    /// `(...)` or `{...}`.
    Block,
    /// `,`, `/`, `+`, `-`, `*`, `=` and friends.
    Operator,
    /// `--name`.
    CustomProperty,
    /// Embedded `/*[[name]]*/` variable.
    VarRef,
    UnicodeRange,
    /// `#name` that is not a valid hex color.
    Hash,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PartFlags {
    calc: bool,
    var: bool,
    attr: bool,
    none: bool,
}

/// One part of a property value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuePart {
    pub kind: PartKind,
    /// The part's first token (the function name token for functions).
    pub token: Token,
    /// Arguments of a function or contents of a block.
    pub args: Option<PropertyValue>,
    /// Byte offset just past the part, closing parenthesis included.
    pub end: usize,
    flags: PartFlags,
}

impl ValuePart {
    /// A part made of a single token.
    ///
    /// With `classify` set, identifiers naming colors and valid `#hex`
    /// tokens become [`PartKind::Color`].
    pub fn new(token: Token, classify: bool) -> Self {
        let kind = match token.kind {
            TokenKind::Ident if token.flags.custom_property => PartKind::CustomProperty,
            TokenKind::Ident if classify && is_color_name(&token.lower()) => PartKind::Color,
            TokenKind::Ident => PartKind::Ident,
            TokenKind::Hash if classify && is_hex_color(&token.text) => PartKind::Color,
            TokenKind::Hash => PartKind::Hash,
            TokenKind::Number => PartKind::Number,
            TokenKind::Percentage => PartKind::Percentage,
            TokenKind::Dimension => PartKind::Dimension,
            TokenKind::Str => PartKind::Str,
            TokenKind::Uri => PartKind::Uri,
            TokenKind::UnicodeRange => PartKind::UnicodeRange,
            TokenKind::UserVar => PartKind::VarRef,
            TokenKind::Function => PartKind::Function,
            TokenKind::Comma
            | TokenKind::Char
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Equals
            | TokenKind::EqCmp
            | TokenKind::Gt
            | TokenKind::Colon => PartKind::Operator,
            _ => PartKind::Other,
        };
        let flags = PartFlags {
            var: token.is_var(),
            none: token.kind == TokenKind::Ident && token.is("none"),
            ..PartFlags::default()
        };
        let end = token.end;
        Self {
            kind,
            token,
            args: None,
            end,
            flags,
        }
    }

    /// A function part. `end` is the offset past its closing parenthesis.
    pub fn function(token: Token, args: Option<PropertyValue>, end: usize) -> Self {
        let mut flags = PartFlags::default();
        if let Some(args) = &args {
            let name = token.function_name().unwrap_or_default();
            if CALC_FUNCTIONS.contains(&name) {
                flags.calc = true;
            } else if name == "var" || name == "env" {
                flags.var = true;
            } else if name == "attr"
                && args
                    .parts
                    .first()
                    .is_some_and(|p| matches!(p.token.kind, TokenKind::Ident | TokenKind::UserVar))
            {
                flags.attr = true;
            }
        }
        Self {
            kind: PartKind::Function,
            token,
            args,
            end,
            flags,
        }
    }

    /// A `(...)` or `{...}` block part.
    pub fn block(token: Token, args: Option<PropertyValue>, end: usize) -> Self {
        Self {
            kind: PartKind::Block,
            token,
            args,
            end,
            flags: PartFlags::default(),
        }
    }

    /// Position of the first character.
    pub fn pos(&self) -> Position {
        self.token.pos
    }

    /// `calc()` and the other math functions, with arguments.
    pub fn is_calc(&self) -> bool {
        self.flags.calc
    }

    /// `var()`, `env()` or an embedded variable.
    pub fn is_var(&self) -> bool {
        self.flags.var
    }

    /// `attr()` referencing an attribute.
    pub fn is_attr(&self) -> bool {
        self.flags.attr
    }

    /// The identifier `none`.
    pub fn is_none(&self) -> bool {
        self.flags.none
    }

    /// Unitless zero.
    pub fn is_zero(&self) -> bool {
        self.token.numeric().is_some_and(|n| n.is_zero)
    }

    /// Unitless integer.
    pub fn is_int(&self) -> bool {
        self.token.numeric().is_some_and(|n| n.is_int)
    }

    /// Numeric value of numbers, percentages and dimensions.
    pub fn number(&self) -> Option<f64> {
        self.token.numeric().map(|n| n.value)
    }

    /// Lower-case function name without vendor prefix.
    pub fn function_name(&self) -> Option<&str> {
        self.token.function_name()
    }

    /// Lower-case function name including the vendor prefix.
    pub fn prefixed_function_name(&self) -> Option<&str> {
        match self.token.kind {
            TokenKind::Function | TokenKind::Uri => self.token.name().map(|n| n.lower.as_str()),
            _ => None,
        }
    }

    /// Source text of the whole part, arguments included.
    pub fn source_text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.token.pos.offset..self.end).unwrap_or_default()
    }
}

impl fmt::Display for ValuePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.text)?;
        match &self.args {
            Some(args) if self.kind == PartKind::Function => write!(f, "{args})"),
            Some(args) => {
                let close = match self.token.kind {
                    TokenKind::LBrace => "}",
                    TokenKind::LBracket => "]",
                    _ => ")",
                };
                write!(f, "{args}{close}")
            }
            None if self.kind == PartKind::Function => f.write_str(")"),
            None => Ok(()),
        }
    }
}

/// A declaration value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    pub parts: Vec<ValuePart>,
    /// Source text from the first part to the end of the last one.
    pub text: String,
    pub pos: Position,
    pub end: usize,
    /// A top-level part is a variable reference.
    pub is_var: bool,
}

impl PropertyValue {
    /// Build a value from its parts; `source` is the whole input.
    ///
    /// `parts` must not be empty; use [`PropertyValue::empty`] instead.
    pub fn new(parts: Vec<ValuePart>, source: &str) -> Self {
        let pos = parts.first().map(ValuePart::pos).unwrap_or_default();
        let end = parts.last().map_or(pos.offset, |p| p.end);
        let text = source.get(pos.offset..end).unwrap_or_default().to_string();
        let is_var = parts.iter().any(ValuePart::is_var);
        Self {
            parts,
            text,
            pos,
            end,
            is_var,
        }
    }

    /// A value without parts (e.g. `--x:;`), located at `pos`.
    pub fn empty(pos: Position) -> Self {
        Self {
            parts: Vec::new(),
            text: String::new(),
            pos,
            end: pos.offset,
            is_var: false,
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValuePart> {
        self.parts.iter()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<'a> IntoIterator for &'a PropertyValue {
    type Item = &'a ValuePart;
    type IntoIter = std::slice::Iter<'a, ValuePart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

/// `#` followed by 3, 4, 6 or 8 hex digits.
pub fn is_hex_color(text: &str) -> bool {
    text.strip_prefix('#')
        .is_some_and(|hex| parse_hash_color(hex.as_bytes()).is_ok())
}

/// A named color keyword, `transparent` or `currentcolor`.
pub fn is_color_name(lower: &str) -> bool {
    matches!(lower, "transparent" | "currentcolor") || parse_named_color(lower).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;

    fn part(src: &str) -> ValuePart {
        ValuePart::new(Tokenizer::new(src).next_token(), true)
    }

    #[test]
    fn classifies_colors() {
        assert_eq!(part("red").kind, PartKind::Color);
        assert_eq!(part("CurrentColor").kind, PartKind::Color);
        assert_eq!(part("redish").kind, PartKind::Ident);
        assert_eq!(part("#fff").kind, PartKind::Color);
        assert_eq!(part("#ffff0000").kind, PartKind::Color);
        assert_eq!(part("#ff").kind, PartKind::Hash);
        assert_eq!(part("#ggg").kind, PartKind::Hash);
        let raw = ValuePart::new(Tokenizer::new("red").next_token(), false);
        assert_eq!(raw.kind, PartKind::Ident);
    }

    #[test]
    fn numeric_helpers() {
        let p = part("0");
        assert!(p.is_zero() && p.is_int());
        assert_eq!(part("1.5em").number(), Some(1.5));
        assert!(!part("0px").is_zero());
        assert!(part("none").is_none());
        assert_eq!(part("--x").kind, PartKind::CustomProperty);
        assert_eq!(part(",").kind, PartKind::Operator);
        assert_eq!(part("/").kind, PartKind::Operator);
    }

    #[test]
    fn function_flags() {
        let src = "calc(1px)";
        let mut tz = Tokenizer::new(src);
        let name = tz.next_token();
        let arg = part("1px");
        let args = PropertyValue::new(vec![arg], "1px");
        let calc = ValuePart::function(name.clone(), Some(args.clone()), src.len());
        assert!(calc.is_calc());
        assert!(!ValuePart::function(name, None, 5).is_calc());

        let var = ValuePart::function(Tokenizer::new("var(").next_token(), Some(args), 10);
        assert!(var.is_var());
    }
}
