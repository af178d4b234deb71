//! Selector type definitions.

use std::fmt;

use super::Specificity;
use crate::reader::Position;
use crate::tokenizer::Nth;
use crate::values::PropertyValue;

/// A complex selector (e.g. `ul > li.item:hover`).
///
/// Compound selectors alternate with combinators. A relative selector
/// inside a nested rule starts with a combinator.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub parts: Vec<SelectorPart>,
    /// Source text.
    pub text: String,
    pub pos: Position,
}

impl Selector {
    /// The compound selectors, left to right.
    pub fn compounds(&self) -> impl Iterator<Item = &SimpleSelector> {
        self.parts.iter().filter_map(|part| match part {
            SelectorPart::Simple(simple) => Some(simple),
            SelectorPart::Combinator(_) => None,
        })
    }

    /// The combinators, left to right.
    pub fn combinators(&self) -> impl Iterator<Item = &Combinator> {
        self.parts.iter().filter_map(|part| match part {
            SelectorPart::Combinator(combinator) => Some(combinator),
            SelectorPart::Simple(_) => None,
        })
    }

    /// Whether the selector starts with a combinator.
    pub fn is_relative(&self) -> bool {
        matches!(self.parts.first(), Some(SelectorPart::Combinator(_)))
    }

    /// The rightmost compound selector.
    pub fn subject(&self) -> Option<&SimpleSelector> {
        self.compounds().last()
    }

    pub fn specificity(&self) -> Specificity {
        Specificity::of_selector(self)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectorPart {
    Simple(SimpleSelector),
    Combinator(Combinator),
}

/// A compound selector (e.g. `svg|a.link[href]:hover`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleSelector {
    /// Namespace prefix: `""` for `|a`, `"*"` for `*|a`.
    pub namespace: Option<String>,
    /// Element name or `*`.
    pub element: Option<String>,
    pub modifiers: Vec<Modifier>,
    /// Source text.
    pub text: String,
    pub pos: Position,
}

impl SimpleSelector {
    /// Whether the element part is `*` or missing.
    pub fn is_universal(&self) -> bool {
        self.element.as_deref().is_none_or(|e| e == "*")
    }

    /// Modifiers of one kind.
    pub fn modifiers_of(&self, kind: ModifierKind) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter().filter(move |m| m.kind == kind)
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Relationship between two compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinatorKind {
    /// Whitespace.
    Descendant,
    /// `>`
    Child,
    /// `+`
    AdjacentSibling,
    /// `~`
    GeneralSibling,
    /// `||`
    Column,
}

impl CombinatorKind {
    /// Classify combinator text; whitespace-only text is a descendant.
    pub fn from_text(text: &str) -> Option<Self> {
        match text.trim() {
            "" => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::AdjacentSibling),
            "~" => Some(Self::GeneralSibling),
            "||" => Some(Self::Column),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::AdjacentSibling => "+",
            Self::GeneralSibling => "~",
            Self::Column => "||",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Combinator {
    pub kind: CombinatorKind,
    pub pos: Position,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())
    }
}

/// What a [`Modifier`] selects on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// `.name`
    Class,
    /// `#name`
    Id,
    /// `[attr]`, `[attr=value i]`
    Attribute,
    /// `:name` or `:name(...)`
    Pseudo,
    /// `::name`
    PseudoElement,
    /// `:not(...)`
    Not,
    /// `&` nesting selector.
    Amp,
}

/// A class, id, attribute or pseudo part of a compound selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub kind: ModifierKind,
    /// Source text including the leading `.`, `#`, `[` or colons.
    pub text: String,
    pub args: ModifierArgs,
    pub pos: Position,
}

impl Modifier {
    /// Lower-case name without punctuation: `hover` for `:hover`,
    /// `nth-child` for `:nth-child(2n)`, `href` for `[href]`.
    pub fn name(&self) -> String {
        if let ModifierArgs::Attribute(attr) = &self.args {
            return attr.name.to_lowercase();
        }
        let text = self.text.trim_start_matches(['.', '#', ':']);
        let end = text.find('(').unwrap_or(text.len());
        match self.kind {
            ModifierKind::Class | ModifierKind::Id => text.to_string(),
            _ => text[..end].to_ascii_lowercase(),
        }
    }

    /// Whether the modifier is a pseudo-element, including the legacy
    /// single-colon `:before`, `:after`, `:first-line` and `:first-letter`.
    pub fn is_pseudo_element(&self) -> bool {
        self.kind == ModifierKind::PseudoElement
            || self.kind == ModifierKind::Pseudo
                && matches!(
                    self.name().as_str(),
                    "before" | "after" | "first-line" | "first-letter"
                )
    }

    /// Nested selectors of `:not()`, `:is()`, `:where()`, `:has()` and
    /// `:nth-child(... of S)`.
    pub fn selectors(&self) -> &[Selector] {
        match &self.args {
            ModifierArgs::Selectors(list) | ModifierArgs::Nth { of: list, .. } => list,
            _ => &[],
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Arguments of a modifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModifierArgs {
    #[default]
    None,
    /// Selector list of `:not()`, `:is()`, `:where()`, `:any()` and `:has()`.
    Selectors(Vec<Selector>),
    /// `:nth-child(an+b)` or `:nth-last-child(an+b of S)`.
    Nth { nth: Nth, of: Vec<Selector> },
    /// Arguments of any other functional pseudo-class, unvalidated.
    Value(Option<PropertyValue>),
    Attribute(Attribute),
}

/// The inside of an attribute selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attribute {
    /// Namespace prefix: `""` for `[|a]`, `"*"` for `[*|a]`.
    pub namespace: Option<String>,
    pub name: String,
    /// `=`, `~=`, `|=`, `^=`, `$=` or `*=`.
    pub operator: Option<String>,
    /// The compared value as written (quotes included).
    pub value: Option<String>,
    /// Case-sensitivity flag `i` or `s`.
    pub flag: Option<char>,
}
