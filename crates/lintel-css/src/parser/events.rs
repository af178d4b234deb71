//! Parse events.
//!
//! The parser reports a stylesheet as a flat sequence of [`Event`]s. Blocks
//! open with a `Start*` event and close with the matching `End*` event,
//! which repeats the start's data and tells whether the block was empty.

use std::fmt;

use crate::cache::{Delta, ShiftPositions};
use crate::error::Error;
use crate::media::{MediaQuery, list_to_string};
use crate::properties::Scope;
use crate::reader::Position;
use crate::selector::Selector;
use crate::token::Token;
use crate::values::{PropertyValue, ValuePart};

/// One parse event at a source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub pos: Position,
    pub kind: EventKind,
}

impl Event {
    pub fn new(pos: Position, kind: EventKind) -> Self {
        Self { pos, kind }
    }

    /// Fieldless discriminant used to subscribe to events.
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Move every position owned by the event by `delta`.
    pub fn shift(&mut self, delta: &Delta) {
        self.shift_positions(delta);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.kind.name())?;
        if let Some(summary) = self.kind.summary() {
            write!(f, " {summary}")?;
        }
        Ok(())
    }
}

/// A declaration `name: value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Property name as written, without a hack prefix.
    pub name: String,
    /// Position of the name, hack prefix included.
    pub name_pos: Position,
    /// `*` or `_` IE hack prefix.
    pub hack: Option<char>,
    pub value: PropertyValue,
    pub important: bool,
    /// Declared inside a `@supports`/`@container` condition.
    pub in_parens: bool,
    /// Validation failure, if any.
    pub invalid: Option<Error>,
    pub scope: Scope,
}

impl Declaration {
    /// Lower-case property name.
    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether the name is a `--custom` property.
    pub fn is_custom(&self) -> bool {
        self.name.starts_with("--")
    }
}

/// Everything the parser reports.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    StartStylesheet,
    EndStylesheet,
    Charset {
        charset: String,
    },
    Import {
        uri: String,
        media: Vec<MediaQuery>,
        /// `Some("")` for an anonymous `layer`.
        layer: Option<String>,
    },
    Namespace {
        prefix: Option<String>,
        uri: String,
    },
    StartRule {
        selectors: Vec<Selector>,
    },
    EndRule {
        selectors: Vec<Selector>,
        empty: bool,
    },
    Property(Box<Declaration>),
    StartMedia {
        media: Vec<MediaQuery>,
    },
    EndMedia {
        media: Vec<MediaQuery>,
        empty: bool,
    },
    StartSupports,
    EndSupports {
        empty: bool,
    },
    SupportsSelector {
        selector: Selector,
    },
    StartDocument {
        functions: Vec<ValuePart>,
    },
    EndDocument {
        functions: Vec<ValuePart>,
        empty: bool,
    },
    StartPage {
        id: Option<String>,
        pseudo: Option<String>,
    },
    EndPage {
        id: Option<String>,
        pseudo: Option<String>,
        empty: bool,
    },
    StartPageMargin {
        margin: String,
    },
    EndPageMargin {
        margin: String,
        empty: bool,
    },
    StartFontFace,
    EndFontFace {
        empty: bool,
    },
    StartFontPaletteValues {
        id: String,
    },
    EndFontPaletteValues {
        id: String,
        empty: bool,
    },
    StartViewport {
        prefix: String,
    },
    EndViewport {
        prefix: String,
        empty: bool,
    },
    StartKeyframes {
        name: String,
        prefix: String,
    },
    EndKeyframes {
        name: String,
        prefix: String,
        empty: bool,
    },
    StartKeyframeRule {
        keys: Vec<Token>,
    },
    EndKeyframeRule {
        keys: Vec<Token>,
        empty: bool,
    },
    StartContainer {
        name: Option<String>,
    },
    EndContainer {
        name: Option<String>,
        empty: bool,
    },
    StartLayer {
        id: Option<String>,
    },
    EndLayer {
        id: Option<String>,
        empty: bool,
    },
    /// `@layer a, b;`
    Layer {
        ids: Vec<String>,
    },
    StartScope {
        start: Option<Vec<Selector>>,
        end: Option<Vec<Selector>>,
    },
    EndScope {
        start: Option<Vec<Selector>>,
        end: Option<Vec<Selector>>,
        empty: bool,
    },
    StartProperty {
        name: String,
    },
    EndProperty {
        name: String,
        empty: bool,
    },
    StartCounterStyle {
        name: String,
    },
    EndCounterStyle {
        name: String,
        empty: bool,
    },
    Error {
        message: String,
        /// False when the error was reported at end of input.
        recoverable: bool,
    },
    Warning {
        message: String,
    },
    Info {
        message: String,
    },
}

/// Event discriminant for subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    StartStylesheet,
    EndStylesheet,
    Charset,
    Import,
    Namespace,
    StartRule,
    EndRule,
    Property,
    StartMedia,
    EndMedia,
    StartSupports,
    EndSupports,
    SupportsSelector,
    StartDocument,
    EndDocument,
    StartPage,
    EndPage,
    StartPageMargin,
    EndPageMargin,
    StartFontFace,
    EndFontFace,
    StartFontPaletteValues,
    EndFontPaletteValues,
    StartViewport,
    EndViewport,
    StartKeyframes,
    EndKeyframes,
    StartKeyframeRule,
    EndKeyframeRule,
    StartContainer,
    EndContainer,
    StartLayer,
    EndLayer,
    Layer,
    StartScope,
    EndScope,
    StartProperty,
    EndProperty,
    StartCounterStyle,
    EndCounterStyle,
    Error,
    Warning,
    Info,
}

impl EventType {
    /// Kebab-case name, e.g. `start-rule`.
    pub fn name(self) -> &'static str {
        match self {
            Self::StartStylesheet => "start-stylesheet",
            Self::EndStylesheet => "end-stylesheet",
            Self::Charset => "charset",
            Self::Import => "import",
            Self::Namespace => "namespace",
            Self::StartRule => "start-rule",
            Self::EndRule => "end-rule",
            Self::Property => "property",
            Self::StartMedia => "start-media",
            Self::EndMedia => "end-media",
            Self::StartSupports => "start-supports",
            Self::EndSupports => "end-supports",
            Self::SupportsSelector => "supports-selector",
            Self::StartDocument => "start-document",
            Self::EndDocument => "end-document",
            Self::StartPage => "start-page",
            Self::EndPage => "end-page",
            Self::StartPageMargin => "start-page-margin",
            Self::EndPageMargin => "end-page-margin",
            Self::StartFontFace => "start-font-face",
            Self::EndFontFace => "end-font-face",
            Self::StartFontPaletteValues => "start-font-palette-values",
            Self::EndFontPaletteValues => "end-font-palette-values",
            Self::StartViewport => "start-viewport",
            Self::EndViewport => "end-viewport",
            Self::StartKeyframes => "start-keyframes",
            Self::EndKeyframes => "end-keyframes",
            Self::StartKeyframeRule => "start-keyframe-rule",
            Self::EndKeyframeRule => "end-keyframe-rule",
            Self::StartContainer => "start-container",
            Self::EndContainer => "end-container",
            Self::StartLayer => "start-layer",
            Self::EndLayer => "end-layer",
            Self::Layer => "layer",
            Self::StartScope => "start-scope",
            Self::EndScope => "end-scope",
            Self::StartProperty => "start-property",
            Self::EndProperty => "end-property",
            Self::StartCounterStyle => "start-counter-style",
            Self::EndCounterStyle => "end-counter-style",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::StartStylesheet => EventType::StartStylesheet,
            Self::EndStylesheet => EventType::EndStylesheet,
            Self::Charset { .. } => EventType::Charset,
            Self::Import { .. } => EventType::Import,
            Self::Namespace { .. } => EventType::Namespace,
            Self::StartRule { .. } => EventType::StartRule,
            Self::EndRule { .. } => EventType::EndRule,
            Self::Property(_) => EventType::Property,
            Self::StartMedia { .. } => EventType::StartMedia,
            Self::EndMedia { .. } => EventType::EndMedia,
            Self::StartSupports => EventType::StartSupports,
            Self::EndSupports { .. } => EventType::EndSupports,
            Self::SupportsSelector { .. } => EventType::SupportsSelector,
            Self::StartDocument { .. } => EventType::StartDocument,
            Self::EndDocument { .. } => EventType::EndDocument,
            Self::StartPage { .. } => EventType::StartPage,
            Self::EndPage { .. } => EventType::EndPage,
            Self::StartPageMargin { .. } => EventType::StartPageMargin,
            Self::EndPageMargin { .. } => EventType::EndPageMargin,
            Self::StartFontFace => EventType::StartFontFace,
            Self::EndFontFace { .. } => EventType::EndFontFace,
            Self::StartFontPaletteValues { .. } => EventType::StartFontPaletteValues,
            Self::EndFontPaletteValues { .. } => EventType::EndFontPaletteValues,
            Self::StartViewport { .. } => EventType::StartViewport,
            Self::EndViewport { .. } => EventType::EndViewport,
            Self::StartKeyframes { .. } => EventType::StartKeyframes,
            Self::EndKeyframes { .. } => EventType::EndKeyframes,
            Self::StartKeyframeRule { .. } => EventType::StartKeyframeRule,
            Self::EndKeyframeRule { .. } => EventType::EndKeyframeRule,
            Self::StartContainer { .. } => EventType::StartContainer,
            Self::EndContainer { .. } => EventType::EndContainer,
            Self::StartLayer { .. } => EventType::StartLayer,
            Self::EndLayer { .. } => EventType::EndLayer,
            Self::Layer { .. } => EventType::Layer,
            Self::StartScope { .. } => EventType::StartScope,
            Self::EndScope { .. } => EventType::EndScope,
            Self::StartProperty { .. } => EventType::StartProperty,
            Self::EndProperty { .. } => EventType::EndProperty,
            Self::StartCounterStyle { .. } => EventType::StartCounterStyle,
            Self::EndCounterStyle { .. } => EventType::EndCounterStyle,
            Self::Error { .. } => EventType::Error,
            Self::Warning { .. } => EventType::Warning,
            Self::Info { .. } => EventType::Info,
        }
    }

    pub fn name(&self) -> &'static str {
        self.event_type().name()
    }

    /// Opens a block.
    pub fn is_start(&self) -> bool {
        self.name().starts_with("start-")
    }

    /// Closes a block.
    pub fn is_end(&self) -> bool {
        self.name().starts_with("end-")
    }

    /// Error, warning or info.
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Error { .. } | Self::Warning { .. } | Self::Info { .. })
    }

    /// Whether an `End*` event closed an empty block.
    pub fn is_empty_block(&self) -> Option<bool> {
        match self {
            Self::EndRule { empty, .. }
            | Self::EndMedia { empty, .. }
            | Self::EndSupports { empty }
            | Self::EndDocument { empty, .. }
            | Self::EndPage { empty, .. }
            | Self::EndPageMargin { empty, .. }
            | Self::EndFontFace { empty }
            | Self::EndFontPaletteValues { empty, .. }
            | Self::EndViewport { empty, .. }
            | Self::EndKeyframes { empty, .. }
            | Self::EndKeyframeRule { empty, .. }
            | Self::EndContainer { empty, .. }
            | Self::EndLayer { empty, .. }
            | Self::EndScope { empty, .. }
            | Self::EndProperty { empty, .. }
            | Self::EndCounterStyle { empty, .. } => Some(*empty),
            _ => None,
        }
    }

    /// The message of an error, warning or info event.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } | Self::Warning { message } | Self::Info { message } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// The declaration of a property event.
    pub fn declaration(&self) -> Option<&Declaration> {
        match self {
            Self::Property(decl) => Some(decl),
            _ => None,
        }
    }

    /// Short description of the event's data for debug output.
    pub fn summary(&self) -> Option<String> {
        let selectors = |list: &[Selector]| {
            list.iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            Self::Charset { charset } => Some(charset.clone()),
            Self::Import { uri, .. } => Some(uri.clone()),
            Self::Namespace { prefix, uri } => Some(match prefix {
                Some(prefix) => format!("{prefix} {uri}"),
                None => uri.clone(),
            }),
            Self::StartRule { selectors: list } | Self::EndRule { selectors: list, .. } => {
                Some(selectors(list))
            }
            Self::Property(decl) => {
                let important = if decl.important { " !important" } else { "" };
                Some(format!("{}: {}{important}", decl.name, decl.value))
            }
            Self::StartMedia { media } | Self::EndMedia { media, .. } => Some(list_to_string(media)),
            Self::SupportsSelector { selector } => Some(selector.text.clone()),
            Self::StartDocument { functions } | Self::EndDocument { functions, .. } => Some(
                functions
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::StartPage { id, pseudo } | Self::EndPage { id, pseudo, .. } => {
                let id = id.as_deref().unwrap_or_default();
                Some(match pseudo {
                    Some(pseudo) => format!("{id}:{pseudo}"),
                    None => id.to_string(),
                })
                .filter(|s| !s.is_empty())
            }
            Self::StartPageMargin { margin } | Self::EndPageMargin { margin, .. } => {
                Some(margin.clone())
            }
            Self::StartFontPaletteValues { id } | Self::EndFontPaletteValues { id, .. } => {
                Some(id.clone())
            }
            Self::StartKeyframes { name, prefix } | Self::EndKeyframes { name, prefix, .. } => {
                Some(format!("{prefix}{name}"))
            }
            Self::StartKeyframeRule { keys } | Self::EndKeyframeRule { keys, .. } => Some(
                keys.iter()
                    .map(|k| k.text.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::StartContainer { name } | Self::EndContainer { name, .. } => name.clone(),
            Self::StartLayer { id } | Self::EndLayer { id, .. } => id.clone(),
            Self::Layer { ids } => Some(ids.join(", ")),
            Self::StartScope { start, end } | Self::EndScope { start, end, .. } => {
                let mut text = String::new();
                if let Some(start) = start {
                    text = format!("({})", selectors(start));
                }
                if let Some(end) = end {
                    text.push_str(&format!(" to ({})", selectors(end)));
                }
                Some(text).filter(|t| !t.is_empty())
            }
            Self::StartProperty { name }
            | Self::EndProperty { name, .. }
            | Self::StartCounterStyle { name }
            | Self::EndCounterStyle { name, .. } => Some(name.clone()),
            Self::StartViewport { prefix } | Self::EndViewport { prefix, .. } => {
                Some(prefix.clone()).filter(|p| !p.is_empty())
            }
            Self::Error { message, .. } | Self::Warning { message } | Self::Info { message } => {
                Some(message.clone())
            }
            Self::StartStylesheet
            | Self::EndStylesheet
            | Self::StartSupports
            | Self::EndSupports { .. }
            | Self::StartFontFace
            | Self::EndFontFace { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_classes() {
        let kind = EventKind::StartRule { selectors: vec![] };
        assert_eq!(kind.name(), "start-rule");
        assert!(kind.is_start() && !kind.is_end());
        let end = EventKind::EndMedia {
            media: vec![],
            empty: true,
        };
        assert!(end.is_end());
        assert_eq!(end.is_empty_block(), Some(true));
        let warn = EventKind::Warning {
            message: "careful".into(),
        };
        assert!(warn.is_message());
        assert_eq!(warn.message(), Some("careful"));
        assert_eq!(EventKind::StartStylesheet.summary(), None);
    }

    #[test]
    fn test_display() {
        let event = Event::new(
            Position::new(2, 3, 10),
            EventKind::Layer {
                ids: vec!["base".into(), "theme".into()],
            },
        );
        assert_eq!(event.to_string(), "2:3 layer base, theme");
        assert_eq!(event.event_type(), EventType::Layer);
    }
}
