//! Position shifting for replayed events.

use crate::error::Error;
use crate::media::{MediaFeature, MediaQuery};
use crate::parser::{Declaration, Event, EventKind};
use crate::reader::Position;
use crate::selector::{Combinator, Modifier, ModifierArgs, Selector, SelectorPart, SimpleSelector};
use crate::token::Token;
use crate::values::{PropertyValue, ValuePart};

/// Distance between a cached block's recorded location and its location in
/// the current input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delta {
    pub lines: i64,
    /// Applied only to positions on the block's recorded first line.
    pub cols: i64,
    pub offset: isize,
    /// The block's recorded first line.
    pub line: u32,
}

impl Delta {
    /// The delta moving `from` onto `to`.
    pub fn between(from: Position, to: Position) -> Self {
        let cols = if from.col == 1 && to.col == 1 {
            0
        } else {
            i64::from(to.col) - i64::from(from.col)
        };
        Self {
            lines: i64::from(to.line) - i64::from(from.line),
            cols,
            offset: to.offset as isize - from.offset as isize,
            line: from.line,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.lines == 0 && self.cols == 0 && self.offset == 0
    }

    pub fn apply(&self, pos: Position) -> Position {
        let col = if pos.line == self.line {
            shift_u32(pos.col, self.cols)
        } else {
            pos.col
        };
        Position {
            line: shift_u32(pos.line, self.lines),
            col,
            offset: self.apply_offset(pos.offset),
        }
    }

    pub fn apply_offset(&self, offset: usize) -> usize {
        offset.saturating_add_signed(self.offset)
    }
}

fn shift_u32(value: u32, by: i64) -> u32 {
    u32::try_from((i64::from(value) + by).max(0)).unwrap_or(u32::MAX)
}

/// Rewrites every source position a value owns.
pub trait ShiftPositions {
    fn shift_positions(&mut self, delta: &Delta);
}

impl ShiftPositions for Position {
    fn shift_positions(&mut self, delta: &Delta) {
        *self = delta.apply(*self);
    }
}

impl<T: ShiftPositions> ShiftPositions for Vec<T> {
    fn shift_positions(&mut self, delta: &Delta) {
        for item in self {
            item.shift_positions(delta);
        }
    }
}

impl<T: ShiftPositions> ShiftPositions for Option<T> {
    fn shift_positions(&mut self, delta: &Delta) {
        if let Some(item) = self {
            item.shift_positions(delta);
        }
    }
}

impl<T: ShiftPositions> ShiftPositions for Box<T> {
    fn shift_positions(&mut self, delta: &Delta) {
        (**self).shift_positions(delta);
    }
}

impl ShiftPositions for Token {
    fn shift_positions(&mut self, delta: &Delta) {
        self.pos.shift_positions(delta);
        self.end = delta.apply_offset(self.end);
    }
}

impl ShiftPositions for ValuePart {
    fn shift_positions(&mut self, delta: &Delta) {
        self.token.shift_positions(delta);
        self.args.shift_positions(delta);
        self.end = delta.apply_offset(self.end);
    }
}

impl ShiftPositions for PropertyValue {
    fn shift_positions(&mut self, delta: &Delta) {
        self.parts.shift_positions(delta);
        self.pos.shift_positions(delta);
        self.end = delta.apply_offset(self.end);
    }
}

impl ShiftPositions for Error {
    fn shift_positions(&mut self, delta: &Delta) {
        match self {
            Self::Syntax { pos, .. } | Self::Validation { pos, .. } => pos.shift_positions(delta),
            Self::Grammar { .. } | Self::Internal { .. } => {}
        }
    }
}

impl ShiftPositions for Declaration {
    fn shift_positions(&mut self, delta: &Delta) {
        self.name_pos.shift_positions(delta);
        self.value.shift_positions(delta);
        self.invalid.shift_positions(delta);
    }
}

impl ShiftPositions for Selector {
    fn shift_positions(&mut self, delta: &Delta) {
        self.parts.shift_positions(delta);
        self.pos.shift_positions(delta);
    }
}

impl ShiftPositions for SelectorPart {
    fn shift_positions(&mut self, delta: &Delta) {
        match self {
            Self::Simple(simple) => simple.shift_positions(delta),
            Self::Combinator(combinator) => combinator.shift_positions(delta),
        }
    }
}

impl ShiftPositions for SimpleSelector {
    fn shift_positions(&mut self, delta: &Delta) {
        self.modifiers.shift_positions(delta);
        self.pos.shift_positions(delta);
    }
}

impl ShiftPositions for Combinator {
    fn shift_positions(&mut self, delta: &Delta) {
        self.pos.shift_positions(delta);
    }
}

impl ShiftPositions for Modifier {
    fn shift_positions(&mut self, delta: &Delta) {
        self.pos.shift_positions(delta);
        match &mut self.args {
            ModifierArgs::Selectors(list) | ModifierArgs::Nth { of: list, .. } => {
                list.shift_positions(delta);
            }
            ModifierArgs::Value(value) => value.shift_positions(delta),
            ModifierArgs::None | ModifierArgs::Attribute(_) => {}
        }
    }
}

impl ShiftPositions for MediaQuery {
    fn shift_positions(&mut self, delta: &Delta) {
        self.features.shift_positions(delta);
        self.pos.shift_positions(delta);
    }
}

impl ShiftPositions for MediaFeature {
    fn shift_positions(&mut self, delta: &Delta) {
        self.value.shift_positions(delta);
        self.pos.shift_positions(delta);
    }
}

impl ShiftPositions for EventKind {
    fn shift_positions(&mut self, delta: &Delta) {
        match self {
            Self::Import { media, .. } | Self::StartMedia { media } | Self::EndMedia { media, .. } => {
                media.shift_positions(delta);
            }
            Self::StartRule { selectors } | Self::EndRule { selectors, .. } => {
                selectors.shift_positions(delta);
            }
            Self::Property(decl) => decl.shift_positions(delta),
            Self::SupportsSelector { selector } => selector.shift_positions(delta),
            Self::StartDocument { functions } | Self::EndDocument { functions, .. } => {
                functions.shift_positions(delta);
            }
            Self::StartKeyframeRule { keys } | Self::EndKeyframeRule { keys, .. } => {
                keys.shift_positions(delta);
            }
            Self::StartScope { start, end } | Self::EndScope { start, end, .. } => {
                start.shift_positions(delta);
                end.shift_positions(delta);
            }
            Self::StartStylesheet
            | Self::EndStylesheet
            | Self::Charset { .. }
            | Self::Namespace { .. }
            | Self::StartSupports
            | Self::EndSupports { .. }
            | Self::StartPage { .. }
            | Self::EndPage { .. }
            | Self::StartPageMargin { .. }
            | Self::EndPageMargin { .. }
            | Self::StartFontFace
            | Self::EndFontFace { .. }
            | Self::StartFontPaletteValues { .. }
            | Self::EndFontPaletteValues { .. }
            | Self::StartViewport { .. }
            | Self::EndViewport { .. }
            | Self::StartKeyframes { .. }
            | Self::EndKeyframes { .. }
            | Self::StartContainer { .. }
            | Self::EndContainer { .. }
            | Self::StartLayer { .. }
            | Self::EndLayer { .. }
            | Self::Layer { .. }
            | Self::StartProperty { .. }
            | Self::EndProperty { .. }
            | Self::StartCounterStyle { .. }
            | Self::EndCounterStyle { .. }
            | Self::Error { .. }
            | Self::Warning { .. }
            | Self::Info { .. } => {}
        }
    }
}

impl ShiftPositions for Event {
    fn shift_positions(&mut self, delta: &Delta) {
        self.pos.shift_positions(delta);
        self.kind.shift_positions(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn test_delta_columns_only_on_first_line() {
        let delta = Delta::between(Position::new(2, 5, 20), Position::new(4, 9, 40));
        assert_eq!((delta.lines, delta.cols, delta.offset), (2, 4, 20));
        assert_eq!(delta.apply(Position::new(2, 7, 22)), Position::new(4, 11, 42));
        assert_eq!(delta.apply(Position::new(3, 7, 30)), Position::new(5, 7, 50));
    }

    #[test]
    fn test_delta_line_starts() {
        let delta = Delta::between(Position::new(1, 1, 0), Position::new(3, 1, 12));
        assert_eq!(delta.cols, 0);
        assert!(!delta.is_zero());
        assert!(Delta::between(Position::START, Position::START).is_zero());
    }

    #[test]
    fn test_shifted_events_match_moved_source() {
        let rule = "a:not(.b) { margin: 0 auto }";
        let moved = format!("\n\n{rule}");
        let mut events = Parser::new().parse(rule).unwrap().events;
        let expected = Parser::new().parse(&moved).unwrap().events;
        let delta = Delta::between(Position::START, Position::new(3, 1, 2));
        for event in &mut events {
            event.shift(&delta);
        }
        // Stylesheet start and end are not part of the rule.
        assert_eq!(events[1..events.len() - 1], expected[1..expected.len() - 1]);
    }
}
