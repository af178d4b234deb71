//! Error types for the CSS engine.

use crate::reader::Position;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while tokenizing, parsing or validating CSS.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Malformed structure: an unexpected token where a specific token or
    /// kind was required.
    #[error("CSS syntax error at line {}, column {}: {message}", pos.line, pos.col)]
    Syntax { message: String, pos: Position },

    /// A well-formed declaration whose value fails its property grammar.
    #[error("CSS validation error at line {}, column {}: {message}", pos.line, pos.col)]
    Validation { message: String, pos: Position },

    /// A grammar string could not be compiled.
    #[error("Internal grammar error. {message}")]
    Grammar { message: String },

    /// An engine invariant was violated.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create a syntax error.
    pub fn syntax(message: impl Into<String>, pos: Position) -> Self {
        Self::Syntax {
            message: message.into(),
            pos,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>, pos: Position) -> Self {
        Self::Validation {
            message: message.into(),
            pos,
        }
    }

    /// Create a grammar compilation error.
    pub fn grammar(message: impl Into<String>) -> Self {
        Self::Grammar {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether parsing may continue after reporting this error.
    ///
    /// Only syntax errors are recoverable; validation errors never reach
    /// the parse result and the other kinds indicate an engine bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// The human-readable message without the location prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Syntax { message, .. }
            | Self::Validation { message, .. }
            | Self::Grammar { message }
            | Self::Internal { message } => message,
        }
    }

    /// Source position, when the error is tied to one.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Syntax { pos, .. } | Self::Validation { pos, .. } => Some(*pos),
            Self::Grammar { .. } | Self::Internal { .. } => None,
        }
    }
}

/// Clip `text` to `len` characters, appending `...` when it was cut.
pub(crate) fn clip(text: &str, len: usize) -> String {
    match text.char_indices().nth(len) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// `Expected {goal} but found "{text}".` or `Unexpected "{text}".`
pub(crate) fn expected_message(goal: &str, found: &str) -> String {
    if goal.is_empty() {
        format!("Unexpected \"{}\".", clip(found, 30))
    } else {
        format!("Expected {goal} but found \"{}\".", clip(found, 30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_long_text() {
        assert_eq!(clip("abc", 30), "abc");
        assert_eq!(clip("abcdef", 3), "abc...");
    }

    #[test]
    fn expected_messages() {
        assert_eq!(expected_message("\"}\"", "x"), "Expected \"}\" but found \"x\".");
        assert_eq!(expected_message("", "{"), "Unexpected \"{\".");
    }

    #[test]
    fn recoverability() {
        let pos = Position::default();
        assert!(Error::syntax("x", pos).is_recoverable());
        assert!(!Error::internal("x").is_recoverable());
        assert_eq!(Error::validation("bad", pos).position(), Some(pos));
        assert_eq!(Error::grammar("oops").message(), "oops");
    }
}
