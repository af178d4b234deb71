//! Logging and debugging facilities.
//!
//! The engine is instrumented with the `tracing` crate. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```no_run
//! tracing_subscriber::fmt()
//!     .with_env_filter("lintel_css::cache=debug")
//!     .init();
//! ```
//!
//! [`EventTreeDebug`] renders a parse result as an indented tree, which is
//! handy when looking at what the parser produced for a stylesheet.

use std::fmt::{self, Write as FmtWrite};

use crate::parser::{Event, EventKind};

/// Span names used throughout the engine.
pub mod span_names {
    /// One call to `Parser::parse`.
    pub const PARSE: &str = "lintel_css::parse";
    /// Grammar compilation.
    pub const COMPILE: &str = "lintel_css::compile";
}

/// Target names for log filtering.
pub mod targets {
    /// Tokenizer and token stream.
    pub const TOKENIZER: &str = "lintel_css::tokenizer";
    /// Grammar compiler and matcher.
    pub const GRAMMAR: &str = "lintel_css::grammar";
    /// Property validation.
    pub const VALIDATE: &str = "lintel_css::validate";
    /// Parser and event dispatch.
    pub const PARSER: &str = "lintel_css::parser";
    /// Block cache.
    pub const CACHE: &str = "lintel_css::cache";
}

/// Style options for event tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Indentation only.
    Compact,
}

/// Configuration for event tree output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    pub style: TreeStyle,
    /// Whether to show `line:col` of every event.
    pub show_positions: bool,
    /// Whether to include error, warning and info events.
    pub show_messages: bool,
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_positions: true,
            show_messages: true,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Structure only: no positions, no messages.
    pub fn minimal() -> Self {
        Self {
            show_positions: false,
            show_messages: false,
            ..Default::default()
        }
    }
}

/// Renders a flat event list as a tree, nesting on start/end pairs.
#[derive(Debug, Clone, Default)]
pub struct EventTreeDebug {
    options: TreeFormatOptions,
}

impl EventTreeDebug {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format `events` into a string.
    pub fn format(&self, events: &[Event]) -> String {
        let mut output = String::new();
        let mut depth = 0usize;
        for event in events {
            if event.kind.is_message() && !self.options.show_messages {
                continue;
            }
            if event.kind.is_end() {
                depth = depth.saturating_sub(1);
                continue;
            }
            output.push_str(&self.prefix(depth));
            let _ = write!(output, "{}", event.kind.name());
            if let Some(detail) = event.kind.summary() {
                let _ = write!(output, " {detail}");
            }
            if self.options.show_positions {
                let _ = write!(output, " @{}", event.pos);
            }
            output.push('\n');
            if event.kind.is_start() && !matches!(event.kind, EventKind::StartStylesheet) {
                depth += 1;
            }
        }
        output
    }

    fn prefix(&self, depth: usize) -> String {
        let branch = match self.options.style {
            TreeStyle::Ascii => "|",
            TreeStyle::Unicode => "\u{2502}",
            TreeStyle::Compact => "",
        };
        let mut prefix = String::new();
        for _ in 0..depth {
            prefix.push_str(branch);
            for _ in 0..self.options.indent_size {
                prefix.push(' ');
            }
        }
        prefix
    }
}

/// Guard keeping a tracing span entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "lintel_css::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Wrapper pairing an event list with [`EventTreeDebug`] for `{}` formatting.
pub struct DisplayEvents<'a>(pub &'a [Event]);

impl fmt::Display for DisplayEvents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&EventTreeDebug::new().format(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn test_tree_nests_rules() {
        let report = Parser::new().parse("@media print { a { color: red } }").unwrap();
        let output = EventTreeDebug::with_options(TreeFormatOptions::minimal()).format(&report.events);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "start-stylesheet");
        assert!(lines[1].starts_with("start-media"));
        assert!(lines[2].starts_with("\u{2502}  start-rule"));
        assert!(lines[3].starts_with("\u{2502}  \u{2502}  property color"));
    }

    #[test]
    fn test_tree_hides_messages() {
        let report = Parser::new().parse("a { color: }").unwrap();
        let full = DisplayEvents(&report.events).to_string();
        assert!(full.contains("error"));
        let minimal = EventTreeDebug::with_options(TreeFormatOptions::minimal()).format(&report.events);
        assert!(!minimal.contains("error"));
    }

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }
}
