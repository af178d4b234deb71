//! Error-recovering CSS parser for Lintel.
//!
//! This crate turns stylesheet text into a stream of parse events and checks
//! property values against their value grammars:
//!
//! - **Tokenizer**: CSS tokens with positions, vendor-prefix and hack flags
//! - **Parser**: Style rules, nesting and the common at-rules, reported as
//!   [`Event`]s with syntax errors recovered per declaration or rule
//! - **Grammar**: Compiler and matcher for CSS value definition syntax
//! - **Validation**: Property values checked against a built-in table
//! - **Block Cache**: Replay of unchanged rules across parses of edited text
//!
//! # Parsing Example
//!
//! ```
//! use lintel_css::{EventType, Parser};
//!
//! let mut parser = Parser::new();
//! let report = parser.parse("a { color: red; margin: 0 auto }").unwrap();
//!
//! assert_eq!(report.declarations().count(), 2);
//! assert_eq!(report.errors().count(), 0);
//! assert_eq!(report.of_type(EventType::EndRule).count(), 1);
//! ```
//!
//! # Listener Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lintel_css::{EventKind, EventType, Parser};
//! use parking_lot::Mutex;
//!
//! let warnings = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&warnings);
//!
//! let mut parser = Parser::new();
//! parser.on(EventType::Warning, move |event| {
//!     if let EventKind::Warning { message } = &event.kind {
//!         sink.lock().push(message.clone());
//!     }
//! });
//! parser.parse("a { color: #ggg }").unwrap();
//!
//! assert_eq!(warnings.lock().len(), 1);
//! ```
//!
//! # Validation Example
//!
//! ```
//! use lintel_css::{Scope, parse_value, validate_property};
//!
//! let value = parse_value("1px solid red").unwrap();
//! assert!(validate_property("border", &value, Scope::Global).unwrap().is_none());
//!
//! let value = parse_value("1px solid red 2px").unwrap();
//! assert!(validate_property("border", &value, Scope::Global).unwrap().is_some());
//! ```

mod error;
pub mod cache;
pub mod grammar;
pub mod logging;
pub mod media;
pub mod parser;
pub mod properties;
pub mod reader;
pub mod selector;
pub mod token;
pub mod tokenizer;
pub mod validate;
pub mod values;

pub use cache::{BlockCache, CacheConfig, CacheStats};
pub use error::{Error, Result};
pub use logging::{DisplayEvents, EventTreeDebug, PerfSpan, TreeFormatOptions, TreeStyle};
pub use media::{MediaFeature, MediaQuery};
pub use parser::{
    Declaration, Event, EventKind, EventType, ParseReport, ParseStats, Parser, ParserOptions,
    parse_media_list, parse_selector, parse_value,
};
pub use properties::Scope;
pub use reader::Position;
pub use selector::{Selector, Specificity};
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenStream, Tokenizer};
pub use validate::{validate_property, validate_value};
pub use values::{PartKind, PropertyValue, ValuePart};

/// Commonly used types.
pub mod prelude {
    pub use crate::cache::BlockCache;
    pub use crate::error::{Error, Result};
    pub use crate::parser::{Declaration, Event, EventKind, EventType, ParseReport, Parser, ParserOptions};
    pub use crate::properties::Scope;
    pub use crate::reader::Position;
    pub use crate::values::PropertyValue;
}
