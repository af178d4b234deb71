//! Property value validation.
//!
//! [`validate_property`] checks a declaration value against the grammar of
//! its property. Values that passed once are remembered per property, so
//! re-validating the same text is a hash lookup.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use parking_lot::RwLock;
use tracing::trace;

use crate::error::{Error, Result, clip};
use crate::grammar::{self, Cursor, is_global_keyword};
use crate::logging::targets;
use crate::properties::{self, Scope, Syntax};
use crate::reader::Position;
use crate::token::Name;
use crate::values::{PartKind, PropertyValue, ValuePart};

/// Value texts known to be valid, keyed by lower-case property name.
static KNOWN_VALID: LazyLock<RwLock<HashMap<String, HashSet<String>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Validate the value of property `name` declared in `scope`.
///
/// Returns `Ok(None)` when the value is acceptable and
/// `Ok(Some(Error::Validation))` when it is not. `Err` is reserved for
/// grammar tables that fail to compile.
pub fn validate_property(name: &str, value: &PropertyValue, scope: Scope) -> Result<Option<Error>> {
    validate_property_at(name, value.pos, value, scope)
}

/// Like [`validate_property`], reporting unknown names at `name_pos`.
pub fn validate_property_at(
    name: &str,
    name_pos: Position,
    value: &PropertyValue,
    scope: Scope,
) -> Result<Option<Error>> {
    if let Some(first) = value.parts.first()
        && first.kind == PartKind::Ident
        && is_global_keyword(first)
    {
        return Ok(value.parts.get(1).map(end_of_value));
    }

    let parsed = Name::new(name);
    let mut key = parsed.lower.as_str();
    let mut syntax = properties::lookup_in(scope, key);
    if syntax.is_none() && parsed.vendor_pos > 0 {
        key = parsed.unprefixed();
        syntax = properties::lookup_in(scope, key);
    }
    let grammar = match syntax {
        Some(Syntax::Grammar(grammar)) => grammar,
        Some(Syntax::Opaque | Syntax::Obsolete) => return Ok(None),
        None if parsed.vendor_pos > 0 => return Ok(None),
        None => {
            let what = if scope.falls_back() || properties::lookup(key).is_none() {
                "Unknown"
            } else {
                "Misplaced"
            };
            return Ok(Some(Error::validation(
                format!("{what} property \"{name}\"."),
                name_pos,
            )));
        }
    };
    if value.is_var {
        return Ok(None);
    }

    let text = value.text.trim();
    if KNOWN_VALID
        .read()
        .get(key)
        .is_some_and(|known| known.contains(text))
    {
        trace!(target: targets::VALIDATE, property = key, "memo hit");
        return Ok(None);
    }
    let failure = check(grammar, value)?;
    if failure.is_none() {
        KNOWN_VALID
            .write()
            .entry(key.to_string())
            .or_default()
            .insert(text.to_string());
    }
    Ok(failure)
}

/// Match `value` against an arbitrary grammar string.
pub fn validate_value(grammar: &str, value: &PropertyValue) -> Result<Option<Error>> {
    if value.is_var {
        return Ok(None);
    }
    check(grammar, value)
}

fn check(grammar: &str, value: &PropertyValue) -> Result<Option<Error>> {
    let matcher = grammar::compile(grammar)?;
    let parts = &value.parts;
    let mut cur = Cursor::new(parts);
    let mut ok = matcher.matches(&mut cur)?;
    if (!ok || !cur.is_done()) && mentions_attr(&value.text) {
        if !ok {
            cur = Cursor::new(parts);
            cur.set_try_attr(true);
            ok = matcher.matches(&mut cur)?;
        }
        while cur.current().is_some_and(ValuePart::is_attr) {
            cur.set_index(cur.index() + 1);
        }
    }
    if !cur.is_done() && (ok || cur.index() > 0) {
        return Ok(cur.current().map(end_of_value));
    }
    if ok {
        return Ok(None);
    }
    if let Some((part, body)) = cur.bad_function() {
        return Ok(mismatch(&body.render(0), part));
    }
    let single = parts.first().filter(|_| parts.len() == 1);
    if single.is_some_and(ValuePart::is_var) {
        return Ok(None);
    }
    let message = format!(
        "Expected {} but found \"{}\".",
        grammar::describe(grammar)?,
        clip(&value.text, 30)
    );
    Ok(Some(Error::validation(message, value.pos)))
}

/// Whether `text` contains `attr(` at a word boundary.
fn mentions_attr(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.windows(5).enumerate().any(|(i, w)| {
        w.eq_ignore_ascii_case(b"attr(")
            && (i == 0 || !(bytes[i - 1].is_ascii_alphanumeric() || bytes[i - 1] == b'_'))
    })
}

fn end_of_value(part: &ValuePart) -> Error {
    Error::validation(
        format!("Expected end of value but found \"{}\".", clip(&part.to_string(), 30)),
        part.pos(),
    )
}

fn mismatch(goal: &str, part: &ValuePart) -> Option<Error> {
    (!part.is_var()).then(|| {
        Error::validation(
            format!("Expected {goal} but found \"{}\".", clip(&part.to_string(), 30)),
            part.pos(),
        )
    })
}

/// Forget every remembered valid value.
pub fn clear_memo() {
    KNOWN_VALID.write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_value;

    fn validate(name: &str, value: &str) -> Option<String> {
        let value = parse_value(value).unwrap();
        validate_property(name, &value, Scope::Global)
            .unwrap()
            .map(|e| e.message().to_string())
    }

    #[test]
    fn test_valid_values() {
        assert_eq!(validate("color", "red"), None);
        assert_eq!(validate("margin", "0 auto"), None);
        assert_eq!(validate("display", "flex"), None);
        assert_eq!(validate("width", "calc(100% - 2px)"), None);
        assert_eq!(validate("COLOR", "Red"), None);
    }

    #[test]
    fn test_unknown_and_prefixed() {
        assert_eq!(validate("colour", "red").as_deref(), Some("Unknown property \"colour\"."));
        assert_eq!(validate("-webkit-made-up", "1"), None);
        assert_eq!(validate("-webkit-margin-start", "2px"), None);
        assert_eq!(validate("quotes", "anything at all"), None);
    }

    #[test]
    fn test_misplaced_in_closed_scope() {
        let value = parse_value("red").unwrap();
        let err = validate_property("color", &value, Scope::FontFace).unwrap().unwrap();
        assert_eq!(err.message(), "Misplaced property \"color\".");
        let err = validate_property("colour", &value, Scope::FontFace).unwrap().unwrap();
        assert_eq!(err.message(), "Unknown property \"colour\".");
    }

    #[test]
    fn test_global_keywords() {
        assert_eq!(validate("color", "inherit"), None);
        assert_eq!(
            validate("color", "inherit red").as_deref(),
            Some("Expected end of value but found \"red\".")
        );
        assert_eq!(validate("colour", "inherit"), None);
        assert_eq!(
            validate("-webkit-foo", "inherit red").as_deref(),
            Some("Expected end of value but found \"red\".")
        );
    }

    #[test]
    fn test_variables_are_valid() {
        assert_eq!(validate("margin", "var(--gap) nonsense"), None);
        assert_eq!(validate("width", "/*[[size]]*/"), None);
    }

    #[test]
    fn test_leftover_parts() {
        assert_eq!(
            validate("display", "block inline-block").as_deref(),
            Some("Expected end of value but found \"inline-block\".")
        );
    }

    #[test]
    fn test_bad_function_message() {
        let msg = validate("color", "rgb(1 2)").unwrap();
        assert!(msg.starts_with("Expected "), "{msg}");
        assert!(msg.ends_with("but found \"rgb(1 2)\"."), "{msg}");
    }

    #[test]
    fn test_arbitrary_grammar() {
        let pct = parse_value("50%").unwrap();
        assert!(validate_value("<length> | <percentage>", &pct).unwrap().is_none());
        let auto = parse_value("auto").unwrap();
        let err = validate_value("<length> | <percentage>", &auto).unwrap().unwrap();
        assert_eq!(
            err.message(),
            "Expected <length> | <percentage> but found \"auto\"."
        );
    }

    #[test]
    fn test_attr_word_boundary() {
        assert!(mentions_attr("ATTR(x)"));
        assert!(mentions_attr("1px -attr(x)"));
        assert!(!mentions_attr("myattr(x)"));
    }

    #[test]
    fn test_attr_fallback() {
        assert_eq!(validate("width", "attr(data-w px)"), None);
        assert_eq!(validate("margin", "1px attr(data-m)"), None);
    }

    #[test]
    fn test_idempotent() {
        for _ in 0..2 {
            assert_eq!(validate("border", "1px solid red"), None);
            assert!(validate("border", "1px solid nope").is_some());
        }
    }
}
