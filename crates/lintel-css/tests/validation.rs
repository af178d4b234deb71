//! Integration tests for property value validation.

use lintel_css::{Parser, ParserOptions, Scope, parse_value, validate_property, validate_value};

fn invalid_names(css: &str) -> Vec<String> {
    Parser::new()
        .parse(css)
        .unwrap()
        .declarations()
        .filter(|d| d.invalid.is_some())
        .map(|d| d.name.clone())
        .collect()
}

#[test]
fn all_zero_box_properties_are_valid() {
    assert!(invalid_names("a { width:0;height:0;border:0 none }").is_empty());
    assert!(invalid_names("a { margin: 0; padding: 0 0 0 0; border-width: 0 }").is_empty());
}

#[test]
fn length_or_percentage() {
    let grammar = "<length> | <percentage>";
    let pct = parse_value("50%").unwrap();
    assert!(validate_value(grammar, &pct).unwrap().is_none());

    let auto = parse_value("auto").unwrap();
    let err = validate_value(grammar, &auto).unwrap().unwrap();
    assert!(err.message().contains(grammar), "{}", err.message());
    assert!(!err.is_recoverable());
}

#[test]
fn validation_is_idempotent() {
    let values = ["1px solid red", "solid 2px", "red red", "thin dotted #abc"];
    for text in values {
        let value = parse_value(text).unwrap();
        let first = validate_property("border", &value, Scope::Global).unwrap();
        let second = validate_property("border", &value, Scope::Global).unwrap();
        assert_eq!(first.is_none(), second.is_none(), "{text}");
    }
}

#[test]
fn optional_branch_in_all_required_group() {
    let grammar = "a && b? && c";
    let matches = |text: &str| validate_value(grammar, &parse_value(text).unwrap()).unwrap().is_none();
    assert!(matches("a c"));
    assert!(matches("c a b"));
    assert!(!matches("a b"));
}

#[test]
fn invalid_values_are_attached_not_reported() {
    let report = Parser::new()
        .parse("a { color: 12px; display: flex; colour: red }")
        .unwrap();
    assert_eq!(report.errors().count(), 0);
    let verdicts: Vec<_> = report
        .declarations()
        .map(|d| (d.name.as_str(), d.invalid.as_ref().map(|e| e.message().to_string())))
        .collect();
    assert_eq!(verdicts[1], ("display", None));
    assert_eq!(verdicts[2].1.as_deref(), Some("Unknown property \"colour\"."));
    assert!(verdicts[0].1.is_some());
}

#[test]
fn descriptor_scopes() {
    let css = "@font-face { font-family: Foo; font-display: swap; color: red }";
    let report = Parser::new().parse(css).unwrap();
    let invalid: Vec<_> = report
        .declarations()
        .filter_map(|d| d.invalid.as_ref().map(|e| (d.name.as_str(), e.message().to_string())))
        .collect();
    assert_eq!(invalid, [("color", "Misplaced property \"color\".".to_string())]);
}

#[test]
fn validation_can_be_disabled() {
    let options = ParserOptions::new().with_no_validation(true);
    let report = Parser::with_options(options)
        .parse("a { colour: red; width: banana }")
        .unwrap();
    assert!(report.declarations().all(|d| d.invalid.is_none()));
}

#[test]
fn css_wide_keywords_are_checked_before_the_name() {
    let verdict = |name: &str, text: &str, scope: Scope| {
        validate_property(name, &parse_value(text).unwrap(), scope)
            .unwrap()
            .map(|e| e.message().to_string())
    };
    assert_eq!(verdict("colour", "inherit", Scope::Global), None);
    assert_eq!(verdict("color", "initial", Scope::FontFace), None);
    assert_eq!(
        verdict("-webkit-foo", "inherit red", Scope::Global).as_deref(),
        Some("Expected end of value but found \"red\".")
    );
}
