//! Integration tests for the parse event stream.

use std::sync::Arc;

use lintel_css::selector::{ModifierKind, SelectorPart};
use lintel_css::{EventKind, EventType, ParseReport, Parser, ParserOptions, Position};
use parking_lot::Mutex;

fn parse(css: &str) -> ParseReport {
    Parser::new().parse(css).unwrap()
}

fn names(report: &ParseReport) -> Vec<&'static str> {
    report.events.iter().map(|e| e.kind.name()).collect()
}

#[test]
fn compound_selector_with_two_classes() {
    let report = parse(".a.b{color:red}");
    let start = report.of_type(EventType::StartRule).next().unwrap();
    let EventKind::StartRule { selectors } = &start.kind else {
        panic!("expected a start-rule event");
    };
    assert_eq!(selectors.len(), 1);
    assert_eq!(selectors[0].parts.len(), 1);
    let SelectorPart::Simple(simple) = &selectors[0].parts[0] else {
        panic!("expected a compound selector");
    };
    assert_eq!(simple.modifiers_of(ModifierKind::Class).count(), 2);
    assert_eq!(report.declarations().count(), 1);
}

#[test]
fn stylesheet_event_order() {
    let css = "@charset \"utf-8\";\n\
               @import url(base.css) screen;\n\
               @media print {\n  a { color: red }\n}\n\
               @font-face { font-family: x }\n";
    let report = parse(css);
    assert_eq!(
        names(&report),
        [
            "start-stylesheet",
            "charset",
            "import",
            "start-media",
            "start-rule",
            "property",
            "end-rule",
            "end-media",
            "start-font-face",
            "property",
            "end-font-face",
            "end-stylesheet",
        ]
    );
    assert_eq!(report.errors().count(), 0);
}

#[test]
fn start_and_end_events_balance() {
    let css = "@media screen { @supports (display: grid) { .g { display: grid } } }\n\
               @keyframes spin { from { rotate: 0deg } to { rotate: 360deg } }\n\
               @layer base { a { b { color: red } } }";
    let report = parse(css);
    assert_eq!(report.errors().count(), 0);
    let mut depth = 0i32;
    for event in &report.events {
        if event.kind.is_start() {
            depth += 1;
        } else if event.kind.is_end() {
            depth -= 1;
        }
        assert!(depth >= 0, "unbalanced at {event}");
    }
    assert_eq!(depth, 0);
}

#[test]
fn positions_point_into_source() {
    let css = "a {\n  color: red;\n  margin: 0\n}\n";
    let report = parse(css);
    let decls: Vec<_> = report.declarations().collect();
    assert_eq!(decls[0].name_pos, Position::new(2, 3, 6));
    assert_eq!(decls[1].name_pos, Position::new(3, 3, 20));
    for decl in decls {
        assert_eq!(&css[decl.name_pos.offset..][..decl.name.len()], decl.name);
        assert_eq!(&css[decl.value.pos.offset..decl.value.end], decl.value.text);
    }
}

#[test]
fn recovery_keeps_later_rules() {
    let css = "a { color red; top: 0 }\n\
               b { color: }\n\
               c { left: 0 }";
    let report = parse(css);
    assert_eq!(report.errors().count(), 2);
    let decls: Vec<_> = report.declarations().map(|d| d.name.as_str()).collect();
    assert_eq!(decls, ["top", "left"]);
    assert_eq!(report.of_type(EventType::EndRule).count(), 3);
}

#[test]
fn unterminated_string_is_one_error() {
    let report = Parser::new().parse("a { content: \"abc").unwrap();
    assert_eq!(report.errors().count(), 1);
}

#[test]
fn strict_mode_returns_the_first_error() {
    let mut parser = Parser::with_options(ParserOptions::new().with_strict(true));
    let err = parser.parse("a { color red }").unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(err.position().map(|p| p.line), Some(1));
}

#[test]
fn listeners_see_events_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let mut parser = Parser::new();
    parser.on_any(move |event| log.lock().push(event.kind.name()));
    let report = parser.parse("a { top: 0 } b {}").unwrap();
    assert_eq!(*seen.lock(), names(&report));
}

#[test]
fn event_tree_renders_nesting() {
    let report = parse("@media print { a { color: red } }");
    let tree = lintel_css::EventTreeDebug::new().format(&report.events);
    assert!(tree.contains("start-media"));
    assert!(tree.contains("color: red"));
}
