//! Integration tests for the tokenizer.

use lintel_css::{Token, TokenKind, Tokenizer};

const SHEET: &str = r#"@charset "utf-8";
@font-face { font-family: "Ünïcode Sans"; unicode-range: U+0025-00FF, u+4?? }
:root { --gap: calc(1rem + 2px); --brace: { a: b } }
a[href^='http'] > b ~ c + d, e || f { margin: 0 -1px .5em; z-index: +3 }
/* comment */ @media (400px <= width < 700px) {
  .x::after { content: "\"q\""; color: rgb(0 0 0 / 50%) !important }
}
<!-- --> .y { background: url( img/bg.png ) no-repeat; width: 1e3px }
"#;

fn tokens(src: &str) -> Vec<Token> {
    Tokenizer::new(src).collect()
}

#[test]
fn token_texts_reproduce_the_input() {
    let toks = tokens(SHEET);
    assert!(toks.iter().all(|t| t.kind != TokenKind::Invalid));
    let text: String = toks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(text, SHEET);
}

#[test]
fn tokens_are_contiguous_source_slices() {
    let mut offset = 0;
    for tok in tokens(SHEET) {
        assert_eq!(tok.pos.offset, offset, "{:?}", tok.text);
        assert_eq!(&SHEET[tok.pos.offset..tok.end], tok.text);
        offset = tok.end;
    }
    assert_eq!(offset, SHEET.len());
}

#[test]
fn lines_and_columns_count_characters() {
    for tok in tokens(SHEET) {
        let before = &SHEET[..tok.pos.offset];
        let line = before.matches('\n').count() + 1;
        let col = before.rsplit('\n').next().unwrap_or_default().chars().count() + 1;
        assert_eq!(tok.pos.line as usize, line, "{:?}", tok.text);
        assert_eq!(tok.pos.col as usize, col, "{:?}", tok.text);
    }
}

#[test]
fn tokenize_all_ends_with_eof() {
    let all = Tokenizer::new("a{}").tokenize_all();
    let kinds: Vec<_> = all.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [TokenKind::Ident, TokenKind::LBrace, TokenKind::RBrace, TokenKind::Eof]
    );
    assert_eq!(all[3].pos.offset, 3);
}

#[test]
fn custom_property_names_are_flagged() {
    let toks = tokens(":root { --gap: 1px }");
    let gap = toks.iter().find(|t| t.text == "--gap").unwrap();
    assert_eq!(gap.kind, TokenKind::Ident);
    assert!(gap.flags.custom_property);
}
