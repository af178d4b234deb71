//! Grammar string compiler.
//!
//! ```text
//! ALT:    OROR [ "|" OROR ]*
//! OROR:   ANDAND [ "||" ANDAND ]*
//! ANDAND: SEQ [ "&&" SEQ ]*
//! SEQ:    TERM [ ws TERM ]*
//! TERM:   [ <type> | literal | "[" ALT "]" | fn() | fn( ALT ) ] MOD?
//! MOD:    ? | * | + | # | {n} | {n,} | {n,m} | #{...}
//! ```

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, OnceLock};

use parking_lot::RwLock;
use tracing::trace;

use super::types::{self, ComplexSource};
use super::{Expansion, Matcher};
use crate::error::{Error, Result, clip};
use crate::logging::{span_names, targets};
use crate::properties;

static COMPILED: LazyLock<RwLock<HashMap<String, Arc<Matcher>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Compile a grammar string, reusing the tree of an earlier call with the
/// same text.
pub fn compile(grammar: &str) -> Result<Arc<Matcher>> {
    if let Some(matcher) = COMPILED.read().get(grammar) {
        return Ok(Arc::clone(matcher));
    }
    let _span = tracing::trace_span!(target: targets::GRAMMAR, span_names::COMPILE).entered();
    let matcher = Arc::new(GrammarParser::new(grammar).parse()?);
    trace!(target: targets::GRAMMAR, grammar, "compiled grammar");
    let mut compiled = COMPILED.write();
    Ok(Arc::clone(compiled.entry(grammar.to_string()).or_insert(matcher)))
}

/// Human-readable rendering of a grammar, with a top-level named type and
/// function families spelled out.
pub fn describe(grammar: &str) -> Result<String> {
    let expand = Expansion {
        named: 1,
        functions: true,
    };
    Ok(compile(grammar)?.render_with(0, expand))
}

/// Build the matcher behind a named type such as `<color>`.
pub(crate) fn resolve(name: &str) -> Result<Arc<Matcher>> {
    match types::complex(name) {
        Some(ComplexSource::Grammar(grammar)) => compile(grammar),
        Some(ComplexSource::BorderImageSlice) => Ok(Arc::new(border_image_slice())),
        Some(ComplexSource::Dasharray) => Ok(Arc::new(dasharray())),
        None => bare_name(name)
            .and_then(properties::reference)
            .map(compile)
            .unwrap_or_else(|| Err(Error::grammar(format!("Unknown type {name}.")))),
    }
}

fn bare_name(name: &str) -> Option<&str> {
    name.strip_prefix('<')?.strip_suffix('>')
}

fn simple(name: &str) -> Matcher {
    match types::simple(name) {
        Some((name, test)) => Matcher::Simple { name, test },
        None => Matcher::keywords(name),
    }
}

fn border_image_slice() -> Matcher {
    let mut items: Vec<Matcher> = (0..4).map(|_| simple("<num-pct0+>")).collect();
    items.push(Matcher::keywords("fill"));
    Matcher::unordered(items, Some(vec![true, false, false, false, false]))
}

fn dasharray() -> Matcher {
    let item = Matcher::alt(vec![simple("<len-pct0+>"), simple("<num0+>")]);
    let comma = Matcher::repeat(Matcher::keywords(","), 0, Some(1), Some('?'), None);
    Matcher::repeat(item, 1, None, Some('#'), Some(comma))
}

/// Matcher for a single term, `None` when it names an unknown type.
fn term(text: &str) -> Option<Matcher> {
    if !text.starts_with('<') {
        return Some(Matcher::keywords(text));
    }
    if let Some(family) = text.strip_prefix("<fn:").and_then(|t| t.strip_suffix('>')) {
        let functions = types::family(family)?;
        return Some(Matcher::FunctionSet {
            family: family.to_string(),
            functions,
        });
    }
    let lower = text.to_ascii_lowercase();
    if let Some((name, test)) = types::simple(&lower) {
        return Some(Matcher::Simple { name, test });
    }
    let known = types::complex(&lower).is_some()
        || bare_name(&lower).and_then(properties::reference).is_some();
    known.then(|| Matcher::Named {
        name: lower,
        target: OnceLock::new(),
    })
}

fn is_word(b: u8) -> bool {
    b == b'-' || b == b'_' || b.is_ascii_alphanumeric()
}

fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace()
}

/// Recursive-descent parser over a grammar string.
struct GrammarParser<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> GrammarParser<'s> {
    fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    fn parse(mut self) -> Result<Matcher> {
        let matcher = self.alt()?;
        if self.pos < self.src.len() {
            return Err(self.unexpected(self.pos));
        }
        Ok(matcher)
    }

    fn byte(&self, at: usize) -> Option<u8> {
        self.src.as_bytes().get(at).copied()
    }

    fn spaces_at(&self, at: usize) -> usize {
        self.src.as_bytes()[at.min(self.src.len())..]
            .iter()
            .take_while(|&&b| is_space(b))
            .count()
    }

    fn word_end(&self, at: usize) -> usize {
        at + self.src.as_bytes()[at.min(self.src.len())..]
            .iter()
            .take_while(|&&b| is_word(b))
            .count()
    }

    fn unexpected(&self, at: usize) -> Error {
        Error::grammar(format!(
            "Unexpected \"{}\" at position {at} in \"{}\".",
            clip(&self.src[at..], 30),
            self.src
        ))
    }

    fn expected(&self, what: &str) -> Error {
        Error::grammar(format!(
            "Expected \"{what}\" at position {} in \"{}\".",
            self.pos, self.src
        ))
    }

    /// `\s*` + `lit` + `\s*`, consumed only when `lit` is there and
    /// `reject` does not follow it.
    fn separator(&mut self, lit: &str, reject: Option<u8>) -> bool {
        let at = self.pos + self.spaces_at(self.pos);
        if !self.src[at..].starts_with(lit) {
            return false;
        }
        let after = at + lit.len();
        if reject.is_some() && self.byte(after) == reject {
            return false;
        }
        self.pos = after + self.spaces_at(after);
        true
    }

    fn or_sep(&mut self) -> bool {
        self.separator("|", Some(b'|'))
    }

    fn oror_sep(&mut self) -> bool {
        self.separator("||", None)
    }

    fn andand_sep(&mut self) -> bool {
        self.separator("&&", None)
    }

    /// Whitespace not followed by a combinator or a closing bracket.
    fn seq_sep(&mut self) -> bool {
        let n = self.spaces_at(self.pos);
        if n == 0 {
            return false;
        }
        match self.byte(self.pos + n) {
            Some(b'&' | b'|' | b')' | b']') => false,
            _ => {
                self.pos += n;
                true
            }
        }
    }

    /// A run of plain words joined by single `|`, ending where the
    /// alternative ends. Collapses into one keyword set.
    fn plain_words(&mut self) -> Option<&'s str> {
        let start = self.pos;
        let mut ends = Vec::new();
        let mut end = self.word_end(start);
        if end == start {
            return None;
        }
        loop {
            ends.push(end);
            let bar = end + self.spaces_at(end);
            if self.byte(bar) != Some(b'|') {
                break;
            }
            let word = bar + 1 + self.spaces_at(bar + 1);
            let next = self.word_end(word);
            if next == word {
                break;
            }
            end = next;
        }
        let found = ends.into_iter().rev().find(|&end| self.alt_ends_at(end))?;
        self.pos = found;
        Some(&self.src[start..found])
    }

    fn alt_ends_at(&self, at: usize) -> bool {
        let n = self.spaces_at(at);
        match self.byte(at + n) {
            None | Some(b']') => true,
            Some(b'|') => self.byte(at + n + 1) != Some(b'|'),
            Some(b')') => n > 0,
            _ => false,
        }
    }

    fn alt(&mut self) -> Result<Matcher> {
        let mut alts = Vec::new();
        loop {
            if let Some(words) = self.plain_words() {
                alts.push(Matcher::keywords(words));
            } else {
                let mut ors = Vec::new();
                loop {
                    let mut ands = Vec::new();
                    loop {
                        let mut seq = vec![self.term()?];
                        while self.seq_sep() {
                            seq.push(self.term()?);
                        }
                        ands.push(Matcher::seq(seq));
                        if !self.andand_sep() {
                            break;
                        }
                    }
                    ors.push(Matcher::all_of(ands));
                    if !self.oror_sep() {
                        break;
                    }
                }
                alts.push(Matcher::any_of(ors));
            }
            if !self.or_sep() {
                break;
            }
        }
        Ok(Matcher::alt(alts))
    }

    fn term(&mut self) -> Result<Matcher> {
        let start = self.pos;
        let matcher = if self.byte(start) == Some(b'[') {
            self.pos += 1;
            self.pos += self.spaces_at(self.pos);
            let inner = self.alt()?;
            let close = self.pos + self.spaces_at(self.pos);
            if self.byte(close) != Some(b']') {
                return Err(self.expected("]"));
            }
            self.pos = close + 1;
            inner
        } else if let Some((name, empty)) = self.function_start() {
            let body = if empty {
                None
            } else {
                let body = self.alt()?;
                let close = self.pos + self.spaces_at(self.pos);
                if self.byte(close) != Some(b')') {
                    return Err(self.expected(")"));
                }
                self.pos = close + 1;
                Some(Arc::new(body))
            };
            Matcher::Function {
                name: name.to_ascii_lowercase(),
                body,
            }
        } else {
            let text = self.term_text().ok_or_else(|| self.unexpected(start))?;
            term(text).ok_or_else(|| self.unexpected(start))?
        };
        self.modifier(matcher)
    }

    /// `name(` with optional space, and whether `)` follows right away.
    fn function_start(&mut self) -> Option<(&'s str, bool)> {
        let start = self.pos;
        let end = self.word_end(start);
        if end == start || self.byte(end) != Some(b'(') {
            return None;
        }
        let mut pos = end + 1;
        pos += self.spaces_at(pos);
        let empty = self.byte(pos) == Some(b')');
        if empty {
            pos += 1;
        }
        self.pos = pos;
        Some((&self.src[start..end], empty))
    }

    fn term_text(&mut self) -> Option<&'s str> {
        let start = self.pos;
        let rest = &self.src[start..];
        let len = match rest.as_bytes().first()? {
            b'<' => rest
                .find(|c: char| c == '>' || c.is_whitespace())
                .filter(|&i| i > 1 && rest.as_bytes()[i] == b'>')
                .map(|i| i + 1),
            b'"' | b'\'' => {
                let quote = rest.chars().next()?;
                rest[1..].find(quote).map(|i| i + 2)
            }
            _ => None,
        }
        .unwrap_or_else(|| {
            rest.find(|c: char| c.is_whitespace() || "?*+#{}()[]|&".contains(c))
                .unwrap_or(rest.len())
        });
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    fn modifier(&mut self, matcher: Matcher) -> Result<Matcher> {
        let comma = || Some(Matcher::keywords(","));
        let (min, max, marker, sep) = match self.byte(self.pos) {
            Some(b'{') => {
                let (min, max) = self.braces()?;
                (min, max, None, None)
            }
            Some(b'#') if self.byte(self.pos + 1) == Some(b'{') => {
                self.pos += 1;
                let (min, max) = self.braces()?;
                (min, max, Some('#'), comma())
            }
            Some(c @ (b'?' | b'*' | b'+' | b'#')) => {
                self.pos += 1;
                match c {
                    b'?' => (0, Some(1), Some('?'), None),
                    b'*' => (0, None, Some('*'), None),
                    b'+' => (1, None, Some('+'), None),
                    _ => (1, None, Some('#'), comma()),
                }
            }
            _ => return Ok(matcher),
        };
        Ok(Matcher::repeat(matcher, min, max, marker, sep))
    }

    /// `{n}`, `{n,}` or `{n,m}`.
    fn braces(&mut self) -> Result<(u32, Option<u32>)> {
        let open = self.pos;
        let close = self.src[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| self.expected("}"))?;
        let body = &self.src[open + 1..close];
        let number = |s: &str| s.trim().parse::<u32>().ok();
        let range = match body.split_once(',') {
            None => number(body).map(|n| (n, Some(n))),
            Some((min, max)) if max.trim().is_empty() => number(min).map(|n| (n, None)),
            Some((min, max)) => number(min).zip(number(max)).map(|(a, b)| (a, Some(b))),
        };
        let range = range.ok_or_else(|| self.expected("}"))?;
        self.pos = close + 1;
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memoized_identity() {
        let a = compile("<len> | auto").unwrap();
        let b = compile("<len> | auto").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_plain_words_collapse() {
        let m = compile("thin | medium | thick").unwrap();
        match &*m {
            Matcher::Keywords { words, .. } => assert_eq!(words, &["thin", "medium", "thick"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_keywords_move_to_front() {
        let m = compile("<len> | auto | none").unwrap();
        assert_eq!(m.to_string(), "auto | none | <len>");
    }

    #[test]
    fn test_quoted_literals() {
        let m = compile("\"[\" <ident> \"]\"").unwrap();
        assert!(matches!(&*m, Matcher::Seq(items) if items.len() == 3));
    }

    #[test]
    fn test_braces() {
        match &*compile("<num>{2,}").unwrap() {
            Matcher::Repeat { min, max, marker, .. } => {
                assert_eq!((*min, *max, *marker), (2, None, None));
            }
            other => panic!("unexpected {other:?}"),
        }
        match &*compile("<num>#{1,3}").unwrap() {
            Matcher::Repeat { min, max, marker, sep, .. } => {
                assert_eq!((*min, *max, *marker), (1, Some(3), Some('#')));
                assert!(sep.is_some());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_errors() {
        let err = compile("<no-such-type>").unwrap_err();
        assert_eq!(
            err.message(),
            "Unexpected \"<no-such-type>\" at position 0 in \"<no-such-type>\"."
        );
        assert!(compile("[ a | b").is_err());
        assert!(compile("f( <num>").is_err());
        assert!(compile("a{x}").is_err());
        assert!(matches!(compile("a b ]"), Err(Error::Grammar { .. })));
    }

    #[test]
    fn test_describe_expands_one_level() {
        assert_eq!(describe("<length> | <percentage>").unwrap(), "<length> | <percentage>");
        assert_eq!(describe("<box>").unwrap(), "padding-box | border-box | content-box");
        let color = describe("<color>").unwrap();
        assert!(color.starts_with("<named-or-hex-color> | color() | color-mix()"));
        assert_eq!(describe("<border-shorthand>").unwrap(), "<border-width> || <border-style> || <color>");
    }

    #[test]
    fn test_describe_round_trips() {
        for grammar in ["[ a | b ]{1,2} c?", "<len>#{2} && x", "f( <num> ) || g()"] {
            let text = describe(grammar).unwrap();
            let again = describe(&text).unwrap();
            assert_eq!(text, again);
        }
    }

    #[test]
    fn test_every_table_grammar_compiles() {
        for name in properties::names() {
            if let Some(grammar) = properties::lookup(name).and_then(|s| s.grammar()) {
                compile(grammar).unwrap_or_else(|e| panic!("{name}: {e}"));
            }
        }
        for grammar in types::all_grammars() {
            compile(grammar).unwrap_or_else(|e| panic!("{e}"));
        }
        for name in ["<border-image-slice>", "<dasharray>", "<prefix>", "<x>"] {
            resolve(name).unwrap();
        }
    }
}
