//! Grammar engine.
//!
//! Property values are checked against grammars written in the CSS value
//! definition notation: `<len> | auto`, `[ a || b ]#`, `name( <num>{2} )`.
//! [`compile`] turns a grammar string into a [`Matcher`] tree. Trees are
//! memoized process-wide, so compiling the same string twice returns the
//! same `Arc`.
//!
//! Matching walks a [`Cursor`] over the parts of a value. Every matcher
//! leaves the cursor where it was when it fails.

mod compile;
pub(crate) mod types;

use std::fmt;
use std::sync::{Arc, OnceLock};

use static_assertions::assert_impl_all;

use crate::error::Result;
use crate::token::TokenKind;
use crate::values::ValuePart;

pub use compile::{compile, describe};
pub use types::{GLOBAL_KEYWORDS, is_global_keyword};

use types::SimpleTest;

/// Binding strength of the grammar combinators, loosest first.
pub mod prec {
    pub const ALT: u8 = 1;
    pub const OROR: u8 = 2;
    pub const ANDAND: u8 = 3;
    pub const SEQ: u8 = 4;
    pub const MOD: u8 = 5;
}

/// Attempts allowed per pass of an unordered (`&&`, `||`) search.
const STEP_BUDGET: usize = 10_000;

/// A compiled grammar node.
#[derive(Debug)]
pub enum Matcher {
    /// One of a set of literal words, compared case-insensitively.
    Keywords {
        words: Vec<String>,
        /// Source text, e.g. `thin | medium | thick`.
        text: String,
    },
    /// A single-part predicate such as `<len>`.
    Simple {
        name: &'static str,
        test: SimpleTest,
    },
    /// A complex type or property grammar, resolved on first use.
    Named {
        name: String,
        target: OnceLock<Arc<Matcher>>,
    },
    /// `name( body )`, or `name()` accepting any arguments.
    Function {
        name: String,
        body: Option<Arc<Matcher>>,
    },
    /// `<fn:family>`: any function of a built-in family.
    FunctionSet {
        family: String,
        functions: &'static [(&'static str, &'static str)],
    },
    /// Juxtaposed terms, in order.
    Seq(Vec<Arc<Matcher>>),
    /// `a | b`: the first alternative that matches.
    Alt(Vec<Arc<Matcher>>),
    /// `a && b` when `required` is set, `a || b` otherwise.
    Unordered {
        items: Vec<Arc<Matcher>>,
        required: Option<Vec<bool>>,
    },
    /// `?`, `*`, `+`, `#` and `{n,m}` multipliers. `max` is `None` when
    /// unbounded. `sep` precedes every iteration after the first.
    Repeat {
        inner: Arc<Matcher>,
        min: u32,
        max: Option<u32>,
        marker: Option<char>,
        sep: Option<Arc<Matcher>>,
    },
}

assert_impl_all!(Matcher: Send, Sync);

/// Position within the parts of a value being matched.
#[derive(Debug, Clone)]
pub struct Cursor<'v> {
    parts: &'v [ValuePart],
    index: usize,
    try_attr: bool,
    bad_function: Option<(&'v ValuePart, Arc<Matcher>)>,
}

impl<'v> Cursor<'v> {
    pub fn new(parts: &'v [ValuePart]) -> Self {
        Self {
            parts,
            index: 0,
            try_attr: false,
            bad_function: None,
        }
    }

    /// Let `attr()` stand in for any single part.
    pub fn set_try_attr(&mut self, enabled: bool) {
        self.try_attr = enabled;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.parts.len());
    }

    /// Whether every part was consumed.
    pub fn is_done(&self) -> bool {
        self.index >= self.parts.len()
    }

    /// The part under the cursor.
    pub fn current(&self) -> Option<&'v ValuePart> {
        self.parts.get(self.index)
    }

    /// The last function whose arguments did not match its body.
    pub fn bad_function(&self) -> Option<(&'v ValuePart, &Arc<Matcher>)> {
        self.bad_function.as_ref().map(|(part, body)| (*part, body))
    }
}

impl Matcher {
    /// Match at the cursor, advancing past the consumed parts on success.
    pub fn matches(&self, cur: &mut Cursor<'_>) -> Result<bool> {
        let Some(part) = cur.current() else {
            return self.is_optional();
        };
        let start = cur.index;
        let matched = match self {
            Self::Named { name, target } => resolve(name, target)?.matches(cur)?,
            Self::Keywords { .. }
            | Self::Simple { .. }
            | Self::Function { .. }
            | Self::FunctionSet { .. } => {
                let ok = part.is_var() || self.test(part, cur)? || (cur.try_attr && part.is_attr());
                if ok {
                    cur.index += 1;
                }
                ok
            }
            Self::Seq(items) => {
                let mut ok = true;
                for item in items {
                    if !item.matches(cur)? {
                        ok = false;
                        break;
                    }
                }
                ok
            }
            Self::Alt(items) => {
                let mut ok = false;
                for item in items {
                    if item.matches(cur)? {
                        ok = true;
                        break;
                    }
                }
                ok
            }
            Self::Unordered { items, required } => {
                Search::new(items, required.as_deref(), cur).run()?
            }
            Self::Repeat {
                inner,
                min,
                max,
                sep,
                ..
            } => {
                let mut count = 0u32;
                while max.is_none_or(|max| count < max) {
                    let before = cur.index;
                    let step = match sep {
                        Some(sep) if count > 0 => sep,
                        _ => inner,
                    };
                    if !step.matches(cur)? {
                        break;
                    }
                    count += 1;
                    if cur.index == before {
                        // an empty match repeats forever
                        count = count.max(*min);
                        break;
                    }
                }
                count >= *min
            }
        };
        if !matched {
            cur.index = start;
        }
        Ok(matched)
    }

    /// A `Repeat` with `min == 0`, the only kind that matches nothing.
    pub fn is_optional(&self) -> Result<bool> {
        match self {
            Self::Repeat { min, .. } => Ok(*min == 0),
            Self::Named { name, target } => resolve(name, target)?.is_optional(),
            _ => Ok(false),
        }
    }

    fn test<'v>(&self, part: &'v ValuePart, cur: &mut Cursor<'v>) -> Result<bool> {
        match self {
            Self::Keywords { words, .. } => Ok(keyword_matches(words, part)),
            Self::Simple { test, .. } => Ok(test(part)),
            Self::Function { name, body } => {
                let named = part.function_name() == Some(name.as_str())
                    || part.prefixed_function_name() == Some(name.as_str());
                match body {
                    Some(body) if named => match_arguments(part, body, cur),
                    _ => Ok(named),
                }
            }
            Self::FunctionSet { functions, .. } => {
                let grammar = part
                    .function_name()
                    .and_then(|name| types::family_function(functions, name))
                    .or_else(|| {
                        part.prefixed_function_name()
                            .and_then(|name| types::family_function(functions, name))
                    });
                match grammar {
                    Some(grammar) => match_arguments(part, &compile(grammar)?, cur),
                    None => Ok(false),
                }
            }
            _ => Ok(false),
        }
    }

    /// Grammar text with `[ ]` added where nesting under a combinator of
    /// precedence `prec` requires it.
    pub fn render(&self, prec: u8) -> String {
        self.render_with(prec, Expansion::NONE)
    }

    fn render_with(&self, prec: u8, expand: Expansion) -> String {
        match self {
            Self::Keywords { text, .. } => bracket(prec > prec::ALT && text.contains(' '), text.clone()),
            Self::Simple { name, .. } => (*name).to_string(),
            Self::Named { name, target } => {
                if expand.named == 0 || name == "<url>" {
                    return name.clone();
                }
                match resolve(name, target) {
                    Ok(resolved) => resolved.render_with(prec, expand.descend()),
                    Err(_) => name.clone(),
                }
            }
            Self::Function { name, body } => match body {
                Some(body) => format!("{name}( {} )", body.render_with(0, expand)),
                None => format!("{name}()"),
            },
            Self::FunctionSet { family, functions } => {
                if !expand.functions {
                    return format!("<fn:{family}>");
                }
                let list = functions
                    .iter()
                    .map(|(name, _)| format!("{name}()"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                bracket(prec > prec::ALT, list)
            }
            Self::Seq(items) => bracket(prec > prec::SEQ, join(items, prec::SEQ, " ", expand)),
            Self::Alt(items) => bracket(prec > prec::ALT, join(items, prec::ALT, " | ", expand)),
            Self::Unordered { items, required } => {
                let (own, sep) = match required {
                    Some(_) => (prec::ANDAND, " && "),
                    None => (prec::OROR, " || "),
                };
                let text = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| match required {
                        Some(required) if !required[i] => {
                            let mut text = item.render_with(prec::MOD, expand);
                            if !text.ends_with('?') {
                                text.push('?');
                            }
                            text
                        }
                        _ => item.render_with(own, expand),
                    })
                    .collect::<Vec<_>>()
                    .join(sep);
                bracket(prec > own, text)
            }
            Self::Repeat {
                inner,
                min,
                max,
                marker,
                ..
            } => {
                let mut text = inner.render_with(prec::MOD, expand);
                if let Some(marker) = marker {
                    text.push(*marker);
                }
                let braces = match marker {
                    None => true,
                    Some('#') => !(*min == 1 || max.is_none()),
                    Some(_) => false,
                };
                if braces {
                    match max {
                        Some(max) if max == min => text.push_str(&format!("{{{min}}}")),
                        Some(max) => text.push_str(&format!("{{{min},{max}}}")),
                        None => text.push_str(&format!("{{{min},}}")),
                    }
                }
                text
            }
        }
    }

    // Constructors used by the compiler. Single-child groups collapse.

    pub(crate) fn keywords(text: &str) -> Self {
        let text = text.to_lowercase();
        let words = text
            .split('|')
            .map(|word| {
                let word = word.trim();
                word.strip_prefix('"')
                    .and_then(|w| w.strip_suffix('"'))
                    .unwrap_or(word)
                    .to_string()
            })
            .collect();
        Self::Keywords { words, text }
    }

    pub(crate) fn seq(mut items: Vec<Matcher>) -> Self {
        if items.len() == 1 {
            return items.remove(0);
        }
        Self::Seq(items.into_iter().map(Arc::new).collect())
    }

    pub(crate) fn alt(items: Vec<Matcher>) -> Self {
        let mut words: Vec<String> = Vec::new();
        let mut texts: Vec<String> = Vec::new();
        let mut rest = Vec::new();
        for item in items {
            match item {
                Self::Keywords { words: w, text } => {
                    words.extend(w);
                    texts.push(text);
                }
                other => rest.push(other),
            }
        }
        if !texts.is_empty() {
            rest.insert(
                0,
                Self::Keywords {
                    words,
                    text: texts.join(" | "),
                },
            );
        }
        if rest.len() == 1 {
            return rest.remove(0);
        }
        Self::Alt(rest.into_iter().map(Arc::new).collect())
    }

    /// `a && b`: branches are required unless they are `x?`.
    pub(crate) fn all_of(mut items: Vec<Matcher>) -> Self {
        if items.len() == 1 {
            return items.remove(0);
        }
        let required = items
            .iter()
            .map(|m| !matches!(m, Self::Repeat { marker: Some('?'), .. }))
            .collect();
        Self::unordered(items, Some(required))
    }

    /// `a || b`.
    pub(crate) fn any_of(mut items: Vec<Matcher>) -> Self {
        if items.len() == 1 {
            return items.remove(0);
        }
        Self::unordered(items, None)
    }

    pub(crate) fn unordered(items: Vec<Matcher>, required: Option<Vec<bool>>) -> Self {
        Self::Unordered {
            items: items.into_iter().map(Arc::new).collect(),
            required,
        }
    }

    pub(crate) fn repeat(
        inner: Matcher,
        min: u32,
        max: Option<u32>,
        marker: Option<char>,
        sep: Option<Matcher>,
    ) -> Self {
        let inner = Arc::new(inner);
        let sep = sep.map(|sep| Arc::new(Self::Seq(vec![Arc::new(sep), Arc::clone(&inner)])));
        Self::Repeat {
            inner,
            min,
            max,
            marker,
            sep,
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

#[derive(Debug, Clone, Copy)]
struct Expansion {
    named: usize,
    functions: bool,
}

impl Expansion {
    const NONE: Self = Self {
        named: 0,
        functions: false,
    };

    fn descend(self) -> Self {
        Self {
            named: self.named.saturating_sub(1),
            ..self
        }
    }
}

fn bracket(needed: bool, text: String) -> String {
    if needed { format!("[ {text} ]") } else { text }
}

fn join(items: &[Arc<Matcher>], prec: u8, sep: &str, expand: Expansion) -> String {
    items
        .iter()
        .map(|item| item.render_with(prec, expand))
        .collect::<Vec<_>>()
        .join(sep)
}

fn resolve<'m>(name: &str, target: &'m OnceLock<Arc<Matcher>>) -> Result<&'m Arc<Matcher>> {
    if let Some(resolved) = target.get() {
        return Ok(resolved);
    }
    let resolved = compile::resolve(name)?;
    Ok(target.get_or_init(|| resolved))
}

fn keyword_matches(words: &[String], part: &ValuePart) -> bool {
    let text = part.token.lower();
    if words.iter().any(|w| *w == text) {
        return true;
    }
    part.token.kind == TokenKind::Ident
        && part
            .token
            .name()
            .is_some_and(|name| name.vendor_pos > 0 && words.iter().any(|w| w == name.unprefixed()))
}

/// Match the arguments of a function part against `body`, recording the
/// part on the outer cursor when they do not fit.
fn match_arguments<'v>(part: &'v ValuePart, body: &Arc<Matcher>, cur: &mut Cursor<'v>) -> Result<bool> {
    let Some(args) = &part.args else {
        return body.is_optional();
    };
    if args.is_var {
        return Ok(true);
    }
    let mut inner = Cursor::new(&args.parts);
    if body.matches(&mut inner)? && inner.is_done() {
        return Ok(true);
    }
    cur.bad_function = Some((part, Arc::clone(body)));
    Ok(false)
}

/// Backtracking search over the branches of an unordered group.
///
/// The first pass looks for an assignment matching every counted branch
/// and records the best count seen. If none exists, the second pass stops
/// at the first assignment reaching that best count.
struct Search<'m, 'c, 'v> {
    items: &'m [Arc<Matcher>],
    required: Option<&'m [bool]>,
    cur: &'c mut Cursor<'v>,
    state: Vec<bool>,
    best: usize,
    steps: usize,
}

impl<'m, 'c, 'v> Search<'m, 'c, 'v> {
    fn new(items: &'m [Arc<Matcher>], required: Option<&'m [bool]>, cur: &'c mut Cursor<'v>) -> Self {
        Self {
            items,
            required,
            cur,
            state: vec![false; items.len()],
            best: 0,
            steps: 0,
        }
    }

    fn run(mut self) -> Result<bool> {
        if !self.step(0, false)? {
            self.steps = 0;
            if !self.step(0, true)? {
                return Ok(false);
            }
        }
        Ok(match self.required {
            None => self.best > 0 || self.state.iter().any(|&s| s),
            Some(required) => required.iter().zip(&self.state).all(|(&req, &hit)| !req || hit),
        })
    }

    fn counts(&self, i: usize) -> bool {
        self.required.is_none_or(|required| required[i])
    }

    fn step(&mut self, count: usize, retry: bool) -> Result<bool> {
        for i in 0..self.items.len() {
            if self.state[i] {
                continue;
            }
            self.steps += 1;
            if self.steps > STEP_BUDGET {
                return Ok(false);
            }
            let start = self.cur.index;
            let item = &self.items[i];
            let hit = item.matches(self.cur)? && (self.cur.index > start || !item.is_optional()?);
            if hit {
                self.state[i] = true;
                let next = count + usize::from(self.counts(i));
                if self.step(next, retry)? {
                    return Ok(true);
                }
                self.state[i] = false;
            }
            self.cur.index = start;
        }
        if retry {
            return Ok(count == self.best);
        }
        self.best = self.best.max(count);
        Ok(count == self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_value;

    fn full_match(grammar: &str, value: &str) -> bool {
        let matcher = compile(grammar).unwrap();
        let value = parse_value(value).unwrap();
        let mut cur = Cursor::new(&value.parts);
        matcher.matches(&mut cur).unwrap() && cur.is_done()
    }

    #[test]
    fn test_keywords_and_types() {
        assert!(full_match("auto | <len>", "auto"));
        assert!(full_match("auto | <len>", "AUTO"));
        assert!(full_match("auto | <len>", "10px"));
        assert!(!full_match("auto | <len>", "10%"));
        assert!(full_match("none | -moz-available", "-moz-available"));
    }

    #[test]
    fn test_vendor_prefixed_keyword() {
        assert!(full_match("flex | grid", "-webkit-flex"));
        assert!(!full_match("flex | grid", "-webkit-box"));
    }

    #[test]
    fn test_sequences_and_repeats() {
        assert!(full_match("<len>{1,4}", "1px 2px 3px"));
        assert!(!full_match("<len>{1,4}", "1px 2px 3px 4px 5px"));
        assert!(full_match("<len>#", "1px, 2px"));
        assert!(!full_match("<len>#", "1px 2px"));
        assert!(full_match("<len> <num>?", "1px"));
        assert!(full_match("[ a | b ]+ c", "a b a c"));
    }

    #[test]
    fn test_unordered_groups() {
        assert!(full_match("a && b", "b a"));
        assert!(!full_match("a && b", "a"));
        assert!(full_match("a || b", "b"));
        assert!(full_match("a || b", "b a"));
        assert!(full_match("a && b? && c", "a c"));
        assert!(full_match("a && b? && c", "c b a"));
        assert!(!full_match("a && b? && c", "a b"));
    }

    #[test]
    fn test_functions() {
        assert!(full_match("rect( <len>#{4} )", "rect(1px, 2px, 3px, 4px)"));
        assert!(!full_match("rect( <len>#{4} )", "rect(1px, 2px)"));
        assert!(full_match("url()", "url(x.png)"));
        assert!(full_match("<color>", "rgb(0 0 0 / 50%)"));
        assert!(full_match("<color>", "hsl(120deg, 50%, 50%)"));
        assert!(!full_match("<color>", "rgb(a b c)"));
    }

    #[test]
    fn test_bad_function_is_recorded() {
        let matcher = compile("<color>").unwrap();
        let value = parse_value("rgb(1 2)").unwrap();
        let mut cur = Cursor::new(&value.parts);
        assert!(!matcher.matches(&mut cur).unwrap());
        let (part, _) = cur.bad_function().unwrap();
        assert_eq!(part.function_name(), Some("rgb"));
        assert_eq!(cur.index(), 0);
    }

    #[test]
    fn test_variables_match_any_term() {
        assert!(full_match("<len> <len>", "var(--a) 1px"));
        assert!(full_match("rgb( <num>#{3} )", "rgb(var(--rgb))"));
    }

    #[test]
    fn test_render() {
        assert_eq!(compile("a | b").unwrap().to_string(), "a | b");
        assert_eq!(compile("[ a | b ]{1,2}").unwrap().to_string(), "[ a | b ]{1,2}");
        assert_eq!(compile("<len>#{2}").unwrap().to_string(), "<len>#{2}");
        assert_eq!(compile("<len>#").unwrap().to_string(), "<len>#");
        assert_eq!(compile("a && b? && c").unwrap().to_string(), "a && b? && c");
        assert_eq!(compile("[ a b ] || c").unwrap().to_string(), "a b || c");
        assert_eq!(compile("[ a || b ] c").unwrap().to_string(), "[ a || b ] c");
        assert_eq!(compile("x( <num> )").unwrap().to_string(), "x( <num> )");
    }

    #[test]
    fn test_special_types() {
        assert!(full_match("<border-image-slice>", "10% fill 5"));
        assert!(full_match("<border-image-slice>", "fill 1"));
        assert!(!full_match("<border-image-slice>", "fill"));
        assert!(full_match("<dasharray>", "1 2px, 3"));
    }
}
