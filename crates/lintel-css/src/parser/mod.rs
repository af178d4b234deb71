//! Event-driven CSS parser.
//!
//! [`Parser::parse`] walks a stylesheet once and reports it as a flat list
//! of [`Event`]s, which are also delivered to the listeners registered on
//! the parser. Syntax errors become `error` events and parsing resumes after
//! the offending declaration or block, unless [`ParserOptions::strict`] is
//! set.
//!
//! With [`Parser::parse_with_cache`], the events of top-level style rules are
//! recorded into a [`BlockCache`] and replayed on the next parse of an
//! edited text, skipping the tokenizer for unchanged rules.

mod at_rules;
mod declarations;
mod dispatcher;
mod events;
mod options;
mod selectors;

use std::time::Instant;

use tracing::{debug, debug_span, warn};

pub use dispatcher::{Dispatcher, ListenerId};
pub use events::{Declaration, Event, EventKind, EventType};
pub use options::ParserOptions;

use crate::cache::BlockCache;
use crate::error::{Error, Result};
use crate::logging::{span_names, targets};
use crate::media::MediaQuery;
use crate::properties::Scope;
use crate::reader::Position;
use crate::selector::Selector;
use crate::token::{Token, TokenKind, TokenKind as K};
use crate::tokenizer::{TokenStream, describe_kinds};
use crate::values::{PropertyValue, ValuePart};

const SELECTOR_START: &[TokenKind] = &[
    K::Amp,
    K::Pipe,
    K::Ident,
    K::Star,
    K::Hash,
    K::Dot,
    K::LBracket,
    K::Colon,
];
const COMBINATOR: &[TokenKind] = &[K::Plus, K::Gt, K::Combinator];
const NEST_SEL: &[TokenKind] = &[
    K::Amp,
    K::Pipe,
    K::Ident,
    K::Star,
    K::Hash,
    K::Dot,
    K::LBracket,
    K::Colon,
    K::Plus,
    K::Gt,
    K::Combinator,
];
const NEST_SEL_BLOCK: &[TokenKind] = &[
    K::Amp,
    K::Pipe,
    K::Ident,
    K::Star,
    K::Hash,
    K::Dot,
    K::LBracket,
    K::Colon,
    K::Plus,
    K::Gt,
    K::Combinator,
    K::LBrace,
];
const DECL_END: &[TokenKind] = &[K::Semicolon, K::RBrace];
const PROP_VAL_END: &[TokenKind] = &[K::Important, K::Delim, K::Semicolon, K::RBrace];
const PROP_VAL_END_PAREN: &[TokenKind] =
    &[K::Important, K::Delim, K::Semicolon, K::RBrace, K::RParen];
const PROP_CUSTOM_END: &[TokenKind] = &[
    K::Important,
    K::Delim,
    K::Semicolon,
    K::RBrace,
    K::RBracket,
    K::RParen,
    K::Invalid,
];
const CONDITION: &[TokenKind] = &[K::Function, K::Ident, K::LParen];
const MEDIA_LIST: &[TokenKind] = &[K::Ident, K::LParen];
const MEDIA_VALUE: &[TokenKind] = &[K::Ident, K::Number, K::Dimension];
const STRING_URI: &[TokenKind] = &[K::Str, K::Uri];
const IDENT_STRING: &[TokenKind] = &[K::Ident, K::Str];

/// Counters collected during one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStats {
    /// Tokens scanned from the source. Replayed rules are not scanned.
    pub tokens: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
    /// Rules stored into the cache.
    pub blocks_recorded: usize,
    /// Hits on rules known to produce no messages.
    pub clean_hits: usize,
}

/// Result of a parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub events: Vec<Event>,
    pub stats: ParseStats,
}

impl ParseReport {
    /// Events of one type, in order.
    pub fn of_type(&self, event_type: EventType) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |e| e.event_type() == event_type)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Event> {
        self.of_type(EventType::Error)
    }

    /// Declarations, in order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.events.iter().filter_map(|e| e.kind.declaration())
    }

    /// Positions of error, warning and info events.
    pub fn message_positions(&self) -> Vec<Position> {
        self.events
            .iter()
            .filter(|e| e.kind.is_message())
            .map(|e| e.pos)
            .collect()
    }
}

/// CSS parser.
///
/// # Example
///
/// ```
/// use lintel_css::parser::{EventType, Parser};
///
/// let mut parser = Parser::new();
/// let report = parser.parse("a { color: red }").unwrap();
/// let decl = report.declarations().next().unwrap();
/// assert_eq!(decl.name, "color");
/// assert_eq!(report.of_type(EventType::StartRule).count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    options: ParserOptions,
    dispatcher: Dispatcher,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            dispatcher: Dispatcher::new(),
        }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ParserOptions) {
        self.options = options;
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    /// Listen to events of one type.
    pub fn on<F>(&mut self, event_type: EventType, callback: F) -> ListenerId
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.dispatcher.on(event_type, callback)
    }

    /// Listen to every event.
    pub fn on_any<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.dispatcher.on_any(callback)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.dispatcher.off(id)
    }

    /// Parse a stylesheet.
    ///
    /// Recoverable syntax errors are reported as events. `Err` is returned
    /// for errors in strict mode and for internal failures.
    pub fn parse(&mut self, text: &str) -> Result<ParseReport> {
        self.run(text, None)
    }

    /// Parse a stylesheet, replaying unchanged style rules from `cache` and
    /// recording new ones into it.
    pub fn parse_with_cache(&mut self, text: &str, cache: &mut BlockCache) -> Result<ParseReport> {
        cache.begin(Instant::now());
        self.run(text, Some(cache))
    }

    fn run(&mut self, text: &str, cache: Option<&mut BlockCache>) -> Result<ParseReport> {
        let span = debug_span!(target: targets::PARSER, span_names::PARSE, len = text.len());
        let _guard = span.enter();
        let started = Instant::now();

        let mut session = Session::new(text, self.options, Some(&mut self.dispatcher), cache);
        session.stylesheet()?;
        let report = session.finish();

        debug!(
            target: targets::PARSER,
            events = report.events.len(),
            tokens = report.stats.tokens,
            cache_hits = report.stats.cache_hits,
            elapsed_us = started.elapsed().as_micros() as u64,
            "parsed stylesheet"
        );
        Ok(report)
    }
}

/// Parse a standalone property value such as `1px solid red`.
pub fn parse_value(text: &str) -> Result<PropertyValue> {
    let mut session = Session::new(text, ParserOptions::default(), None, None);
    let value = session.expr(&[], false)?;
    Ok(value.unwrap_or_else(|| PropertyValue::empty(session.stream.position())))
}

/// Parse a single selector. A leading combinator is accepted.
pub fn parse_selector(text: &str) -> Result<Selector> {
    let mut session = Session::new(text, ParserOptions::default(), None, None);
    let first = session.stream.grab();
    let selector = session.selector(Some(first), true)?;
    let last = session.stream.token().clone();
    match selector {
        Some(selector) if last.is_eof() => Ok(selector),
        _ => Err(session.stream.failure("", &last)),
    }
}

/// Parse a media query list such as `screen and (min-width: 600px), print`.
pub fn parse_media_list(text: &str) -> Result<Vec<MediaQuery>> {
    let mut session = Session::new(text, ParserOptions::default(), None, None);
    let list = session.media_query_list(false)?;
    let next = session.stream.grab();
    if !next.is_eof() {
        return Err(session.stream.failure("", &next));
    }
    Ok(list)
}

/// What a `{}` block is, with the data repeated in its start and end events.
#[derive(Debug, Clone)]
enum BlockKind {
    Rule(Vec<Selector>),
    Media(Vec<MediaQuery>),
    Supports,
    Document(Vec<ValuePart>),
    Page {
        id: Option<String>,
        pseudo: Option<String>,
    },
    PageMargin(String),
    FontFace,
    FontPaletteValues(String),
    Viewport(String),
    KeyframeRule(Vec<Token>),
    Container(Option<String>),
    Layer(Option<String>),
    Scope {
        start: Option<Vec<Selector>>,
        end: Option<Vec<Selector>>,
    },
    Property(String),
    CounterStyle(String),
}

impl BlockKind {
    fn start_event(&self) -> EventKind {
        match self.clone() {
            Self::Rule(selectors) => EventKind::StartRule { selectors },
            Self::Media(media) => EventKind::StartMedia { media },
            Self::Supports => EventKind::StartSupports,
            Self::Document(functions) => EventKind::StartDocument { functions },
            Self::Page { id, pseudo } => EventKind::StartPage { id, pseudo },
            Self::PageMargin(margin) => EventKind::StartPageMargin { margin },
            Self::FontFace => EventKind::StartFontFace,
            Self::FontPaletteValues(id) => EventKind::StartFontPaletteValues { id },
            Self::Viewport(prefix) => EventKind::StartViewport { prefix },
            Self::KeyframeRule(keys) => EventKind::StartKeyframeRule { keys },
            Self::Container(name) => EventKind::StartContainer { name },
            Self::Layer(id) => EventKind::StartLayer { id },
            Self::Scope { start, end } => EventKind::StartScope { start, end },
            Self::Property(name) => EventKind::StartProperty { name },
            Self::CounterStyle(name) => EventKind::StartCounterStyle { name },
        }
    }

    fn end_event(self, empty: bool) -> EventKind {
        match self {
            Self::Rule(selectors) => EventKind::EndRule { selectors, empty },
            Self::Media(media) => EventKind::EndMedia { media, empty },
            Self::Supports => EventKind::EndSupports { empty },
            Self::Document(functions) => EventKind::EndDocument { functions, empty },
            Self::Page { id, pseudo } => EventKind::EndPage { id, pseudo, empty },
            Self::PageMargin(margin) => EventKind::EndPageMargin { margin, empty },
            Self::FontFace => EventKind::EndFontFace { empty },
            Self::FontPaletteValues(id) => EventKind::EndFontPaletteValues { id, empty },
            Self::Viewport(prefix) => EventKind::EndViewport { prefix, empty },
            Self::KeyframeRule(keys) => EventKind::EndKeyframeRule { keys, empty },
            Self::Container(name) => EventKind::EndContainer { name, empty },
            Self::Layer(id) => EventKind::EndLayer { id, empty },
            Self::Scope { start, end } => EventKind::EndScope { start, end, empty },
            Self::Property(name) => EventKind::EndProperty { name, empty },
            Self::CounterStyle(name) => EventKind::EndCounterStyle { name, empty },
        }
    }
}

/// How to parse the inside of a block.
#[derive(Debug)]
struct BlockSpec {
    kind: BlockKind,
    /// Already consumed `{`.
    brace: Option<Token>,
    /// Declarations allowed.
    decl: bool,
    /// Page-margin at-rules allowed.
    margins: bool,
    /// Property table for a descriptor block; nested rules are not allowed
    /// when set.
    scope: Option<Scope>,
}

impl BlockSpec {
    fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            brace: None,
            decl: false,
            margins: false,
            scope: None,
        }
    }

    fn brace(mut self, brace: Token) -> Self {
        self.brace = Some(brace);
        self
    }

    fn declarations(mut self, scope: Option<Scope>) -> Self {
        self.decl = true;
        self.scope = scope;
        self
    }

    fn margins(mut self) -> Self {
        self.margins = true;
        self
    }
}

#[derive(Debug)]
struct BlockEnd {
    /// The closing `}`, or end of input.
    end: Token,
    empty: bool,
    closed: bool,
}

/// Events fired since a cacheable rule started.
#[derive(Debug)]
struct Recording {
    start: Position,
    events: Vec<Event>,
}

/// State of one parse.
struct Session<'a, 'p> {
    stream: TokenStream<'a>,
    options: ParserOptions,
    dispatcher: Option<&'p mut Dispatcher>,
    cache: Option<&'p mut BlockCache>,
    events: Vec<Event>,
    /// Collects events of a declaration that may turn out to be a nested
    /// rule.
    deferred: Option<Vec<Event>>,
    recordings: Vec<Recording>,
    in_scope: usize,
    /// Open blocks that accept declarations.
    in_style: usize,
    /// Open blocks.
    depth: usize,
    /// Closing token to consume before skipping a failed declaration.
    pair: Option<TokenKind>,
    /// Set when a globals-only parse reaches the end of the globals.
    halted: bool,
    stats: ParseStats,
}

impl<'a, 'p> Session<'a, 'p> {
    fn new(
        text: &'a str,
        options: ParserOptions,
        dispatcher: Option<&'p mut Dispatcher>,
        cache: Option<&'p mut BlockCache>,
    ) -> Self {
        Self {
            stream: TokenStream::new(text),
            options,
            dispatcher,
            cache,
            events: Vec::new(),
            deferred: None,
            recordings: Vec::new(),
            in_scope: 0,
            in_style: 0,
            depth: 0,
            pair: None,
            halted: false,
            stats: ParseStats::default(),
        }
    }

    fn finish(self) -> ParseReport {
        let mut stats = self.stats;
        stats.tokens = self.stream.tokens_scanned();
        ParseReport {
            events: self.events,
            stats,
        }
    }

    fn fire(&mut self, pos: Position, kind: EventKind) {
        self.fire_event(Event::new(pos, kind));
    }

    fn fire_event(&mut self, event: Event) {
        if let Some(deferred) = &mut self.deferred {
            deferred.push(event);
            return;
        }
        if let Some(recording) = self.recordings.last_mut()
            && recording.start.offset <= event.pos.offset
        {
            recording.events.push(event.clone());
        }
        self.emit(event);
    }

    fn emit(&mut self, event: Event) {
        if let Some(dispatcher) = self.dispatcher.as_deref_mut() {
            dispatcher.dispatch(&event);
        }
        self.events.push(event);
    }

    /// Report a recovered syntax error.
    fn report(&mut self, err: &Error) {
        let pos = err.position().unwrap_or_else(|| self.stream.position());
        warn!(target: targets::PARSER, %pos, "{}", err.message());
        let recoverable = !self.stream.at_source_end();
        self.fire(
            pos,
            EventKind::Error {
                message: err.message().to_string(),
                recoverable,
            },
        );
    }

    fn error_event(&mut self, message: impl Into<String>, pos: Position) {
        self.fire(
            pos,
            EventKind::Error {
                message: message.into(),
                recoverable: true,
            },
        );
    }

    fn warning(&mut self, message: impl Into<String>, pos: Position) {
        self.fire(
            pos,
            EventKind::Warning {
                message: message.into(),
            },
        );
    }

    /// Consume the next raw token if its kind is one of `kinds`, or fail.
    fn must_raw(&mut self, kinds: &[TokenKind]) -> Result<Token> {
        if let Some(tok) = self.stream.matches(kinds)? {
            return Ok(tok);
        }
        let found = self.stream.get(false, true);
        self.stream.unget()?;
        Err(self.stream.failure(&describe_kinds(kinds), &found))
    }

    /// The current token if its kind is one of `kinds`; otherwise it is
    /// given back.
    fn match_current(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>> {
        let tok = self.stream.token().clone();
        if kinds.contains(&tok.kind) {
            return Ok(Some(tok));
        }
        self.stream.unget()?;
        Ok(None)
    }

    /// Give back tokens until `tok` is the current one again.
    fn rewind_to(&mut self, tok: &Token) {
        loop {
            let cur = self.stream.token();
            if cur.pos.offset == tok.pos.offset && cur.kind == tok.kind {
                return;
            }
            if self.stream.unget().is_err() {
                self.restart_at(tok);
                return;
            }
        }
    }

    /// Rescan from `tok`, leaving it as the current token.
    fn restart_at(&mut self, tok: &Token) {
        self.stream.reposition(tok.pos);
        self.stream.get(true, true);
    }

    /// A `(` standing in for a parenthesis the grammar implies.
    fn fake_paren(&self) -> Token {
        Token::new(K::LParen, "(", self.stream.token().pos)
    }

    fn stylesheet(&mut self) -> Result<()> {
        self.fire(Position::START, EventKind::StartStylesheet);
        loop {
            let tok = self.stream.grab();
            if tok.is_eof() {
                break;
            }
            match self.top_level(tok) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) if err.is_recoverable() && !self.options.strict => self.report(&err),
                Err(err) => return Err(err),
            }
            if self.halted {
                break;
            }
        }
        let pos = self.stream.position();
        self.fire(pos, EventKind::EndStylesheet);
        Ok(())
    }

    /// Handle one top-level item. `Ok(false)` ends the parse.
    fn top_level(&mut self, tok: Token) -> Result<bool> {
        if let Some(at) = tok.at_keyword() {
            use crate::token::AtRule;
            let rule = at.rule;
            if self.options.globals_only {
                if !matches!(
                    rule,
                    AtRule::Charset | AtRule::Import | AtRule::Layer | AtRule::Namespace
                ) {
                    self.stream.unget()?;
                    return Ok(false);
                }
            } else if self.options.top_doc_only {
                if rule == AtRule::Document {
                    self.document(&tok)?;
                } else {
                    self.stream.skip_decl_block(false);
                }
                return Ok(true);
            }
            self.at_rule(&tok)?;
            return Ok(true);
        }
        if self.options.top_doc_only {
            self.stream.skip_decl_block(false);
            return Ok(true);
        }
        if tok.kind == K::Cdco {
            return Ok(true);
        }
        if self.options.globals_only {
            self.stream.unget()?;
            return Ok(false);
        }
        if !self.style_rule(tok)? {
            let next = self.stream.grab();
            if !next.is_eof() {
                return Err(self.stream.failure("", &next));
            }
        }
        Ok(true)
    }

    /// Parse a `{}` block whose start event is fired at `start`.
    fn block(&mut self, start: Position, spec: BlockSpec) -> Result<BlockEnd> {
        if spec.brace.is_none() {
            self.stream.must_smart(&[K::LBrace])?;
        }
        self.fire(start, spec.kind.start_event());
        if spec.decl {
            self.in_style += 1;
        }
        self.depth += 1;
        let body = self.block_body(&spec);
        self.depth -= 1;
        if spec.decl {
            self.in_style -= 1;
        }
        let (end, child, closed) = body?;
        let empty = !child;
        self.fire(end.pos, spec.kind.end_event(empty));
        Ok(BlockEnd { end, empty, closed })
    }

    /// Returns the closing token, whether anything was inside, and whether
    /// the block was closed by `}`.
    fn block_body(&mut self, spec: &BlockSpec) -> Result<(Token, bool, bool)> {
        let mut child = false;
        let mut prev = None;
        loop {
            let tok = self.stream.get(true, false);
            match tok.kind {
                K::RBrace => return Ok((tok, child, true)),
                K::Eof => return Err(self.stream.failure("\"}\"", &tok)),
                K::Semicolon => continue,
                K::UserVar => {
                    child = true;
                    continue;
                }
                _ => {}
            }
            let key = (tok.pos.offset, tok.kind);
            if prev == Some(key) {
                return Err(self.stream.failure("", &tok));
            }
            prev = Some(key);
            match self.block_item(tok, spec) {
                Ok(()) => child = true,
                Err(err) if err.is_recoverable() && !self.options.strict => {
                    self.declaration_failed(&err, false)?;
                    if self.stream.at_source_end() {
                        let eof = self.stream.grab();
                        return Ok((eof, child, false));
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn block_item(&mut self, tok: Token, spec: &BlockSpec) -> Result<()> {
        if let Some(at) = tok.at_keyword() {
            use crate::token::AtRule;
            return match at.rule {
                AtRule::PageMargin if spec.margins => self.margin(&tok),
                AtRule::Charset | AtRule::Import | AtRule::Namespace => {
                    Err(self.stream.failure("", &tok))
                }
                _ => self.at_rule(&tok),
            };
        }
        let star = tok.kind == K::Star && tok.flags.star_hack && self.options.star_hack;
        if self.in_style > 0 && (tok.kind == K::Ident || star) {
            let opts = declarations::DeclOptions {
                scope: spec.scope.unwrap_or_default(),
                ..Default::default()
            };
            if self.declaration(&tok, opts)? {
                return Ok(());
            }
        }
        if spec.scope.is_none()
            && !tok.flags.custom_property
            && (self.in_style == 0 || NEST_SEL.contains(&tok.kind))
            && self.style_rule(tok.clone())?
        {
            return Ok(());
        }
        Err(self.stream.failure("", &tok))
    }

    /// Parse a style rule starting at `tok`. `Ok(false)` when `tok` does not
    /// start a selector; the token is then given back.
    fn style_rule(&mut self, tok: Token) -> Result<bool> {
        let can_cache = self.in_style == 0 && self.in_scope == 0 && self.cache.is_some();
        if can_cache && self.replay(&tok) {
            return Ok(true);
        }
        if can_cache {
            self.stats.cache_misses += 1;
            self.recordings.push(Recording {
                start: tok.pos,
                events: Vec::new(),
            });
        }
        let mut brace_seen = false;
        let result = self.style_rule_body(tok, &mut brace_seen);
        let recording = if can_cache { self.recordings.pop() } else { None };
        match result {
            Ok(None) => Ok(false),
            Ok(Some(end)) => {
                if let Some(recording) = recording
                    && end.closed
                    && !end.empty
                    && let Some(cache) = self.cache.as_deref_mut()
                {
                    let close = &end.end;
                    let end_pos = Position::new(close.pos.line, close.pos.col + 1, close.end);
                    cache.store(self.stream.source(), recording.start, end_pos, recording.events);
                    self.stats.blocks_recorded += 1;
                }
                Ok(true)
            }
            Err(err) if err.is_recoverable() && !self.options.strict => {
                self.declaration_failed(&err, brace_seen)?;
                if brace_seen {
                    self.stream.match_smart(&[K::RBrace])?;
                }
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    fn style_rule_body(&mut self, tok: Token, brace_seen: &mut bool) -> Result<Option<BlockEnd>> {
        let amps_before = self
            .stream
            .amp_count()
            .saturating_sub(usize::from(tok.kind == K::Amp));
        let Some(selectors) = self.selectors_group(Some(tok.clone()), true, false)? else {
            self.stream.unget()?;
            return Ok(None);
        };
        if self.in_scope == 0
            && self.in_style == 0
            && (self.stream.amp_count() > amps_before || selectors.iter().any(Selector::is_relative))
        {
            self.error_event("Nested selector must be inside a style rule.", tok.pos);
        }
        let brace = self.stream.expect_current(&[K::LBrace])?;
        *brace_seen = true;
        let start = selectors[0].pos;
        let spec = BlockSpec::new(BlockKind::Rule(selectors))
            .brace(brace)
            .declarations(None);
        self.block(start, spec).map(Some)
    }

    /// Replay a cached rule starting at `tok`.
    fn replay(&mut self, tok: &Token) -> bool {
        let source = self.stream.source();
        let Some(cache) = self.cache.as_deref_mut() else {
            return false;
        };
        let Some(replay) = cache.find(source, tok.pos) else {
            return false;
        };
        self.stats.cache_hits += 1;
        if replay.clean {
            self.stats.clean_hits += 1;
        }
        for event in replay.events {
            self.emit(event);
        }
        self.stream.reposition(replay.end);
        true
    }

    /// Recover from a failed declaration or item and report `err`.
    fn declaration_failed(&mut self, err: &Error, in_block: bool) -> Result<()> {
        if let Some(pair) = self.pair.take() {
            // Syntax errors while consuming up to the closer are already covered by `err`.
            match self.expr(&[pair], true) {
                Err(inner) if !inner.is_recoverable() => return Err(inner),
                _ => {}
            }
        }
        self.stream.skip_decl_block(in_block);
        self.report(err);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    fn parse(css: &str) -> ParseReport {
        Parser::new().parse(css).unwrap()
    }

    fn names(report: &ParseReport) -> Vec<&'static str> {
        report.events.iter().map(|e| e.kind.name()).collect()
    }

    fn messages(report: &ParseReport) -> Vec<String> {
        report
            .events
            .iter()
            .filter_map(|e| e.kind.message().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_simple_rule() {
        let report = parse("a { color: red }");
        assert_eq!(
            names(&report),
            [
                "start-stylesheet",
                "start-rule",
                "property",
                "end-rule",
                "end-stylesheet"
            ]
        );
        let decl = report.declarations().next().unwrap();
        assert_eq!(decl.name, "color");
        assert_eq!(decl.value.text, "red");
        assert_eq!(decl.name_pos, Position::new(1, 5, 4));
        assert!(decl.invalid.is_none());
        assert!(!decl.important);
    }

    #[test]
    fn test_important_and_multiple() {
        let report = parse("p{margin:0 auto!important;color:#fff}");
        let decls: Vec<_> = report.declarations().collect();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].value.text, "0 auto");
        assert!(decls[0].important);
        assert_eq!(decls[1].value.text, "#fff");
    }

    #[test]
    fn test_empty_value_recovers_inside_block() {
        let report = parse("a { color: } b { color: red }");
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.of_type(EventType::StartRule).count(), 2);
        assert_eq!(report.declarations().count(), 1);
    }

    #[test]
    fn test_bad_declaration_skipped() {
        let report = parse("a { color red; width: 1px }");
        assert_eq!(report.errors().count(), 1);
        let decls: Vec<_> = report.declarations().map(|d| d.name.as_str()).collect();
        assert_eq!(decls, ["width"]);
    }

    #[test]
    fn test_strict_mode_fails() {
        let mut parser = Parser::with_options(ParserOptions::new().with_strict(true));
        assert!(parser.parse("a { color red }").is_err());
        assert!(parser.parse("@foo bar;").is_err());
        assert!(parser.parse("a { color: red }").is_ok());
    }

    #[test]
    fn test_unknown_at_rule_skipped() {
        let report = parse("@foo bar { x: y } a { color: red }");
        assert_eq!(report.errors().count(), 0);
        assert_eq!(report.declarations().count(), 1);
    }

    #[test]
    fn test_nested_rules() {
        let report = parse("a { color: red; &:hover { color: blue } .b { top: 0 } }");
        assert_eq!(report.errors().count(), 0);
        let rules: Vec<String> = report
            .of_type(EventType::StartRule)
            .filter_map(|e| e.kind.summary())
            .collect();
        assert_eq!(rules, ["a", "&:hover", ".b"]);
        assert_eq!(report.declarations().count(), 3);
    }

    #[test]
    fn test_nested_pseudo_selector_without_amp() {
        let report = parse("a { b:hover { color: red } }");
        assert_eq!(report.errors().count(), 0);
        assert_eq!(report.of_type(EventType::StartRule).count(), 2);
        assert_eq!(report.declarations().count(), 1);
    }

    #[test]
    fn test_misplaced_nested_selector() {
        let report = parse("& .a { color: red }");
        assert_eq!(messages(&report), ["Nested selector must be inside a style rule."]);
        let report = parse("> .a { color: red }");
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_star_and_underscore_hacks() {
        let options = ParserOptions::new()
            .with_star_hack(true)
            .with_underscore_hack(true);
        let report = Parser::with_options(options)
            .parse("a { *zoom: 1; _height: 1px }")
            .unwrap();
        let decls: Vec<_> = report.declarations().collect();
        assert_eq!(decls.len(), 2);
        assert_eq!((decls[0].name.as_str(), decls[0].hack), ("zoom", Some('*')));
        assert_eq!(decls[0].name_pos.col, 5);
        assert_eq!((decls[1].name.as_str(), decls[1].hack), ("height", Some('_')));
    }

    #[test]
    fn test_globals_only() {
        let options = ParserOptions::new().with_globals_only(true);
        let report = Parser::with_options(options)
            .parse("@charset \"utf-8\"; @import url(a.css); a { color: red }")
            .unwrap();
        assert_eq!(
            names(&report),
            ["start-stylesheet", "charset", "import", "end-stylesheet"]
        );
    }

    #[test]
    fn test_top_doc_only() {
        let options = ParserOptions::new().with_top_doc_only(true);
        let report = Parser::with_options(options)
            .parse("a { color: red } @-moz-document url-prefix(http://x) { b { x: y } } c {}")
            .unwrap();
        assert_eq!(
            names(&report),
            [
                "start-stylesheet",
                "start-document",
                "end-document",
                "end-stylesheet"
            ]
        );
        let end = report.of_type(EventType::EndDocument).next().unwrap();
        assert_eq!(end.kind.is_empty_block(), Some(false));
    }

    #[test]
    fn test_listeners() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut parser = Parser::new();
        let log = seen.clone();
        let id = parser.on(EventType::Property, move |e| {
            if let Some(decl) = e.kind.declaration() {
                log.lock().push(decl.name.clone());
            }
        });
        parser.parse("a { top: 0; left: 0 }").unwrap();
        assert_eq!(*seen.lock(), ["top", "left"]);
        assert!(parser.off(id));
        parser.parse("a { right: 0 }").unwrap();
        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_hex_color_warning() {
        let report = parse("a { color: #ggg }");
        assert_eq!(messages(&report), ["Expected a hex color but found \"#ggg\"."]);
    }

    #[test]
    fn test_invalid_value_is_attached() {
        let report = parse("a { color: 12px }");
        let decl = report.declarations().next().unwrap();
        assert!(decl.invalid.is_some());
        assert_eq!(report.errors().count(), 0);
        let report = Parser::with_options(ParserOptions::new().with_no_validation(true))
            .parse("a { color: 12px }")
            .unwrap();
        assert!(report.declarations().next().unwrap().invalid.is_none());
    }

    #[test]
    fn test_unterminated_block() {
        let report = parse("a { color: red");
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].kind,
            EventKind::Error {
                recoverable: false,
                ..
            }
        ));
        assert_eq!(report.declarations().count(), 0);
    }

    #[test]
    fn test_value_helpers() {
        let value = parse_value("1px solid red").unwrap();
        assert_eq!(value.len(), 3);
        assert!(parse_value("").unwrap().is_empty());
        let selector = parse_selector("ul > li").unwrap();
        assert_eq!(selector.text, "ul > li");
        assert!(parse_selector("a {").is_err());
        assert!(parse_media_list("screen and").is_err());
    }

    #[test]
    fn test_unbalanced_closer_scan_is_recovered() {
        let mut session = Session::new("[ ) rest", ParserOptions::new(), None, None);
        session.pair = Some(K::RParen);
        let err = Error::syntax("Expected RPAREN.", Position::new(1, 1, 0));
        assert!(session.declaration_failed(&err, false).is_ok());
        assert!(session.pair.is_none());
        let report = session.finish();
        assert_eq!(report.errors().count(), 1);
    }
}
