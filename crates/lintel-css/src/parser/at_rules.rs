//! At-rules, conditions and media queries.

use super::declarations::DeclOptions;
use super::{
    BlockKind, BlockSpec, CONDITION, IDENT_STRING, MEDIA_LIST, MEDIA_VALUE, STRING_URI, Session,
};
use crate::error::{Error, Result};
use crate::media::{MediaFeature, MediaQuery};
use crate::parser::EventKind;
use crate::properties::Scope;
use crate::selector::Selector;
use crate::token::{AtRule, Token, TokenKind as K};
use crate::values::{PropertyValue, ValuePart};

/// Start and end selectors of `@scope`, and its `{`.
type ScopePrelude = (Option<Vec<Selector>>, Option<Vec<Selector>>, Token);

/// Extra syntax a condition accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CondHook {
    None,
    /// `selector(...)` in `@supports`.
    Supports,
    /// Size features and `style(...)` in `@container`.
    Container,
}

/// How the `)` closing a condition is consumed.
enum Close {
    Read,
    Current,
    Done,
}

impl Session<'_, '_> {
    pub(super) fn at_rule(&mut self, start: &Token) -> Result<()> {
        let Some(at) = start.at_keyword() else {
            return Err(self.stream.failure("", start));
        };
        match at.rule {
            AtRule::Charset => self.charset(start),
            AtRule::Container => self.container(start),
            AtRule::CounterStyle => self.counter_style(start),
            AtRule::Document => self.document(start),
            AtRule::FontFace => self.font_face(start),
            AtRule::FontPaletteValues => self.font_palette_values(start),
            AtRule::Import => self.import(start),
            AtRule::Keyframes => self.keyframes(start),
            AtRule::Layer => self.layer(start),
            AtRule::Media => self.media(start),
            AtRule::Namespace => self.namespace(start),
            AtRule::Page => self.page(start),
            AtRule::Property => self.property_rule(start),
            AtRule::Scope => self.scope(start),
            AtRule::Supports => self.supports(start),
            AtRule::Viewport => self.viewport(start),
            AtRule::PageMargin | AtRule::Unknown => self.unknown_at_rule(start),
        }
    }

    fn charset(&mut self, start: &Token) -> Result<()> {
        let tok = self.stream.must_smart(&[K::Str])?;
        self.stream.must_smart(&[K::Semicolon])?;
        let charset = tok.string_value().unwrap_or_default().to_string();
        self.fire(start.pos, EventKind::Charset { charset });
        Ok(())
    }

    fn container(&mut self, start: &Token) -> Result<()> {
        let mut name = None;
        if let Some(tok) = self.stream.match_smart(&[K::Ident])? {
            if tok.is("not") {
                self.stream.unget()?;
            } else {
                name = Some(tok.text);
            }
        }
        self.condition(None, CondHook::Container)?;
        self.block(start.pos, BlockSpec::new(BlockKind::Container(name)))?;
        Ok(())
    }

    fn counter_style(&mut self, start: &Token) -> Result<()> {
        let name = self.stream.must_smart(&[K::Ident])?.text;
        let spec = BlockSpec::new(BlockKind::CounterStyle(name))
            .declarations(Some(Scope::CounterStyle));
        self.block(start.pos, spec)?;
        Ok(())
    }

    pub(super) fn document(&mut self, start: &Token) -> Result<()> {
        if self.depth > 0 {
            self.error_event("Nested @document produces broken code", start.pos);
        }
        let mut functions = Vec::new();
        loop {
            let tok = self.stream.must_smart(&[K::Function, K::Ident, K::Uri])?;
            match tok.kind {
                K::Uri => functions.push(ValuePart::new(tok, false)),
                K::Function => {
                    let pos = tok.pos;
                    let part = self.function(tok, false)?;
                    if part.function_name() == Some("regexp") {
                        functions.push(part);
                    } else {
                        self.warning("Unknown document function", pos);
                    }
                }
                _ => self.warning("Unknown document function", tok.pos),
            }
            if self.stream.match_smart(&[K::Comma])?.is_none() {
                break;
            }
        }
        let brace = self.stream.must_smart(&[K::LBrace])?;
        if self.options.top_doc_only {
            self.fire(
                start.pos,
                EventKind::StartDocument {
                    functions: functions.clone(),
                },
            );
            self.stream.skip_decl_block(true);
            let close = self.stream.must_smart(&[K::RBrace])?;
            let inner = &self.stream.source()[brace.end..close.pos.offset];
            let empty = inner.trim().is_empty();
            self.fire(close.pos, EventKind::EndDocument { functions, empty });
            return Ok(());
        }
        let spec = BlockSpec::new(BlockKind::Document(functions)).brace(brace);
        self.block(start.pos, spec)?;
        Ok(())
    }

    fn font_face(&mut self, start: &Token) -> Result<()> {
        let spec = BlockSpec::new(BlockKind::FontFace).declarations(Some(Scope::FontFace));
        self.block(start.pos, spec)?;
        Ok(())
    }

    fn font_palette_values(&mut self, start: &Token) -> Result<()> {
        let id = self.stream.must_smart(&[K::Ident])?.text;
        let spec = BlockSpec::new(BlockKind::FontPaletteValues(id))
            .declarations(Some(Scope::FontPaletteValues));
        self.block(start.pos, spec)?;
        Ok(())
    }

    fn import(&mut self, start: &Token) -> Result<()> {
        let uri_tok = self.stream.must_smart(STRING_URI)?;
        let uri = uri_tok.string_value().unwrap_or_default().to_string();
        let mut layer = None;
        let mut tok = self.stream.grab();
        if tok.kind == K::Function && tok.function_name() == Some("layer") {
            let first = self.stream.must_smart(&[K::Ident])?;
            layer = Some(self.layer_name(first)?);
            self.stream.must_smart(&[K::RParen])?;
            tok = self.stream.grab();
        } else if tok.is_ident_in(&["layer"]) {
            layer = Some(String::new());
            tok = self.stream.grab();
        }
        let media = if tok.kind == K::Function && tok.function_name() == Some("supports") {
            let paren = self.fake_paren();
            self.condition_in_parens(Some(paren), CondHook::Supports)?;
            self.media_query_list(false)?
        } else {
            self.media_query_list(true)?
        };
        self.stream.must_smart(&[K::Semicolon])?;
        self.fire(start.pos, EventKind::Import { uri, media, layer });
        Ok(())
    }

    fn keyframes(&mut self, start: &Token) -> Result<()> {
        let prefix = start
            .name()
            .map(|n| n.prefix().to_string())
            .unwrap_or_default();
        let name_tok = self.stream.must_smart(IDENT_STRING)?;
        let name = name_tok
            .string_value()
            .map_or_else(|| name_tok.text.clone(), str::to_string);
        self.stream.must_smart(&[K::LBrace])?;
        self.fire(
            start.pos,
            EventKind::StartKeyframes {
                name: name.clone(),
                prefix: prefix.clone(),
            },
        );
        self.depth += 1;
        let rules = self.keyframe_rules();
        self.depth -= 1;
        let empty = rules? == 0;
        let close = self.stream.must_smart(&[K::RBrace])?;
        self.fire(close.pos, EventKind::EndKeyframes { name, prefix, empty });
        Ok(())
    }

    /// Parse keyframe rules up to the closing `}`; returns their number.
    fn keyframe_rules(&mut self) -> Result<usize> {
        let mut count = 0;
        while let Some(first) = self.key()? {
            let mut keys = vec![first];
            while self.stream.match_smart(&[K::Comma])?.is_some() {
                match self.key()? {
                    Some(key) => keys.push(key),
                    None => return Err(self.key_expected()),
                }
            }
            let pos = keys[0].pos;
            let spec =
                BlockSpec::new(BlockKind::KeyframeRule(keys)).declarations(Some(Scope::Global));
            self.block(pos, spec)?;
            count += 1;
        }
        Ok(count)
    }

    fn key(&mut self) -> Result<Option<Token>> {
        if let Some(tok) = self.stream.match_smart(&[K::Percentage])? {
            return Ok(Some(tok));
        }
        self.stream.match_smart_text(&[K::Ident], &["from", "to"])
    }

    fn key_expected(&mut self) -> Error {
        let found = self.stream.grab();
        if let Err(err) = self.stream.unget() {
            return err;
        }
        self.stream
            .failure("percentage%, \"from\", \"to\"", &found)
    }

    fn layer(&mut self, start: &Token) -> Result<()> {
        let mut ids = Vec::new();
        loop {
            let mut tok = self.stream.grab();
            if tok.kind == K::Ident {
                ids.push(self.layer_name(tok)?);
                tok = self.stream.grab();
            }
            if tok.kind == K::LBrace {
                if self.options.globals_only {
                    self.halted = true;
                    return Ok(());
                }
                if ids.len() > 1 {
                    self.warning("@layer block cannot have multiple ids", start.pos);
                }
                let spec = BlockSpec::new(BlockKind::Layer(ids.into_iter().next())).brace(tok);
                self.block(start.pos, spec)?;
                return Ok(());
            }
            if tok.kind != K::Comma {
                break;
            }
        }
        self.stream.expect_current(&[K::Semicolon])?;
        self.fire(start.pos, EventKind::Layer { ids });
        Ok(())
    }

    /// Read a dotted layer name whose first identifier is `first`.
    pub(super) fn layer_name(&mut self, first: Token) -> Result<String> {
        let mut name = first.text;
        while self.stream.matches(&[K::Dot])?.is_some() {
            let part = self.must_raw(&[K::Ident])?;
            name.push('.');
            name.push_str(&part.text);
        }
        Ok(name)
    }

    fn media(&mut self, start: &Token) -> Result<()> {
        let media = self.media_query_list(false)?;
        self.block(start.pos, BlockSpec::new(BlockKind::Media(media)))?;
        Ok(())
    }

    fn namespace(&mut self, start: &Token) -> Result<()> {
        let prefix = self.stream.match_smart(&[K::Ident])?.map(|t| t.text);
        let tok = self.stream.must_smart(STRING_URI)?;
        let uri = tok.string_value().unwrap_or_default().to_string();
        self.stream.must_smart(&[K::Semicolon])?;
        self.fire(start.pos, EventKind::Namespace { prefix, uri });
        Ok(())
    }

    fn page(&mut self, start: &Token) -> Result<()> {
        let id = match self.stream.match_smart(&[K::Ident])? {
            Some(tok) if tok.is("auto") => return Err(self.stream.failure("", &tok)),
            Some(tok) => Some(tok.text),
            None => None,
        };
        let pseudo = match self.stream.matches(&[K::Colon])? {
            Some(_) => Some(self.must_raw(&[K::Ident])?.text),
            None => None,
        };
        let spec = BlockSpec::new(BlockKind::Page { id, pseudo })
            .declarations(Some(Scope::Page))
            .margins();
        self.block(start.pos, spec)?;
        Ok(())
    }

    /// A page-margin box such as `@top-left` inside `@page`.
    pub(super) fn margin(&mut self, start: &Token) -> Result<()> {
        let margin = start.name().map(|n| n.lower.clone()).unwrap_or_default();
        let spec = BlockSpec::new(BlockKind::PageMargin(margin)).declarations(Some(Scope::Page));
        self.block(start.pos, spec)?;
        Ok(())
    }

    fn property_rule(&mut self, start: &Token) -> Result<()> {
        let name = self.stream.must_smart(&[K::Ident])?.text;
        let spec = BlockSpec::new(BlockKind::Property(name)).declarations(Some(Scope::Property));
        self.block(start.pos, spec)?;
        Ok(())
    }

    fn scope(&mut self, start: &Token) -> Result<()> {
        let (from, to, brace) = match self.scope_prelude() {
            Ok(prelude) => prelude,
            Err(err) if err.is_recoverable() && !self.options.strict => {
                self.restart_at(start);
                self.declaration_failed(&err, false)?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let spec = BlockSpec::new(BlockKind::Scope {
            start: from,
            end: to,
        })
        .brace(brace);
        self.in_scope += 1;
        let result = self.block(start.pos, spec);
        self.in_scope -= 1;
        result?;
        Ok(())
    }

    /// `[(<start>)] [to (<end>)] {`
    fn scope_prelude(&mut self) -> Result<ScopePrelude> {
        let mut from = None;
        let mut to = None;
        let mut tok = self.stream.grab();
        if tok.kind == K::LParen {
            from = self.selectors_group(None, true, true)?;
            self.stream.expect_current(&[K::RParen])?;
            tok = self.stream.grab();
        }
        if tok.is_ident_in(&["to"]) {
            self.stream.must_smart(&[K::LParen])?;
            to = self.selectors_group(None, true, true)?;
            self.stream.expect_current(&[K::RParen])?;
            tok = self.stream.grab();
        }
        if tok.kind != K::LBrace {
            return Err(self.stream.failure("\"{\"", &tok));
        }
        Ok((from, to, tok))
    }

    fn supports(&mut self, start: &Token) -> Result<()> {
        self.condition(None, CondHook::Supports)?;
        self.block(start.pos, BlockSpec::new(BlockKind::Supports))?;
        Ok(())
    }

    fn viewport(&mut self, start: &Token) -> Result<()> {
        let prefix = start
            .name()
            .map(|n| n.prefix().to_string())
            .unwrap_or_default();
        let spec = BlockSpec::new(BlockKind::Viewport(prefix)).declarations(None);
        self.block(start.pos, spec)?;
        Ok(())
    }

    pub(super) fn unknown_at_rule(&mut self, start: &Token) -> Result<()> {
        if self.options.strict {
            return Err(Error::syntax(format!("Unknown rule: {}", start.text), start.pos));
        }
        self.stream.skip_decl_block(false);
        Ok(())
    }

    /// `not <in-parens>` or `<in-parens> [and|or <in-parens>]*`, with a
    /// single kind of joiner.
    pub(super) fn condition(&mut self, tok: Option<Token>, hook: CondHook) -> Result<()> {
        let tok = match tok {
            Some(tok) => tok,
            None => self.stream.grab(),
        };
        if tok.is_ident_in(&["not"]) {
            return self.condition_in_parens(None, hook);
        }
        self.condition_in_parens(Some(tok), hook)?;
        let mut joiner: Option<&'static str> = None;
        loop {
            let found = match joiner {
                Some(word) => self.stream.match_smart_text(&[K::Ident], &[word])?,
                None => self.stream.match_smart_text(&[K::Ident], &["and", "or"])?,
            };
            let Some(found) = found else {
                return Ok(());
            };
            joiner.get_or_insert(if found.is("and") { "and" } else { "or" });
            self.condition_in_parens(None, hook)?;
        }
    }

    pub(super) fn condition_in_parens(&mut self, tok: Option<Token>, hook: CondHook) -> Result<()> {
        let tok = match tok {
            Some(tok) => tok,
            None => self.stream.must_smart(CONDITION)?,
        };
        let close = if let Some(close) = self.condition_hook(hook, &tok, None)? {
            close
        } else if tok.kind == K::Function {
            self.function(tok, false)?;
            Close::Done
        } else if tok.kind == K::LParen
            && let Some(inner) = self.stream.match_smart(CONDITION)?
        {
            self.paren_condition(hook, &tok, inner)?
        } else {
            Close::Read
        };
        match close {
            Close::Read => {
                self.stream.must_smart(&[K::RParen])?;
            }
            Close::Current => {
                self.stream.expect_current(&[K::RParen])?;
            }
            Close::Done => {}
        }
        Ok(())
    }

    /// The inside of `(`, starting with `inner`.
    fn paren_condition(&mut self, hook: CondHook, paren: &Token, inner: Token) -> Result<Close> {
        if let Some(close) = self.condition_hook(hook, &inner, Some(paren))? {
            return Ok(close);
        }
        if inner.kind != K::Ident {
            self.condition(Some(inner), CondHook::None)?;
            return Ok(Close::Read);
        }
        if inner.is("not") {
            self.condition_in_parens(None, CondHook::None)?;
            return Ok(Close::Read);
        }
        match self.stream.match_smart(&[K::Colon, K::LParen])? {
            Some(colon) if colon.kind == K::Colon => {
                let opts = DeclOptions {
                    colon: Some(colon),
                    in_parens: true,
                    ..Default::default()
                };
                self.declaration(&inner, opts)?;
                Ok(Close::Done)
            }
            Some(_) => {
                self.expr(&[K::RParen], true)?;
                self.stream.expect_current(&[K::RParen])?;
                Ok(Close::Read)
            }
            None => {
                if self.stream.peek(false, false)? == K::RParen {
                    return Ok(Close::Read);
                }
                self.expr(&[K::RParen], true)?;
                Ok(Close::Current)
            }
        }
    }

    /// Rule-specific forms inside a condition. `paren` is the `(` preceding
    /// `tok`, if any.
    fn condition_hook(
        &mut self,
        hook: CondHook,
        tok: &Token,
        paren: Option<&Token>,
    ) -> Result<Option<Close>> {
        let function = |name: &str| {
            paren.is_none() && tok.kind == K::Function && tok.function_name() == Some(name)
        };
        match hook {
            CondHook::Supports if function("selector") => {
                let Some(selector) = self.selector(None, false)? else {
                    let cur = self.stream.token().clone();
                    return Err(self.stream.failure("a selector", &cur));
                };
                self.fire(selector.pos, EventKind::SupportsSelector { selector });
                Ok(Some(Close::Current))
            }
            CondHook::Container if function("style") => {
                let paren = self.fake_paren();
                self.condition(Some(paren), CondHook::None)?;
                Ok(Some(Close::Done))
            }
            CondHook::Container if tok.kind == K::Ident && !tok.is("not") => {
                let Some(paren) = paren.cloned() else {
                    return Ok(None);
                };
                self.stream.unget()?;
                self.media_expression(Some(paren))?;
                Ok(Some(Close::Done))
            }
            _ => Ok(None),
        }
    }

    /// Comma-separated media queries. With `reuse`, the current token is the
    /// first token of the list.
    pub(super) fn media_query_list(&mut self, reuse: bool) -> Result<Vec<MediaQuery>> {
        let mut list = Vec::new();
        let mut next_query = if reuse {
            self.match_current(MEDIA_LIST)?
        } else {
            self.stream.match_smart(MEDIA_LIST)?
        };
        while let Some(tok) = next_query.take() {
            let modifier = tok.is_ident_in(&["only", "not"]).then(|| tok.clone());
            let head = match &modifier {
                Some(_) => self.stream.must_smart(MEDIA_LIST)?,
                None => tok,
            };
            let media_type = (head.kind == K::Ident).then(|| head.text.clone());
            let mut features = Vec::new();
            if media_type.is_none() {
                features.push(self.media_expression(Some(head.clone()))?);
            }
            let joiners: &[&str] = if media_type.is_some() {
                &["and"]
            } else {
                &["and", "or"]
            };
            while self.stream.match_smart_text(&[K::Ident], joiners)?.is_some() {
                features.push(self.media_expression(None)?);
            }
            let first = modifier.as_ref().unwrap_or(&head);
            let pos = first.pos;
            let end = self.stream.token().end.max(pos.offset);
            let text = self.stream.source()[pos.offset..end].trim_end().to_string();
            list.push(MediaQuery {
                modifier: modifier.map(|m| m.text),
                media_type,
                features,
                text,
                pos,
            });
            if self.stream.match_smart(&[K::Comma])?.is_none() {
                break;
            }
            next_query = self.stream.match_smart(MEDIA_LIST)?;
        }
        Ok(list)
    }

    /// `( <feature> [: <value>] )` or a range such as `(400px <= width)`.
    pub(super) fn media_expression(&mut self, start: Option<Token>) -> Result<MediaFeature> {
        let paren = match start {
            Some(tok) => tok,
            None => self.stream.grab(),
        };
        if paren.kind != K::LParen {
            return Err(self.stream.failure("\"(\"", &paren));
        }
        let feature = self.stream.must_smart(MEDIA_VALUE)?;
        let value = self.expr(&[K::RParen], true)?;
        self.stream.expect_current(&[K::RParen])?;
        let value = value.and_then(|value| self.strip_colon(value));
        Ok(MediaFeature {
            name: feature.text,
            value,
            pos: paren.pos,
        })
    }

    fn strip_colon(&self, value: PropertyValue) -> Option<PropertyValue> {
        match value.parts.first() {
            Some(first) if first.token.kind == K::Colon => {
                let rest = value.parts[1..].to_vec();
                (!rest.is_empty()).then(|| PropertyValue::new(rest, self.stream.source()))
            }
            _ => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{EventKind, EventType, ParseReport, Parser, ParserOptions};

    fn parse(css: &str) -> ParseReport {
        Parser::new().parse(css).unwrap()
    }

    fn names(report: &ParseReport) -> Vec<&'static str> {
        report.events.iter().map(|e| e.kind.name()).collect()
    }

    #[test]
    fn test_import_forms() {
        let report = parse(
            "@import \"a.css\" screen; \
             @import url(b.css) layer(base.theme) supports(display: grid) print; \
             @import 'c.css' layer;",
        );
        assert_eq!(report.errors().count(), 0);
        let imports: Vec<_> = report
            .of_type(EventType::Import)
            .map(|e| match &e.kind {
                EventKind::Import { uri, media, layer } => {
                    (uri.clone(), media.len(), layer.clone())
                }
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(
            imports,
            [
                ("a.css".to_string(), 1, None),
                ("b.css".to_string(), 1, Some("base.theme".to_string())),
                ("c.css".to_string(), 0, Some(String::new())),
            ]
        );
    }

    #[test]
    fn test_charset_and_namespace() {
        let report = parse("@charset \"utf-8\"; @namespace svg url(http://www.w3.org/2000/svg);");
        assert_eq!(
            report.events[1].kind,
            EventKind::Charset {
                charset: "utf-8".into()
            }
        );
        assert_eq!(
            report.events[2].kind,
            EventKind::Namespace {
                prefix: Some("svg".into()),
                uri: "http://www.w3.org/2000/svg".into()
            }
        );
    }

    #[test]
    fn test_media_block() {
        let report = parse("@media screen and (max-width: 100px) { a { color: red } }");
        assert_eq!(
            names(&report),
            [
                "start-stylesheet",
                "start-media",
                "start-rule",
                "property",
                "end-rule",
                "end-media",
                "end-stylesheet"
            ]
        );
        let EventKind::StartMedia { media } = &report.events[1].kind else {
            panic!("expected start-media");
        };
        assert_eq!(media[0].text, "screen and (max-width: 100px)");
        assert_eq!(media[0].features[0].name, "max-width");
    }

    #[test]
    fn test_supports_conditions() {
        let report = parse(
            "@supports (display: grid) and (not (display: inline-grid)) { a { top: 0 } } \
             @supports selector(a > b) { }",
        );
        assert_eq!(report.errors().count(), 0);
        let decls: Vec<_> = report.declarations().collect();
        assert_eq!(decls.len(), 3);
        assert!(decls[0].in_parens && decls[1].in_parens && !decls[2].in_parens);
        let selector = report.of_type(EventType::SupportsSelector).next().unwrap();
        assert_eq!(selector.kind.summary().as_deref(), Some("a > b"));
        let end = report.of_type(EventType::EndSupports).last().unwrap();
        assert_eq!(end.kind.is_empty_block(), Some(true));
    }

    #[test]
    fn test_mixed_joiners_rejected() {
        let report = parse("@supports (a: b) and (c: d) or (e: f) { }");
        let first = report.errors().next().unwrap();
        assert_eq!(first.kind.message(), Some("Expected \"{\" but found \"or\"."));
    }

    #[test]
    fn test_page_and_margins() {
        let report = parse("@page :first { margin: 1in; @top-left { content: 'x' } }");
        assert_eq!(report.errors().count(), 0);
        let EventKind::StartPage { id, pseudo } = &report.events[1].kind else {
            panic!("expected start-page");
        };
        assert_eq!((id.as_deref(), pseudo.as_deref()), (None, Some("first")));
        assert_eq!(report.of_type(EventType::StartPageMargin).count(), 1);
        assert_eq!(report.declarations().count(), 2);
    }

    #[test]
    fn test_keyframes() {
        let report = parse(
            "@-webkit-keyframes spin { from { opacity: 0 } 50%, 75% { opacity: .5 } to { opacity: 1 } }",
        );
        assert_eq!(report.errors().count(), 0);
        let EventKind::StartKeyframes { name, prefix } = &report.events[1].kind else {
            panic!("expected start-keyframes");
        };
        assert_eq!((name.as_str(), prefix.as_str()), ("spin", "-webkit-"));
        let rules: Vec<_> = report
            .of_type(EventType::StartKeyframeRule)
            .filter_map(|e| e.kind.summary())
            .collect();
        assert_eq!(rules, ["from", "50%, 75%", "to"]);
        let end = report.of_type(EventType::EndKeyframes).next().unwrap();
        assert_eq!(end.kind.is_empty_block(), Some(false));
    }

    #[test]
    fn test_layer_forms() {
        let report = parse("@layer reset, base.theme; @layer a, b { } @layer { a { top: 0 } }");
        let layer = report.of_type(EventType::Layer).next().unwrap();
        assert_eq!(layer.kind.summary().as_deref(), Some("reset, base.theme"));
        let warnings: Vec<_> = report
            .of_type(EventType::Warning)
            .filter_map(|e| e.kind.message())
            .collect();
        assert_eq!(warnings, ["@layer block cannot have multiple ids"]);
        assert_eq!(report.of_type(EventType::StartLayer).count(), 2);
        assert_eq!(report.declarations().count(), 1);
    }

    #[test]
    fn test_globals_only_halts_at_layer_block() {
        let options = ParserOptions::new().with_globals_only(true);
        let report = Parser::with_options(options)
            .parse("@layer a; @layer b { x { top: 0 } } @import 'late.css';")
            .unwrap();
        assert_eq!(
            names(&report),
            ["start-stylesheet", "layer", "end-stylesheet"]
        );
    }

    #[test]
    fn test_container() {
        let report = parse(
            "@container card (min-width: 400px) and style(--dark: 1) { a { top: 0 } }",
        );
        assert_eq!(report.errors().count(), 0);
        let EventKind::StartContainer { name } = &report.events[1].kind else {
            panic!("expected start-container");
        };
        assert_eq!(name.as_deref(), Some("card"));
        assert_eq!(report.declarations().count(), 2);
    }

    #[test]
    fn test_scope() {
        let report = parse("@scope (.card) to (.content) { img { top: 0 } > p { top: 0 } }");
        assert_eq!(report.errors().count(), 0);
        let start = report.of_type(EventType::StartScope).next().unwrap();
        assert_eq!(start.kind.summary().as_deref(), Some("(.card) to (.content)"));
        assert_eq!(report.of_type(EventType::StartRule).count(), 2);

        let report = parse("@scope (.a { } b { top: 0 }");
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_descriptor_blocks() {
        let report = parse(
            "@font-face { font-family: x; src: url(x.woff) } \
             @property --w { syntax: '<length>'; inherits: false; initial-value: 0px } \
             @counter-style thumbs { system: cyclic; symbols: a b; suffix: ' ' } \
             @font-palette-values --p { font-family: x; base-palette: 1 } \
             @-ms-viewport { width: device-width }",
        );
        assert_eq!(report.errors().count(), 0);
        for t in [
            EventType::StartFontFace,
            EventType::StartProperty,
            EventType::StartCounterStyle,
            EventType::StartFontPaletteValues,
            EventType::StartViewport,
        ] {
            assert_eq!(report.of_type(t).count(), 1, "{t}");
        }
        let viewport = report.of_type(EventType::StartViewport).next().unwrap();
        assert_eq!(viewport.kind.summary().as_deref(), Some("-ms-"));
    }

    #[test]
    fn test_nested_rule_in_descriptor_block_rejected() {
        let report = parse("@font-face { a { top: 0 } font-family: x }");
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.declarations().count(), 1);
    }

    #[test]
    fn test_document() {
        let report = parse(
            "@-moz-document url(http://x), regexp(\"a.*\"), foo(x) { a { top: 0 } @document domain(x) { } }",
        );
        let messages: Vec<_> = report
            .events
            .iter()
            .filter_map(|e| e.kind.message())
            .collect();
        assert_eq!(
            messages,
            [
                "Unknown document function",
                "Nested @document produces broken code"
            ]
        );
        let EventKind::StartDocument { functions } = &report.events[2].kind else {
            panic!("expected start-document");
        };
        assert_eq!(functions.len(), 2);
    }

    #[test]
    fn test_nested_media_in_rule() {
        let report = parse("a { color: red; @media print { color: blue } }");
        assert_eq!(report.errors().count(), 0);
        assert_eq!(report.declarations().count(), 2);
    }
}
