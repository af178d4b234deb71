//! Declarations and property values.

use super::{
    DECL_END, NEST_SEL_BLOCK, PROP_CUSTOM_END, PROP_VAL_END, PROP_VAL_END_PAREN, Session,
};
use crate::error::{Error, Result, clip};
use crate::parser::{Declaration, EventKind};
use crate::properties::Scope;
use crate::token::{Token, TokenKind as K};
use crate::validate::validate_property_at;
use crate::values::{PropertyValue, ValuePart, is_hex_color};

#[derive(Debug, Clone, Default)]
pub(super) struct DeclOptions {
    /// Already consumed `:`.
    pub colon: Option<Token>,
    /// Inside a `@supports`/`@container` condition.
    pub in_parens: bool,
    pub scope: Scope,
}

fn closer(open: K) -> K {
    match open {
        K::LBrace => K::RBrace,
        K::LBracket => K::RBracket,
        _ => K::RParen,
    }
}

impl Session<'_, '_> {
    /// Parse a declaration starting at `tok`.
    ///
    /// `Ok(false)` means `tok` starts something else, most likely a nested
    /// rule; the stream is then rewound so that `tok` is current again.
    pub(super) fn declaration(&mut self, tok: &Token, opts: DeclOptions) -> Result<bool> {
        let (name_tok, hack) = if tok.kind == K::Star {
            (self.must_raw(&[K::Ident])?, Some('*'))
        } else if self.options.underscore_hack
            && tok.text.starts_with('_')
            && !tok.text.starts_with("__")
        {
            (tok.clone(), Some('_'))
        } else {
            (tok.clone(), None)
        };
        let name_pos = tok.pos;
        let name = match hack {
            Some('_') => name_tok.text[1..].to_string(),
            _ => name_tok.text.clone(),
        };
        let custom = name_tok.flags.custom_property;

        let t2raw = match opts.colon.clone() {
            Some(colon) => colon,
            None => self.stream.get(false, true),
        };
        let t2 = if t2raw.kind == K::Whitespace {
            self.stream.grab()
        } else {
            t2raw.clone()
        };
        let after = if t2.kind == K::Colon {
            Some(self.stream.get(true, true).kind)
        } else {
            None
        };

        if t2.kind != K::Colon || after == Some(K::Colon) {
            self.rewind_to(tok);
            let nested =
                !opts.in_parens && (after.is_some() || NEST_SEL_BLOCK.contains(&t2.kind));
            if !nested && (opts.in_parens || custom) {
                return Err(self.stream.failure("\":\"", &t2raw));
            }
            return Ok(false);
        }
        if after != Some(K::Whitespace) {
            self.stream.unget()?;
        }

        let defer = !opts.in_parens && !custom && matches!(after, Some(K::Ident | K::Function));
        if defer {
            self.deferred = Some(Vec::new());
        }
        let end_kinds = if custom {
            PROP_CUSTOM_END
        } else if opts.in_parens {
            PROP_VAL_END_PAREN
        } else {
            PROP_VAL_END
        };
        let value = self.expr(end_kinds, custom);
        let deferred = self.deferred.take();
        let value = value?;
        let last = self.stream.token().clone();

        if last.kind == K::LBrace && !opts.in_parens {
            if deferred.is_some() {
                self.restart_at(tok);
                return Ok(false);
            }
            self.pair = Some(K::RBrace);
            let full_name = format!("{}{}", hack.map(String::from).unwrap_or_default(), name);
            return Err(Error::syntax(
                format!("Unexpected \"{{\" in \"{full_name}\" declaration."),
                last.pos,
            ));
        }
        for event in deferred.into_iter().flatten() {
            self.fire_event(event);
        }

        let value = match value {
            Some(value) => value,
            None if custom => PropertyValue::empty(last.pos),
            None => {
                if DECL_END.contains(&last.kind) {
                    self.stream.unget()?;
                }
                return Err(self.stream.failure("", &last));
            }
        };

        let invalid = if custom || value.is_var || self.options.no_validation {
            None
        } else {
            validate_property_at(&name, name_pos, &value, opts.scope)?
        };

        let important = match last.kind {
            K::Important => true,
            K::Delim => {
                self.stream.must_smart_text(&[K::Ident], &["important"])?;
                true
            }
            _ => false,
        };
        let end_kinds: &[K] = if opts.in_parens { &[K::RParen] } else { DECL_END };
        let end = if important {
            self.stream.must_smart(end_kinds)?
        } else {
            self.stream.expect_current(end_kinds)?
        };

        let decl = Declaration {
            name,
            name_pos,
            hack,
            value,
            important,
            in_parens: opts.in_parens,
            invalid,
            scope: opts.scope,
        };
        self.fire(name_pos, EventKind::Property(Box::new(decl)));
        if end.kind == K::RBrace {
            self.stream.unget()?;
        }
        Ok(true)
    }

    /// Parse value parts up to a token of `end` (consumed) or end of input.
    ///
    /// In `dumb` mode parts are not classified, no warnings are issued and a
    /// `{` is allowed anywhere.
    pub(super) fn expr(&mut self, end: &[K], dumb: bool) -> Result<Option<PropertyValue>> {
        let mut parts = Vec::new();
        loop {
            let tok = self.stream.get(true, false);
            if tok.is_eof() || end.contains(&tok.kind) {
                break;
            }
            let part = match tok.kind {
                K::LBrace | K::LBracket | K::LParen => {
                    if !dumb && tok.kind == K::LBrace && !parts.is_empty() {
                        break;
                    }
                    let close = closer(tok.kind);
                    let inner = self.expr(&[close], dumb)?;
                    let last = self.stream.token().clone();
                    if last.kind != close {
                        return Err(self.stream.failure(&close.describe(), &last));
                    }
                    ValuePart::block(tok, inner, last.end)
                }
                K::Function if !tok.flags.ie || self.options.ie_filters => {
                    self.function(tok, dumb)?
                }
                K::Invalid if !dumb => return Err(self.stream.failure("", &tok)),
                K::Hash if !dumb => {
                    self.hexcolor(&tok);
                    ValuePart::new(tok, true)
                }
                _ => ValuePart::new(tok, !dumb),
            };
            parts.push(part);
        }
        if parts.is_empty() {
            return Ok(None);
        }
        Ok(Some(PropertyValue::new(parts, self.stream.source())))
    }

    /// Parse the arguments of function token `tok` up to its `)`.
    pub(super) fn function(&mut self, tok: Token, dumb: bool) -> Result<ValuePart> {
        let args = self.expr(&[K::RParen], dumb)?;
        let end = self.stream.token().end;
        Ok(ValuePart::function(tok, args, end))
    }

    fn hexcolor(&mut self, tok: &Token) {
        if !is_hex_color(&tok.text) {
            self.warning(
                format!("Expected a hex color but found \"{}\".", clip(&tok.text, 30)),
                tok.pos,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{EventType, ParseReport, Parser, ParserOptions, parse_value};
    use crate::values::PartKind;

    fn parse(css: &str) -> ParseReport {
        Parser::new().parse(css).unwrap()
    }

    #[test]
    fn test_value_parts() {
        let value = parse_value("rgb(0 0 0 / 50%) url(x.png) 10px").unwrap();
        let kinds: Vec<_> = value.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, [PartKind::Function, PartKind::Uri, PartKind::Dimension]);
        assert_eq!(value.parts[0].args.as_ref().unwrap().len(), 5);
        assert_eq!(value.text, "rgb(0 0 0 / 50%) url(x.png) 10px");
    }

    #[test]
    fn test_brackets_nest() {
        let value = parse_value("[full-start] minmax(1em, 2fr) [full-end]").unwrap();
        assert_eq!(value.len(), 3);
        assert_eq!(value.parts[0].end, "[full-start]".len());
        assert!(parse_value("(a").is_err());
    }

    #[test]
    fn test_custom_property_values() {
        let report = parse("a { --x: { b: c }; --empty:; --y: 1px }");
        assert_eq!(report.errors().count(), 0);
        let decls: Vec<_> = report.declarations().collect();
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0].value.text, "{ b: c }");
        assert!(decls[1].value.is_empty());
        assert!(decls.iter().all(|d| d.invalid.is_none()));
    }

    #[test]
    fn test_brace_in_value() {
        let report = parse("a { color: red { x } ; top: 0 }");
        let errors: Vec<_> = report.errors().filter_map(|e| e.kind.message()).collect();
        assert_eq!(errors, ["Unexpected \"{\" in \"color\" declaration."]);
        assert_eq!(report.declarations().count(), 1);
    }

    #[test]
    fn test_unterminated_string_single_error() {
        let report = parse("a { content: \"abc");
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.of_type(EventType::EndRule).count(), 1);
    }

    #[test]
    fn test_spaced_important() {
        let report = parse("a { color: red ! important }");
        let decl = report.declarations().next().unwrap();
        assert!(decl.important);
        let report = parse("a { color: red ! bogus; top: 0 }");
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.declarations().count(), 1);
    }

    #[test]
    fn test_ie_filters() {
        let css = "a { filter: progid:DXImageTransform.Microsoft.gradient(enabled=false) }";
        let report = Parser::with_options(ParserOptions::new().with_ie_filters(true))
            .parse(css)
            .unwrap();
        assert_eq!(report.errors().count(), 0);
        let decl = report.declarations().next().unwrap();
        assert_eq!(decl.value.parts[0].kind, PartKind::Function);
    }
}
