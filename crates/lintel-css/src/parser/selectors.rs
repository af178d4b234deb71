//! Selector grammar.
//!
//! All entry points leave the token following what they parsed as the
//! current token.

use super::{COMBINATOR, SELECTOR_START, Session};
use crate::error::Result;
use crate::selector::{
    Attribute, Combinator, CombinatorKind, Modifier, ModifierArgs, ModifierKind, Selector,
    SelectorPart, SimpleSelector,
};
use crate::token::{Token, TokenKind as K};

fn combinator(tok: &Token) -> Combinator {
    Combinator {
        kind: CombinatorKind::from_text(&tok.text).unwrap_or(CombinatorKind::Descendant),
        pos: tok.pos,
    }
}

impl Session<'_, '_> {
    /// Comma-separated selectors.
    ///
    /// With `relative` each selector may start with a combinator. With `lax`
    /// selectors that fail to start are dropped instead of ending the list.
    pub(super) fn selectors_group(
        &mut self,
        first: Option<Token>,
        relative: bool,
        lax: bool,
    ) -> Result<Option<Vec<Selector>>> {
        let mut selectors = Vec::new();
        let mut next = first;
        loop {
            let selector = self.selector(next.take(), relative)?;
            if selector.is_none() && !lax {
                if selectors.is_empty() {
                    return Ok(None);
                }
                // A comma was consumed before this point.
                let cur = self.stream.token().clone();
                return Err(self.stream.failure("", &cur));
            }
            selectors.extend(selector);
            if self.stream.token().kind != K::Comma {
                break;
            }
        }
        Ok((!selectors.is_empty()).then_some(selectors))
    }

    /// A complex selector such as `ul > li.item`. `Ok(None)` when `first`
    /// cannot start a selector; `first` is then the current token.
    pub(super) fn selector(
        &mut self,
        first: Option<Token>,
        relative: bool,
    ) -> Result<Option<Selector>> {
        let first = match first {
            Some(tok) => tok,
            None => self.stream.grab(),
        };
        let start = first.pos;
        let mut parts = Vec::new();
        let mut end = first.end;
        let mut pending = None;
        if relative && COMBINATOR.contains(&first.kind) {
            pending = Some(first);
        } else {
            let Some(simple) = self.simple_selector_sequence(Some(first))? else {
                return Ok(None);
            };
            end = simple.pos.offset + simple.text.len();
            parts.push(SelectorPart::Simple(simple));
        }
        loop {
            let tok = match pending.take() {
                Some(tok) => tok,
                None => self.stream.token().clone(),
            };
            if COMBINATOR.contains(&tok.kind) {
                parts.push(SelectorPart::Combinator(combinator(&tok)));
                let Some(simple) = self.simple_selector_sequence(None)? else {
                    let cur = self.stream.token().clone();
                    return Err(self.stream.failure("", &cur));
                };
                end = simple.pos.offset + simple.text.len();
                parts.push(SelectorPart::Simple(simple));
                continue;
            }
            if tok.kind != K::Whitespace {
                break;
            }
            let next = self.stream.grab();
            if next.kind == K::LBrace {
                break;
            }
            let explicit = COMBINATOR.contains(&next.kind).then(|| combinator(&next));
            let start_tok = if explicit.is_some() { None } else { Some(next) };
            match self.simple_selector_sequence(start_tok)? {
                Some(simple) => {
                    let comb = explicit.unwrap_or(Combinator {
                        kind: CombinatorKind::Descendant,
                        pos: tok.pos,
                    });
                    parts.push(SelectorPart::Combinator(comb));
                    end = simple.pos.offset + simple.text.len();
                    parts.push(SelectorPart::Simple(simple));
                }
                None if explicit.is_some() => {
                    let cur = self.stream.token().clone();
                    return Err(self.stream.failure("", &cur));
                }
                None => {}
            }
        }
        Ok(Some(Selector {
            parts,
            text: self.slice(start.offset, end),
            pos: start,
        }))
    }

    /// A compound selector: `[ns|]element` followed by modifiers.
    fn simple_selector_sequence(&mut self, start: Option<Token>) -> Result<Option<SimpleSelector>> {
        let start = match start {
            Some(tok) => tok,
            None => self.stream.grab(),
        };
        // `--x:hover {}` is only ever a declaration.
        if start.flags.custom_property || !SELECTOR_START.contains(&start.kind) {
            return Ok(None);
        }
        let mut modifiers = Vec::new();
        let mut end = start.end;
        let mut tok = start.clone();
        while tok.kind == K::Amp {
            end = tok.end;
            modifiers.push(Modifier {
                kind: ModifierKind::Amp,
                text: tok.text.clone(),
                args: ModifierArgs::None,
                pos: tok.pos,
            });
            tok = self.stream.get(false, true);
        }

        let mut namespace = None;
        let mut element = None;
        let mut next = Some(tok);
        if let Some(tok) = next.take_if(|t| matches!(t.kind, K::Pipe | K::Star | K::Ident)) {
            let ns = if tok.kind == K::Pipe {
                Some(String::new())
            } else {
                let t2 = self.stream.get(false, true);
                if t2.kind == K::Pipe {
                    Some(tok.text.clone())
                } else {
                    end = tok.end;
                    element = Some(tok.text);
                    next = Some(t2);
                    None
                }
            };
            if ns.is_some() {
                let name = self.must_raw(&[K::Ident, K::Star])?;
                end = name.end;
                element = Some(name.text);
                namespace = ns;
            }
        }

        loop {
            let tok = match next.take() {
                Some(tok) => tok,
                None => self.stream.get(false, true),
            };
            let Some(modifier) = self.modifier(tok)? else {
                break;
            };
            end = modifier.pos.offset + modifier.text.len();
            modifiers.push(modifier);
        }

        Ok(Some(SimpleSelector {
            namespace,
            element,
            modifiers,
            text: self.slice(start.pos.offset, end),
            pos: start.pos,
        }))
    }

    fn modifier(&mut self, tok: Token) -> Result<Option<Modifier>> {
        let modifier = match tok.kind {
            K::Amp | K::Hash => Modifier {
                kind: if tok.kind == K::Amp {
                    ModifierKind::Amp
                } else {
                    ModifierKind::Id
                },
                text: tok.text,
                args: ModifierArgs::None,
                pos: tok.pos,
            },
            K::Dot => {
                let name = self.must_raw(&[K::Ident])?;
                Modifier {
                    kind: ModifierKind::Class,
                    text: self.slice(tok.pos.offset, name.end),
                    args: ModifierArgs::None,
                    pos: tok.pos,
                }
            }
            K::LBracket => self.attribute(tok)?,
            K::Colon => self.pseudo(tok)?,
            _ => return Ok(None),
        };
        Ok(Some(modifier))
    }

    /// `[ns|name op value flag]` after its `[`.
    fn attribute(&mut self, open: Token) -> Result<Modifier> {
        self.pair = Some(K::RBracket);
        let mut attr = Attribute::default();
        let mut operator = None;
        let mut close = None;
        let t1 = self.stream.must_smart(&[K::Pipe, K::Ident, K::Star])?;
        let name = match t1.kind {
            K::Pipe => {
                attr.namespace = Some(String::new());
                self.must_raw(&[K::Ident])?
            }
            K::Star => {
                self.must_raw(&[K::Pipe])?;
                attr.namespace = Some("*".into());
                self.must_raw(&[K::Ident])?
            }
            _ => {
                let t2 = self.stream.get(false, true);
                match t2.kind {
                    K::Pipe => {
                        attr.namespace = Some(t1.text.clone());
                        self.must_raw(&[K::Ident])?
                    }
                    K::AttrEq | K::Equals => {
                        operator = Some(t2);
                        t1
                    }
                    K::RBracket => {
                        close = Some(t2);
                        t1
                    }
                    K::Whitespace => t1,
                    _ => return Err(self.stream.failure("\"]\"", &t2)),
                }
            }
        };
        attr.name = name.text;
        if operator.is_none() && close.is_none() {
            let t2 = self
                .stream
                .must_smart(&[K::AttrEq, K::Equals, K::RBracket])?;
            if t2.kind == K::RBracket {
                close = Some(t2);
            } else {
                operator = Some(t2);
            }
        }
        if let Some(op) = operator {
            attr.operator = Some(op.text);
            attr.value = Some(self.stream.must_smart(&[K::Ident, K::Str])?.text);
            let t2 = self.stream.grab();
            if t2.kind == K::RBracket {
                close = Some(t2);
            } else if t2.is_ident_in(&["i", "s"]) {
                attr.flag = t2.lower().chars().next();
            } else {
                return Err(self.stream.failure("\"i\", \"s\"", &t2));
            }
        }
        let close = match close {
            Some(close) => close,
            None => self.stream.must_smart(&[K::RBracket])?,
        };
        self.pair = None;
        Ok(Modifier {
            kind: ModifierKind::Attribute,
            text: self.slice(open.pos.offset, close.end),
            args: ModifierArgs::Attribute(attr),
            pos: open.pos,
        })
    }

    /// `:name`, `::name` or a functional pseudo-class after its first `:`.
    fn pseudo(&mut self, colon: Token) -> Result<Modifier> {
        let element = self.stream.matches(&[K::Colon])?.is_some();
        let name_tok = self.must_raw(&[K::Function, K::Ident])?;
        let kind = if element {
            ModifierKind::PseudoElement
        } else {
            ModifierKind::Pseudo
        };
        if name_tok.kind == K::Ident {
            return Ok(Modifier {
                kind,
                text: self.slice(colon.pos.offset, name_tok.end),
                args: ModifierArgs::None,
                pos: colon.pos,
            });
        }

        let name = name_tok
            .name()
            .map(|n| n.unprefixed().to_string())
            .unwrap_or_default();
        self.pair = Some(K::RParen);
        let (kind, args) = match name.as_str() {
            "nth-child" | "nth-last-child" => (kind, self.nth_args()?),
            "not" | "is" | "where" | "any" | "has" => {
                let lax = !matches!(name.as_str(), "not" | "has");
                let selectors = self.selector_args(name == "has", lax)?;
                let kind = if name == "not" && !element {
                    ModifierKind::Not
                } else {
                    kind
                };
                (kind, ModifierArgs::Selectors(selectors))
            }
            _ => {
                let value = self.expr(&[K::RParen], true)?;
                let last = self.stream.token().clone();
                if last.kind != K::RParen {
                    return Err(self.stream.failure("\")\"", &last));
                }
                (kind, ModifierArgs::Value(value))
            }
        };
        self.pair = None;
        let end = self.stream.token().end;
        Ok(Modifier {
            kind,
            text: self.slice(colon.pos.offset, end),
            args,
            pos: colon.pos,
        })
    }

    /// Selector list argument up to and including its `)`.
    fn selector_args(&mut self, relative: bool, lax: bool) -> Result<Vec<Selector>> {
        let Some(selectors) = self.selectors_group(None, relative, lax)? else {
            let cur = self.stream.token().clone();
            return Err(self.stream.failure("a selector", &cur));
        };
        self.stream.expect_current(&[K::RParen])?;
        Ok(selectors)
    }

    /// `an+b [of <selectors>]` up to and including the `)`.
    fn nth_args(&mut self) -> Result<ModifierArgs> {
        let nth = self.stream.read_nth();
        let t1 = self.stream.get(false, true);
        let t2 = if t1.kind == K::Whitespace {
            self.stream.grab()
        } else {
            t1.clone()
        };
        match nth {
            Some(nth) if t2.is_ident_in(&["of"]) => {
                let of = self.selector_args(false, false)?;
                Ok(ModifierArgs::Nth { nth, of })
            }
            Some(nth) if t2.kind == K::RParen => Ok(ModifierArgs::Nth {
                nth,
                of: Vec::new(),
            }),
            _ => Err(self.stream.failure("", &t1)),
        }
    }

    fn slice(&self, from: usize, to: usize) -> String {
        self.stream.source()[from..to.max(from)].to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{EventKind, Parser, parse_selector};
    use crate::selector::{CombinatorKind, ModifierArgs, ModifierKind, SelectorPart};
    use crate::tokenizer::Nth;

    #[test]
    fn test_compound_parts() {
        let selector = parse_selector("svg|a.link[href^=\"http\" i]:hover::before").unwrap();
        let simple = selector.subject().unwrap();
        assert_eq!(simple.namespace.as_deref(), Some("svg"));
        assert_eq!(simple.element.as_deref(), Some("a"));
        let kinds: Vec<_> = simple.modifiers.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            [
                ModifierKind::Class,
                ModifierKind::Attribute,
                ModifierKind::Pseudo,
                ModifierKind::PseudoElement
            ]
        );
        let ModifierArgs::Attribute(attr) = &simple.modifiers[1].args else {
            panic!("expected an attribute");
        };
        assert_eq!(attr.name, "href");
        assert_eq!(attr.operator.as_deref(), Some("^="));
        assert_eq!(attr.value.as_deref(), Some("\"http\""));
        assert_eq!(attr.flag, Some('i'));
        assert_eq!(simple.modifiers[1].text, "[href^=\"http\" i]");
        assert_eq!(simple.modifiers[3].name(), "before");
    }

    #[test]
    fn test_namespaces() {
        let selector = parse_selector("*|a").unwrap();
        let simple = selector.subject().unwrap();
        assert_eq!(simple.namespace.as_deref(), Some("*"));
        assert_eq!(simple.element.as_deref(), Some("a"));
        let selector = parse_selector("[|lang]").unwrap();
        let ModifierArgs::Attribute(attr) = &selector.subject().unwrap().modifiers[0].args else {
            panic!("expected an attribute");
        };
        assert_eq!((attr.namespace.as_deref(), attr.name.as_str()), (Some(""), "lang"));
    }

    #[test]
    fn test_combinators() {
        let selector = parse_selector("ul > li + li ~ p   q").unwrap();
        let kinds: Vec<_> = selector.combinators().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [
                CombinatorKind::Child,
                CombinatorKind::AdjacentSibling,
                CombinatorKind::GeneralSibling,
                CombinatorKind::Descendant
            ]
        );
        assert_eq!(selector.text, "ul > li + li ~ p   q");
        assert_eq!(selector.compounds().count(), 5);
    }

    #[test]
    fn test_relative_selector() {
        let selector = parse_selector("> img").unwrap();
        assert!(selector.is_relative());
        assert!(matches!(selector.parts[0], SelectorPart::Combinator(_)));
        assert_eq!(selector.text, "> img");
    }

    #[test]
    fn test_nth_child() {
        let selector = parse_selector("li:nth-child(2n+1 of .x):nth-last-child(odd)").unwrap();
        let mods = &selector.subject().unwrap().modifiers;
        let ModifierArgs::Nth { nth, of } = &mods[0].args else {
            panic!("expected nth arguments");
        };
        assert_eq!(*nth, Nth { a: 2, b: 1 });
        assert_eq!(of[0].text, ".x");
        assert_eq!(mods[0].text, ":nth-child(2n+1 of .x)");
        assert!(matches!(mods[1].args, ModifierArgs::Nth { nth: Nth { a: 2, b: 1 }, .. }));
        assert!(parse_selector("li:nth-child(foo)").is_err());
    }

    #[test]
    fn test_selector_arguments() {
        let selector = parse_selector("a:not(.b, .c):is(, .d):has(> img)").unwrap();
        let mods = &selector.subject().unwrap().modifiers;
        assert_eq!(mods[0].kind, ModifierKind::Not);
        assert_eq!(mods[0].selectors().len(), 2);
        assert_eq!(mods[1].kind, ModifierKind::Pseudo);
        assert_eq!(mods[1].selectors().len(), 1);
        assert!(mods[2].selectors()[0].is_relative());
        assert!(parse_selector("a:not()").is_err());
    }

    #[test]
    fn test_other_functional_pseudo() {
        let selector = parse_selector("p:lang(en)::part(label)").unwrap();
        let mods = &selector.subject().unwrap().modifiers;
        let ModifierArgs::Value(Some(value)) = &mods[0].args else {
            panic!("expected a value");
        };
        assert_eq!(value.text, "en");
        assert_eq!(mods[1].kind, ModifierKind::PseudoElement);
        assert_eq!(mods[1].name(), "part");
    }

    #[test]
    fn test_malformed() {
        assert!(parse_selector("a,").is_err());
        assert!(parse_selector("[a b]").is_err());
        assert!(parse_selector("a >").is_err());
        assert!(parse_selector("a.").is_err());
    }

    #[test]
    fn test_rule_with_compound_classes() {
        let report = Parser::new().parse(".a.b{color:red}").unwrap();
        let EventKind::StartRule { selectors } = &report.events[1].kind else {
            panic!("expected start-rule");
        };
        let simple = selectors[0].subject().unwrap();
        assert_eq!(simple.modifiers_of(ModifierKind::Class).count(), 2);
        assert_eq!(selectors[0].text, ".a.b");
        assert_eq!(report.declarations().count(), 1);
    }

    #[test]
    fn test_selector_group_in_rule() {
        let report = Parser::new().parse("h1, h2 , .x > p { margin: 0 }").unwrap();
        let EventKind::StartRule { selectors } = &report.events[1].kind else {
            panic!("expected start-rule");
        };
        let texts: Vec<_> = selectors.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["h1", "h2", ".x > p"]);
        let report = Parser::new().parse("h1, { margin: 0 } p { top: 0 }").unwrap();
        let first = report.errors().next().unwrap();
        assert_eq!(first.kind.message(), Some("Unexpected \"{\"."));
        assert_eq!(report.declarations().count(), 1);
    }
}
