//! CSS specificity calculation.

use std::ops::Add;

use super::{Modifier, ModifierKind, Selector, SimpleSelector};

/// CSS specificity as an (inline, ids, classes, elements) tuple.
///
/// - inline: style attribute declarations
/// - ids: ID selectors
/// - classes: class and attribute selectors, pseudo-classes
/// - elements: type selectors, pseudo-elements
///
/// Compared lexicographically: (0,1,0,0) > (0,0,99,99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity(pub u32, pub u32, pub u32, pub u32);

impl Specificity {
    /// Zero specificity (universal selector, `:where()`).
    pub const ZERO: Self = Self(0, 0, 0, 0);

    /// Specificity of inline style declarations.
    pub const INLINE: Self = Self(1, 0, 0, 0);

    /// Calculate specificity of a selector.
    pub fn of_selector(selector: &Selector) -> Self {
        selector.compounds().map(Self::of_compound).fold(Self::ZERO, Add::add)
    }

    /// Calculate specificity of a compound selector.
    pub fn of_compound(simple: &SimpleSelector) -> Self {
        let element = Self(0, 0, 0, u32::from(!simple.is_universal()));
        simple
            .modifiers
            .iter()
            .map(Self::of_modifier)
            .fold(element, Add::add)
    }

    fn of_modifier(modifier: &Modifier) -> Self {
        let most_specific = || {
            modifier
                .selectors()
                .iter()
                .map(Self::of_selector)
                .max()
                .unwrap_or(Self::ZERO)
        };
        match modifier.kind {
            ModifierKind::Id => Self(0, 1, 0, 0),
            ModifierKind::Class | ModifierKind::Attribute => Self(0, 0, 1, 0),
            ModifierKind::Amp => Self::ZERO,
            ModifierKind::Not => most_specific(),
            _ if modifier.is_pseudo_element() => Self(0, 0, 0, 1),
            _ => match modifier.name().as_str() {
                "is" | "has" | "any" | "-webkit-any" | "-moz-any" => most_specific(),
                "where" => Self::ZERO,
                _ => Self(0, 0, 1, 0) + most_specific(),
            },
        }
    }

    /// Get the ID selector count.
    pub fn ids(&self) -> u32 {
        self.1
    }

    /// Get the class/attribute/pseudo-class count.
    pub fn classes(&self) -> u32 {
        self.2
    }

    /// Get the type selector/pseudo-element count.
    pub fn elements(&self) -> u32 {
        self.3
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(
            self.0 + rhs.0,
            self.1 + rhs.1,
            self.2 + rhs.2,
            self.3 + rhs.3,
        )
    }
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{},{})", self.0, self.1, self.2, self.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_selector;

    fn of(text: &str) -> Specificity {
        parse_selector(text).unwrap().specificity()
    }

    #[test]
    fn specificity_calculation() {
        assert_eq!(of("*"), Specificity(0, 0, 0, 0));
        assert_eq!(of("li"), Specificity(0, 0, 0, 1));
        assert_eq!(of(".primary"), Specificity(0, 0, 1, 0));
        assert_eq!(of("#submit"), Specificity(0, 1, 0, 0));
        assert_eq!(of("a.link:hover"), Specificity(0, 0, 2, 1));
        assert_eq!(of("ul > li + li[data-x]"), Specificity(0, 0, 1, 3));
        assert_eq!(of("p::before"), Specificity(0, 0, 0, 2));
        assert_eq!(of("p:after"), Specificity(0, 0, 0, 2));
    }

    #[test]
    fn specificity_comparison() {
        assert!(Specificity(0, 1, 0, 0) > Specificity(0, 0, 99, 99));
        assert!(Specificity(0, 0, 1, 0) > Specificity(0, 0, 0, 99));
        assert!(Specificity::INLINE > Specificity(0, 99, 0, 0));
        assert_eq!(Specificity(0, 1, 2, 3).to_string(), "(0,1,2,3)");
    }

    #[test]
    fn functional_pseudo_classes() {
        assert_eq!(of(":not(.a, #b)"), Specificity(0, 1, 0, 0));
        assert_eq!(of(":is(a, .b)"), Specificity(0, 0, 1, 0));
        assert_eq!(of(":where(#a)"), Specificity::ZERO);
        assert_eq!(of("li:nth-child(2n of .x)"), Specificity(0, 0, 2, 1));
        assert_eq!(of("a:has(> img)"), Specificity(0, 0, 0, 2));
    }
}
