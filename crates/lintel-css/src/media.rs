//! Media query model.

use std::fmt;

use crate::reader::Position;
use crate::values::PropertyValue;

/// One query of a media query list (e.g. `only screen and (min-width: 600px)`).
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    /// `not` or `only`.
    pub modifier: Option<String>,
    /// `screen`, `print`, ...
    pub media_type: Option<String>,
    pub features: Vec<MediaFeature>,
    /// Source text.
    pub text: String,
    pub pos: Position,
}

impl MediaQuery {
    /// Whether the query is negated with `not`.
    pub fn is_negated(&self) -> bool {
        self.modifier
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case("not"))
    }

    /// The feature named `name`, compared case-insensitively.
    pub fn feature(&self, name: &str) -> Option<&MediaFeature> {
        self.features
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A parenthesized media feature (e.g. `(min-width: 600px)`).
///
/// In range syntax (`(400px <= width)`) the name is the first token and
/// the value holds the rest, comparison operators included.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFeature {
    pub name: String,
    pub value: Option<PropertyValue>,
    pub pos: Position,
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "({}: {value})", self.name),
            None => write!(f, "({})", self.name),
        }
    }
}

/// Join a query list with `, `.
pub fn list_to_string(queries: &[MediaQuery]) -> String {
    queries
        .iter()
        .map(|q| q.text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_media_list;

    #[test]
    fn test_query_parts() {
        let list = parse_media_list("only screen and (min-width: 600px), print").unwrap();
        assert_eq!(list.len(), 2);
        let first = &list[0];
        assert_eq!(first.modifier.as_deref(), Some("only"));
        assert_eq!(first.media_type.as_deref(), Some("screen"));
        let width = first.feature("MIN-WIDTH").unwrap();
        assert_eq!(width.value.as_ref().unwrap().text, "600px");
        assert_eq!(width.to_string(), "(min-width: 600px)");
        assert_eq!(list[1].media_type.as_deref(), Some("print"));
        assert_eq!(list_to_string(&list), "only screen and (min-width: 600px), print");
    }

    #[test]
    fn test_negated_feature_only() {
        let list = parse_media_list("not all and (monochrome)").unwrap();
        assert!(list[0].is_negated());
        assert!(list[0].feature("monochrome").unwrap().value.is_none());
        let list = parse_media_list("(hover)").unwrap();
        assert_eq!(list[0].media_type, None);
        assert_eq!(list[0].features.len(), 1);
    }
}
