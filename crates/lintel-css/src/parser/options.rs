//! Parser configuration.

/// Switches controlling what the parser accepts and reports.
///
/// All options are off by default.
///
/// # Example
///
/// ```
/// use lintel_css::parser::ParserOptions;
///
/// let options = ParserOptions::new().with_star_hack(true).with_strict(true);
/// assert!(options.star_hack && options.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Accept IE `progid:` filter functions as values.
    pub ie_filters: bool,
    /// Accept a leading `*` on property names.
    pub star_hack: bool,
    /// Treat a leading `_` on property names as a hack prefix.
    pub underscore_hack: bool,
    /// Abort on the first syntax error instead of reporting it.
    pub strict: bool,
    /// Only extract top-level `@document` blocks, skipping their contents.
    pub top_doc_only: bool,
    /// Stop after the leading `@charset`, `@import`, `@namespace` and
    /// `@layer` statements.
    pub globals_only: bool,
    /// Skip property value validation.
    pub no_validation: bool,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ie_filters(mut self, enabled: bool) -> Self {
        self.ie_filters = enabled;
        self
    }

    pub fn with_star_hack(mut self, enabled: bool) -> Self {
        self.star_hack = enabled;
        self
    }

    pub fn with_underscore_hack(mut self, enabled: bool) -> Self {
        self.underscore_hack = enabled;
        self
    }

    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    pub fn with_top_doc_only(mut self, enabled: bool) -> Self {
        self.top_doc_only = enabled;
        self
    }

    pub fn with_globals_only(mut self, enabled: bool) -> Self {
        self.globals_only = enabled;
        self
    }

    pub fn with_no_validation(mut self, enabled: bool) -> Self {
        self.no_validation = enabled;
        self
    }
}
