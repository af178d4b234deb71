//! Built-in value types.
//!
//! Simple types test one value part. Complex types are named grammars in
//! the same notation as property grammars, and function families back the
//! `<fn:name>` terms.

use crate::token::{TokenKind, UnitCategory};
use crate::values::{PartKind, ValuePart};

/// Predicate of a simple type.
pub(crate) type SimpleTest = fn(&ValuePart) -> bool;

/// CSS-wide keywords.
pub const GLOBAL_KEYWORDS: &[&str] = &["initial", "inherit", "revert", "unset"];

/// Whether `part` is one of the CSS-wide keywords.
pub fn is_global_keyword(part: &ValuePart) -> bool {
    part.token.is_ident_in(GLOBAL_KEYWORDS)
}

fn is_ident(p: &ValuePart) -> bool {
    p.token.kind == TokenKind::Ident
}

fn is_number(p: &ValuePart) -> bool {
    p.token.kind == TokenKind::Number
}

fn is_pct(p: &ValuePart) -> bool {
    p.token.kind == TokenKind::Percentage
}

fn is_string(p: &ValuePart) -> bool {
    p.token.kind == TokenKind::Str
}

fn has_unit(p: &ValuePart, category: UnitCategory) -> bool {
    p.token.kind == TokenKind::Dimension
        && p.token.numeric().is_some_and(|n| n.category == category)
}

fn at_least(p: &ValuePart, min: f64) -> bool {
    p.number().is_some_and(|n| n >= min)
}

fn within(p: &ValuePart, min: f64, max: f64) -> bool {
    p.number().is_some_and(|n| n >= min && n <= max)
}

fn custom_ident_except(p: &ValuePart, excluded: &[&str]) -> bool {
    is_ident(p) && !is_global_keyword(p) && !p.token.is_ident_in(excluded)
}

fn len(p: &ValuePart) -> bool {
    p.is_calc() || p.is_zero() || has_unit(p, UnitCategory::Length)
}

fn len_pct(p: &ValuePart) -> bool {
    len(p) || is_pct(p)
}

fn pct(p: &ValuePart) -> bool {
    p.is_calc() || p.is_zero() || is_pct(p)
}

fn num(p: &ValuePart) -> bool {
    p.is_calc() || is_number(p)
}

fn int(p: &ValuePart) -> bool {
    p.is_calc() || p.is_int()
}

/// A relative color channel keyword: `none`, `alpha` or one of `letters`.
fn rel_channel(p: &ValuePart, letters: &str) -> bool {
    if p.is_none() {
        return true;
    }
    if !is_ident(p) {
        return false;
    }
    let text = p.token.lower();
    (text.len() == 1 && letters.contains(text.as_ref())) || text == "alpha"
}

fn rel_channel_num_pct(p: &ValuePart, letters: &str) -> bool {
    rel_channel(p, letters) || p.is_calc() || is_number(p) || is_pct(p)
}

static SIMPLE_TYPES: &[(&str, SimpleTest)] = &[
    ("<angle>", |p| p.is_calc() || has_unit(p, UnitCategory::Angle)),
    ("<angle-or-0>", |p| {
        p.is_calc() || p.is_zero() || has_unit(p, UnitCategory::Angle)
    }),
    ("<animateable-feature-name>", |p| {
        custom_ident_except(p, &["will-change", "auto", "scroll-position", "contents"])
    }),
    ("<ascii4>", |p| {
        is_string(p)
            && p.token.string_value().is_some_and(|s| {
                s.chars().count() == 4 && s.chars().all(|c| (' '..='~').contains(&c))
            })
    }),
    ("<attr>", |p| p.is_attr()),
    ("<custom-ident>", |p| custom_ident_except(p, &[])),
    ("<custom-prop>", |p| p.kind == PartKind::CustomProperty),
    ("<flex>", |p| {
        p.is_calc() || (has_unit(p, UnitCategory::Flex) && at_least(p, 0.0))
    }),
    ("<func>", |p| p.kind == PartKind::Function),
    ("<hue>", |p| {
        p.is_calc() || is_number(p) || has_unit(p, UnitCategory::Angle)
    }),
    ("<ident>", is_ident),
    ("<ident-for-grid>", |p| custom_ident_except(p, &["span", "auto"])),
    ("<ident-not-none>", |p| is_ident(p) && !p.is_none()),
    ("<ie-function>", |p| p.token.flags.ie),
    ("<int>", int),
    ("<int0-1>", |p| {
        p.is_calc() || p.is_zero() || (p.is_int() && p.number() == Some(1.0))
    }),
    ("<int0+>", |p| p.is_calc() || (p.is_int() && at_least(p, 0.0))),
    ("<int1+>", |p| p.is_calc() || (p.is_int() && at_least(p, 1.0))),
    ("<int2-4>", |p| p.is_calc() || (p.is_int() && within(p, 2.0, 4.0))),
    ("<len>", len),
    ("<len0+>", |p| {
        p.is_calc() || p.is_zero() || (has_unit(p, UnitCategory::Length) && at_least(p, 0.0))
    }),
    ("<len-pct>", len_pct),
    ("<len-pct0+>", |p| {
        p.is_calc()
            || p.is_zero()
            || (at_least(p, 0.0) && (is_pct(p) || has_unit(p, UnitCategory::Length)))
    }),
    ("<named-or-hex-color>", |p| p.kind == PartKind::Color),
    ("<num>", num),
    ("<num0+>", |p| p.is_calc() || (is_number(p) && at_least(p, 0.0))),
    ("<num0-1>", |p| p.is_calc() || (is_number(p) && within(p, 0.0, 1.0))),
    ("<num1-1000>", |p| p.is_calc() || (is_number(p) && within(p, 1.0, 1000.0))),
    ("<num-pct>", |p| p.is_calc() || is_number(p) || is_pct(p)),
    ("<num-pct0+>", |p| {
        p.is_calc() || (at_least(p, 0.0) && (is_number(p) || is_pct(p)))
    }),
    ("<num-pct-none>", |p| {
        p.is_calc() || p.is_none() || is_number(p) || is_pct(p)
    }),
    ("<pct>", pct),
    ("<pct0+>", |p| p.is_calc() || p.is_zero() || (is_pct(p) && at_least(p, 0.0))),
    ("<pct0-100>", |p| {
        p.is_calc() || p.is_zero() || (is_pct(p) && within(p, 0.0, 100.0))
    }),
    ("<keyframes-name>", |p| custom_ident_except(p, &[]) || is_string(p)),
    ("<resolution>", |p| has_unit(p, UnitCategory::Resolution)),
    ("<string>", is_string),
    ("<time>", |p| p.is_calc() || has_unit(p, UnitCategory::Time)),
    ("<time0+>", |p| {
        p.is_calc() || (has_unit(p, UnitCategory::Time) && at_least(p, 0.0))
    }),
    ("<unicode-range>", |p| p.kind == PartKind::UnicodeRange),
    ("<uri>", |p| p.kind == PartKind::Uri),
    ("<rel-hsl>", |p| rel_channel(p, "hsl")),
    ("<rel-hsl-num-pct>", |p| rel_channel_num_pct(p, "hsl")),
    ("<rel-hwb>", |p| rel_channel(p, "hwb")),
    ("<rel-hwb-num-pct>", |p| rel_channel_num_pct(p, "hwb")),
    ("<rel-lab>", |p| rel_channel(p, "lab")),
    ("<rel-lab-num-pct>", |p| rel_channel_num_pct(p, "lab")),
    ("<rel-lch>", |p| rel_channel(p, "lch")),
    ("<rel-lch-num-pct>", |p| rel_channel_num_pct(p, "lch")),
    ("<rel-rgb>", |p| rel_channel(p, "rgb")),
    ("<rel-rgb-num-pct>", |p| rel_channel_num_pct(p, "rgb")),
    // Standard spellings
    ("<length>", len),
    ("<percentage>", pct),
    ("<number>", num),
    ("<integer>", int),
    ("<length-percentage>", len_pct),
];

/// Look up a simple type by its bracketed lower-case name.
pub(crate) fn simple(name: &str) -> Option<(&'static str, SimpleTest)> {
    SIMPLE_TYPES.iter().find(|(n, _)| *n == name).copied()
}

/// Where a complex type's matcher comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComplexSource {
    Grammar(&'static str),
    /// `[ <num-pct0+> ]{1,4} && fill?` with `fill` allowed between numbers.
    BorderImageSlice,
    /// Lengths and numbers separated by optional commas.
    Dasharray,
}

/// Look up a complex type by its bracketed lower-case name.
pub(crate) fn complex(name: &str) -> Option<ComplexSource> {
    match name {
        "<border-image-slice>" => Some(ComplexSource::BorderImageSlice),
        "<dasharray>" => Some(ComplexSource::Dasharray),
        _ => COMPLEX_TYPES
            .binary_search_by_key(&name, |(n, _)| n)
            .ok()
            .map(|idx| ComplexSource::Grammar(COMPLEX_TYPES[idx].1)),
    }
}

/// Functions of a `<fn:name>` family, sorted by name.
pub(crate) fn family(name: &str) -> Option<&'static [(&'static str, &'static str)]> {
    FUNCTION_FAMILIES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, list)| *list)
}

/// Body grammar of `function` within a family.
pub(crate) fn family_function(
    list: &'static [(&'static str, &'static str)],
    function: &str,
) -> Option<&'static str> {
    list.binary_search_by_key(&function, |(n, _)| n)
        .ok()
        .map(|idx| list[idx].1)
}

/// Every grammar string of the complex types and function families.
#[cfg(test)]
pub(crate) fn all_grammars() -> impl Iterator<Item = &'static str> {
    COMPLEX_TYPES.iter().map(|(_, g)| *g).chain(
        FUNCTION_FAMILIES
            .iter()
            .flat_map(|(_, list)| list.iter().map(|(_, g)| *g)),
    )
}

static FUNCTION_FAMILIES: &[(&str, &[(&str, &str)])] = &[
    ("color", COLOR_FUNCTIONS),
    ("filter", FILTER_FUNCTIONS),
    ("basicShape", BASIC_SHAPE_FUNCTIONS),
    ("transform", TRANSFORM_FUNCTIONS),
];

#[rustfmt::skip]
static COMPLEX_TYPES: &[(&str, &str)] = &[
    ("<absolute-size>", "xx-small | x-small | small | medium | large | x-large | xx-large"),
    ("<alpha>", "/ <num-pct-none>"),
    ("<animateable-feature>", "scroll-position | contents | <animateable-feature-name>"),
    ("<animation-direction>", "normal | reverse | alternate | alternate-reverse"),
    ("<animation-fill-mode>", "none | forwards | backwards | both"),
    ("<animation-timeline>", "auto | none | <custom-ident> | scroll( [ [ root | nearest | self ] || <axis> ]? ) | view( [ <axis> || [ [ auto | <len-pct> ]{1,2} ]# ]? )"),
    ("<attachment>", "scroll | fixed | local"),
    ("<auto-repeat>", "repeat( [ auto-fill | auto-fit ] , [ <line-names>? <fixed-size> ]+ <line-names>? )"),
    ("<auto-track-list>", "[ <line-names>? [ <fixed-size> | <fixed-repeat> ] ]* <line-names>? <auto-repeat> [ <line-names>? [ <fixed-size> | <fixed-repeat> ] ]* <line-names>?"),
    ("<axis>", "block | inline | vertical | horizontal"),
    ("<baseline-position>", "[ first | last ]? baseline"),
    ("<basic-shape>", "<fn:basicShape>"),
    ("<bg-image>", "<image> | none"),
    ("<bg-layer>", "<bg-image> || <bg-position> [ / <bg-size> ]? || <repeat-style> || <attachment> || <box>{1,2}"),
    ("<bg-position>", "[ center | [ left | right ] <len-pct>? ] && [ center | [ top | bottom ] <len-pct>? ] | [ left | center | right | <len-pct> ] [ top | center | bottom | <len-pct> ] | [ left | center | right | top | bottom | <len-pct> ]"),
    ("<bg-size>", "[ <len-pct> | auto ]{1,2} | cover | contain"),
    ("<blend-mode>", "normal | multiply | screen | overlay | darken | lighten | color-dodge | color-burn | hard-light | soft-light | difference | exclusion | hue | saturation | color | luminosity | plus-darker | plus-lighter"),
    ("<border-radius-round>", "round <border-radius>"),
    ("<border-shorthand>", "<border-width> || <border-style> || <color>"),
    ("<border-style>", "none | hidden | dotted | dashed | solid | double | groove | ridge | inset | outset"),
    ("<border-width>", "<len> | thin | medium | thick"),
    ("<box-fsv>", "fill-box | stroke-box | view-box"),
    ("<box>", "padding-box | border-box | content-box"),
    ("<color>", "<named-or-hex-color> | <fn:color>"),
    ("<compositing-operator>", "add | subtract | intersect | exclude"),
    ("<contain-intrinsic>", "auto? [ none | <len> ]"),
    ("<content-distribution>", "space-between | space-around | space-evenly | stretch"),
    ("<content-list>", "[ <string> | <image> | <attr> | content( text | before | after | first-letter | marker ) | counter() | counters() | leader() | open-quote | close-quote | no-open-quote | no-close-quote | target-counter() | target-counters() | target-text() ]+"),
    ("<content-position>", "center | start | end | flex-start | flex-end"),
    ("<coord-box>", "<box> | <box-fsv>"),
    ("<counter>", "[ <ident-not-none> <int>? ]+ | none"),
    ("<display-box>", "contents | none"),
    ("<display-inside>", "flow | flow-root | table | flex | grid | ruby"),
    ("<display-internal>", "table-row-group | table-header-group | table-footer-group | table-row | table-cell | table-column-group | table-column | table-caption | ruby-base | ruby-text | ruby-base-container | ruby-text-container"),
    ("<display-legacy>", "inline-block | inline-table | inline-flex | inline-grid"),
    ("<display-listitem>", "<display-outside>? && [ flow | flow-root ]? && list-item"),
    ("<display-outside>", "block | inline | run-in"),
    ("<explicit-track-list>", "[ <line-names>? <track-size> ]+ <line-names>?"),
    ("<family-name>", "<string> | <custom-ident>+"),
    ("<filter-function-list>", "[ <fn:filter> | <url> ]+"),
    ("<final-bg-layer>", "<color> || <bg-image> || <bg-position> [ / <bg-size> ]? || <repeat-style> || <attachment> || <box>{1,2}"),
    ("<fixed-repeat>", "repeat( [ <int1+> ] , [ <line-names>? <fixed-size> ]+ <line-names>? )"),
    ("<fixed-size>", "<len-pct> | minmax( <len-pct> , <track-breadth> | <inflexible-breadth> , <len-pct> )"),
    ("<flex-direction>", "row | row-reverse | column | column-reverse"),
    ("<flex-wrap>", "nowrap | wrap | wrap-reverse"),
    ("<font-short-core>", "<font-size> [ / <line-height> ]? <font-family>"),
    ("<font-short-tweak-no-pct>", "<font-style> || [ normal | small-caps ] || <font-weight> || <font-stretch-named>"),
    ("<font-stretch-named>", "normal | ultra-condensed | extra-condensed | condensed | semi-condensed | semi-expanded | expanded | extra-expanded | ultra-expanded"),
    ("<font-variant-alternates>", "stylistic() || historical-forms || styleset() || character-variant() || swash() || ornaments() || annotation()"),
    ("<font-variant-caps>", "small-caps | all-small-caps | petite-caps | all-petite-caps | unicase | titling-caps"),
    ("<font-variant-east-asian>", "[ jis78|jis83|jis90|jis04|simplified|traditional ] || [ full-width | proportional-width ] || ruby"),
    ("<font-variant-ligatures>", "[ common-ligatures | no-common-ligatures ] || [ discretionary-ligatures | no-discretionary-ligatures ] || [ historical-ligatures | no-historical-ligatures ] || [ contextual | no-contextual ]"),
    ("<font-variant-numeric>", "[ lining-nums | oldstyle-nums ] || [ proportional-nums | tabular-nums ] || [ diagonal-fractions | stacked-fractions ] || ordinal || slashed-zero"),
    ("<generic-family>", "serif | sans-serif | cursive | fantasy | monospace | system-ui | emoji | math | fangsong | ui-serif | ui-sans-serif | ui-monospace | ui-rounded"),
    ("<geometry-box>", "<shape-box> | <box-fsv>"),
    ("<gradient>", "radial-gradient() | linear-gradient() | conic-gradient() | gradient() | repeating-radial-gradient() | repeating-linear-gradient() | repeating-conic-gradient() | repeating-gradient()"),
    ("<grid-line>", "auto | [ <int> && <ident-for-grid>? ] | <ident-for-grid> | [ span && [ <int> || <ident-for-grid> ] ]"),
    ("<image-no-set>", "<url> | <gradient> | -webkit-cross-fade()"),
    ("<image-set>", "[ <image-no-set> | <string> ] [ <resolution> || type( <string> ) ]"),
    ("<image>", "<image-no-set> | image-set( <image-set># )"),
    ("<inflexible-breadth>", "<len-pct> | min-content | max-content | auto"),
    ("<inset-arg>", "<len-pct>{1,4} <border-radius-round>?"),
    ("<inset>", "inset( <inset-arg> )"),
    ("<line-height>", "<num> | <len-pct> | normal"),
    ("<line-names>", "\"[\" <ident-for-grid> \"]\""),
    ("<masking-mode>", "alpha | luminance | match-source"),
    ("<overflow-position>", "unsafe | safe"),
    ("<overflow>", "<vis-hid> | clip | scroll | auto | overlay"),
    ("<overscroll>", "contain | none | auto"),
    ("<paint>", "none | <color> | <url> [ none | <color> ]? | context-fill | context-stroke"),
    ("<position>", "[ [ left | right ] <len-pct> ] && [ [ top | bottom ] <len-pct> ] | [ left | center | right | <len-pct> ] [ top | center | bottom | <len-pct> ]? | [ left | center | right ] || [ top | center | bottom ]"),
    ("<ratio>", "<num0+> [ / <num0+> ]?"),
    ("<ray>", "ray( <angle> && [closest-side | closest-corner | farthest-side | farthest-corner | sides]? && contain? && [at <position>]? )"),
    ("<rect-arg>", "[ <len> | auto ]#{4} <border-radius-round>?"),
    ("<rect>", "rect( <rect-arg> )"),
    ("<relative-size>", "smaller | larger"),
    ("<repeat-style>", "repeat-x | repeat-y | [ repeat | space | round | no-repeat ]{1,2}"),
    ("<rgb-xyz>", "srgb|srgb-linear|display-p3|a98-rgb|prophoto-rgb|rec2020|xyz|xyz-d50|xyz-d65"),
    ("<self-position>", "center | start | end | self-start | self-end | flex-start | flex-end"),
    ("<shadow>", "inset? && [ <len>{2,4} && <color>? ]"),
    ("<shape-box>", "<box> | margin-box"),
    ("<shape-radius>", "<len-pct0+> | closest-side | farthest-side"),
    ("<text-align>", "start | end | left | right | center | justify | match-parent"),
    ("<timing-function>", "linear|ease|ease-in|ease-out|ease-in-out|step-start|step-end | cubic-bezier( <num0-1> , <num> , <num0-1> , <num> ) | linear( [ <num> && [ <pct>{1,2} ]? ]# ) | steps( <int> [ , [ jump-start | jump-end | jump-none | jump-both | start | end ] ]? )"),
    ("<track-breadth>", "<len-pct> | <flex> | min-content | max-content | auto"),
    ("<track-list>", "[ <line-names>? [ <track-size> | <track-repeat> ] ]+ <line-names>?"),
    ("<track-repeat>", "repeat( [ <int1+> ] , [ <line-names>? <track-size> ]+ <line-names>? )"),
    ("<track-size>", "<track-breadth> | minmax( <inflexible-breadth> , <track-breadth> ) | fit-content( <len-pct> )"),
    ("<txbhv>", "normal | allow-discrete"),
    ("<url>", "<uri> | src( <string> [ <ident> | <func> ]* )"),
    ("<vis-hid>", "visible | hidden"),
    ("<width-base>", "<len-pct> | min-content | max-content | -moz-available | -webkit-fill-available | fit-content"),
    ("<width-max>", "none | <width-base>"),
    ("<width>", "auto | <width-base>"),
    ("<xywh-arg>", "<len-pct>{2} <len-pct0+>{2} <border-radius-round>?"),
    ("<xywh>", "xywh( <xywh-arg> )"),
];

#[rustfmt::skip]
static COLOR_FUNCTIONS: &[(&str, &str)] = &[
    ("color", "from <color> [ <custom-prop> [ <num-pct-none> <custom-ident> ]# | <rgb-xyz> [ <num-pct-none> | r | g | b | x | y | z ]{3} ] [ / <num-pct-none> | r | g | b | x | y | z ]? | [ <rgb-xyz> <num-pct-none>{3} | <custom-prop> <num-pct-none># ] <alpha>?"),
    ("color-mix", "in [ srgb | srgb-linear | lab | oklab | xyz | xyz-d50 | xyz-d65 | [ hsl | hwb | lch | oklch ] [ [ shorter | longer | increasing | decreasing ] hue ]? ] , [ <color> && <pct0-100>? ]#{2}"),
    ("hsl", "<hue> , <pct>#{2} [ , <num-pct0+> ]? | [ <hue> | none ] <num-pct-none>{2} <alpha>? | from <color> [ <hue> | <rel-hsl> ] <rel-hsl-num-pct>{2} [ / <rel-hsl-num-pct> ]?"),
    ("hsla", "<hue> , <pct>#{2} [ , <num-pct0+> ]? | [ <hue> | none ] <num-pct-none>{2} <alpha>? | from <color> [ <hue> | <rel-hsl> ] <rel-hsl-num-pct>{2} [ / <rel-hsl-num-pct> ]?"),
    ("hwb", "[ <hue> | none ] <num-pct-none>{2} <alpha>? | from <color> [ <hue> | <rel-hwb> ] <rel-hwb-num-pct>{2} [ / <rel-hwb-num-pct> ]?"),
    ("lab", "<num-pct-none>{3} <alpha>? | from <color> <rel-lab-num-pct>{3} [ / <rel-lab-num-pct> ]?"),
    ("lch", "<num-pct-none>{2} [ <hue> | none ] <alpha>? | from <color> <rel-lch-num-pct>{2} [ <hue> | <rel-lch> ] [ / <rel-lch-num-pct> ]?"),
    ("light-dark", "<color>#{2}"),
    ("oklab", "<num-pct-none>{3} <alpha>? | from <color> <rel-lab-num-pct>{3} [ / <rel-lab-num-pct> ]?"),
    ("oklch", "<num-pct-none>{2} [ <hue> | none ] <alpha>? | from <color> <rel-lch-num-pct>{2} [ <hue> | <rel-lch> ] [ / <rel-lch-num-pct> ]?"),
    ("rgb", "[ <num>#{3} | <pct>#{3} ] [ , <num-pct0+> ]? | <num-pct-none>{3} <alpha>? | from <color> <rel-rgb-num-pct>{3} [ / <rel-rgb-num-pct> ]?"),
    ("rgba", "[ <num>#{3} | <pct>#{3} ] [ , <num-pct0+> ]? | <num-pct-none>{3} <alpha>? | from <color> <rel-rgb-num-pct>{3} [ / <rel-rgb-num-pct> ]?"),
];

#[rustfmt::skip]
static FILTER_FUNCTIONS: &[(&str, &str)] = &[
    ("blur", "<len>?"),
    ("brightness", "<num-pct>?"),
    ("contrast", "<num-pct>?"),
    ("drop-shadow", "[ <len>{2,3} && <color>? ]?"),
    ("grayscale", "<num-pct>?"),
    ("hue-rotate", "<angle-or-0>?"),
    ("invert", "<num-pct>?"),
    ("opacity", "<num-pct>?"),
    ("saturate", "<num-pct>?"),
    ("sepia", "<num-pct>?"),
];

#[rustfmt::skip]
static BASIC_SHAPE_FUNCTIONS: &[(&str, &str)] = &[
    ("circle", "<shape-radius> [ at <position> ]?"),
    ("ellipse", "[ <shape-radius>{2} ]? [ at <position> ]?"),
    ("inset", "<inset-arg>"),
    ("path", "[ <fill-rule> , ]? <string>"),
    ("polygon", "[ <fill-rule> , ]? [ <len-pct> <len-pct> ]#"),
    ("rect", "<rect-arg>"),
    ("xywh", "<xywh-arg>"),
];

#[rustfmt::skip]
static TRANSFORM_FUNCTIONS: &[(&str, &str)] = &[
    ("matrix", "<num>#{6}"),
    ("matrix3d", "<num>#{16}"),
    ("perspective", "<len0+> | none"),
    ("rotate", "<angle-or-0> | none"),
    ("rotate3d", "<num>#{3} , <angle-or-0>"),
    ("rotatex", "<angle-or-0>"),
    ("rotatey", "<angle-or-0>"),
    ("rotatez", "<angle-or-0>"),
    ("scale", "[ <num-pct> ]#{1,2} | none"),
    ("scale3d", "<num-pct>#{3}"),
    ("scalex", "<num-pct>"),
    ("scaley", "<num-pct>"),
    ("scalez", "<num-pct>"),
    ("skew", "<angle-or-0> [ , <angle-or-0> ]?"),
    ("skewx", "<angle-or-0>"),
    ("skewy", "<angle-or-0>"),
    ("translate", "<len-pct>#{1,2} | none"),
    ("translate3d", "<len-pct>#{2} , <len>"),
    ("translatex", "<len-pct>"),
    ("translatey", "<len-pct>"),
    ("translatez", "<len>"),
];
