//! Property grammar tables.
//!
//! The global table covers properties valid in style rules. Descriptor
//! blocks such as `@font-face` or `@counter-style` have their own tables;
//! `@media` features and `@page` declarations fall back to the global table
//! for names their table does not define.

use std::fmt;

/// Value syntax of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// A grammar string in value-definition notation.
    Grammar(&'static str),
    /// Any value is accepted.
    Opaque,
    /// Deprecated but still accepted.
    Obsolete,
}

impl Syntax {
    /// The grammar string, if the syntax has one.
    pub fn grammar(self) -> Option<&'static str> {
        match self {
            Self::Grammar(grammar) => Some(grammar),
            Self::Opaque | Self::Obsolete => None,
        }
    }
}

/// The block a declaration belongs to, selecting its property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Style rules and most at-rule blocks.
    #[default]
    Global,
    CounterStyle,
    FontFace,
    FontPaletteValues,
    /// Media features in `@media` queries.
    Media,
    Page,
    Property,
}

impl Scope {
    /// At-rule name of the scope (`"global"` for [`Scope::Global`]).
    pub fn name(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::CounterStyle => "counter-style",
            Self::FontFace => "font-face",
            Self::FontPaletteValues => "font-palette-values",
            Self::Media => "media",
            Self::Page => "page",
            Self::Property => "property",
        }
    }

    /// Whether names missing from the scope's table are looked up globally.
    pub fn falls_back(self) -> bool {
        matches!(self, Self::Global | Self::Media | Self::Page)
    }

    fn table(self) -> &'static [(&'static str, Syntax)] {
        match self {
            Self::Global => PROPERTIES,
            Self::CounterStyle => COUNTER_STYLE,
            Self::FontFace => FONT_FACE,
            Self::FontPaletteValues => FONT_PALETTE_VALUES,
            Self::Media => MEDIA,
            Self::Page => PAGE,
            Self::Property => PROPERTY,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const DESCRIPTOR_SCOPES: [Scope; 6] = [
    Scope::CounterStyle,
    Scope::FontFace,
    Scope::FontPaletteValues,
    Scope::Media,
    Scope::Page,
    Scope::Property,
];

fn find(table: &'static [(&'static str, Syntax)], name: &str) -> Option<Syntax> {
    table
        .binary_search_by_key(&name, |(n, _)| n)
        .ok()
        .map(|idx| table[idx].1)
}

/// Syntax of a property in the global table. `name` must be lower-case.
pub fn lookup(name: &str) -> Option<Syntax> {
    find(PROPERTIES, name)
}

/// Syntax of a property declared in `scope`, falling back to the global
/// table where the scope allows it.
pub fn lookup_in(scope: Scope, name: &str) -> Option<Syntax> {
    find(scope.table(), name).or_else(|| {
        if scope.falls_back() && scope != Scope::Global {
            lookup(name)
        } else {
            None
        }
    })
}

/// Grammar of a property referenced as `<name>` from another grammar.
///
/// The global table wins; descriptor tables are consulted for names only
/// they define (`<prefix>`, `<pad>`).
pub(crate) fn reference(name: &str) -> Option<&'static str> {
    lookup(name).or_else(|| {
        DESCRIPTOR_SCOPES
            .iter()
            .find_map(|scope| find(scope.table(), name))
    })?
    .grammar()
}

/// Names of every property in the global table.
pub fn names() -> impl Iterator<Item = &'static str> {
    PROPERTIES.iter().map(|(name, _)| *name)
}

#[rustfmt::skip]
static PROPERTIES: &[(&str, Syntax)] = &[
    ("-moz-appearance", Syntax::Grammar("none | button | button-arrow-down | button-arrow-next | button-arrow-previous | button-arrow-up | button-bevel | button-focus | caret | checkbox | checkbox-container | checkbox-label | checkmenuitem | dualbutton | groupbox | listbox | listitem | menuarrow | menubar | menucheckbox | menuimage | menuitem | menuitemtext | menulist | menulist-button | menulist-text | menulist-textfield | menupopup | menuradio | menuseparator | meterbar | meterchunk | progressbar | progressbar-vertical | progresschunk | progresschunk-vertical | radio | radio-container | radio-label | radiomenuitem | range | range-thumb | resizer | resizerpanel | scale-horizontal | scalethumbend | scalethumb-horizontal | scalethumbstart | scalethumbtick | scalethumb-vertical | scale-vertical | scrollbarbutton-down | scrollbarbutton-left | scrollbarbutton-right | scrollbarbutton-up | scrollbarthumb-horizontal | scrollbarthumb-vertical | scrollbartrack-horizontal | scrollbartrack-vertical | searchfield | separator | sheet | spinner | spinner-downbutton | spinner-textfield | spinner-upbutton | splitter | statusbar | statusbarpanel | tab | tabpanel | tabpanels | tab-scroll-arrow-back | tab-scroll-arrow-forward | textfield | textfield-multiline | toolbar | toolbarbutton | toolbarbutton-dropdown | toolbargripper | toolbox | tooltip | treeheader | treeheadercell | treeheadersortarrow | treeitem | treeline | treetwisty | treetwistyopen | treeview | -moz-mac-unified-toolbar | -moz-win-borderless-glass | -moz-win-browsertabbar-toolbox | -moz-win-communicationstext | -moz-win-communications-toolbox | -moz-win-exclude-glass | -moz-win-glass | -moz-win-mediatext | -moz-win-media-toolbox | -moz-window-button-box | -moz-window-button-box-maximized | -moz-window-button-close | -moz-window-button-maximize | -moz-window-button-minimize | -moz-window-button-restore | -moz-window-frame-bottom | -moz-window-frame-left | -moz-window-frame-right | -moz-window-titlebar | -moz-window-titlebar-maximized")),
    ("-ms-appearance", Syntax::Grammar("none | icon | window | desktop | workspace | document | tooltip | dialog | button | push-button | hyperlink | radio | radio-button | checkbox | menu-item | tab | menu | menubar | pull-down-menu | pop-up-menu | list-menu | radio-group | checkbox-group | outline-tree | range | field | combo-box | signature | password | normal")),
    ("-o-appearance", Syntax::Grammar("none | window | desktop | workspace | document | tooltip | dialog | button | push-button | hyperlink | radio | radio-button | checkbox | menu-item | tab | menu | menubar | pull-down-menu | pop-up-menu | list-menu | radio-group | checkbox-group | outline-tree | range | field | combo-box | signature | password | normal")),
    ("-webkit-appearance", Syntax::Grammar("auto | none | button | button-bevel | caps-lock-indicator | caret | checkbox | default-button | listbox | listitem | media-fullscreen-button | media-mute-button | media-play-button | media-seek-back-button | media-seek-forward-button | media-slider | media-sliderthumb | menulist | menulist-button | menulist-text | menulist-textfield | push-button | radio | searchfield | searchfield-cancel-button | searchfield-decoration | searchfield-results-button | searchfield-results-decoration | slider-horizontal | slider-vertical | sliderthumb-horizontal | sliderthumb-vertical | square-button | textarea | textfield | scrollbarbutton-down | scrollbarbutton-left | scrollbarbutton-right | scrollbarbutton-up | scrollbargripper-horizontal | scrollbargripper-vertical | scrollbarthumb-horizontal | scrollbarthumb-vertical | scrollbartrack-horizontal | scrollbartrack-vertical")),
    ("-webkit-box-reflect", Syntax::Grammar("[ above | below | right | left ]? <len>? <image>?")),
    ("-webkit-text-fill-color", Syntax::Grammar("<color>")),
    ("-webkit-text-stroke", Syntax::Grammar("<border-width> || <color>")),
    ("-webkit-text-stroke-color", Syntax::Grammar("<color>")),
    ("-webkit-text-stroke-width", Syntax::Grammar("<border-width>")),
    ("-webkit-user-modify", Syntax::Grammar("read-only | read-write | write-only")),
    ("accent-color", Syntax::Grammar("auto | <color>")),
    ("align-content", Syntax::Grammar("normal | <baseline-position> | <content-distribution> | <overflow-position>? <content-position>")),
    ("align-items", Syntax::Grammar("normal | stretch | <baseline-position> | [ <overflow-position>? <self-position> ]")),
    ("align-self", Syntax::Grammar("auto | normal | stretch | <baseline-position> | <overflow-position>? <self-position>")),
    ("alignment-baseline", Syntax::Grammar("auto | baseline | use-script | before-edge | text-before-edge | after-edge | text-after-edge | central | middle | ideographic | alphabetic | hanging | mathematical")),
    ("all", Syntax::Grammar("initial | inherit | revert | unset")),
    ("animation", Syntax::Grammar("[ <time0+> || <timing-function> || <time> || [ infinite | <num0+> ] || <animation-direction> || <animation-fill-mode> || [ running | paused ] || [ none | <custom-ident> | <string> ] || <animation-timeline> ]#")),
    ("animation-composition", Syntax::Grammar("[ replace | add | accumulate ]#")),
    ("animation-delay", Syntax::Grammar("<time>#")),
    ("animation-direction", Syntax::Grammar("<animation-direction>#")),
    ("animation-duration", Syntax::Grammar("[ auto | <time0+> ]#")),
    ("animation-fill-mode", Syntax::Grammar("<animation-fill-mode>#")),
    ("animation-iteration-count", Syntax::Grammar("[ <num> | infinite ]#")),
    ("animation-name", Syntax::Grammar("[ none | <keyframes-name> ]#")),
    ("animation-play-state", Syntax::Grammar("[ running | paused ]#")),
    ("animation-timeline", Syntax::Grammar("<animation-timeline>#")),
    ("animation-timing-function", Syntax::Grammar("<timing-function>#")),
    ("appearance", Syntax::Grammar("none | auto")),
    ("aspect-ratio", Syntax::Grammar("auto || <ratio>")),
    ("backdrop-filter", Syntax::Grammar("<filter-function-list> | none")),
    ("backface-visibility", Syntax::Grammar("<vis-hid>")),
    ("background", Syntax::Grammar("[ <bg-layer> , ]* <final-bg-layer>")),
    ("background-attachment", Syntax::Grammar("<attachment>#")),
    ("background-blend-mode", Syntax::Grammar("<blend-mode>")),
    ("background-clip", Syntax::Grammar("[ <box> | text ]#")),
    ("background-color", Syntax::Grammar("<color>")),
    ("background-image", Syntax::Grammar("<bg-image>#")),
    ("background-origin", Syntax::Grammar("<box>#")),
    ("background-position", Syntax::Grammar("<bg-position>#")),
    ("background-position-x", Syntax::Grammar("[ center | [ left | right ]? <len-pct>? ]#")),
    ("background-position-y", Syntax::Grammar("[ center | [ top | bottom ]? <len-pct>? ]#")),
    ("background-repeat", Syntax::Grammar("<repeat-style>#")),
    ("background-size", Syntax::Grammar("<bg-size>#")),
    ("baseline-shift", Syntax::Grammar("baseline | sub | super | <len-pct>")),
    ("baseline-source", Syntax::Grammar("auto | first | last")),
    ("block-size", Syntax::Grammar("<width>")),
    ("border", Syntax::Grammar("<border-shorthand>")),
    ("border-block", Syntax::Grammar("<border-shorthand>")),
    ("border-block-color", Syntax::Grammar("<color>{1,2}")),
    ("border-block-end", Syntax::Grammar("<border-shorthand>")),
    ("border-block-end-color", Syntax::Grammar("<color>")),
    ("border-block-end-style", Syntax::Grammar("<border-style>")),
    ("border-block-end-width", Syntax::Grammar("<border-width>")),
    ("border-block-start", Syntax::Grammar("<border-shorthand>")),
    ("border-block-start-color", Syntax::Grammar("<color>")),
    ("border-block-start-style", Syntax::Grammar("<border-style>")),
    ("border-block-start-width", Syntax::Grammar("<border-width>")),
    ("border-block-style", Syntax::Grammar("<border-style>{1,2}")),
    ("border-block-width", Syntax::Grammar("<border-width>{1,2}")),
    ("border-bottom", Syntax::Grammar("<border-shorthand>")),
    ("border-bottom-color", Syntax::Grammar("<color>")),
    ("border-bottom-left-radius", Syntax::Grammar("<len-pct>{1,2}")),
    ("border-bottom-right-radius", Syntax::Grammar("<len-pct>{1,2}")),
    ("border-bottom-style", Syntax::Grammar("<border-style>")),
    ("border-bottom-width", Syntax::Grammar("<border-width>")),
    ("border-collapse", Syntax::Grammar("collapse | separate")),
    ("border-color", Syntax::Grammar("<color>{1,4}")),
    ("border-end-end-radius", Syntax::Grammar("<len-pct>{1,2}")),
    ("border-end-start-radius", Syntax::Grammar("<len-pct>{1,2}")),
    ("border-image", Syntax::Grammar("[ none | <image> ] || <border-image-slice> [ / <border-image-width> | / <border-image-width>? / <border-image-outset> ]? || <border-image-repeat>")),
    ("border-image-outset", Syntax::Grammar("[ <len> | <num> ]{1,4}")),
    ("border-image-repeat", Syntax::Grammar("[ stretch | repeat | round | space ]{1,2}")),
    ("border-image-slice", Syntax::Grammar("<border-image-slice>")),
    ("border-image-source", Syntax::Grammar("<image> | none")),
    ("border-image-width", Syntax::Grammar("[ <len-pct> | <num> | auto ]{1,4}")),
    ("border-inline", Syntax::Grammar("<border-shorthand>")),
    ("border-inline-color", Syntax::Grammar("<color>{1,2}")),
    ("border-inline-end", Syntax::Grammar("<border-shorthand>")),
    ("border-inline-end-color", Syntax::Grammar("<color>")),
    ("border-inline-end-style", Syntax::Grammar("<border-style>")),
    ("border-inline-end-width", Syntax::Grammar("<border-width>")),
    ("border-inline-start", Syntax::Grammar("<border-shorthand>")),
    ("border-inline-start-color", Syntax::Grammar("<color>")),
    ("border-inline-start-style", Syntax::Grammar("<border-style>")),
    ("border-inline-start-width", Syntax::Grammar("<border-width>")),
    ("border-inline-style", Syntax::Grammar("<border-style>{1,2}")),
    ("border-inline-width", Syntax::Grammar("<border-width>{1,2}")),
    ("border-left", Syntax::Grammar("<border-shorthand>")),
    ("border-left-color", Syntax::Grammar("<color>")),
    ("border-left-style", Syntax::Grammar("<border-style>")),
    ("border-left-width", Syntax::Grammar("<border-width>")),
    ("border-radius", Syntax::Grammar("<len-pct0+>{1,4} [ / <len-pct0+>{1,4} ]?")),
    ("border-right", Syntax::Grammar("<border-shorthand>")),
    ("border-right-color", Syntax::Grammar("<color>")),
    ("border-right-style", Syntax::Grammar("<border-style>")),
    ("border-right-width", Syntax::Grammar("<border-width>")),
    ("border-spacing", Syntax::Grammar("<len>{1,2}")),
    ("border-start-end-radius", Syntax::Grammar("<len-pct>{1,2}")),
    ("border-start-start-radius", Syntax::Grammar("<len-pct>{1,2}")),
    ("border-style", Syntax::Grammar("<border-style>{1,4}")),
    ("border-top", Syntax::Grammar("<border-shorthand>")),
    ("border-top-color", Syntax::Grammar("<color>")),
    ("border-top-left-radius", Syntax::Grammar("<len-pct>{1,2}")),
    ("border-top-right-radius", Syntax::Grammar("<len-pct>{1,2}")),
    ("border-top-style", Syntax::Grammar("<border-style>")),
    ("border-top-width", Syntax::Grammar("<border-width>")),
    ("border-width", Syntax::Grammar("<border-width>{1,4}")),
    ("bottom", Syntax::Grammar("<top>")),
    ("box-decoration-break", Syntax::Grammar("slice | clone")),
    ("box-shadow", Syntax::Grammar("none | <shadow>#")),
    ("box-sizing", Syntax::Grammar("content-box | border-box")),
    ("break-after", Syntax::Grammar("<break-inside> | always | left | right | page | column")),
    ("break-before", Syntax::Grammar("<break-after>")),
    ("break-inside", Syntax::Grammar("auto | avoid | avoid-page | avoid-column")),
    ("caption-side", Syntax::Grammar("top | bottom | inline-start | inline-end")),
    ("caret-color", Syntax::Grammar("auto | <color>")),
    ("clear", Syntax::Grammar("none | right | left | both | inline-start | inline-end")),
    ("clip", Syntax::Grammar("<rect> | auto")),
    ("clip-path", Syntax::Grammar("<url> | [ <basic-shape> || <geometry-box> ] | none")),
    ("clip-rule", Syntax::Grammar("<fill-rule>")),
    ("color", Syntax::Grammar("<color>")),
    ("color-interpolation", Syntax::Grammar("auto | sRGB | linearRGB")),
    ("color-interpolation-filters", Syntax::Grammar("<color-interpolation>")),
    ("color-profile", Syntax::Opaque),
    ("color-rendering", Syntax::Grammar("auto | optimizeSpeed | optimizeQuality")),
    ("color-scheme", Syntax::Grammar("normal | [ light | dark | <custom-ident> ]+ && only?")),
    ("column-count", Syntax::Grammar("<int> | auto")),
    ("column-fill", Syntax::Grammar("auto | balance")),
    ("column-gap", Syntax::Grammar("normal | <len-pct>")),
    ("column-rule", Syntax::Grammar("<border-shorthand>")),
    ("column-rule-color", Syntax::Grammar("<color>")),
    ("column-rule-style", Syntax::Grammar("<border-style>")),
    ("column-rule-width", Syntax::Grammar("<border-width>")),
    ("column-span", Syntax::Grammar("none | all")),
    ("column-width", Syntax::Grammar("<len> | auto")),
    ("columns", Syntax::Opaque),
    ("contain", Syntax::Grammar("none | strict | content | [ size || layout || style || paint ]")),
    ("contain-intrinsic-block-size", Syntax::Grammar("<contain-intrinsic>")),
    ("contain-intrinsic-height", Syntax::Grammar("<contain-intrinsic>")),
    ("contain-intrinsic-inline-size", Syntax::Grammar("<contain-intrinsic>")),
    ("contain-intrinsic-size", Syntax::Grammar("<contain-intrinsic>{1,2}")),
    ("contain-intrinsic-width", Syntax::Grammar("<contain-intrinsic>")),
    ("container", Syntax::Grammar("<container-name> [ / <container-type> ]?")),
    ("container-name", Syntax::Grammar("none | <custom-ident>+")),
    ("container-type", Syntax::Grammar("normal || [ size | inline-size ]")),
    ("content", Syntax::Grammar("normal | none | <content-list> [ / <string> ]?")),
    ("content-visibility", Syntax::Grammar("auto | <vis-hid>")),
    ("counter-increment", Syntax::Grammar("<counter>")),
    ("counter-reset", Syntax::Grammar("<counter>")),
    ("counter-set", Syntax::Grammar("<counter>")),
    ("cursor", Syntax::Grammar("[ [ <url> | image-set() ] [ <num> <num> ]? , ]* [ auto | default | none | context-menu | help | pointer | progress | wait | cell | crosshair | text | vertical-text | alias | copy | move | no-drop | not-allowed | grab | grabbing | e-resize | n-resize | ne-resize | nw-resize | s-resize | se-resize | sw-resize | w-resize | ew-resize | ns-resize | nesw-resize | nwse-resize | col-resize | row-resize | all-scroll | zoom-in | zoom-out ]")),
    ("cx", Syntax::Grammar("<x>")),
    ("cy", Syntax::Grammar("<x>")),
    ("d", Syntax::Opaque),
    ("direction", Syntax::Grammar("ltr | rtl")),
    ("display", Syntax::Grammar("[ <display-outside> || <display-inside> ] | <display-listitem> | <display-internal> | <display-box> | <display-legacy> | -webkit-box | -webkit-inline-box | -ms-flexbox")),
    ("dominant-baseline", Syntax::Grammar("auto | text-bottom | alphabetic | ideographic | middle | central | mathematical | hanging | text-top")),
    ("empty-cells", Syntax::Grammar("show | hide")),
    ("field-sizing", Syntax::Grammar("fixed | content")),
    ("fill", Syntax::Grammar("<paint>")),
    ("fill-opacity", Syntax::Grammar("<num0-1>")),
    ("fill-rule", Syntax::Grammar("nonzero | evenodd")),
    ("filter", Syntax::Grammar("<filter-function-list> | <ie-function> | none")),
    ("flex", Syntax::Grammar("none | [ <num>{1,2} || <width> ]")),
    ("flex-basis", Syntax::Grammar("<width>")),
    ("flex-direction", Syntax::Grammar("row | row-reverse | column | column-reverse")),
    ("flex-flow", Syntax::Grammar("<flex-direction> || <flex-wrap>")),
    ("flex-grow", Syntax::Grammar("<num>")),
    ("flex-shrink", Syntax::Grammar("<num>")),
    ("flex-wrap", Syntax::Grammar("nowrap | wrap | wrap-reverse")),
    ("float", Syntax::Grammar("left | right | none | inline-start | inline-end")),
    ("flood-color", Syntax::Opaque),
    ("flood-opacity", Syntax::Grammar("<num0-1>")),
    ("font", Syntax::Grammar("<font-short-tweak-no-pct>? <font-short-core> | [ <font-short-tweak-no-pct> || <pct> ]? <font-short-core> | caption | icon | menu | message-box | small-caption | status-bar")),
    ("font-family", Syntax::Grammar("[ <generic-family> | <family-name> ]#")),
    ("font-feature-settings", Syntax::Grammar("[ <ascii4> [ <int0+> | on | off ]? ]# | normal")),
    ("font-kerning", Syntax::Grammar("auto | normal | none")),
    ("font-language-override", Syntax::Grammar("normal | <string>")),
    ("font-optical-sizing", Syntax::Grammar("auto | none")),
    ("font-palette", Syntax::Grammar("none | normal | light | dark | <custom-ident>")),
    ("font-size", Syntax::Grammar("<absolute-size> | <relative-size> | <len-pct0+>")),
    ("font-size-adjust", Syntax::Grammar("<num> | none")),
    ("font-stretch", Syntax::Grammar("<font-stretch-named> | <pct>")),
    ("font-style", Syntax::Grammar("normal | italic | oblique <angle>?")),
    ("font-synthesis", Syntax::Grammar("none | [ weight || style ]")),
    ("font-synthesis-small-caps", Syntax::Grammar("auto | none")),
    ("font-synthesis-style", Syntax::Grammar("auto | none")),
    ("font-synthesis-weight", Syntax::Grammar("auto | none")),
    ("font-variant", Syntax::Grammar("normal | none | [ <font-variant-ligatures> || <font-variant-alternates> || <font-variant-caps> || <font-variant-numeric> || <font-variant-east-asian> ]")),
    ("font-variant-alternates", Syntax::Grammar("<font-variant-alternates> | normal")),
    ("font-variant-caps", Syntax::Grammar("<font-variant-caps> | normal")),
    ("font-variant-east-asian", Syntax::Grammar("<font-variant-east-asian> | normal")),
    ("font-variant-emoji", Syntax::Grammar("auto | text | emoji | unicode")),
    ("font-variant-ligatures", Syntax::Grammar("<font-variant-ligatures> | normal | none")),
    ("font-variant-numeric", Syntax::Grammar("<font-variant-numeric> | normal")),
    ("font-variant-position", Syntax::Grammar("normal | sub | super")),
    ("font-variation-settings", Syntax::Grammar("normal | [ <string> <num> ]#")),
    ("font-weight", Syntax::Grammar("normal | bold | bolder | lighter | <num1-1000>")),
    ("forced-color-adjust", Syntax::Grammar("auto | none | preserve-parent-color")),
    ("gap", Syntax::Grammar("<column-gap>{1,2}")),
    ("grid", Syntax::Grammar("<grid-template> | <grid-template-rows> / [ auto-flow && dense? ] <grid-auto-columns>? | [ auto-flow && dense? ] <grid-auto-rows>? / <grid-template-columns>")),
    ("grid-area", Syntax::Grammar("<grid-line> [ / <grid-line> ]{0,3}")),
    ("grid-auto-columns", Syntax::Grammar("<track-size>+")),
    ("grid-auto-flow", Syntax::Grammar("[ row | column ] || dense")),
    ("grid-auto-rows", Syntax::Grammar("<track-size>+")),
    ("grid-column", Syntax::Grammar("<grid-line> [ / <grid-line> ]?")),
    ("grid-column-end", Syntax::Grammar("<grid-line>")),
    ("grid-column-gap", Syntax::Obsolete),
    ("grid-column-start", Syntax::Grammar("<grid-line>")),
    ("grid-gap", Syntax::Obsolete),
    ("grid-row", Syntax::Grammar("<grid-line> [ / <grid-line> ]?")),
    ("grid-row-end", Syntax::Grammar("<grid-line>")),
    ("grid-row-gap", Syntax::Obsolete),
    ("grid-row-start", Syntax::Grammar("<grid-line>")),
    ("grid-template", Syntax::Grammar("none | [ <grid-template-rows> / <grid-template-columns> ] | [ <line-names>? <string> <track-size>? <line-names>? ]+ [ / <explicit-track-list> ]?")),
    ("grid-template-areas", Syntax::Grammar("none | <string>+")),
    ("grid-template-columns", Syntax::Grammar("<grid-template-rows>")),
    ("grid-template-rows", Syntax::Grammar("none | <track-list> | <auto-track-list> | subgrid [ <line-names> | repeat( [ <int1+> | auto-fill ] , <line-names>+ ) ]*")),
    ("hanging-punctuation", Syntax::Grammar("none | [ first || [ force-end | allow-end ] || last ]")),
    ("height", Syntax::Grammar("<width>")),
    ("hyphenate-character", Syntax::Grammar("<string> | auto")),
    ("hyphenate-limit-chars", Syntax::Grammar("[ auto | <int> ]{1,3}")),
    ("hyphens", Syntax::Grammar("none | manual | auto")),
    ("image-orientation", Syntax::Grammar("from-image | none | [ <angle> || flip ]")),
    ("image-rendering", Syntax::Grammar("auto | smooth | high-quality | crisp-edges | pixelated | optimizeSpeed | optimizeQuality | -webkit-optimize-contrast")),
    ("image-resolution", Syntax::Opaque),
    ("inline-size", Syntax::Grammar("<width>")),
    ("inset", Syntax::Grammar("<top>{1,4}")),
    ("inset-block", Syntax::Grammar("<top>{1,2}")),
    ("inset-block-end", Syntax::Grammar("<top>")),
    ("inset-block-start", Syntax::Grammar("<top>")),
    ("inset-inline", Syntax::Grammar("<top>{1,2}")),
    ("inset-inline-end", Syntax::Grammar("<top>")),
    ("inset-inline-start", Syntax::Grammar("<top>")),
    ("isolation", Syntax::Grammar("auto | isolate")),
    ("justify-content", Syntax::Grammar("normal | <content-distribution> | <overflow-position>? [ <content-position> | left | right ]")),
    ("justify-items", Syntax::Grammar("normal | stretch | <baseline-position> | [ <overflow-position>? <self-position> ] | [ legacy || [ left | right | center ] ]")),
    ("justify-self", Syntax::Grammar("auto | normal | stretch | <baseline-position> | <overflow-position>? [ <self-position> | left | right ]")),
    ("left", Syntax::Grammar("<top>")),
    ("letter-spacing", Syntax::Grammar("<len> | normal")),
    ("lighting-color", Syntax::Grammar("<color>")),
    ("line-break", Syntax::Grammar("auto | loose | normal | strict | anywhere")),
    ("line-height", Syntax::Grammar("<line-height>")),
    ("list-style", Syntax::Grammar("<list-style-position> || <list-style-image> || <list-style-type>")),
    ("list-style-image", Syntax::Grammar("<image> | none")),
    ("list-style-position", Syntax::Grammar("inside | outside")),
    ("list-style-type", Syntax::Grammar("<string> | disc | circle | square | decimal | decimal-leading-zero | lower-roman | upper-roman | lower-greek | lower-latin | upper-latin | armenian | georgian | lower-alpha | upper-alpha | none | symbols()")),
    ("margin", Syntax::Grammar("<width>{1,4}")),
    ("margin-block", Syntax::Grammar("<width>{1,2}")),
    ("margin-block-end", Syntax::Grammar("<width>")),
    ("margin-block-start", Syntax::Grammar("<width>")),
    ("margin-bottom", Syntax::Grammar("<width>")),
    ("margin-inline", Syntax::Grammar("<width>{1,2}")),
    ("margin-inline-end", Syntax::Grammar("<width>")),
    ("margin-inline-start", Syntax::Grammar("<width>")),
    ("margin-left", Syntax::Grammar("<width>")),
    ("margin-right", Syntax::Grammar("<width>")),
    ("margin-top", Syntax::Grammar("<width>")),
    ("marker", Syntax::Obsolete),
    ("marker-end", Syntax::Opaque),
    ("marker-mid", Syntax::Opaque),
    ("marker-start", Syntax::Opaque),
    ("mask", Syntax::Grammar("[ [ none | <image> ] || <position> [ / <bg-size> ]? || <repeat-style> || <geometry-box> || [ <geometry-box> | no-clip ] || <compositing-operator> || <masking-mode> ]#")),
    ("mask-border", Syntax::Grammar("<mask-border-source> ||<mask-border-slice> [ / <mask-border-width>? [ / <mask-border-outset> ]? ]? ||<mask-border-repeat> || <mask-border-mode>")),
    ("mask-border-mode", Syntax::Grammar("<mask-type>")),
    ("mask-border-outset", Syntax::Grammar("[ <len> | <num> ]{1,4}")),
    ("mask-border-repeat", Syntax::Grammar("[ stretch | repeat | round | space ]{1,2}")),
    ("mask-border-slice", Syntax::Grammar("<num-pct>{1,4} fill?")),
    ("mask-border-source", Syntax::Grammar("none | <image>")),
    ("mask-border-width", Syntax::Grammar("[ <len-pct> | <num> | auto ]{1,4}")),
    ("mask-clip", Syntax::Grammar("[ <coord-box> | no-clip ]#")),
    ("mask-composite", Syntax::Grammar("<compositing-operator>#")),
    ("mask-image", Syntax::Grammar("[ none | <image> ]#")),
    ("mask-mode", Syntax::Grammar("<masking-mode>#")),
    ("mask-origin", Syntax::Grammar("<coord-box>#")),
    ("mask-position", Syntax::Grammar("<position>#")),
    ("mask-repeat", Syntax::Grammar("<repeat-style>#")),
    ("mask-size", Syntax::Grammar("<bg-size>#")),
    ("mask-type", Syntax::Grammar("luminance | alpha")),
    ("math-depth", Syntax::Grammar("auto-add | add(<int>) | <int>")),
    ("math-shift", Syntax::Grammar("<math-style>")),
    ("math-style", Syntax::Grammar("normal | compact")),
    ("max-block-size", Syntax::Grammar("<width-max>")),
    ("max-height", Syntax::Grammar("<width-max>")),
    ("max-inline-size", Syntax::Grammar("<width-max>")),
    ("max-width", Syntax::Grammar("<width-max>")),
    ("min-block-size", Syntax::Grammar("<width>")),
    ("min-height", Syntax::Grammar("<width>")),
    ("min-inline-size", Syntax::Grammar("<width>")),
    ("min-width", Syntax::Grammar("<width>")),
    ("mix-blend-mode", Syntax::Grammar("<blend-mode>")),
    ("object-fit", Syntax::Grammar("fill | contain | cover | none | scale-down")),
    ("object-position", Syntax::Grammar("<position>")),
    ("object-view-box", Syntax::Grammar("none | <inset> | <rect> | <xywh>")),
    ("offset", Syntax::Grammar("[ <offset-position>? <offset-path> [<len-pct> || <offset-rotate>]? | <offset-position> ] [ / <offset-anchor> ]?")),
    ("offset-anchor", Syntax::Grammar("auto | <position>")),
    ("offset-distance", Syntax::Grammar("<len-pct>")),
    ("offset-path", Syntax::Grammar("none | [ <ray> | <url> | <basic-shape> ] || <coord-box>")),
    ("offset-position", Syntax::Grammar("auto | <position>")),
    ("offset-rotate", Syntax::Grammar("[ auto | reverse ] || <angle>")),
    ("opacity", Syntax::Grammar("<num0-1> | <pct>")),
    ("order", Syntax::Grammar("<int>")),
    ("orphans", Syntax::Grammar("<int>")),
    ("outline", Syntax::Grammar("[ <color> | invert ] || [ auto | <border-style> ] || <border-width>")),
    ("outline-color", Syntax::Grammar("<color> | invert")),
    ("outline-offset", Syntax::Grammar("<len>")),
    ("outline-style", Syntax::Grammar("<border-style> | auto")),
    ("outline-width", Syntax::Grammar("<border-width>")),
    ("overflow", Syntax::Grammar("<overflow>{1,2}")),
    ("overflow-anchor", Syntax::Grammar("auto | none")),
    ("overflow-block", Syntax::Grammar("<overflow>")),
    ("overflow-clip-margin", Syntax::Grammar("visual-box | <len0+>")),
    ("overflow-inline", Syntax::Grammar("<overflow>")),
    ("overflow-wrap", Syntax::Grammar("normal | break-word | anywhere")),
    ("overflow-x", Syntax::Grammar("<overflow>")),
    ("overflow-y", Syntax::Grammar("<overflow>")),
    ("overscroll-behavior", Syntax::Grammar("<overscroll>{1,2}")),
    ("overscroll-behavior-block", Syntax::Grammar("<overscroll>")),
    ("overscroll-behavior-inline", Syntax::Grammar("<overscroll>")),
    ("overscroll-behavior-x", Syntax::Grammar("<overscroll>")),
    ("overscroll-behavior-y", Syntax::Grammar("<overscroll>")),
    ("padding", Syntax::Grammar("<len-pct0+>{1,4}")),
    ("padding-block", Syntax::Grammar("<len-pct0+>{1,2}")),
    ("padding-block-end", Syntax::Grammar("<len-pct0+>")),
    ("padding-block-start", Syntax::Grammar("<len-pct0+>")),
    ("padding-bottom", Syntax::Grammar("<len-pct0+>")),
    ("padding-inline", Syntax::Grammar("<len-pct0+>{1,2}")),
    ("padding-inline-end", Syntax::Grammar("<len-pct0+>")),
    ("padding-inline-start", Syntax::Grammar("<len-pct0+>")),
    ("padding-left", Syntax::Grammar("<len-pct0+>")),
    ("padding-right", Syntax::Grammar("<len-pct0+>")),
    ("padding-top", Syntax::Grammar("<len-pct0+>")),
    ("page", Syntax::Grammar("auto | <custom-ident>")),
    ("page-break-after", Syntax::Grammar("auto | always | avoid | left | right | recto | verso")),
    ("page-break-before", Syntax::Grammar("<page-break-after>")),
    ("page-break-inside", Syntax::Grammar("auto | avoid")),
    ("paint-order", Syntax::Grammar("normal | [ fill || stroke || markers ]")),
    ("perspective", Syntax::Grammar("none | <len0+>")),
    ("perspective-origin", Syntax::Grammar("<position>")),
    ("place-content", Syntax::Grammar("<align-content> <justify-content>?")),
    ("place-items", Syntax::Grammar("[ normal | stretch | <baseline-position> | <self-position> ] [ normal | stretch | <baseline-position> | <self-position> ]?")),
    ("place-self", Syntax::Grammar("<align-self> <justify-self>?")),
    ("pointer-events", Syntax::Grammar("auto | none | visiblePainted | visibleFill | visibleStroke | visible | painted | fill | stroke | all")),
    ("position", Syntax::Grammar("static | relative | absolute | fixed | sticky")),
    ("print-color-adjust", Syntax::Grammar("economy | exact")),
    ("quotes", Syntax::Opaque),
    ("r", Syntax::Opaque),
    ("rendering-intent", Syntax::Opaque),
    ("resize", Syntax::Grammar("none | both | horizontal | vertical | block | inline")),
    ("right", Syntax::Grammar("<top>")),
    ("rotate", Syntax::Grammar("none | [ x | y | z | <num>{3} ]? && <angle>")),
    ("row-gap", Syntax::Grammar("<column-gap>")),
    ("ruby-align", Syntax::Opaque),
    ("ruby-position", Syntax::Opaque),
    ("rx", Syntax::Grammar("<x> | auto")),
    ("ry", Syntax::Grammar("<rx>")),
    ("scale", Syntax::Grammar("none | <num-pct>{1,3}")),
    ("scroll-behavior", Syntax::Grammar("auto | smooth")),
    ("scroll-margin", Syntax::Grammar("<len>{1,4}")),
    ("scroll-margin-block", Syntax::Grammar("<len>{1,2}")),
    ("scroll-margin-block-end", Syntax::Grammar("<len>")),
    ("scroll-margin-block-start", Syntax::Grammar("<len>")),
    ("scroll-margin-bottom", Syntax::Grammar("<len>")),
    ("scroll-margin-inline", Syntax::Grammar("<len>{1,2}")),
    ("scroll-margin-inline-end", Syntax::Grammar("<len>")),
    ("scroll-margin-inline-start", Syntax::Grammar("<len>")),
    ("scroll-margin-left", Syntax::Grammar("<len>")),
    ("scroll-margin-right", Syntax::Grammar("<len>")),
    ("scroll-margin-top", Syntax::Grammar("<len>")),
    ("scroll-padding", Syntax::Grammar("<top>{1,4}")),
    ("scroll-padding-block", Syntax::Grammar("<top>{1,2}")),
    ("scroll-padding-block-end", Syntax::Grammar("<top>")),
    ("scroll-padding-block-start", Syntax::Grammar("<top>")),
    ("scroll-padding-bottom", Syntax::Grammar("<top>")),
    ("scroll-padding-inline", Syntax::Grammar("<top>{1,2}")),
    ("scroll-padding-inline-end", Syntax::Grammar("<top>")),
    ("scroll-padding-inline-start", Syntax::Grammar("<top>")),
    ("scroll-padding-left", Syntax::Grammar("<top>")),
    ("scroll-padding-right", Syntax::Grammar("<top>")),
    ("scroll-padding-top", Syntax::Grammar("<top>")),
    ("scroll-snap-align", Syntax::Grammar("[ none | start | end | center ]{1,2}")),
    ("scroll-snap-stop", Syntax::Grammar("normal | always")),
    ("scroll-snap-type", Syntax::Grammar("none | [ x | y | block | inline | both ] [ mandatory | proximity ]?")),
    ("scroll-timeline", Syntax::Grammar("[ <scroll-timeline-name> [ <scroll-timeline-axis> || <scroll-timeline-attachment> ]? ]#")),
    ("scroll-timeline-attachment", Syntax::Grammar("[ local | defer | ancestor ]#")),
    ("scroll-timeline-axis", Syntax::Grammar("<axis>#")),
    ("scroll-timeline-name", Syntax::Grammar("none | <custom-ident>#")),
    ("scrollbar-color", Syntax::Grammar("auto | dark | light | <color>{2}")),
    ("scrollbar-gutter", Syntax::Grammar("auto | stable && both-edges?")),
    ("scrollbar-width", Syntax::Grammar("auto | thin | none")),
    ("shape-image-threshold", Syntax::Grammar("<num-pct>")),
    ("shape-margin", Syntax::Grammar("<len-pct>")),
    ("shape-outside", Syntax::Grammar("none | [ <basic-shape> || <shape-box> ] | <image>")),
    ("shape-rendering", Syntax::Grammar("auto | optimizeSpeed | crispEdges | geometricPrecision")),
    ("speak", Syntax::Grammar("auto | never | always")),
    ("stop-color", Syntax::Opaque),
    ("stop-opacity", Syntax::Grammar("<num0-1>")),
    ("stroke", Syntax::Grammar("<paint>")),
    ("stroke-dasharray", Syntax::Grammar("none | <dasharray>")),
    ("stroke-dashoffset", Syntax::Grammar("<len-pct> | <num>")),
    ("stroke-linecap", Syntax::Grammar("butt | round | square")),
    ("stroke-linejoin", Syntax::Grammar("miter | miter-clip | round | bevel | arcs")),
    ("stroke-miterlimit", Syntax::Grammar("<num0+>")),
    ("stroke-opacity", Syntax::Grammar("<num0-1>")),
    ("stroke-width", Syntax::Grammar("<len-pct> | <num>")),
    ("tab-size", Syntax::Grammar("<num> | <len>")),
    ("table-layout", Syntax::Grammar("auto | fixed")),
    ("text-align", Syntax::Grammar("<text-align> | justify-all")),
    ("text-align-last", Syntax::Grammar("<text-align> | auto")),
    ("text-anchor", Syntax::Grammar("start | middle | end")),
    ("text-combine-upright", Syntax::Grammar("none | all | [ digits <int2-4>? ]")),
    ("text-decoration", Syntax::Grammar("<text-decoration-line> || <text-decoration-style> || <color>")),
    ("text-decoration-color", Syntax::Grammar("<color>")),
    ("text-decoration-line", Syntax::Grammar("none | [ underline || overline || line-through || blink ]")),
    ("text-decoration-skip", Syntax::Grammar("none | auto")),
    ("text-decoration-skip-ink", Syntax::Grammar("none | auto | all")),
    ("text-decoration-style", Syntax::Grammar("solid | double | dotted | dashed | wavy")),
    ("text-decoration-thickness", Syntax::Grammar("auto | from-font | <len-pct>")),
    ("text-emphasis", Syntax::Grammar("<text-emphasis-style> || <color>")),
    ("text-emphasis-color", Syntax::Grammar("<color>")),
    ("text-emphasis-position", Syntax::Grammar("[ over | under ] && [ right | left ]?")),
    ("text-emphasis-style", Syntax::Grammar("none | <string> | [ [ filled | open ] || [ dot | circle | double-circle | triangle | sesame ] ]")),
    ("text-indent", Syntax::Grammar("<len-pct> && hanging? && each-line?")),
    ("text-justify", Syntax::Grammar("auto | none | inter-word | inter-character")),
    ("text-orientation", Syntax::Grammar("mixed | upright | sideways")),
    ("text-overflow", Syntax::Grammar("clip | ellipsis")),
    ("text-rendering", Syntax::Grammar("auto | optimizeSpeed | optimizeLegibility | geometricPrecision")),
    ("text-shadow", Syntax::Grammar("none | [ <color>? && <len>{2,3} ]#")),
    ("text-size-adjust", Syntax::Grammar("auto | none | <pct0+>")),
    ("text-transform", Syntax::Grammar("none | [ capitalize|uppercase|lowercase ] || full-width || full-size-kana")),
    ("text-underline-offset", Syntax::Grammar("<len-pct> | auto")),
    ("text-underline-position", Syntax::Grammar("auto | [ under || [ left | right ] ]")),
    ("text-wrap", Syntax::Grammar("wrap | nowrap | balance | stable | pretty")),
    ("top", Syntax::Grammar("auto | <len-pct>")),
    ("touch-action", Syntax::Grammar("auto | none | pan-x | pan-y | pan-left | pan-right | pan-up | pan-down | manipulation")),
    ("transform", Syntax::Grammar("none | <fn:transform>+")),
    ("transform-box", Syntax::Grammar("content-box | border-box | fill-box | stroke-box | view-box")),
    ("transform-origin", Syntax::Grammar("[ left | center | right | <len-pct> ] [ top | center | bottom | <len-pct> ] <len>? | [ left | center | right | top | bottom | <len-pct> ] | [ [ center | left | right ] && [ center | top | bottom ] ] <len>?")),
    ("transform-style", Syntax::Grammar("flat | preserve-3d")),
    ("transition", Syntax::Grammar("[ [ none | [ all | <custom-ident> ]# ] || <time> || <timing-function> || <time> || <txbhv> ]#")),
    ("transition-behavior", Syntax::Grammar("<txbhv>#")),
    ("transition-delay", Syntax::Grammar("<time>#")),
    ("transition-duration", Syntax::Grammar("<time>#")),
    ("transition-property", Syntax::Grammar("none | [ all | <custom-ident> ]#")),
    ("transition-timing-function", Syntax::Grammar("<timing-function>#")),
    ("translate", Syntax::Grammar("none | <len-pct> [ <len-pct> <len>? ]?")),
    ("unicode-bidi", Syntax::Grammar("normal | embed | isolate | bidi-override | isolate-override | plaintext")),
    ("unicode-range", Syntax::Grammar("<unicode-range>#")),
    ("user-select", Syntax::Grammar("auto | text | none | contain | all")),
    ("vertical-align", Syntax::Grammar("auto | use-script | baseline | sub | super | top | text-top | central | middle | bottom | text-bottom | <len-pct>")),
    ("visibility", Syntax::Grammar("<vis-hid> | collapse")),
    ("white-space", Syntax::Grammar("normal | pre | nowrap | pre-wrap | break-spaces | pre-line")),
    ("widows", Syntax::Grammar("<int>")),
    ("width", Syntax::Grammar("<width>")),
    ("will-change", Syntax::Grammar("auto | <animateable-feature>#")),
    ("word-break", Syntax::Grammar("normal | keep-all | break-all | break-word")),
    ("word-spacing", Syntax::Grammar("<len> | normal")),
    ("word-wrap", Syntax::Grammar("normal | break-word | anywhere")),
    ("writing-mode", Syntax::Grammar("horizontal-tb | vertical-rl | vertical-lr | lr-tb | rl-tb | tb-rl | bt-rl | tb-lr | bt-lr | lr-bt | rl-bt | lr | rl | tb")),
    ("x", Syntax::Grammar("<len-pct> | <num>")),
    ("y", Syntax::Grammar("<x>")),
    ("z-index", Syntax::Grammar("<int> | auto")),
    ("zoom", Syntax::Grammar("<num> | <pct> | normal")),
];

#[rustfmt::skip]
static COUNTER_STYLE: &[(&str, Syntax)] = &[
    ("additive-symbols", Syntax::Grammar("<pad>#")),
    ("fallback", Syntax::Grammar("<ident-not-none>")),
    ("negative", Syntax::Grammar("<prefix>{1,2}")),
    ("pad", Syntax::Grammar("<int0+> && <prefix>")),
    ("prefix", Syntax::Grammar("<string> | <image> | <custom-ident>")),
    ("range", Syntax::Grammar("[ [ <int> | infinite ]{2} ]# | auto")),
    ("speak-as", Syntax::Grammar("auto | bullets | numbers | words | spell-out | <ident-not-none>")),
    ("suffix", Syntax::Grammar("<prefix>")),
    ("symbols", Syntax::Grammar("<prefix>+")),
    ("system", Syntax::Grammar("cyclic | numeric | alphabetic | symbolic | additive | [fixed <int>?] | [ extends <ident-not-none> ]")),
];

#[rustfmt::skip]
static FONT_FACE: &[(&str, Syntax)] = &[
    ("ascent-override", Syntax::Grammar("[ normal | <pct0+> ]{1,2}")),
    ("descent-override", Syntax::Grammar("[ normal | <pct0+> ]{1,2}")),
    ("font-display", Syntax::Grammar("auto | block | swap | fallback | optional")),
    ("font-family", Syntax::Grammar("[ <generic-family> | <family-name> ]#")),
    ("font-size", Syntax::Grammar("<absolute-size> | <relative-size> | <len-pct0+>")),
    ("font-stretch", Syntax::Grammar("auto | <font-stretch>{1,2}")),
    ("font-style", Syntax::Grammar("auto | normal | italic | oblique <angle>{0,2}")),
    ("font-variant", Syntax::Grammar("normal | none | [ <font-variant-ligatures> || <font-variant-alternates> || <font-variant-caps> || <font-variant-numeric> || <font-variant-east-asian> ]")),
    ("font-variation-settings", Syntax::Grammar("normal | [ <string> <num> ]#")),
    ("font-weight", Syntax::Grammar("auto | [ normal | bold | <num1-1000> ]{1,2}")),
    ("line-gap-override", Syntax::Grammar("[ normal | <pct0+> ]{1,2}")),
    ("size-adjust", Syntax::Grammar("<pct0+>")),
    ("src", Syntax::Grammar("[ url() [ format( <string># ) ]? | local( <family-name> ) ]#")),
    ("unicode-range", Syntax::Grammar("<unicode-range>#")),
];

#[rustfmt::skip]
static FONT_PALETTE_VALUES: &[(&str, Syntax)] = &[
    ("base-palette", Syntax::Grammar("light | dark | <int0+>")),
    ("font-family", Syntax::Grammar("[ <generic-family> | <family-name> ]#")),
    ("override-colors", Syntax::Grammar("[ <int0+> <color> ]#")),
];

#[rustfmt::skip]
static MEDIA: &[(&str, Syntax)] = &[
    ("any-hover", Syntax::Grammar("none | hover")),
    ("any-pointer", Syntax::Grammar("none | coarse | fine")),
    ("color", Syntax::Grammar("<int>")),
    ("color-gamut", Syntax::Grammar("srgb | p3 | rec2020")),
    ("color-index", Syntax::Grammar("<int>")),
    ("device-aspect-ratio", Syntax::Grammar("<ratio>")),
    ("device-height", Syntax::Grammar("<len>")),
    ("device-width", Syntax::Grammar("<len>")),
    ("grid", Syntax::Grammar("<int0-1>")),
    ("hover", Syntax::Grammar("none | hover")),
    ("monochrome", Syntax::Grammar("<int>")),
    ("overflow-block", Syntax::Grammar("none | scroll | paged")),
    ("overflow-inline", Syntax::Grammar("none | scroll")),
    ("pointer", Syntax::Grammar("none | coarse | fine")),
    ("resolution", Syntax::Grammar("<resolution> | infinite")),
    ("scan", Syntax::Grammar("interlace | progressive")),
    ("update", Syntax::Grammar("none | slow | fast")),
];

#[rustfmt::skip]
static PAGE: &[(&str, Syntax)] = &[
    ("bleed", Syntax::Grammar("auto | <len>")),
    ("marks", Syntax::Grammar("none | [ crop || cross ]")),
    ("size", Syntax::Grammar("<len>{1,2} | auto | [ [ A3 | A4 | A5 | B4 | B5 | JIS-B4 | JIS-B5 | ledger | legal | letter ] || [ portrait | landscape ] ]")),
];

#[rustfmt::skip]
static PROPERTY: &[(&str, Syntax)] = &[
    ("inherits", Syntax::Grammar("true | false")),
    ("initial-value", Syntax::Opaque),
    ("syntax", Syntax::Grammar("<string>")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_sorted() {
        let mut scopes = DESCRIPTOR_SCOPES.to_vec();
        scopes.push(Scope::Global);
        for scope in scopes {
            let table = scope.table();
            assert!(table.windows(2).all(|w| w[0].0 < w[1].0), "{scope}");
        }
    }

    #[test]
    fn test_global_lookup() {
        assert_eq!(lookup("color"), Some(Syntax::Grammar("<color>")));
        assert_eq!(lookup("grid-gap"), Some(Syntax::Obsolete));
        assert_eq!(lookup("quotes"), Some(Syntax::Opaque));
        assert_eq!(lookup("colour"), None);
        assert!(names().any(|n| n == "border-top-width"));
        assert!(lookup("contain-intrinsic-width").is_some());
    }

    #[test]
    fn test_scoped_lookup() {
        assert!(lookup_in(Scope::FontFace, "src").is_some());
        assert_eq!(lookup_in(Scope::FontFace, "color"), None);
        assert!(lookup_in(Scope::Page, "margin-top").is_some());
        assert!(lookup_in(Scope::Page, "marks").is_some());
        assert_eq!(lookup_in(Scope::Media, "min-width"), lookup("min-width"));
        assert_eq!(lookup_in(Scope::Property, "inherits"), Some(Syntax::Grammar("true | false")));
        assert_eq!(lookup_in(Scope::Property, "color"), None);
    }

    #[test]
    fn test_references() {
        assert_eq!(reference("x"), Some("<len-pct> | <num>"));
        assert_eq!(reference("prefix"), Some("<string> | <image> | <custom-ident>"));
        assert_eq!(reference("quotes"), None);
    }
}
