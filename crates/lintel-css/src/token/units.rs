//! Dimension units and their categories.

use std::fmt;

/// The category a dimension unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitCategory {
    /// `px`, `em`, `vw`, ...
    Length,
    /// `deg`, `rad`, ...
    Angle,
    /// `s`, `ms`.
    Time,
    /// `hz`, `khz`.
    Frequency,
    /// `dpi`, `dppx`, ...
    Resolution,
    /// `fr`.
    Flex,
    /// Plain numbers, percentages and unrecognized units.
    #[default]
    Unknown,
}

impl UnitCategory {
    /// Look up the category of a lower-case unit.
    pub fn of(unit: &str) -> Self {
        match unit {
            "cap" | "ch" | "em" | "ex" | "ic" | "lh" | "rcap" | "rch" | "rem" | "rex" | "ric"
            | "rlh" | "cm" | "mm" | "in" | "pc" | "pt" | "px" | "q" | "cqw" | "cqh" | "cqi"
            | "cqb" | "cqmin" | "cqmax" => Self::Length,
            "deg" | "grad" | "rad" | "turn" => Self::Angle,
            "ms" | "s" => Self::Time,
            "hz" | "khz" => Self::Frequency,
            "dpcm" | "dpi" | "dppx" | "x" => Self::Resolution,
            "fr" => Self::Flex,
            _ if is_viewport_unit(unit) => Self::Length,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Angle => "angle",
            Self::Time => "time",
            Self::Frequency => "frequency",
            Self::Resolution => "resolution",
            Self::Flex => "flex",
            Self::Unknown => "dimension",
        };
        f.write_str(name)
    }
}

/// `vb vi vh vw vmin vmax` and their `d`/`l`/`s` dynamic, large and small variants.
fn is_viewport_unit(unit: &str) -> bool {
    let base = match unit.as_bytes().first() {
        Some(b'd' | b'l' | b's') => &unit[1..],
        _ => unit,
    };
    matches!(base, "vb" | "vi" | "vh" | "vw" | "vmin" | "vmax")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(UnitCategory::of("px"), UnitCategory::Length);
        assert_eq!(UnitCategory::of("svh"), UnitCategory::Length);
        assert_eq!(UnitCategory::of("dvmax"), UnitCategory::Length);
        assert_eq!(UnitCategory::of("turn"), UnitCategory::Angle);
        assert_eq!(UnitCategory::of("ms"), UnitCategory::Time);
        assert_eq!(UnitCategory::of("khz"), UnitCategory::Frequency);
        assert_eq!(UnitCategory::of("x"), UnitCategory::Resolution);
        assert_eq!(UnitCategory::of("fr"), UnitCategory::Flex);
        assert_eq!(UnitCategory::of("foo"), UnitCategory::Unknown);
        assert_eq!(UnitCategory::of("dvx"), UnitCategory::Unknown);
    }
}
