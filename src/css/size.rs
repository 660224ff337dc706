//! CSS lengths: CssSize, Unit (px, em, rem, pt, %, vw, vh, auto).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse::{parse_size, CssParseError};

/// A CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Pixels.
    Px,
    /// Relative to the element font size.
    Em,
    /// Relative to the root font size.
    Rem,
    /// Points.
    Pt,
    /// Percentage of the containing block.
    Percent,
    /// Viewport width percentage.
    Vw,
    /// Viewport height percentage.
    Vh,
    /// Browser-computed size.
    Auto,
}

impl Unit {
    /// The CSS suffix written after the number.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Pt => "pt",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Auto => "",
        }
    }

    /// Look up a unit by its CSS suffix.
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        match suffix.to_ascii_lowercase().as_str() {
            "px" => Some(Unit::Px),
            "em" => Some(Unit::Em),
            "rem" => Some(Unit::Rem),
            "pt" => Some(Unit::Pt),
            "%" => Some(Unit::Percent),
            "vw" => Some(Unit::Vw),
            "vh" => Some(Unit::Vh),
            _ => None,
        }
    }
}

/// A CSS length, e.g. `10px`, `50%`, `1.5em`, `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CssSize {
    pub value: f64,
    pub unit: Unit,
}

impl CssSize {
    /// Create a size from a value and a unit.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Create a size in pixels.
    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Create a size in `em`.
    pub fn em(value: f64) -> Self {
        Self::new(value, Unit::Em)
    }

    /// Create a size in `rem`.
    pub fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    /// Create a size in points.
    pub fn pt(value: f64) -> Self {
        Self::new(value, Unit::Pt)
    }

    /// Create a percentage size.
    pub fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// Create a size in viewport-width units.
    pub fn vw(value: f64) -> Self {
        Self::new(value, Unit::Vw)
    }

    /// Create a size in viewport-height units.
    pub fn vh(value: f64) -> Self {
        Self::new(value, Unit::Vh)
    }

    /// The `auto` size.
    pub fn auto() -> Self {
        Self::new(0.0, Unit::Auto)
    }

    /// Returns `true` if this size is `auto`.
    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }
}

impl fmt::Display for CssSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Auto => write!(f, "auto"),
            unit => write!(f, "{}{}", self.value, unit.suffix()),
        }
    }
}

impl FromStr for CssSize {
    type Err = CssParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_size(s)
    }
}
