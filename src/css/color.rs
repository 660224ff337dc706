//! CSS colors: packed RGB hex values and named CSS colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse::{parse_color, CssParseError};

macro_rules! named_colors {
    ($($variant:ident => $css:literal,)+) => {
        /// Named CSS colors.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum NamedColor {
            $(
                #[doc = concat!("`", $css, "`")]
                $variant,
            )+
        }

        impl NamedColor {
            /// Every named color, in declaration order.
            pub const ALL: &'static [NamedColor] = &[$(NamedColor::$variant,)+];

            /// The CSS keyword for this color.
            pub fn css_name(self) -> &'static str {
                match self {
                    $(NamedColor::$variant => $css,)+
                }
            }

            /// Look up a color by CSS keyword (case-insensitive).
            pub fn from_css_name(name: &str) -> Option<NamedColor> {
                let lower = name.to_ascii_lowercase();
                match lower.as_str() {
                    $($css => Some(NamedColor::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

named_colors! {
    Aqua => "aqua",
    Black => "black",
    Blue => "blue",
    Fuchsia => "fuchsia",
    Gray => "gray",
    Green => "green",
    Lime => "lime",
    Maroon => "maroon",
    Navy => "navy",
    Olive => "olive",
    Orange => "orange",
    Purple => "purple",
    Red => "red",
    Silver => "silver",
    Teal => "teal",
    White => "white",
    Yellow => "yellow",
    AliceBlue => "aliceblue",
    Beige => "beige",
    Brown => "brown",
    Coral => "coral",
    Crimson => "crimson",
    DarkBlue => "darkblue",
    DarkGray => "darkgray",
    DarkGreen => "darkgreen",
    DarkRed => "darkred",
    Gold => "gold",
    Indigo => "indigo",
    LightBlue => "lightblue",
    LightGray => "lightgray",
    LightGreen => "lightgreen",
    Pink => "pink",
    Salmon => "salmon",
    SkyBlue => "skyblue",
    Tomato => "tomato",
    Violet => "violet",
    Transparent => "transparent",
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// A CSS color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Packed `0xRRGGBB` value, serialized as `#rrggbb`.
    Hex(u32),
    /// A CSS color keyword.
    Named(NamedColor),
}

impl Color {
    /// Create a color from a packed `0xRRGGBB` integer. Bits above 24 are dropped.
    pub fn hex(value: u32) -> Self {
        Color::Hex(value & 0x00ff_ffff)
    }

    /// Create a color from its red, green and blue components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Hex((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Create a named color.
    pub fn named(name: NamedColor) -> Self {
        Color::Named(name)
    }
}

impl From<NamedColor> for Color {
    fn from(name: NamedColor) -> Self {
        Color::Named(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(v) => write!(f, "#{v:06x}"),
            Color::Named(name) => f.write_str(name.css_name()),
        }
    }
}

impl FromStr for Color {
    type Err = CssParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(Color::hex(0x00ff00).to_string(), "#00ff00");
        assert_eq!(Color::hex(0x0000ff).to_string(), "#0000ff");
    }

    #[test]
    fn hex_masks_high_bits() {
        assert_eq!(Color::hex(0xff12_3456), Color::Hex(0x12_3456));
    }

    #[test]
    fn rgb_packs_components() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56), Color::Hex(0x123456));
    }

    #[test]
    fn named_display() {
        assert_eq!(Color::named(NamedColor::Green).to_string(), "green");
        assert_eq!(NamedColor::AliceBlue.to_string(), "aliceblue");
    }

    #[test]
    fn named_lookup_case_insensitive() {
        assert_eq!(NamedColor::from_css_name("RED"), Some(NamedColor::Red));
        assert_eq!(NamedColor::from_css_name("nope"), None);
    }

    #[test]
    fn all_names_round_trip() {
        for &name in NamedColor::ALL {
            assert_eq!(NamedColor::from_css_name(name.css_name()), Some(name));
        }
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::Hex(0xffffff));
        assert_eq!("teal".parse::<Color>().unwrap(), Color::Named(NamedColor::Teal));
    }
}
