//! CSS borders: width, line style and color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::parse::{parse_border, CssParseError};
use super::size::CssSize;

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Hidden,
    Dotted,
    Dashed,
    Solid,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
    Initial,
    Inherit,
}

impl BorderStyle {
    /// Every border style.
    pub const ALL: &'static [BorderStyle] = &[
        BorderStyle::None,
        BorderStyle::Hidden,
        BorderStyle::Dotted,
        BorderStyle::Dashed,
        BorderStyle::Solid,
        BorderStyle::Double,
        BorderStyle::Groove,
        BorderStyle::Ridge,
        BorderStyle::Inset,
        BorderStyle::Outset,
        BorderStyle::Initial,
        BorderStyle::Inherit,
    ];

    /// The CSS keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Hidden => "hidden",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Solid => "solid",
            BorderStyle::Double => "double",
            BorderStyle::Groove => "groove",
            BorderStyle::Ridge => "ridge",
            BorderStyle::Inset => "inset",
            BorderStyle::Outset => "outset",
            BorderStyle::Initial => "initial",
            BorderStyle::Inherit => "inherit",
        }
    }

    /// Look up a border style by keyword.
    pub fn from_css_name(name: &str) -> Option<BorderStyle> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|s| s.css_name() == lower)
    }
}

/// A border declaration. Missing parts are left out of the CSS string.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Border {
    pub width: Option<CssSize>,
    pub style: Option<BorderStyle>,
    pub color: Option<Color>,
}

impl Border {
    /// Create a border with all three parts.
    pub fn new(width: CssSize, style: BorderStyle, color: Color) -> Self {
        Self {
            width: Some(width),
            style: Some(style),
            color: Some(color),
        }
    }

    /// Set the width (builder).
    pub fn with_width(mut self, width: CssSize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the line style (builder).
    pub fn with_style(mut self, style: BorderStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the color (builder).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            self.width.map(|w| w.to_string()),
            self.style.map(|s| s.css_name().to_owned()),
            self.color.map(|c| c.to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();
        f.write_str(&parts.join(" "))
    }
}

impl FromStr for Border {
    type Err = CssParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_border(s)
    }
}
