//! CSS background shorthand: color, image, position, size, repeat, attachment.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::size::CssSize;

/// Keyword background sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BgSize {
    Cover,
    Contain,
}

impl BgSize {
    /// The CSS keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            BgSize::Cover => "cover",
            BgSize::Contain => "contain",
        }
    }
}

/// Background repeat modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BgRepeat {
    Repeat,
    RepeatX,
    RepeatY,
    NoRepeat,
    Space,
    Round,
}

impl BgRepeat {
    /// The CSS keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            BgRepeat::Repeat => "repeat",
            BgRepeat::RepeatX => "repeat-x",
            BgRepeat::RepeatY => "repeat-y",
            BgRepeat::NoRepeat => "no-repeat",
            BgRepeat::Space => "space",
            BgRepeat::Round => "round",
        }
    }
}

/// Background attachment modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BgAttach {
    Scroll,
    Fixed,
    Local,
}

impl BgAttach {
    /// The CSS keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            BgAttach::Scroll => "scroll",
            BgAttach::Fixed => "fixed",
            BgAttach::Local => "local",
        }
    }
}

/// A background declaration. Every part is optional.
///
/// Serialized in shorthand order:
/// `color url(image) position-x position-y / size repeat attachment`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Background {
    pub color: Option<Color>,
    pub image: Option<String>,
    pub position_x: Option<CssSize>,
    pub position_y: Option<CssSize>,
    pub size_x: Option<CssSize>,
    pub size_y: Option<CssSize>,
    pub size: Option<BgSize>,
    pub repeat: Option<BgRepeat>,
    pub attachment: Option<BgAttach>,
}

impl Background {
    /// A plain color background.
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Set the image url (builder).
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Set the position (builder).
    pub fn with_position(mut self, x: CssSize, y: CssSize) -> Self {
        self.position_x = Some(x);
        self.position_y = Some(y);
        self
    }

    /// Set an explicit size (builder). Clears any keyword size.
    pub fn with_size(mut self, x: CssSize, y: CssSize) -> Self {
        self.size_x = Some(x);
        self.size_y = Some(y);
        self.size = None;
        self
    }

    /// Set a keyword size (builder). Clears any explicit size.
    pub fn with_size_keyword(mut self, size: BgSize) -> Self {
        self.size = Some(size);
        self.size_x = None;
        self.size_y = None;
        self
    }

    /// Set the repeat mode (builder).
    pub fn with_repeat(mut self, repeat: BgRepeat) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Set the attachment mode (builder).
    pub fn with_attachment(mut self, attachment: BgAttach) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(color) = self.color {
            parts.push(color.to_string());
        }
        if let Some(image) = &self.image {
            parts.push(format!("url({image})"));
        }
        if let Some(x) = self.position_x {
            parts.push(x.to_string());
        }
        if let Some(y) = self.position_y {
            parts.push(y.to_string());
        }
        if let Some(size) = self.size {
            parts.push(format!("/ {}", size.css_name()));
        } else if self.size_x.is_some() || self.size_y.is_some() {
            parts.push("/".to_owned());
            parts.extend(self.size_x.map(|s| s.to_string()));
            parts.extend(self.size_y.map(|s| s.to_string()));
        }
        if let Some(repeat) = self.repeat {
            parts.push(repeat.css_name().to_owned());
        }
        if let Some(attachment) = self.attachment {
            parts.push(attachment.css_name().to_owned());
        }
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::color::NamedColor;

    #[test]
    fn color_only() {
        let bg = Background::color(Color::named(NamedColor::Silver));
        assert_eq!(bg.to_string(), "silver");
    }

    #[test]
    fn full_shorthand() {
        let bg = Background::color(Color::hex(0x112233))
            .with_image("img/bg.png")
            .with_position(CssSize::px(0.0), CssSize::percent(50.0))
            .with_size(CssSize::px(10.0), CssSize::px(20.0))
            .with_repeat(BgRepeat::NoRepeat)
            .with_attachment(BgAttach::Fixed);
        assert_eq!(
            bg.to_string(),
            "#112233 url(img/bg.png) 0px 50% / 10px 20px no-repeat fixed"
        );
    }

    #[test]
    fn keyword_size_replaces_explicit_size() {
        let bg = Background::default()
            .with_size(CssSize::px(1.0), CssSize::px(1.0))
            .with_size_keyword(BgSize::Cover);
        assert_eq!(bg.to_string(), "/ cover");
    }

    #[test]
    fn empty_background() {
        assert_eq!(Background::default().to_string(), "");
    }
}
