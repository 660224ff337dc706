//! PropertyValue: the tagged union stored in a property store.
//!
//! Every property, whatever its Rust type, is stored as a [`PropertyValue`].
//! The [`PropertyType`] trait maps concrete types in and out of the union so
//! typed accessors never need runtime type inspection.

use std::fmt;

use crate::css::parse::{parse_border, parse_color, parse_number, parse_size, CssParseError};
use crate::css::{Background, Border, Color, CssSize};

/// The kind of value a property slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Size,
    Color,
    Border,
    Background,
    Bool,
    Number,
    Integer,
    Text,
    Tag,
}

impl ValueKind {
    /// Lower-case name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Size => "size",
            ValueKind::Color => "color",
            ValueKind::Border => "border",
            ValueKind::Background => "background",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::Text => "text",
            ValueKind::Tag => "tag",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A variant of one of the widget enums (button style, tag type, ...).
///
/// `ty` names the enum so variants of different enums never compare equal;
/// `css` is the string the variant contributes to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumTag {
    pub ty: &'static str,
    pub css: &'static str,
}

/// A stored property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Size(CssSize),
    Color(Color),
    Border(Border),
    Background(Background),
    Bool(bool),
    Number(f64),
    Integer(i64),
    Text(String),
    Tag(EnumTag),
}

impl PropertyValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Size(_) => ValueKind::Size,
            PropertyValue::Color(_) => ValueKind::Color,
            PropertyValue::Border(_) => ValueKind::Border,
            PropertyValue::Background(_) => ValueKind::Background,
            PropertyValue::Bool(_) => ValueKind::Bool,
            PropertyValue::Number(_) => ValueKind::Number,
            PropertyValue::Integer(_) => ValueKind::Integer,
            PropertyValue::Text(_) => ValueKind::Text,
            PropertyValue::Tag(_) => ValueKind::Tag,
        }
    }

    /// Serialize to the string used in CSS or HTML attributes.
    pub fn to_css(&self) -> String {
        match self {
            PropertyValue::Size(s) => s.to_string(),
            PropertyValue::Color(c) => c.to_string(),
            PropertyValue::Border(b) => b.to_string(),
            PropertyValue::Background(b) => b.to_string(),
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Number(n) => n.to_string(),
            PropertyValue::Integer(i) => i.to_string(),
            PropertyValue::Text(t) => t.clone(),
            PropertyValue::Tag(tag) => tag.css.to_owned(),
        }
    }

    /// Parse text into a value of the given kind.
    ///
    /// Backgrounds and enum tags have no text form and always fail.
    pub fn parse(kind: ValueKind, text: &str) -> Result<PropertyValue, CssParseError> {
        match kind {
            ValueKind::Size => parse_size(text).map(PropertyValue::Size),
            ValueKind::Color => parse_color(text).map(PropertyValue::Color),
            ValueKind::Border => parse_border(text).map(PropertyValue::Border),
            ValueKind::Number => parse_number(text).map(PropertyValue::Number),
            ValueKind::Integer => text
                .trim()
                .parse()
                .map(PropertyValue::Integer)
                .map_err(|_| CssParseError::InvalidNumber(text.trim().to_owned())),
            ValueKind::Bool => match text.trim() {
                "true" => Ok(PropertyValue::Bool(true)),
                "false" => Ok(PropertyValue::Bool(false)),
                _ => Err(CssParseError::Unsupported("bool")),
            },
            ValueKind::Text => Ok(PropertyValue::Text(text.to_owned())),
            ValueKind::Background => Err(CssParseError::Unsupported("background")),
            ValueKind::Tag => Err(CssParseError::Unsupported("tag")),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

// ---------------------------------------------------------------------------
// PropertyType
// ---------------------------------------------------------------------------

/// A Rust type that can live in a property slot.
pub trait PropertyType: Clone + PartialEq + 'static {
    /// The slot kind for this type.
    const KIND: ValueKind;

    /// Wrap into the union.
    fn into_value(self) -> PropertyValue;

    /// Unwrap from the union. `None` if the value is of another kind.
    fn from_value(value: &PropertyValue) -> Option<Self>;
}

macro_rules! impl_property_type {
    ($ty:ty, $kind:ident, $variant:ident) => {
        impl PropertyType for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn into_value(self) -> PropertyValue {
                PropertyValue::$variant(self)
            }

            fn from_value(value: &PropertyValue) -> Option<Self> {
                match value {
                    PropertyValue::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }
    };
}

impl_property_type!(CssSize, Size, Size);
impl_property_type!(Color, Color, Color);
impl_property_type!(Border, Border, Border);
impl_property_type!(Background, Background, Background);
impl_property_type!(bool, Bool, Bool);
impl_property_type!(f64, Number, Number);
impl_property_type!(i64, Integer, Integer);
impl_property_type!(String, Text, Text);

/// Declare a widget enum whose variants are stored as [`EnumTag`]s.
///
/// Each variant carries the string it renders as (usually a CSS class or an
/// HTML tag name), available through `css_name()`.
#[macro_export]
macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $css:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The string this variant renders as.
            pub fn css_name(self) -> &'static str {
                match self {
                    $($name::$variant => $css,)+
                }
            }
        }

        impl $crate::property::PropertyType for $name {
            const KIND: $crate::property::ValueKind = $crate::property::ValueKind::Tag;

            fn into_value(self) -> $crate::property::PropertyValue {
                $crate::property::PropertyValue::Tag($crate::property::EnumTag {
                    ty: stringify!($name),
                    css: self.css_name(),
                })
            }

            fn from_value(value: &$crate::property::PropertyValue) -> Option<Self> {
                match value {
                    $crate::property::PropertyValue::Tag(tag) if tag.ty == stringify!($name) => {
                        $name::ALL.iter().copied().find(|v| v.css_name() == tag.css)
                    }
                    _ => None,
                }
            }
        }
    };
}
