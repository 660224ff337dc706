//! Declarations: an ordered list of style writes applied as one batch.

use crate::property::{PropertyType, PropertyValue};

/// Errors from parsing an inline style string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    #[error("declaration {index} has no ':' separator: {text:?}")]
    MissingColon { index: usize, text: String },
    #[error("declaration {index} has an empty property name")]
    EmptyName { index: usize },
}

/// The right-hand side of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declared {
    /// A typed value.
    Value(PropertyValue),
    /// Text parsed against the property's kind when applied.
    Text(String),
    /// Clear the property.
    Clear,
}

/// Ordered style declarations.
///
/// Names may be CSS names (`margin-top`) or property names (`marginTop`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<(String, Declared)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a typed value.
    pub fn value<T: PropertyType>(mut self, name: impl Into<String>, value: T) -> Self {
        self.entries.push((name.into(), Declared::Value(value.into_value())));
        self
    }

    /// Declare a value in text form.
    pub fn text(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.push((name.into(), Declared::Text(text.into())));
        self
    }

    /// Declare that a property is cleared.
    pub fn clear(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), Declared::Clear));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, declared: Declared) {
        self.entries.push((name.into(), declared));
    }

    /// Parse an inline style string such as `"width: 10px; color: red"`.
    ///
    /// Values are kept as text. An empty value declares a clear.
    pub fn parse_inline(input: &str) -> Result<Self, DeclarationError> {
        let mut out = Self::new();
        for (index, part) in input.split(';').enumerate() {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (name, value) = part.split_once(':').ok_or_else(|| DeclarationError::MissingColon {
                index,
                text: part.to_owned(),
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(DeclarationError::EmptyName { index });
            }
            let value = value.trim();
            if value.is_empty() {
                out.push(name, Declared::Clear);
            } else {
                out.push(name, Declared::Text(value.to_owned()));
            }
        }
        Ok(out)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declared)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
