//! Value parsing: CSS text → typed values.
//!
//! Parses the string form of a CSS value (as typed by a user, read back from
//! a browser control, or written in a stylesheet) into [`CssSize`], [`Color`],
//! [`Border`] and plain numbers.

use super::border::{Border, BorderStyle};
use super::color::{Color, NamedColor};
use super::size::{CssSize, Unit};
use super::tokenizer::{tokenize, Token};

/// Errors from value parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CssParseError {
    #[error("empty value")]
    Empty,
    #[error("unexpected character at position {0}")]
    Lex(usize),
    #[error("invalid size: {0}")]
    InvalidSize(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid border: {0}")]
    InvalidBorder(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("cannot parse a {0} value from text")]
    Unsupported(&'static str),
}

fn tokens(input: &str) -> Result<Vec<(Token, &str)>, CssParseError> {
    let tokens = tokenize(input).map_err(|e| CssParseError::Lex(e.position))?;
    if tokens.is_empty() {
        return Err(CssParseError::Empty);
    }
    Ok(tokens)
}

/// Split a dimension slice like `10px` or `50%` into its number and unit.
fn split_dimension(text: &str) -> Option<CssSize> {
    let idx = text
        .find(|c: char| c.is_ascii_alphabetic() || c == '%')
        .unwrap_or(text.len());
    let (number, suffix) = text.split_at(idx);
    let value: f64 = number.parse().ok()?;
    let unit = Unit::from_suffix(suffix)?;
    Some(CssSize::new(value, unit))
}

/// Convert a single token into a size, if it is one.
///
/// A bare `0` is accepted as `0px`; other unitless numbers are not sizes.
fn token_size(token: Token, text: &str) -> Option<CssSize> {
    match token {
        Token::Dimension => split_dimension(text),
        Token::Number if text.parse::<f64>().ok() == Some(0.0) => Some(CssSize::px(0.0)),
        Token::Ident if text.eq_ignore_ascii_case("auto") => Some(CssSize::auto()),
        _ => None,
    }
}

/// Parse a hex color body (without `#`): `rgb` or `rrggbb`.
fn parse_hex(body: &str) -> Option<Color> {
    match body.len() {
        3 => {
            let mut value = 0u32;
            for ch in body.chars() {
                let d = ch.to_digit(16)?;
                value = (value << 8) | (d << 4) | d;
            }
            Some(Color::Hex(value))
        }
        6 => u32::from_str_radix(body, 16).ok().map(Color::Hex),
        _ => None,
    }
}

/// Convert a single token into a color, if it is one.
fn token_color(token: Token, text: &str) -> Option<Color> {
    match token {
        Token::HexColor => parse_hex(&text[1..]),
        Token::Ident => NamedColor::from_css_name(text).map(Color::Named),
        _ => None,
    }
}

/// Parse a single CSS length: `10px`, `50%`, `1.5em`, `auto`, `0`.
pub fn parse_size(input: &str) -> Result<CssSize, CssParseError> {
    match tokens(input)?.as_slice() {
        [(token, text)] => {
            token_size(*token, text).ok_or_else(|| CssParseError::InvalidSize(input.trim().to_owned()))
        }
        _ => Err(CssParseError::InvalidSize(input.trim().to_owned())),
    }
}

/// Parse a color: `#rgb`, `#rrggbb` or a CSS color keyword.
pub fn parse_color(input: &str) -> Result<Color, CssParseError> {
    match tokens(input)?.as_slice() {
        [(token, text)] => {
            token_color(*token, text).ok_or_else(|| CssParseError::InvalidColor(input.trim().to_owned()))
        }
        _ => Err(CssParseError::InvalidColor(input.trim().to_owned())),
    }
}

/// Parse a border shorthand: any of `<width> <style> <color>`, in any order,
/// each at most once.
pub fn parse_border(input: &str) -> Result<Border, CssParseError> {
    let invalid = || CssParseError::InvalidBorder(input.trim().to_owned());
    let mut border = Border::default();
    for (token, text) in tokens(input)? {
        if let Some(size) = token_size(token, text) {
            if border.width.replace(size).is_some() {
                return Err(invalid());
            }
        } else if let Some(style) =
            (token == Token::Ident).then(|| BorderStyle::from_css_name(text)).flatten()
        {
            if border.style.replace(style).is_some() {
                return Err(invalid());
            }
        } else if let Some(color) = token_color(token, text) {
            if border.color.replace(color).is_some() {
                return Err(invalid());
            }
        } else {
            return Err(invalid());
        }
    }
    Ok(border)
}

/// Parse a plain number such as an opacity.
pub fn parse_number(input: &str) -> Result<f64, CssParseError> {
    match tokens(input)?.as_slice() {
        [(Token::Number, text)] => text
            .parse()
            .map_err(|_| CssParseError::InvalidNumber(input.trim().to_owned())),
        _ => Err(CssParseError::InvalidNumber(input.trim().to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Sizes ────────────────────────────────────────────────────────

    #[test]
    fn size_units() {
        assert_eq!(parse_size("10px").unwrap(), CssSize::px(10.0));
        assert_eq!(parse_size(" 50% ").unwrap(), CssSize::percent(50.0));
        assert_eq!(parse_size("1.5rem").unwrap(), CssSize::rem(1.5));
        assert_eq!(parse_size("AUTO").unwrap(), CssSize::auto());
    }

    #[test]
    fn size_zero_without_unit() {
        assert_eq!(parse_size("0").unwrap(), CssSize::px(0.0));
    }

    #[test]
    fn size_rejects_unitless_number() {
        assert_eq!(parse_size("12"), Err(CssParseError::InvalidSize("12".into())));
    }

    #[test]
    fn size_rejects_two_values() {
        assert!(parse_size("1px 2px").is_err());
    }

    #[test]
    fn size_empty() {
        assert_eq!(parse_size(""), Err(CssParseError::Empty));
    }

    #[test]
    fn size_lex_error() {
        assert_eq!(parse_size("10px!"), Err(CssParseError::Lex(4)));
    }

    // ── Colors ───────────────────────────────────────────────────────

    #[test]
    fn color_short_hex_expands() {
        assert_eq!(parse_color("#0f0").unwrap(), Color::Hex(0x00ff00));
    }

    #[test]
    fn color_long_hex() {
        assert_eq!(parse_color("#123abc").unwrap(), Color::Hex(0x123abc));
    }

    #[test]
    fn color_rejects_alpha_hex() {
        assert!(parse_color("#11223344").is_err());
    }

    #[test]
    fn color_keyword() {
        assert_eq!(parse_color("Navy").unwrap(), Color::Named(NamedColor::Navy));
        assert!(parse_color("notacolor").is_err());
    }

    // ── Borders ──────────────────────────────────────────────────────

    #[test]
    fn border_any_order() {
        let b = parse_border("red 1px solid").unwrap();
        assert_eq!(b.to_string(), "1px solid red");
    }

    #[test]
    fn border_partial() {
        let b = parse_border("dotted").unwrap();
        assert_eq!(b.style, Some(BorderStyle::Dotted));
        assert!(b.width.is_none());
        assert!(b.color.is_none());
    }

    #[test]
    fn border_duplicate_part_rejected() {
        assert!(parse_border("1px 2px solid").is_err());
        assert!(parse_border("solid dashed").is_err());
    }

    #[test]
    fn border_unknown_word_rejected() {
        assert!(parse_border("1px wavy").is_err());
    }

    // ── Numbers ──────────────────────────────────────────────────────

    #[test]
    fn number_parses() {
        assert_eq!(parse_number("0.5").unwrap(), 0.5);
        assert!(parse_number("half").is_err());
    }
}
