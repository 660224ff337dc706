//! The css! macro: parse style declarations at compile time and generate a
//! `Declarations` builder chain.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitFloat, LitInt, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A single parsed CSS value token.
#[derive(Debug, Clone)]
pub(crate) enum CssValue {
    /// A bare identifier like `red`, `solid`, `auto`.
    Ident(String, Span),
    /// A unitless number.
    Number(f64, Span),
    /// A number followed by `%`.
    Percent(f64, Span),
    /// A number with a unit suffix: `10px`, `2.5pt`, `50vw`.
    Dimension(f64, String, Span),
    /// A hex color body, without the `#`.
    Hash(String, Span),
    /// A quoted string, passed through as text.
    Str(String, Span),
}

impl CssValue {
    fn span(&self) -> Span {
        match self {
            CssValue::Ident(_, s)
            | CssValue::Number(_, s)
            | CssValue::Percent(_, s)
            | CssValue::Dimension(_, _, s)
            | CssValue::Hash(_, s)
            | CssValue::Str(_, s) => *s,
        }
    }

    /// The value as CSS text.
    fn css_text(&self) -> String {
        match self {
            CssValue::Ident(s, _) | CssValue::Str(s, _) => s.clone(),
            CssValue::Number(n, _) => format_number(*n),
            CssValue::Percent(n, _) => format!("{}%", format_number(*n)),
            CssValue::Dimension(n, unit, _) => format!("{}{}", format_number(*n), unit),
            CssValue::Hash(hex, _) => format!("#{hex}"),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// A single declaration: `property-name: value1 value2;`
#[derive(Debug, Clone)]
pub(crate) struct CssDeclaration {
    /// The property name in kebab-case (e.g. "margin-top").
    pub name: String,
    pub name_span: Span,
    pub values: Vec<CssValue>,
}

#[derive(Debug)]
struct CssInput {
    declarations: Vec<CssDeclaration>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for CssInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut declarations = Vec::new();
        while !input.is_empty() {
            declarations.push(parse_declaration(input)?);
        }
        Ok(CssInput { declarations })
    }
}

/// Parse a single declaration: `property-name: values;`
pub(crate) fn parse_declaration(input: ParseStream) -> Result<CssDeclaration> {
    let first_ident: Ident = input.parse()?;
    let mut name = first_ident.to_string();
    let name_span = first_ident.span();

    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let next: Ident = input.parse()?;
        name.push('-');
        name.push_str(&next.to_string());
    }

    input.parse::<Token![:]>()?;

    let mut values = Vec::new();
    while !input.is_empty() && !input.peek(Token![;]) {
        values.push(parse_css_value(input)?);
    }
    // The trailing `;` of the last declaration is optional.
    if !input.is_empty() {
        input.parse::<Token![;]>()?;
    }

    if values.is_empty() {
        return Err(Error::new(name_span, format!("property `{name}` has no value")));
    }

    Ok(CssDeclaration { name, name_span, values })
}

/// A number literal with its suffix split off: `10px` is `(10.0, "px")`.
fn number_literal(input: ParseStream) -> Result<(f64, String, Span)> {
    if input.peek(LitFloat) {
        let lit: LitFloat = input.parse()?;
        let value = lit
            .base10_digits()
            .parse()
            .map_err(|_| Error::new(lit.span(), "invalid number"))?;
        return Ok((value, lit.suffix().to_owned(), lit.span()));
    }
    let lit: LitInt = input.parse()?;
    let value = lit
        .base10_digits()
        .parse()
        .map_err(|_| Error::new(lit.span(), "invalid number"))?;
    Ok((value, lit.suffix().to_owned(), lit.span()))
}

/// Parse a number with whatever unit follows it.
fn parse_number_value(input: ParseStream, negative: bool) -> Result<CssValue> {
    let (mut value, suffix, span) = number_literal(input)?;
    if negative {
        value = -value;
    }
    if !suffix.is_empty() {
        return Ok(CssValue::Dimension(value, suffix, span));
    }
    if input.peek(Token![%]) {
        input.parse::<Token![%]>()?;
        return Ok(CssValue::Percent(value, span));
    }
    Ok(CssValue::Number(value, span))
}

/// Parse a single CSS value token.
pub(crate) fn parse_css_value(input: ParseStream) -> Result<CssValue> {
    // `#abc` is an ident; `#1a1a2e` lexes as the integer `1` with suffix
    // `a1a2e`, and `#123456` as a plain integer.
    if input.peek(Token![#]) {
        let hash = input.parse::<Token![#]>()?;
        let body = if input.peek(Ident) {
            input.parse::<Ident>()?.to_string()
        } else if input.peek(LitInt) {
            let lit: LitInt = input.parse()?;
            let mut s = lit.to_string();
            if input.peek(Ident) {
                s.push_str(&input.parse::<Ident>()?.to_string());
            }
            s
        } else {
            return Err(input.error("expected hex color value after `#`"));
        };
        return Ok(CssValue::Hash(body, hash.span));
    }

    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        return Ok(CssValue::Str(lit.value(), lit.span()));
    }

    if input.peek(LitFloat) || input.peek(LitInt) {
        return parse_number_value(input, false);
    }

    if input.peek(Ident) {
        let ident: Ident = input.parse()?;
        return Ok(CssValue::Ident(ident.to_string(), ident.span()));
    }

    if input.peek(Token![-]) {
        let neg = input.parse::<Token![-]>()?;
        if input.peek(LitFloat) || input.peek(LitInt) {
            return parse_number_value(input, true);
        }
        return Err(Error::new(neg.span, "expected a number after `-`"));
    }

    Err(input.error("unexpected token in CSS value"))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

const SIZE_PROPERTIES: &[&str] = &[
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
];

const BORDER_PROPERTIES: &[&str] = &["border", "border-top", "border-right", "border-bottom", "border-left"];

const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset", "initial",
    "inherit",
];

/// Units a size may carry. `em` and `rem` do not survive Rust's lexer
/// (`2em` reads as a broken exponent), so those are written as strings.
const SIZE_UNITS: &[&str] = &["px", "pt", "vw", "vh"];

fn single_value<'a>(decl: &'a CssDeclaration) -> Result<&'a CssValue> {
    match decl.values.as_slice() {
        [value] => Ok(value),
        [_, extra, ..] => Err(Error::new(
            extra.span(),
            format!("`{}` takes a single value", decl.name),
        )),
        [] => Err(Error::new(decl.name_span, format!("property `{}` has no value", decl.name))),
    }
}

/// Parse a hex body into its `0xRRGGBB` value.
fn hex_value(body: &str, span: Span) -> Result<u32> {
    let invalid = || Error::new(span, format!("invalid hex color `#{body}`; expected 3 or 6 hex digits"));
    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    match body.len() {
        3 => Ok(body.chars().fold(0u32, |acc, c| {
            let d = c.to_digit(16).unwrap_or(0);
            (acc << 8) | (d << 4) | d
        })),
        6 => u32::from_str_radix(body, 16).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn is_color_keyword(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic())
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn size_expr(value: &CssValue) -> Result<TokenStream> {
    match value {
        CssValue::Number(n, _) if *n == 0.0 => Ok(quote! { ::trellis::css::CssSize::px(0.0) }),
        CssValue::Number(_, span) => Err(Error::new(*span, "a size needs a unit, e.g. `10px` or `50%`")),
        CssValue::Percent(n, _) => Ok(quote! { ::trellis::css::CssSize::percent(#n) }),
        CssValue::Dimension(n, unit, span) => match unit.as_str() {
            "px" => Ok(quote! { ::trellis::css::CssSize::px(#n) }),
            "pt" => Ok(quote! { ::trellis::css::CssSize::pt(#n) }),
            "vw" => Ok(quote! { ::trellis::css::CssSize::vw(#n) }),
            "vh" => Ok(quote! { ::trellis::css::CssSize::vh(#n) }),
            _ => Err(Error::new(
                *span,
                format!("unknown unit `{unit}`; expected one of {SIZE_UNITS:?}, or a string like \"1.5em\""),
            )),
        },
        CssValue::Ident(s, _) if s == "auto" => Ok(quote! { ::trellis::css::CssSize::auto() }),
        other => Err(Error::new(other.span(), "expected a size (`10px`, `50%`, `0` or `auto`)")),
    }
}

/// Validate a border shorthand and return its CSS text.
fn border_text(decl: &CssDeclaration) -> Result<String> {
    let (mut width, mut style, mut color) = (false, false, false);
    let mut parts = Vec::with_capacity(decl.values.len());
    for value in &decl.values {
        let slot = match value {
            CssValue::Ident(s, _) if BORDER_STYLES.contains(&s.as_str()) => &mut style,
            CssValue::Ident(s, _) if is_color_keyword(s) => &mut color,
            CssValue::Hash(body, span) => {
                hex_value(body, *span)?;
                &mut color
            }
            CssValue::Number(..) | CssValue::Dimension(..) | CssValue::Percent(..) => {
                size_expr(value)?;
                &mut width
            }
            other => return Err(Error::new(other.span(), "expected a border width, style or color")),
        };
        if std::mem::replace(slot, true) {
            return Err(Error::new(value.span(), format!("duplicate part in `{}`", decl.name)));
        }
        parts.push(value.css_text());
    }
    Ok(parts.join(" "))
}

/// Generate the builder call for a single declaration.
fn generate_declaration(decl: &CssDeclaration) -> Result<TokenStream> {
    let name = decl.name.as_str();

    // Strings are passed through and parsed against the property's kind.
    if let [CssValue::Str(text, _)] = decl.values.as_slice() {
        if SIZE_PROPERTIES.contains(&name) || BORDER_PROPERTIES.contains(&name) || name == "color" || name == "opacity"
        {
            return Ok(quote! { .text(#name, #text) });
        }
    }

    if SIZE_PROPERTIES.contains(&name) {
        let size = size_expr(single_value(decl)?)?;
        return Ok(quote! { .value(#name, #size) });
    }

    if BORDER_PROPERTIES.contains(&name) {
        let text = border_text(decl)?;
        return Ok(quote! { .text(#name, #text) });
    }

    match name {
        "color" => match single_value(decl)? {
            CssValue::Hash(body, span) => {
                let hex = hex_value(body, *span)?;
                Ok(quote! { .value("color", ::trellis::css::Color::hex(#hex)) })
            }
            CssValue::Ident(keyword, _) if is_color_keyword(keyword) => Ok(quote! { .text("color", #keyword) }),
            other => Err(Error::new(other.span(), "expected a color (`#rrggbb`, `#rgb` or a keyword)")),
        },
        "background" => match single_value(decl)? {
            CssValue::Hash(body, span) => {
                let hex = hex_value(body, *span)?;
                Ok(quote! {
                    .value("background", ::trellis::css::Background::color(::trellis::css::Color::hex(#hex)))
                })
            }
            other => Err(Error::new(other.span(), "expected a hex background color")),
        },
        "opacity" => match single_value(decl)? {
            CssValue::Number(n, _) if (0.0..=1.0).contains(n) => Ok(quote! { .value("opacity", #n) }),
            CssValue::Number(n, span) => Err(Error::new(*span, format!("opacity {n} is outside 0..=1"))),
            other => Err(Error::new(other.span(), "expected a number between 0 and 1")),
        },
        _ => Err(Error::new(decl.name_span, format!("unknown CSS property `{name}`"))),
    }
}

/// Entry point for the css! macro.
pub(crate) fn css_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: CssInput = syn::parse2(input)?;
    let calls = parsed
        .declarations
        .iter()
        .map(generate_declaration)
        .collect::<Result<Vec<_>>>()?;
    Ok(quote! {
        ::trellis::style::Declarations::new() #(#calls)*
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: TokenStream) -> String {
        css_impl(input).expect("valid css").to_string()
    }

    fn error(input: TokenStream) -> String {
        css_impl(input).expect_err("invalid css").to_string()
    }

    #[test]
    fn parse_kebab_declaration() {
        let decl = syn::parse::Parser::parse2(parse_declaration, quote! { margin-top: 10px; }).unwrap();
        assert_eq!(decl.name, "margin-top");
        assert!(matches!(decl.values.as_slice(), [CssValue::Dimension(v, u, _)] if *v == 10.0 && u == "px"));
    }

    #[test]
    fn parse_value_kinds() {
        let input: CssInput = syn::parse2(quote! {
            width: 50%;
            border: 2px dashed #1a1a2e;
            opacity: 0.5;
            margin: -4px;
            padding: "1.5em"
        })
        .unwrap();
        let decls = &input.declarations;
        assert_eq!(decls.len(), 5);
        assert!(matches!(decls[0].values[0], CssValue::Percent(v, _) if v == 50.0));
        assert!(matches!(&decls[1].values[2], CssValue::Hash(h, _) if h == "1a1a2e"));
        assert!(matches!(decls[2].values[0], CssValue::Number(v, _) if v == 0.5));
        assert!(matches!(decls[3].values[0], CssValue::Dimension(v, _, _) if v == -4.0));
        assert!(matches!(&decls[4].values[0], CssValue::Str(s, _) if s == "1.5em"));
    }

    #[test]
    fn sizes_become_typed_values() {
        let out = expand(quote! { width: 10px; height: auto; margin-left: 0; });
        assert!(out.contains("CssSize :: px (10f64)"), "{out}");
        assert!(out.contains("CssSize :: auto ()"), "{out}");
        assert!(out.contains("CssSize :: px (0.0)"), "{out}");
        assert!(out.starts_with(":: trellis :: style :: Declarations :: new ()"), "{out}");
    }

    #[test]
    fn hex_colors_expand() {
        let out = expand("color: #f00; background: #1a1a2e;".parse().unwrap());
        assert!(out.contains(&format!("Color :: hex ({}u32)", 0xff0000u32)), "{out}");
        assert!(out.contains(&format!("Color :: hex ({}u32)", 0x1a1a2eu32)), "{out}");
    }

    #[test]
    fn borders_and_keywords_pass_as_text() {
        let out = expand(quote! { border: 1px solid red; color: navy; });
        assert!(out.contains(r#". text ("border" , "1px solid red")"#), "{out}");
        assert!(out.contains(r#". text ("color" , "navy")"#), "{out}");
    }

    #[test]
    fn unknown_property_rejected() {
        assert!(error(quote! { float: left; }).contains("unknown CSS property `float`"));
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(error(quote! { width: 10; }).contains("needs a unit"));
        assert!(error(quote! { width: 10fr; }).contains("unknown unit `fr`"));
        assert!(error(quote! { opacity: 2; }).contains("outside 0..=1"));
        assert!(error(quote! { color: #12345; }).contains("invalid hex color"));
        assert!(error(quote! { border: 1px 2px; }).contains("duplicate part"));
        assert!(error(quote! { width: 1px 2px; }).contains("single value"));
    }

    #[test]
    fn empty_value_rejected() {
        assert!(error(quote! { width: ; }).contains("has no value"));
    }
}
