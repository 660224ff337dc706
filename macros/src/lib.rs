//! Proc macros for trellis: `css!` style declarations checked at compile time.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `trellis`.

use proc_macro::TokenStream;

mod css_macro;

/// Compile-time checked style declarations.
///
/// Expands to a `trellis::style::Declarations` value, ready for
/// `StyledComponent::apply`.
///
/// # Syntax
///
/// ```ignore
/// let decls = css! {
///     width: 50%;
///     margin-top: 10px;
///     padding: "1.5em";
///     color: #1a1a2e;
///     border: 1px solid red;
///     opacity: 0.8;
/// };
/// widget.styled_mut().apply(&decls)?;
/// ```
///
/// Property names are kebab-case. Unknown properties, sizes without a unit,
/// malformed hex colors and out-of-range opacities are compile errors.
/// `em` and `rem` sizes must be quoted since Rust's lexer rejects `2em`.
#[proc_macro]
pub fn css(input: TokenStream) -> TokenStream {
    css_macro::css_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
