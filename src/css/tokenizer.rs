//! logos-based tokenizer for CSS property values.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#fff` as HexColor, `10px` as Dimension)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `10px` matches [`Token::Dimension`], not `Number` + `Ident`
//! - `1.5rem` matches `rem`, not `em` followed by a stray `r`
//! - `url(a.png)` matches [`Token::Url`], not `Ident` + garbage

use logos::Logos;

/// Token produced by the value lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// `url(...)` with the raw argument text.
    #[regex(r"url\([^)]*\)")]
    Url,

    /// Hex color: `#fff`, `#ff00aa`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Number with a length unit: `10px`, `50%`, `1.5em`, `2rem`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|em|rem|pt|%|vw|vh)")]
    Dimension,

    /// Plain number, possibly negative or fractional.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: keywords and color names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `/`
    #[token("/")]
    Slash,

    /// `,`
    #[token(",")]
    Comma,
}

/// A lexing failure: the byte offset of the first unrecognized character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub position: usize,
}

/// Tokenize a CSS value into `(Token, text)` pairs.
///
/// Unlike a stylesheet tokenizer this is strict: any unrecognized input is an
/// error, since a property value is either fully understood or rejected.
pub fn tokenize(input: &str) -> Result<Vec<(Token, &str)>, LexError> {
    let mut lexer = Token::lexer(input);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => out.push((token, lexer.slice())),
            Err(()) => {
                return Err(LexError {
                    position: lexer.span().start,
                })
            }
        }
    }
    Ok(out)
}
