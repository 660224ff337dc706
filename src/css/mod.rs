//! CSS values: sizes, colors, borders, backgrounds, and their parsers.

pub mod size;
pub mod color;
pub mod border;
pub mod background;
pub mod tokenizer;
pub mod parse;
pub mod names;

pub use background::{Background, BgAttach, BgRepeat, BgSize};
pub use border::{Border, BorderStyle};
pub use color::{Color, NamedColor};
pub use parse::CssParseError;
pub use size::{CssSize, Unit};
