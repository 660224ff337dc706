//! Styling: the CSS property mixin every widget carries.
//!
//! - [`StyledComponent`]: styling properties, memoized style list, refresh.
//! - [`Styleable`]: typed getters/setters for the styling properties.
//! - [`Declarations`]: a batch of style writes, e.g. from `css!`.

pub mod declarations;
pub mod props;
pub mod styleable;
pub mod styled;

pub use declarations::{DeclarationError, Declarations, Declared};
pub use styleable::Styleable;
pub use styled::{StylePair, StyledComponent};
