//! The styling properties every styled component carries.

use crate::css::{Background, Border, Color, CssSize};
use crate::property::Prop;

pub const WIDTH: Prop<CssSize> = Prop::nullable("width");
pub const MIN_WIDTH: Prop<CssSize> = Prop::nullable("minWidth");
pub const MAX_WIDTH: Prop<CssSize> = Prop::nullable("maxWidth");
pub const HEIGHT: Prop<CssSize> = Prop::nullable("height");
pub const MIN_HEIGHT: Prop<CssSize> = Prop::nullable("minHeight");
pub const MAX_HEIGHT: Prop<CssSize> = Prop::nullable("maxHeight");
pub const BORDER: Prop<Border> = Prop::nullable("border");
pub const BORDER_TOP: Prop<Border> = Prop::nullable("borderTop");
pub const BORDER_RIGHT: Prop<Border> = Prop::nullable("borderRight");
pub const BORDER_BOTTOM: Prop<Border> = Prop::nullable("borderBottom");
pub const BORDER_LEFT: Prop<Border> = Prop::nullable("borderLeft");
pub const MARGIN: Prop<CssSize> = Prop::nullable("margin");
pub const MARGIN_TOP: Prop<CssSize> = Prop::nullable("marginTop");
pub const MARGIN_RIGHT: Prop<CssSize> = Prop::nullable("marginRight");
pub const MARGIN_BOTTOM: Prop<CssSize> = Prop::nullable("marginBottom");
pub const MARGIN_LEFT: Prop<CssSize> = Prop::nullable("marginLeft");
pub const PADDING: Prop<CssSize> = Prop::nullable("padding");
pub const PADDING_TOP: Prop<CssSize> = Prop::nullable("paddingTop");
pub const PADDING_RIGHT: Prop<CssSize> = Prop::nullable("paddingRight");
pub const PADDING_BOTTOM: Prop<CssSize> = Prop::nullable("paddingBottom");
pub const PADDING_LEFT: Prop<CssSize> = Prop::nullable("paddingLeft");
pub const COLOR: Prop<Color> = Prop::nullable("color");
pub const OPACITY: Prop<f64> = Prop::nullable("opacity");
pub const BACKGROUND: Prop<Background> = Prop::nullable("background");

/// Names of all styling properties, in declaration order.
pub const STYLE_PROPERTY_NAMES: &[&str] = &[
    WIDTH.name(),
    MIN_WIDTH.name(),
    MAX_WIDTH.name(),
    HEIGHT.name(),
    MIN_HEIGHT.name(),
    MAX_HEIGHT.name(),
    BORDER.name(),
    BORDER_TOP.name(),
    BORDER_RIGHT.name(),
    BORDER_BOTTOM.name(),
    BORDER_LEFT.name(),
    MARGIN.name(),
    MARGIN_TOP.name(),
    MARGIN_RIGHT.name(),
    MARGIN_BOTTOM.name(),
    MARGIN_LEFT.name(),
    PADDING.name(),
    PADDING_TOP.name(),
    PADDING_RIGHT.name(),
    PADDING_BOTTOM.name(),
    PADDING_LEFT.name(),
    COLOR.name(),
    OPACITY.name(),
    BACKGROUND.name(),
];
