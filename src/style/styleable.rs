//! Styleable: typed style accessors for anything that owns a [`StyledComponent`].

use crate::css::{Background, Border, Color, CssSize, NamedColor};

use super::props::*;
use super::styled::StyledComponent;

/// Generates a getter and a chainable setter per styling property.
macro_rules! style_accessors {
    ($($getter:ident / $setter:ident : $ty:ty = $prop:ident;)+) => {
        $(
            #[doc = concat!("The `", stringify!($getter), "` style property.")]
            fn $getter(&self) -> Option<$ty> {
                self.styled().opt(&$prop)
            }

            #[doc = concat!("Set or clear the `", stringify!($getter), "` style property.")]
            fn $setter(&mut self, value: Option<$ty>) -> &mut Self {
                self.styled_mut().assign(&$prop, value);
                self
            }
        )+
    };
}

/// Access to a component's styling properties.
///
/// Every setter refreshes the component, so the next `style()` read
/// recomputes the style list and a render is requested.
pub trait Styleable {
    fn styled(&self) -> &StyledComponent;
    fn styled_mut(&mut self) -> &mut StyledComponent;

    style_accessors! {
        width / set_width: CssSize = WIDTH;
        min_width / set_min_width: CssSize = MIN_WIDTH;
        max_width / set_max_width: CssSize = MAX_WIDTH;
        height / set_height: CssSize = HEIGHT;
        min_height / set_min_height: CssSize = MIN_HEIGHT;
        max_height / set_max_height: CssSize = MAX_HEIGHT;
        border / set_border: Border = BORDER;
        border_top / set_border_top: Border = BORDER_TOP;
        border_right / set_border_right: Border = BORDER_RIGHT;
        border_bottom / set_border_bottom: Border = BORDER_BOTTOM;
        border_left / set_border_left: Border = BORDER_LEFT;
        margin / set_margin: CssSize = MARGIN;
        margin_top / set_margin_top: CssSize = MARGIN_TOP;
        margin_right / set_margin_right: CssSize = MARGIN_RIGHT;
        margin_bottom / set_margin_bottom: CssSize = MARGIN_BOTTOM;
        margin_left / set_margin_left: CssSize = MARGIN_LEFT;
        padding / set_padding: CssSize = PADDING;
        padding_top / set_padding_top: CssSize = PADDING_TOP;
        padding_right / set_padding_right: CssSize = PADDING_RIGHT;
        padding_bottom / set_padding_bottom: CssSize = PADDING_BOTTOM;
        padding_left / set_padding_left: CssSize = PADDING_LEFT;
        color / set_color: Color = COLOR;
        opacity / set_opacity: f64 = OPACITY;
        background / set_background: Background = BACKGROUND;
    }

    /// Set the color from a packed `0xrrggbb` value. Write-only: reads back
    /// through [`Styleable::color`].
    fn set_color_hex(&mut self, value: Option<u32>) -> &mut Self {
        self.set_color(value.map(Color::hex))
    }

    /// Always `None`; the value lives in `color`.
    fn color_hex(&self) -> Option<u32> {
        None
    }

    /// Set the color from a named CSS color. Write-only: reads back through
    /// [`Styleable::color`].
    fn set_color_name(&mut self, value: Option<NamedColor>) -> &mut Self {
        self.set_color(value.map(Color::named))
    }

    /// Always `None`; the value lives in `color`.
    fn color_name(&self) -> Option<NamedColor> {
        None
    }
}

impl Styleable for StyledComponent {
    fn styled(&self) -> &StyledComponent {
        self
    }

    fn styled_mut(&mut self) -> &mut StyledComponent {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::BorderStyle;
    use pretty_assertions::assert_eq;

    #[test]
    fn setters_chain_and_getters_read_back() {
        let mut c = StyledComponent::new();
        c.set_width(Some(CssSize::px(10.0)))
            .set_margin_left(Some(CssSize::em(1.0)))
            .set_opacity(Some(0.25));
        assert_eq!(c.width(), Some(CssSize::px(10.0)));
        assert_eq!(c.margin_left(), Some(CssSize::em(1.0)));
        assert_eq!(c.opacity(), Some(0.25));
        assert_eq!(c.height(), None);
    }

    #[test]
    fn color_conveniences_route_through_color() {
        let mut c = StyledComponent::new();
        c.set_color_hex(Some(0x112233));
        assert_eq!(c.color(), Some(Color::hex(0x112233)));
        assert_eq!(c.color_hex(), None);
        c.set_color_name(Some(NamedColor::Red));
        assert_eq!(c.color(), Some(Color::named(NamedColor::Red)));
        assert_eq!(c.color_name(), None);
        assert_eq!(c.style().to_vec(), vec![("color".to_owned(), "red".to_owned())]);
        c.set_color_name(None);
        assert_eq!(c.color(), None);
    }

    #[test]
    fn border_sides_serialize() {
        let mut c = StyledComponent::new();
        c.set_border_left(Some(Border::new(
            CssSize::px(2.0),
            BorderStyle::Dashed,
            Color::hex(0xff0000),
        )));
        assert_eq!(
            c.style().to_vec(),
            vec![("border-left".to_owned(), "2px dashed #ff0000".to_owned())]
        );
    }
}
