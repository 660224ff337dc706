//! Button widget: a Bootstrap `<button>`.
//!
//! The label can carry an icon (Font Awesome names start with `fa-`,
//! anything else is a Glyphicon name) or an image. `disabled` only refreshes
//! when it actually changes.

use crate::event::{fire, DomEvent, EventKind, Listeners};
use crate::property::{Prop, PropertyPolicy};
use crate::property_enum;
use crate::vdom::{VElement, VNode};
use crate::widget::{component_accessors, Component, Renderable, Widget};

property_enum! {
    /// Button color styles.
    pub enum ButtonStyle {
        Default => "btn-default",
        Primary => "btn-primary",
        Success => "btn-success",
        Info => "btn-info",
        Warning => "btn-warning",
        Danger => "btn-danger",
        Link => "btn-link",
    }
}

property_enum! {
    /// Button sizes.
    pub enum ButtonSize {
        Large => "btn-lg",
        Small => "btn-sm",
        XSmall => "btn-xs",
    }
}

pub const TEXT: Prop<String> = Prop::new("text", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const ICON: Prop<String> = Prop::nullable("icon");
pub const STYLE: Prop<ButtonStyle> = Prop::new("style", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const DISABLED: Prop<bool> = Prop::new("disabled", PropertyPolicy::REFRESH_ON_CHANGE_NON_NULL);
pub const IMAGE: Prop<String> = Prop::nullable("image");
pub const SIZE: Prop<ButtonSize> = Prop::nullable("size");
pub const BLOCK: Prop<bool> = Prop::new("block", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);

/// Label content with an optional icon or image in front.
///
/// The icon wins over the image. The label is separated from the icon by a
/// space.
pub(crate) fn label_with_icon(label: &str, icon: Option<&str>, image: Option<&str>) -> Vec<VNode> {
    let lead: VNode = match (icon, image) {
        (Some(icon), _) if icon.starts_with("fa-") => VElement::new("i")
            .with_class("fa")
            .with_class(icon)
            .with_class("fa-lg")
            .into(),
        (Some(icon), _) => VElement::new("span")
            .with_class("glyphicon")
            .with_class(format!("glyphicon-{icon}"))
            .into(),
        (None, Some(url)) => VElement::new("img")
            .with_attr("src", url)
            .with_attr("alt", "")
            .into(),
        (None, None) => return vec![VNode::text(label)],
    };
    vec![lead, VNode::text(format!(" {label}"))]
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A Bootstrap button.
///
/// # Examples
///
/// ```ignore
/// let mut ok = Button::new("OK").with_style(ButtonStyle::Primary);
/// ok.on_click(|b, _| {
///     b.set_disabled(true);
/// });
/// ```
#[derive(Debug)]
pub struct Button {
    widget: Widget,
    listeners: Listeners<Button>,
}

impl Button {
    /// A default-styled button with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_widget(Widget::new(), text.into())
    }

    pub(crate) fn with_widget(mut widget: Widget, text: String) -> Self {
        widget.declare(&TEXT, Some(text));
        widget.declare(&ICON, None);
        widget.declare(&STYLE, Some(ButtonStyle::Default));
        widget.declare(&DISABLED, Some(false));
        widget.declare(&IMAGE, None);
        widget.declare(&SIZE, None);
        widget.declare(&BLOCK, Some(false));
        Self {
            widget,
            listeners: Listeners::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_icon(Some(icon.into()));
        self
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.set_button_style(style);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.widget.add_css_class(class);
        }
        self
    }

    pub fn text(&self) -> String {
        self.widget.value(&TEXT)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.widget.assign(&TEXT, Some(text.into()));
        self
    }

    pub fn icon(&self) -> Option<String> {
        self.widget.opt(&ICON)
    }

    pub fn set_icon(&mut self, icon: Option<String>) -> &mut Self {
        self.widget.assign(&ICON, icon);
        self
    }

    pub fn button_style(&self) -> ButtonStyle {
        self.widget.value(&STYLE)
    }

    pub fn set_button_style(&mut self, style: ButtonStyle) -> &mut Self {
        self.widget.assign(&STYLE, Some(style));
        self
    }

    pub fn disabled(&self) -> bool {
        self.widget.value(&DISABLED)
    }

    /// Returns whether the state changed.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        self.widget.assign(&DISABLED, Some(disabled))
    }

    /// Image URL shown in front of the label.
    pub fn image(&self) -> Option<String> {
        self.widget.opt(&IMAGE)
    }

    pub fn set_image(&mut self, url: Option<String>) -> &mut Self {
        self.widget.assign(&IMAGE, url);
        self
    }

    pub fn size(&self) -> Option<ButtonSize> {
        self.widget.opt(&SIZE)
    }

    pub fn set_size(&mut self, size: Option<ButtonSize>) -> &mut Self {
        self.widget.assign(&SIZE, size);
        self
    }

    /// Whether the button spans the full width of its parent.
    pub fn block(&self) -> bool {
        self.widget.value(&BLOCK)
    }

    pub fn set_block(&mut self, block: bool) -> &mut Self {
        self.widget.assign(&BLOCK, Some(block));
        self
    }

    /// Register a click handler.
    pub fn on_click(&mut self, handler: impl FnMut(&mut Button, &DomEvent) + 'static) -> &mut Self {
        self.listeners.on(EventKind::Click, handler);
        self
    }

    /// The label nodes: icon or image, then the text.
    pub(crate) fn label_nodes(&self) -> Vec<VNode> {
        label_with_icon(&self.text(), self.icon().as_deref(), self.image().as_deref())
    }

    pub(crate) fn listened_events(&self) -> Vec<String> {
        self.listeners.event_names()
    }

    /// Run the handlers registered for `event`.
    pub(crate) fn fire(&mut self, event: &DomEvent) -> bool {
        fire(self, event, Self::listeners_mut) > 0
    }

    fn listeners_mut(&mut self) -> &mut Listeners<Self> {
        &mut self.listeners
    }
}

impl Renderable for Button {
    fn render(&self) -> VNode {
        self.element("button")
            .with_children(self.label_nodes())
            .with_listeners(self.listened_events())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        let mut cl = self.widget.sn_class();
        cl.push(("btn".to_owned(), true));
        cl.push((self.button_style().css_name().to_owned(), true));
        if let Some(size) = self.size() {
            cl.push((size.css_name().to_owned(), true));
        }
        if self.block() {
            cl.push(("btn-block".to_owned(), true));
        }
        if self.disabled() {
            cl.push(("disabled".to_owned(), true));
        }
        cl
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.widget.sn_attrs();
        sn.push(("type".to_owned(), "button".to_owned()));
        sn
    }
}

impl Component for Button {
    component_accessors!(widget);

    fn dispatch(&mut self, event: &DomEvent) -> bool {
        self.fire(event)
    }
}
