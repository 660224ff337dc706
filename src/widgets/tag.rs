//! Tag widget: an arbitrary HTML element with text and children.

use crate::event::DomEvent;
use crate::ids::ComponentId;
use crate::property::{Prop, PropertyPolicy};
use crate::property_enum;
use crate::vdom::VNode;
use crate::widget::{component_accessors, ChildContainer, ChildList, Component, Renderable, Widget};

property_enum! {
    /// HTML tags a [`Tag`] can render as.
    pub enum TagType {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        P => "p",
        Abbr => "abbr",
        Address => "address",
        Blockquote => "blockquote",
        Section => "section",
        Header => "header",
        Footer => "footer",
        Pre => "pre",
        Ul => "ul",
        Ol => "ol",
        Div => "div",
        Label => "label",
        Mark => "mark",
        Del => "del",
        S => "s",
        Ins => "ins",
        U => "u",
        Small => "small",
        Strong => "strong",
        Em => "em",
        Cite => "cite",
        Code => "code",
        Kbd => "kbd",
        Var => "var",
        Samp => "samp",
        Span => "span",
        Li => "li",
    }
}

property_enum! {
    /// Text alignment classes.
    pub enum Align {
        Left => "text-left",
        Center => "text-center",
        Right => "text-right",
        Justify => "text-justify",
        NoWrap => "text-nowrap",
    }
}

pub const TYPE: Prop<TagType> = Prop::new("type", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const TEXT: Prop<String> = Prop::nullable("text");
pub const RICH: Prop<bool> = Prop::new("rich", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const ALIGN: Prop<Align> = Prop::nullable("align");

/// An HTML element with optional text content and child components.
///
/// Plain text is appended after the children. Rich text is inserted as HTML,
/// wrapped in a `<span>`, before the children.
#[derive(Debug)]
pub struct Tag {
    widget: Widget,
    children: ChildList,
}

impl Tag {
    pub fn new(tag: TagType) -> Self {
        Self::with_widget(Widget::new(), tag, None)
    }

    /// A tag with text content.
    pub fn with_text(tag: TagType, text: impl Into<String>) -> Self {
        Self::with_widget(Widget::new(), tag, Some(text.into()))
    }

    /// A `<span>` with text, the plain label of the framework.
    pub fn span(text: impl Into<String>) -> Self {
        Self::with_text(TagType::Span, text)
    }

    pub(crate) fn with_widget(mut widget: Widget, tag: TagType, text: Option<String>) -> Self {
        widget.declare(&TYPE, Some(tag));
        widget.declare(&TEXT, text);
        widget.declare(&RICH, Some(false));
        widget.declare(&ALIGN, None);
        Self {
            widget,
            children: ChildList::new(),
        }
    }

    pub fn with_rich(mut self, rich: bool) -> Self {
        self.set_rich(rich);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.set_align(Some(align));
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

    pub fn tag_type(&self) -> TagType {
        self.widget.value(&TYPE)
    }

    pub fn set_tag_type(&mut self, tag: TagType) -> &mut Self {
        self.widget.assign(&TYPE, Some(tag));
        self
    }

    pub fn text(&self) -> Option<String> {
        self.widget.opt(&TEXT)
    }

    pub fn set_text(&mut self, text: Option<String>) -> &mut Self {
        self.widget.assign(&TEXT, text);
        self
    }

    /// Whether the text is HTML.
    pub fn rich(&self) -> bool {
        self.widget.value(&RICH)
    }

    pub fn set_rich(&mut self, rich: bool) -> &mut Self {
        self.widget.assign(&RICH, Some(rich));
        self
    }

    pub fn align(&self) -> Option<Align> {
        self.widget.opt(&ALIGN)
    }

    pub fn set_align(&mut self, align: Option<Align>) -> &mut Self {
        self.widget.assign(&ALIGN, align);
        self
    }

    /// Text and rendered children, in output order.
    pub(crate) fn content_nodes(&self) -> Vec<VNode> {
        let children = self.children.render();
        match self.text() {
            Some(text) if self.rich() => {
                let mut out = vec![VNode::raw(format!("<span>{text}</span>"))];
                out.extend(children);
                out
            }
            Some(text) => {
                let mut out = children;
                out.push(VNode::text(text));
                out
            }
            None => children,
        }
    }
}

impl Renderable for Tag {
    fn render(&self) -> VNode {
        self.element(self.tag_type().css_name())
            .with_children(self.content_nodes())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        let mut cl = self.widget.sn_class();
        if let Some(align) = self.align() {
            cl.push((align.css_name().to_owned(), true));
        }
        cl
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        self.widget.sn_attrs()
    }
}

impl Component for Tag {
    component_accessors!(widget);

    fn child_components(&self) -> Vec<&dyn Component> {
        self.children.refs()
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        self.children.refs_mut()
    }

    fn dispatch(&mut self, _event: &DomEvent) -> bool {
        false
    }
}

impl ChildContainer for Tag {
    fn add_boxed(&mut self, child: Box<dyn Component>) -> &mut Self {
        self.children.push(child);
        self.widget.refresh();
        self
    }

    fn remove(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        let removed = self.children.remove(id);
        if removed.is_some() {
            self.widget.refresh();
        }
        removed
    }

    fn remove_all(&mut self) -> Vec<Box<dyn Component>> {
        self.widget.refresh();
        self.children.clear()
    }

    fn children(&self) -> &[Box<dyn Component>] {
        self.children.as_slice()
    }
}
