//! List widget: `<ul>`, `<ol>` and `<dl>` built from strings and children.
//!
//! Items are the string elements (plain or rich) followed by the rendered
//! children. Unordered and ordered kinds wrap each item in `<li>` unless it
//! already is one; definition kinds alternate `<dt>` and `<dd>`.

use crate::event::DomEvent;
use crate::ids::ComponentId;
use crate::property::{Prop, PropertyPolicy};
use crate::property_enum;
use crate::vdom::{VElement, VNode};
use crate::widget::{component_accessors, ChildContainer, ChildList, Component, Renderable, Widget};

property_enum! {
    /// List flavours.
    pub enum ListType {
        Ul => "ul",
        Ol => "ol",
        Unstyled => "list-unstyled",
        Inline => "list-inline",
        Dl => "dl",
        DlHorizontal => "dl-horizontal",
    }
}

impl ListType {
    /// The element this list renders as.
    pub fn tag_name(self) -> &'static str {
        match self {
            ListType::Ul | ListType::Unstyled | ListType::Inline => "ul",
            ListType::Ol => "ol",
            ListType::Dl | ListType::DlHorizontal => "dl",
        }
    }

    /// Extra class on the list element, if any.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            ListType::Unstyled => Some("list-unstyled"),
            ListType::Inline => Some("list-inline"),
            ListType::DlHorizontal => Some("dl-horizontal"),
            _ => None,
        }
    }

    fn is_definition(self) -> bool {
        self.tag_name() == "dl"
    }
}

pub const TYPE: Prop<ListType> = Prop::new("type", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const RICH: Prop<bool> = Prop::new("rich", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);

/// A list of string elements and child components.
#[derive(Debug)]
pub struct ListTag {
    widget: Widget,
    elements: Option<Vec<String>>,
    children: ChildList,
}

impl ListTag {
    pub fn new(list_type: ListType) -> Self {
        Self::with_elements(list_type, None)
    }

    /// A list with string elements.
    pub fn with_elements(list_type: ListType, elements: Option<Vec<String>>) -> Self {
        Self::with_widget(Widget::new(), list_type, elements)
    }

    pub(crate) fn with_widget(mut widget: Widget, list_type: ListType, elements: Option<Vec<String>>) -> Self {
        widget.declare(&TYPE, Some(list_type));
        widget.declare(&RICH, Some(false));
        Self {
            widget,
            elements,
            children: ChildList::new(),
        }
    }

    pub fn with_rich(mut self, rich: bool) -> Self {
        self.set_rich(rich);
        self
    }

    pub fn list_type(&self) -> ListType {
        self.widget.value(&TYPE)
    }

    pub fn set_list_type(&mut self, list_type: ListType) -> &mut Self {
        self.widget.assign(&TYPE, Some(list_type));
        self
    }

    pub fn elements(&self) -> Option<&[String]> {
        self.elements.as_deref()
    }

    pub fn set_elements(&mut self, elements: Option<Vec<String>>) -> &mut Self {
        self.elements = elements;
        self.widget.refresh();
        self
    }

    /// Whether string elements are HTML.
    pub fn rich(&self) -> bool {
        self.widget.value(&RICH)
    }

    pub fn set_rich(&mut self, rich: bool) -> &mut Self {
        self.widget.assign(&RICH, Some(rich));
        self
    }

    fn items(&self) -> Vec<VNode> {
        let rich = self.rich();
        let mut items: Vec<VNode> = self
            .elements
            .iter()
            .flatten()
            .map(|el| {
                if rich {
                    VNode::raw(format!("<span>{el}</span>"))
                } else {
                    VNode::text(el.as_str())
                }
            })
            .collect();
        items.extend(self.children.render());
        items
    }

    /// The items wrapped in `<li>`, or in alternating `<dt>`/`<dd>`.
    pub(crate) fn list_nodes(&self) -> Vec<VNode> {
        let items = self.items();
        if self.list_type().is_definition() {
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let tag = if i % 2 == 0 { "dt" } else { "dd" };
                    VElement::new(tag).with_child(item).into()
                })
                .collect()
        } else {
            items
                .into_iter()
                .map(|item| match item.tag() {
                    Some("li") => item,
                    _ => VElement::new("li").with_child(item).into(),
                })
                .collect()
        }
    }
}

impl Renderable for ListTag {
    fn render(&self) -> VNode {
        self.element(self.list_type().tag_name())
            .with_children(self.list_nodes())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        let mut cl = self.widget.sn_class();
        if let Some(class) = self.list_type().class_name() {
            cl.push((class.to_owned(), true));
        }
        cl
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        self.widget.sn_attrs()
    }
}

impl Component for ListTag {
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

impl ChildContainer for ListTag {
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
