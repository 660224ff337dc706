//! Panels: plain and flexbox containers, plus a single-child wrapper.

use crate::css::CssSize;
use crate::ids::ComponentId;
use crate::property::Prop;
use crate::property_enum;
use crate::vdom::VNode;
use crate::widget::{component_accessors, ChildContainer, ChildList, Component, Renderable, Widget};

// ---------------------------------------------------------------------------
// SimplePanel
// ---------------------------------------------------------------------------

/// A `<div>` holding child components.
#[derive(Debug, Default)]
pub struct SimplePanel {
    widget: Widget,
    children: ChildList,
}

impl SimplePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            widget: Widget::with_classes(classes),
            children: ChildList::new(),
        }
    }
}

impl Renderable for SimplePanel {
    fn render(&self) -> VNode {
        self.element("div").with_children(self.children.render()).into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.widget.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        self.widget.sn_attrs()
    }
}

impl Component for SimplePanel {
    component_accessors!(widget);

    fn child_components(&self) -> Vec<&dyn Component> {
        self.children.refs()
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        self.children.refs_mut()
    }
}

impl ChildContainer for SimplePanel {
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

// ---------------------------------------------------------------------------
// WidgetWrapper
// ---------------------------------------------------------------------------

/// A `<div>` around at most one component.
#[derive(Debug, Default)]
pub struct WidgetWrapper {
    widget: Widget,
    wrapped: Option<Box<dyn Component>>,
}

impl WidgetWrapper {
    pub fn new(wrapped: Option<Box<dyn Component>>) -> Self {
        Self {
            widget: Widget::new(),
            wrapped,
        }
    }

    pub fn with_classes<I, S>(wrapped: Option<Box<dyn Component>>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            widget: Widget::with_classes(classes),
            wrapped,
        }
    }

    pub fn wrapped(&self) -> Option<&dyn Component> {
        self.wrapped.as_deref()
    }

    pub fn wrapped_mut(&mut self) -> Option<&mut dyn Component> {
        match &mut self.wrapped {
            Some(c) => Some(&mut **c),
            None => None,
        }
    }

    /// Replace the wrapped component, returning the old one.
    pub fn set_wrapped(&mut self, wrapped: Option<Box<dyn Component>>) -> Option<Box<dyn Component>> {
        self.widget.refresh();
        std::mem::replace(&mut self.wrapped, wrapped)
    }

    pub fn take(&mut self) -> Option<Box<dyn Component>> {
        self.set_wrapped(None)
    }
}

impl Renderable for WidgetWrapper {
    fn render(&self) -> VNode {
        let el = self.element("div");
        match &self.wrapped {
            Some(child) => el.with_child(child.render()).into(),
            None => el.into(),
        }
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.widget.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        self.widget.sn_attrs()
    }
}

impl Component for WidgetWrapper {
    component_accessors!(widget);

    fn child_components(&self) -> Vec<&dyn Component> {
        self.wrapped().into_iter().collect()
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        self.wrapped_mut().into_iter().collect()
    }
}

// ---------------------------------------------------------------------------
// FlexPanel
// ---------------------------------------------------------------------------

property_enum! {
    pub enum FlexDir {
        Row => "row",
        RowRev => "row-reverse",
        Column => "column",
        ColumnRev => "column-reverse",
    }
}

property_enum! {
    pub enum FlexWrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapRev => "wrap-reverse",
    }
}

property_enum! {
    pub enum FlexJustify {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

property_enum! {
    pub enum FlexAlignItems {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
}

property_enum! {
    pub enum FlexAlignContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        Stretch => "stretch",
    }
}

pub const DISPLAY: Prop<String> = Prop::nullable("display");
pub const FLEX_DIRECTION: Prop<FlexDir> = Prop::nullable("flexDirection");
pub const FLEX_WRAP: Prop<FlexWrap> = Prop::nullable("flexWrap");
pub const JUSTIFY_CONTENT: Prop<FlexJustify> = Prop::nullable("justifyContent");
pub const ALIGN_ITEMS: Prop<FlexAlignItems> = Prop::nullable("alignItems");
pub const ALIGN_CONTENT: Prop<FlexAlignContent> = Prop::nullable("alignContent");

pub const ORDER: Prop<i64> = Prop::nullable("order");
pub const FLEX_GROW: Prop<i64> = Prop::nullable("flexGrow");
pub const FLEX_SHRINK: Prop<i64> = Prop::nullable("flexShrink");
pub const FLEX_BASIS: Prop<CssSize> = Prop::nullable("flexBasis");
pub const ALIGN_SELF: Prop<FlexAlignItems> = Prop::nullable("alignSelf");

/// Per-child flex settings, rendered on the child's wrapper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexItem {
    pub order: Option<i64>,
    pub grow: Option<i64>,
    pub shrink: Option<i64>,
    pub basis: Option<CssSize>,
    pub align_self: Option<FlexAlignItems>,
}

impl FlexItem {
    pub fn order(order: i64) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    pub fn with_grow(mut self, grow: i64) -> Self {
        self.grow = Some(grow);
        self
    }

    pub fn with_shrink(mut self, shrink: i64) -> Self {
        self.shrink = Some(shrink);
        self
    }

    pub fn with_basis(mut self, basis: CssSize) -> Self {
        self.basis = Some(basis);
        self
    }

    pub fn with_align_self(mut self, align: FlexAlignItems) -> Self {
        self.align_self = Some(align);
        self
    }

    fn wrap(self, child: Box<dyn Component>) -> WidgetWrapper {
        let mut wrapper = WidgetWrapper::new(Some(child));
        let w = &mut wrapper.widget;
        w.declare_style(&ORDER, self.order);
        w.declare_style(&FLEX_GROW, self.grow);
        w.declare_style(&FLEX_SHRINK, self.shrink);
        w.declare_style(&FLEX_BASIS, self.basis);
        w.declare_style(&ALIGN_SELF, self.align_self);
        wrapper
    }
}

/// A flexbox container. Every child sits in its own wrapper `<div>`
/// carrying the child's [`FlexItem`] settings.
#[derive(Debug)]
pub struct FlexPanel {
    widget: Widget,
    items: ChildList,
}

impl FlexPanel {
    pub fn new(direction: Option<FlexDir>) -> Self {
        let mut widget = Widget::new();
        widget.declare_style(&DISPLAY, Some("flex".to_owned()));
        widget.declare_style(&FLEX_DIRECTION, direction);
        widget.declare_style(&FLEX_WRAP, None);
        widget.declare_style(&JUSTIFY_CONTENT, None);
        widget.declare_style(&ALIGN_ITEMS, None);
        widget.declare_style(&ALIGN_CONTENT, None);
        Self {
            widget,
            items: ChildList::new(),
        }
    }

    pub fn with_justify(mut self, justify: FlexJustify) -> Self {
        self.set_justify(Some(justify));
        self
    }

    pub fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.set_wrap(Some(wrap));
        self
    }

    pub fn direction(&self) -> Option<FlexDir> {
        self.widget.opt(&FLEX_DIRECTION)
    }

    pub fn set_direction(&mut self, direction: Option<FlexDir>) -> &mut Self {
        self.widget.assign(&FLEX_DIRECTION, direction);
        self
    }

    pub fn wrap(&self) -> Option<FlexWrap> {
        self.widget.opt(&FLEX_WRAP)
    }

    pub fn set_wrap(&mut self, wrap: Option<FlexWrap>) -> &mut Self {
        self.widget.assign(&FLEX_WRAP, wrap);
        self
    }

    pub fn justify(&self) -> Option<FlexJustify> {
        self.widget.opt(&JUSTIFY_CONTENT)
    }

    pub fn set_justify(&mut self, justify: Option<FlexJustify>) -> &mut Self {
        self.widget.assign(&JUSTIFY_CONTENT, justify);
        self
    }

    pub fn align_items(&self) -> Option<FlexAlignItems> {
        self.widget.opt(&ALIGN_ITEMS)
    }

    pub fn set_align_items(&mut self, align: Option<FlexAlignItems>) -> &mut Self {
        self.widget.assign(&ALIGN_ITEMS, align);
        self
    }

    pub fn align_content(&self) -> Option<FlexAlignContent> {
        self.widget.opt(&ALIGN_CONTENT)
    }

    pub fn set_align_content(&mut self, align: Option<FlexAlignContent>) -> &mut Self {
        self.widget.assign(&ALIGN_CONTENT, align);
        self
    }

    /// Append a child with flex settings.
    pub fn add_item(&mut self, child: impl Component, item: FlexItem) -> &mut Self {
        self.add_boxed_item(Box::new(child), item)
    }

    pub fn add_boxed_item(&mut self, child: Box<dyn Component>, item: FlexItem) -> &mut Self {
        self.items.push(Box::new(item.wrap(child)));
        self.widget.refresh();
        self
    }

    fn wrapper_holding(&self, id: ComponentId) -> Option<ComponentId> {
        self.items
            .as_slice()
            .iter()
            .find(|w| w.child_components().iter().any(|c| c.id() == id))
            .map(|w| w.id())
    }
}

impl Renderable for FlexPanel {
    fn render(&self) -> VNode {
        self.element("div").with_children(self.items.render()).into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.widget.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        self.widget.sn_attrs()
    }
}

impl Component for FlexPanel {
    component_accessors!(widget);

    fn child_components(&self) -> Vec<&dyn Component> {
        self.items.refs()
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        self.items.refs_mut()
    }
}

/// Children are reported as their wrappers. Removal takes the id of the
/// child itself.
impl ChildContainer for FlexPanel {
    fn add_boxed(&mut self, child: Box<dyn Component>) -> &mut Self {
        self.add_boxed_item(child, FlexItem::default())
    }

    fn remove(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        let wrapper_id = self.wrapper_holding(id)?;
        let mut wrapper = self.items.remove(wrapper_id)?;
        self.widget.refresh();
        wrapper.downcast_mut::<WidgetWrapper>()?.take()
    }

    fn remove_all(&mut self) -> Vec<Box<dyn Component>> {
        self.widget.refresh();
        self.items
            .clear()
            .into_iter()
            .filter_map(|mut w| w.downcast_mut::<WidgetWrapper>().and_then(WidgetWrapper::take))
            .collect()
    }

    fn children(&self) -> &[Box<dyn Component>] {
        self.items.as_slice()
    }
}
