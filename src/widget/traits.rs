//! Component traits: render, compose, dispatch.
//!
//! [`Component`] is the core abstraction for every widget. It is object-safe:
//! trees are built from `Box<dyn Component>` children, and the typed styling
//! accessors reach trait objects through the blanket [`Styleable`] impl.

use std::any::Any;
use std::fmt;

use super::base::Widget;
use crate::event::DomEvent;
use crate::ids::ComponentId;
use crate::style::{Styleable, StyledComponent};
use crate::vdom::{VElement, VNode};

// ---------------------------------------------------------------------------
// Renderable
// ---------------------------------------------------------------------------

/// Something that renders to a virtual-DOM node.
pub trait Renderable {
    /// Render the current state.
    fn render(&self) -> VNode;

    /// `(class, enabled)` pairs for the root element.
    fn sn_class(&self) -> Vec<(String, bool)>;

    /// HTML attributes for the root element.
    fn sn_attrs(&self) -> Vec<(String, String)>;
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
pub trait Component: Renderable + Any {
    /// The widget base.
    fn widget(&self) -> &Widget;

    /// Mutable access to the widget base.
    fn widget_mut(&mut self) -> &mut Widget;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The component id.
    fn id(&self) -> ComponentId {
        self.widget().id()
    }

    /// Direct children, for traversal. Defaults to none (leaf widget).
    fn child_components(&self) -> Vec<&dyn Component> {
        Vec::new()
    }

    /// Mutable direct children, for traversal.
    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        Vec::new()
    }

    /// Handle a browser event targeted at this component. Returns whether
    /// anything handled it.
    fn dispatch(&mut self, _event: &DomEvent) -> bool {
        false
    }

    /// The root element with this component's classes, attributes and style.
    fn element(&self, tag: &str) -> VElement {
        VElement::new(tag)
            .with_class_list(self.sn_class())
            .with_attrs(self.sn_attrs())
            .with_style(self.widget().sn_style())
    }
}

impl dyn Component + '_ {
    /// Attempt to downcast to a concrete widget type.
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Attempt to downcast mutably to a concrete widget type.
    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn Component + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("id", &self.id()).finish()
    }
}

impl<C: Component + ?Sized> Styleable for C {
    fn styled(&self) -> &StyledComponent {
        self.widget().styled()
    }

    fn styled_mut(&mut self) -> &mut StyledComponent {
        self.widget_mut().styled_mut()
    }
}

/// Find a component by id in the subtree rooted at `root` (inclusive).
pub fn find_component<'a>(root: &'a dyn Component, id: ComponentId) -> Option<&'a dyn Component> {
    if root.id() == id {
        return Some(root);
    }
    root.child_components()
        .into_iter()
        .find_map(|child| find_component(child, id))
}

/// Find a component by id in the subtree rooted at `root` (inclusive), mutably.
pub fn find_component_mut<'a>(
    root: &'a mut dyn Component,
    id: ComponentId,
) -> Option<&'a mut dyn Component> {
    if root.id() == id {
        return Some(root);
    }
    root.child_components_mut()
        .into_iter()
        .find_map(|child| find_component_mut(child, id))
}

// ---------------------------------------------------------------------------
// ChildContainer
// ---------------------------------------------------------------------------

/// A component that holds an ordered list of child components.
pub trait ChildContainer {
    /// Append a boxed child.
    fn add_boxed(&mut self, child: Box<dyn Component>) -> &mut Self;

    /// Remove the child with the given id, returning it.
    fn remove(&mut self, id: ComponentId) -> Option<Box<dyn Component>>;

    /// Remove and return all children.
    fn remove_all(&mut self) -> Vec<Box<dyn Component>>;

    /// The children, in order.
    fn children(&self) -> &[Box<dyn Component>];

    /// Append a child.
    fn add(&mut self, child: impl Component) -> &mut Self
    where
        Self: Sized,
    {
        self.add_boxed(Box::new(child))
    }

    /// Append several boxed children, in order.
    fn add_all(&mut self, children: impl IntoIterator<Item = Box<dyn Component>>) -> &mut Self
    where
        Self: Sized,
    {
        for child in children {
            self.add_boxed(child);
        }
        self
    }
}

// ---------------------------------------------------------------------------
// ChildList
// ---------------------------------------------------------------------------

/// Owned, ordered children of a container widget.
#[derive(Debug, Default)]
pub struct ChildList {
    items: Vec<Box<dyn Component>>,
}

impl ChildList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, child: Box<dyn Component>) {
        self.items.push(child);
    }

    /// Remove the child with the given id.
    pub fn remove(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        let index = self.items.iter().position(|c| c.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) -> Vec<Box<dyn Component>> {
        std::mem::take(&mut self.items)
    }

    pub fn as_slice(&self) -> &[Box<dyn Component>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render every child, in order.
    pub fn render(&self) -> Vec<VNode> {
        self.items.iter().map(|c| c.render()).collect()
    }

    pub fn refs(&self) -> Vec<&dyn Component> {
        self.items.iter().map(|c| &**c).collect()
    }

    pub fn refs_mut(&mut self) -> Vec<&mut dyn Component> {
        self.items
            .iter_mut()
            .map(|c| &mut **c as &mut dyn Component)
            .collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
