//! Root container: owns the widget tree, renders it, routes events.
//!
//! [`Root`] ties together the top-level children, the event queue and the
//! render scheduler. It stands in for the page element the tree is mounted
//! on: [`Root::inner_html`] is what that element's `innerHTML` would show.

use serde::Deserialize;

use crate::event::{DomEvent, EventQueue};
use crate::ids::{with_global, ComponentId, DEFAULT_ID_PREFIX};
use crate::reactive;
use crate::vdom::{inner_html, VNode};
use crate::widget::{
    component_accessors, find_component, find_component_mut, ChildContainer, ChildList, Component, Renderable,
    Widget,
};

// ---------------------------------------------------------------------------
// RootConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`Root`].
///
/// Deserializable, with every field optional:
///
/// ```ignore
/// let config: RootConfig = serde_json::from_str(r#"{ "fixed": true }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    /// DOM id of the element the tree is mounted on.
    pub element_id: String,
    /// Fixed-width `container` instead of full-width `container-fluid`.
    pub fixed: bool,
    /// Prefix of generated element ids.
    pub id_prefix: String,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            element_id: "root".to_owned(),
            fixed: false,
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
        }
    }
}

impl RootConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = id.into();
        self
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// The top of a widget tree.
#[derive(Debug)]
pub struct Root {
    widget: Widget,
    config: RootConfig,
    children: ChildList,
    queue: EventQueue,
    last_render: Option<VNode>,
    renders: u64,
}

impl Root {
    /// Create a root. Element ids generated on this thread from now on use
    /// the configured prefix.
    pub fn new(config: RootConfig) -> Self {
        with_global(|ids| ids.set_prefix(config.id_prefix.clone()));
        let class = if config.fixed { "container" } else { "container-fluid" };
        let mut widget = Widget::with_classes([class]);
        widget.set_dom_id(Some(config.element_id.clone()));
        tracing::debug!(element = %config.element_id, fixed = config.fixed, "root created");
        Self {
            widget,
            config,
            children: ChildList::new(),
            queue: EventQueue::new(),
            last_render: None,
            renders: 0,
        }
    }

    /// A root mounted on the element with the given id.
    pub fn with_element_id(element_id: impl Into<String>) -> Self {
        Self::new(RootConfig::new().with_element_id(element_id))
    }

    pub fn config(&self) -> &RootConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Render the whole tree and clear pending render requests.
    pub fn render_tree(&mut self) -> &VNode {
        let stale = reactive::take_dirty();
        self.renders += 1;
        tracing::debug!(render = self.renders, stale = stale.len(), "rendering tree");
        let node = Renderable::render(self);
        self.last_render.insert(node)
    }

    /// Render only if something requested it since the last render, or if
    /// nothing has been rendered yet. Returns whether a render happened.
    pub fn flush(&mut self) -> bool {
        if self.last_render.is_some() && !reactive::has_dirty() {
            return false;
        }
        self.render_tree();
        true
    }

    /// The most recent render.
    pub fn last_render(&self) -> Option<&VNode> {
        self.last_render.as_ref()
    }

    /// How many times the tree has been rendered.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// The HTML of the children, as the mount element's `innerHTML`.
    pub fn inner_html(&self) -> String {
        inner_html(&self.children.render())
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Deliver `event` to the component `target`. Property writes made by the
    /// handlers are batched into one render pass. Returns whether the
    /// target handled the event.
    pub fn dispatch(&mut self, target: ComponentId, event: &DomEvent) -> bool {
        reactive::single_render(|| match find_component_mut(&mut *self, target) {
            Some(component) => {
                tracing::trace!(%target, event = %event.kind, "dispatching event");
                component.dispatch(event)
            }
            None => {
                tracing::warn!(%target, event = %event.kind, "event for unknown component dropped");
                false
            }
        })
    }

    /// Queue an event for later delivery.
    pub fn post(&mut self, target: ComponentId, event: DomEvent) {
        self.queue.push(target, event);
    }

    pub fn pending_events(&self) -> usize {
        self.queue.pending_count()
    }

    /// Deliver every queued event, oldest first. Returns how many were
    /// handled.
    pub fn process_events(&mut self) -> usize {
        let posted = self.queue.drain();
        posted
            .into_iter()
            .filter(|p| self.dispatch(p.target, &p.event))
            .count()
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    pub fn find(&self, id: ComponentId) -> Option<&dyn Component> {
        find_component(self, id)
    }

    pub fn find_mut(&mut self, id: ComponentId) -> Option<&mut dyn Component> {
        find_component_mut(self, id)
    }

    /// Run `f` on the component `id` if it exists and is a `T`.
    pub fn with_component_mut<T: Component, R>(&mut self, id: ComponentId, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let component = self.find_mut(id)?.downcast_mut::<T>()?;
        Some(f(component))
    }
}

impl Default for Root {
    fn default() -> Self {
        Self::new(RootConfig::default())
    }
}

impl Renderable for Root {
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

impl Component for Root {
    component_accessors!(widget);

    fn child_components(&self) -> Vec<&dyn Component> {
        self.children.refs()
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        self.children.refs_mut()
    }
}

impl ChildContainer for Root {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::reset_ids;
    use crate::widgets::{Button, Tag, TagType};
    use pretty_assertions::assert_eq;

    #[test]
    fn config_defaults_and_builders() {
        let c = RootConfig::default();
        assert_eq!(c.element_id, "root");
        assert!(!c.fixed);
        assert_eq!(c.id_prefix, "kv_");
        let c = RootConfig::new().with_element_id("app").with_fixed(true).with_id_prefix("x_");
        assert_eq!((c.element_id.as_str(), c.fixed, c.id_prefix.as_str()), ("app", true, "x_"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let c: RootConfig = serde_json::from_str(r#"{ "fixed": true }"#).expect("valid config");
        assert_eq!(c, RootConfig::new().with_fixed(true));
    }

    #[test]
    fn root_element_and_inner_html() {
        let mut root = Root::with_element_id("test");
        root.add(Tag::with_text(TagType::P, "hi"));
        assert_eq!(root.inner_html(), "<p>hi</p>");
        assert_eq!(
            root.render().to_html(),
            r#"<div class="container-fluid" id="test"><p>hi</p></div>"#
        );
    }

    #[test]
    fn flush_renders_only_when_needed() {
        let mut root = Root::default();
        let tag = Tag::with_text(TagType::P, "a");
        let id = tag.id();
        root.add(tag);
        assert!(root.flush());
        assert!(!root.flush());
        root.with_component_mut::<Tag, _>(id, |t| {
            t.set_text(Some("b".into()));
        });
        assert!(root.flush());
        assert_eq!(root.render_count(), 2);
    }

    #[test]
    fn dispatch_routes_to_target() {
        let mut root = Root::default();
        let mut button = Button::new("x");
        button.on_click(|b, _| {
            b.set_text("done");
        });
        let id = button.id();
        root.add(button);
        assert!(root.dispatch(id, &DomEvent::click()));
        let text = root.with_component_mut::<Button, _>(id, |b| b.text());
        assert_eq!(text.as_deref(), Some("done"));
    }

    #[test]
    fn unknown_target_is_dropped() {
        let mut root = Root::default();
        let stray = Tag::new(TagType::Div);
        assert!(!root.dispatch(stray.id(), &DomEvent::click()));
    }

    #[test]
    fn posted_events_process_in_order() {
        let mut root = Root::default();
        let button = Button::new("x");
        let id = button.id();
        root.add(button);
        root.post(id, DomEvent::click());
        root.post(id, DomEvent::change());
        assert_eq!(root.pending_events(), 2);
        assert_eq!(root.process_events(), 0);
        assert_eq!(root.pending_events(), 0);
    }

    #[test]
    fn prefix_applies_to_generated_ids() {
        reset_ids();
        let _root = Root::new(RootConfig::new().with_id_prefix("app_"));
        assert_eq!(crate::ids::next_element_id("dropdown"), "app_dropdown_0");
        reset_ids();
    }
}
