//! Headless testing helpers.
//!
//! Render components to HTML strings for assertions and snapshots, and reset
//! the per-thread id and scheduler state so generated ids are predictable.

use crate::ids::reset_ids;
use crate::reactive;
use crate::root::Root;
use crate::vdom::VNode;
use crate::widget::Component;

/// Reset generated ids and pending render requests on this thread.
///
/// Call at the start of a test that asserts on generated element ids.
pub fn fresh() {
    reset_ids();
    reactive::reset();
}

/// Render a component to an HTML string.
///
/// # Examples
///
/// ```ignore
/// use trellis::testing::render_to_html;
/// use trellis::widgets::Tag;
///
/// assert_eq!(render_to_html(&Tag::span("hi")), "<span>hi</span>");
/// ```
pub fn render_to_html(component: &dyn Component) -> String {
    component.render().to_html()
}

/// Flush the root and return its mount element's `innerHTML`.
pub fn render_root(root: &mut Root) -> String {
    root.flush();
    root.inner_html()
}

/// The enabled classes of a rendered element, in order. Empty for text.
pub fn class_names(node: &VNode) -> Vec<String> {
    node.as_element()
        .map(|el| el.class_names().map(str::to_owned).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{ChildContainer, Renderable};
    use crate::widgets::{Button, ButtonStyle, Tag};

    #[test]
    fn helpers_render() {
        fresh();
        let mut root = Root::default();
        root.add(Tag::span("a"));
        assert_eq!(render_root(&mut root), "<span>a</span>");
        let b = Button::new("b").with_style(ButtonStyle::Info);
        assert_eq!(class_names(&b.render()), vec!["btn", "btn-info"]);
        assert_eq!(render_to_html(&Tag::span("x")), "<span>x</span>");
    }
}
