//! Widget: the base every concrete widget is built on.
//!
//! A [`Widget`] owns the component's [`StyledComponent`] (and through it the
//! property store) plus its static CSS class list. Concrete widgets register
//! their own properties on the base at construction and read them back
//! through typed [`Prop`] keys.

use crate::ids::{next_component_id, ComponentId};
use crate::property::{Prop, PropertyPolicy, PropertyType};
use crate::style::{StylePair, Styleable, StyledComponent};

pub const ID: Prop<String> = Prop::nullable("id");
pub const TITLE: Prop<String> = Prop::nullable("title");
pub const ROLE: Prop<String> = Prop::nullable("role");
pub const VISIBLE: Prop<bool> = Prop::new("visible", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);

/// Base state shared by all widgets.
#[derive(Debug)]
pub struct Widget {
    styled: StyledComponent,
    classes: Vec<String>,
}

impl Widget {
    /// A widget with no CSS classes.
    pub fn new() -> Self {
        Self::with_id(next_component_id())
    }

    /// A widget with the given CSS classes.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut widget = Self::new();
        for class in classes {
            widget.push_class(class.into());
        }
        widget
    }

    /// A widget with an explicit component id.
    pub fn with_id(id: ComponentId) -> Self {
        let mut widget = Self {
            styled: StyledComponent::with_id(id),
            classes: Vec::new(),
        };
        widget.declare(&ID, None);
        widget.declare(&TITLE, None);
        widget.declare(&ROLE, None);
        widget.declare(&VISIBLE, Some(true));
        widget
    }

    /// The component id.
    pub fn id(&self) -> ComponentId {
        self.styled.id()
    }

    // -----------------------------------------------------------------------
    // Property plumbing
    // -----------------------------------------------------------------------

    /// Register a widget property during construction.
    ///
    /// # Panics
    ///
    /// Panics if the name is already registered or `initial` does not match
    /// the property's policy. Both are construction bugs.
    #[track_caller]
    pub fn declare<T: PropertyType>(&mut self, prop: &Prop<T>, initial: Option<T>) {
        if let Err(err) = self.styled.register(prop, initial) {
            panic!("cannot declare widget property: {err}");
        }
    }

    /// Register an extra styling property during construction. It takes
    /// part in the style list like the built-in ones.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Widget::declare`].
    #[track_caller]
    pub fn declare_style<T: PropertyType>(&mut self, prop: &Prop<T>, initial: Option<T>) {
        if let Err(err) = self.styled.register_style(prop, initial) {
            panic!("cannot declare style property: {err}");
        }
    }

    /// Read a property. See [`StyledComponent::opt`].
    #[track_caller]
    pub fn opt<T: PropertyType>(&self, prop: &Prop<T>) -> Option<T> {
        self.styled.opt(prop)
    }

    /// Read a property that must hold a value. See [`StyledComponent::value`].
    #[track_caller]
    pub fn value<T: PropertyType>(&self, prop: &Prop<T>) -> T {
        self.styled.value(prop)
    }

    /// Write a property. See [`StyledComponent::assign`].
    #[track_caller]
    pub fn assign<T: PropertyType>(&mut self, prop: &Prop<T>, value: Option<T>) -> bool {
        self.styled.assign(prop, value)
    }

    /// Re-render this widget.
    pub fn refresh(&self) {
        self.styled.refresh();
    }

    // -----------------------------------------------------------------------
    // Common properties
    // -----------------------------------------------------------------------

    /// The `id` attribute of the rendered element.
    pub fn dom_id(&self) -> Option<String> {
        self.opt(&ID)
    }

    pub fn set_dom_id(&mut self, id: Option<String>) -> &mut Self {
        self.assign(&ID, id);
        self
    }

    pub fn title(&self) -> Option<String> {
        self.opt(&TITLE)
    }

    pub fn set_title(&mut self, title: Option<String>) -> &mut Self {
        self.assign(&TITLE, title);
        self
    }

    pub fn role(&self) -> Option<String> {
        self.opt(&ROLE)
    }

    pub fn set_role(&mut self, role: Option<String>) -> &mut Self {
        self.assign(&ROLE, role);
        self
    }

    pub fn visible(&self) -> bool {
        self.value(&VISIBLE)
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.assign(&VISIBLE, Some(visible));
        self
    }

    // -----------------------------------------------------------------------
    // CSS classes
    // -----------------------------------------------------------------------

    /// Static CSS classes, in insertion order.
    pub fn css_classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_css_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op (and no refresh) if already present.
    pub fn add_css_class(&mut self, class: impl Into<String>) -> &mut Self {
        if self.push_class(class.into()) {
            self.refresh();
        }
        self
    }

    /// Remove a CSS class. No-op if not present.
    pub fn remove_css_class(&mut self, class: &str) -> &mut Self {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        if self.classes.len() != before {
            self.refresh();
        }
        self
    }

    fn push_class(&mut self, class: String) -> bool {
        if self.classes.contains(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    // -----------------------------------------------------------------------
    // Render contributions
    // -----------------------------------------------------------------------

    /// Class pairs contributed by the base.
    pub fn sn_class(&self) -> Vec<(String, bool)> {
        self.classes.iter().map(|c| (c.clone(), true)).collect()
    }

    /// Attributes contributed by the base: `id`, `title`, `role` when set.
    pub fn sn_attrs(&self) -> Vec<(String, String)> {
        [("id", &ID), ("title", &TITLE), ("role", &ROLE)]
            .into_iter()
            .filter_map(|(name, prop)| self.opt(prop).map(|v| (name.to_owned(), v)))
            .collect()
    }

    /// The style list, plus `display: none` when invisible.
    pub fn sn_style(&self) -> Vec<StylePair> {
        let mut style = self.styled.style().to_vec();
        if !self.visible() {
            style.push(("display".to_owned(), "none".to_owned()));
        }
        style
    }
}

impl Default for Widget {
    fn default() -> Self {
        Self::new()
    }
}

impl Styleable for Widget {
    fn styled(&self) -> &StyledComponent {
        &self.styled
    }

    fn styled_mut(&mut self) -> &mut StyledComponent {
        &mut self.styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::CssSize;
    use crate::reactive;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let w = Widget::new();
        assert!(w.visible());
        assert_eq!(w.dom_id(), None);
        assert!(w.sn_class().is_empty());
        assert!(w.sn_attrs().is_empty());
        assert!(w.sn_style().is_empty());
    }

    #[test]
    fn attrs_in_fixed_order() {
        let mut w = Widget::new();
        w.set_role(Some("separator".into()))
            .set_dom_id(Some("main".into()))
            .set_title(Some("tip".into()));
        assert_eq!(
            w.sn_attrs(),
            vec![
                ("id".to_owned(), "main".to_owned()),
                ("title".to_owned(), "tip".to_owned()),
                ("role".to_owned(), "separator".to_owned()),
            ]
        );
    }

    #[test]
    fn invisible_adds_display_none_after_styles() {
        let mut w = Widget::new();
        w.set_width(Some(CssSize::px(5.0)));
        w.set_visible(false);
        assert_eq!(
            w.sn_style(),
            vec![
                ("width".to_owned(), "5px".to_owned()),
                ("display".to_owned(), "none".to_owned()),
            ]
        );
    }

    #[test]
    fn classes_dedup_and_refresh_only_on_change() {
        let mut w = Widget::with_classes(["a", "a", "b"]);
        assert_eq!(w.css_classes(), &["a".to_owned(), "b".to_owned()]);
        let before = w.styled().invalidations();
        w.add_css_class("a");
        w.remove_css_class("missing");
        assert_eq!(w.styled().invalidations(), before);
        w.add_css_class("c");
        w.remove_css_class("a");
        assert_eq!(w.styled().invalidations(), before + 2);
        assert_eq!(w.css_classes(), &["b".to_owned(), "c".to_owned()]);
    }

    #[test]
    fn writes_schedule_renders() {
        let mut w = Widget::new();
        reactive::reset();
        w.set_title(Some("x".into()));
        assert_eq!(reactive::take_dirty(), vec![w.id()]);
    }

    #[test]
    #[should_panic(expected = "cannot declare widget property")]
    fn declaring_twice_panics() {
        let mut w = Widget::new();
        w.declare(&TITLE, None);
    }
}
