//! Select options and option groups.

use crate::ids::ComponentId;
use crate::property::{Prop, PropertyPolicy};
use crate::vdom::VNode;
use crate::widget::{component_accessors, ChildContainer, ChildList, Component, Renderable, Widget};

// ---------------------------------------------------------------------------
// SelectOption
// ---------------------------------------------------------------------------

pub const VALUE: Prop<String> = Prop::nullable("value");
pub const LABEL: Prop<String> = Prop::nullable("label");
pub const SUBTEXT: Prop<String> = Prop::nullable("subtext");
pub const ICON: Prop<String> = Prop::nullable("icon");
pub const DIVIDER: Prop<bool> = Prop::new("divider", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const DISABLED: Prop<bool> = Prop::new("disabled", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const SELECTED: Prop<bool> = Prop::new("selected", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);

/// One `<option>`. The label defaults to the value.
#[derive(Debug)]
pub struct SelectOption {
    widget: Widget,
}

impl SelectOption {
    pub fn new(value: Option<String>, label: Option<String>) -> Self {
        let mut widget = Widget::new();
        widget.declare(&VALUE, value);
        widget.declare(&LABEL, label);
        widget.declare(&SUBTEXT, None);
        widget.declare(&ICON, None);
        widget.declare(&DIVIDER, Some(false));
        widget.declare(&DISABLED, Some(false));
        widget.declare(&SELECTED, Some(false));
        Self { widget }
    }

    /// A separator line between options.
    pub fn divider() -> Self {
        let mut opt = Self::new(None, None);
        opt.set_divider(true);
        opt
    }

    pub fn value(&self) -> Option<String> {
        self.widget.opt(&VALUE)
    }

    pub fn set_value(&mut self, value: Option<String>) -> &mut Self {
        self.widget.assign(&VALUE, value);
        self
    }

    pub fn label(&self) -> Option<String> {
        self.widget.opt(&LABEL)
    }

    pub fn set_label(&mut self, label: Option<String>) -> &mut Self {
        self.widget.assign(&LABEL, label);
        self
    }

    pub fn subtext(&self) -> Option<String> {
        self.widget.opt(&SUBTEXT)
    }

    pub fn set_subtext(&mut self, subtext: Option<String>) -> &mut Self {
        self.widget.assign(&SUBTEXT, subtext);
        self
    }

    pub fn icon(&self) -> Option<String> {
        self.widget.opt(&ICON)
    }

    pub fn set_icon(&mut self, icon: Option<String>) -> &mut Self {
        self.widget.assign(&ICON, icon);
        self
    }

    pub fn is_divider(&self) -> bool {
        self.widget.value(&DIVIDER)
    }

    pub fn set_divider(&mut self, divider: bool) -> &mut Self {
        self.widget.assign(&DIVIDER, Some(divider));
        self
    }

    pub fn disabled(&self) -> bool {
        self.widget.value(&DISABLED)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.widget.assign(&DISABLED, Some(disabled));
        self
    }

    pub fn selected(&self) -> bool {
        self.widget.value(&SELECTED)
    }

    pub fn set_selected(&mut self, selected: bool) -> &mut Self {
        self.widget.assign(&SELECTED, Some(selected));
        self
    }
}

impl Renderable for SelectOption {
    fn render(&self) -> VNode {
        let el = self.element("option");
        if self.is_divider() {
            return el.into();
        }
        match self.label().or_else(|| self.value()) {
            Some(text) => el.with_text(text).into(),
            None => el.into(),
        }
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.widget.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.widget.sn_attrs();
        if self.is_divider() {
            sn.push(("data-divider".to_owned(), "true".to_owned()));
            return sn;
        }
        if let Some(value) = self.value() {
            sn.push(("value".to_owned(), value));
        }
        if let Some(subtext) = self.subtext() {
            sn.push(("data-subtext".to_owned(), subtext));
        }
        if let Some(icon) = self.icon() {
            let icon = if icon.starts_with("fa-") {
                format!("fa {icon}")
            } else {
                format!("glyphicon-{icon}")
            };
            sn.push(("data-icon".to_owned(), icon));
        }
        if self.disabled() {
            sn.push(("disabled".to_owned(), "true".to_owned()));
        }
        if self.selected() {
            sn.push(("selected".to_owned(), "selected".to_owned()));
        }
        sn
    }
}

impl Component for SelectOption {
    component_accessors!(widget);
}

// ---------------------------------------------------------------------------
// SelectOptGroup
// ---------------------------------------------------------------------------

pub const GROUP_LABEL: Prop<String> = Prop::new("label", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const MAX_OPTIONS: Prop<i64> = Prop::nullable("maxOptions");

/// An `<optgroup>`. Setting `options` replaces the children with one
/// [`SelectOption`] per `(value, label)` pair.
#[derive(Debug)]
pub struct SelectOptGroup {
    widget: Widget,
    options: Option<Vec<(String, String)>>,
    children: ChildList,
}

impl SelectOptGroup {
    pub fn new(label: impl Into<String>, options: Option<Vec<(String, String)>>) -> Self {
        let mut widget = Widget::new();
        widget.declare(&GROUP_LABEL, Some(label.into()));
        widget.declare(&MAX_OPTIONS, None);
        widget.declare(&DISABLED, Some(false));
        let mut group = Self {
            widget,
            options: None,
            children: ChildList::new(),
        };
        group.set_options(options);
        group
    }

    pub fn label(&self) -> String {
        self.widget.value(&GROUP_LABEL)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.widget.assign(&GROUP_LABEL, Some(label.into()));
        self
    }

    pub fn options(&self) -> Option<&[(String, String)]> {
        self.options.as_deref()
    }

    /// Replace all children with options built from `(value, label)` pairs.
    pub fn set_options(&mut self, options: Option<Vec<(String, String)>>) -> &mut Self {
        self.remove_all();
        for (value, label) in options.iter().flatten() {
            self.add(SelectOption::new(Some(value.clone()), Some(label.clone())));
        }
        self.options = options;
        self
    }

    pub fn max_options(&self) -> Option<i64> {
        self.widget.opt(&MAX_OPTIONS)
    }

    pub fn set_max_options(&mut self, max: Option<i64>) -> &mut Self {
        self.widget.assign(&MAX_OPTIONS, max);
        self
    }

    pub fn disabled(&self) -> bool {
        self.widget.value(&DISABLED)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.widget.assign(&DISABLED, Some(disabled));
        self
    }
}

impl Renderable for SelectOptGroup {
    fn render(&self) -> VNode {
        self.element("optgroup").with_children(self.children.render()).into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.widget.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.widget.sn_attrs();
        sn.push(("label".to_owned(), self.label()));
        if let Some(max) = self.max_options() {
            sn.push(("data-max-options".to_owned(), max.to_string()));
        }
        if self.disabled() {
            sn.push(("disabled".to_owned(), "true".to_owned()));
        }
        sn
    }
}

impl Component for SelectOptGroup {
    component_accessors!(widget);

    fn child_components(&self) -> Vec<&dyn Component> {
        self.children.refs()
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        self.children.refs_mut()
    }
}

impl ChildContainer for SelectOptGroup {
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

    fn pairs(items: &[(&str, &str)]) -> Option<Vec<(String, String)>> {
        Some(items.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect())
    }

    #[test]
    fn option_label_defaults_to_value() {
        let o = SelectOption::new(Some("a".into()), None);
        assert_eq!(o.render().to_html(), r#"<option value="a">a</option>"#);
    }

    #[test]
    fn option_attrs() {
        let mut o = SelectOption::new(Some("v".into()), Some("Label".into()));
        o.set_icon(Some("fa-star".into())).set_disabled(true).set_selected(true);
        assert_eq!(
            o.render().to_html(),
            r#"<option value="v" data-icon="fa fa-star" disabled="true" selected="selected">Label</option>"#
        );
        assert_eq!(
            SelectOption::divider().render().to_html(),
            r#"<option data-divider="true"></option>"#
        );
    }

    #[test]
    fn optgroup_renders_options() {
        let mut g = SelectOptGroup::new("Group", pairs(&[("a", "A"), ("b", "B")]));
        g.set_max_options(Some(1)).set_disabled(true);
        assert_eq!(
            g.render().to_html(),
            concat!(
                r#"<optgroup label="Group" data-max-options="1" disabled="true">"#,
                r#"<option value="a">A</option><option value="b">B</option>"#,
                "</optgroup>"
            )
        );
    }

    #[test]
    fn setting_options_replaces_children() {
        let mut g = SelectOptGroup::new("G", pairs(&[("a", "A")]));
        g.set_options(pairs(&[("x", "X"), ("y", "Y"), ("z", "Z")]));
        assert_eq!(g.children().len(), 3);
        g.set_options(None);
        assert!(g.children().is_empty());
        assert_eq!(g.render().to_html(), r#"<optgroup label="G"></optgroup>"#);
    }
}
