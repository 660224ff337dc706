//! Bootstrap dropdown: a toggle button over a `dropdown-menu` list.
//!
//! Menu entries are `(label, target)` pairs. A target equal to one of the
//! [`DD`] markers turns the entry into a header, a separator or a disabled
//! link; anything else is the link's URL.

use std::any::Any;

use crate::css::CssSize;
use crate::event::{fire, DomEvent, EventKind, Listeners};
use crate::ids::{next_element_id, ComponentId, IdGenerator};
use crate::property::{Prop, PropertyPolicy};
use crate::style::Styleable;
use crate::vdom::VNode;
use crate::widget::{ChildContainer, Component, Renderable, Widget};

use super::button::{Button, ButtonSize, ButtonStyle};
use super::link::Link;
use super::list::{ListTag, ListType};
use super::tag::{Tag, TagType};

/// Event fired when the menu opens.
pub const SHOW_EVENT: &str = "show.bs.dropdown";
/// Event fired when the menu closes.
pub const HIDE_EVENT: &str = "hide.bs.dropdown";

/// Special menu entry markers, used in place of a link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DD {
    Header,
    Disabled,
    Separator,
}

impl DD {
    pub fn marker(self) -> &'static str {
        match self {
            DD::Header => "DD#HEADER",
            DD::Disabled => "DD#DISABLED",
            DD::Separator => "DD#SEPARATOR",
        }
    }

    pub fn from_marker(target: &str) -> Option<DD> {
        [DD::Header, DD::Disabled, DD::Separator]
            .into_iter()
            .find(|dd| dd.marker() == target)
    }
}

// ---------------------------------------------------------------------------
// Inner parts
// ---------------------------------------------------------------------------

/// The toggle button.
#[derive(Debug)]
pub struct DropDownButton {
    button: Button,
    expanded: bool,
}

impl DropDownButton {
    fn new(idc: &str, text: String) -> Self {
        let mut widget = Widget::with_classes(["dropdown"]);
        widget.set_dom_id(Some(idc.to_owned()));
        Self {
            button: Button::with_widget(widget, text),
            expanded: false,
        }
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }

    fn set_expanded(&mut self, expanded: bool) {
        if self.expanded != expanded {
            self.expanded = expanded;
            self.button.widget().refresh();
        }
    }
}

impl Renderable for DropDownButton {
    fn render(&self) -> VNode {
        self.element("button")
            .with_children(self.button.label_nodes())
            .with_listeners(self.button.listened_events())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.button.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.button.sn_attrs();
        sn.push(("data-toggle".to_owned(), "dropdown".to_owned()));
        sn.push(("aria-haspopup".to_owned(), "true".to_owned()));
        sn.push(("aria-expanded".to_owned(), self.expanded.to_string()));
        sn
    }
}

impl Component for DropDownButton {
    fn widget(&self) -> &Widget {
        self.button.widget()
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self.button.widget_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn dispatch(&mut self, event: &DomEvent) -> bool {
        self.button.dispatch(event)
    }
}

/// The menu list, labelled by the toggle button.
#[derive(Debug)]
pub struct DropDownList {
    list: ListTag,
    aria_id: String,
}

impl DropDownList {
    fn new(idc: &str) -> Self {
        Self {
            list: ListTag::with_widget(Widget::with_classes(["dropdown-menu"]), ListType::Ul, None),
            aria_id: idc.to_owned(),
        }
    }

    pub fn list(&self) -> &ListTag {
        &self.list
    }
}

impl Renderable for DropDownList {
    fn render(&self) -> VNode {
        self.element(self.list.list_type().tag_name())
            .with_children(self.list.list_nodes())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.list.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.list.sn_attrs();
        sn.push(("aria-labelledby".to_owned(), self.aria_id.clone()));
        sn
    }
}

impl Component for DropDownList {
    fn widget(&self) -> &Widget {
        self.list.widget()
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self.list.widget_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn child_components(&self) -> Vec<&dyn Component> {
        self.list.child_components()
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        self.list.child_components_mut()
    }
}

// ---------------------------------------------------------------------------
// DropDown
// ---------------------------------------------------------------------------

pub const DROPUP: Prop<bool> = Prop::new("dropup", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);

/// A dropdown menu.
///
/// Button properties (text, icon, style, size, block, disabled, image) live
/// on the inner button. Children added to the dropdown go to the menu list.
#[derive(Debug)]
pub struct DropDown {
    widget: Widget,
    idc: String,
    elements: Option<Vec<(String, String)>>,
    button: DropDownButton,
    list: DropDownList,
    listeners: Listeners<DropDown>,
}

impl DropDown {
    pub fn new(text: impl Into<String>, elements: Option<Vec<(String, String)>>) -> Self {
        Self::with_idc(next_element_id("dropdown"), text.into(), elements)
    }

    /// Like [`DropDown::new`], drawing the element id from `ids`.
    pub fn new_with(ids: &IdGenerator, text: impl Into<String>, elements: Option<Vec<(String, String)>>) -> Self {
        Self::with_idc(ids.next_element("dropdown"), text.into(), elements)
    }

    fn with_idc(idc: String, text: String, elements: Option<Vec<(String, String)>>) -> Self {
        let mut widget = Widget::new();
        widget.declare(&DROPUP, Some(false));
        let mut dropdown = Self {
            widget,
            button: DropDownButton::new(&idc, text),
            list: DropDownList::new(&idc),
            idc,
            elements: None,
            listeners: Listeners::new(),
        };
        dropdown.set_elements(elements);
        dropdown
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_icon(Some(icon.into()));
        self
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.set_button_style(style);
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

    /// The element id of the toggle button.
    pub fn idc(&self) -> &str {
        &self.idc
    }

    pub fn button(&self) -> &DropDownButton {
        &self.button
    }

    pub fn list(&self) -> &DropDownList {
        &self.list
    }

    pub fn elements(&self) -> Option<&[(String, String)]> {
        self.elements.as_deref()
    }

    /// Replace the menu entries built from elements. Children added
    /// directly are dropped too.
    pub fn set_elements(&mut self, elements: Option<Vec<(String, String)>>) -> &mut Self {
        self.list.list.remove_all();
        for (label, target) in elements.iter().flatten() {
            self.list.list.add_boxed(menu_entry(label, target));
        }
        self.elements = elements;
        self
    }

    pub fn text(&self) -> String {
        self.button.button.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.button.button.set_text(text);
        self
    }

    pub fn icon(&self) -> Option<String> {
        self.button.button.icon()
    }

    pub fn set_icon(&mut self, icon: Option<String>) -> &mut Self {
        self.button.button.set_icon(icon);
        self
    }

    pub fn button_style(&self) -> ButtonStyle {
        self.button.button.button_style()
    }

    pub fn set_button_style(&mut self, style: ButtonStyle) -> &mut Self {
        self.button.button.set_button_style(style);
        self
    }

    pub fn size(&self) -> Option<ButtonSize> {
        self.button.button.size()
    }

    pub fn set_size(&mut self, size: Option<ButtonSize>) -> &mut Self {
        self.button.button.set_size(size);
        self
    }

    pub fn block(&self) -> bool {
        self.button.button.block()
    }

    pub fn set_block(&mut self, block: bool) -> &mut Self {
        self.button.button.set_block(block);
        self
    }

    pub fn disabled(&self) -> bool {
        self.button.button.disabled()
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.button.button.set_disabled(disabled);
        self
    }

    pub fn image(&self) -> Option<String> {
        self.button.button.image()
    }

    pub fn set_image(&mut self, image: Option<String>) -> &mut Self {
        self.button.button.set_image(image);
        self
    }

    pub fn dropup(&self) -> bool {
        self.widget.value(&DROPUP)
    }

    pub fn set_dropup(&mut self, dropup: bool) -> &mut Self {
        self.widget.assign(&DROPUP, Some(dropup));
        self
    }

    /// Set the width of the dropdown and of its button.
    pub fn set_width(&mut self, width: Option<CssSize>) -> &mut Self {
        Styleable::set_width(self, width);
        self.button.set_width(width);
        self
    }

    pub fn is_open(&self) -> bool {
        self.widget.has_css_class("open")
    }

    /// Open or close the menu, firing the matching event.
    pub fn toggle(&mut self) {
        let open = !self.is_open();
        self.set_open(open);
        let name = if open { SHOW_EVENT } else { HIDE_EVENT };
        fire(self, &DomEvent::custom(name), Self::listeners_mut);
    }

    pub fn on_show(&mut self, handler: impl FnMut(&mut DropDown, &DomEvent) + 'static) -> &mut Self {
        self.listeners.on(EventKind::Custom(SHOW_EVENT.to_owned()), handler);
        self
    }

    pub fn on_hide(&mut self, handler: impl FnMut(&mut DropDown, &DomEvent) + 'static) -> &mut Self {
        self.listeners.on(EventKind::Custom(HIDE_EVENT.to_owned()), handler);
        self
    }

    fn set_open(&mut self, open: bool) {
        if open {
            self.widget.add_css_class("open");
        } else {
            self.widget.remove_css_class("open");
        }
        self.button.set_expanded(open);
    }

    fn listeners_mut(&mut self) -> &mut Listeners<Self> {
        &mut self.listeners
    }
}

fn menu_entry(label: &str, target: &str) -> Box<dyn Component> {
    match DD::from_marker(target) {
        Some(DD::Header) => Box::new(
            Tag::with_widget(Widget::with_classes(["dropdown-header"]), TagType::Li, Some(label.to_owned())),
        ),
        Some(DD::Separator) => {
            let mut tag = Tag::with_widget(Widget::with_classes(["divider"]), TagType::Li, Some(label.to_owned()));
            tag.widget_mut().set_role(Some("separator".to_owned()));
            Box::new(tag)
        }
        Some(DD::Disabled) => {
            let mut tag = Tag::with_widget(Widget::with_classes(["disabled"]), TagType::Li, None);
            tag.add(Link::new(label, Some("#".to_owned())));
            Box::new(tag)
        }
        None => Box::new(Link::new(label, Some(target.to_owned()))),
    }
}

impl Renderable for DropDown {
    fn render(&self) -> VNode {
        self.element("div")
            .with_child(self.button.render())
            .with_child(self.list.render())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        let mut cl = self.widget.sn_class();
        let side = if self.dropup() { "dropup" } else { "dropdown" };
        cl.push((side.to_owned(), true));
        cl
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        self.widget.sn_attrs()
    }
}

impl Component for DropDown {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn child_components(&self) -> Vec<&dyn Component> {
        vec![&self.button as &dyn Component, &self.list]
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        vec![&mut self.button as &mut dyn Component, &mut self.list]
    }

    /// A click toggles the menu. Show and hide events coming from the page
    /// sync the open state and reach the registered handlers.
    fn dispatch(&mut self, event: &DomEvent) -> bool {
        match &event.kind {
            EventKind::Click => {
                self.toggle();
                true
            }
            EventKind::Custom(name) if name == SHOW_EVENT || name == HIDE_EVENT => {
                self.set_open(name == SHOW_EVENT);
                fire(self, event, Self::listeners_mut);
                true
            }
            _ => false,
        }
    }
}

impl ChildContainer for DropDown {
    fn add_boxed(&mut self, child: Box<dyn Component>) -> &mut Self {
        self.list.list.add_boxed(child);
        self
    }

    fn remove(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        self.list.list.remove(id)
    }

    fn remove_all(&mut self) -> Vec<Box<dyn Component>> {
        self.list.list.remove_all()
    }

    fn children(&self) -> &[Box<dyn Component>] {
        self.list.list.children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn entries(items: &[(&str, &str)]) -> Option<Vec<(String, String)>> {
        Some(items.iter().map(|(l, t)| (l.to_string(), t.to_string())).collect())
    }

    #[test]
    fn renders_button_and_menu() {
        let ids = IdGenerator::new();
        let dd = DropDown::new_with(&ids, "Dropdown", entries(&[("abc", "#!/x"), ("def", "#!/y")]))
            .with_icon("flag");
        assert_eq!(
            dd.render().to_html(),
            concat!(
                r#"<div class="dropdown">"#,
                r#"<button class="dropdown btn btn-default" id="kv_dropdown_0" type="button" data-toggle="dropdown" aria-haspopup="true" aria-expanded="false">"#,
                r#"<span class="glyphicon glyphicon-flag"></span> Dropdown</button>"#,
                r#"<ul class="dropdown-menu" aria-labelledby="kv_dropdown_0">"#,
                r##"<li><a href="#!/x">abc</a></li><li><a href="#!/y">def</a></li>"##,
                "</ul></div>"
            )
        );
    }

    #[test]
    fn markers_become_headers_separators_and_disabled_links() {
        let ids = IdGenerator::new();
        let dd = DropDown::new_with(
            &ids,
            "x",
            entries(&[
                ("Head", DD::Header.marker()),
                ("", DD::Separator.marker()),
                ("Off", DD::Disabled.marker()),
            ]),
        );
        let html = dd.list().render().to_html();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="dropdown-menu" aria-labelledby="kv_dropdown_0">"#,
                r#"<li class="dropdown-header">Head</li>"#,
                r#"<li class="divider" role="separator"></li>"#,
                r##"<li class="disabled"><a href="#">Off</a></li>"##,
                "</ul>"
            )
        );
    }

    #[test]
    fn dropup_and_ids_advance() {
        let ids = IdGenerator::new();
        let _first = DropDown::new_with(&ids, "a", None);
        let mut second = DropDown::new_with(&ids, "b", None);
        second.set_dropup(true);
        assert_eq!(second.idc(), "kv_dropdown_1");
        let html = second.render().to_html();
        assert!(html.starts_with(r#"<div class="dropup">"#));
    }

    #[test]
    fn toggle_flips_open_and_fires_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let ids = IdGenerator::new();
        let mut dd = DropDown::new_with(&ids, "a", None);
        let log = Rc::clone(&seen);
        dd.on_show(move |_, e| log.borrow_mut().push(e.kind.to_string()));
        let log = Rc::clone(&seen);
        dd.on_hide(move |_, e| log.borrow_mut().push(e.kind.to_string()));

        dd.toggle();
        assert!(dd.is_open());
        assert!(dd.render().to_html().contains(r#"aria-expanded="true""#));
        assert!(dd.render().to_html().starts_with(r#"<div class="open dropdown">"#));
        dd.dispatch(&DomEvent::click());
        assert!(!dd.is_open());
        assert_eq!(*seen.borrow(), vec![SHOW_EVENT.to_owned(), HIDE_EVENT.to_owned()]);
    }

    #[test]
    fn width_reaches_the_button() {
        let ids = IdGenerator::new();
        let mut dd = DropDown::new_with(&ids, "a", None);
        dd.set_width(Some(CssSize::px(200.0)));
        assert_eq!(dd.button().width(), Some(CssSize::px(200.0)));
        assert_eq!(Styleable::width(&dd), Some(CssSize::px(200.0)));
    }

    #[test]
    fn children_and_button_properties_delegate() {
        let ids = IdGenerator::new();
        let mut dd = DropDown::new_with(&ids, "a", None);
        dd.add(Link::new("x", Some("#x".into())));
        assert_eq!(dd.children().len(), 1);
        assert_eq!(dd.list().list().children().len(), 1);
        dd.set_button_style(ButtonStyle::Primary).set_disabled(true);
        assert!(dd.button().button().disabled());
        assert!(dd.button().render().to_html().contains("btn-primary"));
    }
}
