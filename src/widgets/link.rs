//! Link widget: an `<a>` with an optional icon or image.

use crate::event::{fire, DomEvent, EventKind, Listeners};
use crate::property::{Prop, PropertyPolicy};
use crate::vdom::VNode;
use crate::widget::{component_accessors, Component, Renderable, Widget};

use super::button::label_with_icon;

pub const LABEL: Prop<String> = Prop::new("label", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const URL: Prop<String> = Prop::nullable("url");
pub const ICON: Prop<String> = Prop::nullable("icon");
pub const IMAGE: Prop<String> = Prop::nullable("image");

/// A hyperlink.
#[derive(Debug)]
pub struct Link {
    widget: Widget,
    listeners: Listeners<Link>,
}

impl Link {
    pub fn new(label: impl Into<String>, url: Option<String>) -> Self {
        let mut widget = Widget::new();
        widget.declare(&LABEL, Some(label.into()));
        widget.declare(&URL, url);
        widget.declare(&ICON, None);
        widget.declare(&IMAGE, None);
        Self {
            widget,
            listeners: Listeners::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_icon(Some(icon.into()));
        self
    }

    pub fn label(&self) -> String {
        self.widget.value(&LABEL)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.widget.assign(&LABEL, Some(label.into()));
        self
    }

    pub fn url(&self) -> Option<String> {
        self.widget.opt(&URL)
    }

    pub fn set_url(&mut self, url: Option<String>) -> &mut Self {
        self.widget.assign(&URL, url);
        self
    }

    pub fn icon(&self) -> Option<String> {
        self.widget.opt(&ICON)
    }

    pub fn set_icon(&mut self, icon: Option<String>) -> &mut Self {
        self.widget.assign(&ICON, icon);
        self
    }

    pub fn image(&self) -> Option<String> {
        self.widget.opt(&IMAGE)
    }

    pub fn set_image(&mut self, url: Option<String>) -> &mut Self {
        self.widget.assign(&IMAGE, url);
        self
    }

    pub fn on_click(&mut self, handler: impl FnMut(&mut Link, &DomEvent) + 'static) -> &mut Self {
        self.listeners.on(EventKind::Click, handler);
        self
    }

    fn listeners_mut(&mut self) -> &mut Listeners<Self> {
        &mut self.listeners
    }
}

impl Renderable for Link {
    fn render(&self) -> VNode {
        let label = self.label();
        self.element("a")
            .with_children(label_with_icon(&label, self.icon().as_deref(), self.image().as_deref()))
            .with_listeners(self.listeners.event_names())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.widget.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.widget.sn_attrs();
        if let Some(url) = self.url() {
            sn.push(("href".to_owned(), url));
        }
        sn
    }
}

impl Component for Link {
    component_accessors!(widget);

    fn dispatch(&mut self, event: &DomEvent) -> bool {
        fire(self, event, Self::listeners_mut) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_href_and_label() {
        let l = Link::new("Home", Some("/".into()));
        assert_eq!(l.render().to_html(), r##"<a href="/">Home</a>"##);
    }

    #[test]
    fn no_url_means_no_href() {
        assert_eq!(Link::new("x", None).render().to_html(), "<a>x</a>");
    }

    #[test]
    fn icon_precedes_label() {
        let l = Link::new("Edit", Some("#".into())).with_icon("fa-pencil");
        assert_eq!(
            l.render().to_html(),
            r##"<a href="#"><i class="fa fa-pencil fa-lg"></i> Edit</a>"##
        );
    }

    #[test]
    fn click_handler_sees_link() {
        let mut l = Link::new("a", None);
        l.on_click(|l, _| {
            l.set_label("b");
        });
        assert!(l.dispatch(&DomEvent::click()));
        assert_eq!(l.label(), "b");
    }
}
