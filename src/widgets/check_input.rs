//! Checkbox and radio inputs.

use crate::event::{fire, DomEvent, EventKind, Listeners};
use crate::property::{Prop, PropertyPolicy};
use crate::property_enum;
use crate::vdom::VNode;
use crate::widget::{component_accessors, Component, Renderable, Widget};

use super::text_input::InputSize;

property_enum! {
    pub enum CheckInputType {
        Checkbox => "checkbox",
        Radio => "radio",
    }
}

pub const VALUE: Prop<bool> = Prop::new("value", PropertyPolicy::REFRESH_ON_CHANGE_NON_NULL);
pub const START_VALUE: Prop<bool> = Prop::new("startValue", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const TYPE: Prop<CheckInputType> = Prop::new("type", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const NAME: Prop<String> = Prop::nullable("name");
pub const DISABLED: Prop<bool> = Prop::new("disabled", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const EXTRA_VALUE: Prop<String> = Prop::nullable("extraValue");
pub const SIZE: Prop<InputSize> = Prop::nullable("size");

/// An `<input type="checkbox">` or `<input type="radio">`.
///
/// `value` follows the checked state reported by click and change events.
/// `start_value` controls the `checked` attribute of the generated HTML.
#[derive(Debug)]
pub struct CheckInput {
    widget: Widget,
    listeners: Listeners<CheckInput>,
}

impl CheckInput {
    pub fn new(input_type: CheckInputType, value: bool) -> Self {
        let mut widget = Widget::new();
        widget.declare(&VALUE, Some(value));
        widget.declare(&START_VALUE, Some(value));
        widget.declare(&TYPE, Some(input_type));
        widget.declare(&NAME, None);
        widget.declare(&DISABLED, Some(false));
        widget.declare(&EXTRA_VALUE, None);
        widget.declare(&SIZE, None);
        Self {
            widget,
            listeners: Listeners::new(),
        }
    }

    pub fn checkbox(value: bool) -> Self {
        Self::new(CheckInputType::Checkbox, value)
    }

    pub fn radio(value: bool) -> Self {
        Self::new(CheckInputType::Radio, value)
    }

    pub fn value(&self) -> bool {
        self.widget.value(&VALUE)
    }

    /// Returns whether the value changed.
    pub fn set_value(&mut self, value: bool) -> bool {
        self.widget.assign(&VALUE, Some(value))
    }

    pub fn start_value(&self) -> bool {
        self.widget.value(&START_VALUE)
    }

    /// Set the initial checked state and reset the live value to it.
    pub fn set_start_value(&mut self, value: bool) -> &mut Self {
        self.widget.assign(&START_VALUE, Some(value));
        self.widget.assign(&VALUE, Some(value));
        self
    }

    pub fn input_type(&self) -> CheckInputType {
        self.widget.value(&TYPE)
    }

    pub fn set_input_type(&mut self, input_type: CheckInputType) -> &mut Self {
        self.widget.assign(&TYPE, Some(input_type));
        self
    }

    pub fn name(&self) -> Option<String> {
        self.widget.opt(&NAME)
    }

    pub fn set_name(&mut self, name: Option<String>) -> &mut Self {
        self.widget.assign(&NAME, name);
        self
    }

    pub fn disabled(&self) -> bool {
        self.widget.value(&DISABLED)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.widget.assign(&DISABLED, Some(disabled));
        self
    }

    /// The `value` attribute submitted with the form.
    pub fn extra_value(&self) -> Option<String> {
        self.widget.opt(&EXTRA_VALUE)
    }

    pub fn set_extra_value(&mut self, extra: Option<String>) -> &mut Self {
        self.widget.assign(&EXTRA_VALUE, extra);
        self
    }

    pub fn size(&self) -> Option<InputSize> {
        self.widget.opt(&SIZE)
    }

    pub fn set_size(&mut self, size: Option<InputSize>) -> &mut Self {
        self.widget.assign(&SIZE, size);
        self
    }

    /// Register a handler run after click or change events update the value.
    pub fn on_change(&mut self, handler: impl FnMut(&mut CheckInput, &DomEvent) + 'static) -> &mut Self {
        self.listeners.on(EventKind::Change, handler);
        self
    }

    pub fn on_click(&mut self, handler: impl FnMut(&mut CheckInput, &DomEvent) + 'static) -> &mut Self {
        self.listeners.on(EventKind::Click, handler);
        self
    }

    fn listeners_mut(&mut self) -> &mut Listeners<Self> {
        &mut self.listeners
    }
}

impl Renderable for CheckInput {
    fn render(&self) -> VNode {
        self.element("input")
            .with_listeners(self.listeners.event_names())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        let mut cl = self.widget.sn_class();
        if let Some(size) = self.size() {
            cl.push((size.css_name().to_owned(), true));
        }
        cl
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.widget.sn_attrs();
        sn.push(("type".to_owned(), self.input_type().css_name().to_owned()));
        if self.start_value() {
            sn.push(("checked".to_owned(), "true".to_owned()));
        }
        if let Some(name) = self.name() {
            sn.push(("name".to_owned(), name));
        }
        if self.disabled() {
            sn.push(("disabled".to_owned(), "true".to_owned()));
        }
        if let Some(extra) = self.extra_value() {
            sn.push(("value".to_owned(), extra));
        }
        sn
    }
}

impl Component for CheckInput {
    component_accessors!(widget);

    fn dispatch(&mut self, event: &DomEvent) -> bool {
        let internal = matches!(event.kind, EventKind::Click | EventKind::Change);
        if internal {
            self.set_value(event.checked == Some(true));
        }
        let fired = fire(self, event, Self::listeners_mut);
        internal || fired > 0
    }
}
