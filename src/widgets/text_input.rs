//! Text inputs: the shared input state, the `<input>` widget, and the
//! labelled form field.
//!
//! The `value` property tracks what the user typed (updated from `input`
//! events); `start_value` is what the generated HTML carries in its `value`
//! attribute. Setting the start value also resets the live value.

use std::any::Any;

use crate::event::{fire, DomEvent, EventKind, Listeners};
use crate::ids::{next_element_id, IdGenerator};
use crate::property::{Prop, PropertyPolicy};
use crate::property_enum;
use crate::vdom::VNode;
use crate::widget::{component_accessors, Component, Renderable, Widget};

use super::field_label::FieldLabel;

property_enum! {
    /// Input sizes.
    pub enum InputSize {
        Large => "input-lg",
        Small => "input-sm",
    }
}

property_enum! {
    pub enum TextInputType {
        Text => "text",
        Password => "password",
    }
}

pub const VALUE: Prop<String> = Prop::nullable("value");
pub const START_VALUE: Prop<String> = Prop::nullable("startValue");
pub const PLACEHOLDER: Prop<String> = Prop::nullable("placeholder");
pub const NAME: Prop<String> = Prop::nullable("name");
pub const MAXLENGTH: Prop<i64> = Prop::nullable("maxlength");
pub const DISABLED: Prop<bool> = Prop::new("disabled", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const AUTOFOCUS: Prop<bool> = Prop::nullable("autofocus");
pub const READONLY: Prop<bool> = Prop::nullable("readonly");
pub const SIZE: Prop<InputSize> = Prop::nullable("size");
pub const TYPE: Prop<TextInputType> = Prop::new("type", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
pub const AUTOCOMPLETE: Prop<bool> = Prop::nullable("autocomplete");

// ---------------------------------------------------------------------------
// AbstractTextInput
// ---------------------------------------------------------------------------

/// State shared by text-like inputs.
#[derive(Debug)]
pub struct AbstractTextInput {
    widget: Widget,
}

impl AbstractTextInput {
    pub fn new(mut widget: Widget, value: Option<String>) -> Self {
        widget.declare(&VALUE, value.clone());
        widget.declare(&START_VALUE, value);
        widget.declare(&PLACEHOLDER, None);
        widget.declare(&NAME, None);
        widget.declare(&MAXLENGTH, None);
        widget.declare(&DISABLED, Some(false));
        widget.declare(&AUTOFOCUS, None);
        widget.declare(&READONLY, None);
        widget.declare(&SIZE, None);
        Self { widget }
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn value(&self) -> Option<String> {
        self.widget.opt(&VALUE)
    }

    pub fn set_value(&mut self, value: Option<String>) -> &mut Self {
        self.widget.assign(&VALUE, value);
        self
    }

    pub fn start_value(&self) -> Option<String> {
        self.widget.opt(&START_VALUE)
    }

    /// Set the initial value and reset the live value to it.
    pub fn set_start_value(&mut self, value: Option<String>) -> &mut Self {
        self.widget.assign(&START_VALUE, value.clone());
        self.widget.assign(&VALUE, value);
        self.widget.refresh();
        self
    }

    pub fn placeholder(&self) -> Option<String> {
        self.widget.opt(&PLACEHOLDER)
    }

    pub fn set_placeholder(&mut self, placeholder: Option<String>) -> &mut Self {
        self.widget.assign(&PLACEHOLDER, placeholder);
        self
    }

    pub fn name(&self) -> Option<String> {
        self.widget.opt(&NAME)
    }

    pub fn set_name(&mut self, name: Option<String>) -> &mut Self {
        self.widget.assign(&NAME, name);
        self
    }

    pub fn maxlength(&self) -> Option<i64> {
        self.widget.opt(&MAXLENGTH)
    }

    pub fn set_maxlength(&mut self, maxlength: Option<i64>) -> &mut Self {
        self.widget.assign(&MAXLENGTH, maxlength);
        self
    }

    pub fn disabled(&self) -> bool {
        self.widget.value(&DISABLED)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.widget.assign(&DISABLED, Some(disabled));
        self
    }

    pub fn autofocus(&self) -> Option<bool> {
        self.widget.opt(&AUTOFOCUS)
    }

    pub fn set_autofocus(&mut self, autofocus: Option<bool>) -> &mut Self {
        self.widget.assign(&AUTOFOCUS, autofocus);
        self
    }

    pub fn readonly(&self) -> Option<bool> {
        self.widget.opt(&READONLY)
    }

    pub fn set_readonly(&mut self, readonly: Option<bool>) -> &mut Self {
        self.widget.assign(&READONLY, readonly);
        self
    }

    pub fn size(&self) -> Option<InputSize> {
        self.widget.opt(&SIZE)
    }

    pub fn set_size(&mut self, size: Option<InputSize>) -> &mut Self {
        self.widget.assign(&SIZE, size);
        self
    }

    /// Take the typed text from an `input` event. Empty text clears the value.
    pub fn change_value(&mut self, event: &DomEvent) {
        let value = event.value.clone().filter(|v| !v.is_empty());
        self.set_value(value);
    }

    pub fn sn_class(&self) -> Vec<(String, bool)> {
        let mut cl = self.widget.sn_class();
        if let Some(size) = self.size() {
            cl.push((size.css_name().to_owned(), true));
        }
        cl
    }

    pub fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.widget.sn_attrs();
        if let Some(placeholder) = self.placeholder() {
            sn.push(("placeholder".to_owned(), placeholder));
        }
        if let Some(name) = self.name() {
            sn.push(("name".to_owned(), name));
        }
        if self.autofocus() == Some(true) {
            sn.push(("autofocus".to_owned(), "autofocus".to_owned()));
        }
        if let Some(maxlength) = self.maxlength() {
            sn.push(("maxlength".to_owned(), maxlength.to_string()));
        }
        if self.readonly() == Some(true) {
            sn.push(("readonly".to_owned(), "readonly".to_owned()));
        }
        if self.disabled() {
            sn.push(("disabled".to_owned(), "true".to_owned()));
        }
        sn
    }
}

// ---------------------------------------------------------------------------
// TextInput
// ---------------------------------------------------------------------------

/// A single-line `<input class="form-control">`.
#[derive(Debug)]
pub struct TextInput {
    base: AbstractTextInput,
    listeners: Listeners<TextInput>,
}

impl TextInput {
    pub fn new(input_type: TextInputType, value: Option<String>) -> Self {
        let mut widget = Widget::with_classes(["form-control"]);
        widget.declare(&TYPE, Some(input_type));
        widget.declare(&AUTOCOMPLETE, None);
        Self {
            base: AbstractTextInput::new(widget, value),
            listeners: Listeners::new(),
        }
    }

    pub fn input(&self) -> &AbstractTextInput {
        &self.base
    }

    pub fn input_mut(&mut self) -> &mut AbstractTextInput {
        &mut self.base
    }

    pub fn value(&self) -> Option<String> {
        self.base.value()
    }

    pub fn set_value(&mut self, value: Option<String>) -> &mut Self {
        self.base.set_value(value);
        self
    }

    pub fn input_type(&self) -> TextInputType {
        self.base.widget.value(&TYPE)
    }

    pub fn set_input_type(&mut self, input_type: TextInputType) -> &mut Self {
        self.base.widget.assign(&TYPE, Some(input_type));
        self
    }

    pub fn autocomplete(&self) -> Option<bool> {
        self.base.widget.opt(&AUTOCOMPLETE)
    }

    pub fn set_autocomplete(&mut self, autocomplete: Option<bool>) -> &mut Self {
        self.base.widget.assign(&AUTOCOMPLETE, autocomplete);
        self
    }

    /// Register a handler run after `input` events update the value.
    pub fn on_input(&mut self, handler: impl FnMut(&mut TextInput, &DomEvent) + 'static) -> &mut Self {
        self.listeners.on(EventKind::Input, handler);
        self
    }

    pub fn on_change(&mut self, handler: impl FnMut(&mut TextInput, &DomEvent) + 'static) -> &mut Self {
        self.listeners.on(EventKind::Change, handler);
        self
    }

    fn listeners_mut(&mut self) -> &mut Listeners<Self> {
        &mut self.listeners
    }
}

impl Renderable for TextInput {
    fn render(&self) -> VNode {
        self.element("input")
            .with_listeners(self.listeners.event_names())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.base.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.base.sn_attrs();
        sn.push(("type".to_owned(), self.input_type().css_name().to_owned()));
        if let Some(start) = self.base.start_value() {
            sn.push(("value".to_owned(), start));
        }
        if let Some(autocomplete) = self.autocomplete() {
            let flag = if autocomplete { "on" } else { "off" };
            sn.push(("autocomplete".to_owned(), flag.to_owned()));
        }
        sn
    }
}

impl Component for TextInput {
    component_accessors!(base.widget);

    fn dispatch(&mut self, event: &DomEvent) -> bool {
        let internal = event.is(&EventKind::Input);
        if internal {
            self.base.change_value(event);
        }
        let fired = fire(self, event, Self::listeners_mut);
        internal || fired > 0
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

pub const LABEL: Prop<String> = Prop::nullable("label");
pub const RICH: Prop<bool> = Prop::new("rich", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);

/// A labelled text field: `div.form-group` holding a [`FieldLabel`] and a
/// [`TextInput`] tied together by a generated element id.
#[derive(Debug)]
pub struct Text {
    widget: Widget,
    idc: String,
    label: FieldLabel,
    input: TextInput,
}

impl Text {
    pub fn new(input_type: TextInputType, value: Option<String>, label: Option<String>) -> Self {
        Self::with_idc(next_element_id("form_text"), input_type, value, label)
    }

    /// Like [`Text::new`], drawing the element id from `ids`.
    pub fn new_with(ids: &IdGenerator, input_type: TextInputType, value: Option<String>, label: Option<String>) -> Self {
        Self::with_idc(ids.next_element("form_text"), input_type, value, label)
    }

    fn with_idc(idc: String, input_type: TextInputType, value: Option<String>, label: Option<String>) -> Self {
        let mut widget = Widget::with_classes(["form-group"]);
        widget.declare(&LABEL, label.clone());
        widget.declare(&RICH, Some(false));
        let mut input = TextInput::new(input_type, value);
        input.widget_mut().set_dom_id(Some(idc.clone()));
        Self {
            widget,
            label: FieldLabel::new(idc.clone(), label, false),
            idc,
            input,
        }
    }

    /// The element id shared by the label and the input.
    pub fn idc(&self) -> &str {
        &self.idc
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    pub fn value(&self) -> Option<String> {
        self.input.value()
    }

    pub fn set_value(&mut self, value: Option<String>) -> &mut Self {
        self.input.set_value(value);
        self
    }

    pub fn label(&self) -> Option<String> {
        self.widget.opt(&LABEL)
    }

    pub fn set_label(&mut self, label: Option<String>) -> &mut Self {
        self.widget.assign(&LABEL, label.clone());
        self.label.set_text(label);
        self
    }

    pub fn rich(&self) -> bool {
        self.widget.value(&RICH)
    }

    pub fn set_rich(&mut self, rich: bool) -> &mut Self {
        self.widget.assign(&RICH, Some(rich));
        self.label.set_rich(rich);
        self
    }

    pub fn placeholder(&self) -> Option<String> {
        self.input.input().placeholder()
    }

    pub fn set_placeholder(&mut self, placeholder: Option<String>) -> &mut Self {
        self.input.input_mut().set_placeholder(placeholder);
        self
    }
}

impl Renderable for Text {
    fn render(&self) -> VNode {
        self.element("div")
            .with_child(self.label.render())
            .with_child(self.input.render())
            .into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.widget.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        self.widget.sn_attrs()
    }
}

impl Component for Text {
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
        vec![&self.label as &dyn Component, &self.input]
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        vec![&mut self.label as &mut dyn Component, &mut self.input]
    }

    /// Events aimed at the field go to its input.
    fn dispatch(&mut self, event: &DomEvent) -> bool {
        self.input.dispatch(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_input_attrs() {
        let mut ti = TextInput::new(TextInputType::Text, Some("abc".into()));
        ti.widget_mut().set_dom_id(Some("idti".into()));
        ti.input_mut()
            .set_placeholder(Some("place".into()))
            .set_name(Some("name".into()))
            .set_maxlength(Some(15))
            .set_disabled(true);
        assert_eq!(
            ti.render().to_html(),
            r#"<input class="form-control" id="idti" placeholder="place" name="name" maxlength="15" disabled="true" type="text" value="abc">"#
        );
    }

    #[test]
    fn password_with_autocomplete_off() {
        let mut ti = TextInput::new(TextInputType::Password, None);
        ti.set_autocomplete(Some(false));
        ti.input_mut().set_size(Some(InputSize::Small)).set_readonly(Some(true));
        assert_eq!(
            ti.render().to_html(),
            r#"<input class="form-control input-sm" readonly="readonly" type="password" autocomplete="off">"#
        );
    }

    #[test]
    fn input_event_updates_value() {
        let mut ti = TextInput::new(TextInputType::Text, None);
        assert!(ti.dispatch(&DomEvent::input("typed")));
        assert_eq!(ti.value(), Some("typed".to_owned()));
        ti.dispatch(&DomEvent::input(""));
        assert_eq!(ti.value(), None);
        assert!(!ti.dispatch(&DomEvent::click()));
    }

    #[test]
    fn start_value_resets_value() {
        let mut ti = TextInput::new(TextInputType::Text, None);
        ti.dispatch(&DomEvent::input("typed"));
        ti.input_mut().set_start_value(Some("fresh".into()));
        assert_eq!(ti.value(), Some("fresh".to_owned()));
        assert_eq!(ti.input().start_value(), Some("fresh".to_owned()));
    }

    #[test]
    fn user_handler_sees_updated_value() {
        let mut ti = TextInput::new(TextInputType::Text, None);
        ti.on_input(|ti, _| {
            let upper = ti.value().map(|v| v.to_uppercase());
            ti.set_value(upper);
        });
        ti.dispatch(&DomEvent::input("abc"));
        assert_eq!(ti.value(), Some("ABC".to_owned()));
    }

    #[test]
    fn text_field_renders_label_and_input() {
        let ids = IdGenerator::new();
        let text = Text::new_with(&ids, TextInputType::Text, Some("v".into()), Some("Label".into()));
        assert_eq!(
            text.render().to_html(),
            concat!(
                r#"<div class="form-group">"#,
                r#"<label class="control-label" for="kv_form_text_0">Label</label>"#,
                r#"<input class="form-control" id="kv_form_text_0" type="text" value="v">"#,
                "</div>"
            )
        );
    }

    #[test]
    fn text_field_forwards_events_to_input() {
        let ids = IdGenerator::new();
        let mut text = Text::new_with(&ids, TextInputType::Text, None, None);
        text.dispatch(&DomEvent::input("x"));
        assert_eq!(text.value(), Some("x".to_owned()));
        text.set_label(Some("L".into()));
        assert!(text.render().to_html().contains(">L</label>"));
    }
}
