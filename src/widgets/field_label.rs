//! Form field label.

use std::any::Any;

use crate::vdom::VNode;
use crate::widget::{Component, Renderable, Widget};

use super::tag::{Tag, TagType};

/// A `<label class="control-label" for="…">` pointing at a form control.
#[derive(Debug)]
pub struct FieldLabel {
    tag: Tag,
    for_id: String,
}

impl FieldLabel {
    pub fn new(for_id: impl Into<String>, text: Option<String>, rich: bool) -> Self {
        let tag = Tag::with_widget(Widget::with_classes(["control-label"]), TagType::Label, text).with_rich(rich);
        Self {
            tag,
            for_id: for_id.into(),
        }
    }

    pub fn for_id(&self) -> &str {
        &self.for_id
    }

    pub fn text(&self) -> Option<String> {
        self.tag.text()
    }

    pub fn set_text(&mut self, text: Option<String>) -> &mut Self {
        self.tag.set_text(text);
        self
    }

    pub fn rich(&self) -> bool {
        self.tag.rich()
    }

    pub fn set_rich(&mut self, rich: bool) -> &mut Self {
        self.tag.set_rich(rich);
        self
    }
}

impl Renderable for FieldLabel {
    fn render(&self) -> VNode {
        self.element("label").with_children(self.tag.content_nodes()).into()
    }

    fn sn_class(&self) -> Vec<(String, bool)> {
        self.tag.sn_class()
    }

    fn sn_attrs(&self) -> Vec<(String, String)> {
        let mut sn = self.tag.sn_attrs();
        sn.push(("for".to_owned(), self.for_id.clone()));
        sn
    }
}

impl Component for FieldLabel {
    fn widget(&self) -> &Widget {
        self.tag.widget()
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self.tag.widget_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_control_label() {
        let l = FieldLabel::new("kv_form_text_0", Some("Name".into()), false);
        assert_eq!(
            l.render().to_html(),
            r#"<label class="control-label" for="kv_form_text_0">Name</label>"#
        );
    }

    #[test]
    fn rich_label() {
        let mut l = FieldLabel::new("f", Some("<b>B</b>".into()), false);
        l.set_rich(true);
        assert_eq!(
            l.render().to_html(),
            r#"<label class="control-label" for="f"><span><b>B</b></span></label>"#
        );
    }
}
