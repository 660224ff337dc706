//! Node types: VNode, VElement.

/// A node of the virtual-DOM tree produced by rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    /// An element with classes, attributes, style and children.
    Element(VElement),
    /// Text content, escaped on serialization.
    Text(String),
    /// Pre-rendered HTML, emitted verbatim (rich text, icons).
    Raw(String),
}

impl VNode {
    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        VNode::Text(text.into())
    }

    /// A raw HTML node.
    pub fn raw(html: impl Into<String>) -> Self {
        VNode::Raw(html.into())
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&VElement> {
        match self {
            VNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Mutable access to the element, if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut VElement> {
        match self {
            VNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// The tag name, if this node is an element.
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|el| el.tag.as_str())
    }
}

impl From<VElement> for VNode {
    fn from(el: VElement) -> Self {
        VNode::Element(el)
    }
}

/// Data of a single element node.
///
/// Classes are `(name, enabled)` pairs; only enabled classes are rendered.
/// Attribute and style order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VElement {
    /// Tag name (`div`, `button`, ...).
    pub tag: String,
    pub classes: Vec<(String, bool)>,
    pub attrs: Vec<(String, String)>,
    pub style: Vec<(String, String)>,
    pub children: Vec<VNode>,
    /// Names of the DOM events the component listens to.
    pub listeners: Vec<String>,
}

impl VElement {
    /// Create an element with the given tag and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add a CSS class (builder). No-op if already present.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Add `(class, enabled)` pairs (builder).
    pub fn with_class_list(mut self, classes: impl IntoIterator<Item = (String, bool)>) -> Self {
        for (class, on) in classes {
            self.set_class(&class, on);
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set several attributes (builder).
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = (String, String)>) -> Self {
        for (name, value) in attrs {
            self.set_attr(name, value);
        }
        self
    }

    /// Append style pairs (builder).
    pub fn with_style(mut self, style: impl IntoIterator<Item = (String, String)>) -> Self {
        self.style.extend(style);
        self
    }

    /// Append a child (builder).
    pub fn with_child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children (builder).
    pub fn with_children(mut self, children: impl IntoIterator<Item = VNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(VNode::Text(text.into()));
        self
    }

    /// Record listened event names (builder).
    pub fn with_listeners(mut self, events: impl IntoIterator<Item = String>) -> Self {
        for event in events {
            if !self.listeners.contains(&event) {
                self.listeners.push(event);
            }
        }
        self
    }

    /// Whether the element has the class enabled.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|(c, on)| *on && c == class)
    }

    /// Enable a class. No-op if already enabled.
    pub fn add_class(&mut self, class: &str) {
        self.set_class(class, true);
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|(c, _)| c != class);
    }

    /// Set a class to enabled or disabled, keeping its position if present.
    pub fn set_class(&mut self, class: &str, on: bool) {
        match self.classes.iter_mut().find(|(c, _)| c == class) {
            Some(entry) => entry.1 = on,
            None => self.classes.push((class.to_owned(), on)),
        }
    }

    /// Enabled classes, in order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes
            .iter()
            .filter(|(_, on)| *on)
            .map(|(c, _)| c.as_str())
    }

    /// Look up an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Look up a style value.
    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let el = VElement::new("div");
        assert_eq!(el.tag, "div");
        assert!(el.classes.is_empty());
        assert!(el.attrs.is_empty());
        assert!(el.children.is_empty());
    }

    #[test]
    fn with_class_dedup() {
        let el = VElement::new("div").with_class("row").with_class("row");
        assert_eq!(el.classes, vec![("row".to_owned(), true)]);
    }

    #[test]
    fn class_list_keeps_disabled_entries_hidden() {
        let el = VElement::new("div").with_class_list(vec![
            ("a".to_owned(), true),
            ("b".to_owned(), false),
        ]);
        assert!(el.has_class("a"));
        assert!(!el.has_class("b"));
        assert_eq!(el.class_names().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn set_class_toggles_in_place() {
        let mut el = VElement::new("ul").with_class("dropdown-menu").with_class("open");
        el.set_class("dropdown-menu", false);
        el.set_class("dropdown-menu", true);
        assert_eq!(el.class_names().collect::<Vec<_>>(), vec!["dropdown-menu", "open"]);
        el.remove_class("open");
        assert!(!el.has_class("open"));
    }

    #[test]
    fn attrs_replace_in_place() {
        let el = VElement::new("input")
            .with_attr("type", "text")
            .with_attr("name", "a")
            .with_attr("type", "password");
        assert_eq!(el.attr("type"), Some("password"));
        assert_eq!(el.attrs[0].0, "type");
        assert_eq!(el.attr("missing"), None);
    }

    #[test]
    fn listeners_dedup() {
        let el = VElement::new("button").with_listeners(vec!["click".to_owned(), "click".to_owned()]);
        assert_eq!(el.listeners, vec!["click"]);
    }

    #[test]
    fn node_tag() {
        assert_eq!(VNode::from(VElement::new("p")).tag(), Some("p"));
        assert_eq!(VNode::text("x").tag(), None);
    }
}
