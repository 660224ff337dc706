//! HTML serialization of virtual-DOM trees.
//!
//! The output matches what a browser reports as `innerHTML`/`outerHTML` for
//! the patched element: the `class` attribute first, then the other
//! attributes in order, then `style` as `name: value;` pairs.

use super::node::{VElement, VNode};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl VNode {
    /// Serialize this node and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append the serialization of this node to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            VNode::Element(el) => el.write_html(out),
            VNode::Text(text) => escape_text(text, out),
            VNode::Raw(html) => out.push_str(html),
        }
    }
}

impl VElement {
    /// Serialize this element and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append the serialization of this element to `out`.
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);

        let classes: Vec<&str> = self.class_names().collect();
        if !classes.is_empty() {
            write_attr(out, "class", &classes.join(" "));
        }
        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }
        if !self.style.is_empty() {
            let style = self
                .style
                .iter()
                .map(|(name, value)| format!("{name}: {value};"))
                .collect::<Vec<_>>()
                .join(" ");
            write_attr(out, "style", &style);
        }
        out.push('>');

        if is_void(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Serialize a list of nodes, as the `innerHTML` of their container.
pub fn inner_html(nodes: &[VNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_attr(value, out);
    out.push('"');
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_with_class_attrs_and_style() {
        let el = VElement::new("div")
            .with_class("row")
            .with_attr("id", "main")
            .with_style(vec![
                ("width".to_owned(), "10px".to_owned()),
                ("order".to_owned(), "1".to_owned()),
            ])
            .with_text("hi");
        assert_eq!(
            el.to_html(),
            r#"<div class="row" id="main" style="width: 10px; order: 1;">hi</div>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let el = VElement::new("input").with_attr("type", "text");
        assert_eq!(el.to_html(), r#"<input type="text">"#);
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let el = VElement::new("span")
            .with_attr("title", r#"a "b" & c"#)
            .with_text("1 < 2 & 3 > 2");
        assert_eq!(
            el.to_html(),
            r#"<span title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp; 3 &gt; 2</span>"#
        );
    }

    #[test]
    fn raw_is_verbatim() {
        let el = VElement::new("p").with_child(VNode::raw("<span><b>x</b></span>"));
        assert_eq!(el.to_html(), "<p><span><b>x</b></span></p>");
    }

    #[test]
    fn disabled_classes_are_skipped() {
        let el = VElement::new("li").with_class_list(vec![("active".to_owned(), false)]);
        assert_eq!(el.to_html(), "<li></li>");
    }

    #[test]
    fn inner_html_concatenates() {
        let nodes = vec![VNode::text("a"), VElement::new("br").into(), VNode::text("b")];
        assert_eq!(inner_html(&nodes), "a<br>b");
    }
}
