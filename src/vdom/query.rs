//! Tree queries: by id, class, tag; generic predicate matching.

use super::node::{VElement, VNode};

impl VNode {
    /// Find the first element (depth-first, pre-order) whose `id` attribute matches.
    pub fn query_by_id(&self, id: &str) -> Option<&VElement> {
        self.query_first(|el| el.attr("id") == Some(id))
    }

    /// Find all elements that have the given class enabled.
    pub fn query_by_class(&self, class: &str) -> Vec<&VElement> {
        self.query_all(|el| el.has_class(class))
    }

    /// Find all elements with the given tag.
    pub fn query_by_tag(&self, tag: &str) -> Vec<&VElement> {
        self.query_all(|el| el.tag == tag)
    }

    /// Find all elements matching an arbitrary predicate, in document order.
    pub fn query_all(&self, predicate: impl Fn(&VElement) -> bool) -> Vec<&VElement> {
        let mut out = Vec::new();
        collect_matches(self, &predicate, &mut out);
        out
    }

    /// Find the first element matching a predicate, in document order.
    pub fn query_first(&self, predicate: impl Fn(&VElement) -> bool) -> Option<&VElement> {
        self.query_all(predicate).into_iter().next()
    }

    /// Concatenated text of all text nodes in the subtree. Raw HTML is skipped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        push_text(self, &mut out);
        out
    }
}

fn collect_matches<'a>(node: &'a VNode, predicate: &dyn Fn(&VElement) -> bool, out: &mut Vec<&'a VElement>) {
    if let VNode::Element(el) = node {
        if predicate(el) {
            out.push(el);
        }
        for child in &el.children {
            collect_matches(child, predicate, out);
        }
    }
}

fn push_text(node: &VNode, out: &mut String) {
    match node {
        VNode::Element(el) => el.children.iter().for_each(|c| push_text(c, out)),
        VNode::Text(text) => out.push_str(text),
        VNode::Raw(_) => {}
    }
}
