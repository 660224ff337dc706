//! Virtual DOM: the render output tree and its HTML serialization.
//!
//! Components render into [`VNode`] trees. Patching a real document from
//! these trees is left to an external renderer; [`VNode::to_html`] gives the
//! markup the patched document would contain.

pub mod html;
pub mod node;
pub mod query;

pub use html::inner_html;
pub use node::{VElement, VNode};
