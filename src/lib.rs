//! # trellis
//!
//! A property-driven widget framework that renders Bootstrap-styled HTML
//! through a virtual DOM.
//!
//! Every widget keeps its state in a [`property::PropertyStore`]: named,
//! typed slots with a per-slot update policy deciding whether a write must
//! hold a value and whether it triggers a re-render. Styling properties
//! (sizes, colors, borders, margins, ...) feed a memoized inline style list,
//! and writes made inside [`reactive::single_render`] collapse into a single
//! render pass.
//!
//! ## Core Systems
//!
//! - **[`property`]**: typed property keys, update policies, the value store
//! - **[`css`]**: CSS value types (sizes, colors, borders, backgrounds) and their parser
//! - **[`style`]**: `StyledComponent`, the style cache and typed style accessors
//! - **[`reactive`]**: render requests and `single_render` batching
//! - **[`vdom`]**: virtual DOM nodes and the HTML serializer
//! - **[`event`]**: browser events, per-widget listeners, the event queue
//! - **[`widget`]**: the `Widget` base and the component traits
//! - **[`widgets`]**: buttons, tags, lists, panels, form inputs, dropdowns, grids
//! - **[`root`]**: the tree root: rendering, flushing, event routing
//! - **[`ids`]**: component ids and generated element ids
//! - **[`testing`]**: headless render helpers

extern crate self as trellis;

// Foundation
pub mod css;
pub mod ids;
pub mod property;

// Styling and scheduling
pub mod reactive;
pub mod style;

// Rendering and events
pub mod event;
pub mod vdom;

// Widget system
pub mod widget;
pub mod widgets;

// Application
pub mod root;
pub mod testing;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use trellis_macros::css;

pub use root::{Root, RootConfig};
