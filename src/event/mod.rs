//! Event system: browser events, per-widget listeners, the posting queue.

pub mod dom_event;
pub mod listeners;
pub mod queue;

pub use dom_event::{DomEvent, EventKind};
pub use listeners::{fire, Handler, Listeners};
pub use queue::{EventQueue, Posted};
