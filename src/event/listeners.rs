//! Per-widget event listeners.
//!
//! A widget owns a [`Listeners<W>`] where `W` is the widget type itself, so a
//! handler receives the widget mutably along with the event. While a handler
//! runs it is taken out of its slot; this lets the handler mutate the widget
//! (and even register more listeners) without aliasing the listener list.

use std::fmt;

use super::dom_event::{DomEvent, EventKind};

/// A boxed event handler for a widget of type `W`.
pub type Handler<W> = Box<dyn FnMut(&mut W, &DomEvent)>;

/// Event handlers keyed by event kind, run in registration order.
pub struct Listeners<W> {
    entries: Vec<(EventKind, Option<Handler<W>>)>,
}

impl<W> Listeners<W> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a handler for `kind`.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&mut W, &DomEvent) + 'static) {
        self.entries.push((kind, Some(Box::new(handler))));
    }

    /// Drop every handler for `kind`.
    pub fn off(&mut self, kind: &EventKind) {
        self.entries.retain(|(k, _)| k != kind);
    }

    /// Whether any handler is registered for `kind`.
    pub fn listens(&self, kind: &EventKind) -> bool {
        self.entries.iter().any(|(k, _)| k == kind)
    }

    /// Names of the events with handlers, deduplicated, in registration order.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (kind, _) in &self.entries {
            if !names.iter().any(|n| n == kind.name()) {
                names.push(kind.name().to_owned());
            }
        }
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W> Default for Listeners<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> fmt::Debug for Listeners<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(k, _)| k.name()))
            .finish()
    }
}

/// Run every handler `target` has registered for `event.kind`.
///
/// `slot` projects the widget onto its listener list. Returns the number of
/// handlers run. Handlers registered while firing run on the next event.
pub fn fire<W>(target: &mut W, event: &DomEvent, slot: fn(&mut W) -> &mut Listeners<W>) -> usize {
    let count = slot(target).entries.len();
    let mut ran = 0;
    for index in 0..count {
        let handler = match slot(target).entries.get_mut(index) {
            Some((kind, handler)) if *kind == event.kind => handler.take(),
            _ => None,
        };
        let Some(mut handler) = handler else {
            continue;
        };
        handler(target, event);
        ran += 1;
        // A handler may have called `off`, which shifts the list; put it back
        // only if its slot is still there and empty.
        if let Some((kind, empty @ None)) = slot(target).entries.get_mut(index) {
            if *kind == event.kind {
                *empty = Some(handler);
            }
        }
    }
    ran
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        clicks: u32,
        seen: Vec<String>,
        listeners: Listeners<Counter>,
    }

    fn slot(c: &mut Counter) -> &mut Listeners<Counter> {
        &mut c.listeners
    }

    #[test]
    fn fires_matching_handlers_in_order() {
        let mut c = Counter::default();
        c.listeners.on(EventKind::Click, |c, _| {
            c.clicks += 1;
            c.seen.push("first".into());
        });
        c.listeners.on(EventKind::Change, |c, _| c.seen.push("change".into()));
        c.listeners.on(EventKind::Click, |c, _| c.seen.push("second".into()));

        assert_eq!(fire(&mut c, &DomEvent::click(), slot), 2);
        assert_eq!(c.clicks, 1);
        assert_eq!(c.seen, vec!["first", "second"]);
    }

    #[test]
    fn handler_is_restored_after_running() {
        let mut c = Counter::default();
        c.listeners.on(EventKind::Click, |c, _| c.clicks += 1);
        fire(&mut c, &DomEvent::click(), slot);
        fire(&mut c, &DomEvent::click(), slot);
        assert_eq!(c.clicks, 2);
    }

    #[test]
    fn handler_may_register_more_listeners() {
        let mut c = Counter::default();
        c.listeners.on(EventKind::Click, |c, _| {
            c.clicks += 1;
            c.listeners.on(EventKind::Input, |c, e| {
                c.seen.push(e.value.clone().unwrap_or_default());
            });
        });
        fire(&mut c, &DomEvent::click(), slot);
        fire(&mut c, &DomEvent::input("x"), slot);
        assert_eq!(c.seen, vec!["x"]);
    }

    #[test]
    fn no_match_runs_nothing() {
        let mut c = Counter::default();
        c.listeners.on(EventKind::Click, |c, _| c.clicks += 1);
        assert_eq!(fire(&mut c, &DomEvent::custom("hide.bs.dropdown"), slot), 0);
        assert_eq!(c.clicks, 0);
    }

    #[test]
    fn event_names_dedup() {
        let mut l: Listeners<Counter> = Listeners::new();
        l.on(EventKind::Click, |_, _| {});
        l.on(EventKind::Click, |_, _| {});
        l.on(EventKind::Input, |_, _| {});
        assert_eq!(l.event_names(), vec!["click", "input"]);
        assert!(l.listens(&EventKind::Input));
        l.off(&EventKind::Click);
        assert_eq!(l.len(), 1);
    }
}
