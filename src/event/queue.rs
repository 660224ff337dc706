//! Event queue: browser events waiting to be routed to their target component.

use std::collections::VecDeque;

use super::dom_event::DomEvent;
use crate::ids::ComponentId;

/// An event addressed to a component.
#[derive(Debug, Clone, PartialEq)]
pub struct Posted {
    pub target: ComponentId,
    pub event: DomEvent,
}

/// FIFO of posted events.
///
/// Events are enqueued via `push` and drained for routing via `drain`. The
/// queue does not route anything itself; [`crate::root::Root`] does.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<Posted>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event for `target`.
    pub fn push(&mut self, target: ComponentId, event: DomEvent) {
        self.queue.push_back(Posted { target, event });
    }

    /// Drain all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<Posted> {
        self.queue.drain(..).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdGenerator;

    #[test]
    fn drain_is_fifo_and_empties() {
        let ids = IdGenerator::new();
        let (a, b) = (ids.next_component(), ids.next_component());
        let mut q = EventQueue::new();
        q.push(a, DomEvent::click());
        q.push(b, DomEvent::input("x"));
        assert_eq!(q.pending_count(), 2);

        let drained = q.drain();
        assert_eq!(drained[0].target, a);
        assert_eq!(drained[1].event, DomEvent::input("x"));
        assert!(q.is_empty());
    }
}
