//! Browser event types.
//!
//! Defines [`DomEvent`] and [`EventKind`]. An external renderer translates
//! real browser events into these, reading the control state (`value`,
//! `checked`) from the target element.

use std::fmt;

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// The type of a browser event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    Input,
    /// Any other event, by its DOM name (e.g. `show.bs.dropdown`).
    Custom(String),
}

impl EventKind {
    /// The DOM event name.
    pub fn name(&self) -> &str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Input => "input",
            EventKind::Custom(name) => name,
        }
    }

    /// Map a DOM event name to a kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "click" => EventKind::Click,
            "change" => EventKind::Change,
            "input" => EventKind::Input,
            other => EventKind::Custom(other.to_owned()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// DomEvent
// ---------------------------------------------------------------------------

/// A browser event delivered to a component.
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub kind: EventKind,
    /// The target control's `value`, if it has one.
    pub value: Option<String>,
    /// The target control's `checked` state, if it has one.
    pub checked: Option<bool>,
}

impl DomEvent {
    /// An event with no control state.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            value: None,
            checked: None,
        }
    }

    pub fn click() -> Self {
        Self::new(EventKind::Click)
    }

    pub fn change() -> Self {
        Self::new(EventKind::Change)
    }

    /// An `input` event carrying the control's current value.
    pub fn input(value: impl Into<String>) -> Self {
        Self::new(EventKind::Input).with_value(value)
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(EventKind::Custom(name.into()))
    }

    /// Attach the control value (builder).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Attach the control's checked state (builder).
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Attach a checked state read as text, e.g. from a `checked` property
    /// serialized by the page. Anything but `true`/`false` leaves it unset.
    pub fn with_checked_text(mut self, text: &str) -> Self {
        self.checked = match text.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
        self
    }

    /// Whether the event is of the given kind.
    pub fn is(&self, kind: &EventKind) -> bool {
        self.kind == *kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in [EventKind::Click, EventKind::Change, EventKind::Input] {
            assert_eq!(EventKind::from_name(kind.name()), kind);
        }
        assert_eq!(
            EventKind::from_name("show.bs.dropdown"),
            EventKind::Custom("show.bs.dropdown".into())
        );
    }

    #[test]
    fn input_carries_value() {
        let e = DomEvent::input("abc");
        assert!(e.is(&EventKind::Input));
        assert_eq!(e.value.as_deref(), Some("abc"));
        assert_eq!(e.checked, None);
    }

    #[test]
    fn checked_text_parses_strictly() {
        assert_eq!(DomEvent::change().with_checked_text("true").checked, Some(true));
        assert_eq!(DomEvent::change().with_checked_text("false").checked, Some(false));
        assert_eq!(DomEvent::change().with_checked_text("on").checked, None);
    }
}
