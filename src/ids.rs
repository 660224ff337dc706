//! Id generation: component ids and generated DOM element ids.
//!
//! An [`IdGenerator`] can be created and passed explicitly (widgets that
//! generate element ids have `*_with` constructors taking one), and each
//! thread has a default generator used by the plain constructors. Tests
//! reset the default with [`reset_ids`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;

/// Default prefix for generated element ids.
pub const DEFAULT_ID_PREFIX: &str = "kv_";

/// Identity of a component instance, used for render scheduling and event routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// The raw counter value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Counter-based id generator.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: RefCell<String>,
    components: Cell<u64>,
    elements: RefCell<HashMap<String, u64>>,
}

impl IdGenerator {
    /// Create a generator with the default element id prefix.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }

    /// Create a generator with a custom element id prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: RefCell::new(prefix.into()),
            components: Cell::new(0),
            elements: RefCell::new(HashMap::new()),
        }
    }

    /// Next component id.
    pub fn next_component(&self) -> ComponentId {
        let id = self.components.get();
        self.components.set(id + 1);
        ComponentId(id)
    }

    /// Next element id for a kind of widget: `kv_dropdown_0`, `kv_dropdown_1`, ...
    ///
    /// Each kind counts independently.
    pub fn next_element(&self, kind: &str) -> String {
        let mut elements = self.elements.borrow_mut();
        let counter = elements.entry(kind.to_owned()).or_insert(0);
        let id = format!("{}{}_{}", self.prefix.borrow(), kind, counter);
        *counter += 1;
        id
    }

    /// Change the element id prefix for ids generated from now on.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        *self.prefix.borrow_mut() = prefix.into();
    }

    /// Reset all counters and restore the default prefix.
    pub fn reset(&self) {
        self.components.set(0);
        self.elements.borrow_mut().clear();
        *self.prefix.borrow_mut() = DEFAULT_ID_PREFIX.to_owned();
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static GLOBAL: IdGenerator = IdGenerator::new();
}

/// Run `f` with this thread's default generator.
pub fn with_global<R>(f: impl FnOnce(&IdGenerator) -> R) -> R {
    GLOBAL.with(f)
}

/// Next component id from the default generator.
pub fn next_component_id() -> ComponentId {
    with_global(IdGenerator::next_component)
}

/// Next element id from the default generator.
pub fn next_element_id(kind: &str) -> String {
    with_global(|g| g.next_element(kind))
}

/// Reset the default generator. Intended for tests.
pub fn reset_ids() {
    with_global(IdGenerator::reset);
}
