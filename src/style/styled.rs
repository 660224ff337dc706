//! StyledComponent: CSS properties, the memoized style list, and refresh.
//!
//! Every styling property lives in the component's [`PropertyStore`]. An
//! accepted write calls [`StyledComponent::refresh`], which drops the cached
//! style list and requests a render. The style list is recomputed lazily on
//! the next [`StyledComponent::style`] call and then served from the cache
//! until the next accepted write.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::css::names::{camel_to_kebab, kebab_to_camel};
use crate::ids::{next_component_id, ComponentId};
use crate::property::{Prop, PropertyError, PropertyStore, PropertyType, PropertyValue};
use crate::reactive::{request_render, single_render};

use super::declarations::{Declarations, Declared};
use super::props::*;

/// A CSS `(property, value)` pair, e.g. `("border-top", "1px solid red")`.
pub type StylePair = (String, String);

/// Panic with a contract violation. Used by the infallible accessors.
#[track_caller]
pub(crate) fn violated(err: PropertyError) -> ! {
    panic!("property contract violated: {err}")
}

/// The CSS styling mixin shared by every widget.
#[derive(Debug)]
pub struct StyledComponent {
    id: ComponentId,
    props: PropertyStore,
    /// Properties that contribute to the style list.
    style_names: Vec<&'static str>,
    cache: RefCell<Option<Rc<[StylePair]>>>,
    computations: Cell<u64>,
    invalidations: Cell<u64>,
}

impl StyledComponent {
    /// Create a styled component with an id from the thread's default generator.
    pub fn new() -> Self {
        Self::with_id(next_component_id())
    }

    /// Create a styled component with an explicit id.
    pub fn with_id(id: ComponentId) -> Self {
        let mut this = Self {
            id,
            props: PropertyStore::new(),
            style_names: Vec::with_capacity(STYLE_PROPERTY_NAMES.len()),
            cache: RefCell::new(None),
            computations: Cell::new(0),
            invalidations: Cell::new(0),
        };
        for prop in [WIDTH, MIN_WIDTH, MAX_WIDTH, HEIGHT, MIN_HEIGHT, MAX_HEIGHT] {
            this.declare_style(&prop);
        }
        for prop in [BORDER, BORDER_TOP, BORDER_RIGHT, BORDER_BOTTOM, BORDER_LEFT] {
            this.declare_style(&prop);
        }
        for prop in [
            MARGIN,
            MARGIN_TOP,
            MARGIN_RIGHT,
            MARGIN_BOTTOM,
            MARGIN_LEFT,
            PADDING,
            PADDING_TOP,
            PADDING_RIGHT,
            PADDING_BOTTOM,
            PADDING_LEFT,
        ] {
            this.declare_style(&prop);
        }
        this.declare_style(&COLOR);
        this.declare_style(&OPACITY);
        this.declare_style(&BACKGROUND);
        this
    }

    fn declare_style<T: PropertyType>(&mut self, prop: &Prop<T>) {
        if let Err(err) = self.register_style(prop, None) {
            violated(err);
        }
    }

    /// The component id.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// The underlying property store.
    pub fn props(&self) -> &PropertyStore {
        &self.props
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a widget property (not part of the style list).
    pub fn register<T: PropertyType>(
        &mut self,
        prop: &Prop<T>,
        initial: Option<T>,
    ) -> Result<(), PropertyError> {
        self.props.register_prop(prop, initial)
    }

    /// Register an additional styling property. Its CSS name is the kebab
    /// form of the property name.
    ///
    /// Registration is not a write: it never requests a render. An initial
    /// value only drops a style list cached before the registration.
    pub fn register_style<T: PropertyType>(
        &mut self,
        prop: &Prop<T>,
        initial: Option<T>,
    ) -> Result<(), PropertyError> {
        let has_initial = initial.is_some();
        self.props.register_prop(prop, initial)?;
        self.style_names.push(prop.name());
        if has_initial {
            self.cache.borrow_mut().take();
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Read a property.
    pub fn get<T: PropertyType>(&self, prop: &Prop<T>) -> Result<Option<T>, PropertyError> {
        self.props.get_typed(prop)
    }

    /// Read a property, treating store errors as contract violations.
    ///
    /// # Panics
    ///
    /// Panics if `prop` is not registered on this component, holds another
    /// type, or is non-nullable and uninitialized.
    #[track_caller]
    pub fn opt<T: PropertyType>(&self, prop: &Prop<T>) -> Option<T> {
        self.props.get_typed(prop).unwrap_or_else(|err| violated(err))
    }

    /// Read a property that must hold a value.
    ///
    /// # Panics
    ///
    /// Panics if the property is unregistered, mistyped, or absent.
    #[track_caller]
    pub fn value<T: PropertyType>(&self, prop: &Prop<T>) -> T {
        self.props.require(prop).unwrap_or_else(|err| violated(err))
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Write a property. Refreshes the component if the write is accepted.
    pub fn set<T: PropertyType>(
        &mut self,
        prop: &Prop<T>,
        value: Option<T>,
    ) -> Result<bool, PropertyError> {
        self.set_value(prop.name(), value.map(PropertyType::into_value))
    }

    /// Write a property, treating store errors as contract violations.
    ///
    /// # Panics
    ///
    /// Panics if the property is unregistered, or non-nullable and `value`
    /// is `None`.
    #[track_caller]
    pub fn assign<T: PropertyType>(&mut self, prop: &Prop<T>, value: Option<T>) -> bool {
        self.set(prop, value).unwrap_or_else(|err| violated(err))
    }

    /// Write an untyped value by property name.
    pub fn set_value(
        &mut self,
        name: &str,
        value: Option<PropertyValue>,
    ) -> Result<bool, PropertyError> {
        let accepted = self.props.set(name, value)?;
        if accepted {
            self.refresh();
        }
        Ok(accepted)
    }

    /// Write a property from its text form. Unparseable text is treated as
    /// absent.
    pub fn set_parsed(&mut self, name: &str, text: &str) -> Result<bool, PropertyError> {
        let accepted = self.props.set_parsed(name, text)?;
        if accepted {
            self.refresh();
        }
        Ok(accepted)
    }

    /// Apply a list of declarations as one render batch.
    ///
    /// Declaration names are CSS names (`margin-top`) or property names
    /// (`marginTop`). Stops at the first failing declaration; the ones before
    /// it stay applied.
    pub fn apply(&mut self, declarations: &Declarations) -> Result<(), PropertyError> {
        single_render(|| {
            for (name, declared) in declarations.iter() {
                let name = kebab_to_camel(name);
                match declared {
                    Declared::Value(value) => self.set_value(&name, Some(value.clone()))?,
                    Declared::Text(text) => self.set_parsed(&name, text)?,
                    Declared::Clear => self.set_value(&name, None)?,
                };
            }
            Ok(())
        })
    }

    // -----------------------------------------------------------------------
    // Refresh and the style cache
    // -----------------------------------------------------------------------

    /// Drop the cached style list and request a re-render.
    pub fn refresh(&self) {
        self.cache.borrow_mut().take();
        self.invalidations.set(self.invalidations.get() + 1);
        request_render(self.id);
    }

    /// The style list: every present styling property as a CSS pair, in the
    /// order the properties were set.
    ///
    /// Repeated calls without an accepted write in between return the same
    /// `Rc` without recomputing.
    pub fn style(&self) -> Rc<[StylePair]> {
        if let Some(cached) = self.cache.borrow().as_ref() {
            return Rc::clone(cached);
        }
        let computed: Rc<[StylePair]> = self.compute_style().into();
        *self.cache.borrow_mut() = Some(Rc::clone(&computed));
        computed
    }

    fn compute_style(&self) -> Vec<StylePair> {
        self.computations.set(self.computations.get() + 1);
        tracing::trace!(component = %self.id, "style list recomputed");
        self.props
            .iter()
            .filter(|(name, _)| self.style_names.contains(name))
            .map(|(name, value)| (camel_to_kebab(name), value.to_css()))
            .collect()
    }

    /// Whether a style list is cached.
    pub fn is_cached(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// How many times the style list has been computed.
    pub fn style_computations(&self) -> u64 {
        self.computations.get()
    }

    /// How many times the component has been refreshed.
    pub fn invalidations(&self) -> u64 {
        self.invalidations.get()
    }
}

impl Default for StyledComponent {
    fn default() -> Self {
        Self::new()
    }
}
