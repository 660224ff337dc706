//! PropertyStore: keyed property values with per-key update policies.
//!
//! The store is the mutation ledger of a component. Each property is
//! registered once with a [`PropertyPolicy`] and a [`ValueKind`]; writes run
//! through the policy, which decides whether the store mutates. The store
//! itself never invalidates anything: acting on an accepted write is the
//! owner's job (see [`crate::style::StyledComponent`]).
//!
//! Absent values are represented by key absence, so iterating the set
//! properties is proportional to the number of present values.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::error::PropertyError;
use super::policy::PropertyPolicy;
use super::prop::Prop;
use super::value::{PropertyType, PropertyValue, ValueKind};

#[derive(Debug, Clone, Copy)]
struct Slot {
    policy: PropertyPolicy,
    kind: ValueKind,
}

/// Keyed property store.
///
/// Present values iterate in insertion order: overwriting a present value
/// keeps its position, clearing and setting again moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    slots: HashMap<String, Slot>,
    values: IndexMap<String, PropertyValue>,
}

impl PropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a property slot, optionally seeding its value.
    ///
    /// Registering a name twice fails with [`PropertyError::AlreadyRegistered`]
    /// and leaves the first registration in place.
    pub fn register(
        &mut self,
        name: &str,
        kind: ValueKind,
        initial: Option<PropertyValue>,
        policy: PropertyPolicy,
    ) -> Result<(), PropertyError> {
        if self.slots.contains_key(name) {
            return Err(PropertyError::AlreadyRegistered(name.to_owned()));
        }
        if let Some(value) = &initial {
            check_kind(name, kind, value)?;
        }
        self.slots.insert(name.to_owned(), Slot { policy, kind });
        if let Some(value) = initial {
            self.values.insert(name.to_owned(), value);
        }
        Ok(())
    }

    /// Register a typed property.
    pub fn register_prop<T: PropertyType>(
        &mut self,
        prop: &Prop<T>,
        initial: Option<T>,
    ) -> Result<(), PropertyError> {
        self.register(
            prop.name(),
            T::KIND,
            initial.map(PropertyType::into_value),
            prop.policy(),
        )
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Read a property.
    ///
    /// Returns `Ok(None)` for an absent nullable property and
    /// [`PropertyError::Uninitialized`] for an absent non-nullable one.
    pub fn get(&self, name: &str) -> Result<Option<&PropertyValue>, PropertyError> {
        let slot = self.slot(name)?;
        match self.values.get(name) {
            Some(value) => Ok(Some(value)),
            None if slot.policy.nullable => Ok(None),
            None => Err(PropertyError::Uninitialized(name.to_owned())),
        }
    }

    /// Read a typed property.
    pub fn get_typed<T: PropertyType>(&self, prop: &Prop<T>) -> Result<Option<T>, PropertyError> {
        match self.get(prop.name())? {
            Some(value) => T::from_value(value).map(Some).ok_or_else(|| {
                PropertyError::TypeMismatch {
                    name: prop.name().to_owned(),
                    expected: T::KIND,
                    found: value.kind(),
                }
            }),
            None => Ok(None),
        }
    }

    /// Read a typed property that must hold a value.
    pub fn require<T: PropertyType>(&self, prop: &Prop<T>) -> Result<T, PropertyError> {
        self.get_typed(prop)?
            .ok_or_else(|| PropertyError::Uninitialized(prop.name().to_owned()))
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Write a property through its policy.
    ///
    /// Returns whether the write was accepted. Rejected writes, including
    /// every error case, leave the store unchanged.
    pub fn set(&mut self, name: &str, new: Option<PropertyValue>) -> Result<bool, PropertyError> {
        let slot = *self.slot(name)?;
        if let Some(value) = &new {
            check_kind(name, slot.kind, value)?;
        }
        let accepted = slot
            .policy
            .on_set(name, self.values.get(name), new.as_ref())
            .inspect_err(|err| tracing::debug!(property = name, %err, "write rejected"))?;
        if !accepted {
            tracing::trace!(property = name, "write ignored: value unchanged");
            return Ok(false);
        }
        match new {
            Some(value) => {
                tracing::trace!(property = name, value = %value, "property set");
                self.values.insert(name.to_owned(), value);
            }
            None => {
                tracing::trace!(property = name, "property cleared");
                self.values.shift_remove(name);
            }
        }
        Ok(true)
    }

    /// Write a typed property.
    pub fn set_typed<T: PropertyType>(
        &mut self,
        prop: &Prop<T>,
        new: Option<T>,
    ) -> Result<bool, PropertyError> {
        self.set(prop.name(), new.map(PropertyType::into_value))
    }

    /// Write a property from its text form, e.g. a value read back from a
    /// browser control.
    ///
    /// Text that does not parse as the slot's kind is treated as absent: a
    /// nullable property is cleared, a non-nullable one keeps its value and
    /// the write is reported as not accepted.
    pub fn set_parsed(&mut self, name: &str, text: &str) -> Result<bool, PropertyError> {
        let slot = *self.slot(name)?;
        match PropertyValue::parse(slot.kind, text) {
            Ok(value) => self.set(name, Some(value)),
            Err(err) => {
                tracing::debug!(property = name, input = text, %err, "unparseable input treated as absent");
                if slot.policy.nullable {
                    self.set(name, None)
                } else {
                    Ok(false)
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Whether `name` has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Whether `name` currently holds a value.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The policy of a registered property.
    pub fn policy(&self, name: &str) -> Option<PropertyPolicy> {
        self.slots.get(name).map(|s| s.policy)
    }

    /// The value kind of a registered property.
    pub fn kind(&self, name: &str) -> Option<ValueKind> {
        self.slots.get(name).map(|s| s.kind)
    }

    /// Present values, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of present values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no property holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of registered properties.
    pub fn registered_len(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, name: &str) -> Result<&Slot, PropertyError> {
        self.slots
            .get(name)
            .ok_or_else(|| PropertyError::UnknownProperty(name.to_owned()))
    }
}

fn check_kind(name: &str, expected: ValueKind, value: &PropertyValue) -> Result<(), PropertyError> {
    if value.kind() == expected {
        Ok(())
    } else {
        Err(PropertyError::TypeMismatch {
            name: name.to_owned(),
            expected,
            found: value.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::CssSize;
    use pretty_assertions::assert_eq;

    const WIDTH: Prop<CssSize> = Prop::nullable("width");
    const OPACITY: Prop<f64> = Prop::nullable("opacity");
    const DISABLED: Prop<bool> = Prop::new("disabled", PropertyPolicy::REFRESH_ON_CHANGE_NON_NULL);
    const LABEL: Prop<String> = Prop::new("label", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);

    fn store() -> PropertyStore {
        let mut s = PropertyStore::new();
        s.register_prop(&WIDTH, None).unwrap();
        s.register_prop(&OPACITY, None).unwrap();
        s.register_prop(&DISABLED, Some(false)).unwrap();
        s.register_prop(&LABEL, None).unwrap();
        s
    }

    fn names(s: &PropertyStore) -> Vec<&str> {
        s.iter().map(|(n, _)| n).collect()
    }

    // ── Registration ─────────────────────────────────────────────────

    #[test]
    fn register_seeds_initial_value() {
        let s = store();
        assert_eq!(s.get_typed(&DISABLED), Ok(Some(false)));
        assert_eq!(s.registered_len(), 4);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn reregister_is_rejected_and_keeps_first() {
        let mut s = store();
        let err = s
            .register("disabled", ValueKind::Bool, Some(PropertyValue::Bool(true)), PropertyPolicy::default())
            .unwrap_err();
        assert_eq!(err, PropertyError::AlreadyRegistered("disabled".into()));
        assert_eq!(s.get_typed(&DISABLED), Ok(Some(false)));
        assert_eq!(s.policy("disabled"), Some(PropertyPolicy::REFRESH_ON_CHANGE_NON_NULL));
    }

    #[test]
    fn register_rejects_mistyped_initial() {
        let mut s = PropertyStore::new();
        let err = s
            .register("w", ValueKind::Size, Some(PropertyValue::Bool(true)), PropertyPolicy::default())
            .unwrap_err();
        assert!(matches!(err, PropertyError::TypeMismatch { .. }));
        assert!(!s.is_registered("w"));
    }

    // ── Reads ────────────────────────────────────────────────────────

    #[test]
    fn nullable_reads_absent_before_write() {
        let s = store();
        assert_eq!(s.get("width"), Ok(None));
    }

    #[test]
    fn non_null_without_value_is_uninitialized() {
        let s = store();
        assert_eq!(s.get("label"), Err(PropertyError::Uninitialized("label".into())));
        assert_eq!(s.require(&LABEL), Err(PropertyError::Uninitialized("label".into())));
    }

    #[test]
    fn non_null_reads_written_value() {
        let mut s = store();
        s.set_typed(&LABEL, Some("OK".to_owned())).unwrap();
        assert_eq!(s.require(&LABEL), Ok("OK".to_owned()));
    }

    #[test]
    fn unknown_name_fails_both_ways() {
        let mut s = store();
        assert_eq!(s.get("doesNotExist"), Err(PropertyError::UnknownProperty("doesNotExist".into())));
        assert_eq!(
            s.set("doesNotExist", Some(PropertyValue::Bool(true))),
            Err(PropertyError::UnknownProperty("doesNotExist".into()))
        );
    }

    // ── Writes ───────────────────────────────────────────────────────

    #[test]
    fn nullable_write_absent_reverts() {
        let mut s = store();
        assert_eq!(s.set_typed(&OPACITY, Some(0.5)), Ok(true));
        assert_eq!(s.get_typed(&OPACITY), Ok(Some(0.5)));
        assert_eq!(s.set_typed(&OPACITY, None), Ok(true));
        assert_eq!(s.get_typed(&OPACITY), Ok(None));
        assert!(!s.is_set("opacity"));
    }

    #[test]
    fn non_null_clear_is_rejected_without_mutation() {
        let mut s = store();
        s.set_typed(&LABEL, Some("keep".to_owned())).unwrap();
        assert_eq!(
            s.set_typed(&LABEL, None),
            Err(PropertyError::RequiredValueMissing("label".into()))
        );
        assert_eq!(s.require(&LABEL), Ok("keep".to_owned()));
    }

    #[test]
    fn on_change_same_value_is_not_accepted() {
        let mut s = store();
        assert_eq!(s.set_typed(&DISABLED, Some(false)), Ok(false));
        assert_eq!(s.set_typed(&DISABLED, Some(true)), Ok(true));
        assert_eq!(s.set_typed(&DISABLED, Some(true)), Ok(false));
    }

    #[test]
    fn mistyped_write_is_rejected_without_mutation() {
        let mut s = store();
        s.set_typed(&WIDTH, Some(CssSize::px(1.0))).unwrap();
        let err = s.set("width", Some(PropertyValue::Number(3.0))).unwrap_err();
        assert_eq!(
            err,
            PropertyError::TypeMismatch {
                name: "width".into(),
                expected: ValueKind::Size,
                found: ValueKind::Number,
            }
        );
        assert_eq!(s.get_typed(&WIDTH), Ok(Some(CssSize::px(1.0))));
    }

    // ── Ordering ─────────────────────────────────────────────────────

    #[test]
    fn iteration_is_insertion_order() {
        let mut s = store();
        s.set_typed(&OPACITY, Some(1.0)).unwrap();
        s.set_typed(&WIDTH, Some(CssSize::px(5.0))).unwrap();
        assert_eq!(names(&s), vec!["disabled", "opacity", "width"]);
    }

    #[test]
    fn overwrite_keeps_position_clear_moves_to_end() {
        let mut s = store();
        s.set_typed(&OPACITY, Some(1.0)).unwrap();
        s.set_typed(&WIDTH, Some(CssSize::px(5.0))).unwrap();
        s.set_typed(&OPACITY, Some(0.2)).unwrap();
        assert_eq!(names(&s), vec!["disabled", "opacity", "width"]);
        s.set_typed(&OPACITY, None).unwrap();
        s.set_typed(&OPACITY, Some(0.3)).unwrap();
        assert_eq!(names(&s), vec!["disabled", "width", "opacity"]);
    }

    // ── Parsed input ─────────────────────────────────────────────────

    #[test]
    fn set_parsed_converts_by_kind() {
        let mut s = store();
        assert_eq!(s.set_parsed("width", "10px"), Ok(true));
        assert_eq!(s.get_typed(&WIDTH), Ok(Some(CssSize::px(10.0))));
    }

    #[test]
    fn set_parsed_malformed_clears_nullable() {
        let mut s = store();
        s.set_typed(&WIDTH, Some(CssSize::px(10.0))).unwrap();
        assert_eq!(s.set_parsed("width", "ten pixels"), Ok(true));
        assert_eq!(s.get_typed(&WIDTH), Ok(None));
    }

    #[test]
    fn set_parsed_malformed_keeps_non_null() {
        let mut s = store();
        assert_eq!(s.set_parsed("disabled", "maybe"), Ok(false));
        assert_eq!(s.get_typed(&DISABLED), Ok(Some(false)));
    }

    #[test]
    fn typed_read_of_wrong_type_is_mismatch() {
        let s = store();
        let wrong: Prop<String> = Prop::nullable("disabled");
        assert!(matches!(s.get_typed(&wrong), Err(PropertyError::TypeMismatch { .. })));
    }
}
