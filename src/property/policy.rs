//! PropertyPolicy: nullability + refresh rule attached to every property slot.

use super::error::PropertyError;
use super::value::PropertyValue;

/// When an accepted write should trigger invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refresh {
    /// Every write is accepted and invalidates, even if the value is unchanged.
    Always,
    /// A write is accepted only if the new value differs from the old one.
    ///
    /// Values compare with `PartialEq`, so a `NaN` number never equals the
    /// stored one and is always accepted.
    OnChange,
}

/// The update policy of a property slot. Immutable once registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyPolicy {
    pub nullable: bool,
    pub refresh: Refresh,
}

impl PropertyPolicy {
    /// Any write, including clearing, is accepted.
    pub const REFRESH_ALWAYS_NULLABLE: PropertyPolicy = PropertyPolicy::new(true, Refresh::Always);
    /// Any write of a present value is accepted; clearing is rejected.
    pub const REFRESH_ALWAYS_NON_NULL: PropertyPolicy = PropertyPolicy::new(false, Refresh::Always);
    /// Only changing writes are accepted; clearing is allowed.
    pub const REFRESH_ON_CHANGE_NULLABLE: PropertyPolicy =
        PropertyPolicy::new(true, Refresh::OnChange);
    /// Only changing writes are accepted; clearing is rejected.
    pub const REFRESH_ON_CHANGE_NON_NULL: PropertyPolicy =
        PropertyPolicy::new(false, Refresh::OnChange);

    /// Create a policy.
    pub const fn new(nullable: bool, refresh: Refresh) -> Self {
        Self { nullable, refresh }
    }

    /// Decide whether a write of `new` over `old` is accepted.
    ///
    /// Returns `Ok(true)` when the store should mutate and the owner should
    /// invalidate, `Ok(false)` for a no-op write, and
    /// [`PropertyError::RequiredValueMissing`] when a non-nullable slot is
    /// cleared.
    pub fn on_set(
        &self,
        name: &str,
        old: Option<&PropertyValue>,
        new: Option<&PropertyValue>,
    ) -> Result<bool, PropertyError> {
        if new.is_none() && !self.nullable {
            return Err(PropertyError::RequiredValueMissing(name.to_owned()));
        }
        Ok(match self.refresh {
            Refresh::Always => true,
            Refresh::OnChange => old != new,
        })
    }
}

impl Default for PropertyPolicy {
    fn default() -> Self {
        Self::REFRESH_ALWAYS_NULLABLE
    }
}
