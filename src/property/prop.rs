//! Prop<T>: a typed key binding a property name, its policy and its Rust type.

use std::fmt;
use std::marker::PhantomData;

use super::policy::PropertyPolicy;

/// A typed property key.
///
/// Props are `const`-constructible so components declare their properties as
/// associated constants and share them across instances:
///
/// ```ignore
/// const TEXT: Prop<String> = Prop::new("text", PropertyPolicy::REFRESH_ALWAYS_NON_NULL);
/// ```
pub struct Prop<T> {
    name: &'static str,
    policy: PropertyPolicy,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Prop<T> {
    /// Create a key with an explicit policy.
    pub const fn new(name: &'static str, policy: PropertyPolicy) -> Self {
        Self {
            name,
            policy,
            _marker: PhantomData,
        }
    }

    /// Create a nullable, refresh-always key.
    pub const fn nullable(name: &'static str) -> Self {
        Self::new(name, PropertyPolicy::REFRESH_ALWAYS_NULLABLE)
    }

    /// The property name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The property policy.
    pub const fn policy(&self) -> PropertyPolicy {
        self.policy
    }
}

// Manual impls so we don't require T: Copy/Clone/Debug for the key itself.
impl<T> Copy for Prop<T> {}
impl<T> Clone for Prop<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> fmt::Debug for Prop<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prop")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .finish()
    }
}
