//! Property store: typed keys, update policies, and the value ledger.
//!
//! - [`PropertyStore`]: keyed values with per-key [`PropertyPolicy`].
//! - [`Prop`]: typed key tying a name to a policy and a Rust type.
//! - [`PropertyValue`]: the tagged union every value is stored as.

pub mod error;
pub mod policy;
pub mod prop;
pub mod store;
pub mod value;

pub use error::PropertyError;
pub use policy::{PropertyPolicy, Refresh};
pub use prop::Prop;
pub use store::PropertyStore;
pub use value::{EnumTag, PropertyType, PropertyValue, ValueKind};
