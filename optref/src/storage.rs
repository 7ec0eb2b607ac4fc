//! Storage policies.
//!
//! A [`BasicOptional`] holds nothing but its policy: every question it answers, and every change
//! it makes, is delegated to the policy. Swapping the policy swaps what "holding a value" means.
//!
//! [`BasicOptional`]: crate::BasicOptional

use core::ops;

/// How an optional holds (or doesn't hold) its contents.
pub trait StoragePolicy : Default {
    /// What `create_value()` accepts.
    type Value;

    /// What `get_value()` exposes.
    type Target : ?Sized;

    /// Mutable access to the target.
    ///
    /// Policies that only allow read-only access to their target set this to `&'s Target`.
    type Mut<'s> : ops::Deref<Target = Self::Target>
        where Self: 's;

    /// Creates the held state from `value`, replacing any existing state.
    fn create_value(&mut self, value: Self::Value);

    /// Destroys the held state.
    ///
    /// Does nothing if there is no state.
    fn destroy_value(&mut self);

    /// Returns `true` if there is held state.
    fn has_value(&self) -> bool;

    /// Gets the target.
    ///
    /// # Panics
    ///
    /// Panics if `has_value()` is `false`.
    fn get_value(&self) -> &Self::Target;

    /// Gets mutable access to the target.
    ///
    /// # Panics
    ///
    /// Panics if `has_value()` is `false`.
    fn get_value_mut(&mut self) -> Self::Mut<'_>;

    /// Gets the target, or `other` if there is none.
    fn get_value_or<'s>(&'s self, other: &'s Self::Target) -> &'s Self::Target {
        if self.has_value() {
            self.get_value()
        } else {
            other
        }
    }

    /// Gets mutable access to the target, or `other` if there is none.
    fn get_value_or_mut<'s>(&'s mut self, other: Self::Mut<'s>) -> Self::Mut<'s> {
        if self.has_value() {
            self.get_value_mut()
        } else {
            other
        }
    }
}

/// Re-parameterization of a storage policy over a different target type.
///
/// The rebound policy stores its target the same way `Self` does: an owning policy stays owning,
/// and a read-only reference stays read-only with the same lifetime.
pub trait Rebind<U: ?Sized> : StoragePolicy {
    type Output : StoragePolicy<Target = U>;
}

/// An optional using `S` rebound to target `U`.
pub type Rebound<S, U> = crate::BasicOptional<<S as Rebind<U>>::Output>;
