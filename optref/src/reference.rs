//! Optional references.
//!
//! An optional reference is either empty or *bound* to an object that lives somewhere else. It
//! never owns that object: binding, rebinding, clearing and dropping the optional all leave the
//! object itself untouched. Assigning to an optional reference changes what it refers to, rather
//! than assigning through to the referred-to object.
//!
//! Only existing objects can be bound, as the only thing `create_value()` accepts is a reference.
//! Binding a temporary gets rejected by the borrow checker as soon as the optional outlives it:
//!
//! ```compile_fail
//! use optref::OptionalRef;
//!
//! let r: OptionalRef<String> = OptionalRef::from(&mut String::from("temporary"));
//! assert!(r.has_value());
//! ```
//!
//! ...and there is no way to hand over a value directly:
//!
//! ```compile_fail
//! use optref::OptionalRef;
//!
//! let r: OptionalRef<u8> = OptionalRef::from(42u8);
//! ```
//!
//! Whether the target may be modified through the optional depends on the kind of reference
//! stored: [`OptionalRef`] stores a `&mut T`, [`OptionalCref`] a `&T`. A read-write binding can
//! be handed to a read-only one, but never the other way around:
//!
//! ```compile_fail
//! use optref::{cref, OptionalRef};
//!
//! let n = 1u8;
//! let r: OptionalRef<u8> = cref(Some(&n)).into();
//! ```

use core::fmt;
use core::ops;

use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

use crate::errors::bad_access;
use crate::optional::BasicOptional;
use crate::storage::{Rebind, Rebound, StoragePolicy};

mod sealed {
    pub trait Sealed {}

    impl<T: ?Sized> Sealed for &'_ T {}
    impl<T: ?Sized> Sealed for &'_ mut T {}
}

/// A reference that a [`ReferenceStorage`] can be bound with.
///
/// Implemented for `&T`, which only gives read-only access to the target, and for `&mut T`.
pub trait Reference : Sized + sealed::Sealed {
    type Target : ?Sized;

    /// Mutable access to the target, as far as this kind of reference allows it.
    type Mut<'s> : ops::Deref<Target = Self::Target>
        where Self: 's;

    fn get(&self) -> &Self::Target;

    fn reborrow_mut(&mut self) -> Self::Mut<'_>;
}

impl<'a, T: ?Sized> Reference for &'a T {
    type Target = T;
    type Mut<'s> = &'s T
        where Self: 's;

    #[inline(always)]
    fn get(&self) -> &T {
        *self
    }

    #[inline(always)]
    fn reborrow_mut(&mut self) -> Self::Mut<'_> {
        *self
    }
}

impl<'a, T: ?Sized> Reference for &'a mut T {
    type Target = T;
    type Mut<'s> = &'s mut T
        where Self: 's;

    #[inline(always)]
    fn get(&self) -> &T {
        &**self
    }

    #[inline(always)]
    fn reborrow_mut(&mut self) -> Self::Mut<'_> {
        &mut **self
    }
}

/// A `StoragePolicy` for optional references.
///
/// `R` is the reference type itself, `&'a T` or `&'a mut T`; the target is `R::Target`.
/// `get_value_or()` and `get_value_or_mut()` take a fallback reference to the same target type,
/// so either result can be used the same way, including for writes if `R` is `&mut T`.
#[derive(Clone, Copy)]
pub struct ReferenceStorage<R> {
    target: Option<R>,
}

impl<R> Default for ReferenceStorage<R> {
    /// Creates an unbound reference.
    #[inline]
    fn default() -> Self {
        Self { target: None }
    }
}

impl<R: Reference> fmt::Debug for ReferenceStorage<R>
where R::Target: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceStorage")
         .field("target", &self.target.as_ref().map(R::get))
         .finish()
    }
}

impl<R: Reference> StoragePolicy for ReferenceStorage<R> {
    type Value = R;
    type Target = R::Target;
    type Mut<'s> = R::Mut<'s>
        where Self: 's;

    /// Binds the reference to `target`.
    #[inline]
    fn create_value(&mut self, target: R) {
        self.target = Some(target);
    }

    /// Unbinds the reference.
    #[inline]
    fn destroy_value(&mut self) {
        self.target = None;
    }

    /// Returns `true` if the reference is bound.
    #[inline]
    fn has_value(&self) -> bool {
        self.target.is_some()
    }

    /// Gets the target of the reference.
    #[inline]
    #[track_caller]
    fn get_value(&self) -> &R::Target {
        match &self.target {
            Some(r) => r.get(),
            None => bad_access(),
        }
    }

    #[inline]
    #[track_caller]
    fn get_value_mut(&mut self) -> Self::Mut<'_> {
        match &mut self.target {
            Some(r) => r.reborrow_mut(),
            None => bad_access(),
        }
    }

    #[inline]
    fn get_value_or<'s>(&'s self, other: &'s R::Target) -> &'s R::Target {
        match &self.target {
            Some(r) => r.get(),
            None => other,
        }
    }

    #[inline]
    fn get_value_or_mut<'s>(&'s mut self, other: Self::Mut<'s>) -> Self::Mut<'s> {
        match &mut self.target {
            Some(r) => r.reborrow_mut(),
            None => other,
        }
    }
}

impl<R: Reference> ReferenceStorage<R> {
    /// Binds the reference to `target`, or unbinds it if `target` is `None`.
    #[inline]
    pub fn bind(&mut self, target: Option<R>) {
        match target {
            Some(target) => self.create_value(target),
            None => self.destroy_value(),
        }
    }
}

impl<'a, T: ?Sized> ReferenceStorage<&'a T> {
    /// Binds the same target as `other`, read-only.
    ///
    /// Unbinds the reference if `other` is unbound.
    #[inline]
    pub fn create_value_from(&mut self, other: ReferenceStorage<&'a mut T>) {
        self.target = other.target.map(|r| &*r);
    }
}

impl<'a, T: ?Sized> From<ReferenceStorage<&'a mut T>> for ReferenceStorage<&'a T> {
    #[inline]
    fn from(other: ReferenceStorage<&'a mut T>) -> Self {
        let mut this = Self::default();
        this.create_value_from(other);
        this
    }
}

impl<'a, T: ?Sized + 'a, U: ?Sized + 'a> Rebind<U> for ReferenceStorage<&'a T> {
    type Output = ReferenceStorage<&'a U>;
}

impl<'a, T: ?Sized + 'a, U: ?Sized + 'a> Rebind<U> for ReferenceStorage<&'a mut T> {
    type Output = ReferenceStorage<&'a mut U>;
}

/// An optional reference through which the target can be modified.
pub type OptionalRef<'a, T> = BasicOptional<ReferenceStorage<&'a mut T>>;

/// An optional reference with read-only access to the target.
pub type OptionalCref<'a, T> = BasicOptional<ReferenceStorage<&'a T>>;

impl<R: Reference> BasicOptional<ReferenceStorage<R>> {
    /// Unwraps the reference.
    #[inline]
    pub fn into_option(self) -> Option<R> {
        self.storage.target
    }
}

impl<'a, T: ?Sized> BasicOptional<ReferenceStorage<&'a mut T>> {
    /// Borrows a read-only view of the same target.
    #[inline]
    pub fn as_const(&self) -> OptionalCref<'_, T> {
        OptionalCref::from_option(self.as_option())
    }

    /// Narrows the binding to a part of the target.
    pub fn project<U: ?Sized + 'a, F>(self, f: F) -> Rebound<ReferenceStorage<&'a mut T>, U>
        where F: FnOnce(&'a mut T) -> &'a mut U
    {
        BasicOptional::from_option(self.into_option().map(f))
    }
}

impl<'a, T: ?Sized> BasicOptional<ReferenceStorage<&'a T>> {
    /// Rebinds to the target of `other`, or unbinds if `other` is empty.
    #[inline]
    pub fn rebind_from(&mut self, other: OptionalRef<'a, T>) {
        self.storage.create_value_from(other.storage)
    }

    /// Narrows the binding to a part of the target.
    pub fn project<U: ?Sized + 'a, F>(self, f: F) -> Rebound<ReferenceStorage<&'a T>, U>
        where F: FnOnce(&'a T) -> &'a U
    {
        BasicOptional::from_option(self.into_option().map(f))
    }
}

impl<R: Reference> From<Option<R>> for BasicOptional<ReferenceStorage<R>> {
    #[inline]
    fn from(target: Option<R>) -> Self {
        Self::from_option(target)
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for BasicOptional<ReferenceStorage<&'a mut T>> {
    #[inline]
    fn from(target: &'a mut T) -> Self {
        Self::from_value(target)
    }
}

impl<'a, T: ?Sized> From<&'a T> for BasicOptional<ReferenceStorage<&'a T>> {
    #[inline]
    fn from(target: &'a T) -> Self {
        Self::from_value(target)
    }
}

impl<'a, T: ?Sized> From<OptionalRef<'a, T>> for OptionalCref<'a, T> {
    #[inline]
    fn from(other: OptionalRef<'a, T>) -> Self {
        Self { storage: other.storage.into() }
    }
}

assert_eq_size!(OptionalRef<'static, u8>, *mut u8);
assert_eq_size!(OptionalCref<'static, str>, &'static str);

assert_impl_all!(OptionalCref<'static, u8>: Copy, From<&'static u8>, From<OptionalRef<'static, u8>>);
assert_impl_all!(OptionalRef<'static, u8>: From<&'static mut u8>, Send, Sync);

assert_not_impl_any!(OptionalRef<'static, u8>: Clone, From<u8>, From<OptionalCref<'static, u8>>);
assert_not_impl_any!(OptionalCref<'static, u8>: From<u8>);
