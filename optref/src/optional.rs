//! The generic optional container.

use core::cmp;
use core::fmt;
use core::hash;

use crate::direct::Optional;
use crate::errors::{bad_access, BadOptionalAccess};
use crate::storage::StoragePolicy;

/// An optional whose storage is controlled by the policy `S`.
///
/// `BasicOptional` itself is stateless: it owns exactly one `S`, and every operation is forwarded
/// to it.
#[derive(Clone, Copy, Default)]
pub struct BasicOptional<S> {
    pub(crate) storage: S,
}

impl<S: StoragePolicy> BasicOptional<S> {
    /// Creates an empty optional.
    #[inline]
    pub fn new() -> Self {
        Self { storage: S::default() }
    }

    /// Creates an optional holding `value`.
    #[inline]
    pub fn from_value(value: S::Value) -> Self {
        let mut this = Self::new();
        this.storage.create_value(value);
        this
    }

    /// Creates an optional from an `Option`, empty if `value` is `None`.
    #[inline]
    pub fn from_option(value: Option<S::Value>) -> Self {
        let mut this = Self::new();
        this.assign(value);
        this
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.storage.has_value()
    }

    /// Gets the target.
    ///
    /// # Panics
    ///
    /// Panics if the optional is empty; use `try_value()` or `value_or()` to avoid that.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &S::Target {
        if !self.has_value() {
            bad_access()
        }
        self.storage.get_value()
    }

    /// Gets mutable access to the target.
    ///
    /// # Panics
    ///
    /// Panics if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> S::Mut<'_> {
        if !self.has_value() {
            bad_access()
        }
        self.storage.get_value_mut()
    }

    pub fn try_value(&self) -> Result<&S::Target, BadOptionalAccess> {
        self.as_option().ok_or(BadOptionalAccess)
    }

    pub fn try_value_mut(&mut self) -> Result<S::Mut<'_>, BadOptionalAccess> {
        self.as_option_mut().ok_or(BadOptionalAccess)
    }

    /// Gets the target, or `other` if the optional is empty.
    #[inline]
    pub fn value_or<'s>(&'s self, other: &'s S::Target) -> &'s S::Target {
        self.storage.get_value_or(other)
    }

    /// Gets mutable access to the target, or `other` if the optional is empty.
    #[inline]
    pub fn value_or_mut<'s>(&'s mut self, other: S::Mut<'s>) -> S::Mut<'s> {
        self.storage.get_value_or_mut(other)
    }

    /// Replaces the contents with `value`.
    ///
    /// For reference policies this changes what is referred to; the previous target is left
    /// untouched.
    #[inline]
    pub fn emplace(&mut self, value: S::Value) {
        self.storage.destroy_value();
        self.storage.create_value(value);
    }

    /// Emplaces `value`, or resets the optional if it is `None`.
    #[inline]
    pub fn assign(&mut self, value: Option<S::Value>) {
        match value {
            Some(value) => self.emplace(value),
            None => self.reset(),
        }
    }

    /// Makes the optional empty.
    #[inline]
    pub fn reset(&mut self) {
        self.storage.destroy_value()
    }

    #[inline]
    pub fn as_option(&self) -> Option<&S::Target> {
        if self.has_value() {
            Some(self.storage.get_value())
        } else {
            None
        }
    }

    #[inline]
    pub fn as_option_mut(&mut self) -> Option<S::Mut<'_>> {
        if self.has_value() {
            Some(self.storage.get_value_mut())
        } else {
            None
        }
    }

    /// Maps the target, if any, to a new owned value.
    pub fn map<U, F>(&self, f: F) -> Optional<U>
        where F: FnOnce(&S::Target) -> U
    {
        Optional::from_option(self.as_option().map(f))
    }

    /// Gets the underlying storage policy.
    #[inline(always)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: StoragePolicy> fmt::Debug for BasicOptional<S>
where S::Target: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_option(), f)
    }
}

impl<S: StoragePolicy, S2: StoragePolicy> cmp::PartialEq<BasicOptional<S2>> for BasicOptional<S>
where S::Target: cmp::PartialEq<S2::Target>
{
    fn eq(&self, other: &BasicOptional<S2>) -> bool {
        match (self.as_option(), other.as_option()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<S: StoragePolicy> cmp::Eq for BasicOptional<S>
where S::Target: cmp::Eq
{}

impl<S: StoragePolicy, S2: StoragePolicy> cmp::PartialOrd<BasicOptional<S2>> for BasicOptional<S>
where S::Target: cmp::PartialOrd<S2::Target>
{
    fn partial_cmp(&self, other: &BasicOptional<S2>) -> Option<cmp::Ordering> {
        match (self.as_option(), other.as_option()) {
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(rhs),
            (Some(_), None) => Some(cmp::Ordering::Greater),
            (None, Some(_)) => Some(cmp::Ordering::Less),
            (None, None) => Some(cmp::Ordering::Equal),
        }
    }
}

impl<S: StoragePolicy> cmp::Ord for BasicOptional<S>
where S::Target: cmp::Ord
{
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_option().cmp(&other.as_option())
    }
}

impl<S: StoragePolicy> hash::Hash for BasicOptional<S>
where S::Target: hash::Hash
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.as_option(), state)
    }
}
