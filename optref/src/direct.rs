//! Owning storage.

use crate::errors::bad_access;
use crate::optional::BasicOptional;
use crate::storage::{Rebind, StoragePolicy};

/// A `StoragePolicy` that owns its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectStorage<T> {
    value: Option<T>,
}

impl<T> Default for DirectStorage<T> {
    #[inline]
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> StoragePolicy for DirectStorage<T> {
    type Value = T;
    type Target = T;
    type Mut<'s> = &'s mut T
        where Self: 's;

    /// Stores `value`, dropping the previous one.
    #[inline]
    fn create_value(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Drops the value.
    #[inline]
    fn destroy_value(&mut self) {
        self.value = None;
    }

    #[inline]
    fn has_value(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    #[track_caller]
    fn get_value(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => bad_access(),
        }
    }

    #[inline]
    #[track_caller]
    fn get_value_mut(&mut self) -> Self::Mut<'_> {
        match &mut self.value {
            Some(value) => value,
            None => bad_access(),
        }
    }
}

impl<T, U> Rebind<U> for DirectStorage<T> {
    type Output = DirectStorage<U>;
}

/// An optional that owns its value.
pub type Optional<T> = BasicOptional<DirectStorage<T>>;

impl<T> BasicOptional<DirectStorage<T>> {
    /// Moves the value out, leaving the optional empty.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        self.storage.value.take()
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.storage.value
    }

    /// Maps the value, if any, by value.
    pub fn map_into<U, F>(self, f: F) -> crate::storage::Rebound<DirectStorage<T>, U>
        where F: FnOnce(T) -> U
    {
        BasicOptional::from_option(self.into_option().map(f))
    }
}

impl<T> From<T> for BasicOptional<DirectStorage<T>> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}
