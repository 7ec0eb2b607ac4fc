//! Conversions between pointers, optional references, and owning optionals.

use core::mem;

use crate::direct::Optional;
use crate::optional::BasicOptional;
use crate::reference::{OptionalCref, OptionalRef, Reference, ReferenceStorage};

/// Creates an [`OptionalRef`] to the target of `ptr`, empty if `ptr` is `None`.
///
/// ```
/// use optref::ref_mut;
///
/// let mut n = 1;
/// let mut r = ref_mut(Some(&mut n));
/// *r.value_mut() += 1;
/// assert_eq!(n, 2);
/// ```
#[inline]
pub fn ref_mut<T: ?Sized>(ptr: Option<&mut T>) -> OptionalRef<'_, T> {
    OptionalRef::from_option(ptr)
}

/// Creates an [`OptionalCref`] to the target of `ptr`, empty if `ptr` is `None`.
///
/// Use this to hand out a view of an object that must not be modified through the handle.
#[inline]
pub fn cref<T: ?Sized>(ptr: Option<&T>) -> OptionalCref<'_, T> {
    OptionalCref::from_option(ptr)
}

/// Creates an [`OptionalRef`] from a raw pointer, empty if `ptr` is null.
///
/// # Safety
///
/// If non-null, `ptr` must be valid for reads and writes, and the pointee must not be accessed
/// other than through the returned reference for `'a`.
#[inline]
pub unsafe fn ref_from_ptr<'a, T: ?Sized>(ptr: *mut T) -> OptionalRef<'a, T> {
    ref_mut(ptr.as_mut())
}

/// Creates an [`OptionalCref`] from a raw pointer, empty if `ptr` is null.
///
/// # Safety
///
/// If non-null, `ptr` must be valid for reads, and the pointee must not be mutated for `'a`.
#[inline]
pub unsafe fn cref_from_ptr<'a, T: ?Sized>(ptr: *const T) -> OptionalCref<'a, T> {
    cref(ptr.as_ref())
}

/// Copies the target of `r`, if any, into a new owning optional.
///
/// Works with both kinds of optional reference. Unsized targets are copied into their owned
/// form:
///
/// ```
/// use optref::{copy, OptionalCref};
///
/// let r: OptionalCref<str> = OptionalCref::from("hello");
/// assert_eq!(copy(&r).value(), "hello");
/// ```
pub fn copy<R>(r: &BasicOptional<ReferenceStorage<R>>) -> Optional<<R::Target as ToOwned>::Owned>
    where R: Reference,
          R::Target: ToOwned,
{
    r.map(<R::Target as ToOwned>::to_owned)
}

/// Moves the target of `r`, if any, into a new owning optional.
///
/// The target is left holding `T::default()`. `r` stays bound to it.
///
/// Only read-write references can be moved out of:
///
/// ```compile_fail
/// use optref::{cref, take};
///
/// let s = String::from("hello");
/// let mut r = cref(Some(&s));
/// take(&mut r);
/// ```
pub fn take<T: Default>(r: &mut OptionalRef<'_, T>) -> Optional<T> {
    Optional::from_option(r.as_option_mut().map(mem::take))
}

/// Moves the target of `r`, if any, into a new owning optional, putting `value` in its place.
///
/// If `r` is empty, `value` is dropped.
pub fn replace<T>(r: &mut OptionalRef<'_, T>, value: T) -> Optional<T> {
    Optional::from_option(r.as_option_mut().map(|target| mem::replace(target, value)))
}

/// Returns `true` if `r` is bound to exactly `target`.
///
/// Compares addresses rather than values; see `PartialEq` for the latter.
pub fn is_bound_to<R: Reference>(r: &BasicOptional<ReferenceStorage<R>>, target: *const R::Target) -> bool {
    match r.as_option() {
        Some(bound) => core::ptr::eq(bound, target),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::ptr;

    /// Records how it was created.
    #[derive(Debug, Default, PartialEq)]
    struct Tracked<'a> {
        id: u32,
        clones: Option<&'a Cell<usize>>,
    }

    impl Clone for Tracked<'_> {
        fn clone(&self) -> Self {
            if let Some(clones) = self.clones {
                clones.set(clones.get() + 1);
            }
            Self { id: self.id, clones: self.clones }
        }
    }

    #[test]
    fn ref_mut_and_cref() {
        let mut value = 0u8;
        let p: *const u8 = &value;

        let a = ref_mut::<u8>(None);
        assert!(!a.has_value());

        let b = ref_mut(Some(&mut value));
        assert!(b.has_value());
        assert!(is_bound_to(&b, p));
        drop(b);

        let c = cref::<u8>(None);
        assert!(!c.has_value());

        let d = cref(Some(&value));
        assert!(d.has_value());
        assert!(ptr::eq(d.value(), p));
        assert!(!is_bound_to(&c, p));
    }

    #[test]
    fn from_raw_pointers() {
        let mut value = 3u8;
        let p: *mut u8 = &mut value;

        let a = unsafe { ref_from_ptr::<u8>(ptr::null_mut()) };
        assert!(!a.has_value());

        let mut b = unsafe { ref_from_ptr(p) };
        *b.value_mut() = 4;
        assert!(is_bound_to(&b, p));

        let c = unsafe { cref_from_ptr::<u8>(ptr::null()) };
        assert!(!c.has_value());

        let d = unsafe { cref_from_ptr(p as *const u8) };
        assert_eq!(d.value(), &4);
    }

    #[test]
    fn copy_empty() {
        let a: OptionalRef<Tracked> = OptionalRef::new();
        let a_res: Optional<Tracked> = copy(&a);
        assert!(!a_res.has_value());

        let c: OptionalCref<Tracked> = OptionalCref::new();
        assert!(!copy(&c).has_value());
    }

    #[test]
    fn copy_bound() {
        let clones = Cell::new(0);
        let mut dbg = Tracked { id: 0, clones: Some(&clones) };
        let p: *const Tracked = &dbg;

        let b = OptionalRef::from(&mut dbg);
        let b_res: Optional<Tracked> = copy(&b);
        assert!(b_res.has_value());
        assert_eq!(b_res.value().id, 0);
        assert!(!ptr::eq(b_res.value(), p));
        assert_eq!(clones.get(), 1);

        // still bound to dbg
        assert!(is_bound_to(&b, p));

        let c = OptionalCref::from(&*b.value());
        assert_eq!(copy(&c).value().id, 0);
        assert_eq!(clones.get(), 2);
    }

    #[test]
    fn copy_unsized() {
        let v = [1u8, 2];
        let r: OptionalCref<[u8]> = cref(Some(&v[..]));
        let owned: Optional<Vec<u8>> = copy(&r);
        assert_eq!(owned.value(), &[1, 2]);
    }

    #[test]
    fn take_empty() {
        let mut a: OptionalRef<Tracked> = OptionalRef::new();
        assert!(!take(&mut a).has_value());
    }

    #[test]
    fn take_bound() {
        let clones = Cell::new(0);
        let mut dbg = Tracked { id: 7, clones: Some(&clones) };
        let p: *const Tracked = &dbg;

        let mut b = OptionalRef::from(&mut dbg);
        let b_res: Optional<Tracked> = take(&mut b);
        assert!(b_res.has_value());
        assert_eq!(b_res.value().id, 7);
        assert_eq!(clones.get(), 0);

        // bound to the moved-from object
        assert!(is_bound_to(&b, p));
        assert_eq!(b.value(), &Tracked::default());
    }

    #[test]
    fn replace_bound_and_empty() {
        let mut s = String::from("old");

        let mut r = OptionalRef::from(&mut s);
        assert_eq!(replace(&mut r, String::from("new")).value(), "old");
        drop(r);
        assert_eq!(s, "new");

        let mut empty: OptionalRef<String> = OptionalRef::new();
        assert!(!replace(&mut empty, String::from("dropped")).has_value());
    }
}
