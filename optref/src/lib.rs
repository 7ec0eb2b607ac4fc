//! Optionals with pluggable storage, and optional references.
//!
//! [`BasicOptional<S>`] is an optional whose storage is decided by a [`StoragePolicy`]. Two
//! policies are provided:
//!
//! * [`DirectStorage<T>`] owns a `T`, giving [`Optional<T>`].
//! * [`ReferenceStorage<R>`] stores a reference to an object owned elsewhere, giving
//!   [`OptionalRef<'a, T>`] for `&'a mut T` and [`OptionalCref<'a, T>`] for `&'a T`.
//!
//! An optional reference is a nullable alias. It never owns, drops or outlives its target, and
//! assigning to it rebinds rather than writes through:
//!
//! ```
//! use optref::{copy, take, OptionalRef};
//!
//! let mut a = String::from("a");
//! let mut b = String::from("b");
//!
//! let mut r = OptionalRef::new();
//! r.emplace(&mut a);
//! r.emplace(&mut b);
//! r.value_mut().push('!');
//!
//! assert_eq!(copy(&r).value(), "b!");
//! assert_eq!(take(&mut r).value(), "b!");
//!
//! r.reset();
//! assert!(!r.has_value());
//!
//! assert_eq!(a, "a");
//! assert_eq!(b, "");
//! ```

pub mod errors;
pub mod storage;
pub mod optional;
pub mod direct;
pub mod reference;
pub mod convert;

pub use self::errors::BadOptionalAccess;
pub use self::storage::{Rebind, Rebound, StoragePolicy};
pub use self::optional::BasicOptional;
pub use self::direct::{DirectStorage, Optional};
pub use self::reference::{OptionalCref, OptionalRef, Reference, ReferenceStorage};
pub use self::convert::{copy, cref, cref_from_ptr, is_bound_to, ref_from_ptr, ref_mut, replace, take};
