use thiserror::Error;

/// Returned when the value of an empty optional is requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("access of an empty optional")]
pub struct BadOptionalAccess;

/// Panics with the `BadOptionalAccess` message.
#[cold]
#[track_caller]
pub(crate) fn bad_access() -> ! {
    panic!("{}", BadOptionalAccess)
}
