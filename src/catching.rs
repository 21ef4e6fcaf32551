//! The bridge from panics into the `Result` algebra.
//!
//! This is the only place in the crate that catches a panic. Everything else
//! either returns a value or, for the `unwrap`/`expect` family, panics on
//! purpose.
//!
//! The panic hook still runs before the panic is caught, so the default hook
//! prints the message to stderr as usual.
//!
//! # Examples
//!
//! ```
//! use value_rail::catching;
//!
//! let fine = catching(|| 2 + 2);
//! assert_eq!(fine, Ok(4));
//!
//! let fault = catching(|| None::<i32>.unwrap()).unwrap_err();
//! assert!(fault.message().contains("None"));
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::types::Fault;

/// Runs `f`, turning a panic into `Err(Fault)`.
///
/// `f` is run under [`AssertUnwindSafe`]: state `f` touched through shared
/// references may be left half-updated if it panicked, and callers that keep
/// using such state after an `Err` are responsible for its consistency.
pub fn catching<T, F>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| Fault::from_payload(&*payload))
}

/// Runs a fallible `f`, folding a panic into its own error channel.
///
/// # Examples
///
/// ```
/// use value_rail::{catching_into, Fault};
///
/// #[derive(Debug, PartialEq)]
/// enum LoadError {
///     Missing,
///     Crashed(String),
/// }
///
/// impl From<Fault> for LoadError {
///     fn from(fault: Fault) -> Self {
///         LoadError::Crashed(fault.into_message())
///     }
/// }
///
/// let missing: Result<(), LoadError> = catching_into(|| Err(LoadError::Missing));
/// assert_eq!(missing, Err(LoadError::Missing));
///
/// let crashed: Result<(), LoadError> = catching_into(|| -> Result<(), LoadError> { panic!("boom") });
/// assert_eq!(crashed, Err(LoadError::Crashed("boom".to_string())));
/// ```
pub fn catching_into<T, E, F>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<Fault>,
{
    catching(f).unwrap_or_else(|fault| Err(E::from(fault)))
}
