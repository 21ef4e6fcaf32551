//! Validation types and utilities for accumulating errors.
//!
//! This module provides the [`Validation`] type, which can accumulate multiple
//! errors while preserving success values, and rule checking through
//! [`validate_all`] and the [`Validate`] trait.
//!
//! Every other combinator in this crate short-circuits on the first failure.
//! Validation does not: it reports every broken rule at once.
//!
//! # Key Components
//!
//! - [`Validation`] - Core type that represents either a valid value or accumulated errors
//! - [`Errors`] - the error list of an invalid validation, never empty
//! - [`Validate`] - `validate`, `validate_with` and `validate_all` on any value
//! - [`Rule`] - a single check usable with `validate_all`
//! - Iterator adapters for traversing the value and the errors
//!
//! # Examples
//!
//! ```
//! use value_rail::validation::Validation;
//!
//! let valid: Validation<String, i32> = Validation::Valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many("err1", ["err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod errors;
pub mod iter;
pub mod rules;

pub use self::core::*;
pub use self::errors::Errors;
pub use self::iter::*;
pub use self::rules::*;

use crate::traits::WithError;
use crate::types::ErrorVec;

/// Implementation of `WithError` for `Validation` types.
///
/// `fmap_error` maps every accumulated error; `to_result` keeps only the
/// first one.
///
/// # Examples
///
/// ```
/// use value_rail::traits::WithError;
/// use value_rail::validation::Validation;
///
/// let validation: Validation<&str, i32> = Validation::invalid_many("err1", ["err2"]);
/// let mapped = validation.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped.iter_errors().count(), 2);
///
/// let first = WithError::to_result(mapped);
/// assert_eq!(first, Err("Error: err1".to_string()));
/// ```
impl<T, E> WithError<E> for Validation<E, T> {
    type Success = T;
    type ErrorOutput<G> = Validation<G, T>;

    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        self.map_err(f)
    }

    fn to_result(self) -> Result<Self::Success, E> {
        crate::convert::validation_to_result(self)
    }
}

impl<E, A> From<Validation<E, A>> for Result<A, ErrorVec<E>> {
    #[inline]
    fn from(validation: Validation<E, A>) -> Self {
        validation.to_result()
    }
}
