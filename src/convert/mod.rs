//! Conversion helpers between `Option`, `Result` and `Validation`.
//!
//! `Option<T>` and `Result<T, Absent>` carry exactly the same information;
//! [`option_to_result`] and [`result_to_option`] witness that isomorphism
//! in both directions. Swapping the nesting of `Option` and `Result` is
//! `Option::transpose` / `Result::transpose` from `core`, which are mutual
//! inverses.
//!
//! # Examples
//!
//! ```
//! use value_rail::convert::*;
//! use value_rail::validation::Validation;
//!
//! // Convert between Result and Validation
//! let result: Result<i32, &str> = Ok(42);
//! let validation = result_to_validation(result);
//! assert!(validation.is_valid());
//!
//! // Option and Result<_, Absent> round-trip
//! assert_eq!(result_to_option(option_to_result(Some(3))), Some(3));
//! ```

use crate::types::{Absent, ErrorVec};
use crate::validation::core::Validation;
use crate::validation::errors::Errors;
use core::iter::FusedIterator;

/// Converts an `Option` into a `Result` with an information-free error.
///
/// # Examples
///
/// ```
/// use value_rail::{Absent, convert::option_to_result};
///
/// assert_eq!(option_to_result(Some(1)), Ok(1));
/// assert_eq!(option_to_result(None::<i32>), Err(Absent));
/// ```
#[inline]
pub fn option_to_result<T>(option: Option<T>) -> Result<T, Absent> {
    option.ok_or(Absent)
}

/// Converts a `Result` with an information-free error back into an `Option`.
#[inline]
pub fn result_to_option<T>(result: Result<T, Absent>) -> Option<T> {
    result.ok()
}

/// Converts a `Validation` to a `Result`, taking the first error if invalid.
///
/// # Arguments
///
/// * `validation` - The validation to convert
///
/// # Returns
///
/// * `Ok(value)` if validation is valid
/// * `Err(first_error)` if validation is invalid
///
/// # Examples
///
/// ```
/// use value_rail::convert::validation_to_result;
/// use value_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::Valid(42);
/// assert_eq!(validation_to_result(valid), Ok(42));
///
/// let invalid = Validation::<&str, i32>::invalid_many("first", ["second"]);
/// assert_eq!(validation_to_result(invalid), Err("first"));
/// ```
#[inline]
pub fn validation_to_result<T, E>(validation: Validation<E, T>) -> Result<T, E> {
    match validation {
        Validation::Valid(value) => Ok(value),
        Validation::Invalid(errors) => Err(errors.into_first()),
    }
}

/// Converts a `Result` to a `Validation`.
///
/// # Returns
///
/// * `Validation::Valid(value)` if result is `Ok`
/// * `Validation::Invalid([error])` if result is `Err`
///
/// # Examples
///
/// ```
/// use value_rail::convert::result_to_validation;
///
/// let err_result: Result<i32, &str> = Err("failed");
/// let validation = result_to_validation(err_result);
/// assert!(validation.is_invalid());
/// ```
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> Validation<E, T> {
    Validation::from_result(result)
}

/// Collects multiple errors into a single `Validation`.
///
/// # Returns
///
/// * `Validation::Valid(())` if no errors
/// * `Validation::Invalid(errors)` if any errors present
///
/// # Examples
///
/// ```
/// use value_rail::convert::collect_errors;
///
/// let validation = collect_errors(vec!["error1", "error2"]);
/// assert!(validation.is_invalid());
///
/// let no_errors: Vec<&str> = vec![];
/// assert!(collect_errors(no_errors).is_valid());
/// ```
#[inline]
pub fn collect_errors<E, I>(errors: I) -> Validation<E, ()>
where
    I: IntoIterator<Item = E>,
{
    let error_vec: ErrorVec<E> = errors.into_iter().collect();
    Validation::from_errors((), error_vec)
}

/// Iterator returned by [`split_validation_errors`].
pub enum SplitValidationIter<T, E> {
    Valid(Option<T>),
    Invalid(<Errors<E> as IntoIterator>::IntoIter),
}

impl<T, E> Iterator for SplitValidationIter<T, E> {
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Valid(opt) => opt.take().map(Ok),
            Self::Invalid(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Valid(opt) => {
                let len = usize::from(opt.is_some());
                (len, Some(len))
            },
            Self::Invalid(iter) => iter.size_hint(),
        }
    }
}

impl<T, E> ExactSizeIterator for SplitValidationIter<T, E> {}
impl<T, E> FusedIterator for SplitValidationIter<T, E> {}

/// Splits a `Validation` into individual `Result` values.
///
/// # Returns
///
/// An iterator that yields:
/// * `Ok(value)` if validation is valid
/// * `Err(e)` for each error if validation is invalid
///
/// # Examples
///
/// ```
/// use value_rail::convert::split_validation_errors;
/// use value_rail::validation::Validation;
///
/// let invalid = Validation::<&str, i32>::invalid_many("err1", vec!["err2"]);
/// let results: Vec<_> = split_validation_errors(invalid).collect();
/// assert_eq!(results, vec![Err("err1"), Err("err2")]);
/// ```
pub fn split_validation_errors<T, E>(validation: Validation<E, T>) -> SplitValidationIter<T, E> {
    match validation {
        Validation::Valid(value) => SplitValidationIter::Valid(Some(value)),
        Validation::Invalid(errors) => SplitValidationIter::Invalid(errors.into_iter()),
    }
}
