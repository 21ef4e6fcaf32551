use alloc::vec::Vec;

use crate::validation::Validation;

/// Aggregation helpers for iterators of `Result`.
///
/// Each adapter consumes its input once, front to back, so side effects in
/// the upstream iterator happen in input order.
///
/// # Examples
///
/// ```
/// use value_rail::ResultIterExt;
///
/// let all: Result<Vec<i32>, &str> = vec![Ok(1), Ok(2)].into_iter().collect_ok();
/// assert_eq!(all, Ok(vec![1, 2]));
///
/// let first_error = vec![Ok(1), Err("x"), Err("y")].into_iter().collect_ok();
/// assert_eq!(first_error, Err("x"));
/// ```
pub trait ResultIterExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Splits into successes and failures, each in input order.
    fn partition_results(self) -> (Vec<T>, Vec<E>) {
        let mut oks = Vec::new();
        let mut errs = Vec::new();
        for item in self {
            match item {
                Ok(value) => oks.push(value),
                Err(error) => errs.push(error),
            }
        }
        (oks, errs)
    }

    /// All successes, or the first error in iteration order.
    ///
    /// Iteration stops at the first error; later elements are never pulled.
    fn collect_ok(self) -> Result<Vec<T>, E> {
        self.collect()
    }

    /// Successes only, lazily.
    fn oks(self) -> impl Iterator<Item = T> {
        self.filter_map(Result::ok)
    }

    /// Errors only, lazily.
    fn errs(self) -> impl Iterator<Item = E> {
        self.filter_map(Result::err)
    }

    /// All successes, or every error in input order.
    fn collect_validation(self) -> Validation<E, Vec<T>> {
        self.collect()
    }
}

impl<I, T, E> ResultIterExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}

/// Aggregation helpers for iterators of `Option`.
///
/// # Examples
///
/// ```
/// use value_rail::OptionIterExt;
///
/// assert_eq!(vec![Some(1), Some(2)].into_iter().collect_some(), Some(vec![1, 2]));
/// assert_eq!(vec![Some(1), None].into_iter().collect_some(), None);
/// assert_eq!(vec![Some(1), None, None].into_iter().count_none(), 2);
/// ```
pub trait OptionIterExt<T>: Iterator<Item = Option<T>> + Sized {
    /// Every value, or `None` as soon as one element is absent.
    fn collect_some(self) -> Option<Vec<T>> {
        self.collect()
    }

    /// Present values only, lazily.
    fn somes(self) -> impl Iterator<Item = T> {
        self.flatten()
    }

    /// Number of absent elements.
    fn count_none(self) -> usize {
        self.filter(Option::is_none).count()
    }
}

impl<I, T> OptionIterExt<T> for I where I: Iterator<Item = Option<T>> {}
