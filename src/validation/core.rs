use crate::types::ErrorVec;
use crate::validation::errors::Errors;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Applicative-style validation that accumulates many errors instead of failing fast.
///
/// `Validation<E, A>` represents a check that either succeeds with a value of type `A`
/// or fails with one or more errors of type `E`. Unlike `Result`, whose `and_then` stops
/// at the first error, `Validation` keeps every error reported by the checks it combines,
/// in the order they were reported.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when `E` and `A` do.
/// An `Invalid` payload with an empty error list is rejected on input.
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `A` - The success value type
///
/// # Variants
///
/// * `Valid(A)` - Contains a successful value
/// * `Invalid(Errors<E>)` - Contains one or more errors
///
/// # Examples
///
/// ```
/// use value_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(Errors<E>),
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("missing field");
    /// assert!(v.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(Errors::new(error))
    }

    /// Creates an invalid value from a first error followed by any number of
    /// further errors.
    ///
    /// When the error list may turn out empty, use
    /// [`Validation::from_errors`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many("missing", ["invalid"]);
    /// assert!(v.is_invalid());
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn invalid_many<I>(first: E, rest: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut errors = Errors::new(first);
        errors.extend(rest);
        Self::Invalid(errors)
    }

    /// Builds `Valid(value)` when `errors` is empty, `Invalid(errors)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::{ErrorVec, validation::Validation};
    ///
    /// let none: ErrorVec<&str> = ErrorVec::new();
    /// assert_eq!(Validation::from_errors(5, none).into_value(), Some(5));
    /// ```
    #[inline]
    pub fn from_errors(value: A, errors: ErrorVec<E>) -> Self {
        match Errors::from_vec(errors) {
            Some(errors) => Self::Invalid(errors),
            None => Self::Valid(value),
        }
    }

    /// Returns `true` if the validation contains a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the validation contains errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(21);
    /// let doubled = v.map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Chains computations that may produce additional validation errors.
    ///
    /// Behaves like [`Result::and_then`], propagating invalid states while
    /// invoking `f` only when the current validation is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// fn parse_even(input: i32) -> Validation<&'static str, i32> {
    ///     if input % 2 == 0 {
    ///         Validation::valid(input)
    ///     } else {
    ///         Validation::invalid("not even")
    ///     }
    /// }
    ///
    /// let result = Validation::valid(4).and_then(parse_even);
    /// assert_eq!(result.into_value(), Some(4));
    ///
    /// let invalid = Validation::valid(3).and_then(parse_even);
    /// assert!(invalid.is_invalid());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Calls `op` if the validation is invalid, otherwise returns the `Valid` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let res = v.or_else(|_errs| Validation::valid(42));
    /// assert_eq!(res.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validation<E, A>
    where
        F: FnOnce(ErrorVec<E>) -> Validation<E, A>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => op(errors.into_vec()),
        }
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// If both validations are valid, returns a tuple of both values.
    /// If either or both are invalid, the errors of `self` come first,
    /// followed by the errors of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v1 = Validation::<&str, i32>::valid(42);
    /// let v2 = Validation::<&str, i32>::valid(21);
    /// assert_eq!(v1.zip(v2).into_value(), Some((42, 21)));
    ///
    /// let v3 = Validation::<&str, i32>::invalid("error1");
    /// let v4 = Validation::<&str, i32>::invalid("error2");
    /// assert_eq!(v3.zip(v4).into_errors().unwrap().as_slice(), ["error1", "error2"]);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.extend(e2);
                Validation::Invalid(e1)
            },
        }
    }

    /// Maps each error while preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let mapped = v.map_err(|e| format!("Error: {}", e));
    /// assert!(mapped.is_invalid());
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Validation<G, A>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.map(f)),
        }
    }

    /// Converts into a `Result` that keeps every accumulated error.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.to_result(), Ok(42));
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// assert!(v.to_result().is_err());
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors.into_vec()),
        }
    }

    /// Wraps a normal `Result` into a `Validation`, turning the error side into a singleton vec.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// let v = Validation::from_result(result);
    /// assert!(v.is_valid());
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the error list, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors.into_vec()),
        }
    }

    /// Extracts the value, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

/// Collects results, keeping every success on the happy path and every error otherwise.
///
/// # Examples
///
/// ```
/// use value_rail::validation::Validation;
///
/// let inputs = vec![Ok(1), Err("err1"), Ok(2), Err("err2")];
/// let collected: Validation<&str, Vec<i32>> = inputs.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().as_slice(), ["err1", "err2"]);
/// ```
impl<E, A, C> FromIterator<Result<A, E>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        let mut errors = ErrorVec::new();
        let values: C = iter
            .into_iter()
            .filter_map(|item| match item {
                Ok(value) => Some(value),
                Err(error) => {
                    errors.push(error);
                    None
                },
            })
            .collect();

        Validation::from_errors(values, errors)
    }
}

/// Collects validations, concatenating the error lists of every invalid item.
impl<E, A, C> FromIterator<Validation<E, A>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut errors = ErrorVec::new();
        let values: C = iter
            .into_iter()
            .filter_map(|item| match item {
                Validation::Valid(value) => Some(value),
                Validation::Invalid(errs) => {
                    errors.extend(errs);
                    None
                },
            })
            .collect();

        Validation::from_errors(values, errors)
    }
}
