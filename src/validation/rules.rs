use crate::types::ErrorVec;
use crate::validation::core::Validation;

/// A single validation rule: inspects the value and either accepts it or
/// reports one error.
pub type Rule<'a, T, E> = &'a dyn Fn(&T) -> Result<(), E>;

/// Runs every rule against `value`, in order, and collects the errors of
/// every rule that failed.
///
/// Unlike a chain of `and_then` calls, a failing rule does not stop the
/// rules after it. Each rule runs exactly once.
///
/// # Examples
///
/// ```
/// use value_rail::validation::validate_all;
///
/// let v1 = |_: &i32| -> Result<(), &str> { Err("a") };
/// let v2 = |_: &i32| -> Result<(), &str> { Ok(()) };
/// let v3 = |_: &i32| -> Result<(), &str> { Err("c") };
///
/// let errors = validate_all(10, &[&v1, &v2, &v3]).unwrap_err();
/// assert_eq!(errors.as_slice(), ["a", "c"]);
/// ```
pub fn validate_all<T, E>(value: T, rules: &[Rule<'_, T, E>]) -> Result<T, ErrorVec<E>> {
    check_all(value, rules).to_result()
}

/// Same as [`validate_all`], returning a [`Validation`].
pub fn check_all<T, E>(value: T, rules: &[Rule<'_, T, E>]) -> Validation<E, T> {
    let errors: ErrorVec<E> = rules.iter().filter_map(|rule| rule(&value).err()).collect();
    Validation::from_errors(value, errors)
}

/// Validation helpers available on every value.
///
/// # Examples
///
/// ```
/// use value_rail::validation::Validate;
///
/// let name = "ada".validate(|s| !s.is_empty(), "empty name");
/// assert_eq!(name, Ok("ada"));
///
/// let age = 12_u8.validate_with(|a| *a >= 18, || "must be an adult".to_string());
/// assert_eq!(age, Err("must be an adult".to_string()));
/// ```
pub trait Validate: Sized {
    /// `Ok(self)` if `pred` accepts the value, `Err(error)` otherwise.
    #[inline]
    fn validate<E, P>(self, pred: P, error: E) -> Result<Self, E>
    where
        P: FnOnce(&Self) -> bool,
    {
        if pred(&self) {
            Ok(self)
        } else {
            Err(error)
        }
    }

    /// Like [`validate`](Validate::validate), building the error only on rejection.
    #[inline]
    fn validate_with<E, P, F>(self, pred: P, factory: F) -> Result<Self, E>
    where
        P: FnOnce(&Self) -> bool,
        F: FnOnce() -> E,
    {
        if pred(&self) {
            Ok(self)
        } else {
            Err(factory())
        }
    }

    /// Method form of [`validate_all`]: every failing rule contributes its error.
    #[inline]
    fn validate_all<E>(self, rules: &[Rule<'_, Self, E>]) -> Result<Self, ErrorVec<E>> {
        validate_all(self, rules)
    }

    /// Method form of [`check_all`].
    #[inline]
    fn check_all<E>(self, rules: &[Rule<'_, Self, E>]) -> Validation<E, Self> {
        check_all(self, rules)
    }
}

impl<T> Validate for T {}
