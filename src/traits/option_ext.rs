//! Extension trait filling in the `Option` combinators `core` leaves out.
//!
//! Everything else the optional-value algebra needs (`map`, `map_or`,
//! `map_or_else`, `and_then`, `filter`, `or`, `or_else`, `and`, `xor`, `zip`,
//! `unwrap*`, `expect`, `is_some_and`, `is_none_or`, `flatten`, `ok_or`,
//! `ok_or_else`, `transpose`) is already inherent on [`Option`].

use crate::types::Absent;

/// Additional combinators on [`Option`].
///
/// All methods are total: none of them panics, and closures for the branch
/// that is not taken are never invoked.
///
/// # Examples
///
/// ```
/// use value_rail::OptionExt;
///
/// let greeting = Some("Ada").match_with(|name| format!("hi {name}"), || "nobody".to_string());
/// assert_eq!(greeting, "hi Ada");
///
/// let sum = Some(2).zip_with(Some(40), |a, b| a + b);
/// assert_eq!(sum, Some(42));
/// ```
pub trait OptionExt<T> {
    /// Combines two present values with `f`; `None` if either side is absent.
    ///
    /// `f` only runs when both sides are `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::OptionExt;
    ///
    /// assert_eq!(Some(2).zip_with(Some(3), |a, b| a * b), Some(6));
    /// assert_eq!(None::<i32>.zip_with(Some(3), |a, b| a * b), None);
    /// ```
    fn zip_with<U, R, F>(self, other: Option<U>, f: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R;

    /// Exhaustive case split: runs `on_some` with the value or `on_none`,
    /// returning whatever the branch that ran returns.
    ///
    /// With `R = ()` this is the side-effecting form.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::OptionExt;
    ///
    /// let len = None::<&str>.match_with(|s| s.len(), || 0);
    /// assert_eq!(len, 0);
    /// ```
    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R;

    /// Runs `f` when the option is `None`, returning the option unchanged.
    ///
    /// Mirror image of [`Option::inspect`].
    fn inspect_none<F>(self, f: F) -> Self
    where
        F: FnOnce();

    /// Converts into a `Result` whose error carries no information.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::{Absent, OptionExt};
    ///
    /// assert_eq!(Some(1).into_result(), Ok(1));
    /// assert_eq!(None::<i32>.into_result(), Err(Absent));
    /// ```
    fn into_result(self) -> Result<T, Absent>;

    /// Returns `true` if the option holds a value equal to `value`.
    fn contains_value<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn zip_with<U, R, F>(self, other: Option<U>, f: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(f(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn inspect_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }

    #[inline]
    fn into_result(self) -> Result<T, Absent> {
        self.ok_or(Absent)
    }

    #[inline]
    fn contains_value<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        matches!(self, Some(inner) if inner == value)
    }
}
