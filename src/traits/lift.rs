use core::convert::Infallible;

use crate::types::Absent;

/// Lifts any value into a `Result` whose other channel is uninhabited.
///
/// The uninhabited side is [`Infallible`], so the resulting `Result` can be
/// widened with `map_err`/`map` and unwrapped through [`InfallibleExt`]
/// without a panic path.
///
/// # Examples
///
/// ```
/// use value_rail::{InfallibleExt, Lift};
///
/// let lifted = 7_i32.lift_ok();
/// assert_eq!(lifted.into_ok_value(), 7);
///
/// let widened: Result<i32, String> = 7_i32.lift_ok().map_err(|never| match never {});
/// assert_eq!(widened, Ok(7));
/// ```
pub trait Lift: Sized {
    /// Wraps `self` as the success value of an infallible `Result`.
    #[inline]
    fn lift_ok(self) -> Result<Self, Infallible> {
        Ok(self)
    }

    /// Wraps `self` as the error value of a `Result` that can never succeed.
    #[inline]
    fn lift_err(self) -> Result<Infallible, Self> {
        Err(self)
    }
}

impl<T> Lift for T {}

/// Extracts the success value from a `Result` that cannot fail.
pub trait InfallibleExt<T> {
    /// Returns the success value. Never panics.
    fn into_ok_value(self) -> T;
}

impl<T> InfallibleExt<T> for Result<T, Infallible> {
    #[inline]
    fn into_ok_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

/// Extracts the error value from a `Result` that cannot succeed.
pub trait InfallibleErrExt<E> {
    /// Returns the error value. Never panics.
    fn into_err_value(self) -> E;
}

impl<E> InfallibleErrExt<E> for Result<Infallible, E> {
    #[inline]
    fn into_err_value(self) -> E {
        match self {
            Ok(never) => match never {},
            Err(error) => error,
        }
    }
}

/// Converts a `Result` with an information-free error back into an `Option`.
///
/// Inverse of [`OptionExt::into_result`](crate::OptionExt::into_result).
pub trait AbsentExt<T> {
    /// `Ok(v)` becomes `Some(v)`, `Err(Absent)` becomes `None`.
    fn into_option(self) -> Option<T>;
}

impl<T> AbsentExt<T> for Result<T, Absent> {
    #[inline]
    fn into_option(self) -> Option<T> {
        self.ok()
    }
}
