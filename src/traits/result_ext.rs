//! Extension traits for `Result` combinators that `core` lacks or keeps unstable.
//!
//! This module provides [`ResultExt`], which adds filtering, LINQ-style
//! aliases, bimapping and an exhaustive case split, and [`FlattenResult`],
//! which collapses one level of nesting.
//!
//! As with `core`'s own combinators, the Ok-path closures never run on `Err`
//! and the Err-path closures never run on `Ok`. The error value travels
//! through untouched until something explicitly maps or matches it.
//!
//! # Examples
//!
//! ```
//! use value_rail::traits::{FlattenResult, ResultExt};
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string())
//! }
//!
//! let port = Ok::<&str, String>("8080")
//!     .select(parse_port)
//!     .flatten_result()
//!     .filter(|p| *p >= 1024, "privileged port".to_string());
//!
//! assert_eq!(port, Ok(8080));
//! ```

/// Additional combinators on [`Result`].
///
/// # Examples
///
/// ## Filtering
///
/// ```
/// use value_rail::ResultExt;
///
/// let adult = Ok::<u8, &str>(17).filter(|age| *age >= 18, "minor");
/// assert_eq!(adult, Err("minor"));
///
/// // Err passes through, the predicate is never consulted.
/// let passthrough = Err::<u8, &str>("missing").filter(|_| unreachable!(), "minor");
/// assert_eq!(passthrough, Err("missing"));
/// ```
///
/// ## Query-style composition
///
/// ```
/// use value_rail::ResultExt;
///
/// fn lookup_price(item: &&str) -> Result<u32, &'static str> {
///     match *item {
///         "apple" => Ok(3),
///         _ => Err("unknown item"),
///     }
/// }
///
/// let line = Ok::<&str, &str>("apple")
///     .select_many(lookup_price, |item, price| format!("{item}: {price}"));
/// assert_eq!(line, Ok("apple: 3".to_string()));
/// ```
pub trait ResultExt<T, E> {
    /// Alias of [`Result::map`].
    fn select<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U;

    /// Binds with `binder`, then combines the original value with the
    /// bound one through `projector`.
    ///
    /// Equivalent to `self.and_then(|t| binder(&t).map(|u| projector(t, u)))`.
    fn select_many<U, R, B, P>(self, binder: B, projector: P) -> Result<R, E>
    where
        B: FnOnce(&T) -> Result<U, E>,
        P: FnOnce(T, U) -> R;

    /// Exhaustive case split returning whatever the branch that ran returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::ResultExt;
    ///
    /// let code = Err::<(), u16>(404).match_with(|_| 200, |status| status);
    /// assert_eq!(code, 404);
    /// ```
    fn match_with<R, O, F>(self, on_ok: O, on_err: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R;

    /// Turns `Ok(v)` into `Err(error)` when `pred(&v)` is false.
    ///
    /// `error` is built eagerly; see [`filter_with`](ResultExt::filter_with)
    /// for the lazy form.
    fn filter<P>(self, pred: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool;

    /// Turns `Ok(v)` into `Err(factory(v))` when `pred(&v)` is false.
    ///
    /// The factory only runs for a rejected value and receives it by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::ResultExt;
    ///
    /// let checked = Ok::<i32, String>(-4).filter_with(|v| *v >= 0, |v| format!("{v} is negative"));
    /// assert_eq!(checked, Err("-4 is negative".to_string()));
    /// ```
    fn filter_with<P, F>(self, pred: P, factory: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E;

    /// Maps both channels at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::ResultExt;
    ///
    /// let r: Result<i32, &str> = Err("bad");
    /// assert_eq!(r.bimap(|v| v * 2, str::len), Err(3));
    /// ```
    fn bimap<U, G, OkF, ErrF>(self, ok_f: OkF, err_f: ErrF) -> Result<U, G>
    where
        OkF: FnOnce(T) -> U,
        ErrF: FnOnce(E) -> G;

    /// Exchanges the success and error channels.
    fn swap(self) -> Result<E, T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn select<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    #[inline]
    fn select_many<U, R, B, P>(self, binder: B, projector: P) -> Result<R, E>
    where
        B: FnOnce(&T) -> Result<U, E>,
        P: FnOnce(T, U) -> R,
    {
        match self {
            Ok(value) => binder(&value).map(|bound| projector(value, bound)),
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn match_with<R, O, F>(self, on_ok: O, on_err: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[inline]
    fn filter<P>(self, pred: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Ok(value) if pred(&value) => Ok(value),
            Ok(_) => Err(error),
            Err(e) => Err(e),
        }
    }

    #[inline]
    fn filter_with<P, F>(self, pred: P, factory: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        match self {
            Ok(value) if pred(&value) => Ok(value),
            Ok(value) => Err(factory(value)),
            Err(e) => Err(e),
        }
    }

    #[inline]
    fn bimap<U, G, OkF, ErrF>(self, ok_f: OkF, err_f: ErrF) -> Result<U, G>
    where
        OkF: FnOnce(T) -> U,
        ErrF: FnOnce(E) -> G,
    {
        match self {
            Ok(value) => Ok(ok_f(value)),
            Err(error) => Err(err_f(error)),
        }
    }

    #[inline]
    fn swap(self) -> Result<E, T> {
        match self {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }
    }
}

/// Collapses `Result<Result<T, E>, E>` by one level.
///
/// # Examples
///
/// ```
/// use value_rail::FlattenResult;
///
/// let nested: Result<Result<i32, &str>, &str> = Ok(Err("inner"));
/// assert_eq!(nested.flatten_result(), Err("inner"));
///
/// let nested: Result<Result<i32, &str>, &str> = Ok(Ok(1));
/// assert_eq!(nested.flatten_result(), Ok(1));
/// ```
pub trait FlattenResult<T, E> {
    /// Removes one level of nesting; the outer error wins if present.
    fn flatten_result(self) -> Result<T, E>;
}

impl<T, E> FlattenResult<T, E> for Result<Result<T, E>, E> {
    #[inline]
    fn flatten_result(self) -> Result<T, E> {
        match self {
            Ok(inner) => inner,
            Err(error) => Err(error),
        }
    }
}
