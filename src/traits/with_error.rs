use crate::types::Absent;

/// Abstraction over types that carry an error variant which can be remapped.
///
/// This trait provides a generic interface for types that contain both success and error cases,
/// allowing transformation of the error type while preserving the success value.
/// `Option<T>` takes part with [`Absent`] as its error channel.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use value_rail::traits::WithError;
///
/// let result: Result<i32, &str> = Err("original error");
/// let mapped = result.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped, Err("Error: original error".to_string()));
///
/// let missing: Option<i32> = None;
/// assert_eq!(missing.fmap_error(|_| "absent"), Err("absent"));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// This operation leaves the success case untouched and only transforms the error.
    /// Containers holding several errors apply `f` to each of them in order.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from type `E` to type `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::traits::WithError;
    ///
    /// let result: Result<i32, u32> = Err(404);
    /// let mapped = result.fmap_error(|code| format!("HTTP {}", code));
    /// assert_eq!(mapped, Err("HTTP 404".to_string()));
    /// ```
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G;

    /// Converts the container into a `Result`.
    ///
    /// For types that are already `Result`, this is a no-op.
    /// For other types, this extracts the success/error into standard Result form.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::traits::WithError;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// assert_eq!(result.to_result(), Ok(42));
    /// ```
    fn to_result(self) -> Result<Self::Success, E>;
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    fn fmap_error<F, G>(self, mut f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Ok(t) => Ok(t),
            Err(e) => Err(f(e)),
        }
    }

    fn to_result(self) -> Result<Self::Success, E> {
        self
    }
}

impl<T> WithError<Absent> for Option<T> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    fn fmap_error<F, G>(self, mut f: F) -> Self::ErrorOutput<G>
    where
        F: FnMut(Absent) -> G,
    {
        match self {
            Some(t) => Ok(t),
            None => Err(f(Absent)),
        }
    }

    fn to_result(self) -> Result<T, Absent> {
        self.ok_or(Absent)
    }
}
