//! Tracing integration for value-rail.
//!
//! Emits a `tracing` event when a chain reaches `Err` or `None`, without
//! changing the value flowing through it.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! value-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

/// Logs the negative variant and passes the value through.
///
/// `Err` is reported at `warn` level with the error's `Debug` output, `None`
/// at `debug` level. `Ok` and `Some` emit nothing. Events use the
/// `value_rail` target so they can be filtered as one group.
///
/// # Example
///
/// ```
/// use value_rail::TraceExt;
///
/// let port: Result<u16, String> = Err("not a number".to_string());
/// let port = port.traced("parsing port").unwrap_or(8080);
/// assert_eq!(port, 8080);
/// ```
pub trait TraceExt: Sized {
    /// Emits an event labelled `label` if `self` is the negative variant.
    fn traced(self, label: &str) -> Self;
}

impl<T, E: Debug> TraceExt for Result<T, E> {
    fn traced(self, label: &str) -> Self {
        if let Err(error) = &self {
            tracing::warn!(target: "value_rail", label, ?error, "result is Err");
        }
        self
    }
}

impl<T> TraceExt for Option<T> {
    fn traced(self, label: &str) -> Self {
        if self.is_none() {
            tracing::debug!(target: "value_rail", label, "option is None");
        }
        self
    }
}
